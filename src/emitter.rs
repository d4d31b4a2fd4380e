// Route table emitter
// Serializes a compiled route table to a stable, diff-friendly JSON document
// and writes it atomically into the output directory
//
// Numan Thabit 2025 Nov

use crate::errors::ChainId;
use crate::router::{RouteCompiler, RouteTable};
use crate::tokens::TokenSource;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct RouteTableEmitter {
    output_dir: PathBuf,
}

impl RouteTableEmitter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `routes_<hubChainId>_<hubPoolAddress>.json`
    pub fn file_name(table: &RouteTable) -> String {
        format!(
            "routes_{}_{}.json",
            table.hub_pool_chain, table.hub_pool_address
        )
    }

    /// Pretty-printed JSON with a trailing newline. Identical tables render
    /// to identical bytes.
    pub fn render(table: &RouteTable) -> Result<String> {
        let mut out = serde_json::to_string_pretty(table).context("serialize route table")?;
        out.push('\n');
        Ok(out)
    }

    /// Write the table, replacing any previous file for the same hub pool.
    /// The destination is only touched once the whole document is on disk.
    pub fn write(&self, table: &RouteTable) -> Result<PathBuf> {
        let rendered = Self::render(table)?;
        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("create output dir {}", self.output_dir.display()))?;

        let file_name = Self::file_name(table);
        let path = self.output_dir.join(&file_name);
        let tmp = self.output_dir.join(format!(".{file_name}.tmp"));

        fs::write(&tmp, rendered.as_bytes())
            .with_context(|| format!("write {}", tmp.display()))?;
        if let Err(err) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(err).with_context(|| format!("move {} into place", path.display()));
        }

        info!(
            path = %path.display(),
            routes = table.routes.len(),
            swap_routes = table.swap_routes.len(),
            "route table written"
        );
        Ok(path)
    }

    /// Compile `hub_chain_id` and write the result. A failed compilation
    /// leaves the output directory untouched.
    pub fn compile_and_write<S: TokenSource + ?Sized>(
        &self,
        compiler: &RouteCompiler<'_, S>,
        hub_chain_id: ChainId,
    ) -> Result<PathBuf> {
        let table = compiler
            .compile(hub_chain_id)
            .with_context(|| format!("compile routes for hub chain {hub_chain_id}"))?;
        self.write(&table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use std::collections::BTreeMap;

    fn table() -> RouteTable {
        RouteTable {
            hub_pool_chain: 1,
            hub_pool_address: "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap(),
            hub_pool_weth_address: Address::new([0x01; 20]),
            across_config_store_address: Address::new([0x02; 20]),
            across_token_address: Address::new([0x03; 20]),
            accelerating_distributor_address: Address::new([0x04; 20]),
            merkle_distributor_address: Address::new([0x05; 20]),
            claim_and_stake_address: Address::new([0x06; 20]),
            swap_and_bridge_addresses: BTreeMap::new(),
            routes: vec![],
            swap_routes: vec![],
            pools: vec![],
            spoke_pool_verifier: None,
        }
    }

    #[test]
    fn file_name_uses_checksummed_hub_pool() {
        assert_eq!(
            RouteTableEmitter::file_name(&table()),
            "routes_1_0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed.json"
        );
    }

    #[test]
    fn render_starts_with_hub_metadata() {
        let out = RouteTableEmitter::render(&table()).unwrap();
        assert!(out.ends_with("}\n"));
        let first_key = out.lines().nth(1).unwrap().trim();
        assert!(first_key.starts_with("\"hubPoolChain\": 1"), "{first_key}");
        assert!(!out.contains("spokePoolVerifier"));
    }

    #[test]
    fn write_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let emitter = RouteTableEmitter::new(dir.path().join("nested/data"));
        let path = emitter.write(&table()).unwrap();

        assert_eq!(path.parent(), Some(emitter.output_dir()));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, RouteTableEmitter::render(&table()).unwrap());
    }

    #[test]
    fn failed_rename_removes_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join(RouteTableEmitter::file_name(&table()));
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), b"x").unwrap();

        let emitter = RouteTableEmitter::new(dir.path());
        assert!(emitter.write(&table()).is_err());

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![RouteTableEmitter::file_name(&table())]);
    }
}
