// Configuration management module
// This file handles loading of runtime settings from environment variables
// and of the two static input documents (route spec, token registry)
//
// Numan Thabit 2025 Nov

use crate::errors::ChainId;
use crate::router::RouteSpecDocument;
use crate::tokens::TokenRegistry;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Primary hub chain (Ethereum mainnet).
pub const DEFAULT_HUB_CHAIN_ID: ChainId = 1;

const ENV_PREFIX: &str = "ROUTEGEN";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Route spec document, e.g. config/routes.yaml
    pub route_spec: PathBuf,
    /// Token registry document, e.g. config/tokens.yaml
    pub token_registry: PathBuf,
    /// Directory receiving routes_<hub>_<hubPool>.json
    pub output_dir: PathBuf,
    /// Hub chain to compile when none is given on the command line
    pub hub_chain_id: ChainId,
}

impl AppConfig {
    /// Load from `ROUTEGEN_*` environment variables over built-in defaults.
    pub fn load() -> Result<Self> {
        Self::from_env(None)
    }

    /// Same as `load`, reading variables from `vars` instead of the process
    /// environment when given.
    pub fn from_env(vars: Option<HashMap<String, String>>) -> Result<Self> {
        let cfg = config::Config::builder()
            .set_default("route_spec", "config/routes.yaml")?
            .set_default("token_registry", "config/tokens.yaml")?
            .set_default("output_dir", "src/data")?
            .set_default("hub_chain_id", DEFAULT_HUB_CHAIN_ID)?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;
        Ok(cfg.try_deserialize()?)
    }

    /// A hub chain given on the command line wins over configuration.
    pub fn with_hub_chain_id(mut self, hub_chain_id: Option<ChainId>) -> Self {
        if let Some(id) = hub_chain_id {
            self.hub_chain_id = id;
        }
        self
    }

    pub fn load_route_spec(&self) -> Result<RouteSpecDocument> {
        debug!(path = %self.route_spec.display(), "loading route spec");
        RouteSpecDocument::load(&self.route_spec).context("load route spec")
    }

    pub fn load_token_registry(&self) -> Result<TokenRegistry> {
        debug!(path = %self.token_registry.display(), "loading token registry");
        TokenRegistry::load(&self.token_registry).context("load token registry")
    }
}
