// Token registry module
// Symbol -> chain -> address lookup table loaded from static configuration
// and handed to the resolver as an explicit, read-only dependency
//
// Numan Thabit 2025 Nov

use crate::address::Address;
use crate::errors::ChainId;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Pure lookup capability the resolver needs from a registry.
pub trait TokenSource {
    /// Address of `symbol` deployed on `chain_id`, if the registry knows it.
    fn address(&self, symbol: &str, chain_id: ChainId) -> Option<Address>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenEntry {
    #[serde(default)]
    pub addresses: BTreeMap<ChainId, Address>,
}

/// In-memory token registry keyed by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TokenRegistry {
    tokens: BTreeMap<String, TokenEntry>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        serde_yaml::from_str(raw).context("parse token registry")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read token registry {}", path.display()))?;
        Self::from_yaml_str(&raw).with_context(|| format!("load {}", path.display()))
    }

    pub fn insert(&mut self, symbol: impl Into<String>, chain_id: ChainId, address: Address) {
        self.tokens
            .entry(symbol.into())
            .or_default()
            .addresses
            .insert(chain_id, address);
    }

    /// Builder-style `insert`, handy for assembling synthetic registries.
    pub fn with_token(mut self, symbol: impl Into<String>, chain_id: ChainId, address: Address) -> Self {
        self.insert(symbol, chain_id, address);
        self
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl TokenSource for TokenRegistry {
    fn address(&self, symbol: &str, chain_id: ChainId) -> Option<Address> {
        self.tokens
            .get(symbol)
            .and_then(|entry| entry.addresses.get(&chain_id))
            .copied()
    }
}
