// Route spec schema
// Typed model of the hand-authored route declarations: one entry per hub
// chain, each listing origin chains and the destination chains/tokens they
// may bridge to. Malformed documents are rejected here, at load time
//
// Numan Thabit 2025 Nov

use crate::address::Address;
use crate::errors::{ChainId, RouteError};
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

fn default_wrapped_native_symbol() -> String {
    "WETH".to_string()
}

fn default_protocol_symbol() -> String {
    "ACX".to_string()
}

fn default_native_symbol() -> String {
    "ETH".to_string()
}

/// Whole route spec document, keyed by hub chain id. Every constructor
/// runs `validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSpecDocument {
    hubs: BTreeMap<ChainId, HubRouteSpec>,
}

impl RouteSpecDocument {
    /// Build a document from hub entries, keyed by their `hub_pool_chain`.
    pub fn new(hubs: impl IntoIterator<Item = HubRouteSpec>) -> Result<Self> {
        let mut by_chain = BTreeMap::new();
        for hub in hubs {
            let chain = hub.hub_pool_chain;
            ensure!(
                by_chain.insert(chain, hub).is_none(),
                "hub chain {chain} declared twice"
            );
        }
        let doc = Self { hubs: by_chain };
        doc.validate()?;
        Ok(doc)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let hubs: BTreeMap<ChainId, HubRouteSpec> =
            serde_yaml::from_str(raw).context("parse route spec")?;
        let doc = Self { hubs };
        doc.validate()?;
        Ok(doc)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read route spec {}", path.display()))?;
        Self::from_yaml_str(&raw).with_context(|| format!("load {}", path.display()))
    }

    pub fn hub(&self, hub_chain_id: ChainId) -> Result<&HubRouteSpec, RouteError> {
        self.hubs
            .get(&hub_chain_id)
            .ok_or(RouteError::UnsupportedHubChain(hub_chain_id))
    }

    pub fn hub_chain_ids(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.hubs.keys().copied()
    }

    /// Structural checks that do not need the token registry.
    pub fn validate(&self) -> Result<()> {
        for (key, hub) in &self.hubs {
            ensure!(
                hub.hub_pool_chain == *key,
                "hub entry {key} declares hubPoolChain {}",
                hub.hub_pool_chain
            );
            for symbol in [
                &hub.wrapped_native_token_symbol,
                &hub.protocol_token_symbol,
                &hub.native_token_symbol,
            ] {
                ensure!(!symbol.is_empty(), "hub {key}: empty token symbol");
            }

            let mut origins = BTreeSet::new();
            for origin in &hub.routes {
                ensure!(
                    origins.insert(origin.from_chain),
                    "hub {key}: origin chain {} declared twice",
                    origin.from_chain
                );
                origin
                    .validate()
                    .with_context(|| format!("hub {key}: origin chain {}", origin.from_chain))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HubRouteSpec {
    pub hub_pool_chain: ChainId,
    pub hub_pool_address: Address,
    pub across_config_store_address: Address,
    pub accelerating_distributor_address: Address,
    pub merkle_distributor_address: Address,
    pub claim_and_stake_address: Address,
    /// Resolved on the hub chain to produce `hubPoolWethAddress`.
    #[serde(default = "default_wrapped_native_symbol")]
    pub wrapped_native_token_symbol: String,
    /// Resolved on the hub chain to produce `acrossTokenAddress`.
    #[serde(default = "default_protocol_symbol")]
    pub protocol_token_symbol: String,
    /// Native gas symbol; origins may override it.
    #[serde(default = "default_native_symbol")]
    pub native_token_symbol: String,
    /// Swap provider -> chain -> swap-and-bridge router.
    #[serde(default)]
    pub swap_and_bridge_addresses: BTreeMap<String, BTreeMap<ChainId, Address>>,
    #[serde(default)]
    pub pools: Vec<PoolSpec>,
    #[serde(default)]
    pub spoke_pool_verifier: Option<SpokePoolVerifier>,
    pub routes: Vec<OriginRoutes>,
}

impl HubRouteSpec {
    pub fn native_symbol_for<'a>(&'a self, origin: &'a OriginRoutes) -> &'a str {
        origin
            .native_token_symbol
            .as_deref()
            .unwrap_or(&self.native_token_symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OriginRoutes {
    pub from_chain: ChainId,
    /// Deposit contract on the origin chain.
    pub from_spoke_address: Address,
    #[serde(default)]
    pub native_token_symbol: Option<String>,
    pub to_chains: Vec<DestinationRoutes>,
}

impl OriginRoutes {
    fn validate(&self) -> Result<()> {
        if let Some(native) = &self.native_token_symbol {
            ensure!(!native.is_empty(), "empty nativeTokenSymbol");
        }

        let mut destinations = BTreeSet::new();
        for dest in &self.to_chains {
            ensure!(
                dest.chain_id != self.from_chain,
                "destination chain {} equals its origin",
                dest.chain_id
            );
            ensure!(
                destinations.insert(dest.chain_id),
                "destination chain {} declared twice",
                dest.chain_id
            );
            for token in &dest.tokens {
                let (input, output) = token.symbols();
                ensure!(
                    !input.is_empty() && !output.is_empty(),
                    "destination chain {}: empty token symbol",
                    dest.chain_id
                );
            }
            for swap in &dest.swap_tokens {
                ensure!(
                    !swap.swap_input_symbol.is_empty()
                        && !swap.bridge_input_symbol.is_empty()
                        && !swap.bridge_output_symbol.is_empty(),
                    "destination chain {}: empty swap token symbol",
                    dest.chain_id
                );
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DestinationRoutes {
    pub chain_id: ChainId,
    #[serde(default)]
    pub tokens: Vec<TokenDecl>,
    #[serde(default)]
    pub swap_tokens: Vec<SwapTokenDecl>,
}

/// A bridgeable token: either the same symbol on both ends, or an explicit
/// input/output pair for assets named differently on each chain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TokenDecl {
    Same(String),
    Pair(TokenPair),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TokenPair {
    pub input_token_symbol: String,
    pub output_token_symbol: String,
}

impl TokenDecl {
    pub fn pair(input: impl Into<String>, output: impl Into<String>) -> Self {
        TokenDecl::Pair(TokenPair {
            input_token_symbol: input.into(),
            output_token_symbol: output.into(),
        })
    }

    /// `(input_symbol, output_symbol)`
    pub fn symbols(&self) -> (&str, &str) {
        match self {
            TokenDecl::Same(symbol) => (symbol, symbol),
            TokenDecl::Pair(pair) => (&pair.input_token_symbol, &pair.output_token_symbol),
        }
    }
}

/// Swap on the origin chain into `bridge_input_symbol`, then bridge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwapTokenDecl {
    #[serde(rename = "swapInputTokenSymbol")]
    pub swap_input_symbol: String,
    #[serde(rename = "acrossInputTokenSymbol")]
    pub bridge_input_symbol: String,
    #[serde(rename = "acrossOutputTokenSymbol")]
    pub bridge_output_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PoolSpec {
    pub token_symbol: String,
    pub is_native: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpokePoolVerifier {
    pub address: Address,
    pub enabled_chains: Vec<ChainId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = r#"
1:
  hubPoolChain: 1
  hubPoolAddress: "0xc186fa914353c44b2e33ebe05f21846f1048beda"
  acrossConfigStoreAddress: "0x3B03509645713718B78951126E0A6de6f10043f5"
  acceleratingDistributorAddress: "0x9040e41eF5E8b281535a96D9a48aCb8cfaBD9a48"
  merkleDistributorAddress: "0xE50b2cEAC4f60E840Ae513924033E753e2366487"
  claimAndStakeAddress: "0x985e8A89Dd6Af8896Ef075c8dd93512433dc5829"
  pools:
    - tokenSymbol: BOBA
      isNative: false
  routes:
    - fromChain: 10
      fromSpokeAddress: "0x6f26Bf09B1C792e3228e5467807a900A503c0281"
      toChains:
        - chainId: 1
          tokens:
            - WETH
            - inputTokenSymbol: USDC
              outputTokenSymbol: USDC
          swapTokens:
            - swapInputTokenSymbol: USDC.e
              acrossInputTokenSymbol: USDC
              acrossOutputTokenSymbol: USDC
        - chainId: 42161
"#;

    #[test]
    fn parses_nested_declarations() {
        let doc = RouteSpecDocument::from_yaml_str(SPEC).unwrap();
        let hub = doc.hub(1).unwrap();
        assert_eq!(hub.wrapped_native_token_symbol, "WETH");
        assert_eq!(hub.protocol_token_symbol, "ACX");
        assert_eq!(hub.native_token_symbol, "ETH");
        assert_eq!(hub.pools.len(), 1);
        assert!(hub.spoke_pool_verifier.is_none());

        let origin = &hub.routes[0];
        assert_eq!(hub.native_symbol_for(origin), "ETH");
        let to_mainnet = &origin.to_chains[0];
        assert_eq!(to_mainnet.tokens[0], TokenDecl::Same("WETH".to_string()));
        assert_eq!(to_mainnet.tokens[1].symbols(), ("USDC", "USDC"));
        assert_eq!(to_mainnet.swap_tokens[0].swap_input_symbol, "USDC.e");

        let to_arbitrum = &origin.to_chains[1];
        assert!(to_arbitrum.tokens.is_empty());
        assert!(to_arbitrum.swap_tokens.is_empty());
    }

    #[test]
    fn unknown_hub_is_unsupported() {
        let doc = RouteSpecDocument::from_yaml_str(SPEC).unwrap();
        assert_eq!(doc.hub(5).unwrap_err(), RouteError::UnsupportedHubChain(5));
        assert_eq!(doc.hub_chain_ids().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn rejects_malformed_token_declaration() {
        let bad = SPEC.replace("outputTokenSymbol: USDC\n", "outputSymbol: USDC\n");
        assert!(RouteSpecDocument::from_yaml_str(&bad).is_err());
    }

    #[test]
    fn rejects_mismatched_hub_key() {
        let bad = SPEC.replacen("hubPoolChain: 1", "hubPoolChain: 11155111", 1);
        let err = RouteSpecDocument::from_yaml_str(&bad).unwrap_err();
        assert!(format!("{err:#}").contains("declares hubPoolChain 11155111"));
    }

    #[test]
    fn rejects_self_route_and_duplicate_destination() {
        let self_route = SPEC.replace("- chainId: 42161", "- chainId: 10");
        let err = RouteSpecDocument::from_yaml_str(&self_route).unwrap_err();
        assert!(format!("{err:#}").contains("equals its origin"));

        let duplicate = SPEC.replace("- chainId: 42161", "- chainId: 1");
        let err = RouteSpecDocument::from_yaml_str(&duplicate).unwrap_err();
        assert!(format!("{err:#}").contains("declared twice"));
    }

    #[test]
    fn constructor_validates_hub_entries() {
        let doc = RouteSpecDocument::from_yaml_str(SPEC).unwrap();
        let hub = doc.hub(1).unwrap().clone();
        assert_eq!(RouteSpecDocument::new([hub.clone()]).unwrap(), doc);

        let err = RouteSpecDocument::new([hub.clone(), hub.clone()]).unwrap_err();
        assert!(err.to_string().contains("hub chain 1 declared twice"));

        let mut self_route = hub;
        self_route.routes[0].to_chains[1].chain_id = 10;
        let err = RouteSpecDocument::new([self_route]).unwrap_err();
        assert!(format!("{err:#}").contains("equals its origin"));
    }
}
