// Token resolver module
// Turns a (symbol, chain) pair into a token record carrying the asset's
// canonical hub-chain address, folding bridged aliases onto their
// canonical symbol for that lookup
//
// Numan Thabit 2025 Nov

use crate::address::Address;
use crate::errors::{ChainId, RouteError};
use crate::tokens::registry::TokenSource;

/// Locally-bridged USDC variants and the hub symbol they stand for.
const BRIDGED_USDC: &[(&str, &str)] = &[("USDC.e", "USDC"), ("USDbC", "USDC")];

/// Closed set of symbols whose canonical identity lives under another
/// symbol on the hub chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgedAliasSet {
    entries: &'static [(&'static str, &'static str)],
}

impl BridgedAliasSet {
    /// Symbol to look up on the hub chain for `symbol`.
    pub fn canonical<'a>(&self, symbol: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(alias, _)| *alias == symbol)
            .map(|(_, canonical)| *canonical)
            .unwrap_or(symbol)
    }

    pub fn is_alias(&self, symbol: &str) -> bool {
        self.entries.iter().any(|(alias, _)| *alias == symbol)
    }
}

impl Default for BridgedAliasSet {
    fn default() -> Self {
        Self {
            entries: BRIDGED_USDC,
        }
    }
}

/// A token as deployed on one chain, tagged with its hub-chain identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub chain_id: ChainId,
    pub address: Address,
    pub symbol: String,
    /// Canonical identity: two records are the same asset iff these match.
    pub l1_token_address: Address,
}

pub struct TokenResolver<'a, S: ?Sized> {
    source: &'a S,
    aliases: BridgedAliasSet,
}

impl<'a, S: TokenSource + ?Sized> TokenResolver<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            aliases: BridgedAliasSet::default(),
        }
    }

    pub fn resolve(
        &self,
        symbol: &str,
        chain_id: ChainId,
        hub_chain_id: ChainId,
    ) -> Result<TokenRecord, RouteError> {
        let address =
            self.source
                .address(symbol, chain_id)
                .ok_or_else(|| RouteError::UnknownTokenOnChain {
                    symbol: symbol.to_string(),
                    chain_id,
                })?;

        let l1_token_address = self
            .source
            .address(self.aliases.canonical(symbol), hub_chain_id)
            .ok_or_else(|| RouteError::UnknownL1Token {
                symbol: symbol.to_string(),
                hub_chain_id,
            })?;

        Ok(TokenRecord {
            chain_id,
            address,
            symbol: symbol.to_string(),
            l1_token_address,
        })
    }
}
