// Error types for route compilation
// This file defines the structured failures raised while resolving tokens
// and expanding declared routes, plus the context wrapper used to say
// which declaration broke
//
// Numan Thabit 2025 Nov

use std::fmt;
use thiserror::Error;

/// Opaque chain identifier.
pub type ChainId = u64;

/// Which expander produced a route (or failed to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Bridge,
    Swap,
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKind::Bridge => f.write_str("bridge"),
            RouteKind::Swap => f.write_str("swap"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("could not find address for {symbol} on chain {chain_id}")]
    UnknownTokenOnChain { symbol: String, chain_id: ChainId },
    #[error("could not find L1 token address for {symbol} on hub chain {hub_chain_id}")]
    UnknownL1Token { symbol: String, hub_chain_id: ChainId },
    #[error(
        "mismatching L1 addresses: {input_symbol} on chain {origin_chain} \
         and {output_symbol} on chain {destination_chain} are different assets"
    )]
    AssetIdentityMismatch {
        origin_chain: ChainId,
        destination_chain: ChainId,
        input_symbol: String,
        output_symbol: String,
    },
    #[error("hub chain {0} not supported")]
    UnsupportedHubChain(ChainId),
    #[error("duplicate {kind} route {from_chain}->{to_chain}: {input_symbol} -> {output_symbol}")]
    DuplicateRoute {
        kind: RouteKind,
        from_chain: ChainId,
        to_chain: ChainId,
        input_symbol: String,
        output_symbol: String,
    },
    /// The inner failure is rendered in the message and not exposed as
    /// `source()`.
    #[error("failed to transform {kind} route {from_chain}->{to_chain}: {cause}")]
    Route {
        kind: RouteKind,
        from_chain: ChainId,
        to_chain: ChainId,
        cause: Box<RouteError>,
    },
}

impl RouteError {
    /// Attach origin/destination context to a failure raised while
    /// expanding one declared pair.
    pub fn in_route(self, kind: RouteKind, from_chain: ChainId, to_chain: ChainId) -> Self {
        RouteError::Route {
            kind,
            from_chain,
            to_chain,
            cause: Box::new(self),
        }
    }

    /// The innermost failure, with every context wrapper peeled off.
    pub fn root(&self) -> &RouteError {
        let mut err = self;
        while let RouteError::Route { cause, .. } = err {
            err = cause;
        }
        err
    }
}
