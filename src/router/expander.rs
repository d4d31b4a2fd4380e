// Bridge route expander
// Flattens one origin chain's nested destination/token declarations into
// direct bridge routes, in declaration order
//
// Numan Thabit 2025 Nov

use crate::errors::{ChainId, RouteError, RouteKind};
use crate::router::routes::BridgeRoute;
use crate::router::spec::OriginRoutes;
use crate::router::validation::ensure_same_asset;
use crate::tokens::{TokenResolver, TokenSource};
use std::collections::BTreeSet;
use tracing::debug;

/// Expands route declarations against one registry snapshot and hub chain.
pub struct RouteExpander<'a, S: ?Sized> {
    pub(crate) resolver: TokenResolver<'a, S>,
    pub(crate) hub_chain_id: ChainId,
}

impl<'a, S: TokenSource + ?Sized> RouteExpander<'a, S> {
    pub fn new(source: &'a S, hub_chain_id: ChainId) -> Self {
        Self {
            resolver: TokenResolver::new(source),
            hub_chain_id,
        }
    }

    pub fn resolver(&self) -> &TokenResolver<'a, S> {
        &self.resolver
    }

    /// One route per (destination chain, token declaration). Any failure is
    /// wrapped with the origin/destination pair that triggered it.
    #[tracing::instrument(skip_all, fields(from_chain = origin.from_chain))]
    pub fn expand_bridge_routes(
        &self,
        origin: &OriginRoutes,
        native_symbol: &str,
    ) -> Result<Vec<BridgeRoute>, RouteError> {
        let mut routes = Vec::new();
        let mut seen = BTreeSet::new();

        for dest in &origin.to_chains {
            for token in &dest.tokens {
                let (input_symbol, output_symbol) = token.symbols();
                if !seen.insert((dest.chain_id, input_symbol, output_symbol)) {
                    return Err(RouteError::DuplicateRoute {
                        kind: RouteKind::Bridge,
                        from_chain: origin.from_chain,
                        to_chain: dest.chain_id,
                        input_symbol: input_symbol.to_string(),
                        output_symbol: output_symbol.to_string(),
                    });
                }

                let route = self
                    .bridge_leg(origin, dest.chain_id, input_symbol, output_symbol, native_symbol)
                    .map_err(|e| e.in_route(RouteKind::Bridge, origin.from_chain, dest.chain_id))?;
                debug!(
                    to_chain = route.to_chain,
                    from_token = %route.from_token_symbol,
                    to_token = %route.to_token_symbol,
                    l1_token = %route.l1_token_address,
                    "bridge route"
                );
                routes.push(route);
            }
        }

        Ok(routes)
    }

    /// Resolve both ends of a declared pair and check they are one asset.
    /// Errors are returned bare; callers add route context.
    pub(crate) fn bridge_leg(
        &self,
        origin: &OriginRoutes,
        to_chain: ChainId,
        input_symbol: &str,
        output_symbol: &str,
        native_symbol: &str,
    ) -> Result<BridgeRoute, RouteError> {
        let input = self
            .resolver
            .resolve(input_symbol, origin.from_chain, self.hub_chain_id)?;
        let output = self
            .resolver
            .resolve(output_symbol, to_chain, self.hub_chain_id)?;
        ensure_same_asset(&input, &output)?;

        Ok(BridgeRoute {
            from_chain: origin.from_chain,
            to_chain,
            from_token_address: input.address,
            to_token_address: output.address,
            origin_contract_address: origin.from_spoke_address,
            is_native_asset: input.symbol == native_symbol,
            from_token_symbol: input.symbol,
            to_token_symbol: output.symbol,
            l1_token_address: input.l1_token_address,
        })
    }
}
