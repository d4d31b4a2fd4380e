// Swap route expander
// Expands swap-then-bridge declarations. The swap leg is resolved on the
// origin chain only; the bridge leg goes through the same per-pair logic
// as direct routes
//
// Numan Thabit 2025 Nov

use crate::errors::{ChainId, RouteError, RouteKind};
use crate::router::expander::RouteExpander;
use crate::router::routes::SwapRoute;
use crate::router::spec::{OriginRoutes, SwapTokenDecl};
use crate::tokens::TokenSource;
use std::collections::BTreeSet;
use tracing::debug;

impl<'a, S: TokenSource + ?Sized> RouteExpander<'a, S> {
    /// One swap route per (destination chain, swap declaration).
    #[tracing::instrument(skip_all, fields(from_chain = origin.from_chain))]
    pub fn expand_swap_routes(
        &self,
        origin: &OriginRoutes,
        native_symbol: &str,
    ) -> Result<Vec<SwapRoute>, RouteError> {
        let mut routes = Vec::new();
        let mut seen = BTreeSet::new();

        for dest in &origin.to_chains {
            for decl in &dest.swap_tokens {
                let key = (
                    dest.chain_id,
                    decl.swap_input_symbol.as_str(),
                    decl.bridge_input_symbol.as_str(),
                    decl.bridge_output_symbol.as_str(),
                );
                if !seen.insert(key) {
                    return Err(RouteError::DuplicateRoute {
                        kind: RouteKind::Swap,
                        from_chain: origin.from_chain,
                        to_chain: dest.chain_id,
                        input_symbol: format!(
                            "{} (via {})",
                            decl.bridge_input_symbol, decl.swap_input_symbol
                        ),
                        output_symbol: decl.bridge_output_symbol.clone(),
                    });
                }

                let route = self
                    .swap_route(origin, dest.chain_id, decl, native_symbol)
                    .map_err(|e| e.in_route(RouteKind::Swap, origin.from_chain, dest.chain_id))?;
                debug!(
                    to_chain = route.bridge.to_chain,
                    swap_token = %route.swap_token_symbol,
                    from_token = %route.bridge.from_token_symbol,
                    to_token = %route.bridge.to_token_symbol,
                    "swap route"
                );
                routes.push(route);
            }
        }

        Ok(routes)
    }

    fn swap_route(
        &self,
        origin: &OriginRoutes,
        to_chain: ChainId,
        decl: &SwapTokenDecl,
        native_symbol: &str,
    ) -> Result<SwapRoute, RouteError> {
        let swap_token =
            self.resolver
                .resolve(&decl.swap_input_symbol, origin.from_chain, self.hub_chain_id)?;
        let bridge = self.bridge_leg(
            origin,
            to_chain,
            &decl.bridge_input_symbol,
            &decl.bridge_output_symbol,
            native_symbol,
        )?;

        Ok(SwapRoute {
            bridge,
            swap_token_address: swap_token.address,
            swap_token_symbol: swap_token.symbol,
            swap_token_l1_address: swap_token.l1_token_address,
        })
    }
}
