// Route table compiler
// Drives both expanders over every origin of one hub entry and assembles the
// complete, validated route table. Either the whole table compiles or
// nothing is returned
//
// Numan Thabit 2025 Nov

use crate::errors::{ChainId, RouteError};
use crate::router::expander::RouteExpander;
use crate::router::routes::RouteTable;
use crate::router::spec::RouteSpecDocument;
use crate::tokens::TokenSource;
use tracing::info;

pub struct RouteCompiler<'a, S: ?Sized> {
    spec: &'a RouteSpecDocument,
    registry: &'a S,
}

impl<'a, S: TokenSource + ?Sized> RouteCompiler<'a, S> {
    pub fn new(spec: &'a RouteSpecDocument, registry: &'a S) -> Self {
        Self { spec, registry }
    }

    #[tracing::instrument(skip(self))]
    pub fn compile(&self, hub_chain_id: ChainId) -> Result<RouteTable, RouteError> {
        let hub = self.spec.hub(hub_chain_id)?;
        let expander = RouteExpander::new(self.registry, hub.hub_pool_chain);
        let resolver = expander.resolver();

        let hub_pool_weth_address = resolver
            .resolve(&hub.wrapped_native_token_symbol, hub_chain_id, hub_chain_id)?
            .address;
        let across_token_address = resolver
            .resolve(&hub.protocol_token_symbol, hub_chain_id, hub_chain_id)?
            .address;

        let mut routes = Vec::new();
        let mut swap_routes = Vec::new();
        for origin in &hub.routes {
            let native_symbol = hub.native_symbol_for(origin);
            routes.extend(expander.expand_bridge_routes(origin, native_symbol)?);
            swap_routes.extend(expander.expand_swap_routes(origin, native_symbol)?);
        }

        info!(
            hub_chain = hub_chain_id,
            origins = hub.routes.len(),
            routes = routes.len(),
            swap_routes = swap_routes.len(),
            "compiled route table"
        );

        Ok(RouteTable {
            hub_pool_chain: hub.hub_pool_chain,
            hub_pool_address: hub.hub_pool_address,
            hub_pool_weth_address,
            across_config_store_address: hub.across_config_store_address,
            across_token_address,
            accelerating_distributor_address: hub.accelerating_distributor_address,
            merkle_distributor_address: hub.merkle_distributor_address,
            claim_and_stake_address: hub.claim_and_stake_address,
            swap_and_bridge_addresses: hub.swap_and_bridge_addresses.clone(),
            routes,
            swap_routes,
            pools: hub.pools.clone(),
            spoke_pool_verifier: hub.spoke_pool_verifier.clone(),
        })
    }
}
