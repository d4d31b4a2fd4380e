//! Synthetic registries and route specs shared by the integration tests

#![allow(dead_code)]

use route_compiler::router::{
    DestinationRoutes, HubRouteSpec, OriginRoutes, RouteCompiler, RouteSpecDocument, RouteTable,
    SwapTokenDecl, TokenDecl,
};
use route_compiler::tokens::TokenRegistry;
use route_compiler::{Address, ChainId, RouteError};
use std::collections::BTreeMap;

pub const HUB: ChainId = 1;
pub const CHAIN_A: ChainId = 10;
pub const CHAIN_B: ChainId = 42161;

/// Distinct address per (tag, chain).
pub fn addr(tag: u8, chain: ChainId) -> Address {
    let mut bytes = [0u8; 20];
    bytes[0] = tag;
    bytes[12..].copy_from_slice(&chain.to_be_bytes());
    Address::new(bytes)
}

pub const USDC: u8 = 0x10;
pub const USDC_E: u8 = 0x11;
pub const WETH: u8 = 0x20;
pub const ACX: u8 = 0x30;
pub const SPOKE: u8 = 0xf0;

/// USDC/USDC.e/WETH/ETH on the hub and both spokes; ETH shares WETH's
/// addresses, USDC.e only exists on the spokes.
pub fn registry() -> TokenRegistry {
    let mut registry = TokenRegistry::new();
    for chain in [HUB, CHAIN_A, CHAIN_B] {
        registry.insert("USDC", chain, addr(USDC, chain));
        registry.insert("WETH", chain, addr(WETH, chain));
        registry.insert("ETH", chain, addr(WETH, chain));
    }
    for chain in [CHAIN_A, CHAIN_B] {
        registry.insert("USDC.e", chain, addr(USDC_E, chain));
    }
    registry.insert("ACX", HUB, addr(ACX, HUB));
    registry
}

pub fn same(symbol: &str) -> TokenDecl {
    TokenDecl::Same(symbol.to_string())
}

pub fn pair(input: &str, output: &str) -> TokenDecl {
    TokenDecl::pair(input, output)
}

pub fn swap(swap_input: &str, input: &str, output: &str) -> SwapTokenDecl {
    SwapTokenDecl {
        swap_input_symbol: swap_input.to_string(),
        bridge_input_symbol: input.to_string(),
        bridge_output_symbol: output.to_string(),
    }
}

pub fn dest(chain_id: ChainId, tokens: Vec<TokenDecl>, swap_tokens: Vec<SwapTokenDecl>) -> DestinationRoutes {
    DestinationRoutes {
        chain_id,
        tokens,
        swap_tokens,
    }
}

pub fn origin(from_chain: ChainId, to_chains: Vec<DestinationRoutes>) -> OriginRoutes {
    OriginRoutes {
        from_chain,
        from_spoke_address: addr(SPOKE, from_chain),
        native_token_symbol: None,
        to_chains,
    }
}

pub fn hub_spec(routes: Vec<OriginRoutes>) -> HubRouteSpec {
    HubRouteSpec {
        hub_pool_chain: HUB,
        hub_pool_address: addr(0xa1, HUB),
        across_config_store_address: addr(0xa2, HUB),
        accelerating_distributor_address: addr(0xa3, HUB),
        merkle_distributor_address: addr(0xa4, HUB),
        claim_and_stake_address: addr(0xa5, HUB),
        wrapped_native_token_symbol: "WETH".to_string(),
        protocol_token_symbol: "ACX".to_string(),
        native_token_symbol: "ETH".to_string(),
        swap_and_bridge_addresses: BTreeMap::new(),
        pools: vec![],
        spoke_pool_verifier: None,
        routes,
    }
}

pub fn document(routes: Vec<OriginRoutes>) -> RouteSpecDocument {
    RouteSpecDocument::new([hub_spec(routes)]).unwrap()
}

pub fn compile(spec: &RouteSpecDocument, registry: &TokenRegistry) -> Result<RouteTable, RouteError> {
    RouteCompiler::new(spec, registry).compile(HUB)
}
