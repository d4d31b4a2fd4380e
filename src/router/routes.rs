// Route types and the compiled route table
// This file defines the flat output records consumed downstream. Wire
// names are a stable contract and must not change without a version bump
//
// Numan Thabit 2025 Nov

use crate::address::Address;
use crate::errors::ChainId;
use crate::router::spec::{PoolSpec, SpokePoolVerifier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validated permission to bridge `from_token_symbol` on `from_chain` to
/// `to_token_symbol` on `to_chain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRoute {
    pub from_chain: ChainId,
    pub to_chain: ChainId,
    pub from_token_address: Address,
    pub to_token_address: Address,
    /// Deposit contract on the origin chain.
    #[serde(rename = "fromSpokeAddress")]
    pub origin_contract_address: Address,
    pub from_token_symbol: String,
    pub to_token_symbol: String,
    #[serde(rename = "isNative")]
    pub is_native_asset: bool,
    pub l1_token_address: Address,
}

/// Bridge route preceded by a swap on the origin chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRoute {
    #[serde(flatten)]
    pub bridge: BridgeRoute,
    pub swap_token_address: Address,
    pub swap_token_symbol: String,
    #[serde(rename = "swapTokenL1TokenAddress")]
    pub swap_token_l1_address: Address,
}

/// Everything downstream code needs for one hub chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTable {
    pub hub_pool_chain: ChainId,
    pub hub_pool_address: Address,
    pub hub_pool_weth_address: Address,
    pub across_config_store_address: Address,
    pub across_token_address: Address,
    pub accelerating_distributor_address: Address,
    pub merkle_distributor_address: Address,
    pub claim_and_stake_address: Address,
    pub swap_and_bridge_addresses: BTreeMap<String, BTreeMap<ChainId, Address>>,
    pub routes: Vec<BridgeRoute>,
    pub swap_routes: Vec<SwapRoute>,
    pub pools: Vec<PoolSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spoke_pool_verifier: Option<SpokePoolVerifier>,
}
