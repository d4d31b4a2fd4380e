// Asset identity validation
// Every route is built through `ensure_same_asset`; nothing is emitted for a
// pair whose tokens resolve to different hub-chain assets
//
// Numan Thabit 2025 Nov

use crate::errors::RouteError;
use crate::tokens::TokenRecord;

/// Two tokens are the same asset iff their hub-chain addresses match.
pub fn same_asset(a: &TokenRecord, b: &TokenRecord) -> bool {
    a.l1_token_address == b.l1_token_address
}

/// Fails with `AssetIdentityMismatch` unless `input` (origin side) and
/// `output` (destination side) are the same asset.
pub fn ensure_same_asset(input: &TokenRecord, output: &TokenRecord) -> Result<(), RouteError> {
    if same_asset(input, output) {
        return Ok(());
    }
    Err(RouteError::AssetIdentityMismatch {
        origin_chain: input.chain_id,
        destination_chain: output.chain_id,
        input_symbol: input.symbol.clone(),
        output_symbol: output.symbol.clone(),
    })
}
