// Router module - route spec compilation
// This module expands the declarative route spec into flat bridge and
// swap routes, validating asset identity for every declared pair
//
// Numan Thabit 2025 Nov

pub mod compiler;
pub mod expander;
pub mod routes;
pub mod spec;
pub mod swap;
pub mod validation;

pub use compiler::RouteCompiler;
pub use expander::RouteExpander;
pub use routes::{BridgeRoute, RouteTable, SwapRoute};
pub use spec::{
    DestinationRoutes, HubRouteSpec, OriginRoutes, PoolSpec, RouteSpecDocument, SpokePoolVerifier,
    SwapTokenDecl, TokenDecl, TokenPair,
};
pub use validation::{ensure_same_asset, same_asset};
