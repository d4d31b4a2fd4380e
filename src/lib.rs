// Library root module for route-compiler
// This file defines the public API and module structure: token resolution,
// route expansion and validation, and route table emission
//
// Numan Thabit 2025 Nov

pub mod address;
pub mod config;
pub mod emitter;
pub mod errors;
pub mod router;
pub mod tokens;

pub use address::Address;
pub use errors::{ChainId, RouteError, RouteKind};
