// Tokens module - registry lookups and canonical asset resolution
//
// Numan Thabit 2025 Nov

pub mod registry;
pub mod resolver;

pub use registry::{TokenEntry, TokenRegistry, TokenSource};
pub use resolver::{BridgedAliasSet, TokenRecord, TokenResolver};
