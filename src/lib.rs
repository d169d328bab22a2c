// src/lib.rs
//
// tx-context: classifies a decoded on-chain transaction into an archetype
// (NFT sale/purchase, token mint, approval, swap, Farcaster registry
// operations) and attaches a typed, templated description for renderers.
//
// The classification core (types, heuristics, pipeline) is synchronous and
// pure; the async modules (config, fetch, store) only serve the fixture CLI.

pub mod config;
pub mod constants;
pub mod fetch;
pub mod heuristics;
pub mod pipeline;
pub mod protocols;
pub mod store;
pub mod types;

pub use constants::KnownAddresses;
pub use heuristics::Heuristic;
pub use pipeline::Pipeline;
pub use types::{Context, ContextVariable, Transaction};
