// src/protocols/mod.rs
//
// Protocol-call heuristics: archetypes recognized by (target contract,
// decoded method) instead of asset movement.

pub mod farcaster;
