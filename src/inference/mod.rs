//! Skill inference for Foreman.
//!
//! This module predicts the skills a task requires from its title. It
//! combines fuzzy title similarity over the stored task corpus (behavioral
//! evidence) with a two-pass consultation of an external text-completion
//! oracle, falling back to a deterministic keyword heuristic whenever the
//! oracle is unavailable or unparsable. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
