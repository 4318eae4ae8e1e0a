//! Skill catalog for Foreman.
//!
//! Skills are named capabilities (e.g. `Frontend`) required by tasks and
//! possessed by developers. The catalog is seeded out-of-band through the
//! repository port and never mutated by the core. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Query services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
