//! Developer directory for Foreman.
//!
//! Developers own a set of skills that determines which tasks they are
//! eligible for. Developer records are pre-seeded; the core reads them
//! during admission checks and exposes a read-only directory. The module
//! follows hexagonal architecture:
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
