//! Task admission and lifecycle management for Foreman.
//!
//! This module implements the task aggregate: admitting new tasks with
//! validated titles, skill requirements, and developer assignments;
//! mutating status and assignee through a validated update path; and
//! producing hierarchy-aware detail and paginated list views. Skill
//! requirements left unspecified at creation are filled in through the
//! skill predictor port. The module follows hexagonal architecture:
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
