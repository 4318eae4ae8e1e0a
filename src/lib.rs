//! Foreman: skill-aware task assignment core.
//!
//! This crate provides the core functionality for admitting tasks into a
//! parent/subtask hierarchy, assigning developers based on required skills,
//! and inferring required skills from task titles via a two-pass
//! consultation of an external text-completion oracle.
//!
//! # Architecture
//!
//! Foreman follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (stores, oracles, etc.)
//!
//! # Modules
//!
//! - [`skill`]: Skill catalog (named capabilities required by tasks)
//! - [`developer`]: Developer directory and their skill sets
//! - [`task`]: Task admission, mutation, and hierarchy views
//! - [`inference`]: Title similarity search and skill prediction

pub mod developer;
pub mod inference;
pub mod skill;
pub mod task;
