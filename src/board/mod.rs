//! Task board state machine.
//!
//! Team members are created once from comma-separated input, tasks are added
//! to a shared pool, dragged onto members and given a tri-state status. Every
//! mutation is followed by a reconcile pass that recomputes the per-container
//! counts and empty-placeholder flags from the authoritative task partition.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
