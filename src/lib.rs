//! Taskboard: the state machine behind a drag-and-drop team task board.
//!
//! Users name the members of a team, add tasks to a shared pool, drag tasks
//! onto members and track each assigned task's status. This crate holds that
//! state and keeps the per-container counts and empty placeholders consistent
//! with it; drawing the board is left to whatever renderer subscribes to it.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and change notification
//! - **Adapters**: Concrete implementations of ports (in-memory, tracing)
//!
//! # Modules
//!
//! - [`board`]: Team roster, task store, status, drag-and-drop and counts

pub mod board;
