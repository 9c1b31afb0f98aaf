//! Taskboard: client-side task board state with asynchronous persistence.
//!
//! Tasks are organized into status columns, moved between them, and annotated
//! with comments. This crate implements the state model behind that surface:
//! optimistic local mutations, persistence through an abstract document
//! store, and reconciliation (rollback or confirmation) when the store
//! responds.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: pure task/comment entities with no infrastructure
//!   dependencies
//! - **Ports**: the abstract persistence gateway trait
//! - **Adapters**: concrete gateway implementations (in-memory)
//!
//! # Modules
//!
//! - [`task`]: domain model, persistence port, and repository service
//! - [`board`]: the board state controller and column projection

pub mod board;
pub mod task;
