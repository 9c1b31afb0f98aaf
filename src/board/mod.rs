//! Board state management.
//!
//! The controller owns the in-memory task map and is its only writer;
//! the projection derives per-column views from it. Together they implement
//! the optimistic-mutation contract: state changes locally first, persistence
//! confirms or rejects, and rejected mutations are rolled back.

mod controller;
mod error;
mod projection;

pub use controller::BoardController;
pub use error::{BoardError, BoardResult};
pub use projection::project;

#[cfg(test)]
mod tests;
