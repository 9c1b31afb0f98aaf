//! Adapter implementations of the persistence port.

pub mod memory;
