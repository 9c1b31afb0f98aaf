//! Port contracts for task persistence.

pub mod gateway;

pub use gateway::{
    GatewayError, GatewayResult, NewTaskRecord, PersistenceGateway, TaskMutationRecord,
};
