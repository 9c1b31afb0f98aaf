//! Shared test helpers for in-memory board integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use taskboard::board::BoardController;
use taskboard::task::adapters::memory::InMemoryGateway;
use taskboard::task::domain::{Status, TaskId};
use taskboard::task::services::TaskRepository;

/// Gateway type used across the integration suite.
pub type TestGateway = InMemoryGateway<DefaultClock>;

/// Controller type used across the integration suite.
pub type TestController = BoardController<TestGateway, DefaultClock>;

/// Provides a fresh shared document store for each test.
#[fixture]
pub fn gateway() -> Arc<TestGateway> {
    Arc::new(InMemoryGateway::new(Arc::new(DefaultClock)))
}

/// Opens a new client session against an existing store.
pub fn session(gateway: &Arc<TestGateway>) -> TestController {
    BoardController::new(TaskRepository::new(
        Arc::clone(gateway),
        Arc::new(DefaultClock),
    ))
}

/// Asserts a task appears in exactly the expected column.
///
/// # Errors
///
/// Returns an error naming the offending column when membership differs
/// from the expectation.
pub fn assert_only_in_column(
    controller: &TestController,
    id: TaskId,
    expected: Status,
) -> Result<(), eyre::Report> {
    for status in Status::ALL {
        let contains = controller.column(status).iter().any(|t| t.id() == id);
        eyre::ensure!(
            contains == (status == expected),
            "unexpected membership in column {}",
            status.as_str()
        );
    }
    Ok(())
}
