/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for task-intake-client tests

use chrono::{TimeZone, Utc};
use task_intake_client::{CreateTaskRequest, TaskStatus};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// A request for a task due at the end of 17 Oct 2026 (UK summer time)
pub fn sample_request() -> CreateTaskRequest {
    CreateTaskRequest {
        title: "Review file".to_string(),
        description: "Check the bundle before the hearing".to_string(),
        status: TaskStatus::InProgress,
        due_date_time: Utc.with_ymd_and_hms(2026, 10, 17, 22, 59, 59).unwrap(),
    }
}

/// Success body echoing `sample_request`
pub fn sample_task_body(id: u64) -> serde_json::Value {
    serde_json::json!({
        "task": {
            "id": id,
            "title": "Review file",
            "description": "Check the bundle before the hearing",
            "status": "in-progress",
            "due_date_time": "2026-10-17T22:59:59.000Z",
            "created_at": "2026-10-16T08:30:00.000Z"
        }
    })
}
