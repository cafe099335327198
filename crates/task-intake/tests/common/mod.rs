/*
[INPUT]:  Mock backend requirements for end-to-end submission tests
[OUTPUT]: Mock server, fixed-zone submitter and draft fixtures
[POS]:    Test infrastructure - shared across task-intake integration tests
[UPDATE]: When adding new test patterns or fixtures
*/

#![allow(dead_code)]

use chrono::{FixedOffset, NaiveDate};
use task_intake::{Draft, Submitter};
use task_intake_client::http::ClientConfig;
use task_intake_client::{TaskClient, TaskStatus};
use wiremock::MockServer;

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// UK summer time, so 23:59:59 local is 22:59:59Z
pub fn bst() -> FixedOffset {
    FixedOffset::east_opt(3600).unwrap()
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

pub fn submitter_for(server: &MockServer) -> Submitter<TaskClient, FixedOffset> {
    let client = TaskClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client for mock server");
    Submitter::with_time_zone(client, bst())
}

pub fn review_draft() -> Draft {
    Draft {
        title: "Review file".to_string(),
        description: String::new(),
        status: TaskStatus::Pending,
        due_date: NaiveDate::from_ymd_opt(2026, 10, 17),
    }
}

pub fn created_body() -> serde_json::Value {
    serde_json::json!({
        "task": {
            "id": 1,
            "title": "Review file",
            "description": "",
            "status": "pending",
            "due_date_time": "2026-10-17T22:59:59.000Z",
            "created_at": "2026-10-16T09:12:45.000Z"
        }
    })
}
