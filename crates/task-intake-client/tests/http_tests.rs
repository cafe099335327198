/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use std::time::Duration;

use common::{sample_request, sample_task_body, setup_mock_server};
use rstest::rstest;
use task_intake_client::{ClientConfig, TaskApi, TaskApiError, TaskClient, TaskId, TaskStatus};
use tokio_test::assert_ok;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(TaskClient::new());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(1),
    };
    let client = assert_ok!(TaskClient::with_config_and_base_url(
        config,
        "http://127.0.0.1:8080"
    ));
    assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/");
}

#[tokio::test]
async fn test_create_task_through_trait_object() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/addtask"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "status": "in-progress",
            "due_date_time": "2026-10-17T22:59:59.000Z",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(sample_task_body(11)))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(TaskClient::with_config_and_base_url(
        ClientConfig::default(),
        &server.uri()
    ));
    let api: Box<dyn TaskApi> = Box::new(client);

    let response = assert_ok!(api.create_task(&sample_request()).await);
    assert_eq!(response.task.id, TaskId::Number(11));
    assert_eq!(response.task.status, TaskStatus::InProgress);
    assert_eq!(
        response.task.description.as_deref(),
        Some("Check the bundle before the hearing")
    );
}

#[tokio::test]
async fn test_server_error_keeps_message() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/addtask"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "Database unavailable"
        })))
        .mount(&server)
        .await;

    let client = assert_ok!(TaskClient::with_config_and_base_url(
        ClientConfig::default(),
        &server.uri()
    ));
    let err = client
        .create_task(&sample_request())
        .await
        .expect_err("should fail");

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("Database unavailable"));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on the tcpmux port in test environments.
    let uri = "http://127.0.0.1:1";

    let config = ClientConfig {
        timeout: Duration::from_secs(2),
        connect_timeout: Duration::from_secs(1),
    };
    let client = assert_ok!(TaskClient::with_config_and_base_url(config, uri));
    let err = client
        .create_task(&sample_request())
        .await
        .expect_err("should fail");

    assert!(err.is_transport(), "unexpected error: {err:?}");
    assert!(matches!(err, TaskApiError::Http(_)));
}

#[rstest]
#[case(400, Some("Validation failed"))]
#[case(404, None)]
#[case(422, Some("Unprocessable"))]
#[case(503, None)]
#[tokio::test]
async fn test_non_success_status_is_api_error(
    #[case] status: u16,
    #[case] message: Option<&str>,
) {
    let server = setup_mock_server().await;
    let body = match message {
        Some(message) => serde_json::json!({ "error": message }),
        None => serde_json::json!({}),
    };
    Mock::given(method("POST"))
        .and(path("/addtask"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;

    let client = assert_ok!(TaskClient::with_config_and_base_url(
        ClientConfig::default(),
        &server.uri()
    ));
    let err = client
        .create_task(&sample_request())
        .await
        .expect_err("should fail");

    match err {
        TaskApiError::Api { status: got, body } => {
            assert_eq!(got, status);
            assert_eq!(body.error.as_deref(), message);
            assert!(body.details.is_empty());
        }
        other => panic!("expected api error, got {other:?}"),
    }
}
