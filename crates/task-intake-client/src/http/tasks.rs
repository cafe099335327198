/*
[INPUT]:  Validated create-task payloads
[OUTPUT]: Created task records or structured API errors
[POS]:    HTTP layer - task endpoints
[UPDATE]: When adding task endpoints or changing the create flow
*/

use reqwest::Method;

use crate::http::{Result, TaskClient};
use crate::types::{CreateTaskRequest, CreateTaskResponse};

impl TaskClient {
    /// Create a task
    ///
    /// POST /addtask (path configurable)
    pub async fn create_task(&self, req: &CreateTaskRequest) -> Result<CreateTaskResponse> {
        let builder = self.request(Method::POST, self.create_task_path())?;
        let builder = builder.json(req);
        let response: CreateTaskResponse = self.send_json(builder).await?;
        tracing::info!(task_id = %response.task.id, "task created");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, TaskApiError, TaskClient};
    use crate::types::{CreateTaskRequest, ErrorDetail, TaskId, TaskStatus};
    use chrono::{TimeZone, Utc};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> CreateTaskRequest {
        CreateTaskRequest {
            title: "Review file".to_string(),
            description: String::new(),
            status: TaskStatus::Pending,
            due_date_time: Utc.with_ymd_and_hms(2026, 10, 17, 22, 59, 59).unwrap(),
        }
    }

    fn client(server: &MockServer) -> TaskClient {
        TaskClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_create_task_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/addtask"))
            .and(body_json(serde_json::json!({
                "title": "Review file",
                "description": "",
                "status": "pending",
                "due_date_time": "2026-10-17T22:59:59.000Z",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "task": {
                    "id": 7,
                    "title": "Review file",
                    "description": "",
                    "status": "pending",
                    "due_date_time": "2026-10-17T22:59:59.000Z",
                    "created_at": "2026-10-16T10:00:00.000Z"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .create_task(&request())
            .await
            .expect("create_task failed");

        assert_eq!(response.task.id, TaskId::Number(7));
        assert_eq!(response.task.title, "Review file");
        assert_eq!(response.task.status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn test_create_task_validation_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/addtask"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Validation failed",
                "details": ["Title is required", "Invalid date"]
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .create_task(&request())
            .await
            .expect_err("should fail");

        match err {
            TaskApiError::Api { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body.error.as_deref(), Some("Validation failed"));
                assert_eq!(
                    body.details,
                    vec![
                        ErrorDetail::Text("Title is required".to_string()),
                        ErrorDetail::Text("Invalid date".to_string()),
                    ]
                );
            }
            other => panic!("Expected Api error variant, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_task_non_json_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/addtask"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = client(&server)
            .create_task(&request())
            .await
            .expect_err("should fail");

        match err {
            TaskApiError::Api { status, body } => {
                assert_eq!(status, 502);
                assert!(body.error.is_none());
                assert!(body.details.is_empty());
            }
            other => panic!("Expected Api error variant, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_task_missing_task_record() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/addtask"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })),
            )
            .mount(&server)
            .await;

        let err = client(&server)
            .create_task(&request())
            .await
            .expect_err("should fail");

        assert!(matches!(err, TaskApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_create_task_custom_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "task": {
                    "id": "t-1",
                    "title": "Review file",
                    "status": "completed",
                    "due_date_time": "2026-10-17T22:59:59.000Z",
                    "created_at": "2026-10-16T10:00:00.000Z"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .with_create_task_path("/api/tasks")
            .create_task(&request())
            .await
            .expect("create_task failed");

        assert_eq!(response.task.id, TaskId::Text("t-1".to_string()));
        assert!(response.task.description.is_none());
    }
}
