/*
[INPUT]:  Backend base URL (optional first argument)
[OUTPUT]: Created task summary or the API error
[POS]:    Examples - task creation
[UPDATE]: When the create-task API changes
*/

use chrono::{Duration, Utc};
use task_intake_client::http::ClientConfig;
use task_intake_client::{CreateTaskRequest, TaskClient, TaskStatus};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:3000".to_string());
    let client = TaskClient::with_config_and_base_url(ClientConfig::default(), &base_url)?;

    let request = CreateTaskRequest {
        title: "Review file".to_string(),
        description: "Created from the client example".to_string(),
        status: TaskStatus::Pending,
        due_date_time: Utc::now() + Duration::days(1),
    };

    match client.create_task(&request).await {
        Ok(response) => {
            let task = response.task;
            println!("Created task {}: {} ({})", task.id, task.title, task.status.label());
        }
        Err(err) => {
            eprintln!("Create failed: {err}");
            if let Some(status) = err.status() {
                eprintln!("HTTP status: {status}");
            }
        }
    }
    Ok(())
}
