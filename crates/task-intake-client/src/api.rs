/*
[INPUT]:  Create-task requests
[OUTPUT]: Created task records or client errors
[POS]:    API abstraction - seam between submission logic and transport
[UPDATE]: When adding operations callers need to swap out in tests
*/

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::http::{Result, TaskApiError, TaskClient};
use crate::types::{CreateTaskRequest, CreateTaskResponse, Task};

/// Operations the submission flow needs from the backend
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn create_task(&self, req: &CreateTaskRequest) -> Result<CreateTaskResponse>;
}

#[async_trait]
impl TaskApi for TaskClient {
    async fn create_task(&self, req: &CreateTaskRequest) -> Result<CreateTaskResponse> {
        TaskClient::create_task(self, req).await
    }
}

#[async_trait]
impl<T: TaskApi + ?Sized> TaskApi for Arc<T> {
    async fn create_task(&self, req: &CreateTaskRequest) -> Result<CreateTaskResponse> {
        (**self).create_task(req).await
    }
}

/// Scripted API for tests: replays queued outcomes and records requests.
#[derive(Debug, Default)]
pub struct MockTaskApi {
    responses: Mutex<VecDeque<Result<CreateTaskResponse>>>,
    requests: Mutex<Vec<CreateTaskRequest>>,
}

impl MockTaskApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response carrying `task`
    pub fn push_task(&self, task: Task) -> &Self {
        self.push_result(Ok(CreateTaskResponse { task }))
    }

    /// Queue a failure
    pub fn push_error(&self, err: TaskApiError) -> &Self {
        self.push_result(Err(err))
    }

    fn push_result(&self, result: Result<CreateTaskResponse>) -> &Self {
        self.responses
            .lock()
            .expect("mock responses lock")
            .push_back(result);
        self
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<CreateTaskRequest> {
        self.requests.lock().expect("mock requests lock").clone()
    }
}

#[async_trait]
impl TaskApi for MockTaskApi {
    async fn create_task(&self, req: &CreateTaskRequest) -> Result<CreateTaskResponse> {
        self.requests
            .lock()
            .expect("mock requests lock")
            .push(req.clone());
        self.responses
            .lock()
            .expect("mock responses lock")
            .pop_front()
            .unwrap_or_else(|| {
                Err(TaskApiError::InvalidResponse(
                    "no scripted response left".to_string(),
                ))
            })
    }
}
