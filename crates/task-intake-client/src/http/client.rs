/*
[INPUT]:  HTTP configuration (base URL, endpoint path, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::{Duration, Instant};

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::http::{Result, TaskApiError};
use crate::types::ApiErrorBody;

/// Default backend location
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
/// Default create-task endpoint
pub const DEFAULT_CREATE_TASK_PATH: &str = "/addtask";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the task backend
#[derive(Debug, Clone)]
pub struct TaskClient {
    http_client: Client,
    base_url: Url,
    create_task_path: String,
}

impl TaskClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client pointed at a specific backend
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(TaskApiError::Config(format!(
                "base URL '{base_url}' cannot be used as a base"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
            create_task_path: DEFAULT_CREATE_TASK_PATH.to_string(),
        })
    }

    /// Override the create-task endpoint path
    pub fn with_create_task_path(mut self, path: impl Into<String>) -> Self {
        self.create_task_path = path.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn create_task_path(&self) -> &str {
        &self.create_task_path
    }

    /// Build full URL for an endpoint
    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build request builder for an endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode a 2xx JSON body.
    ///
    /// Non-2xx responses become [`TaskApiError::Api`] carrying whatever error body
    /// the backend sent; a body that does not decode leaves it empty.
    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let started = Instant::now();
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().clone();
        let bytes = response.bytes().await?;

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "task api response"
        );

        if !status.is_success() {
            let body = serde_json::from_slice::<ApiErrorBody>(&bytes).unwrap_or_else(|err| {
                tracing::debug!(url = %url, error = %err, "error body is not JSON");
                ApiErrorBody::default()
            });
            return Err(TaskApiError::api_error(status, body));
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| TaskApiError::InvalidResponse(format!("{url}: {err}")))
    }
}
