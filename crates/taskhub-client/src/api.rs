//! REST Access Layer
//!
//! Maps the four task operations onto the backend's REST routes:
//!
//! | Operation | Method | Path           |
//! |-----------|--------|----------------|
//! | list      | GET    | `/tasks/`      |
//! | create    | POST   | `/tasks/`      |
//! | update    | PUT    | `/tasks/{id}/` |
//! | delete    | DELETE | `/tasks/{id}/` |
//!
//! Calls are pass-through: no retries, no timeouts, no caching.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::Task;

/// Task CRUD operations against a backend.
///
/// Futures are `!Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait TaskApi {
    /// Fetch every task, in backend order
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    /// Create a task; the returned copy carries the backend-assigned id
    async fn create_task(&self, task: &Task) -> ApiResult<Task>;

    /// Replace a task with the given full record
    async fn update_task(&self, task: &Task) -> ApiResult<Task>;

    /// Delete a task by id
    async fn delete_task(&self, id: u32) -> ApiResult<()>;
}

/// `TaskApi` over HTTP using reqwest (fetch in the browser)
#[derive(Debug, Clone)]
pub struct TaskClient {
    http: Client,
    base_url: String,
}

impl TaskClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        Self::with_http(config, Client::new())
    }

    /// Build on an existing reqwest client (shared connection pool, custom headers)
    pub fn with_http(config: ClientConfig, http: Client) -> ApiResult<Self> {
        let base_url = config.normalized_base()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks/", self.base_url)
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/tasks/{}/", self.base_url, id)
    }

    /// Send a request, turning non-2xx responses into `ApiError::Status`
    async fn send(&self, url: &str, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|source| {
            warn!(url, error = %source, "task request failed");
            ApiError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(url, status = status.as_u16(), %body, "task request rejected");
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> ApiResult<T> {
        response.json::<T>().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait(?Send)]
impl TaskApi for TaskClient {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        let url = self.collection_url();
        debug!(%url, "GET tasks");
        let response = self.send(&url, self.http.get(&url)).await?;
        Self::decode(&url, response).await
    }

    async fn create_task(&self, task: &Task) -> ApiResult<Task> {
        let url = self.collection_url();
        debug!(%url, title = %task.title, "POST task");
        let response = self.send(&url, self.http.post(&url).json(task)).await?;
        Self::decode(&url, response).await
    }

    async fn update_task(&self, task: &Task) -> ApiResult<Task> {
        let id = task.id.ok_or(ApiError::MissingId)?;
        let url = self.item_url(id);
        debug!(%url, "PUT task");
        let response = self.send(&url, self.http.put(&url).json(task)).await?;
        Self::decode(&url, response).await
    }

    async fn delete_task(&self, id: u32) -> ApiResult<()> {
        let url = self.item_url(id);
        debug!(%url, "DELETE task");
        self.send(&url, self.http.delete(&url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> TaskClient {
        TaskClient::new(ClientConfig::new(base)).unwrap()
    }

    #[test]
    fn test_routes_keep_trailing_slash() {
        let api = client("http://localhost:8000/");
        assert_eq!(api.collection_url(), "http://localhost:8000/tasks/");
        assert_eq!(api.item_url(42), "http://localhost:8000/tasks/42/");
    }

    #[test]
    fn test_path_prefix_is_preserved() {
        let api = client("https://example.com/api");
        assert_eq!(api.base_url(), "https://example.com/api");
        assert_eq!(api.item_url(1), "https://example.com/api/tasks/1/");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = TaskClient::new(ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[tokio::test]
    async fn test_update_without_id_sends_nothing() {
        // Port 9 (discard) would fail with Transport if a request were made.
        let api = client("http://127.0.0.1:9");
        let err = api.update_task(&Task::new("t", "d")).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingId));
    }
}
