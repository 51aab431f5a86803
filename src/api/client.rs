//! HTTP Client
//!
//! `reqwest` implementation of the collection traits. On wasm32 requests go
//! through the browser's `fetch`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, MessageApi, TodoApi};
use crate::config::ApiConfig;
use crate::models::{Message, NewMessage, NewTodo, Todo, TodoId, TodoPatch};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { http: Client::new(), config }
    }

    async fn send(request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
        let response = Self::send(request).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl TodoApi for ApiClient {
    async fn list_todos(&self) -> ApiResult<Vec<Todo>> {
        let url = self.config.endpoint("todos/")?;
        Self::send_json(self.http.get(url)).await
    }

    async fn create_todo(&self, new_todo: &NewTodo) -> ApiResult<Todo> {
        let url = self.config.endpoint("todos/")?;
        Self::send_json(self.http.post(url).json(new_todo)).await
    }

    async fn update_todo(&self, id: TodoId, patch: TodoPatch) -> ApiResult<Todo> {
        let url = self.config.endpoint(&format!("todos/{}", id))?;
        Self::send_json(self.http.patch(url).json(&patch)).await
    }

    async fn delete_todo(&self, id: TodoId) -> ApiResult<()> {
        let url = self.config.endpoint(&format!("todos/{}", id))?;
        Self::send(self.http.delete(url)).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl MessageApi for ApiClient {
    async fn list_messages(&self) -> ApiResult<Vec<Message>> {
        let url = self.config.endpoint("messages/")?;
        Self::send_json(self.http.get(url)).await
    }

    async fn create_message(&self, new_message: &NewMessage) -> ApiResult<()> {
        let url = self.config.endpoint("messages/")?;
        Self::send(self.http.post(url).json(new_message)).await.map(|_| ())
    }

    async fn clear_messages(&self) -> ApiResult<()> {
        let url = self.config.endpoint("messages/clear")?;
        Self::send(self.http.delete(url)).await.map(|_| ())
    }
}
