//! reqwest implementation of [`ChatBackend`]

use super::traits::ChatBackend;
use super::types::{
    ApiError, ChatReply, ChatRequest, HealthReport, SearchReply, SearchRequest,
};
use crate::constants::{CHAT_PATH, HEALTH_PATH, SEARCH_PATH};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// HTTP client for the knowledge-base backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build URL from base and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    async fn get_json<Res>(&self, path: &str) -> Result<Res, ApiError>
    where
        Res: DeserializeOwned,
    {
        let url = self.build_url(path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::network(url.as_str(), e))?;
        Self::read_json(path, response).await
    }

    async fn post_json<Req, Res>(&self, path: &str, body: &Req) -> Result<Res, ApiError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let url = self.build_url(path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::network(url.as_str(), e))?;
        Self::read_json(path, response).await
    }

    /// The backend reports failures as JSON bodies on 5xx, so the status code
    /// is logged but never short-circuits decoding.
    async fn read_json<Res>(path: &str, response: Response) -> Result<Res, ApiError>
    where
        Res: DeserializeOwned,
    {
        let status = response.status();
        debug!(path, status = status.as_u16(), "Received backend response");
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(path, e))?;
        serde_json::from_str(&body).map_err(|e| ApiError::invalid_response(path, e.to_string()))
    }
}

#[async_trait]
impl ChatBackend for ApiClient {
    async fn health(&self) -> Result<HealthReport, ApiError> {
        debug!(base_url = self.base_url.as_str(), "Probing backend health");
        self.get_json(HEALTH_PATH).await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        info!(
            query_len = request.query.len(),
            top_k = request.top_k,
            "Sending chat request"
        );
        self.post_json(CHAT_PATH, request).await
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchReply, ApiError> {
        info!(
            query_len = request.query.len(),
            top_k = request.top_k,
            "Sending search request"
        );
        self.post_json(SEARCH_PATH, request).await
    }
}
