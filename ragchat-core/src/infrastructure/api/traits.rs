//! Backend trait

use super::types::{
    ApiError, ChatReply, ChatRequest, HealthReport, SearchReply, SearchRequest,
};
use async_trait::async_trait;

/// The three backend calls the controller can suspend on
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn health(&self) -> Result<HealthReport, ApiError>;

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError>;

    async fn search(&self, request: &SearchRequest) -> Result<SearchReply, ApiError>;
}
