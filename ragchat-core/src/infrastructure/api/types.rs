//! API types - request and response bodies, and errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `GET /health` body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub chunks_loaded: u64,
    #[serde(default)]
    pub index_size: Option<u64>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// `POST /chat` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub query: String,
    pub api_key: String,
    pub top_k: u32,
}

/// `POST /chat` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub success: bool,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub chunks_used: Option<u32>,
}

impl ChatReply {
    pub fn answered(answer: impl Into<String>) -> Self {
        Self {
            success: true,
            answer: Some(answer.into()),
            error: None,
            chunks_used: None,
        }
    }

    pub fn failed(error: Option<String>) -> Self {
        Self {
            success: false,
            answer: None,
            error,
            chunks_used: None,
        }
    }
}

/// `POST /search` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub top_k: u32,
}

/// One chunk returned by `/search`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    pub chunk: String,
    pub distance: f32,
    pub index: u64,
}

/// `POST /search` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchReply {
    pub success: bool,
    #[serde(default)]
    pub results: Vec<SearchHit>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Failures where the request never produced a usable body.
///
/// `Display` is the detail shown to the user after `Network error: `.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not connect to {endpoint}")]
    Connect { endpoint: String },
    #[error("timeout")]
    Timeout { endpoint: String },
    #[error("{source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
}

impl ApiError {
    pub fn network(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        let endpoint = endpoint.into();
        if source.is_timeout() {
            Self::Timeout { endpoint }
        } else if source.is_connect() {
            Self::Connect { endpoint }
        } else {
            Self::Network { endpoint, source }
        }
    }

    pub fn invalid_response(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Connect { endpoint }
            | ApiError::Timeout { endpoint }
            | ApiError::Network { endpoint, .. }
            | ApiError::InvalidResponse { endpoint, .. } => endpoint,
        }
    }
}
