//! Knowledge-base backend API
//!
//! - types.rs: request, response and error types
//! - traits.rs: the `ChatBackend` seam the controller depends on
//! - client.rs: reqwest implementation

mod client;
mod traits;
mod types;

pub use client::ApiClient;
pub use traits::ChatBackend;
pub use types::{
    ApiError, ChatReply, ChatRequest, HealthReport, SearchHit, SearchReply, SearchRequest,
};
