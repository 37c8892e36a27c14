//! Core of the knowledge-base chat client.
//!
//! The controller in [`application::controller`] drives any rendering target
//! implementing [`domain::view::ChatView`] and talks to the backend through
//! [`infrastructure::api::ChatBackend`].

pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{ChatController, PendingExchange, Session};
pub use config::{AppConfig, ConfigError};
pub use domain::{ChatMessage, ChatView, HealthBanner, InputField, LoadingId, MessageRole};
pub use infrastructure::api::{ApiClient, ApiError, ChatBackend};
