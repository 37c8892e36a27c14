//! Rendering target abstraction
//!
//! The controller never touches a concrete UI. A terminal screen, a plain
//! stdio loop or a test recorder can all sit behind this trait.

use super::health::HealthBanner;
use super::message::{ChatMessage, LoadingId};

/// Input fields a view must be able to focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    ApiKey,
    Message,
}

/// Capabilities the chat controller needs from a rendering target
pub trait ChatView {
    /// Show the key-entry panel and hide the chat panel
    fn show_key_gate(&mut self);

    /// Show the chat panel and hide the key-entry panel
    fn show_chat(&mut self);

    fn clear_key_input(&mut self);

    fn clear_message_input(&mut self);

    fn focus(&mut self, field: InputField);

    /// Blocking, user-facing notice
    fn alert(&mut self, message: &str);

    /// Append a message as plain text and scroll to the bottom.
    /// Content must never be interpreted as markup.
    fn append_message(&mut self, message: ChatMessage);

    /// Append a loading placeholder and scroll to the bottom
    fn append_loading(&mut self) -> LoadingId;

    /// Remove a placeholder; no-op when it is already gone
    fn remove_loading(&mut self, id: LoadingId);

    /// Append an error bubble rendered as `Error: {error}` and scroll to the bottom
    fn append_error(&mut self, error: &str);

    fn set_health_banner(&mut self, banner: &HealthBanner);

    fn set_chunks_label(&mut self, label: &str);

    fn set_send_enabled(&mut self, enabled: bool);
}
