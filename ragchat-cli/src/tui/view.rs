//! `ChatView` for the terminal UI

use super::screens::chat::ChatState;
use super::widgets::TextInput;
use ragchat_core::{ChatMessage, ChatView, HealthBanner, InputField, LoadingId};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    KeyGate,
    Chat,
}

/// All state the TUI draws from. The controller mutates it through
/// [`ChatView`]; the event loop edits the input buffers directly.
pub struct TuiView {
    pub panel: Panel,
    pub key_input: TextInput,
    pub chat: ChatState,
    pub banner: HealthBanner,
    /// Modal notice; any key dismisses it
    pub alert: Option<String>,
    pub focus: InputField,
    next_loading: u64,
}

impl Default for TuiView {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiView {
    pub fn new() -> Self {
        Self {
            panel: Panel::KeyGate,
            key_input: TextInput::new("API key").masked(),
            chat: ChatState::new(),
            banner: HealthBanner::Checking,
            alert: None,
            focus: InputField::ApiKey,
            next_loading: 0,
        }
    }

    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }
}

impl ChatView for TuiView {
    fn show_key_gate(&mut self) {
        self.panel = Panel::KeyGate;
    }

    fn show_chat(&mut self) {
        self.panel = Panel::Chat;
    }

    fn clear_key_input(&mut self) {
        self.key_input.clear();
    }

    fn clear_message_input(&mut self) {
        self.chat.clear_input();
    }

    fn focus(&mut self, field: InputField) {
        self.focus = field;
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }

    fn append_message(&mut self, message: ChatMessage) {
        self.chat.add_message(message);
    }

    fn append_loading(&mut self) -> LoadingId {
        self.next_loading += 1;
        let id = LoadingId(self.next_loading);
        self.chat.add_placeholder(id);
        id
    }

    fn remove_loading(&mut self, id: LoadingId) {
        if !self.chat.remove_placeholder(id) {
            debug!(%id, "Placeholder already removed");
        }
    }

    fn append_error(&mut self, error: &str) {
        self.chat.add_message(ChatMessage::error(error));
    }

    fn set_health_banner(&mut self, banner: &HealthBanner) {
        self.banner = *banner;
    }

    fn set_chunks_label(&mut self, label: &str) {
        self.chat.chunks_label = Some(label.to_string());
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.chat.send_enabled = enabled;
    }
}
