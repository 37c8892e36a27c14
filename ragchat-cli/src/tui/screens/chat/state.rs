//! Chat panel state

use ragchat_core::{ChatMessage, LoadingId, MessageRole};
use std::cell::Cell;

/// One rendered row in the message list
#[derive(Debug, Clone)]
pub struct ChatEntry {
    pub message: ChatMessage,
    /// Set only for loading placeholders
    pub placeholder: Option<LoadingId>,
}

impl ChatEntry {
    fn new(message: ChatMessage, placeholder: Option<LoadingId>) -> Self {
        Self {
            message,
            placeholder,
        }
    }
}

/// Everything the chat panel draws
pub struct ChatState {
    /// Rendered message list, oldest first
    pub entries: Vec<ChatEntry>,
    /// Current input buffer
    pub input: String,
    /// Cursor position in input, in characters
    pub cursor_pos: usize,
    /// Scroll offset for messages; `u16::MAX` pins to the bottom
    pub scroll_offset: u16,
    /// Largest useful offset, recorded by the last render
    pub max_scroll: Cell<u16>,
    /// Loading animation frame
    pub loading_frame: usize,
    pub send_enabled: bool,
    /// Secondary chunk-count label shown in the status bar
    pub chunks_label: Option<String>,
    pub status_message: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            max_scroll: Cell::new(0),
            loading_frame: 0,
            send_enabled: false,
            chunks_label: None,
            status_message: None,
        }
    }

    /// Add a message to the list
    pub fn add_message(&mut self, message: ChatMessage) {
        self.entries.push(ChatEntry::new(message, None));
        self.scroll_to_bottom();
    }

    pub fn add_placeholder(&mut self, id: LoadingId) {
        self.entries.push(ChatEntry::new(
            ChatMessage::new(MessageRole::Loading, "Thinking"),
            Some(id),
        ));
        self.scroll_to_bottom();
    }

    /// Returns whether a placeholder with this id was present
    pub fn remove_placeholder(&mut self, id: LoadingId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.placeholder != Some(id));
        before != self.entries.len()
    }

    pub fn placeholder_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.placeholder.is_some())
            .count()
    }

    pub fn is_loading(&self) -> bool {
        self.placeholder_count() > 0
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.input.insert(idx, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let idx = self.byte_index();
            self.input.remove(idx);
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.char_count() {
            let idx = self.byte_index();
            self.input.remove(idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_count() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_count();
    }

    /// Offset actually shown, with the bottom pin resolved
    pub fn effective_scroll(&self) -> u16 {
        self.scroll_offset.min(self.max_scroll.get())
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.effective_scroll().saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let next = self.effective_scroll().saturating_add(1);
        if next >= self.max_scroll.get() {
            self.scroll_to_bottom();
        } else {
            self.scroll_offset = next;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Pin to the bottom; resolved against content height during render
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = u16::MAX;
    }

    /// Advance the spinner while a placeholder is visible
    pub fn tick_loading(&mut self) {
        if self.is_loading() {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    pub fn is_command(&self) -> bool {
        crate::commands::is_command(&self.input)
    }
}
