//! Single-line text input, optionally masked

use super::super::theme;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

const MASK: char = '•';

/// Cursor position counts characters, not bytes
pub struct TextInput {
    pub value: String,
    pub label: String,
    pub cursor_pos: usize,
    pub masked: bool,
}

impl TextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
            cursor_pos: 0,
            masked: false,
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor_pos = self.value.chars().count();
        self
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn handle_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.value.insert(idx, c);
        self.cursor_pos += 1;
    }

    pub fn handle_backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let idx = self.byte_index();
            self.value.remove(idx);
        }
    }

    pub fn handle_delete(&mut self) {
        if self.cursor_pos < self.value.chars().count() {
            let idx = self.byte_index();
            self.value.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.value.chars().count() {
            self.cursor_pos += 1;
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    /// Text as it appears on screen
    pub fn display_value(&self) -> String {
        if self.masked {
            std::iter::repeat_n(MASK, self.value.chars().count()).collect()
        } else {
            self.value.clone()
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, active: bool) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Label
            Constraint::Length(3), // Input box
        ])
        .split(area);

        let label = Paragraph::new(self.label.clone()).style(theme::subtitle());
        frame.render_widget(label, chunks[0]);

        let mut shown = self.display_value();
        if active {
            shown.push('_');
        }
        let input = Paragraph::new(shown).style(theme::text()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if active {
                    theme::border_active()
                } else {
                    theme::border()
                }),
        );
        frame.render_widget(input, chunks[1]);
    }
}
