//! TUI screens: the key gate and the chat panel, exactly one visible

pub mod chat;
pub mod key_gate;

use crate::tui::view::{Panel, TuiView};
use crate::tui::widgets::render_alert;
use ratatui::Frame;

/// Draw whichever panel is visible, then any pending alert on top
pub fn render(frame: &mut Frame, view: &TuiView) {
    let area = frame.area();
    match view.panel {
        Panel::KeyGate => key_gate::render(frame, area, &view.key_input, &view.banner),
        Panel::Chat => chat::ChatUI::render(frame, area, &view.chat),
    }

    if let Some(message) = &view.alert {
        render_alert(frame, message);
    }
}
