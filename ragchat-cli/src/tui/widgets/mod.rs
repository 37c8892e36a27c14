//! Reusable TUI widgets

mod alert;
mod text_input;

pub use alert::render_alert;
pub use text_input::TextInput;
