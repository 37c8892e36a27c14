//! Chat panel
//!
//! - state.rs: message list and input buffer
//! - ui.rs: rendering
//! - input.rs: key handling

mod input;
mod state;
mod ui;

pub use input::{InputAction, handle_key};
pub use state::{ChatEntry, ChatState};
pub use ui::ChatUI;
