//! Terminal user interface using Ratatui

mod runner;
pub mod screens;
mod terminal;
pub mod theme;
pub mod view;
pub mod widgets;

pub use runner::{
    BackendEvent, LoopControl, apply_backend_event, dispatch_key, dispatch_paste, run_tui,
};
pub use terminal::{TerminalSession, Tui};
pub use view::{Panel, TuiView};
