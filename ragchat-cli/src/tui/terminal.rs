//! Raw-mode terminal session
//!
//! Bracketed paste is enabled so a pasted API key arrives as one event
//! instead of a burst of key presses.

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::warn;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the alternate screen; dropping it puts the terminal back
pub struct TerminalSession {
    terminal: Tui,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        let terminal = restore_on_error(enter_screen(), restore_terminal)?;
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            warn!(error = %err, "Failed to restore terminal");
        }
        let _ = self.terminal.show_cursor();
    }
}

fn enter_screen() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Raw mode is already on when the rest of setup runs; undo it if that fails
fn restore_on_error<T>(
    result: io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    if result.is_err()
        && let Err(err) = restore()
    {
        warn!(error = %err, "Failed to restore terminal after setup error");
    }
    result
}

fn restore_terminal() -> io::Result<()> {
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Put the terminal back before the panic message is printed
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
