//! Chat input handling
//!
//! Keys are never swallowed while a request is outstanding: the user can keep
//! typing, and a second Enter is rejected by the controller.

use super::state::ChatState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Input buffer changed
    Edited,
    /// Submit the current input as a chat message
    Submit,
    /// Execute a slash command
    Command(String),
    /// Return to the key gate
    ChangeKey,
    /// Exit the app
    Exit,
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
}

/// Handle a key press on the chat panel and update state
pub fn handle_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match key.code {
            KeyCode::Char('q') => InputAction::Exit,
            KeyCode::Char('k') => InputAction::ChangeKey,
            KeyCode::Char('c') => {
                state.clear_input();
                InputAction::Edited
            }
            KeyCode::Char('u') => InputAction::ScrollTop,
            KeyCode::Char('d') => InputAction::ScrollBottom,
            _ => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
        {
            state.insert_char('\n');
            InputAction::Edited
        }
        KeyCode::Enter => {
            if state.input.trim().is_empty() {
                return InputAction::None;
            }
            if state.is_command() {
                return InputAction::Command(state.input.clone());
            }
            InputAction::Submit
        }
        KeyCode::Esc => {
            if state.input.is_empty() {
                return InputAction::None;
            }
            state.clear_input();
            InputAction::Edited
        }
        KeyCode::Backspace => {
            state.delete_char();
            InputAction::Edited
        }
        KeyCode::Delete => {
            state.delete_char_forward();
            InputAction::Edited
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char(c) => {
            state.insert_char(c);
            InputAction::Edited
        }
        KeyCode::Tab => {
            state.insert_char(' ');
            state.insert_char(' ');
            InputAction::Edited
        }
        _ => InputAction::None,
    }
}
