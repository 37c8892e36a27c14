//! Key gate key handling tests

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ragchat_cli::tui::screens::key_gate::{KeyGateAction, handle_key};
use ragchat_cli::tui::widgets::TextInput;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_typing_fills_input() {
    let mut input = TextInput::new("API key").masked();

    for c in "abc".chars() {
        assert_eq!(handle_key(&mut input, key(KeyCode::Char(c))), KeyGateAction::None);
    }

    assert_eq!(input.value, "abc");
}

#[test]
fn test_enter_submits_even_when_empty() {
    let mut input = TextInput::new("API key");
    assert_eq!(handle_key(&mut input, key(KeyCode::Enter)), KeyGateAction::Submit);
}

#[test]
fn test_escape_clears_then_exits() {
    let mut input = TextInput::new("API key").with_value("abc");

    assert_eq!(handle_key(&mut input, key(KeyCode::Esc)), KeyGateAction::None);
    assert!(input.value.is_empty());
    assert_eq!(handle_key(&mut input, key(KeyCode::Esc)), KeyGateAction::Exit);
}

#[test]
fn test_ctrl_q_exits() {
    let mut input = TextInput::new("API key").with_value("abc");
    let action = handle_key(
        &mut input,
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
    );
    assert_eq!(action, KeyGateAction::Exit);
}

#[test]
fn test_ctrl_u_clears() {
    let mut input = TextInput::new("API key").with_value("abc");
    handle_key(
        &mut input,
        KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
    );
    assert!(input.value.is_empty());
}
