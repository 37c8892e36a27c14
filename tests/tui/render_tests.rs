//! Render smoke tests on a TestBackend

use ragchat_cli::tui::TuiView;
use ragchat_cli::tui::screens;
use ragchat_core::{ChatMessage, ChatView, HealthBanner, LoadingId};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn draw(view: &TuiView) -> String {
    draw_sized(view, 80, 24)
}

fn draw_sized(view: &TuiView, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| screens::render(frame, view))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_key_gate_masks_key_and_shows_banner() {
    let mut view = TuiView::new();
    for c in "topsecret".chars() {
        view.key_input.handle_char(c);
    }
    view.set_health_banner(&HealthBanner::Failed);

    let screen = draw(&view);

    assert!(!screen.contains("topsecret"));
    assert!(screen.contains("•••"));
    assert!(screen.contains("Failed to connect to backend"));
}

#[test]
fn test_chat_panel_shows_messages_and_loading() {
    let mut view = TuiView::new();
    view.show_chat();
    view.set_chunks_label("12 chunks loaded");
    view.append_message(ChatMessage::user("hello"));
    view.append_error("bad key");
    let id = view.append_loading();

    let screen = draw(&view);

    assert!(screen.contains("You:"));
    assert!(screen.contains("hello"));
    assert!(screen.contains("Error: bad key"));
    assert!(screen.contains("Thinking"));
    assert!(screen.contains("12 chunks loaded"));

    view.remove_loading(id);
    assert!(!draw(&view).contains("Thinking"));
    assert_eq!(id, LoadingId(1));
}

#[test]
fn test_alert_is_drawn_over_panel() {
    let mut view = TuiView::new();
    view.alert("Please enter your API key");

    let screen = draw(&view);

    assert!(screen.contains("Please enter your API key"));
}

#[test]
fn test_render_records_scroll_bounds() {
    let mut view = TuiView::new();
    view.show_chat();
    for i in 0..60 {
        view.append_message(ChatMessage::assistant(format!("line {i}")));
    }

    draw(&view);

    assert!(view.chat.max_scroll.get() > 0);
    assert_eq!(view.chat.effective_scroll(), view.chat.max_scroll.get());
}

#[test]
fn test_wrapped_answer_tail_is_visible() {
    let mut view = TuiView::new();
    view.show_chat();
    view.append_message(ChatMessage::user("tell me everything"));
    let answer = format!("{}ENDMARK", "word ".repeat(200));
    view.append_message(ChatMessage::assistant(answer));

    let screen = draw_sized(&view, 40, 20);

    assert!(screen.contains("ENDMARK"));
    assert!(view.chat.max_scroll.get() > 0);
    assert_eq!(view.chat.effective_scroll(), view.chat.max_scroll.get());
}
