//! API key entry panel

use crate::tui::theme;
use crate::tui::widgets::TextInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ragchat_core::HealthBanner;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyGateAction {
    None,
    Submit,
    Exit,
}

pub fn handle_key(input: &mut TextInput, key: KeyEvent) -> KeyGateAction {
    if key.kind != KeyEventKind::Press {
        return KeyGateAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') => KeyGateAction::Exit,
            KeyCode::Char('c') | KeyCode::Char('u') => {
                input.clear();
                KeyGateAction::None
            }
            _ => KeyGateAction::None,
        };
    }

    match key.code {
        KeyCode::Enter => KeyGateAction::Submit,
        KeyCode::Esc if input.value.is_empty() => KeyGateAction::Exit,
        KeyCode::Esc => {
            input.clear();
            KeyGateAction::None
        }
        KeyCode::Backspace => {
            input.handle_backspace();
            KeyGateAction::None
        }
        KeyCode::Delete => {
            input.handle_delete();
            KeyGateAction::None
        }
        KeyCode::Left => {
            input.move_left();
            KeyGateAction::None
        }
        KeyCode::Right => {
            input.move_right();
            KeyGateAction::None
        }
        KeyCode::Char(c) => {
            input.handle_char(c);
            KeyGateAction::None
        }
        _ => KeyGateAction::None,
    }
}

pub fn render(frame: &mut Frame, area: Rect, input: &TextInput, banner: &HealthBanner) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(Span::styled(" Knowledge Base Chat ", theme::title()));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // padding
        Constraint::Length(2), // intro
        Constraint::Length(4), // key input
        Constraint::Length(1), // padding
        Constraint::Length(2), // health banner
        Constraint::Min(0),
        Constraint::Length(1), // help
    ])
    .horizontal_margin(2)
    .split(inner);

    let intro = Paragraph::new("Enter your API key to start chatting with the knowledge base.")
        .style(theme::text())
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[1]);

    input.render(frame, chunks[2], true);

    frame.render_widget(
        Paragraph::new(banner.message()).style(theme::banner(banner)),
        chunks[4],
    );

    let help = Line::from(vec![
        Span::styled(" Enter", theme::key_hint()),
        Span::raw(": Start chat │ "),
        Span::styled("Esc", theme::key_hint()),
        Span::raw(": Clear │ "),
        Span::styled("Ctrl+Q", theme::key_destructive()),
        Span::raw(": Exit "),
    ]);
    frame.render_widget(Paragraph::new(help).style(theme::footer()), chunks[6]);
}
