//! Chat panel rendering

use super::state::ChatState;
use crate::tui::theme;
use ragchat_core::MessageRole;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

pub struct ChatUI;

impl ChatUI {
    pub fn render(frame: &mut Frame, area: Rect, state: &ChatState) {
        // Layout: Status bar, Messages, Input, Help bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Status bar
                Constraint::Min(5),    // Messages area
                Constraint::Length(3), // Input area
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        Self::render_status_bar(frame, chunks[0], state);
        Self::render_messages(frame, chunks[1], state);
        Self::render_input(frame, chunks[2], state);
        Self::render_help_bar(frame, chunks[3], state);
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, state: &ChatState) {
        let chunks_label = state
            .chunks_label
            .clone()
            .unwrap_or_else(|| "Loading knowledge base...".into());

        let loading_indicator = if state.is_loading() {
            Span::styled(
                format!(" {} ", SPINNER[state.loading_frame % SPINNER.len()]),
                theme::loading(),
            )
        } else {
            Span::raw("")
        };

        let status_msg = state
            .status_message
            .as_ref()
            .map(|s| Span::styled(format!(" │ {s} "), theme::subtitle()))
            .unwrap_or_else(|| Span::raw(""));

        let status_line = Line::from(vec![
            Span::styled(" 💬 Knowledge Base Chat ", theme::title()),
            Span::styled("│ ", theme::border()),
            Span::styled(chunks_label, theme::subtitle()),
            loading_indicator,
            status_msg,
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());

        frame.render_widget(Paragraph::new(status_line).block(block), area);
    }

    fn render_messages(frame: &mut Frame, area: Rect, state: &ChatState) {
        let inner_height = area.height as usize;
        let mut lines: Vec<Line> = Vec::new();

        for entry in &state.entries {
            let msg = &entry.message;
            let prefix = match msg.role {
                MessageRole::User => "You: ",
                MessageRole::Assistant => "AI: ",
                MessageRole::Error => "Error: ",
                MessageRole::Loading => {
                    lines.push(Line::from(Span::styled(
                        format!(
                            "AI: {} Thinking...",
                            SPINNER[state.loading_frame % SPINNER.len()]
                        ),
                        theme::loading(),
                    )));
                    lines.push(Line::from(""));
                    continue;
                }
            };

            // Content is shown verbatim; nothing in it is treated as markup.
            let mut content_lines = msg.content.lines();
            let first = content_lines.next().unwrap_or("");
            lines.push(Line::from(vec![
                Span::styled(prefix, theme::role(msg.role)),
                Span::raw(first.to_string()),
            ]));
            let indent = " ".repeat(prefix.len());
            for line in content_lines {
                lines.push(Line::from(format!("{indent}{line}")));
            }
            lines.push(Line::from(""));
        }

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(theme::border());

        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });

        // Scroll offsets count wrapped rows, not logical lines
        let max_scroll = para.line_count(area.width).saturating_sub(inner_height);
        state
            .max_scroll
            .set(u16::try_from(max_scroll).unwrap_or(u16::MAX - 1));
        let para = para.scroll((state.effective_scroll(), 0));

        frame.render_widget(para, area);
    }

    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState) {
        let display_input = if state.input.is_empty() {
            Span::styled("Type your message...", theme::subtitle())
        } else {
            let mut chars: Vec<char> = state.input.chars().collect();
            if state.cursor_pos >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(state.cursor_pos, '|');
            }
            let shown: String = chars
                .into_iter()
                .map(|c| if c == '\n' { '⏎' } else { c })
                .collect();
            Span::styled(shown, theme::text())
        };

        let send_badge = Span::styled(
            if state.send_enabled { " Send " } else { " ---- " },
            theme::send_badge(state.send_enabled),
        );

        let input_line = Line::from(vec![
            Span::styled("> ", theme::role(MessageRole::User)),
            display_input,
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if state.is_loading() {
                theme::border()
            } else {
                theme::border_active()
            })
            .title(if state.is_command() {
                " Command "
            } else {
                " Message "
            })
            .title_bottom(Line::from(send_badge).right_aligned());

        frame.render_widget(Paragraph::new(input_line).block(block), area);
    }

    fn render_help_bar(frame: &mut Frame, area: Rect, state: &ChatState) {
        let help_text = if state.is_loading() {
            Line::from(Span::styled(
                " Waiting for response... ",
                theme::loading(),
            ))
        } else {
            Line::from(vec![
                Span::styled(" Enter", theme::key_hint()),
                Span::raw(": Send │ "),
                Span::styled("Shift+Enter", theme::key_hint()),
                Span::raw(": Newline │ "),
                Span::styled("Ctrl+K", theme::key_hint()),
                Span::raw(": Change key │ "),
                Span::styled("/help", theme::key_hint()),
                Span::raw(": Commands │ "),
                Span::styled("Ctrl+Q", theme::key_destructive()),
                Span::raw(": Exit "),
            ])
        };

        frame.render_widget(Paragraph::new(help_text).style(theme::footer()), area);
    }
}
