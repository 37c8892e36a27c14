//! Modal alert box drawn over the current screen

use super::super::theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render_alert(frame: &mut Frame, message: &str) {
    let area = frame.area();
    let width = area.width.saturating_sub(4).clamp(20, 64).min(area.width);
    let body_lines = message.lines().count().max(1) as u16;
    let height = (body_lines + 4).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let mut lines: Vec<Line> = message.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Press any key", theme::footer())));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::loading())
        .title(Span::styled(" Notice ", theme::title()));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .style(theme::text())
            .block(block)
            .wrap(Wrap { trim: false }),
        popup,
    );
}
