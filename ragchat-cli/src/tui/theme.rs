//! Colors and styles for both panels
//!
//! One color per message role, plus the health banner states.

use ragchat_core::{HealthBanner, MessageRole};
use ratatui::style::{Color, Modifier, Style};

/// Brand color, used for titles and the active border
pub const BRAND: Color = Color::Rgb(94, 160, 236);

pub const PENDING: Color = Color::Rgb(232, 186, 84);
pub const HEALTHY: Color = Color::Rgb(118, 196, 140);
pub const FAILED: Color = Color::Rgb(226, 92, 92);
pub const DIM: Color = Color::Rgb(112, 116, 128);
pub const FRAME: Color = Color::Rgb(64, 70, 84);

pub fn title() -> Style {
    Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
}

pub fn subtitle() -> Style {
    Style::default().fg(DIM)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn border() -> Style {
    Style::default().fg(FRAME)
}

pub fn border_active() -> Style {
    Style::default().fg(BRAND)
}

pub fn footer() -> Style {
    Style::default().fg(DIM)
}

pub fn loading() -> Style {
    Style::default().fg(PENDING).add_modifier(Modifier::ITALIC)
}

/// Prefix style for a message row
pub fn role(role: MessageRole) -> Style {
    match role {
        MessageRole::User => Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        MessageRole::Assistant => Style::default().fg(HEALTHY),
        MessageRole::Error => Style::default().fg(FAILED).add_modifier(Modifier::BOLD),
        MessageRole::Loading => loading(),
    }
}

pub fn banner(banner: &HealthBanner) -> Style {
    match banner {
        HealthBanner::Checking => subtitle(),
        HealthBanner::Healthy { .. } => Style::default().fg(HEALTHY),
        HealthBanner::Failed => Style::default().fg(FAILED).add_modifier(Modifier::BOLD),
    }
}

pub fn key_hint() -> Style {
    Style::default().fg(HEALTHY)
}

pub fn key_destructive() -> Style {
    Style::default().fg(FAILED)
}

pub fn send_badge(enabled: bool) -> Style {
    let bg = if enabled { BRAND } else { FRAME };
    Style::default().fg(Color::Black).bg(bg)
}
