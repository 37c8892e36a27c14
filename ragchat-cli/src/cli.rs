use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "ragchat",
    version,
    about = "Chat with a knowledge-base backend from the terminal"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(long)]
    pub config: Option<String>,
    /// Backend base URL (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long, value_enum, default_value_t = RunMode::Tui)]
    pub mode: RunMode,
    /// Log file path (overrides config)
    #[arg(long)]
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// Full-screen terminal UI
    Tui,
    /// Plain line-by-line prompt
    Line,
}
