//! Slash commands shared by the TUI and line mode

pub const HELP_TEXT: &str = r#"Available commands:
  /help            - Show this help
  /search <query>  - Show the knowledge-base chunks matching a query
  /key             - Change API key
  /exit            - Exit"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    ShowHelp,
    Search(String),
    ChangeKey,
    Exit,
    Unknown(String),
}

pub fn is_command(input: &str) -> bool {
    input.trim_start().starts_with('/')
}

/// Parse a `/command args` line
pub fn parse_command(input: &str) -> Command {
    let cmd = input.trim().trim_start_matches('/');
    let (name, rest) = match cmd.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (cmd, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "" => Command::None,
        "help" | "?" => Command::ShowHelp,
        "search" | "find" => Command::Search(rest.to_string()),
        "key" | "apikey" => Command::ChangeKey,
        "exit" | "quit" | "bye" => Command::Exit,
        other => Command::Unknown(other.to_string()),
    }
}
