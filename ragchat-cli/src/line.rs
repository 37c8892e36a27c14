//! Line-oriented mode: one prompt per line on stdin, output printed as it arrives

use crate::commands::{Command, HELP_TEXT, is_command, parse_command};
use crate::error::AppError;
use ragchat_core::{
    ChatBackend, ChatController, ChatMessage, ChatView, HealthBanner, InputField, LoadingId,
    MessageRole,
};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// `ChatView` that prints to any writer. Placeholders cannot be erased from
/// a scrolling terminal, so removal is only tracked.
pub struct LineView<W: Write> {
    out: W,
    chat_visible: bool,
    active_loading: Option<LoadingId>,
    next_loading: u64,
    send_enabled: bool,
    focus: InputField,
}

impl<W: Write> LineView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            chat_visible: false,
            active_loading: None,
            next_loading: 0,
            send_enabled: false,
            focus: InputField::ApiKey,
        }
    }

    pub fn chat_visible(&self) -> bool {
        self.chat_visible
    }

    pub fn active_loading(&self) -> Option<LoadingId> {
        self.active_loading
    }

    pub fn send_enabled(&self) -> bool {
        self.send_enabled
    }

    pub fn focused(&self) -> InputField {
        self.focus
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            warn!(error = %err, "Failed to write to output");
        }
    }

    pub fn prompt(&mut self) -> std::io::Result<()> {
        let prompt = if self.chat_visible { "> " } else { "API key> " };
        write!(self.out, "{prompt}")?;
        self.out.flush()
    }

    pub fn note(&mut self, text: &str) {
        self.emit(text);
    }
}

impl<W: Write> ChatView for LineView<W> {
    fn show_key_gate(&mut self) {
        self.chat_visible = false;
        self.emit("Enter your API key to start chatting (/exit to quit).");
    }

    fn show_chat(&mut self) {
        self.chat_visible = true;
        self.emit("Chat started. Type /help for commands.");
    }

    fn clear_key_input(&mut self) {}

    fn clear_message_input(&mut self) {}

    fn focus(&mut self, field: InputField) {
        self.focus = field;
    }

    fn alert(&mut self, message: &str) {
        self.emit(&format!("! {message}"));
    }

    fn append_message(&mut self, message: ChatMessage) {
        // The user already sees what they typed at the prompt.
        let prefix = match message.role {
            MessageRole::User => return,
            MessageRole::Assistant | MessageRole::Loading => "AI",
            MessageRole::Error => "Error",
        };
        self.emit(&format!("{prefix}: {}", message.content));
    }

    fn append_loading(&mut self) -> LoadingId {
        self.next_loading += 1;
        let id = LoadingId(self.next_loading);
        self.active_loading = Some(id);
        self.emit("AI: Thinking...");
        id
    }

    fn remove_loading(&mut self, id: LoadingId) {
        if self.active_loading == Some(id) {
            self.active_loading = None;
        }
    }

    fn append_error(&mut self, error: &str) {
        self.emit(&format!("Error: {error}"));
    }

    fn set_health_banner(&mut self, banner: &HealthBanner) {
        self.emit(&banner.message());
    }

    fn set_chunks_label(&mut self, label: &str) {
        self.emit(&format!("[{label}]"));
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.send_enabled = enabled;
    }
}

/// Whether the read loop keeps going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineControl {
    Continue,
    Exit,
}

pub async fn run<B>(backend: Arc<B>) -> Result<(), AppError>
where
    B: ChatBackend + ?Sized,
{
    let stdin = BufReader::new(io::stdin());
    let mut lines = stdin.lines();
    let mut controller = ChatController::new(backend, LineView::new(std::io::stdout()));

    controller.mount();
    controller.check_health().await;

    loop {
        controller.view_mut().prompt()?;
        let Some(line) = lines.next_line().await? else {
            controller.view_mut().note("\nInput closed. Exiting.");
            break;
        };

        if handle_line(&mut controller, &line).await == LineControl::Exit {
            break;
        }
    }

    info!("Line mode finished");
    Ok(())
}

/// Route one input line to the key gate or the chat panel
pub async fn handle_line<B, W>(
    controller: &mut ChatController<B, LineView<W>>,
    line: &str,
) -> LineControl
where
    B: ChatBackend + ?Sized,
    W: Write,
{
    if controller.view().chat_visible() {
        handle_chat_line(controller, line).await
    } else {
        handle_key_line(controller, line).await
    }
}

async fn handle_key_line<B, W>(
    controller: &mut ChatController<B, LineView<W>>,
    line: &str,
) -> LineControl
where
    B: ChatBackend + ?Sized,
    W: Write,
{
    if matches!(parse_command(line), Command::Exit) && is_command(line) {
        return LineControl::Exit;
    }
    controller.submit_api_key(line).await;
    LineControl::Continue
}

async fn handle_chat_line<B, W>(
    controller: &mut ChatController<B, LineView<W>>,
    line: &str,
) -> LineControl
where
    B: ChatBackend + ?Sized,
    W: Write,
{
    if !is_command(line) {
        controller.send_message(line).await;
        return LineControl::Continue;
    }

    match parse_command(line) {
        Command::None => {}
        Command::ShowHelp => controller.view_mut().note(HELP_TEXT),
        Command::Search(query) if query.is_empty() => {
            controller.view_mut().note("Usage: /search <query>");
        }
        Command::Search(query) => {
            controller.search(&query).await;
        }
        Command::ChangeKey => controller.change_api_key(),
        Command::Exit => return LineControl::Exit,
        Command::Unknown(name) => controller.view_mut().note(&format!(
            "Unknown command: /{name}. Type /help for available commands."
        )),
    }
    LineControl::Continue
}
