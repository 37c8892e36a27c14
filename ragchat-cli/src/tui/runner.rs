//! TUI runner - main event loop coordinator
//!
//! The loop is the only owner of the controller. Backend calls run on
//! spawned tasks and report back through a channel, so drawing and typing
//! continue while a request is outstanding.

use super::screens::{self, chat, key_gate};
use super::terminal::{TerminalSession, Tui};
use super::view::{Panel, TuiView};
use crate::commands::{Command, HELP_TEXT, parse_command};
use crate::error::AppError;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ragchat_core::application::Settlement;
use ragchat_core::infrastructure::api::HealthReport;
use ragchat_core::{ApiError, ChatBackend, ChatController, PendingExchange};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

type TuiController<B> = ChatController<B, TuiView>;

/// Completions coming back from spawned backend calls
pub enum BackendEvent {
    Health(Result<HealthReport, ApiError>),
    ChunkCount(Result<HealthReport, ApiError>),
    Settled(Settlement),
}

/// What the loop must do after a key press
#[derive(Debug)]
pub enum LoopControl {
    Continue,
    Exit,
    /// Run this exchange in the background and settle it later
    Run(PendingExchange),
    /// The key was accepted; refresh the chunk-count label
    RefreshChunkCount,
}

/// Run the TUI until the user exits
pub async fn run_tui<B>(backend: Arc<B>) -> Result<(), AppError>
where
    B: ChatBackend + 'static,
{
    let mut session = TerminalSession::enter()?;

    let mut controller = ChatController::new(backend, TuiView::new());
    controller.mount();

    run_loop(session.terminal_mut(), &mut controller).await
}

async fn run_loop<B>(
    terminal: &mut Tui,
    controller: &mut TuiController<B>,
) -> Result<(), AppError>
where
    B: ChatBackend + 'static,
{
    let (tx, mut rx) = mpsc::channel::<BackendEvent>(16);
    spawn_health(controller.backend(), tx.clone(), BackendEvent::Health);

    loop {
        terminal.draw(|frame| screens::render(frame, controller.view()))?;

        while let Ok(event) = rx.try_recv() {
            apply_backend_event(controller, event);
        }

        let timeout = if controller.session().is_loading() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let control = match event::read()? {
                Event::Key(key) => dispatch_key(controller, key),
                Event::Paste(text) => {
                    dispatch_paste(controller, &text);
                    LoopControl::Continue
                }
                _ => continue,
            };
            match control {
                LoopControl::Continue => {}
                LoopControl::Exit => {
                    info!("User exited");
                    return Ok(());
                }
                LoopControl::Run(pending) => {
                    let backend = controller.backend();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let settlement = pending.run(backend.as_ref()).await;
                        let _ = tx.send(BackendEvent::Settled(settlement)).await;
                    });
                }
                LoopControl::RefreshChunkCount => {
                    spawn_health(controller.backend(), tx.clone(), BackendEvent::ChunkCount);
                }
            }
        } else {
            controller.view_mut().chat.tick_loading();
        }
    }
}

fn spawn_health<B>(
    backend: Arc<B>,
    tx: mpsc::Sender<BackendEvent>,
    wrap: fn(Result<HealthReport, ApiError>) -> BackendEvent,
) where
    B: ChatBackend + 'static,
{
    tokio::spawn(async move {
        let outcome = backend.health().await;
        let _ = tx.send(wrap(outcome)).await;
    });
}

/// Fold a finished backend call into the controller
pub fn apply_backend_event<B>(controller: &mut TuiController<B>, event: BackendEvent)
where
    B: ChatBackend + ?Sized,
{
    match event {
        BackendEvent::Health(outcome) => {
            controller.apply_health(outcome);
        }
        BackendEvent::ChunkCount(outcome) => controller.apply_chunk_count(outcome),
        BackendEvent::Settled(settlement) => controller.settle(settlement),
    }
}

/// Route one key press to the visible panel
pub fn dispatch_key<B>(controller: &mut TuiController<B>, key: KeyEvent) -> LoopControl
where
    B: ChatBackend + ?Sized,
{
    if key.kind != KeyEventKind::Press {
        return LoopControl::Continue;
    }
    if controller.view_mut().dismiss_alert() {
        return LoopControl::Continue;
    }

    match controller.view().panel {
        Panel::KeyGate => {
            match key_gate::handle_key(&mut controller.view_mut().key_input, key) {
                key_gate::KeyGateAction::Submit => {
                    let raw = controller.view().key_input.value.clone();
                    if controller.accept_api_key(&raw) {
                        let text = controller.view().chat.input.clone();
                        controller.message_input_changed(&text);
                        LoopControl::RefreshChunkCount
                    } else {
                        LoopControl::Continue
                    }
                }
                key_gate::KeyGateAction::Exit => LoopControl::Exit,
                key_gate::KeyGateAction::None => LoopControl::Continue,
            }
        }
        Panel::Chat => dispatch_chat_key(controller, key),
    }
}

/// Insert pasted text into whichever input is visible. The key field is
/// single-line, so line breaks are dropped there.
pub fn dispatch_paste<B>(controller: &mut TuiController<B>, text: &str)
where
    B: ChatBackend + ?Sized,
{
    controller.view_mut().dismiss_alert();
    let view = controller.view_mut();
    match view.panel {
        Panel::KeyGate => text
            .chars()
            .filter(|c| !c.is_control())
            .for_each(|c| view.key_input.handle_char(c)),
        Panel::Chat => {
            text.chars()
                .filter(|c| *c == '\n' || !c.is_control())
                .for_each(|c| view.chat.insert_char(c));
            let input = view.chat.input.clone();
            controller.message_input_changed(&input);
        }
    }
}

fn dispatch_chat_key<B>(controller: &mut TuiController<B>, key: KeyEvent) -> LoopControl
where
    B: ChatBackend + ?Sized,
{
    let action = chat::handle_key(&mut controller.view_mut().chat, key);
    match action {
        chat::InputAction::Edited => {
            let text = controller.view().chat.input.clone();
            controller.message_input_changed(&text);
            LoopControl::Continue
        }
        chat::InputAction::Submit => {
            let text = controller.view().chat.input.clone();
            match controller.begin_send(&text) {
                Some(pending) => LoopControl::Run(pending),
                None => {
                    debug!("Send ignored while a request is outstanding");
                    LoopControl::Continue
                }
            }
        }
        chat::InputAction::Command(input) => run_command(controller, &input),
        chat::InputAction::ChangeKey => {
            controller.change_api_key();
            LoopControl::Continue
        }
        chat::InputAction::Exit => LoopControl::Exit,
        chat::InputAction::ScrollUp => {
            controller.view_mut().chat.scroll_up();
            LoopControl::Continue
        }
        chat::InputAction::ScrollDown => {
            controller.view_mut().chat.scroll_down();
            LoopControl::Continue
        }
        chat::InputAction::ScrollTop => {
            controller.view_mut().chat.scroll_to_top();
            LoopControl::Continue
        }
        chat::InputAction::ScrollBottom => {
            controller.view_mut().chat.scroll_to_bottom();
            LoopControl::Continue
        }
        chat::InputAction::None => LoopControl::Continue,
    }
}

fn run_command<B>(controller: &mut TuiController<B>, input: &str) -> LoopControl
where
    B: ChatBackend + ?Sized,
{
    let command = parse_command(input);
    if let Command::Search(query) = &command {
        if !query.is_empty() {
            return match controller.begin_search(query) {
                Some(pending) => LoopControl::Run(pending),
                None => LoopControl::Continue,
            };
        }
    }

    controller.view_mut().chat.clear_input();
    controller.message_input_changed("");

    match command {
        Command::None => {}
        Command::ShowHelp => controller.view_mut().alert = Some(HELP_TEXT.to_string()),
        Command::Search(_) => {
            controller.view_mut().chat.status_message = Some("Usage: /search <query>".into());
        }
        Command::ChangeKey => controller.change_api_key(),
        Command::Exit => return LoopControl::Exit,
        Command::Unknown(name) => {
            controller.view_mut().chat.status_message = Some(format!(
                "Unknown command: /{name}. Type /help for available commands."
            ));
        }
    }
    LoopControl::Continue
}
