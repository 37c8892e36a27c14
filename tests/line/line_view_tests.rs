//! Line mode tests: LineView output and line routing

#[path = "../support/mod.rs"]
mod support;

use ragchat_cli::line::{LineControl, LineView, handle_line};
use ragchat_core::infrastructure::api::ChatReply;
use ragchat_core::{ChatController, ChatMessage, ChatView, HealthBanner, InputField};
use std::sync::Arc;
use support::{ScriptedBackend, healthy, timeout};

type Controller = ChatController<ScriptedBackend, LineView<Vec<u8>>>;

fn controller(backend: ScriptedBackend) -> Controller {
    let mut controller = ChatController::new(Arc::new(backend), LineView::new(Vec::new()));
    controller.mount();
    controller
}

fn output(controller: &Controller) -> String {
    String::from_utf8(controller.view().get_ref().clone()).unwrap()
}

#[test]
fn test_view_prints_messages_with_prefixes() {
    let mut view = LineView::new(Vec::new());

    view.append_message(ChatMessage::user("typed by user"));
    view.append_message(ChatMessage::assistant("an answer"));
    view.append_error("bad key");
    view.alert("Please enter your API key");

    let text = String::from_utf8(view.into_inner()).unwrap();
    assert!(!text.contains("typed by user"));
    assert!(text.contains("AI: an answer\n"));
    assert!(text.contains("Error: bad key\n"));
    assert!(text.contains("! Please enter your API key\n"));
}

#[test]
fn test_view_tracks_loading_placeholder() {
    let mut view = LineView::new(Vec::new());

    let id = view.append_loading();
    assert_eq!(view.active_loading(), Some(id));

    view.remove_loading(id);
    assert_eq!(view.active_loading(), None);

    let text = String::from_utf8(view.into_inner()).unwrap();
    assert!(text.contains("AI: Thinking..."));
}

#[test]
fn test_view_prints_banner_and_label() {
    let mut view = LineView::new(Vec::new());

    view.set_health_banner(&HealthBanner::Healthy { chunks: 42 });
    view.set_chunks_label("42 chunks loaded");

    let text = String::from_utf8(view.into_inner()).unwrap();
    assert!(text.contains("✅ Knowledge base loaded: 42 chunks\n"));
    assert!(text.contains("[42 chunks loaded]\n"));
}

#[test]
fn test_prompt_follows_panel() {
    let mut view = LineView::new(Vec::new());
    view.prompt().unwrap();
    view.show_chat();
    view.prompt().unwrap();

    let text = String::from_utf8(view.into_inner()).unwrap();
    assert!(text.starts_with("API key> "));
    assert!(text.ends_with("> "));
}

#[tokio::test]
async fn test_empty_key_line_stays_on_gate() {
    let mut controller = controller(ScriptedBackend::new());

    let control = handle_line(&mut controller, "   ").await;

    assert_eq!(control, LineControl::Continue);
    assert!(!controller.view().chat_visible());
    assert_eq!(controller.view().focused(), InputField::ApiKey);
    assert!(output(&controller).contains("! Please enter your API key"));
}

#[tokio::test]
async fn test_chat_round_trip() {
    let backend = ScriptedBackend::new()
        .with_health(healthy(8))
        .with_chat(Ok(ChatReply::answered("hi there")));
    let mut controller = controller(backend);

    handle_line(&mut controller, "key-123").await;
    assert!(controller.view().chat_visible());
    handle_line(&mut controller, "hello").await;

    assert!(controller.view().send_enabled());
    assert_eq!(controller.view().active_loading(), None);
    let request = controller.backend().last_chat_request().unwrap();
    assert_eq!(request.api_key, "key-123");
    assert_eq!(request.query, "hello");

    let text = output(&controller);
    assert!(text.contains("[8 chunks loaded]"));
    assert!(text.contains("AI: Thinking...\nAI: hi there\n"));
}

#[tokio::test]
async fn test_network_error_is_printed() {
    let backend = ScriptedBackend::new()
        .with_health(healthy(1))
        .with_chat(Err(timeout("/chat")));
    let mut controller = controller(backend);

    handle_line(&mut controller, "k").await;
    handle_line(&mut controller, "hello").await;

    assert!(output(&controller).contains("Error: Network error: timeout"));
}

#[tokio::test]
async fn test_commands() {
    let mut controller = controller(ScriptedBackend::new().with_health(healthy(1)));
    handle_line(&mut controller, "k").await;

    assert_eq!(handle_line(&mut controller, "/help").await, LineControl::Continue);
    assert_eq!(handle_line(&mut controller, "/search").await, LineControl::Continue);
    assert_eq!(handle_line(&mut controller, "/nope").await, LineControl::Continue);
    assert_eq!(handle_line(&mut controller, "/key").await, LineControl::Continue);
    assert!(!controller.view().chat_visible());
    assert_eq!(handle_line(&mut controller, "/exit").await, LineControl::Exit);

    let text = output(&controller);
    assert!(text.contains("Available commands:"));
    assert!(text.contains("Usage: /search <query>"));
    assert!(text.contains("Unknown command: /nope"));
}
