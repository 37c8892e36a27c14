//! Fakes shared by the integration tests
//!
//! - ScriptedBackend: `ChatBackend` that replays queued outcomes
//! - RecordingView: `ChatView` that records every call

#![allow(dead_code)]

use async_trait::async_trait;
use ragchat_core::infrastructure::api::{
    ChatReply, ChatRequest, HealthReport, SearchHit, SearchReply, SearchRequest,
};
use ragchat_core::{
    ApiError, ChatBackend, ChatMessage, ChatView, HealthBanner, InputField, LoadingId, MessageRole,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn healthy(chunks: u64) -> Result<HealthReport, ApiError> {
    Ok(HealthReport {
        status: "healthy".to_string(),
        chunks_loaded: chunks,
        index_size: Some(chunks),
    })
}

pub fn refused(endpoint: &str) -> ApiError {
    ApiError::Connect {
        endpoint: endpoint.to_string(),
    }
}

pub fn timeout(endpoint: &str) -> ApiError {
    ApiError::Timeout {
        endpoint: endpoint.to_string(),
    }
}

pub fn hit(index: u64, distance: f32, chunk: &str) -> SearchHit {
    SearchHit {
        chunk: chunk.to_string(),
        distance,
        index,
    }
}

#[derive(Default)]
pub struct ScriptedBackend {
    health: Mutex<VecDeque<Result<HealthReport, ApiError>>>,
    chat: Mutex<VecDeque<Result<ChatReply, ApiError>>>,
    search: Mutex<VecDeque<Result<SearchReply, ApiError>>>,
    pub chat_requests: Mutex<Vec<ChatRequest>>,
    pub search_requests: Mutex<Vec<SearchRequest>>,
    pub health_calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_health(self, outcome: Result<HealthReport, ApiError>) -> Self {
        self.health.lock().unwrap().push_back(outcome);
        self
    }

    pub fn with_chat(self, outcome: Result<ChatReply, ApiError>) -> Self {
        self.chat.lock().unwrap().push_back(outcome);
        self
    }

    pub fn with_search(self, outcome: Result<SearchReply, ApiError>) -> Self {
        self.search.lock().unwrap().push_back(outcome);
        self
    }

    pub fn health_calls(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }

    pub fn last_chat_request(&self) -> Option<ChatRequest> {
        self.chat_requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn health(&self) -> Result<HealthReport, ApiError> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        self.health
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(refused("/health")))
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.chat_requests.lock().unwrap().push(request.clone());
        self.chat
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(refused("/chat")))
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchReply, ApiError> {
        self.search_requests.lock().unwrap().push(request.clone());
        self.search
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(refused("/search")))
    }
}

/// One node in the recorded message list
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Message(ChatMessage),
    Loading(LoadingId),
    /// Rendered as `Error: {text}`
    Error(String),
}

impl Element {
    pub fn text(&self) -> String {
        match self {
            Element::Message(message) => message.content.clone(),
            Element::Loading(_) => "Thinking".to_string(),
            Element::Error(text) => format!("Error: {text}"),
        }
    }

    pub fn role(&self) -> MessageRole {
        match self {
            Element::Message(message) => message.role,
            Element::Loading(_) => MessageRole::Loading,
            Element::Error(_) => MessageRole::Error,
        }
    }
}

#[derive(Debug)]
pub struct RecordingView {
    pub elements: Vec<Element>,
    pub chat_visible: bool,
    pub panel_switches: usize,
    pub key_input: String,
    pub message_input: String,
    pub alerts: Vec<String>,
    pub banner: Option<HealthBanner>,
    pub chunks_label: Option<String>,
    pub send_enabled: bool,
    pub focus: Option<InputField>,
    pub scrolls: usize,
    next_loading: u64,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            chat_visible: false,
            panel_switches: 0,
            key_input: String::new(),
            message_input: String::new(),
            alerts: Vec::new(),
            banner: None,
            chunks_label: None,
            send_enabled: false,
            focus: None,
            scrolls: 0,
            next_loading: 0,
        }
    }

    pub fn loading_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Loading(_)))
            .count()
    }

    pub fn errors(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Error(_)))
            .map(Element::text)
            .collect()
    }
}

impl ChatView for RecordingView {
    fn show_key_gate(&mut self) {
        if self.chat_visible {
            self.panel_switches += 1;
        }
        self.chat_visible = false;
    }

    fn show_chat(&mut self) {
        if !self.chat_visible {
            self.panel_switches += 1;
        }
        self.chat_visible = true;
    }

    fn clear_key_input(&mut self) {
        self.key_input.clear();
    }

    fn clear_message_input(&mut self) {
        self.message_input.clear();
    }

    fn focus(&mut self, field: InputField) {
        self.focus = Some(field);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn append_message(&mut self, message: ChatMessage) {
        self.elements.push(Element::Message(message));
        self.scrolls += 1;
    }

    fn append_loading(&mut self) -> LoadingId {
        self.next_loading += 1;
        let id = LoadingId(self.next_loading);
        self.elements.push(Element::Loading(id));
        self.scrolls += 1;
        id
    }

    fn remove_loading(&mut self, id: LoadingId) {
        self.elements.retain(|e| e != &Element::Loading(id));
    }

    fn append_error(&mut self, error: &str) {
        self.elements.push(Element::Error(error.to_string()));
        self.scrolls += 1;
    }

    fn set_health_banner(&mut self, banner: &HealthBanner) {
        self.banner = Some(*banner);
    }

    fn set_chunks_label(&mut self, label: &str) {
        self.chunks_label = Some(label.to_string());
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.send_enabled = enabled;
    }
}
