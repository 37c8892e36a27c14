//! Chat widget controller
//!
//! Maps user intents (submit key, change key, send, search) to backend calls
//! and view updates. Each backend call has a split form for event loops that
//! must stay responsive (`begin_*` + [`PendingExchange::run`] + `settle`) and
//! an inline async form that awaits the call directly.

use super::exchange::{Exchange, ExchangeOutcome, PendingExchange, Settlement};
use super::session::Session;
use crate::constants::{
    CHAT_FALLBACK_ERROR, DEFAULT_TOP_K, EMPTY_KEY_ALERT, GENERIC_CHUNKS_LABEL,
    NETWORK_ERROR_PREFIX, NO_SEARCH_HITS, SEARCH_FALLBACK_ERROR,
};
use crate::domain::{ChatMessage, ChatView, HealthBanner, InputField, LoadingId};
use crate::infrastructure::api::{
    ApiError, ChatBackend, ChatReply, ChatRequest, HealthReport, SearchReply, SearchRequest,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ChatController<B: ?Sized, V> {
    backend: Arc<B>,
    view: V,
    session: Session,
}

impl<B, V> ChatController<B, V>
where
    B: ChatBackend + ?Sized,
    V: ChatView,
{
    pub fn new(backend: Arc<B>, view: V) -> Self {
        Self {
            backend,
            view,
            session: Session::new(),
        }
    }

    pub fn backend(&self) -> Arc<B> {
        Arc::clone(&self.backend)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Put the view in its initial state: key gate visible, health pending
    pub fn mount(&mut self) {
        self.view.show_key_gate();
        self.view.set_health_banner(&HealthBanner::Checking);
        self.view.set_send_enabled(false);
        self.view.focus(InputField::ApiKey);
    }

    // ---- health -------------------------------------------------------

    /// Single health check, no retry
    pub async fn check_health(&mut self) -> HealthBanner {
        let outcome = self.backend.health().await;
        self.apply_health(outcome)
    }

    pub fn apply_health(&mut self, outcome: Result<HealthReport, ApiError>) -> HealthBanner {
        match &outcome {
            Ok(report) if report.is_healthy() => info!(
                chunks = report.chunks_loaded,
                index_size = ?report.index_size,
                "Backend healthy"
            ),
            Ok(report) => warn!(
                status = report.status.as_str(),
                "Backend reported unhealthy status"
            ),
            Err(err) => warn!(error = %err, "Health check failed"),
        }
        let banner = HealthBanner::from_outcome(&outcome);
        self.view.set_health_banner(&banner);
        banner
    }

    // ---- key gate -----------------------------------------------------

    /// Validate and store the key, then refresh the chunk-count label
    pub async fn submit_api_key(&mut self, raw: &str) -> bool {
        if !self.accept_api_key(raw) {
            return false;
        }
        let outcome = self.backend.health().await;
        self.apply_chunk_count(outcome);
        true
    }

    /// Synchronous half of [`Self::submit_api_key`]. An empty key raises an
    /// alert and changes nothing.
    pub fn accept_api_key(&mut self, raw: &str) -> bool {
        let key = raw.trim();
        if key.is_empty() {
            debug!("Rejected empty API key");
            self.view.alert(EMPTY_KEY_ALERT);
            return false;
        }

        self.session.set_api_key(key);
        self.view.show_chat();
        self.view.focus(InputField::Message);
        info!("API key accepted, switched to chat panel");
        true
    }

    pub fn apply_chunk_count(&mut self, outcome: Result<HealthReport, ApiError>) {
        match outcome {
            Ok(report) => {
                self.view
                    .set_chunks_label(&format!("{} chunks loaded", report.chunks_loaded));
            }
            Err(err) => {
                warn!(error = %err, "Chunk count refresh failed");
                self.view.set_chunks_label(GENERIC_CHUNKS_LABEL);
            }
        }
    }

    /// Back to the key gate. The cached key stays in the session until a new
    /// one is submitted.
    pub fn change_api_key(&mut self) {
        self.view.show_key_gate();
        self.view.clear_key_input();
        self.view.focus(InputField::ApiKey);
        debug!("Returned to key gate");
    }

    // ---- send / search ------------------------------------------------

    /// Keep the send control in step with the message input
    pub fn message_input_changed(&mut self, text: &str) {
        let enabled = !text.trim().is_empty() && !self.session.is_loading();
        self.view.set_send_enabled(enabled);
    }

    /// Send and await the reply inline. Returns false when the attempt was
    /// a no-op (empty text or a request already outstanding).
    pub async fn send_message(&mut self, text: &str) -> bool {
        match self.begin_send(text) {
            Some(pending) => {
                self.run_inline(pending).await;
                true
            }
            None => false,
        }
    }

    /// Search the knowledge base and await the hits inline
    pub async fn search(&mut self, query: &str) -> bool {
        match self.begin_search(query) {
            Some(pending) => {
                self.run_inline(pending).await;
                true
            }
            None => false,
        }
    }

    async fn run_inline(&mut self, pending: PendingExchange) {
        let backend = Arc::clone(&self.backend);
        let settlement = pending.run(backend.as_ref()).await;
        self.settle(settlement);
    }

    pub fn begin_send(&mut self, text: &str) -> Option<PendingExchange> {
        let query = text.trim();
        if query.is_empty() || self.session.is_loading() {
            return None;
        }

        self.view.append_message(ChatMessage::user(query));
        self.view.clear_message_input();
        let loading = self.enter_loading()?;

        let request = ChatRequest {
            query: query.to_string(),
            api_key: self.session.api_key().to_string(),
            top_k: DEFAULT_TOP_K,
        };
        Some(PendingExchange::new(loading, Exchange::Chat(request)))
    }

    pub fn begin_search(&mut self, query: &str) -> Option<PendingExchange> {
        let query = query.trim();
        if query.is_empty() || self.session.is_loading() {
            return None;
        }

        self.view
            .append_message(ChatMessage::user(format!("Search: {query}")));
        self.view.clear_message_input();
        let loading = self.enter_loading()?;

        let request = SearchRequest {
            query: query.to_string(),
            top_k: DEFAULT_TOP_K,
        };
        Some(PendingExchange::new(loading, Exchange::Search(request)))
    }

    fn enter_loading(&mut self) -> Option<LoadingId> {
        if !self.session.begin_request() {
            return None;
        }
        self.view.set_send_enabled(false);
        Some(self.view.append_loading())
    }

    /// Apply a finished exchange. Always returns the controller to idle.
    pub fn settle(&mut self, settlement: Settlement) {
        self.view.remove_loading(settlement.loading);

        match settlement.outcome {
            ExchangeOutcome::Chat(Ok(reply)) => self.render_chat_reply(reply),
            ExchangeOutcome::Search(Ok(reply)) => self.render_search_reply(reply),
            ExchangeOutcome::Chat(Err(err)) | ExchangeOutcome::Search(Err(err)) => {
                warn!(endpoint = err.endpoint(), error = %err, "Request failed in transport");
                self.view
                    .append_error(&format!("{NETWORK_ERROR_PREFIX}{err}"));
            }
        }

        self.session.finish_request();
        self.view.set_send_enabled(true);
        self.view.focus(InputField::Message);
    }

    fn render_chat_reply(&mut self, reply: ChatReply) {
        if reply.success {
            debug!(chunks_used = ?reply.chunks_used, "Chat answered");
            self.view
                .append_message(ChatMessage::assistant(reply.answer.unwrap_or_default()));
        } else {
            let error = reply
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| CHAT_FALLBACK_ERROR.to_string());
            info!(error = error.as_str(), "Backend rejected chat request");
            self.view.append_error(&error);
        }
    }

    fn render_search_reply(&mut self, reply: SearchReply) {
        if !reply.success {
            let error = reply
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| SEARCH_FALLBACK_ERROR.to_string());
            self.view.append_error(&error);
            return;
        }

        if reply.results.is_empty() {
            self.view.append_message(ChatMessage::assistant(NO_SEARCH_HITS));
            return;
        }

        let body = reply
            .results
            .iter()
            .enumerate()
            .map(|(i, hit)| {
                format!(
                    "[{}] (chunk #{}, distance {:.3}) {}",
                    i + 1,
                    hit.index,
                    hit.distance,
                    hit.chunk
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        debug!(hits = reply.results.len(), "Search answered");
        self.view.append_message(ChatMessage::assistant(body));
    }
}
