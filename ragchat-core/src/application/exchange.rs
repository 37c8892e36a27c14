//! An outstanding request and how it settled

use crate::domain::LoadingId;
use crate::infrastructure::api::{
    ApiError, ChatBackend, ChatReply, ChatRequest, SearchReply, SearchRequest,
};

/// Request body for whichever exchange is in flight
#[derive(Debug, Clone, PartialEq)]
pub enum Exchange {
    Chat(ChatRequest),
    Search(SearchRequest),
}

/// How the backend call finished
#[derive(Debug)]
pub enum ExchangeOutcome {
    Chat(Result<ChatReply, ApiError>),
    Search(Result<SearchReply, ApiError>),
}

/// Produced by `begin_send`/`begin_search` once the loading placeholder is up.
///
/// Running it needs only the backend, so it can move onto a spawned task while
/// the controller stays with the UI loop.
#[derive(Debug)]
pub struct PendingExchange {
    loading: LoadingId,
    exchange: Exchange,
}

impl PendingExchange {
    pub(crate) fn new(loading: LoadingId, exchange: Exchange) -> Self {
        Self { loading, exchange }
    }

    pub fn loading_id(&self) -> LoadingId {
        self.loading
    }

    pub fn exchange(&self) -> &Exchange {
        &self.exchange
    }

    /// Await the single backend call for this exchange
    pub async fn run<B>(self, backend: &B) -> Settlement
    where
        B: ChatBackend + ?Sized,
    {
        let outcome = match &self.exchange {
            Exchange::Chat(request) => ExchangeOutcome::Chat(backend.chat(request).await),
            Exchange::Search(request) => ExchangeOutcome::Search(backend.search(request).await),
        };
        Settlement {
            loading: self.loading,
            outcome,
        }
    }
}

/// A finished exchange, ready to hand back to the controller
#[derive(Debug)]
pub struct Settlement {
    pub loading: LoadingId,
    pub outcome: ExchangeOutcome,
}
