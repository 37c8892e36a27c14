//! Session state for one run of the client

use std::fmt;

/// Lives as long as the controller. Nothing here is persisted.
#[derive(Clone, Default)]
pub struct Session {
    api_key: String,
    is_loading: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// True exactly while one request is outstanding
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub(crate) fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = key.into();
    }

    /// Idle -> Sending. Returns false if a request is already outstanding.
    pub(crate) fn begin_request(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        true
    }

    /// Sending -> Idle
    pub(crate) fn finish_request(&mut self) {
        self.is_loading = false;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("api_key", &if self.has_api_key() { "<set>" } else { "<empty>" })
            .field("is_loading", &self.is_loading)
            .finish()
    }
}
