//! Application state for the chat server

use std::sync::Arc;

use crate::generation::ChatService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Retrieval + generation pipeline
    chat: ChatService,
}

impl AppState {
    /// Create application state around a ready chat service
    pub fn new(chat: ChatService) -> Self {
        Self {
            inner: Arc::new(AppStateInner { chat }),
        }
    }

    /// Get chat service
    pub fn chat(&self) -> &ChatService {
        &self.inner.chat
    }
}
