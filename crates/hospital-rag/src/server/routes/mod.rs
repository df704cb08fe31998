//! API routes for the chat server

pub mod chat;

use axum::{routing::post, Router};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/chat", post(chat::chat))
}
