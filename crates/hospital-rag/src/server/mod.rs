//! HTTP server for the hospital chat backend

pub mod routes;
pub mod state;

use axum::{http::HeaderValue, routing::get, Router};
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::error::{Error, Result};
use state::AppState;

/// Chat HTTP server
pub struct RagServer {
    config: ServerConfig,
    allowed_origin: HeaderValue,
    state: AppState,
}

impl RagServer {
    /// Create a server; fails if the configured CORS origin is not a valid
    /// header value.
    pub fn new(config: ServerConfig, state: AppState) -> Result<Self> {
        let allowed_origin = HeaderValue::from_str(&config.cors_origin).map_err(|e| {
            Error::Config(format!("Invalid CORS origin '{}': {}", config.cors_origin, e))
        })?;

        Ok(Self {
            config,
            allowed_origin,
            state,
        })
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        // Only the configured frontend origin; no credentials
        let cors = CorsLayer::new()
            .allow_origin(self.allowed_origin.clone())
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/health", get(health_check))
            .merge(routes::api_routes())
            .with_state(self.state.clone())
            // Middleware layers (order matters - applied bottom to top)
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer(cors)
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .address()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid address: {}", e)))?;

        let router = self.build_router();

        tracing::info!("Starting chat server on http://{}", addr);
        tracing::info!("Accepting browser requests from {}", self.config.cors_origin);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Config(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| Error::Internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::chat::tests::fixture_service;
    use crate::providers::testing::CannedLlm;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn router(answer: &str) -> Router {
        let chat = fixture_service(Arc::new(CannedLlm::new(answer))).await;
        RagServer::new(ServerConfig::default(), AppState::new(chat))
            .unwrap()
            .build_router()
    }

    fn chat_request(message: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::from(
                serde_json::json!({ "message": message }).to_string(),
            ))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_returns_answer_and_sources() {
        let response = router("St. Mary is located in CA.")
            .await
            .oneshot(chat_request("Where is the hospital St. Mary located?"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );

        let body = json_body(response).await;
        assert_eq!(body["response"], "St. Mary is located in CA.");
        let sources = body["sources"].as_array().unwrap();
        assert!(!sources.is_empty() && sources.len() <= 5);
        assert_eq!(
            sources[0],
            serde_json::json!({"type": "hospital", "id": "1", "name": "St. Mary"})
        );
    }

    #[tokio::test]
    async fn test_empty_generation_is_500_with_detail() {
        let response = router("")
            .await
            .oneshot(chat_request("Where is St. Mary?"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"detail": "Failed to generate response"})
        );
    }

    #[tokio::test]
    async fn test_other_origins_are_not_allowed() {
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ORIGIN, "http://evil.example")
            .body(Body::from(r#"{"message":"hi"}"#))
            .unwrap();

        let response = router("hello").await.oneshot(request).await.unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_health() {
        let response = router("ok")
            .await
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_origin_rejected() {
        let config = ServerConfig {
            cors_origin: "bad\norigin".to_string(),
            ..ServerConfig::default()
        };
        let chat = fixture_service(Arc::new(CannedLlm::new("ok"))).await;
        assert!(RagServer::new(config, AppState::new(chat)).is_err());
    }
}
