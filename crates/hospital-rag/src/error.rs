//! Error types for the hospital RAG backend

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for RAG operations
pub type Result<T> = std::result::Result<T, Error>;

/// Hospital RAG errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (missing credential, bad config file, bad address)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record file could not be read or parsed
    #[error("Failed to load '{file}': {source}")]
    DataLoad {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A record row could not be rendered into a document
    #[error("Cannot format {kind} '{id}': {message}")]
    Format {
        kind: String,
        id: String,
        message: String,
    },

    /// Embedding error
    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    /// Generative model API error
    #[error("LLM error: {0}")]
    Llm(String),

    /// The generative model returned no usable text
    #[error("{0}")]
    Generation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a data load error for a record file
    pub fn data_load(file: impl Into<String>, source: csv::Error) -> Self {
        Self::DataLoad {
            file: file.into(),
            source,
        }
    }

    /// Create a row formatting error
    pub fn format(
        kind: impl Into<String>,
        id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Format {
            kind: kind.into(),
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding(message.into())
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Every request-scoped failure is reported the same way: a 500 carrying the
/// error text in `detail`.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        tracing::error!("Error in chat endpoint: {}", detail);

        let body = Json(json!({ "detail": detail }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_into_response_is_500_with_detail() {
        let response = Error::Generation("Failed to generate response".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "Failed to generate response");
    }

    #[test]
    fn test_format_error_message() {
        let err = Error::format("physician", "7", "graduation date 'n/a' does not start with a year");
        assert_eq!(
            err.to_string(),
            "Cannot format physician '7': graduation date 'n/a' does not start with a year"
        );
    }
}
