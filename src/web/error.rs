//! Error types and response handling for the catalog server.
//!
//! Maps failures to HTTP status codes and renders them as an HTML page
//! or a JSON envelope depending on the route.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::config::ConfigError;
use crate::source::SourceError;
use crate::web::render::{ErrorView, PageRenderer};

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Fetching the country dataset failed
    #[error("Country source error: {0}")]
    Source(#[from] SourceError),

    /// Template lookup or rendering failed
    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    /// No listener could be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server loop stopped with an I/O error
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Source(SourceError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
            CatalogError::Source(_) => StatusCode::BAD_GATEWAY,
            CatalogError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Bind { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Serve(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            CatalogError::Source(SourceError::Timeout { .. }) => "source_timeout",
            CatalogError::Source(_) => "source_error",
            CatalogError::Config(_) => "config_error",
            CatalogError::Render(_) => "render_error",
            CatalogError::Bind { .. } => "bind_error",
            CatalogError::Serve(_) => "server_error",
        }
    }
}

/// Builder for standardized error responses
pub struct ErrorResponse;

impl ErrorResponse {
    pub fn json(err: &CatalogError, request_id: &str) -> Response {
        let body = serde_json::json!({
            "error": {
                "type": err.error_type(),
                "message": err.to_string(),
                "request_id": request_id
            }
        });

        (err.status_code(), Json(body)).into_response()
    }

    /// Falls back to plain text if the error page itself fails to render.
    pub fn html(
        err: &CatalogError,
        request_id: &str,
        renderer: &PageRenderer,
        title: &str,
    ) -> Response {
        let status = err.status_code();
        let view = ErrorView {
            title: title.to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error").to_string(),
            message: err.to_string(),
            request_id: request_id.to_string(),
        };

        match renderer.render_error(&view) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(render_err) => {
                tracing::error!(error = %render_err, "Failed to render error page");
                (status, err.to_string()).into_response()
            }
        }
    }
}
