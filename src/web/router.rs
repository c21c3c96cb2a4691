use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::ConfigStore;
use crate::source::CountrySource;
use crate::web::error::CatalogError;
use crate::web::handlers;
use crate::web::render::PageRenderer;

/// Shared handler state. Holds no request data: every request fetches
/// and shapes its own dataset.
#[derive(Clone)]
pub struct AppState {
    config: ConfigStore,
    source: CountrySource,
    renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(config: ConfigStore) -> Result<Self, CatalogError> {
        let source = CountrySource::new(&config.get().source)?;
        let renderer = Arc::new(PageRenderer::new()?);
        Ok(Self {
            config,
            source,
            renderer,
        })
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn source(&self) -> &CountrySource {
        &self.source
    }

    pub fn renderer(&self) -> &PageRenderer {
        &self.renderer
    }
}

/// Per-request identifier, echoed in error responses.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::catalog_page))
        .route("/api/countries", get(handlers::countries_api))
        .route("/health", get(handlers::health))
        .layer(middleware::from_fn(request_context))
        .with_state(state)
}

/// Tags the request with a [`RequestId`] and logs it inside a span.
async fn request_context(mut req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let span = tracing::info_span!(
        "request",
        id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );
    req.extensions_mut().insert(RequestId(request_id));

    async move {
        let started = Instant::now();
        let response = next.run(req).await;
        tracing::info!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request completed"
        );
        response
    }
    .instrument(span)
    .await
}
