//! HTTP presentation layer: routes, rendering, error responses and the
//! server lifecycle.

pub mod detail;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod mvi;
pub mod render;
pub mod router;
pub mod server;
pub mod shutdown;

pub use error::{CatalogError, ErrorResponse};
pub use logging::init_tracing;
pub use router::{build_router, AppState};
pub use server::{CatalogServer, ServerHandle};
