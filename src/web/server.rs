use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::config::{ConfigError, ConfigStore};
use crate::web::error::CatalogError;
use crate::web::router::{build_router, AppState};
use crate::web::shutdown::ShutdownManager;

/// Ports tried past the configured one when it is busy.
const PORT_FALLBACK_RANGE: u16 = 100;

pub struct CatalogServer {
    addr: SocketAddr,
    /// Populated by try_bind(), consumed by run().
    listener: Option<TcpListener>,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
}

impl CatalogServer {
    pub fn new(config: ConfigStore) -> Result<Self, CatalogError> {
        let state = AppState::new(config)?;
        Ok(Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            listener: None,
            state,
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    /// Binds the configured address, falling back to the following ports
    /// if it is busy. The listener is kept until [`run`](Self::run).
    pub async fn try_bind(&mut self) -> Result<SocketAddr, CatalogError> {
        let bind_addr_str = self.state.config().get().server.bind_addr;
        let bind_addr: SocketAddr =
            bind_addr_str
                .parse()
                .map_err(|e| ConfigError::ValidationError {
                    message: format!("Invalid bind address '{}': {}", bind_addr_str, e),
                })?;

        let start_port = bind_addr.port();
        let host = bind_addr.ip();
        let mut last_error = None;

        for port in start_port..=start_port.saturating_add(PORT_FALLBACK_RANGE) {
            match TcpListener::bind(SocketAddr::new(host, port)).await {
                Ok(listener) => {
                    let actual_addr = listener.local_addr().map_err(|e| CatalogError::Bind {
                        addr: bind_addr_str.clone(),
                        source: e,
                    })?;
                    self.addr = actual_addr;
                    self.listener = Some(listener);
                    tracing::info!("Catalog bound to {}", actual_addr);
                    return Ok(actual_addr);
                }
                Err(e) => {
                    tracing::debug!("Port {} busy: {}", port, e);
                    last_error = Some(e);
                }
            }
        }

        Err(CatalogError::Bind {
            addr: bind_addr_str,
            source: last_error
                .unwrap_or_else(|| std::io::Error::other("no port available in fallback range")),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serves until Ctrl-C, SIGTERM or [`ServerHandle::shutdown`].
    ///
    /// Binds first if [`try_bind`](Self::try_bind) was not called.
    pub async fn run(mut self) -> Result<(), CatalogError> {
        let listener = match self.listener.take() {
            Some(listener) => listener,
            None => {
                self.try_bind().await?;
                self.listener.take().ok_or_else(|| {
                    CatalogError::Serve(std::io::Error::other("listener missing after bind"))
                })?
            }
        };

        tracing::info!("Serving countries catalog on http://{}", self.addr);

        let _reloader =
            spawn_reload_on_hangup(self.state.config().clone(), self.shutdown.clone());

        let app = build_router(self.state.clone());
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.wait_for_shutdown().await })
            .await
            .map_err(CatalogError::Serve)?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}

/// Re-reads the config file into `config`, keeping the previous value on
/// failure. Page settings apply from the next request; server and source
/// settings are read at startup only.
#[cfg_attr(not(unix), allow(dead_code))]
fn reload_config(config: &ConfigStore) -> bool {
    match config.reload() {
        Ok(()) => {
            tracing::info!(path = %config.path().display(), "Configuration reloaded");
            true
        }
        Err(e) => {
            tracing::warn!(
                path = %config.path().display(),
                error = %e,
                "Configuration reload failed, keeping previous"
            );
            false
        }
    }
}

/// Reloads the config on every SIGHUP until shutdown.
#[cfg(unix)]
fn spawn_reload_on_hangup(
    config: ConfigStore,
    shutdown: Arc<ShutdownManager>,
) -> Option<JoinHandle<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(hangup) => hangup,
        Err(e) => {
            tracing::warn!(error = %e, "SIGHUP handler unavailable, config reload disabled");
            return None;
        }
    };

    Some(tokio::spawn(async move {
        loop {
            tokio::select! {
                received = hangup.recv() => {
                    if received.is_none() {
                        break;
                    }
                    reload_config(&config);
                }
                _ = shutdown.wait() => break,
            }
        }
    }))
}

#[cfg(not(unix))]
fn spawn_reload_on_hangup(
    _config: ConfigStore,
    _shutdown: Arc<ShutdownManager>,
) -> Option<JoinHandle<()>> {
    None
}
