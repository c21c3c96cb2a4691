use std::sync::atomic::{AtomicBool, Ordering};

use tokio::signal;
use tokio::sync::Notify;

/// Coordinates graceful shutdown between OS signals and [`ServerHandle`]s.
///
/// [`ServerHandle`]: crate::web::ServerHandle
pub struct ShutdownManager {
    shutdown: AtomicBool,
    notify: Notify,
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self {
            shutdown: AtomicBool::new(false),
            notify: Notify::new(),
        }
    }

    pub fn signal_shutdown(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("Shutdown requested");
            self.notify.notify_waiters();
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Resolves once [`signal_shutdown`](Self::signal_shutdown) has been called.
    pub async fn wait(&self) {
        // Register before checking the flag so a concurrent signal is not lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }

    /// Resolves on Ctrl-C, SIGTERM (unix) or an explicit shutdown signal.
    pub async fn wait_for_shutdown(&self) {
        #[cfg(unix)]
        {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    tokio::select! {
                        _ = signal::ctrl_c() => {},
                        _ = sigterm.recv() => {},
                        _ = self.wait() => {},
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "SIGTERM handler unavailable");
                    tokio::select! {
                        _ = signal::ctrl_c() => {},
                        _ = self.wait() => {},
                    }
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = signal::ctrl_c() => {},
                _ = self.wait() => {},
            }
        }

        // Wakes other waiters when the trigger was a signal
        self.signal_shutdown();
        tracing::info!("Shutting down gracefully...");
    }
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}
