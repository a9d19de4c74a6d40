use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::warn;

/// Synchronously readable connectivity state.
///
/// Consulted by the retry loop after every retryable failure to decide
/// between a plain delay and the offline prompt.
pub trait Connectivity: Send + Sync {
    fn is_online(&self) -> bool;
}

/// Connectivity flag backed by a shared atomic.
///
/// Clones observe the same flag, so a platform integration can flip it
/// from wherever it learns about network changes.
#[derive(Clone)]
pub struct SharedConnectivity {
    online: Arc<AtomicBool>,
}

impl SharedConnectivity {
    /// Starts online.
    pub fn new() -> Self {
        Self {
            online: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Relaxed);
    }
}

impl Default for SharedConnectivity {
    fn default() -> Self {
        Self::new()
    }
}

impl Connectivity for SharedConnectivity {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }
}

/// Blocking informational prompt shown while the device is offline.
///
/// `notify` resolves once the user has acknowledged the message; the
/// retry loop waits on it before attempting again.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, headline: &str, message: &str, confirm_label: &str);
}

/// Default notifier for headless use: logs the message and resolves
/// immediately, degrading the offline path to a plain delayed retry.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, headline: &str, message: &str, _confirm_label: &str) {
        warn!(headline, message, "no notifier configured, continuing");
    }
}
