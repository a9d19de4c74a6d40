use std::sync::Arc;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::core::should_retry;
use crate::data::{ClientOptions, ProgressHandler, RequestOptions, Response};
use crate::effects::limit::RequestGate;
use crate::effects::notify::{Connectivity, LogNotifier, Notifier, SharedConnectivity};
use crate::effects::progress::instrument;
use crate::effects::transport::Transport;
use crate::error::FetchError;

const OFFLINE_HEADLINE: &str = "No Internet Connection";
const OFFLINE_MESSAGE: &str = "You appear to be offline.";
const OFFLINE_CONFIRM: &str = "Retry";

/// The request orchestrator: bounded admission, resilient retry and
/// progress instrumentation around an injected [`Transport`].
///
/// Construct once at startup with the transport for the current platform
/// and share it; all configuration is fixed at construction.
pub struct NetClient<C: Transport> {
    transport: C,
    gate: RequestGate,
    options: ClientOptions,
    connectivity: Arc<dyn Connectivity>,
    notifier: Arc<dyn Notifier>,
}

impl<C: Transport> NetClient<C> {
    /// Create a client with default options (capacity 4, 1 s retry delay,
    /// not-found ceiling 100).
    pub fn new(transport: C) -> Self {
        Self::with_options(transport, ClientOptions::default())
    }

    pub fn with_options(transport: C, options: ClientOptions) -> Self {
        Self {
            transport,
            gate: RequestGate::new(options.capacity),
            options,
            connectivity: Arc::new(SharedConnectivity::new()),
            notifier: Arc::new(LogNotifier),
        }
    }

    /// Replace the connectivity source consulted between retries.
    #[must_use]
    pub fn connectivity(mut self, connectivity: Arc<dyn Connectivity>) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Replace the offline prompt implementation.
    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// One bounded transport call: no retry, no progress.
    ///
    /// Queues for an admission permit (FIFO), performs the attempt, and
    /// releases the permit when the attempt settles, on both paths.
    ///
    /// # Errors
    ///
    /// Propagates the transport failure unchanged.
    pub async fn fetch_limited(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<Response, FetchError> {
        self.gate.admit(|| self.transport.send(url, options)).await
    }

    /// Resilient request: retries transient failures until success.
    ///
    /// Each attempt goes through the admission gate, so a retried request
    /// re-queues per attempt and never holds more than one permit.
    /// Between attempts the loop sleeps for the configured delay; while
    /// offline it first awaits the notifier prompt. There is no attempt
    /// or wall-clock bound for failures other than "not found"; callers
    /// needing a deadline should drop the future.
    ///
    /// On success, when a progress handler is supplied the response body
    /// is re-wrapped to report fraction-complete per chunk.
    ///
    /// # Errors
    ///
    /// Only "not found" failures past the configured ceiling surface
    /// here; everything else is absorbed and retried.
    pub async fn fetch(
        &self,
        url: &str,
        options: &RequestOptions,
        progress: Option<ProgressHandler>,
    ) -> Result<Response, FetchError> {
        let mut attempts = 0u32;
        loop {
            match self.fetch_limited(url, options).await {
                Ok(response) => {
                    return Ok(match progress {
                        Some(handler) => instrument(response, handler),
                        None => response,
                    });
                }
                Err(error) => {
                    attempts += 1;
                    if error.is_not_found()
                        && !should_retry(&error, attempts, self.options.not_found_ceiling)
                    {
                        warn!(url, attempts, "giving up on not-found resource");
                        return Err(error);
                    }
                    self.wait_before_retry(url, attempts, &error).await;
                }
            }
        }
    }

    async fn wait_before_retry(&self, url: &str, attempts: u32, error: &FetchError) {
        if self.connectivity.is_online() {
            debug!(url, attempts, %error, "transient failure, retrying");
        } else {
            warn!(url, attempts, %error, "offline, prompting before retry");
            self.notifier
                .notify(OFFLINE_HEADLINE, OFFLINE_MESSAGE, OFFLINE_CONFIRM)
                .await;
        }
        sleep(self.options.retry_delay).await;
    }
}
