use std::future::Future;

use tokio::sync::Semaphore;

/// Bounded-concurrency admission gate.
///
/// Runs at most `capacity` admitted tasks at once; further callers queue
/// in arrival order (the tokio semaphore is fair) and are admitted as
/// permits free up. A permit is held for exactly the lifetime of the
/// admitted future and released on both success and failure paths.
pub struct RequestGate {
    permits: Semaphore,
}

impl RequestGate {
    pub fn new(capacity: usize) -> Self {
        Self {
            permits: Semaphore::new(capacity),
        }
    }

    /// Queue for a permit, then run the task produced by `task`.
    ///
    /// The thunk is only invoked once a permit is held, so a queued
    /// caller does not start its work early.
    pub async fn admit<T, Fut>(&self, task: impl FnOnce() -> Fut) -> T
    where
        Fut: Future<Output = T>,
    {
        // The semaphore is never closed, so acquire cannot fail.
        let _permit = self
            .permits
            .acquire()
            .await
            .expect("admission gate semaphore closed");
        task().await
    }
}
