use std::time::Duration;

/// Configuration for a [`NetClient`](crate::NetClient).
///
/// The defaults reproduce the production constants: 4 concurrent
/// transport calls, a flat 1 second retry delay, and a 100-attempt
/// ceiling for "not found" failures.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use refetch::ClientOptions;
///
/// let options = ClientOptions::default()
///     .capacity(2)
///     .retry_delay(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Maximum number of transport calls in flight at once.
    ///
    /// Additional calls queue in arrival order and are admitted as
    /// capacity frees up.
    ///
    /// Default: 4
    pub capacity: usize,

    /// Flat delay between retry attempts.
    ///
    /// Applied after every retryable failure, including after the offline
    /// prompt is acknowledged.
    ///
    /// Default: 1s
    pub retry_delay: Duration,

    /// Number of attempts a "not found" failure is tolerated before it is
    /// propagated to the caller.
    ///
    /// The check is strictly greater-than: with the default of 100, the
    /// 101st failed attempt surfaces the error. Other failure kinds have
    /// no ceiling.
    ///
    /// Default: 100
    pub not_found_ceiling: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            capacity: 4,
            retry_delay: Duration::from_secs(1),
            not_found_ceiling: 100,
        }
    }
}

impl ClientOptions {
    /// Set the number of concurrent transport calls.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Set the flat delay between retry attempts.
    #[must_use]
    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Set the "not found" attempt ceiling.
    #[must_use]
    pub fn not_found_ceiling(mut self, ceiling: u32) -> Self {
        self.not_found_ceiling = ceiling;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_constants() {
        let options = ClientOptions::default();
        assert_eq!(options.capacity, 4);
        assert_eq!(options.retry_delay, Duration::from_secs(1));
        assert_eq!(options.not_found_ceiling, 100);
    }

    #[test]
    fn capacity_never_drops_to_zero() {
        let options = ClientOptions::default().capacity(0);
        assert_eq!(options.capacity, 1);
    }
}
