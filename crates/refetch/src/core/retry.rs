use crate::error::FetchError;

/// Decide whether a failed attempt should be retried.
///
/// Pure predicate, no side effects. Retry is disallowed only once the
/// failure is a "not found" condition *and* the attempt count has passed
/// `ceiling` (strictly greater-than). Every other failure kind is always
/// retryable; the loop itself owns termination for those.
///
/// A "not found" failure being eligible for up to `ceiling` retries is a
/// deliberate tolerance for transient 404-like states from
/// eventually-consistent backends, not an oversight.
///
/// # Arguments
///
/// * `error` - The failure from the last attempt
/// * `attempts` - Number of attempts made so far (1 after the first failure)
/// * `ceiling` - Attempt ceiling for "not found" failures
///
/// # Examples
///
/// ```
/// use refetch::{FetchError, should_retry};
///
/// let not_found = FetchError::NotFound("missing.bin".to_string());
/// assert!(should_retry(&not_found, 100, 100));
/// assert!(!should_retry(&not_found, 101, 100));
///
/// // Other failure kinds have no ceiling.
/// let transient = FetchError::Timeout;
/// assert!(should_retry(&transient, 10_000, 100));
/// ```
#[must_use]
pub fn should_retry(error: &FetchError, attempts: u32, ceiling: u32) -> bool {
    !error.is_not_found() || attempts <= ceiling
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> FetchError {
        FetchError::NotFound("x".to_string())
    }

    #[test]
    fn not_found_tolerated_up_to_ceiling() {
        assert!(should_retry(&not_found(), 1, 100));
        assert!(should_retry(&not_found(), 99, 100));
        assert!(should_retry(&not_found(), 100, 100));
    }

    #[test]
    fn not_found_rejected_strictly_past_ceiling() {
        // The check is ">100", not ">=100".
        assert!(!should_retry(&not_found(), 101, 100));
        assert!(!should_retry(&not_found(), 500, 100));
    }

    #[test]
    fn other_failures_have_no_ceiling() {
        for error in [
            FetchError::Timeout,
            FetchError::ConnectionRefused,
            FetchError::Network("reset".to_string()),
        ] {
            assert!(should_retry(&error, 1, 100));
            assert!(should_retry(&error, 1_000_000, 100));
        }
    }
}
