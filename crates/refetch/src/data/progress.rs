use std::sync::Arc;

/// Callback invoked with the cumulative fraction of body bytes observed.
///
/// The fraction is in `[0, 1]` and non-decreasing within one response.
/// It reaches exactly `1.0` only when the declared `Content-Length` is
/// accurate; a wrong declaration is not corrected.
pub type ProgressHandler = Arc<dyn Fn(f64) + Send + Sync>;
