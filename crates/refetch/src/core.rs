//! Pure transformations: retry classification.

mod retry;

pub use retry::should_retry;
