//! Resilient, concurrency-bounded HTTP request layer.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable request/response types and configuration
//! - [`core`] - Pure transformations (retry classification)
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Key Features
//!
//! - **Bounded Admission**: At most N transport calls in flight, FIFO order
//! - **Resilient Retry**: Transient failures are retried until success;
//!   going offline surfaces a user-facing prompt instead of a silent stall
//! - **Swappable Transport**: The [`Transport`] seam is chosen once at
//!   startup; no hidden global state
//! - **Streaming Progress**: Response bodies are re-wrapped to report
//!   fraction-complete per chunk while staying consumable as a stream

mod core;
mod data;
mod effects;
mod error;

pub use core::should_retry;
pub use data::{BodyStream, ClientOptions, Headers, ProgressHandler, RequestOptions, Response};
pub use effects::{
    Connectivity, EitherTransport, LogNotifier, NetClient, Notifier, RequestGate,
    SharedConnectivity, Transport, instrument,
};
pub use error::FetchError;

#[cfg(feature = "reqwest")]
pub use effects::ReqwestTransport;
