//! I/O operations and effectful computations for the request layer.
//!
//! Everything that touches the network, the clock or the user lives here,
//! behind trait seams so tests can substitute their own implementations.

mod client;
mod limit;
mod notify;
mod progress;
mod transport;

pub use client::NetClient;
pub use limit::RequestGate;
pub use notify::{Connectivity, LogNotifier, Notifier, SharedConnectivity};
pub use progress::instrument;
pub use transport::{EitherTransport, Transport};

#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
