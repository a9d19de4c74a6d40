//! Immutable data types for the request layer.
//!
//! Configuration, the opaque request descriptor, the response model and the
//! progress handler type live here. These types are passed between
//! functions without mutation.

mod options;
mod progress;
mod request;
mod response;

pub use options::ClientOptions;
pub use progress::ProgressHandler;
pub use request::RequestOptions;
pub use response::{BodyStream, Headers, Response};
