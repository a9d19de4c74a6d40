use std::future::Future;

use crate::data::{RequestOptions, Response};
use crate::error::FetchError;

/// Asynchronous transport abstraction: performs one request attempt.
///
/// The active transport is chosen once at startup and injected into
/// [`NetClient`](crate::NetClient); retry, admission and progress
/// concerns all live above this seam.
///
/// # Implementations
///
/// - [`ReqwestTransport`]: platform-native implementation using `reqwest`
/// - [`EitherTransport`]: startup-time choice between two implementations
/// - Mock implementations for testing
pub trait Transport: Send + Sync {
    /// Perform one request attempt.
    ///
    /// # Errors
    ///
    /// Implementations map their own failures into [`FetchError`] and
    /// decide which conditions count as "resource not found"; the retry
    /// loop only consults [`FetchError::is_not_found`].
    fn send(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> impl Future<Output = Result<Response, FetchError>> + Send;
}

/// Startup-time choice between a native and an alternate transport.
///
/// Replaces a rebindable process-wide transport variable: construct the
/// variant once, before issuing requests, and hand it to the client.
///
/// ```no_run
/// use refetch::{EitherTransport, NetClient, ReqwestTransport};
///
/// # fn alternate() -> ReqwestTransport { ReqwestTransport::new().unwrap() }
/// # let sandboxed = false;
/// let transport = if sandboxed {
///     EitherTransport::Alternate(alternate())
/// } else {
///     EitherTransport::Native(ReqwestTransport::new().unwrap())
/// };
/// let client = NetClient::new(transport);
/// ```
pub enum EitherTransport<A, B> {
    Native(A),
    Alternate(B),
}

impl<A: Transport, B: Transport> Transport for EitherTransport<A, B> {
    async fn send(&self, url: &str, options: &RequestOptions) -> Result<Response, FetchError> {
        match self {
            EitherTransport::Native(t) => t.send(url, options).await,
            EitherTransport::Alternate(t) => t.send(url, options).await,
        }
    }
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use futures_util::StreamExt;

    use super::*;
    use crate::data::{Headers, Response};

    /// Platform-native transport backed by `reqwest`.
    ///
    /// HTTP 404 and 410 are classified as [`FetchError::NotFound`]; every
    /// other status is returned as a successful [`Response`] with a
    /// streaming body.
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        /// Create a transport with default `reqwest` configuration.
        pub fn new() -> Result<Self, FetchError> {
            let client = reqwest::Client::builder()
                .build()
                .map_err(|e| FetchError::Network(e.to_string()))?;
            Ok(Self { client })
        }

        /// Wrap an existing `reqwest` client.
        pub fn from_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    /// Statuses classified as the "resource not found" failure class.
    fn is_not_found_status(status: reqwest::StatusCode) -> bool {
        status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::GONE
    }

    fn map_send_error(e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::ConnectionRefused
        } else {
            FetchError::Network(e.to_string())
        }
    }

    impl Transport for ReqwestTransport {
        async fn send(&self, url: &str, options: &RequestOptions) -> Result<Response, FetchError> {
            let method = reqwest::Method::from_bytes(options.method.as_bytes())
                .map_err(|_| FetchError::InvalidRequest(format!("method {}", options.method)))?;

            let mut request = self.client.request(method, url);
            for (name, value) in &options.headers {
                request = request.header(name, value);
            }
            if let Some(body) = &options.body {
                request = request.body(body.clone());
            }

            let response = request.send().await.map_err(map_send_error)?;

            let status = response.status();
            if is_not_found_status(status) {
                return Err(FetchError::NotFound(url.to_string()));
            }

            let mut headers = Headers::new();
            for (name, value) in response.headers() {
                headers.append(
                    name.as_str(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                );
            }

            let status_text = status.canonical_reason().unwrap_or_default().to_string();
            let body = response
                .bytes_stream()
                .map(|chunk| chunk.map_err(|e| FetchError::Body(e.to_string())));

            let mut out = Response::new(status.as_u16(), status_text).body(Box::pin(body));
            out.headers = headers;
            Ok(out)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn not_found_and_gone_are_classified_fatal() {
            assert!(is_not_found_status(reqwest::StatusCode::NOT_FOUND));
            assert!(is_not_found_status(reqwest::StatusCode::GONE));
        }

        #[test]
        fn other_statuses_pass_through() {
            for code in [200u16, 301, 403, 429, 500, 503] {
                let status = reqwest::StatusCode::from_u16(code).unwrap();
                assert!(!is_not_found_status(status));
            }
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestTransport;
