use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_util::Stream;

use crate::data::{ProgressHandler, Response};
use crate::error::FetchError;

/// A stream that reports cumulative fraction-complete as chunks pass
/// through.
///
/// Each chunk is forwarded unchanged; after forwarding, the handler is
/// invoked with `observed / total`. The reported sequence is
/// non-decreasing and ends at exactly `1.0` when `total` matches the
/// real byte count.
pub struct ProgressStream<S> {
    inner: S,
    handler: ProgressHandler,
    observed: u64,
    total: u64,
}

impl<S> Stream for ProgressStream<S>
where
    S: Stream<Item = Result<Bytes, FetchError>> + Unpin,
{
    type Item = Result<Bytes, FetchError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        match Pin::new(&mut this.inner).poll_next(cx) {
            Poll::Ready(Some(Ok(chunk))) => {
                this.observed += chunk.len() as u64;
                (this.handler)(this.observed as f64 / this.total as f64);
                Poll::Ready(Some(Ok(chunk)))
            }
            other => other,
        }
    }
}

/// Instrument a response body with byte-level progress reporting.
///
/// Pure transform, no network activity. The response is returned
/// unchanged when progress cannot be computed:
/// - the response has no body, or
/// - `Content-Length` is absent, unparseable or zero.
///
/// Otherwise the body is consumed and re-wrapped; the returned response
/// carries the same status, status text and headers with the
/// instrumented stream as its body.
pub fn instrument(mut response: Response, handler: ProgressHandler) -> Response {
    if response.body.is_none() {
        return response;
    }
    let Some(total) = response.content_length().filter(|total| *total > 0) else {
        return response;
    };

    // Checked above.
    let Some(inner) = response.body.take() else {
        return response;
    };
    response.body = Some(Box::pin(ProgressStream {
        inner,
        handler,
        observed: 0,
        total,
    }));
    response
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use futures_util::{StreamExt, stream};

    use super::*;
    use crate::data::BodyStream;

    fn chunked_body(chunks: &[&'static [u8]]) -> BodyStream {
        let items: Vec<Result<Bytes, FetchError>> = chunks
            .iter()
            .copied()
            .map(|c| Ok(Bytes::from_static(c)))
            .collect();
        Box::pin(stream::iter(items))
    }

    fn recording_handler() -> (ProgressHandler, Arc<Mutex<Vec<f64>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handler: ProgressHandler = Arc::new(move |fraction| {
            sink.lock().unwrap().push(fraction);
        });
        (handler, seen)
    }

    async fn drain(body: BodyStream) -> Vec<u8> {
        let mut out = Vec::new();
        let mut body = body;
        while let Some(chunk) = body.next().await {
            out.extend_from_slice(&chunk.unwrap());
        }
        out
    }

    #[tokio::test]
    async fn fractions_are_monotonic_and_end_at_one() {
        let response = Response::new(200, "OK")
            .header("Content-Length", "10")
            .body(chunked_body(&[b"ab", b"cdefg", b"hij"]));
        let (handler, seen) = recording_handler();

        let response = instrument(response, handler);
        let bytes = drain(response.body.unwrap()).await;

        assert_eq!(bytes, b"abcdefghij");
        let seen = seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[0.2, 0.7, 1.0]);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn missing_content_length_passes_through_silently() {
        let response = Response::new(200, "OK").body(chunked_body(&[b"abc", b"def"]));
        let (handler, seen) = recording_handler();

        let response = instrument(response, handler);
        let bytes = drain(response.body.unwrap()).await;

        assert_eq!(bytes, b"abcdef");
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn zero_content_length_passes_through_silently() {
        let response = Response::new(200, "OK")
            .header("Content-Length", "0")
            .body(chunked_body(&[b"abc"]));
        let (handler, seen) = recording_handler();

        let response = instrument(response, handler);
        drain(response.body.unwrap()).await;

        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn bodyless_response_is_unchanged() {
        let response = Response::new(204, "No Content").header("Content-Length", "10");
        let (handler, seen) = recording_handler();

        let response = instrument(response, handler);

        assert!(response.body.is_none());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn inaccurate_declared_length_is_not_corrected() {
        // Declared 20, actual 10: progress tops out at 0.5.
        let response = Response::new(200, "OK")
            .header("Content-Length", "20")
            .body(chunked_body(&[b"abcdefghij"]));
        let (handler, seen) = recording_handler();

        let response = instrument(response, handler);
        drain(response.body.unwrap()).await;

        assert_eq!(seen.lock().unwrap().as_slice(), &[0.5]);
    }
}
