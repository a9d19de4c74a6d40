use bytes::Bytes;

/// Opaque request configuration, passed through to the transport unmodified.
///
/// This layer imposes no header policy, redirect policy or body
/// construction policy; whatever the transport understands goes here.
///
/// # Examples
///
/// ```
/// use refetch::RequestOptions;
///
/// let options = RequestOptions::default()
///     .method("POST")
///     .header("Content-Type", "application/json");
/// ```
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method. Default: `GET`.
    pub method: String,

    /// Headers sent with every attempt, in insertion order.
    pub headers: Vec<(String, String)>,

    /// Optional request body.
    pub body: Option<Bytes>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    /// Set the HTTP method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Append a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}
