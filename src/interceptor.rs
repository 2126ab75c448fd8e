//! Hooks that observe or amend every request the client sends.

use log::{debug, log_enabled};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

/// Runs around every dispatch, in installation order.
pub trait Interceptor: Send + Sync {
    /// Called after the request is built and before it is sent.
    fn on_request(&self, _request: &mut reqwest::Request) {}

    /// Called when a response head arrives, before its status is inspected.
    fn on_response(&self, _response: &reqwest::Response) {}
}

/// Version of this SDK as reported to the service.
pub const SDK_VERSION: &str = env!("NYLAS_SDK_VERSION");

const API_WRAPPER: &str = "x-nylas-api-wrapper";

/// Stamps SDK identification headers on every request.
#[derive(Debug, Clone)]
pub struct VersionHeaders {
    user_agent: HeaderValue,
}

impl VersionHeaders {
    pub fn new() -> Self {
        let user_agent = HeaderValue::from_str(&format!("nylas-rust/{}", SDK_VERSION))
            .unwrap_or_else(|_| HeaderValue::from_static("nylas-rust"));
        Self { user_agent }
    }

    /// The identification headers, also installed as the HTTP client's
    /// default headers.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(
            HeaderName::from_static(API_WRAPPER),
            HeaderValue::from_static("rust"),
        );
        headers
    }
}

impl Default for VersionHeaders {
    fn default() -> Self {
        Self::new()
    }
}

impl Interceptor for VersionHeaders {
    fn on_request(&self, request: &mut reqwest::Request) {
        request.headers_mut().extend(self.headers());
    }
}

/// Logs request lines, request headers and response statuses at `debug`.
///
/// The `Authorization` header value is never logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpLogging;

impl Interceptor for HttpLogging {
    fn on_request(&self, request: &mut reqwest::Request) {
        if !log_enabled!(log::Level::Debug) {
            return;
        }
        debug!("--> {} {}", request.method(), request.url());
        for (name, value) in request.headers() {
            if name == AUTHORIZATION {
                debug!("{}: ██", name);
            } else {
                debug!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
            }
        }
        if let Some(len) = request.body().and_then(|b| b.as_bytes()).map(<[u8]>::len) {
            debug!("--> END {} ({}-byte body)", request.method(), len);
        } else {
            debug!("--> END {}", request.method());
        }
    }

    fn on_response(&self, response: &reqwest::Response) {
        match response.content_length() {
            Some(len) => debug!(
                "<-- {} {} ({}-byte body)",
                response.status(),
                response.url(),
                len
            ),
            None => debug!("<-- {} {}", response.status(), response.url()),
        }
    }
}
