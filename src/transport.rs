//! The single network I/O point of the engine.

use async_trait::async_trait;

/// Sends one fully built request and hands back the response head with its
/// body still unread.
///
/// `reqwest::Client` is the production implementation. Anything that can
/// produce a `reqwest::Response` (a recording fake, a mock) can stand in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
        self.execute(request).await
    }
}
