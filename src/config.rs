//! Client construction: base URL, underlying HTTP client and interceptors.

use log::debug;
use reqwest::Url;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::interceptor::{HttpLogging, Interceptor, VersionHeaders};
use crate::request::UrlBuilder;
use crate::transport::Transport;

pub const DEFAULT_BASE_URL: &str = "https://api.nylas.com";

/// Default connect, read and write timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP protocol negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpVersion {
    /// HTTP/1.1 only. Avoids stalls seen with multiplexed HTTP/2
    /// connections that are never shut down explicitly.
    #[default]
    Http1,
    /// HTTP/2 with prior knowledge.
    Http2,
    /// Whatever the server and TLS negotiation settle on.
    Auto,
}

type Customizer = Box<dyn FnOnce(reqwest::ClientBuilder) -> reqwest::ClientBuilder + Send>;

/// Entry point to the service: a base URL plus a configured HTTP client.
///
/// Immutable once built. Cloning is cheap and clones share the same
/// connection pool, so one instance is meant to be built at startup and
/// handed to every call site.
#[derive(Clone)]
pub struct Client {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) base_url: Url,
    pub(crate) http: reqwest::Client,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) interceptors: Vec<Arc<dyn Interceptor>>,
    /// Runs after every other interceptor, so it sees the final request.
    pub(crate) logging: Option<HttpLogging>,
}

impl Client {
    /// Client for [`DEFAULT_BASE_URL`] with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// A URL builder seeded from the base URL.
    pub fn url(&self) -> UrlBuilder {
        UrlBuilder::new(&self.inner.base_url)
    }

    /// Shortcut for `self.url().path(path)?.build()`.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        Ok(self.url().path(path)?.build())
    }

    /// The underlying HTTP client, for reuse by callers.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.inner.http
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("interceptors", &self.inner.interceptors.len())
            .finish()
    }
}

/// Builder for [`Client`].
///
/// Defaults: [`DEFAULT_BASE_URL`], 60 second connect/read/write timeouts,
/// HTTP/1.1 only, SDK identification headers and HTTP logging installed.
pub struct ClientBuilder {
    base_url: String,
    connect_timeout: Duration,
    read_timeout: Duration,
    write_timeout: Duration,
    protocol: HttpVersion,
    logging: bool,
    interceptors: Vec<Arc<dyn Interceptor>>,
    customizers: Vec<Customizer>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
            write_timeout: DEFAULT_TIMEOUT,
            protocol: HttpVersion::default(),
            logging: true,
            interceptors: Vec::new(),
            customizers: Vec::new(),
            transport: None,
        }
    }
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Recorded for parity with the other timeouts. reqwest has no write
    /// timeout, and there is no deadline for a whole call: a slow body only
    /// fails when a single read stalls longer than the read timeout.
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    pub fn protocol(mut self, protocol: HttpVersion) -> Self {
        self.protocol = protocol;
        self
    }

    /// Turns the built-in [`HttpLogging`] interceptor on or off. When on, it
    /// runs after every other interceptor.
    pub fn logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    /// Appends an interceptor. Extra interceptors run after the built-in ones.
    pub fn interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Adjusts the `reqwest::ClientBuilder` after the defaults (timeouts,
    /// protocol, SDK identification headers) are applied and before the
    /// client is built. May be called more than once.
    pub fn http_client<F>(mut self, customize: F) -> Self
    where
        F: FnOnce(reqwest::ClientBuilder) -> reqwest::ClientBuilder + Send + 'static,
    {
        self.customizers.push(Box::new(customize));
        self
    }

    /// Dispatches requests through `transport` instead of the built client.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn build(self) -> Result<Client> {
        let base_url = parse_base_url(&self.base_url)?;

        let version_headers = VersionHeaders::new();
        let mut builder = reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .read_timeout(self.read_timeout)
            .default_headers(version_headers.headers());
        builder = match self.protocol {
            HttpVersion::Http1 => builder.http1_only(),
            HttpVersion::Http2 => builder.http2_prior_knowledge(),
            HttpVersion::Auto => builder,
        };
        for customize in self.customizers {
            builder = customize(builder);
        }
        let http = builder.build()?;

        // Custom transports never see the default headers, so they are stamped again
        let mut interceptors: Vec<Arc<dyn Interceptor>> = vec![Arc::new(version_headers)];
        interceptors.extend(self.interceptors);
        let logging = self.logging.then_some(HttpLogging);

        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(http.clone()) as Arc<dyn Transport>);

        debug!(
            "Built client for {} ({:?}, {} interceptors, write timeout {:?} not enforced)",
            base_url,
            self.protocol,
            interceptors.len(),
            self.write_timeout
        );

        Ok(Client {
            inner: Arc::new(ClientInner {
                base_url,
                http,
                transport,
                interceptors,
                logging,
            }),
        })
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let invalid = |reason: String| Error::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be a base".to_string()));
    }
    Ok(url)
}
