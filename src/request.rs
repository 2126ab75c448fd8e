//! Outgoing request assembly: target URLs and concrete `reqwest::Request`s.

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, Url};
use std::fmt;

use crate::auth::attach_auth;
use crate::error::{Error, Result};

/// HTTP verbs understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
}

impl HttpMethod {
    /// PUT and POST send a JSON body; GET and DELETE never do.
    pub fn has_body(self) -> bool {
        matches!(self, HttpMethod::Put | HttpMethod::Post)
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Builds target URLs on top of the client's base URL.
///
/// Path segments are appended to whatever path the base URL already has, so
/// a base of `https://host/v3` plus `account` yields `https://host/v3/account`.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    url: Url,
}

impl UrlBuilder {
    pub(crate) fn new(base: &Url) -> Self {
        Self { url: base.clone() }
    }

    /// Appends `/`-separated path segments. Each segment is percent-encoded.
    pub fn path(mut self, path: &str) -> Result<Self> {
        let url_str = self.url.to_string();
        {
            let mut segments = self.url.path_segments_mut().map_err(|_| Error::InvalidUrl {
                url: url_str,
                reason: "URL cannot be a base".to_string(),
            })?;
            segments.pop_if_empty();
            segments.extend(path.split('/').filter(|s| !s.is_empty()));
        }
        Ok(self)
    }

    /// Appends one `key=value` query pair.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(key, value);
        self
    }

    pub fn build(self) -> Url {
        self.url
    }
}

/// Assembles a request for `url` with the given method, body and credential.
///
/// `body` is only attached for PUT and POST, with a JSON content type. A POST
/// without a body gets an explicit zero-length one, since some endpoints
/// require a body marker even when there is nothing to send.
pub fn build_request(
    http: &reqwest::Client,
    credential: Option<&str>,
    url: Url,
    method: HttpMethod,
    body: Option<Vec<u8>>,
) -> Result<reqwest::Request> {
    let mut builder = attach_auth(http.request(method.into(), url), credential);

    if method.has_body() {
        match body {
            Some(json) => {
                builder = builder
                    .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                    .body(json);
            }
            None if method == HttpMethod::Post => {
                builder = builder.body(Vec::new());
            }
            None => {}
        }
    }

    Ok(builder.build()?)
}
