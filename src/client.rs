//! Request execution: build, dispatch, check status, then decode or fail.

use log::debug;
use reqwest::Url;
use serde::Serialize;
use std::time::Instant;

use crate::codec::{Decode, encode};
use crate::config::Client;
use crate::error::{Result, classify};
use crate::interceptor::Interceptor;
use crate::request::{HttpMethod, build_request};
use crate::response::Download;

impl Client {
    /// GET `url` and decode the body as `S`.
    pub async fn get<S: Decode>(&self, credential: Option<&str>, url: Url) -> Result<S::Output> {
        self.execute::<S, ()>(credential, url, HttpMethod::Get, None)
            .await
    }

    /// PUT `params` as a JSON object to `url` and decode the body as `S`.
    pub async fn put<S, P>(
        &self,
        credential: Option<&str>,
        url: Url,
        params: Option<&P>,
    ) -> Result<S::Output>
    where
        S: Decode,
        P: Serialize + ?Sized + Sync,
    {
        self.execute::<S, P>(credential, url, HttpMethod::Put, params)
            .await
    }

    /// POST `params` as a JSON object to `url` and decode the body as `S`.
    /// Without params an empty body is sent.
    pub async fn post<S, P>(
        &self,
        credential: Option<&str>,
        url: Url,
        params: Option<&P>,
    ) -> Result<S::Output>
    where
        S: Decode,
        P: Serialize + ?Sized + Sync,
    {
        self.execute::<S, P>(credential, url, HttpMethod::Post, params)
            .await
    }

    /// DELETE `url` and decode the body as `S`.
    pub async fn delete<S: Decode>(
        &self,
        credential: Option<&str>,
        url: Url,
    ) -> Result<S::Output> {
        self.execute::<S, ()>(credential, url, HttpMethod::Delete, None)
            .await
    }

    /// Runs one request to completion.
    ///
    /// `params` are only encoded for PUT and POST. The response body is read
    /// to the end and released before this returns, on success and on every
    /// failure path.
    #[tracing::instrument(skip_all, fields(method = %method, url = %url))]
    pub async fn execute<S, P>(
        &self,
        credential: Option<&str>,
        url: Url,
        method: HttpMethod,
        params: Option<&P>,
    ) -> Result<S::Output>
    where
        S: Decode,
        P: Serialize + ?Sized + Sync,
    {
        let body = match params {
            Some(params) if method.has_body() => Some(encode(params)?),
            _ => None,
        };
        let request = build_request(&self.inner.http, credential, url, method, body)?;

        let response = self.dispatch(request).await?;
        let body = response.bytes().await?;
        debug!("Read {}-byte response body", body.len());

        S::decode(&body)
    }

    /// GETs `url` and hands back the open response instead of decoding it.
    ///
    /// The caller owns the returned [`Download`] and with it the underlying
    /// connection; drop it or call [`Download::close`] when done. Failed
    /// requests are drained and released before the error is returned.
    #[tracing::instrument(skip_all, fields(url = %url))]
    pub async fn download(&self, credential: Option<&str>, url: Url) -> Result<Download> {
        let request = build_request(&self.inner.http, credential, url, HttpMethod::Get, None)?;
        let response = self.dispatch(request).await?;
        Ok(Download::new(response))
    }

    async fn dispatch(&self, mut request: reqwest::Request) -> Result<reqwest::Response> {
        for interceptor in &self.inner.interceptors {
            interceptor.on_request(&mut request);
        }
        if let Some(logging) = &self.inner.logging {
            logging.on_request(&mut request);
        }

        let started = Instant::now();
        let response = self.inner.transport.send(request).await?;
        debug!(
            "HTTP {} after {} ms",
            response.status().as_u16(),
            started.elapsed().as_millis()
        );

        if let Some(logging) = &self.inner.logging {
            logging.on_response(&response);
        }
        for interceptor in &self.inner.interceptors {
            interceptor.on_response(&response);
        }

        if !response.status().is_success() {
            return Err(classify(response).await);
        }
        Ok(response)
    }
}
