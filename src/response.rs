//! Caller-owned response handle returned by [`Client::download`](crate::Client::download).

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use std::io::Write;

use crate::error::{Error, Result};

/// An open, successful response whose body has not been read yet.
///
/// The body holds a live connection. It is released when the handle is
/// dropped, when the body has been fully consumed through one of the
/// consuming methods, or explicitly through [`Download::close`].
#[derive(Debug)]
pub struct Download {
    inner: reqwest::Response,
    bytes_received: u64,
}

impl Download {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        Self {
            inner: response,
            bytes_received: 0,
        }
    }

    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.inner
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// Declared body length, if the server sent one.
    pub fn content_length(&self) -> Option<u64> {
        self.inner.content_length()
    }

    /// Bytes handed out so far through [`Download::chunk`].
    pub fn bytes_received(&self) -> u64 {
        self.bytes_received
    }

    /// Reads the next chunk of the body; `None` once the body is exhausted.
    pub async fn chunk(&mut self) -> Result<Option<Bytes>> {
        match self.inner.chunk().await? {
            Some(chunk) => {
                self.bytes_received += chunk.len() as u64;
                Ok(Some(chunk))
            }
            None => Ok(None),
        }
    }

    /// Reads the rest of the body into memory.
    pub async fn bytes(self) -> Result<Bytes> {
        Ok(self.inner.bytes().await?)
    }

    /// Turns the rest of the body into a stream of chunks.
    pub fn bytes_stream(self) -> impl Stream<Item = Result<Bytes>> {
        self.inner.bytes_stream().map(|chunk| chunk.map_err(Error::from))
    }

    /// Copies the rest of the body into `writer` and returns the number of
    /// bytes written.
    pub async fn write_to<W: Write>(mut self, writer: &mut W) -> Result<u64> {
        let mut written: u64 = 0;
        while let Some(chunk) = self.chunk().await? {
            writer.write_all(&chunk)?;
            written += chunk.len() as u64;
        }
        writer.flush()?;

        debug!(
            "Downloaded {:.2} MB",
            written as f64 / (1024.0 * 1024.0)
        );

        Ok(written)
    }

    /// Releases the connection without reading the remaining body.
    pub fn close(self) {
        debug!(
            "Closing download from {} after {} bytes",
            self.inner.url(),
            self.bytes_received
        );
    }
}
