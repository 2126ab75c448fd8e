//! Implementations behind the `nylas` command-line front end.

use anyhow::{Context, Result};
use log::debug;

use crate::Client;

mod download;
mod get;

pub use download::download;
pub use get::get;

/// Builds the shared client, pointed at `api_url` when given.
#[tracing::instrument(skip(api_url))]
pub fn client(api_url: Option<String>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(api_url) = api_url {
        debug!("Using API URL {}", api_url);
        builder = builder.base_url(api_url);
    }
    builder.build().context("Failed to configure HTTP client")
}
