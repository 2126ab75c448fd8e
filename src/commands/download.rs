use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::Client;

/// Downloads `path` into the file at `output` and returns the number of bytes
/// written. The file is only created once the server has answered with
/// success.
#[tracing::instrument(skip(client, token))]
pub async fn download(
    client: &Client,
    token: Option<&str>,
    path: &str,
    output: &Path,
) -> Result<u64> {
    let url = client.url_for(path)?;

    info!("Downloading {} to {:?}...", url, output);

    let download = client
        .download(token, url)
        .await
        .with_context(|| format!("Failed to download {}", path))?;

    let file = File::create(output)
        .with_context(|| format!("Failed to create file at {:?}", output))?;
    let mut writer = BufWriter::new(file);
    let bytes = download
        .write_to(&mut writer)
        .await
        .with_context(|| format!("Failed to write download to {:?}", output))?;

    info!("Download complete.");
    Ok(bytes)
}
