use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use crate::Client;
use crate::codec::{Json, Text};

/// Fetches `path` and writes the body to `out`, pretty-printed as JSON
/// unless `raw` is set.
#[tracing::instrument(skip(client, token, out))]
pub async fn get<W: Write>(
    client: &Client,
    token: Option<&str>,
    path: &str,
    query: &[(String, String)],
    raw: bool,
    out: &mut W,
) -> Result<()> {
    let mut url = client.url().path(path)?;
    for (key, value) in query {
        url = url.query(key, value);
    }
    let url = url.build();

    debug!("Fetching {}...", url);

    if raw {
        let body = client
            .get::<Text>(token, url)
            .await
            .with_context(|| format!("Failed to fetch {}", path))?;
        writeln!(out, "{}", body)?;
    } else {
        let value = client
            .get::<Json<serde_json::Value>>(token, url)
            .await
            .with_context(|| format!("Failed to fetch {}", path))?;
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    }

    Ok(())
}
