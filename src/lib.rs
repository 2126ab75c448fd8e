//! Request-execution engine for the Nylas REST API.
//!
//! A [`Client`] holds the base URL and a configured HTTP client. Resource
//! accessors build a target URL with [`Client::url`], then call
//! [`Client::get`], [`Client::put`], [`Client::post`], [`Client::delete`] or
//! [`Client::download`] with an optional per-call credential and a result
//! shape from [`codec`]: [`Json<T>`](codec::Json), [`Text`](codec::Text) or
//! [`NoContent`](codec::NoContent).
//!
//! ```no_run
//! use nylas::{Client, codec::Json};
//!
//! # async fn run() -> nylas::Result<()> {
//! let client = Client::new()?;
//! let url = client.url_for("account")?;
//! let account: serde_json::Value = client.get::<Json<_>>(Some("access-token"), url).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
mod client;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod request;
pub mod response;
pub mod transport;

pub use config::{Client, ClientBuilder, HttpVersion};
pub use error::{Error, RequestFailed, Result};
pub use request::{HttpMethod, UrlBuilder};
pub use response::Download;
