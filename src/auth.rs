//! Per-call authentication.
//!
//! The service authenticates with HTTP Basic auth: the credential (an access
//! token or a client id) is the username and the password is empty. Calls
//! without a credential go out anonymously.

use reqwest::RequestBuilder;

/// Attaches `Authorization: Basic base64("{credential}:")` when a credential
/// is given; leaves the request untouched otherwise.
pub fn attach_auth(builder: RequestBuilder, credential: Option<&str>) -> RequestBuilder {
    match credential {
        Some(user) => builder.basic_auth(user, Some("")),
        None => builder,
    }
}
