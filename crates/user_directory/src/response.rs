//! Classification of users endpoint responses into records or a `FetchError`.
//! The browser transport hands over the raw status and body; everything after
//! that is decided here.

use crate::{error::FetchError, model::User};

/// Accepts any 2xx status.
///
/// # Errors
/// Returns `FetchError::Http` for every status outside the success range.
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Http { status })
    }
}

/// Decodes the response body as a JSON array of users.
///
/// # Errors
/// Returns `FetchError::Parse` if the body is not valid JSON or does not match
/// the user record shape.
pub fn decode_users(body: &str) -> Result<Vec<User>, FetchError> {
    serde_json::from_str(body).map_err(|err| FetchError::Parse(err.to_string()))
}

/// Classifies a transport failure. Only an abort fired by the configured
/// timeout counts as a timeout; every other failure keeps the transport's own
/// description.
#[must_use]
pub fn classify_transport_error(aborted: bool, message: String, timeout_ms: Option<u32>) -> FetchError {
    match timeout_ms {
        Some(ms) if aborted => FetchError::Timeout { ms },
        _ => FetchError::Network(message),
    }
}
