//! Client for the users endpoint. The endpoint URL and optional timeout come
//! from `DirectoryConfig`; decoding and status classification are shared with
//! native tests through `user_directory::response`.

use crate::app_lib::get_text;
use tracing::info;
use user_directory::{DirectoryConfig, FetchError, User, decode_users};

/// Fetches the full user list.
pub async fn list_users(config: &DirectoryConfig) -> Result<Vec<User>, FetchError> {
    info!(url = %config.users_url, "fetching users");

    let body = get_text(&config.users_url, config.request_timeout_ms).await?;
    decode_users(&body)
}
