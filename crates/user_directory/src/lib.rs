//! Domain logic for the user directory dashboard.
//!
//! Everything here is platform independent so it can be exercised by native
//! tests: the user record shape returned by the users endpoint, the search
//! filter, the card display helpers, the three-state view model, response
//! classification, and configuration parsing. The browser app in `apps/web`
//! owns the network transport and rendering and calls into this crate for the
//! rest.

pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod model;
pub mod response;
pub mod state;

pub use config::{ConfigOverrides, DEFAULT_USERS_URL, DirectoryConfig};
pub use error::{ConfigError, FetchError};
pub use filter::{filter_users, matches_term};
pub use model::{Company, User};
pub use response::{check_status, classify_transport_error, decode_users};
pub use state::ViewState;
