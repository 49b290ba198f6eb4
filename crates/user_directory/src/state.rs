//! The dashboard's top-level view state.
//!
//! A single enum replaces independent `loading`/`error`/`data` flags so that
//! contradictory combinations cannot be represented. The only transitions are
//! `Loading -> Ready` and `Loading -> Error`; leaving either terminal state
//! requires a page reload.

use crate::{error::FetchError, filter::filter_users, model::User};
use tracing::{error, info, warn};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    /// Fetch failed; holds the message shown to the user.
    Error(String),
    /// Fetch succeeded; holds the full, unfiltered set.
    Ready(Vec<User>),
}

impl ViewState {
    /// Applies the outcome of the one-shot fetch. Only a `Loading` state
    /// accepts it; later results are dropped.
    pub fn settle(&mut self, result: Result<Vec<User>, FetchError>) {
        if !self.is_loading() {
            warn!("ignoring fetch result, view state already settled");
            return;
        }

        *self = match result {
            Ok(users) => {
                info!(count = users.len(), "users loaded");
                Self::Ready(users)
            }
            Err(err) => {
                error!(error = %err, "failed to load users");
                Self::Error(err.to_string())
            }
        };
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The full set; empty unless the fetch succeeded.
    #[must_use]
    pub fn users(&self) -> &[User] {
        match self {
            Self::Ready(users) => users,
            Self::Loading | Self::Error(_) => &[],
        }
    }

    /// The subset of the full set matching `term`.
    #[must_use]
    pub fn filtered(&self, term: &str) -> Vec<User> {
        match self {
            Self::Ready(users) => filter_users(users, term),
            Self::Loading | Self::Error(_) => Vec::new(),
        }
    }
}
