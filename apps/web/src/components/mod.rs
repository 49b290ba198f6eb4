//! Shared UI components exported for routes.

pub(crate) mod layout;
pub(crate) mod ui;
pub(crate) mod users;

pub(crate) use layout::AppShell;
pub(crate) use ui::{ErrorMessage, LoadingSpinner};
pub(crate) use users::{SearchBar, UserList};
