//! Domain-level frontend features and their API clients. Routes import these
//! modules to keep view code focused on rendering.

pub(crate) mod users;
