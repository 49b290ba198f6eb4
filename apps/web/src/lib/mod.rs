//! Shared frontend utilities for HTTP access, configuration, logging, and styling.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features.

pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod telemetry;
pub(crate) mod theme;

pub(crate) use api::get_text;
