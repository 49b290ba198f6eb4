#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    let (config, rejected) = app_lib::config::load();
    app_lib::telemetry::init(config.log_level);

    for err in rejected {
        tracing::warn!(error = %err, "ignoring configuration override");
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
