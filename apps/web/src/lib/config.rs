//! Configuration loading for the dashboard. Build-time values come from
//! environment variables captured by `option_env!`; a runtime override is read
//! from `window.USER_DIRECTORY_CONFIG` (if present) so static deployments can
//! point at another endpoint without rebuilding. Parsing and validation live in
//! `user_directory::config`.

use js_sys::{Object, Reflect};
use user_directory::{ConfigError, ConfigOverrides, DirectoryConfig};
use wasm_bindgen::JsValue;

/// Loads the effective config and the overrides that were rejected. Rejections
/// are returned rather than logged because logging is configured from the
/// result.
pub fn load() -> (DirectoryConfig, Vec<ConfigError>) {
    let mut config = DirectoryConfig::default();
    let mut rejected = config.apply(build_time_overrides());

    if let Some(runtime) = runtime_overrides() {
        rejected.extend(config.apply(runtime));
    }

    (config, rejected)
}

fn build_time_overrides() -> ConfigOverrides {
    ConfigOverrides {
        users_url: option_env!("USER_DIRECTORY_USERS_URL").map(str::to_string),
        request_timeout_ms: option_env!("USER_DIRECTORY_TIMEOUT_MS").map(str::to_string),
        log_level: option_env!("USER_DIRECTORY_LOG").map(str::to_string),
    }
}

fn runtime_overrides() -> Option<ConfigOverrides> {
    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("USER_DIRECTORY_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(ConfigOverrides {
        users_url: read_runtime_value(&object, "users_url"),
        request_timeout_ms: read_runtime_value(&object, "request_timeout_ms"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

// Accepts strings and numbers so `request_timeout_ms: 5000` works unquoted.
fn read_runtime_value(object: &Object, key: &str) -> Option<String> {
    let value = Reflect::get(object, &JsValue::from_str(key)).ok()?;

    value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))
}
