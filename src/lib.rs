use std::str::FromStr;

use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, LogLevel, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Install the panic hook, console logger and browser clock.
///
/// The console level comes from the page's `?log=` query parameter
/// (`trace`..`error`); debug builds default to `debug`, release to `info`.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let level = requested_log_level().unwrap_or(if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    });
    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new(level)));
    domain::logging::init_time_provider(Box::new(
        infrastructure::services::BrowserTimeProvider::new(),
    ));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("Bar chart module ready (log level {})", level.as_ref()),
    );
}

fn requested_log_level() -> Option<LogLevel> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    LogLevel::from_str(&params.get("log")?).ok()
}
