//! Console logger for the `log` facade
//!
//! Routes records to the browser devtools console. Installed once from the
//! wasm start hook.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// A logger that writes to `console.log` / `console.warn` / `console.error`
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        let value = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            _ => web_sys::console::log_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once; later calls only
/// change the level filter.
pub fn init(level: LevelFilter) {
    // set_logger fails only if a logger is already installed
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Parse a level name from JavaScript ("off", "error", "warn", "info", "debug", "trace")
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}
