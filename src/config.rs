// Global configuration for loading the bundled reference data
use once_cell::sync::Lazy;
use std::sync::Mutex;

// Global load-time configuration
pub static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::new()));

/// Settings consulted once, when the bundled tables are first loaded.
///
/// A single global instance is exposed via the `CONFIG` static (a
/// `Lazy<Mutex<Config>>`). Most code should obtain a guard with
/// [`Config::global`] rather than accessing the mutex directly. The loader
/// copies the settings at the moment of the first load, so changes made
/// afterwards do not affect the published tables. If the guard is still held
/// when that first load runs, the loader does not wait for it and uses
/// [`Config::new`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Run the plausibility checks over the built tables and log each finding.
    pub validate_on_load: bool,
    /// Log every record that overrides an earlier one for the same id.
    pub warn_on_duplicates: bool,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Config {
            validate_on_load: false,
            warn_on_duplicates: true,
        }
    }

    pub fn set_validate_on_load(&mut self, enabled: bool) -> &mut Self {
        self.validate_on_load = enabled;
        self
    }

    pub fn set_warn_on_duplicates(&mut self, enabled: bool) -> &mut Self {
        self.warn_on_duplicates = enabled;
        self
    }

    /// Restore the defaults
    pub fn clear(&mut self) {
        *self = Config::new();
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Get the global configuration instance
    pub fn global() -> std::sync::MutexGuard<'static, Self> {
        CONFIG
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
