use std::sync::OnceLock;

use crate::command::HeapOrder;
use crate::runtime;

///////////////////////////////
/// Global Config Options
pub static CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: runtime::LogLevel,
    pub order: HeapOrder,
}

impl Config {
    pub fn get() -> &'static Config {
        CONFIG.get().expect("Config not initialized")
    }

    /// Install `config` as the process-wide configuration. Fails if already set.
    pub fn init(config: Config) -> Result<&'static Config, runtime::Error> {
        CONFIG
            .set(config)
            .map_err(|_| runtime::Error::invalid_argument("config", Some("already initialized")))?;
        Ok(Config::get())
    }

    /// Configured heap order, or the default when running without a config (tests, library use).
    pub fn current_order() -> HeapOrder {
        CONFIG.get().map(|c| c.order).unwrap_or_default()
    }
}
