use log::LevelFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);
impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" | "warning" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" | "none" => LevelFilter::Off,
            _ => return Err(format!("Invalid log level: {}", s)),
        };
        Ok(LogLevel(level))
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(LevelFilter::Warn)
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// Install the env_logger backend. RUST_LOG still refines per-module filters
/// on top of `log_level`.
pub fn setup_global_logger(log_level: LogLevel) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(log_level.into())
        .parse_default_env()
        .format_timestamp(None)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!("TRACE".parse::<LogLevel>(), Ok(LogLevel(LevelFilter::Trace)));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel(LevelFilter::Warn)));
        assert_eq!("off".parse::<LogLevel>(), Ok(LogLevel(LevelFilter::Off)));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
