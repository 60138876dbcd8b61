//! Startup configuration read from the page URL.
//!
//! `?default_tab=first&secondary_menus=true&log_level=info`; missing keys take their
//! defaults and unknown keys are ignored.

use contracts::tabs::{LogLevel, TabsConfig};
use thiserror::Error;
use web_sys::window;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window.location is not available")]
    Location,
    #[error("invalid query string: {0}")]
    Query(#[from] serde_qs::Error),
}

/// Parses a `location.search` value, with or without the leading `?`.
pub fn parse_query(search: &str) -> Result<TabsConfig, ConfigError> {
    Ok(serde_qs::from_str(search.trim_start_matches('?'))?)
}

/// Reads the configuration of the current page.
pub fn load_config() -> Result<TabsConfig, ConfigError> {
    let search = window()
        .ok_or(ConfigError::Location)?
        .location()
        .search()
        .map_err(|_| ConfigError::Location)?;
    parse_query(&search)
}

pub fn log_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Error => log::Level::Error,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Info => log::Level::Info,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Trace => log::Level::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::tabs::DefaultSelection;

    #[test]
    fn test_empty_query_gives_defaults() {
        assert_eq!(parse_query("").unwrap(), TabsConfig::default());
        assert_eq!(parse_query("?").unwrap(), TabsConfig::default());
    }

    #[test]
    fn test_full_query() {
        let config = parse_query("?default_tab=first&secondary_menus=true&log_level=warn").unwrap();
        assert_eq!(config.default_tab, DefaultSelection::First);
        assert!(config.secondary_menus);
        assert_eq!(log_level(config.log_level), log::Level::Warn);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = parse_query("active=cza&secondary_menus=true").unwrap();
        assert!(config.secondary_menus);
        assert_eq!(config.default_tab, DefaultSelection::None);
    }

    #[test]
    fn test_bad_value_is_an_error() {
        let result = parse_query("default_tab=last");
        assert!(matches!(result, Err(ConfigError::Query(_))));
    }
}
