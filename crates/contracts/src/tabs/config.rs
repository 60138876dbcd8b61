use serde::{Deserialize, Serialize};

/// Which tab, if any, is selected when the page loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultSelection {
    /// Start with no tab selected and every pane hidden.
    #[default]
    None,
    /// Start with the first tab selected.
    First,
}

impl DefaultSelection {
    /// Raw `selectedIndex` the switcher starts with.
    pub fn initial_index(&self) -> i32 {
        match self {
            DefaultSelection::None => -1,
            DefaultSelection::First => 0,
        }
    }
}

/// Console log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

/// Startup configuration of the tab switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    pub default_tab: DefaultSelection,
    /// Attach the secondary menus to the panes that have one.
    pub secondary_menus: bool,
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TabsConfig::default();
        assert_eq!(config.default_tab, DefaultSelection::None);
        assert!(!config.secondary_menus);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.default_tab.initial_index(), -1);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: TabsConfig = serde_json::from_str(r#"{"default_tab":"first"}"#).unwrap();
        assert_eq!(config.default_tab, DefaultSelection::First);
        assert!(!config.secondary_menus);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let result = serde_json::from_str::<TabsConfig>(r#"{"default_tab":"last"}"#);
        assert!(result.is_err());
    }
}
