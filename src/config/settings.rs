//! User settings for the expense tracker
//!
//! Manages user preferences: currency symbol, notification timing, chart
//! animation and key bindings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of every amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Seconds before a notification dismisses itself
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// Duration of the chart transition after a refresh
    #[serde(default = "default_chart_animation_ms")]
    pub chart_animation_ms: u64,

    /// Date format used to prefill new expenses (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// TUI key bindings, action name to key
    #[serde(default = "default_keybindings")]
    pub keybindings: BTreeMap<String, String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_notification_secs() -> u64 {
    5
}

fn default_chart_animation_ms() -> u64 {
    1000
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Default key for every bindable TUI action
pub fn default_keybindings() -> BTreeMap<String, String> {
    [
        ("quit", "q"),
        ("help", "?"),
        ("add_expense", "a"),
        ("set_limit", "l"),
        ("delete_expense", "d"),
        ("toggle_theme", "t"),
    ]
    .into_iter()
    .map(|(action, key)| (action.to_string(), key.to_string()))
    .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            notification_secs: default_notification_secs(),
            chart_animation_ms: default_chart_animation_ms(),
            date_format: default_date_format(),
            keybindings: default_keybindings(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.notification_secs, 5);
        assert_eq!(settings.keybindings.get("add_expense").map(String::as_str), Some("a"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.notification_secs = 8;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.notification_secs, 8);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.chart_animation_ms, 1000);
        assert_eq!(settings.keybindings, default_keybindings());
    }

    #[test]
    fn test_unparseable_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
