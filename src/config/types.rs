//! Configuration types

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default discriminators for resolution
    #[serde(default)]
    pub resolver: ResolverConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Discriminators used when the caller does not supply them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Default `condition_alpha` (e.g. a domain such as "paper")
    #[serde(default)]
    pub condition_alpha: Option<String>,
    /// Default `condition_beta` (e.g. a subcategory such as "paper_weight")
    #[serde(default)]
    pub condition_beta: Option<String>,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.settings.log_level, "info");
        assert!(config.resolver.condition_alpha.is_none());
        assert!(config.resolver.condition_beta.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"resolver": {"condition_alpha": "paper"}}"#).unwrap();
        assert_eq!(config.resolver.condition_alpha.as_deref(), Some("paper"));
        assert!(config.resolver.condition_beta.is_none());
        assert_eq!(config.settings.log_level, "info");
    }
}
