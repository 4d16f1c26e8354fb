//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;

use super::types::{AppConfig, AppSettings, ResolverConfig};
use crate::common::errors::{Result, StrategyError};

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with APP__, e.g. APP__RESOLVER__CONDITION_ALPHA)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("APP")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| StrategyError::Configuration(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| StrategyError::Configuration(e.to_string()))
}

/// Load configuration from environment variables only
pub fn load_from_env() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let resolver = ResolverConfig {
        condition_alpha: std::env::var("STRATEGY_CONDITION_ALPHA").ok(),
        condition_beta: std::env::var("STRATEGY_CONDITION_BETA").ok(),
    };

    let settings = match std::env::var("STRATEGY_LOG_LEVEL") {
        Ok(log_level) => AppSettings { log_level },
        Err(_) => AppSettings::default(),
    };

    Ok(AppConfig { resolver, settings })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "strategy_resolver_config_{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[resolver]\ncondition_alpha = \"paper\"\ncondition_beta = \"paper_weight\"\n\n[settings]\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = load_config(path.to_str()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.resolver.condition_alpha.as_deref(), Some("paper"));
        assert_eq!(config.resolver.condition_beta.as_deref(), Some("paper_weight"));
        assert_eq!(config.settings.log_level, "debug");
    }

    #[test]
    fn test_load_from_env() {
        std::env::set_var("STRATEGY_CONDITION_ALPHA", "paper");
        std::env::set_var("STRATEGY_CONDITION_BETA", "quantity");
        std::env::set_var("STRATEGY_LOG_LEVEL", "warn");

        let config = load_from_env().unwrap();

        std::env::remove_var("STRATEGY_CONDITION_ALPHA");
        std::env::remove_var("STRATEGY_CONDITION_BETA");
        std::env::remove_var("STRATEGY_LOG_LEVEL");

        assert_eq!(config.resolver.condition_alpha.as_deref(), Some("paper"));
        assert_eq!(config.resolver.condition_beta.as_deref(), Some("quantity"));
        assert_eq!(config.settings.log_level, "warn");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config(Some("does/not/exist.toml")).unwrap();
        assert_eq!(config.settings.log_level, "info");
    }
}
