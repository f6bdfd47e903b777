//! Runtime Configuration
//!
//! Read once at startup from `window.__TODO_CONFIG__`, e.g.
//!
//! ```js
//! window.__TODO_CONFIG__ = { graphqlEndpoint: "https://api.example.com/graphql", logLevel: "debug" };
//! ```
//!
//! Every field is optional.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;

const CONFIG_GLOBAL: &str = "__TODO_CONFIG__";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub graphql_endpoint: String,
    /// `localStorage` key holding the session token
    pub session_storage_key: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: "/graphql".to_string(),
            session_storage_key: "todo.session".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the page, falling back to defaults when nothing is set.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ConfigError::Invalid(format!("{:?}", e)))?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }

        let config: Self =
            serde_wasm_bindgen::from_value(raw).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.graphql_endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("graphqlEndpoint is empty".into()));
        }
        if self.session_storage_key.is_empty() {
            return Err(ConfigError::Invalid("sessionStorageKey is empty".into()));
        }
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_value(json!({ "graphqlEndpoint": "https://api.test/graphql" })).unwrap();

        assert_eq!(config.graphql_endpoint, "https://api.test/graphql");
        assert_eq!(config.session_storage_key, "todo.session");
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let config = AppConfig { log_level: "loud".into(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::LogLevel(ref l)) if l == "loud"));
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_empty_endpoint_is_rejected() {
        let config = AppConfig { graphql_endpoint: " ".into(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let config = AppConfig { log_level: "DEBUG".into(), ..Default::default() };
        assert_eq!(config.log_level_filter(), LevelFilter::Debug);
    }
}
