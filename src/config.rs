//! Classifier configuration.
//!
//! The serializable part of the construction contract. Capabilities (state
//! reader, dispatcher, form encoder) are handed to the builder separately.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Environment variable overriding [`ClassifierConfig::attribute_prefix`].
pub const ENV_ATTRIBUTE_PREFIX: &str = "UJS_ATTRIBUTE_PREFIX";
/// Environment variable overriding [`ClassifierConfig::graft_param`].
pub const ENV_GRAFT_PARAM: &str = "UJS_GRAFT_PARAM";
/// Environment variable overriding [`ClassifierConfig::default_form_method`].
pub const ENV_DEFAULT_FORM_METHOD: &str = "UJS_DEFAULT_FORM_METHOD";

/// Immutable classifier settings, created once per page session.
///
/// # Example
///
/// ```ignore
/// use ujs_intercept::config::ClassifierConfig;
///
/// let config = ClassifierConfig::default()
///     .with_attribute_prefix("ujs")
///     .with_graft_param("bzq");
/// config.validate()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Prefix for the recognized attributes (`{prefix}-visit`, ...). Default `data`.
    pub attribute_prefix: String,
    /// Reserved query key marking a graft visit. Default `bzq`.
    pub graft_param: String,
    /// Verb for forms without a usable `method` attribute. Default `POST`.
    pub default_form_method: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            attribute_prefix: "data".to_string(),
            graft_param: "bzq".to_string(),
            default_form_method: "POST".to_string(),
        }
    }
}

impl ClassifierConfig {
    /// Create a new ClassifierConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attribute prefix.
    pub fn with_attribute_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.attribute_prefix = prefix.into();
        self
    }

    /// Set the graft query parameter.
    pub fn with_graft_param(mut self, param: impl Into<String>) -> Self {
        self.graft_param = param.into();
        self
    }

    /// Set the fallback form method.
    pub fn with_default_form_method(mut self, method: impl Into<String>) -> Self {
        self.default_form_method = method.into();
        self
    }

    /// Check every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_token(&self.attribute_prefix) {
            return Err(ConfigError::InvalidAttributePrefix {
                prefix: self.attribute_prefix.clone(),
            });
        }
        if !is_token(&self.graft_param) {
            return Err(ConfigError::InvalidGraftParam {
                param: self.graft_param.clone(),
            });
        }
        let method = self.default_form_method.trim();
        if method.is_empty() || !method.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidDefaultMethod {
                method: self.default_form_method.clone(),
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ClassifierConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Apply `UJS_*` environment overrides. Unset or empty variables are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(prefix) = env_value(ENV_ATTRIBUTE_PREFIX) {
            self.attribute_prefix = prefix;
        }
        if let Some(param) = env_value(ENV_GRAFT_PARAM) {
            self.graft_param = param;
        }
        if let Some(method) = env_value(ENV_DEFAULT_FORM_METHOD) {
            self.default_form_method = method;
        }
        self
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn is_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
