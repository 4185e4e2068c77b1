use crate::id::IdStrategy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid store config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("sequential id strategy needs a non-empty namespace")]
    EmptyNamespace,
}

/// Settings for a [`ListStore`](crate::ListStore).
///
/// ```toml
/// [id_strategy]
/// kind = "sequential"
/// namespace = "cart"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub id_strategy: IdStrategy,
}

impl StoreConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.id_strategy {
            IdStrategy::Sequential { namespace } if namespace.trim().is_empty() => {
                Err(ConfigError::EmptyNamespace)
            }
            _ => Ok(()),
        }
    }
}
