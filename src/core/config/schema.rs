//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing; unknown keys are rejected
//! during parsing.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Client configuration (user scope).
///
/// # Example
///
/// ```toml
/// [repl]
/// banner = true
/// list_repositories = true
/// prompt = "Enter operation and repository: "
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Interactive loop settings
    pub repl: Option<ReplConfig>,
}

impl ClientConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(repl) = &self.repl {
            repl.validate()?;
        }
        Ok(())
    }
}

/// Interactive loop settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    /// Print the welcome banner on start
    pub banner: Option<bool>,

    /// List repositories before each prompt
    pub list_repositories: Option<bool>,

    /// Text of the operation prompt
    pub prompt: Option<String>,
}

impl ReplConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(prompt) = &self.prompt {
            if prompt.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "repl.prompt cannot be empty".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full() {
        let config: ClientConfig = toml::from_str(
            r#"
            [repl]
            banner = false
            list_repositories = false
            prompt = "> "
            "#,
        )
        .unwrap();

        let repl = config.repl.unwrap();
        assert_eq!(repl.banner, Some(false));
        assert_eq!(repl.list_repositories, Some(false));
        assert_eq!(repl.prompt.as_deref(), Some("> "));
    }

    #[test]
    fn parse_empty() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<ClientConfig, _> = toml::from_str("[repl]\ncolour = true\n");
        assert!(result.is_err());

        let result: Result<ClientConfig, _> = toml::from_str("theme = \"dark\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn empty_prompt_invalid() {
        let config = ClientConfig {
            repl: Some(ReplConfig {
                prompt: Some("   ".into()),
                ..Default::default()
            }),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn serialize_roundtrip() {
        let config = ClientConfig {
            repl: Some(ReplConfig {
                banner: Some(true),
                list_repositories: None,
                prompt: Some("mg> ".into()),
            }),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: ClientConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
