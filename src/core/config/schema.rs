//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: enumerated settings must be
//! one of their known names and `view.empty` must be a single character.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// User configuration.
///
/// # Example
///
/// ```toml
/// [view]
/// format = "text"
/// style = "ansi"
/// empty = "."
///
/// [session]
/// prompt = "> "
/// auto_view = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Net rendering defaults
    pub view: Option<ViewConfig>,

    /// Session protocol defaults
    pub session: Option<SessionConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(view) = &self.view {
            view.validate()?;
        }
        Ok(())
    }
}

/// How `view` output is rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Output format ("text" or "json")
    pub format: Option<String>,

    /// Text style ("letters" or "ansi")
    pub style: Option<String>,

    /// Character printed for cells outside the net
    pub empty: Option<String>,
}

impl ViewConfig {
    /// Valid output formats.
    pub const VALID_FORMATS: &'static [&'static str] = &["text", "json"];

    /// Valid text styles.
    pub const VALID_STYLES: &'static [&'static str] = &["letters", "ansi"];

    /// Validate the view configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(format) = &self.format {
            if !Self::VALID_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid view format '{}', must be one of: {}",
                    format,
                    Self::VALID_FORMATS.join(", ")
                )));
            }
        }

        if let Some(style) = &self.style {
            if !Self::VALID_STYLES.contains(&style.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid view style '{}', must be one of: {}",
                    style,
                    Self::VALID_STYLES.join(", ")
                )));
            }
        }

        if let Some(empty) = &self.empty {
            if empty.chars().count() != 1 {
                return Err(ConfigError::InvalidValue(format!(
                    "view.empty must be a single character, got '{}'",
                    empty
                )));
            }
        }

        Ok(())
    }
}

/// Session protocol settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Prompt printed before each input line
    pub prompt: Option<String>,

    /// Print the net after every successful move
    pub auto_view: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [view]
            format = "json"
            style = "ansi"
            empty = "-"

            [session]
            prompt = "cube> "
            auto_view = true
        "#;

        let config: GlobalConfig = toml::from_str(toml).unwrap();
        config.validate().unwrap();

        let view = config.view.unwrap();
        assert_eq!(view.format.as_deref(), Some("json"));
        assert_eq!(view.style.as_deref(), Some("ansi"));
        assert_eq!(view.empty.as_deref(), Some("-"));

        let session = config.session.unwrap();
        assert_eq!(session.prompt.as_deref(), Some("cube> "));
        assert_eq!(session.auto_view, Some(true));
    }

    #[test]
    fn empty_config_is_valid() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn invalid_format_rejected() {
        let config = GlobalConfig {
            view: Some(ViewConfig {
                format: Some("yaml".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(msg)) if msg.contains("yaml")
        ));
    }

    #[test]
    fn invalid_style_rejected() {
        let view = ViewConfig {
            style: Some("emoji".into()),
            ..Default::default()
        };
        assert!(view.validate().is_err());
    }

    #[test]
    fn multi_char_empty_rejected() {
        let view = ViewConfig {
            empty: Some("..".into()),
            ..Default::default()
        };
        assert!(view.validate().is_err());

        let view = ViewConfig {
            empty: Some(String::new()),
            ..Default::default()
        };
        assert!(view.validate().is_err());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<GlobalConfig, _> = toml::from_str("colour = \"red\"");
        assert!(result.is_err());

        let result: Result<GlobalConfig, _> = toml::from_str("[view]\nsize = 3");
        assert!(result.is_err());
    }
}
