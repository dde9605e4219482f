//! Configuration for the landing page.
//!
//! The landing embeds a `komodo.toml`; every table and key is optional and
//! falls back to the defaults below.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::scroll::{DEFAULT_LEAD_IN_FRACTION, DEFAULT_RELEASE_THRESHOLD, HeroMorph};
use crate::terminal::{AutoScroll, DEFAULT_AUTO_SCROLL_THRESHOLD, DEFAULT_WELCOME, Terminal};

/// Why a configuration was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub terminal: TerminalConfig,
    pub hero: HeroConfig,
    pub showcase: ShowcaseConfig,
    pub logging: LoggingConfig,
}

/// Simulated terminal settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Output of the synthetic first entry.
    pub welcome: String,
    /// Max distance from the bottom (px) at which new output is followed.
    pub auto_scroll_threshold_px: f64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            welcome: DEFAULT_WELCOME.to_string(),
            auto_scroll_threshold_px: DEFAULT_AUTO_SCROLL_THRESHOLD,
        }
    }
}

impl TerminalConfig {
    pub fn terminal(&self) -> Terminal {
        Terminal::new(&self.welcome)
    }

    pub fn auto_scroll(&self) -> AutoScroll {
        AutoScroll::new(self.auto_scroll_threshold_px)
    }
}

/// Hero-to-terminal morph settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Share of the viewport height mapped to progress 0..1.
    pub lead_in_fraction: f64,
    /// Downward wheel delta needed to leave the scroll lock.
    pub release_threshold: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            lead_in_fraction: DEFAULT_LEAD_IN_FRACTION,
            release_threshold: DEFAULT_RELEASE_THRESHOLD,
        }
    }
}

impl HeroConfig {
    pub fn morph(&self) -> HeroMorph {
        HeroMorph::new(self.lead_in_fraction, self.release_threshold)
    }
}

/// Feature showcase settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Pinned section height per feature, in viewport heights.
    pub viewport_heights_per_feature: f64,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            viewport_heights_per_feature: 1.0,
        }
    }
}

impl ShowcaseConfig {
    /// CSS height of the pinned section.
    pub fn section_height(&self, feature_count: usize) -> String {
        let vh = self.viewport_heights_per_feature * feature_count as f64 * 100.0;
        format!("{vh}vh")
    }
}

/// Browser console logging
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level. Falls back to INFO for values `validate` would reject.
    pub fn level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.level).unwrap_or(tracing::Level::INFO)
    }
}

impl LandingConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LandingConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terminal.welcome.trim().is_empty() {
            return Err(invalid("terminal.welcome", "must not be empty"));
        }
        if !(self.terminal.auto_scroll_threshold_px >= 0.0) {
            return Err(invalid(
                "terminal.auto_scroll_threshold_px",
                format!("expected >= 0, got {}", self.terminal.auto_scroll_threshold_px),
            ));
        }
        let fraction = self.hero.lead_in_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(invalid(
                "hero.lead_in_fraction",
                format!("expected a value in (0, 1], got {fraction}"),
            ));
        }
        if !(self.hero.release_threshold > 0.0) {
            return Err(invalid(
                "hero.release_threshold",
                format!("expected > 0, got {}", self.hero.release_threshold),
            ));
        }
        if !(self.showcase.viewport_heights_per_feature >= 1.0) {
            return Err(invalid(
                "showcase.viewport_heights_per_feature",
                format!(
                    "expected >= 1, got {}",
                    self.showcase.viewport_heights_per_feature
                ),
            ));
        }
        if tracing::Level::from_str(&self.logging.level).is_err() {
            return Err(invalid(
                "logging.level",
                format!("unknown level `{}`", self.logging.level),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LandingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.terminal.welcome, DEFAULT_WELCOME);
        assert_eq!(config.hero.release_threshold, DEFAULT_RELEASE_THRESHOLD);
        assert_eq!(config.logging.level(), tracing::Level::INFO);
    }

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = LandingConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn test_partial_tables_keep_other_defaults() {
        let config = LandingConfig::from_toml_str(
            r#"
[hero]
release_threshold = 250.0

[logging]
level = "debug"
"#,
        )
        .expect("partial config");

        assert_eq!(config.hero.release_threshold, 250.0);
        assert_eq!(config.hero.lead_in_fraction, DEFAULT_LEAD_IN_FRACTION);
        assert_eq!(config.logging.level(), tracing::Level::DEBUG);
        assert_eq!(config.terminal, TerminalConfig::default());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = LandingConfig::from_toml_str("[hero\nrelease_threshold = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let cases = [
            ("[hero]\nlead_in_fraction = 0.0", "hero.lead_in_fraction"),
            ("[hero]\nlead_in_fraction = 1.5", "hero.lead_in_fraction"),
            ("[hero]\nrelease_threshold = -1.0", "hero.release_threshold"),
            (
                "[terminal]\nauto_scroll_threshold_px = -5.0",
                "terminal.auto_scroll_threshold_px",
            ),
            ("[terminal]\nwelcome = \"   \"", "terminal.welcome"),
            (
                "[showcase]\nviewport_heights_per_feature = 0.5",
                "showcase.viewport_heights_per_feature",
            ),
            ("[logging]\nlevel = \"loud\"", "logging.level"),
        ];

        for (doc, expected) in cases {
            match LandingConfig::from_toml_str(doc) {
                Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected, "{doc}"),
                other => panic!("expected Invalid for {doc:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_section_height_scales_with_features() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.section_height(3), "300vh");

        let tall = ShowcaseConfig {
            viewport_heights_per_feature: 1.5,
        };
        assert_eq!(tall.section_height(2), "300vh");
    }

    #[test]
    fn test_builders_use_configured_values() {
        let config = LandingConfig::from_toml_str(
            "[terminal]\nwelcome = \"hi\"\n[hero]\nrelease_threshold = 10.0",
        )
        .expect("config");

        let terminal = config.terminal.terminal();
        assert_eq!(terminal.log()[0].output, "hi");

        let mut hero = config.hero.morph();
        hero.on_scroll(-500.0, 1000.0, 500.0);
        assert!(hero.is_locked());
        assert_eq!(hero.on_wheel(10.0), crate::scroll::WheelOutcome::Released);
    }
}
