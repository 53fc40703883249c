//! Layered configuration for the command-line tool.

use ::config::{Config, Environment, File};
use postwright_error::{ConfigError, PostwrightResult};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default configuration file stem, resolved in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "postwright";

/// Prefix for environment overrides, e.g. `POSTWRIGHT__OUTPUT=json`.
pub const ENV_PREFIX: &str = "POSTWRIGHT";

/// How validation results are printed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Icons, numbered findings and stats
    #[default]
    Human,
    /// The validation result as JSON
    Json,
}

/// How log lines are formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Settings read from `postwright.toml` and `POSTWRIGHT__*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct CliConfig {
    /// Platform used when a command omits `--platform`
    default_platform: Option<String>,
    /// Output format
    output: OutputFormat,
    /// Treat warnings as failures
    strict: bool,
    /// Log filter used when `RUST_LOG` is unset
    log_level: String,
    /// Log line format
    log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_platform: None,
            output: OutputFormat::Human,
            strict: false,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `path` (required) or the optional default file,
    /// then applies environment overrides.
    pub fn load(path: Option<&Path>) -> PostwrightResult<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(ConfigError::from)?
            .try_deserialize::<CliConfig>()
            .map_err(ConfigError::from)?;

        debug!(?config, "Configuration loaded");
        if let Some(platform) = config
            .default_platform
            .as_deref()
            .filter(|p| !postwright_platform::is_platform_supported(p))
        {
            return Err(ConfigError::new(format!(
                "default_platform '{}' is not a supported platform",
                platform
            ))
            .into());
        }
        info!(output = %config.output, strict = config.strict, "Using configuration");
        Ok(config)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, output: Option<OutputFormat>, strict: bool) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        self.strict = self.strict || strict;
        self
    }

    /// The explicit platform if given, otherwise the configured default.
    pub fn resolve_platform(&self, explicit: Option<&str>) -> PostwrightResult<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.default_platform.clone())
            .ok_or_else(|| {
                ConfigError::new("No platform given and no default_platform configured").into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win() {
        let config = CliConfig::default().with_overrides(Some(OutputFormat::Json), true);
        assert_eq!(*config.output(), OutputFormat::Json);
        assert!(*config.strict());
    }

    #[test]
    fn test_resolve_platform_prefers_explicit() {
        let config = CliConfig {
            default_platform: Some("linkedin".to_string()),
            ..CliConfig::default()
        };
        assert_eq!(config.resolve_platform(Some("twitter")).unwrap(), "twitter");
        assert_eq!(config.resolve_platform(None).unwrap(), "linkedin");
        assert!(CliConfig::default().resolve_platform(None).is_err());
    }
}
