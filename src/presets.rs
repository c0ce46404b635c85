//! Configuration loading and built-in presets
//!
//! Format configurations can be written as TOML tables. This module parses
//! such tables into [`FormatConfig`] values and serves a set of named presets
//! embedded in the crate (currencies, locales, phone and card patterns).

use std::collections::HashMap;
use std::sync::OnceLock;

use log::warn;

use crate::error::ConfigError;
use crate::types::{FormatConfig, PrecisionSetting, SeparatorSetting};

type Result<T> = std::result::Result<T, ConfigError>;

impl FormatConfig {
    /// Parse a configuration from a TOML table
    ///
    /// Recognised keys are `thousand_separator`, `decimal_separator`
    /// (bool or single character), `decimal_precision` (bool or integer),
    /// `prefix`, `suffix`, `format` (a `#` pattern) and `mask`. Missing keys keep
    /// their defaults.
    ///
    /// # Examples
    /// ```
    /// use number_input_format::FormatConfig;
    ///
    /// let config = FormatConfig::from_toml_str(
    ///     r#"
    ///     thousand_separator = true
    ///     prefix = "$"
    ///     decimal_precision = 2
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.prefix, "$");
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let mut config = FormatConfig::default();
        apply_config_table(&mut config, &parsed_toml)?;
        Ok(config)
    }
}

/// Apply the keys of a TOML table on top of `config`
fn apply_config_table(config: &mut FormatConfig, value: &toml::Value) -> Result<()> {
    let table = value
        .as_table()
        .ok_or_else(|| ConfigError::ParseError("Format configuration is not a table".to_string()))?;

    for key in table.keys() {
        if !matches!(
            key.as_str(),
            "thousand_separator"
                | "decimal_separator"
                | "decimal_precision"
                | "prefix"
                | "suffix"
                | "format"
                | "mask"
        ) {
            return Err(ConfigError::ParseError(format!("Unknown key '{key}'")));
        }
    }

    if let Some(v) = table.get("thousand_separator") {
        config.thousand_separator = parse_separator("thousand_separator", v)?;
    }
    if let Some(v) = table.get("decimal_separator") {
        config.decimal_separator = parse_separator("decimal_separator", v)?;
    }
    if let Some(v) = table.get("decimal_precision") {
        config.decimal_precision = parse_precision(v)?;
    }
    if let Some(prefix) = table.get("prefix") {
        config.prefix = expect_str("prefix", prefix)?.to_string();
    }
    if let Some(suffix) = table.get("suffix") {
        config.suffix = expect_str("suffix", suffix)?.to_string();
    }
    if let Some(mask) = table.get("mask") {
        let mask = expect_str("mask", mask)?;
        config.mask = if mask.is_empty() { None } else { Some(mask.to_string()) };
    }
    if let Some(format) = table.get("format") {
        let pattern = expect_str("format", format)?;
        *config = config
            .clone()
            .with_pattern(pattern)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
    }

    Ok(())
}

fn expect_str<'v>(key: &str, value: &'v toml::Value) -> Result<&'v str> {
    value
        .as_str()
        .ok_or_else(|| ConfigError::ParseError(format!("'{key}' must be a string")))
}

/// A separator is a bool or a single character; the empty string disables it
fn parse_separator(key: &str, value: &toml::Value) -> Result<SeparatorSetting> {
    match value {
        toml::Value::Boolean(enabled) => Ok((*enabled).into()),
        toml::Value::String(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (None, _) => Ok(SeparatorSetting::Disabled),
                (Some(c), None) => Ok(SeparatorSetting::Char(c)),
                _ => Err(ConfigError::ParseError(format!(
                    "'{key}' must be a single character, got '{s}'"
                ))),
            }
        }
        _ => Err(ConfigError::ParseError(format!(
            "'{key}' must be a bool or a string"
        ))),
    }
}

fn parse_precision(value: &toml::Value) -> Result<PrecisionSetting> {
    match value {
        toml::Value::Boolean(enabled) => Ok((*enabled).into()),
        toml::Value::Integer(n) => usize::try_from(*n).map(PrecisionSetting::Fixed).map_err(|_| {
            ConfigError::ParseError(format!("'decimal_precision' must not be negative, got {n}"))
        }),
        _ => Err(ConfigError::ParseError(
            "'decimal_precision' must be a bool or an integer".to_string(),
        )),
    }
}

/// Holds the presets parsed from the embedded TOML data
struct PresetManager {
    presets: HashMap<String, FormatConfig>,
}

// Global singleton for preset configurations
static PRESET_MANAGER: OnceLock<PresetManager> = OnceLock::new();

impl PresetManager {
    fn new() -> Self {
        let mut manager = Self {
            presets: HashMap::new(),
        };

        if let Err(e) = manager.load_embedded_data() {
            warn!("Failed to load embedded format presets: {e}");
        }

        manager
    }

    fn load_embedded_data(&mut self) -> Result<()> {
        let presets_toml = include_str!("presets/presets.toml");
        self.parse_presets(presets_toml)
    }

    /// Parse a presets document: a `[base]` table plus one table per preset
    fn parse_presets(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| ConfigError::ParseError("Root is not a table".to_string()))?;

        let mut base = FormatConfig::default();
        if let Some(base_table) = table.get("base") {
            apply_config_table(&mut base, base_table)?;
        }

        for (name, value) in table {
            if name == "base" {
                continue;
            }

            let mut config = base.clone();
            apply_config_table(&mut config, value)
                .map_err(|e| ConfigError::ParseError(format!("preset '{name}': {e}")))?;
            self.presets.insert(name.to_string(), config);
        }

        Ok(())
    }

    fn get() -> &'static Self {
        PRESET_MANAGER.get_or_init(Self::new)
    }
}

/// Get a built-in preset by name (e.g., "usd", "de_DE", "phone_us")
pub fn get_preset(name: &str) -> Option<FormatConfig> {
    PresetManager::get().presets.get(name).cloned()
}

/// Like [`get_preset`], but reports a missing preset as an error
pub fn try_get_preset(name: &str) -> Result<FormatConfig> {
    get_preset(name).ok_or_else(|| ConfigError::NotFound(name.to_string()))
}

/// List all built-in preset names, sorted
pub fn list_available_presets() -> Vec<String> {
    let mut names: Vec<String> = PresetManager::get().presets.keys().cloned().collect();
    names.sort();
    names
}
