//! Type definitions for numeric input formatting
//!
//! This module defines the configuration supplied by the caller, the parsed
//! representation of `#` patterns, and the values produced by a formatting pass.

use std::fmt;
use std::sync::Arc;

/// Signature of a user supplied transform used in function mode.
///
/// The transform receives the extracted numeric characters and returns the
/// display string verbatim. Errors are propagated to the caller unchanged.
pub type TransformFn = dyn Fn(&str) -> Result<String, String> + Send + Sync;

/// Configured value of a separator option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorSetting {
    /// The feature is switched off
    #[default]
    Disabled,
    /// Shorthand for "use the conventional character"
    Enabled,
    /// An explicit separator character
    Char(char),
}

impl From<bool> for SeparatorSetting {
    fn from(enabled: bool) -> Self {
        if enabled {
            SeparatorSetting::Enabled
        } else {
            SeparatorSetting::Disabled
        }
    }
}

impl From<char> for SeparatorSetting {
    fn from(c: char) -> Self {
        SeparatorSetting::Char(c)
    }
}

/// Configured number of fractional digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrecisionSetting {
    /// Keep whatever fraction the user typed
    #[default]
    Disabled,
    /// Shorthand for two fractional digits
    Enabled,
    /// An explicit number of fractional digits
    Fixed(usize),
}

impl PrecisionSetting {
    /// Number of fractional digits to force, if any
    pub fn digits(&self) -> Option<usize> {
        match self {
            PrecisionSetting::Disabled => None,
            PrecisionSetting::Enabled => Some(2),
            PrecisionSetting::Fixed(n) => Some(*n),
        }
    }
}

impl From<bool> for PrecisionSetting {
    fn from(enabled: bool) -> Self {
        if enabled {
            PrecisionSetting::Enabled
        } else {
            PrecisionSetting::Disabled
        }
    }
}

impl From<usize> for PrecisionSetting {
    fn from(n: usize) -> Self {
        PrecisionSetting::Fixed(n)
    }
}

/// A single token of a parsed `#` pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternToken {
    /// `#`, consumed by the next input character
    Placeholder,
    /// Any other character, copied to the output
    Literal(char),
}

/// A parsed `#` pattern such as `(###) ###-####`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// The pattern text as configured
    pub source: String,
    /// Tokens in left to right order
    pub tokens: Vec<PatternToken>,
}

impl Pattern {
    /// Number of `#` placeholders in the pattern
    pub fn placeholder_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, PatternToken::Placeholder))
            .count()
    }
}

/// The `format` option: a literal pattern or a transform function
#[derive(Clone)]
pub enum FormatSpec {
    /// Pattern mode
    Pattern(Pattern),
    /// Function mode
    Transform(Arc<TransformFn>),
}

impl fmt::Debug for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatSpec::Pattern(pattern) => f.debug_tuple("Pattern").field(&pattern.source).finish(),
            FormatSpec::Transform(_) => f.write_str("Transform(<fn>)"),
        }
    }
}

/// Formatting rules for one editable field
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Thousands separator option
    pub thousand_separator: SeparatorSetting,
    /// Decimal separator option
    pub decimal_separator: SeparatorSetting,
    /// Forced fractional digits
    pub decimal_precision: PrecisionSetting,
    /// Text placed before the integer part
    pub prefix: String,
    /// Text placed after the fractional part
    pub suffix: String,
    /// Pattern or transform; bypasses grouping when set
    pub format: Option<FormatSpec>,
    /// Fill string for unused placeholders in pattern mode
    pub mask: Option<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            thousand_separator: SeparatorSetting::Disabled,
            decimal_separator: SeparatorSetting::Char('.'),
            decimal_precision: PrecisionSetting::Disabled,
            prefix: String::new(),
            suffix: String::new(),
            format: None,
            mask: None,
        }
    }
}

impl FormatConfig {
    /// Set the thousands separator
    pub fn with_thousand_separator(mut self, separator: impl Into<SeparatorSetting>) -> Self {
        self.thousand_separator = separator.into();
        self
    }

    /// Set the decimal separator
    pub fn with_decimal_separator(mut self, separator: impl Into<SeparatorSetting>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Force exactly `digits` fractional digits
    pub fn with_decimal_precision(mut self, digits: usize) -> Self {
        self.decimal_precision = PrecisionSetting::Fixed(digits);
        self
    }

    /// Set precision from a shorthand, e.g. `PrecisionSetting::Enabled` for two digits
    pub fn with_precision_setting(mut self, precision: PrecisionSetting) -> Self {
        self.decimal_precision = precision;
        self
    }

    /// Text placed before the grouped number
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Text placed after the grouped number
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Switch to pattern mode
    ///
    /// # Arguments
    /// * `pattern` - A pattern using `#` as the digit placeholder
    ///
    /// # Returns
    /// * `Result<FormatConfig, FormatError>` - The updated config, or an error if the
    ///   pattern has no placeholder
    ///
    /// # Examples
    /// ```
    /// use number_input_format::FormatConfig;
    ///
    /// let config = FormatConfig::default().with_pattern("##/##").unwrap();
    /// ```
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, crate::FormatError> {
        let parsed =
            crate::parser::parse_format_pattern(pattern).map_err(crate::FormatError::InvalidPattern)?;
        self.format = Some(FormatSpec::Pattern(parsed));
        Ok(self)
    }

    /// Switch to function mode
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> Result<String, String> + Send + Sync + 'static,
    {
        self.format = Some(FormatSpec::Transform(Arc::new(transform)));
        self
    }

    /// Set the mask used for unused placeholders. An empty mask disables masking.
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        let mask = mask.into();
        self.mask = if mask.is_empty() { None } else { Some(mask) };
        self
    }

    /// Select the formatting mode for this configuration
    pub fn mode(&self) -> FormatMode<'_> {
        match &self.format {
            Some(FormatSpec::Pattern(pattern)) => FormatMode::Pattern {
                pattern,
                mask: self.mask.as_deref().filter(|m| !m.is_empty()),
            },
            Some(FormatSpec::Transform(transform)) => FormatMode::Transform(transform.as_ref()),
            None => FormatMode::Grouped {
                separators: crate::separators::resolve_separators(self),
                precision: self.decimal_precision.digits(),
                prefix: &self.prefix,
                suffix: &self.suffix,
            },
        }
    }
}

/// The formatting strategy chosen for one call
pub enum FormatMode<'a> {
    /// Fill a `#` pattern, optionally padding with a mask
    Pattern {
        pattern: &'a Pattern,
        mask: Option<&'a str>,
    },
    /// Hand the digits to a user transform
    Transform(&'a TransformFn),
    /// Group thousands, apply precision and wrap with prefix/suffix
    Grouped {
        separators: ResolvedSeparators,
        precision: Option<usize>,
        prefix: &'a str,
        suffix: &'a str,
    },
}

impl fmt::Debug for FormatMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatMode::Pattern { pattern, mask } => f
                .debug_struct("Pattern")
                .field("pattern", &pattern.source)
                .field("mask", mask)
                .finish(),
            FormatMode::Transform(_) => f.write_str("Transform(<fn>)"),
            FormatMode::Grouped {
                separators,
                precision,
                prefix,
                suffix,
            } => f
                .debug_struct("Grouped")
                .field("separators", separators)
                .field("precision", precision)
                .field("prefix", prefix)
                .field("suffix", suffix)
                .finish(),
        }
    }
}

/// Effective separator characters after shorthand and conflict resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedSeparators {
    pub decimal_separator: Option<char>,
    pub thousand_separator: Option<char>,
}

/// A raw value handed to the formatter: user text or a number
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

/// Output of one formatting pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(test, derive(serde::Serialize))]
#[cfg_attr(test, serde(rename_all = "camelCase"))]
pub struct FormatResult {
    /// Numeric characters only: digits and at most the decimal separator
    pub value: String,
    /// The decorated display string
    pub formatted_value: String,
}

impl FormatResult {
    /// The empty result returned for input without any numeric character
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.formatted_value.is_empty()
    }
}
