//! Number input formatting module
//!
//! This module turns raw user input into a canonical value and a display string.
//! The main entry points are the `format_input` function and the
//! [`NumberFormatter`] type, which resolves separators and compiles its numeric
//! patterns once per configuration.

mod grouped;
mod pattern;

pub use grouped::group_thousands;

use log::trace;

use crate::cursor::{self, EditKey, Selection};
use crate::error::FormatError;
use crate::extract::NumberPattern;
use crate::separators::resolve_separators;
use crate::types::{FormatConfig, FormatMode, FormatResult, RawValue, ResolvedSeparators};

/// A formatting engine bound to one configuration
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    config: FormatConfig,
    separators: ResolvedSeparators,
    extractor: NumberPattern,
    numeric: NumberPattern,
    key_numeric: NumberPattern,
}

impl NumberFormatter {
    /// Create a formatter for `config`
    ///
    /// # Arguments
    /// * `config` - The formatting rules
    ///
    /// # Returns
    /// * `Result<NumberFormatter, FormatError>` - The formatter, or an error if a
    ///   numeric pattern could not be compiled
    ///
    /// # Examples
    /// ```
    /// use number_input_format::{FormatConfig, NumberFormatter};
    ///
    /// let config = FormatConfig::default()
    ///     .with_thousand_separator(true)
    ///     .with_prefix("$");
    /// let formatter = NumberFormatter::new(config).unwrap();
    /// let result = formatter.format_input("1234567").unwrap();
    /// assert_eq!(result.formatted_value, "$1,234,567");
    /// assert_eq!(result.value, "1234567");
    /// ```
    pub fn new(config: FormatConfig) -> Result<Self, FormatError> {
        let separators = resolve_separators(&config);
        let decimal = separators.decimal_separator;
        let ignore_decimal_on_keys = config.decimal_precision.digits().is_some();

        Ok(Self {
            extractor: NumberPattern::new(decimal, true, false)?,
            numeric: NumberPattern::new(decimal, false, false)?,
            key_numeric: NumberPattern::new(decimal, false, ignore_decimal_on_keys)?,
            separators,
            config,
        })
    }

    /// The configuration this formatter was built from
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// The resolved separator characters
    pub fn separators(&self) -> ResolvedSeparators {
        self.separators
    }

    /// The formatting mode used by every call
    pub fn mode(&self) -> FormatMode<'_> {
        self.config.mode()
    }

    /// Build a fresh numeric test pattern for this configuration
    pub fn number_test_pattern(
        &self,
        match_all: bool,
        ignore_decimal_separator: bool,
    ) -> Result<NumberPattern, FormatError> {
        NumberPattern::new(
            self.separators.decimal_separator,
            match_all,
            ignore_decimal_separator,
        )
    }

    /// The pattern used by the Delete/Backspace skip logic
    pub fn key_pattern(&self) -> &NumberPattern {
        &self.key_numeric
    }

    /// Format a raw value
    ///
    /// Input without any numeric character always yields the empty result,
    /// whatever prefix, suffix or mask is configured.
    pub fn format_input(&self, raw: impl Into<RawValue>) -> Result<FormatResult, FormatError> {
        let text = match raw.into() {
            RawValue::Text(text) => text,
            RawValue::Number(n) => number_to_text(n, self.separators.decimal_separator),
        };

        let num = self.extractor.extract(&text);
        if num.is_empty() {
            trace!("no numeric characters in {text:?}");
            return Ok(FormatResult::empty());
        }

        let formatted_value = match self.mode() {
            FormatMode::Pattern { pattern, mask } => {
                self::pattern::format_with_pattern(&num, pattern, mask)
            }
            FormatMode::Transform(transform) => {
                transform(num.as_str()).map_err(FormatError::Transform)?
            }
            FormatMode::Grouped {
                separators,
                precision,
                prefix,
                suffix,
            } => grouped::format_grouped(&num, separators, precision, prefix, suffix),
        };

        let value = self.extractor.extract(&formatted_value);
        trace!("formatted {text:?} as {formatted_value:?} (value {value:?})");

        Ok(FormatResult {
            value,
            formatted_value,
        })
    }

    /// Map a caret offset in `raw_input` onto `formatted_value`
    pub fn remap_cursor(&self, raw_input: &str, formatted_value: &str, cursor_pos: usize) -> usize {
        cursor::remap_cursor(&self.numeric, raw_input, formatted_value, cursor_pos)
    }

    /// Caret target when Delete/Backspace would hit a decoration character
    pub fn skip_decoration(&self, value: &str, selection: Selection, key: EditKey) -> Option<usize> {
        cursor::skip_decoration(&self.key_numeric, value, selection, key)
    }
}

/// Format a raw value with `config`
///
/// # Arguments
/// * `config` - The formatting rules
/// * `raw` - User text or a number
///
/// # Returns
/// * `Result<FormatResult, FormatError>` - The canonical value and display string;
///   fails only when a custom transform fails
///
/// # Examples
/// ```
/// use number_input_format::{format_input, FormatConfig};
///
/// let config = FormatConfig::default().with_pattern("(###) ###-####").unwrap();
/// let result = format_input(&config, "1234567890").unwrap();
/// assert_eq!(result.formatted_value, "(123) 456-7890");
/// ```
pub fn format_input(
    config: &FormatConfig,
    raw: impl Into<RawValue>,
) -> Result<FormatResult, FormatError> {
    NumberFormatter::new(config.clone())?.format_input(raw)
}

/// Render a number as text using the resolved decimal separator
fn number_to_text(n: f64, decimal_separator: Option<char>) -> String {
    let text = n.to_string();
    match decimal_separator {
        Some(sep) if sep != '.' => text.replace('.', sep.encode_utf8(&mut [0; 4])),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_text() {
        assert_eq!(number_to_text(1234.5, Some('.')), "1234.5");
        assert_eq!(number_to_text(1234.5, Some(',')), "1234,5");
        assert_eq!(number_to_text(42.0, Some(',')), "42");
        assert_eq!(number_to_text(f64::NAN, Some('.')), "NaN");
    }

    #[test]
    fn test_formatter_caches_separators() {
        let config = FormatConfig::default()
            .with_thousand_separator('.')
            .with_decimal_separator(true);
        let formatter = NumberFormatter::new(config).unwrap();
        assert_eq!(formatter.separators().decimal_separator, Some(','));
        let result = formatter.format_input("1234567,8").unwrap();
        assert_eq!(result.formatted_value, "1.234.567,8");
        assert_eq!(result.value, "1234567,8");
    }

    #[test]
    fn test_key_pattern_ignores_decimal_with_precision() {
        let config = FormatConfig::default().with_decimal_precision(2);
        let formatter = NumberFormatter::new(config).unwrap();
        assert!(!formatter.key_pattern().is_numeric_char('.'));

        let formatter = NumberFormatter::new(FormatConfig::default()).unwrap();
        assert!(formatter.key_pattern().is_numeric_char('.'));
    }

    #[test]
    fn test_number_test_pattern_follows_config() {
        let config = FormatConfig::default().with_decimal_separator(',');
        let formatter = NumberFormatter::new(config).unwrap();
        let all = formatter.number_test_pattern(true, false).unwrap();
        assert!(all.is_match_all());
        assert_eq!(all.extract("1.234,5"), "1234,5");

        let digits_only = formatter.number_test_pattern(true, true).unwrap();
        assert_eq!(digits_only.extract("1.234,5"), "12345");
        assert!(matches!(formatter.mode(), FormatMode::Grouped { precision: None, .. }));
        assert!(formatter.config().format.is_none());
    }

    #[test]
    fn test_transform_error_propagates() {
        let config = FormatConfig::default().with_transform(|_| Err("boom".to_string()));
        let err = format_input(&config, "12").unwrap_err();
        assert!(matches!(err, FormatError::Transform(ref msg) if msg == "boom"));
    }
}
