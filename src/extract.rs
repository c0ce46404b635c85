//! Number extraction
//!
//! A [`NumberPattern`] is the character class of "numeric" characters under the
//! current separator configuration: ASCII digits plus, unless suppressed, the
//! decimal separator. It drives extraction, cursor remapping and the keyboard
//! skip-over logic.

use regex::Regex;

use crate::error::FormatError;
use crate::separators::resolve_separators;
use crate::types::FormatConfig;

/// Compiled numeric character class
#[derive(Debug, Clone)]
pub struct NumberPattern {
    regex: Regex,
    match_all: bool,
}

impl NumberPattern {
    /// Build the class for a given decimal separator
    ///
    /// # Arguments
    /// * `decimal_separator` - The resolved decimal separator, if any
    /// * `match_all` - Whether [`NumberPattern::extract`] collects every match or only the first
    /// * `ignore_decimal_separator` - Treat the decimal separator as non-numeric
    pub fn new(
        decimal_separator: Option<char>,
        match_all: bool,
        ignore_decimal_separator: bool,
    ) -> Result<Self, FormatError> {
        let mut source = String::from("[0-9]");
        if let Some(sep) = decimal_separator.filter(|_| !ignore_decimal_separator) {
            // Separators such as '.' or '$' are regex syntax
            source.push('|');
            source.push_str(&regex::escape(sep.encode_utf8(&mut [0; 4])));
        }
        let regex = Regex::new(&source)?;
        Ok(Self { regex, match_all })
    }

    /// The underlying regular expression
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match_all(&self) -> bool {
        self.match_all
    }

    /// Whether `text` contains at least one numeric character
    pub fn test(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Whether a single character is numeric
    pub fn is_numeric_char(&self, c: char) -> bool {
        self.regex.is_match(c.encode_utf8(&mut [0; 4]))
    }

    /// Whether the character at `index` (in chars) exists and is numeric
    pub fn is_numeric_at(&self, chars: &[char], index: usize) -> bool {
        chars.get(index).is_some_and(|c| self.is_numeric_char(*c))
    }

    /// Concatenate the numeric characters of `text` in order
    ///
    /// With a single-match pattern only the first numeric character is returned.
    pub fn extract(&self, text: &str) -> String {
        if self.match_all {
            self.regex.find_iter(text).map(|m| m.as_str()).collect()
        } else {
            self.regex
                .find(text)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        }
    }
}

/// Build the numeric test pattern for a configuration
///
/// # Arguments
/// * `config` - The formatting configuration
/// * `match_all` - Collect every match during extraction
/// * `ignore_decimal_separator` - Treat the decimal separator as non-numeric
///
/// # Returns
/// * `Result<NumberPattern, FormatError>` - The compiled pattern
///
/// # Examples
/// ```
/// use number_input_format::{build_number_test_pattern, FormatConfig};
///
/// let pattern = build_number_test_pattern(&FormatConfig::default(), true, false).unwrap();
/// assert_eq!(pattern.extract("$1,234.5"), "1234.5");
/// ```
pub fn build_number_test_pattern(
    config: &FormatConfig,
    match_all: bool,
    ignore_decimal_separator: bool,
) -> Result<NumberPattern, FormatError> {
    let separators = resolve_separators(config);
    NumberPattern::new(
        separators.decimal_separator,
        match_all,
        ignore_decimal_separator,
    )
}
