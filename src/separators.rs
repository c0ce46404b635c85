//! Separator resolution
//!
//! Turns the boolean shorthands of [`FormatConfig`] into concrete characters and
//! makes sure the two separators never collide.

use crate::types::{FormatConfig, ResolvedSeparators, SeparatorSetting};

/// Resolve the effective thousand and decimal separators of a configuration
///
/// # Arguments
/// * `config` - The formatting configuration
///
/// # Returns
/// * `ResolvedSeparators` - The characters to use; `None` disables the feature
///
/// # Examples
/// ```
/// use number_input_format::{resolve_separators, FormatConfig};
///
/// let config = FormatConfig::default()
///     .with_thousand_separator('.')
///     .with_decimal_separator(true);
/// let separators = resolve_separators(&config);
/// assert_eq!(separators.thousand_separator, Some('.'));
/// assert_eq!(separators.decimal_separator, Some(','));
/// ```
pub fn resolve_separators(config: &FormatConfig) -> ResolvedSeparators {
    let thousand_separator = match config.thousand_separator {
        SeparatorSetting::Disabled => None,
        SeparatorSetting::Enabled => Some(','),
        SeparatorSetting::Char(c) => Some(c),
    };

    let mut decimal_separator = match config.decimal_separator {
        SeparatorSetting::Disabled => None,
        SeparatorSetting::Enabled => Some(alternate_of(thousand_separator)),
        SeparatorSetting::Char(c) => Some(c),
    };

    if decimal_separator.is_some() && decimal_separator == thousand_separator {
        decimal_separator = Some(alternate_of(thousand_separator));
    }

    ResolvedSeparators {
        decimal_separator,
        thousand_separator,
    }
}

/// The conventional decimal separator next to a given thousand separator
fn alternate_of(thousand_separator: Option<char>) -> char {
    if thousand_separator == Some('.') { ',' } else { '.' }
}
