use winnow::combinator::{alt, repeat};
use winnow::token::{any, literal};
use winnow::{ModalResult, Parser};

use crate::types::{Pattern, PatternToken};

/// `#`, a digit placeholder
pub fn parse_placeholder(input: &mut &str) -> ModalResult<PatternToken> {
    literal("#")
        .value(PatternToken::Placeholder)
        .parse_next(input)
}

/// Any other character, kept as is
pub fn parse_literal(input: &mut &str) -> ModalResult<PatternToken> {
    any.map(PatternToken::Literal).parse_next(input)
}

/// Parse a single token of a pattern
pub fn parse_pattern_token(input: &mut &str) -> ModalResult<PatternToken> {
    alt((parse_placeholder, parse_literal)).parse_next(input)
}

/// Parse a `#` pattern
///
/// # Arguments
/// * `input_str` - The pattern, e.g. `"(###) ###-####"`
///
/// # Returns
/// * `Result<Pattern, String>` - The parsed pattern, or an error message
///
/// # Examples
/// ```
/// use number_input_format::parser::parse_format_pattern;
///
/// let pattern = parse_format_pattern("##/##").unwrap();
/// assert_eq!(pattern.placeholder_count(), 4);
/// ```
pub fn parse_format_pattern(input_str: &str) -> Result<Pattern, String> {
    let mut input = input_str;

    let tokens: Vec<PatternToken> = repeat(0.., parse_pattern_token)
        .parse_next(&mut input)
        .map_err(|e| format!("Parse error: {e:?} at remaining input '{input}'"))?;

    if !input.is_empty() {
        return Err(format!("Trailing characters in pattern: '{input}'"));
    }

    if !tokens.iter().any(|t| matches!(t, PatternToken::Placeholder)) {
        return Err(format!("Pattern '{input_str}' contains no '#' placeholder"));
    }

    Ok(Pattern {
        source: input_str.to_string(),
        tokens,
    })
}
