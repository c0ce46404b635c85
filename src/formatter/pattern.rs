use crate::types::{Pattern, PatternToken};

/// Fill a `#` pattern with the extracted characters
///
/// Placeholders are consumed left to right. With a mask every unused
/// placeholder is replaced by the mask, so the output always spans the whole
/// pattern. Without a mask the output ends at the last filled placeholder.
pub(super) fn format_with_pattern(num: &str, pattern: &Pattern, mask: Option<&str>) -> String {
    let mut digits = num.chars();
    let mut result = String::with_capacity(pattern.source.len());
    let mut filled_len = 0;

    for token in &pattern.tokens {
        match token {
            PatternToken::Literal(c) => result.push(*c),
            PatternToken::Placeholder => match (digits.next(), mask) {
                (Some(digit), _) => {
                    result.push(digit);
                    filled_len = result.len();
                }
                (None, Some(mask)) => result.push_str(mask),
                (None, None) => break,
            },
        }
    }

    if mask.is_none() {
        result.truncate(filled_len);
    }
    result
}
