//! Caret handling
//!
//! Maps a caret offset in the pre-format text onto the formatted text, and
//! computes where the caret should jump when Delete/Backspace would remove a
//! decoration character. All offsets are in chars, not bytes.

use log::trace;

use crate::extract::NumberPattern;

/// A selection inside a text field, in char offsets.
///
/// The range is always normalized such that `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a new selection, normalizing the order of `a` and `b`
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A zero-width selection at `pos`
    #[inline]
    pub fn caret(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// Keys with skip-over-decoration behavior
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKey {
    Delete,
    Backspace,
}

/// Map a caret offset in `input_value` onto `formatted_value`
///
/// Both strings are walked in lockstep. A non-numeric source character that
/// does not line up with the target was dropped by the formatter and is
/// skipped; any other source character advances the target past its next
/// occurrence, stepping over inserted separators and decorations.
///
/// # Arguments
/// * `numeric` - Numeric character class of the active configuration
/// * `input_value` - Text of the field before formatting
/// * `formatted_value` - Text after formatting
/// * `cursor_pos` - Caret offset in `input_value`
///
/// # Returns
/// * `usize` - Caret offset in `formatted_value`, at most its length
///
/// # Examples
/// ```
/// use number_input_format::{remap_cursor, NumberPattern};
///
/// let numeric = NumberPattern::new(Some('.'), false, false).unwrap();
/// assert_eq!(remap_cursor(&numeric, "1234", "1,234", 4), 5);
/// ```
pub fn remap_cursor(
    numeric: &NumberPattern,
    input_value: &str,
    formatted_value: &str,
    cursor_pos: usize,
) -> usize {
    let source: Vec<char> = input_value.chars().collect();
    let target: Vec<char> = formatted_value.chars().collect();
    let end = cursor_pos.min(source.len());

    let mut j = 0;
    for &c in &source[..end] {
        if !numeric.is_numeric_char(c) && target.get(j) != Some(&c) {
            continue;
        }
        while j < target.len() && target[j] != c {
            j += 1;
        }
        j += 1;
    }

    let mapped = j.min(target.len());
    trace!("caret {cursor_pos} in {input_value:?} -> {mapped} in {formatted_value:?}");
    mapped
}

/// Caret target for Delete/Backspace next to a non-numeric character
///
/// When the character the key would remove is not numeric the edit should be
/// suppressed and the caret moved past the decoration instead.
///
/// # Returns
/// * `Some(pos)` - Suppress the edit and move the caret to `pos`
/// * `None` - Let the edit proceed
pub fn skip_decoration(
    numeric: &NumberPattern,
    value: &str,
    selection: Selection,
    key: EditKey,
) -> Option<usize> {
    if !selection.is_collapsed() {
        return None;
    }

    let chars: Vec<char> = value.chars().collect();
    let caret = selection.start.min(chars.len());

    match key {
        EditKey::Delete => {
            if numeric.is_numeric_at(&chars, caret) {
                return None;
            }
            let mut next = caret;
            while next < chars.len() && !numeric.is_numeric_at(&chars, next) {
                next += 1;
            }
            Some(next)
        }
        EditKey::Backspace => {
            if caret > 0 && numeric.is_numeric_at(&chars, caret - 1) {
                return None;
            }
            let mut prev = caret;
            while prev > 0 && !numeric.is_numeric_at(&chars, prev - 1) {
                prev -= 1;
            }
            Some(prev)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric() -> NumberPattern {
        NumberPattern::new(Some('.'), false, false).unwrap()
    }

    #[test]
    fn test_selection_normalizes() {
        let selection = Selection::new(5, 2);
        assert_eq!(selection, Selection { start: 2, end: 5 });
        assert!(!selection.is_collapsed());
        assert!(Selection::caret(3).is_collapsed());
    }

    #[test]
    fn test_remap_over_inserted_separator() {
        assert_eq!(remap_cursor(&numeric(), "123", "1,23", 3), 4);
        assert_eq!(remap_cursor(&numeric(), "123", "1,23", 1), 1);
        assert_eq!(remap_cursor(&numeric(), "123", "1,23", 2), 3);
    }

    #[test]
    fn test_remap_skips_dropped_letters() {
        // 'a' typed between digits is removed by the formatter
        assert_eq!(remap_cursor(&numeric(), "12a3", "123", 3), 2);
        assert_eq!(remap_cursor(&numeric(), "12a3", "123", 4), 3);
    }

    #[test]
    fn test_remap_over_prefix() {
        assert_eq!(remap_cursor(&numeric(), "5", "$5", 1), 2);
        assert_eq!(remap_cursor(&numeric(), "$1,2345", "$12,345", 7), 7);
    }

    #[test]
    fn test_remap_clamps() {
        assert_eq!(remap_cursor(&numeric(), "12", "12", 10), 2);
        assert_eq!(remap_cursor(&numeric(), "129", "12", 3), 2);
        assert_eq!(remap_cursor(&numeric(), "", "", 0), 0);
    }

    #[test]
    fn test_remap_counts_chars_not_bytes() {
        assert_eq!(remap_cursor(&numeric(), "12", "€1,2", 2), 4);
    }

    #[test]
    fn test_delete_skips_forward() {
        assert_eq!(skip_decoration(&numeric(), "1,234", Selection::caret(1), EditKey::Delete), Some(2));
        assert_eq!(skip_decoration(&numeric(), "1,234", Selection::caret(0), EditKey::Delete), None);
        assert_eq!(skip_decoration(&numeric(), "12 USD", Selection::caret(2), EditKey::Delete), Some(6));
    }

    #[test]
    fn test_backspace_skips_backward() {
        assert_eq!(skip_decoration(&numeric(), "1,234", Selection::caret(2), EditKey::Backspace), Some(1));
        assert_eq!(skip_decoration(&numeric(), "1,234", Selection::caret(3), EditKey::Backspace), None);
        assert_eq!(skip_decoration(&numeric(), "$12", Selection::caret(1), EditKey::Backspace), Some(0));
        assert_eq!(skip_decoration(&numeric(), "12", Selection::caret(0), EditKey::Backspace), Some(0));
    }

    #[test]
    fn test_range_selection_is_left_alone() {
        assert_eq!(skip_decoration(&numeric(), "1,234", Selection::new(1, 3), EditKey::Delete), None);
    }

    #[test]
    fn test_decimal_point_protected_when_ignored() {
        let keys = NumberPattern::new(Some('.'), false, true).unwrap();
        assert_eq!(skip_decoration(&keys, "1.50", Selection::caret(2), EditKey::Backspace), Some(1));
        assert_eq!(skip_decoration(&numeric(), "1.50", Selection::caret(2), EditKey::Backspace), None);
    }
}
