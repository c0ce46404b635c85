use crate::parser::parse_decimal_prefix;
use crate::types::ResolvedSeparators;

/// Format extracted characters with grouping, precision, prefix and suffix
pub(super) fn format_grouped(
    num: &str,
    separators: ResolvedSeparators,
    precision: Option<usize>,
    prefix: &str,
    suffix: &str,
) -> String {
    let (integer, fraction) = match separators.decimal_separator {
        None => (num.to_string(), None),
        Some(sep) => {
            let (integer, fraction) = match precision {
                Some(digits) => round_to_precision(num, sep, digits),
                None => match num.split_once(sep) {
                    Some((integer, fraction)) => (integer.to_string(), Some(fraction.to_string())),
                    None => (num.to_string(), None),
                },
            };
            (integer, fraction.map(|f| (sep, f)))
        }
    };

    let integer = match separators.thousand_separator {
        Some(thousand) => group_thousands(&integer, thousand),
        None => integer,
    };

    let mut result = String::with_capacity(prefix.len() + integer.len() + suffix.len() + 8);
    result.push_str(prefix);
    result.push_str(&integer);
    if let Some((sep, fraction)) = fraction {
        result.push(sep);
        result.push_str(&fraction);
    }
    result.push_str(suffix);
    result
}

/// Parse `num` as a float and render it with exactly `digits` fractional digits.
///
/// Rounding works on the exact binary value, so `1.005` becomes `1.00` because
/// the nearest double lies below the midpoint. Exact midpoints such as `2.5`
/// round up.
fn round_to_precision(num: &str, sep: char, digits: usize) -> (String, Option<String>) {
    let value = parse_decimal_prefix(num, sep).unwrap_or(0.0);
    let fixed = to_fixed(value, digits);
    match fixed.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), Some(fraction.to_string())),
        None => (fixed, None),
    }
}

// Enough fractional digits to expand any finite f64 exactly
const EXACT_DIGITS: usize = 1100;

/// Fixed-point rendering of a non-negative `value` with ties rounded up
fn to_fixed(value: f64, digits: usize) -> String {
    if digits < EXACT_DIGITS {
        let exact = format!("{value:.prec$}", prec = EXACT_DIGITS);
        if let Some((integer, fraction)) = exact.split_once('.') {
            let (kept, rest) = fraction.split_at(digits);
            let is_tie = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');
            if is_tie {
                return increment_last_digit(integer, kept);
            }
        }
    }
    format!("{value:.digits$}")
}

/// Add one unit in the last place of `integer.fraction`
fn increment_last_digit(integer: &str, fraction: &str) -> String {
    let mut bytes: Vec<u8> = integer.bytes().chain(fraction.bytes()).collect();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            carry = false;
            break;
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }

    let split = bytes.len() - fraction.len();
    let (integer, fraction) = bytes.split_at(split);
    let mut result: String = integer.iter().map(|&b| char::from(b)).collect();
    if !fraction.is_empty() {
        result.push('.');
        result.extend(fraction.iter().map(|&b| char::from(b)));
    }
    result
}

/// Insert `separator` every three digits, counting from the right
///
/// # Examples
/// ```
/// use number_input_format::formatter::group_thousands;
///
/// assert_eq!(group_thousands("1234567", ','), "1,234,567");
/// assert_eq!(group_thousands("123", ','), "123");
/// ```
pub fn group_thousands(integer: &str, separator: char) -> String {
    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(integer.len() + digits.len() / 3);

    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*digit);
    }

    grouped
}
