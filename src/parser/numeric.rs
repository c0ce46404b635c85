use winnow::ascii::digit0;
use winnow::combinator::{opt, preceded};
use winnow::token::one_of;
use winnow::{ModalResult, Parser};

/// Read the leading decimal number of `input_str`
///
/// Accepts digits, an optional `decimal_separator` and more digits; anything
/// after that is ignored, so `"12.3.4"` reads as `12.3`. A leading or trailing
/// separator is allowed (`".5"`, `"5."`).
///
/// # Returns
/// * `Option<f64>` - The number, or `None` if no digit precedes the rest
pub fn parse_decimal_prefix(input_str: &str, decimal_separator: char) -> Option<f64> {
    let mut input = input_str;

    let parsed: ModalResult<(&str, Option<&str>)> =
        (digit0, opt(preceded(one_of(decimal_separator), digit0))).parse_next(&mut input);
    let (integer, fraction) = parsed.ok()?;
    let fraction = fraction.unwrap_or("");

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let integer = if integer.is_empty() { "0" } else { integer };
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    format!("{integer}.{fraction}").parse::<f64>().ok()
}
