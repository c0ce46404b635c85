//! Parsing module
//!
//! This module turns configured `#` patterns into token lists and reads the
//! leading number of an extracted digit string for precision rounding.
//! The main entry point is the `parse_format_pattern` function.

mod numeric;
mod pattern;

pub use numeric::parse_decimal_prefix;
pub use pattern::parse_format_pattern;
