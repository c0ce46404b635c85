use number_input_format::{
    FormatConfig, FormatError, FormatResult, NumberFormatter, PrecisionSetting, RawValue,
    build_number_test_pattern, format_input, get_preset, list_available_presets,
};
use pretty_assertions::assert_eq;

fn fmt(config: &FormatConfig, raw: &str) -> FormatResult {
    format_input(config, raw).unwrap()
}

#[test]
fn test_pattern_format() {
    let config = FormatConfig::default().with_pattern("(###) ###-####").unwrap();
    let result = fmt(&config, "1234567890");
    assert_eq!(result.formatted_value, "(123) 456-7890");
    assert_eq!(result.value, "1234567890");

    // Re-formatting the display text is stable
    assert_eq!(fmt(&config, "(123) 456-7").formatted_value, "(123) 456-7");
}

#[test]
fn test_masked_pattern_format() {
    let config = FormatConfig::default()
        .with_pattern("##/##")
        .unwrap()
        .with_mask("_");
    let result = fmt(&config, "1");
    assert_eq!(result.formatted_value, "1_/__");
    assert_eq!(result.value, "1");

    assert_eq!(fmt(&config, "1234").formatted_value, "12/34");
}

#[test]
fn test_grouping_with_precision() {
    let config = FormatConfig::default()
        .with_thousand_separator(',')
        .with_decimal_separator('.')
        .with_decimal_precision(2);
    let result = fmt(&config, "1234567.891");
    assert_eq!(result.formatted_value, "1,234,567.89");
    assert_eq!(result.value, "1234567.89");
}

#[test]
fn test_precision_rounding_follows_float_semantics() {
    let config = FormatConfig::default().with_decimal_precision(2);
    // 1.005 is stored just below the midpoint
    assert_eq!(fmt(&config, "1.005").formatted_value, "1.00");
    assert_eq!(fmt(&config, "2.675").formatted_value, "2.67");
    assert_eq!(fmt(&config, "1.006").formatted_value, "1.01");
}

#[test]
fn test_precision_exact_midpoints_round_up() {
    let whole = FormatConfig::default()
        .with_thousand_separator(true)
        .with_decimal_precision(0);
    assert_eq!(fmt(&whole, "2.5").formatted_value, "3");
    assert_eq!(fmt(&whole, "0.5").formatted_value, "1");
    assert_eq!(fmt(&whole, "1999.5").formatted_value, "2,000");

    let one = FormatConfig::default().with_decimal_precision(1);
    assert_eq!(fmt(&one, "0.25").formatted_value, "0.3");

    let two = FormatConfig::default().with_decimal_precision(2);
    assert_eq!(fmt(&two, "0.125").formatted_value, "0.13");
    assert_eq!(fmt(&two, "1.005").formatted_value, "1.00");
}

#[test]
fn test_precision_shorthand() {
    let config = FormatConfig::default().with_precision_setting(PrecisionSetting::Enabled);
    assert_eq!(fmt(&config, "3.14159").formatted_value, "3.14");
    assert_eq!(fmt(&config, "3").formatted_value, "3.00");
}

#[test]
fn test_suffix_follows_fraction() {
    let config = FormatConfig::default()
        .with_decimal_precision(2)
        .with_suffix("%");
    assert_eq!(fmt(&config, "12.5").formatted_value, "12.50%");
}

#[test]
fn test_grouping_is_idempotent() {
    let config = FormatConfig::default()
        .with_thousand_separator(true)
        .with_prefix("$");
    for raw in ["1234567", "1,234,567.5", "$12,34", "0.25", "9999999999"] {
        let first = fmt(&config, raw).formatted_value;
        let second = fmt(&config, &first).formatted_value;
        assert_eq!(first, second, "input {raw:?}");
    }
}

#[test]
fn test_digit_preservation_under_decoration() {
    let configs = [
        FormatConfig::default(),
        FormatConfig::default().with_thousand_separator(true),
        FormatConfig::default()
            .with_thousand_separator('.')
            .with_decimal_separator(','),
        FormatConfig::default()
            .with_thousand_separator(' ')
            .with_prefix("$")
            .with_suffix(" USD"),
    ];
    let inputs = ["abc1d2e3", "1,2.3.4", "$ 9 9 9", "0.0001", "12.", ".5"];

    for config in &configs {
        let extractor = build_number_test_pattern(config, true, false).unwrap();
        for raw in inputs {
            let result = fmt(config, raw);
            assert_eq!(result.value, extractor.extract(raw), "input {raw:?} with {config:?}");
        }
    }
}

#[test]
fn test_empty_input_is_always_empty() {
    let configs = [
        FormatConfig::default(),
        FormatConfig::default().with_prefix("$").with_suffix(" USD"),
        FormatConfig::default()
            .with_pattern("##/##")
            .unwrap()
            .with_mask("_"),
        FormatConfig::default().with_transform(|_| Ok("never".to_string())),
        FormatConfig::default().with_decimal_precision(2),
    ];

    for config in &configs {
        for raw in ["", "abc", "-", "$ USD"] {
            assert_eq!(fmt(config, raw), FormatResult::empty(), "input {raw:?}");
        }
    }
}

#[test]
fn test_minus_sign_is_not_numeric() {
    let config = FormatConfig::default().with_thousand_separator(true);
    assert_eq!(fmt(&config, "-1234").formatted_value, "1,234");
}

#[test]
fn test_numeric_raw_values() {
    let config = FormatConfig::default().with_thousand_separator(true);
    let result = format_input(&config, 1234567.25).unwrap();
    assert_eq!(result.formatted_value, "1,234,567.25");

    let result = format_input(&config, 42_i64).unwrap();
    assert_eq!(result.formatted_value, "42");

    let comma = FormatConfig::default()
        .with_thousand_separator('.')
        .with_decimal_separator(',');
    let result = format_input(&comma, RawValue::Number(1234.5)).unwrap();
    assert_eq!(result.formatted_value, "1.234,5");
    assert_eq!(result.value, "1234,5");

    assert!(format_input(&config, f64::NAN).unwrap().is_empty());
}

#[test]
fn test_conflicting_separators_are_swapped() {
    let config = FormatConfig::default()
        .with_thousand_separator('.')
        .with_decimal_separator('.');
    assert_eq!(fmt(&config, "1234,5").formatted_value, "1.234,5");
}

#[test]
fn test_decimal_separator_disabled() {
    let config = FormatConfig::default()
        .with_thousand_separator(true)
        .with_decimal_separator(false);
    let result = fmt(&config, "12.34");
    assert_eq!(result.formatted_value, "1,234");
    assert_eq!(result.value, "1234");
}

#[test]
fn test_transform_format() {
    let config = FormatConfig::default().with_transform(|digits| Ok(format!("{digits} units")));
    let result = fmt(&config, "a1b2");
    assert_eq!(result.formatted_value, "12 units");
    assert_eq!(result.value, "12");
}

#[test]
fn test_transform_value_is_recomputed() {
    let config = FormatConfig::default().with_transform(|digits| {
        let reversed: String = digits.chars().rev().collect();
        Ok(format!("<{reversed}>"))
    });
    let result = fmt(&config, "123");
    assert_eq!(result.formatted_value, "<321>");
    assert_eq!(result.value, "321");
}

#[test]
fn test_transform_failure_propagates() {
    let config = FormatConfig::default().with_transform(|digits| {
        if digits.len() > 3 {
            Err(format!("too long: {digits}"))
        } else {
            Ok(digits.to_string())
        }
    });
    assert_eq!(fmt(&config, "123").formatted_value, "123");

    let err = format_input(&config, "1234").unwrap_err();
    assert!(matches!(err, FormatError::Transform(_)));
    assert_eq!(err.to_string(), "custom formatter failed: too long: 1234");
}

#[test]
fn test_invalid_pattern() {
    let err = FormatConfig::default().with_pattern("no digits").unwrap_err();
    assert!(matches!(err, FormatError::InvalidPattern(_)));
}

#[test]
fn test_formatter_reuse_matches_free_function() {
    let config = FormatConfig::default()
        .with_thousand_separator(true)
        .with_decimal_precision(1);
    let formatter = NumberFormatter::new(config.clone()).unwrap();
    for raw in ["1", "12345.67", "abc", "0.05"] {
        assert_eq!(formatter.format_input(raw).unwrap(), fmt(&config, raw));
    }
}

#[test]
fn test_all_presets_are_idempotent() {
    for name in list_available_presets() {
        let config = get_preset(&name).unwrap();
        let first = fmt(&config, "1234").formatted_value;
        assert!(!first.is_empty(), "preset {name}");
        let second = fmt(&config, &first).formatted_value;
        assert_eq!(first, second, "preset {name}");
    }
}
