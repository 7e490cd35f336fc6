use numeral_common::types::{BaseType, Column};
use numeral_common::value::CellValue;
use numeral_format::config::FormatConfig;
use numeral_format::formatter::{format_number, FormattedScalar, ValueFormatter};
use rstest::rstest;

fn float_column() -> Column {
    Column::new("avg", "Average", BaseType::new(BaseType::FLOAT))
}

fn format(value: f64, config: &FormatConfig, compact: bool) -> FormattedScalar {
    ValueFormatter::default().format(
        Some(&CellValue::Number(value)),
        config,
        compact,
        Some(&float_column()),
    )
}

fn fraction_len(s: &str) -> usize {
    s.split_once('.').map(|(_, f)| f.len()).unwrap_or(0)
}

#[rstest]
fn test_decimals_fix_fraction_length(
    #[values(0.0, 1.0, -2.5, 3.14159, 1234.5, 1e-7, 98765.4321)] value: f64,
    #[values(0, 1, 2, 4)] decimals: usize,
) {
    let config = FormatConfig::default().with_decimals(decimals as f64);
    let formatted = format(value, &config, true);
    assert_eq!(fraction_len(&formatted.full), decimals, "{formatted:?}");
    assert_eq!(fraction_len(&formatted.compact), decimals, "{formatted:?}");
}

#[test]
fn test_scale_applies_before_rounding() {
    let config = FormatConfig::default().with_scale(10.0).with_decimals(1.0);
    // scale then round: 1.234 * 10 = 12.34 -> 12.3
    assert_eq!(format_number(1.234, &config).unwrap(), "12.3");

    // round then scale would have given 1.2 * 10 = 12.0
    let rounded_first = format_number(1.234, &FormatConfig::default().with_decimals(1.0)).unwrap();
    assert_eq!(rounded_first, "1.2");
    assert_ne!(format_number(1.234, &config).unwrap(), "12.0");
}

#[test]
fn test_scale_matches_premultiplied_value() {
    let scaled = format_number(0.4567, &FormatConfig::default().with_scale(100.0)).unwrap();
    let premultiplied = format_number(45.67, &FormatConfig::default()).unwrap();
    assert_eq!(scaled, premultiplied);
}

#[rstest]
#[case(FormatConfig::default())]
#[case(FormatConfig::default().with_decimals(3.0))]
#[case(FormatConfig::default().with_currency("EUR"))]
#[case(FormatConfig::default().with_locale("fr-FR"))]
#[case(FormatConfig::default().with_currency("bad!"))]
fn test_prefix_suffix_on_both_forms(#[case] config: FormatConfig) {
    let config = config.with_prefix("≈ ").with_suffix(" units");
    for value in [0.5, 42.0, 123456.789] {
        let formatted = format(value, &config, true);
        for s in [&formatted.compact, &formatted.full] {
            assert!(s.starts_with("≈ "), "{s}");
            assert!(s.ends_with(" units"), "{s}");
        }
    }
}

#[rstest]
#[case(1234567.0, "1234567")]
#[case(1000.0, "1000")]
#[case(-98765432.1, "-98765432.1")]
fn test_no_locale_means_no_grouping(#[case] value: f64, #[case] expected: &str) {
    let formatted = format(value, &FormatConfig::default(), false);
    assert_eq!(formatted.full, expected);
    assert_eq!(formatted.compact, expected);
    assert!(!formatted.full.contains(','));
}

#[test]
fn test_locale_grouping() {
    let formatted = format(1234567.0, &FormatConfig::default().with_locale("de-CH"), false);
    assert_eq!(formatted.full, "1’234’567");
}

#[test]
fn test_full_never_shorter_than_compact() {
    let formatter = ValueFormatter::default();
    let config = FormatConfig::default().with_currency("???");
    for value in [0.0, 0.0123, 1.5, 999.96, 1234.0, 5_678_901.23, -42e9] {
        let formatted = formatter.format(Some(&CellValue::Number(value)), &config, true, None);
        assert!(
            formatted.full.chars().count() >= formatted.compact.chars().count(),
            "{formatted:?}"
        );
    }
}

#[test]
fn test_rounding_half_away_from_zero() {
    let config = FormatConfig::default().with_decimals(0.0);
    assert_eq!(format_number(2.5, &config).unwrap(), "3");
    assert_eq!(format_number(-2.5, &config).unwrap(), "-3");
}
