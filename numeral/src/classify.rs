use numeral_common::types::{Column, Row, Series, SeriesCollection};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How a series collection is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScalarMode {
    /// One headline number
    Single,
    /// Several series compared as a categorical chart
    Multi,
}

/// Multiple series, or a host that asks for multi-series display, switch to
/// the categorical rendering.
pub fn classify(series: &SeriesCollection, is_multiseries: bool) -> ScalarMode {
    if is_multiseries || series.len() > 1 {
        ScalarMode::Multi
    } else {
        ScalarMode::Single
    }
}

/// Whether `candidate` may be appended next to `existing`. Only series with
/// exactly one column qualify.
pub fn is_compatible(_existing: &Series, candidate: &Series) -> bool {
    candidate.data.cols.len() == 1
}

/// A scalar can always be rendered; with no rows it simply shows nothing.
pub fn is_renderable(_cols: &[Column], _rows: &[Row]) -> bool {
    true
}

/// Whether a result is a good default for scalar display: one row, one column.
pub fn is_sensible(cols: &[Column], rows: &[Row]) -> bool {
    rows.len() == 1 && cols.len() == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use numeral_common::types::{BaseType, CardMeta};
    use numeral_common::value::CellValue;
    use rstest::rstest;
    use std::str::FromStr;

    fn series_with_cols(n: usize) -> Series {
        let cols = (0..n)
            .map(|i| Column::new(format!("c{i}"), format!("C{i}"), BaseType::new(BaseType::INTEGER)))
            .collect();
        Series::new(CardMeta::new(Some(1), "card"), cols, vec![vec![CellValue::from(1); n]])
    }

    #[rstest]
    #[case(1, false, ScalarMode::Single)]
    #[case(1, true, ScalarMode::Multi)]
    #[case(2, false, ScalarMode::Multi)]
    #[case(2, true, ScalarMode::Multi)]
    #[case(0, false, ScalarMode::Single)]
    fn test_classify(#[case] n: usize, #[case] hint: bool, #[case] expected: ScalarMode) {
        let series: SeriesCollection = (0..n).map(|_| series_with_cols(1)).collect();
        assert_eq!(classify(&series, hint), expected);
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(2, false)]
    #[case(3, false)]
    fn test_is_compatible(#[case] cols: usize, #[case] expected: bool) {
        let existing = series_with_cols(1);
        assert_eq!(is_compatible(&existing, &series_with_cols(cols)), expected);
    }

    #[test]
    fn test_renderable_and_sensible() {
        let one = series_with_cols(1);
        assert!(is_renderable(&[], &[]));
        assert!(is_sensible(&one.data.cols, &one.data.rows));
        assert!(!is_sensible(&one.data.cols, &[]));

        let two = series_with_cols(2);
        assert!(is_renderable(&two.data.cols, &two.data.rows));
        assert!(!is_sensible(&two.data.cols, &two.data.rows));
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(ScalarMode::Multi.to_string(), "multi");
        assert_eq!(ScalarMode::from_str("single").unwrap(), ScalarMode::Single);
    }
}
