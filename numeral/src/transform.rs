use numeral_common::types::{BaseType, CardMeta, Column, Series, SeriesCollection, SeriesData, BAR_DISPLAY};
use numeral_common::value::CellValue;

pub const DIMENSION_COLUMN: &str = "dimension";
pub const DIMENSION_DISPLAY_NAME: &str = "Name";
pub const METRIC_COLUMN: &str = "metric";
pub const METRIC_DISPLAY_NAME: &str = "Value";

/// Convert each single-value series into a one-row `(name, value)` series
/// that a bar chart can draw side by side.
///
/// Order is preserved and inputs are left untouched. A series without rows
/// contributes a `Null` metric.
pub fn to_categorical(series: &SeriesCollection) -> SeriesCollection {
    series.iter().map(series_to_categorical).collect()
}

fn series_to_categorical(series: &Series) -> Series {
    let card = CardMeta {
        display: BAR_DISPLAY.to_string(),
        ..series.card.clone()
    };

    let dimension = Column::new(DIMENSION_COLUMN, DIMENSION_DISPLAY_NAME, BaseType::text());
    let metric = Column {
        name: METRIC_COLUMN.to_string(),
        display_name: METRIC_DISPLAY_NAME.to_string(),
        ..series.data.first_column().cloned().unwrap_or_default()
    };

    let value = series.data.first_value().cloned().unwrap_or(CellValue::Null);
    Series {
        card,
        data: SeriesData {
            cols: vec![dimension, metric],
            rows: vec![vec![CellValue::Text(series.card.name.clone()), value]],
        },
    }
}
