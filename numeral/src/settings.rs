use crate::transform::{DIMENSION_COLUMN, METRIC_COLUMN, METRIC_DISPLAY_NAME};
use numeral_common::settings::Settings;
use numeral_common::types::SeriesCollection;
use serde_json::json;

pub const DIMENSIONS_KEY: &str = "graph.dimensions";
pub const METRICS_KEY: &str = "graph.metrics";
pub const X_AXIS_SCALE_KEY: &str = "graph.x_axis.scale";
pub const Y_AXIS_TITLE_KEY: &str = "graph.y_axis.title_text";
pub const CARD_TITLE_KEY: &str = "card.title";

/// Chart settings implied by categorical series built from scalars
pub fn derived_settings(series: &SeriesCollection) -> Settings {
    let metric_title = series
        .first()
        .and_then(|s| s.data.cols.iter().find(|c| c.name == METRIC_COLUMN))
        .map(|c| c.display_name.clone())
        .unwrap_or_else(|| METRIC_DISPLAY_NAME.to_string());
    let title = series
        .iter()
        .map(|s| s.card.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Settings::new()
        .with(DIMENSIONS_KEY, json!([DIMENSION_COLUMN]))
        .with(METRICS_KEY, json!([METRIC_COLUMN]))
        .with(X_AXIS_SCALE_KEY, "ordinal")
        .with(Y_AXIS_TITLE_KEY, metric_title)
        .with(CARD_TITLE_KEY, title)
}

/// Derived settings fill the gaps, settings supplied by the caller win
pub fn merge_settings(derived: Settings, caller: &Settings) -> Settings {
    derived.overlay(caller)
}
