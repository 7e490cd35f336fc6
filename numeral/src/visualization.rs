use crate::classify::{classify, ScalarMode};
use crate::render::{
    card_url, CategoricalView, GridSize, LayoutSize, RenderPlan, RenderProps, Renderer, ScalarView,
};
use crate::settings::{derived_settings, merge_settings};
use crate::transform::to_categorical;
use numeral_common::types::SeriesCollection;
use numeral_format::config::FormatConfig;
use numeral_format::formatter::ValueFormatter;
use std::sync::Arc;

pub const IDENTIFIER: &str = "scalar";
pub const DISPLAY_NAME: &str = "Number";
pub const ICON_NAME: &str = "number";
pub const NO_HEADER: bool = true;
pub const SUPPORTS_SERIES: bool = true;
pub const MIN_SIZE: GridSize = GridSize {
    width: 3,
    height: 3,
};

/// Series as they will be displayed, computed from the host's input
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSeries {
    pub mode: ScalarMode,
    pub series: Arc<SeriesCollection>,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    input: SeriesCollection,
    is_multiseries: bool,
    prepared: PreparedSeries,
}

/// The scalar visualization.
///
/// Keeps the most recently prepared series so that re-renders with
/// structurally equal input skip the multi-series transform.
#[derive(Debug, Clone, Default)]
pub struct ScalarVisualization {
    formatter: ValueFormatter,
    last: Option<CacheEntry>,
}

impl ScalarVisualization {
    pub fn new(formatter: ValueFormatter) -> Self {
        Self {
            formatter,
            last: None,
        }
    }

    /// Classify the series and, for multiple series, convert them to
    /// categorical form. Reuses the previous result when the input is unchanged.
    pub fn prepare(&mut self, series: &SeriesCollection, is_multiseries: bool) -> PreparedSeries {
        if let Some(entry) = &self.last {
            if entry.is_multiseries == is_multiseries && entry.input == *series {
                return entry.prepared.clone();
            }
        }

        let mode = classify(series, is_multiseries);
        let prepared = PreparedSeries {
            mode,
            series: Arc::new(match mode {
                ScalarMode::Multi => to_categorical(series),
                ScalarMode::Single => series.clone(),
            }),
        };
        log::debug!("prepared {} series for {mode} display", series.len());

        self.last = Some(CacheEntry {
            input: series.clone(),
            is_multiseries,
            prepared: prepared.clone(),
        });
        prepared
    }

    /// Decide what to draw for `props`
    pub fn plan<A>(&mut self, props: RenderProps<A>) -> RenderPlan<A> {
        let prepared = self.prepare(&props.series, props.is_multiseries);

        match prepared.mode {
            ScalarMode::Multi => {
                let settings = merge_settings(derived_settings(&prepared.series), &props.settings);
                RenderPlan::Categorical(CategoricalView {
                    series: prepared.series,
                    settings,
                    is_scalar_series: true,
                    grid_size: props.grid_size,
                    action_buttons: props.action_buttons,
                })
            }
            ScalarMode::Single => {
                let layout = LayoutSize::from_grid_size(props.grid_size);
                let config = FormatConfig::from_settings(&props.settings);
                let first = prepared.series.first();

                let value = first.and_then(|s| s.data.first_value());
                let column = first.and_then(|s| s.data.first_column());
                let formatted = self.formatter.format(value, &config, layout.is_small(), column);

                let (title, title_link_target) = first
                    .map(|s| (s.card.name.clone(), card_url(s.card.id)))
                    .unwrap_or_default();

                RenderPlan::Scalar(ScalarView {
                    show_tooltip: formatted.needs_tooltip(),
                    compact_value: formatted.compact,
                    full_value: formatted.full,
                    title,
                    title_link_target,
                    layout,
                    action_buttons: props.action_buttons,
                })
            }
        }
    }

    /// Plan and hand the result to `renderer`
    pub fn render<A, R: Renderer<A>>(&mut self, props: RenderProps<A>, renderer: &mut R) -> R::Output {
        let plan = self.plan(props);
        renderer.render_plan(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numeral_common::types::{BaseType, Column, Series};

    fn series(names: &[&str]) -> SeriesCollection {
        let col = Column::new("count", "Count", BaseType::new(BaseType::INTEGER));
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Series::scalar(*name, col.clone(), i as i64))
            .collect()
    }

    #[test]
    fn test_prepare_reuses_equal_input() {
        let mut viz = ScalarVisualization::default();
        let first = viz.prepare(&series(&["A", "B"]), false);
        let second = viz.prepare(&series(&["A", "B"]), false);
        assert_eq!(first.mode, ScalarMode::Multi);
        assert!(Arc::ptr_eq(&first.series, &second.series));
    }

    #[test]
    fn test_prepare_recomputes_on_change() {
        let mut viz = ScalarVisualization::default();
        let first = viz.prepare(&series(&["A", "B"]), false);
        let changed = viz.prepare(&series(&["A", "C"]), false);
        assert!(!Arc::ptr_eq(&first.series, &changed.series));

        let hinted = viz.prepare(&series(&["A"]), true);
        assert_eq!(hinted.mode, ScalarMode::Multi);
        let unhinted = viz.prepare(&series(&["A"]), false);
        assert_eq!(unhinted.mode, ScalarMode::Single);
    }
}
