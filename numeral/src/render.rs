use numeral_common::settings::Settings;
use numeral_common::types::SeriesCollection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::{Display, EnumString};

/// Grids narrower than this many units get the small layout
pub const SMALL_WIDTH_THRESHOLD: u32 = 4;

/// Size of the dashboard cell hosting the visualization, in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LayoutSize {
    Small,
    Large,
}

impl LayoutSize {
    /// Without a grid size the large layout is used
    pub fn from_grid_size(grid_size: Option<GridSize>) -> Self {
        match grid_size {
            Some(size) if size.width < SMALL_WIDTH_THRESHOLD => LayoutSize::Small,
            _ => LayoutSize::Large,
        }
    }

    pub fn is_small(&self) -> bool {
        matches!(self, LayoutSize::Small)
    }
}

/// Everything the host passes in for one render.
///
/// `action_buttons` is an opaque fragment handed through to the output untouched.
#[derive(Debug, Clone)]
pub struct RenderProps<A> {
    pub series: SeriesCollection,
    pub settings: Settings,
    pub grid_size: Option<GridSize>,
    pub is_multiseries: bool,
    pub action_buttons: A,
}

impl<A: Default> RenderProps<A> {
    pub fn new(series: SeriesCollection, settings: Settings) -> Self {
        Self {
            series,
            settings,
            grid_size: None,
            is_multiseries: false,
            action_buttons: A::default(),
        }
    }
}

impl<A> RenderProps<A> {
    pub fn with_grid_size(mut self, grid_size: GridSize) -> Self {
        self.grid_size = Some(grid_size);
        self
    }

    pub fn with_multiseries(mut self, is_multiseries: bool) -> Self {
        self.is_multiseries = is_multiseries;
        self
    }

    pub fn with_action_buttons<B>(self, action_buttons: B) -> RenderProps<B> {
        RenderProps {
            series: self.series,
            settings: self.settings,
            grid_size: self.grid_size,
            is_multiseries: self.is_multiseries,
            action_buttons,
        }
    }
}

/// A formatted headline number with its card title
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarView<A> {
    pub compact_value: String,
    pub full_value: String,
    pub title: String,
    pub title_link_target: String,
    pub layout: LayoutSize,
    /// Whether the full value should be offered as a tooltip
    pub show_tooltip: bool,
    pub action_buttons: A,
}

/// Categorical series for a bar chart, built from several scalars
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalView<A> {
    pub series: Arc<SeriesCollection>,
    pub settings: Settings,
    pub is_scalar_series: bool,
    pub grid_size: Option<GridSize>,
    pub action_buttons: A,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan<A> {
    Scalar(ScalarView<A>),
    Categorical(CategoricalView<A>),
}

/// Draws categorical series, e.g. a bar chart
pub trait CategoricalChart<A> {
    type Output;

    fn render_chart(&mut self, view: CategoricalView<A>) -> Self::Output;
}

/// Lays out a formatted scalar, delegating multi-series display to the
/// categorical chart it also implements.
pub trait Renderer<A>: CategoricalChart<A> {
    fn render_scalar(&mut self, view: ScalarView<A>) -> Self::Output;

    fn render_plan(&mut self, plan: RenderPlan<A>) -> Self::Output {
        match plan {
            RenderPlan::Scalar(view) => self.render_scalar(view),
            RenderPlan::Categorical(view) => self.render_chart(view),
        }
    }
}

/// Link target for a card title. Unsaved cards have no link.
pub fn card_url(id: Option<i64>) -> String {
    id.map(|id| format!("/card/{id}")).unwrap_or_default()
}
