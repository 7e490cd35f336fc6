use crate::error::NumeralCommonError;
use crate::value::CellValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Display kind of a card rendered as a single headline number
pub const SCALAR_DISPLAY: &str = "scalar";

/// Display kind of a card rendered as a categorical bar chart
pub const BAR_DISPLAY: &str = "bar";

/// Semantic type of a result column, e.g. `type/Integer` or `type/Text`.
///
/// Kept as the raw type string so that types this crate doesn't know about
/// pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseType(pub String);

impl BaseType {
    pub const TEXT: &'static str = "type/Text";
    pub const INTEGER: &'static str = "type/Integer";
    pub const FLOAT: &'static str = "type/Float";
    pub const ANY: &'static str = "type/*";

    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    pub fn text() -> Self {
        Self::new(Self::TEXT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the type describes numbers. Recognizes both `type/...` names
    /// and the legacy `...Field` names.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.0.as_str(),
            "type/Number"
                | "type/Integer"
                | "type/BigInteger"
                | "type/Float"
                | "type/Decimal"
                | "IntegerField"
                | "BigIntegerField"
                | "FloatField"
                | "DecimalField"
        )
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self.0.as_str(),
            "type/Text" | "type/Category" | "TextField" | "CharField"
        )
    }
}

impl Default for BaseType {
    fn default() -> Self {
        Self::new(Self::ANY)
    }
}

impl Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BaseType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Metadata describing one result column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub base_type: BaseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Any further attributes, preserved verbatim
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Column {
    pub fn new<N: Into<String>, D: Into<String>>(name: N, display_name: D, base_type: BaseType) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            base_type,
            ..Default::default()
        }
    }
}

pub type Row = Vec<CellValue>;

/// Card metadata attached to a series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_display")]
    pub display: String,

    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

fn default_display() -> String {
    SCALAR_DISPLAY.to_string()
}

impl CardMeta {
    pub fn new<S: Into<String>>(id: Option<i64>, name: S) -> Self {
        Self {
            id,
            name: name.into(),
            display: default_display(),
            extra: Default::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    #[serde(default)]
    pub cols: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl SeriesData {
    /// The value in the first column of the first row, if any
    pub fn first_value(&self) -> Option<&CellValue> {
        self.rows.first().and_then(|row| row.first())
    }

    pub fn first_column(&self) -> Option<&Column> {
        self.cols.first()
    }
}

/// One unit of query result data: card metadata plus columns and rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub card: CardMeta,
    #[serde(default)]
    pub data: SeriesData,
}

impl Series {
    pub fn new(card: CardMeta, cols: Vec<Column>, rows: Vec<Row>) -> Self {
        Self {
            card,
            data: SeriesData { cols, rows },
        }
    }

    /// Build a one-column, one-row series holding a single value
    pub fn scalar<S: Into<String>, V: Into<CellValue>>(name: S, column: Column, value: V) -> Self {
        Self::new(CardMeta::new(None, name), vec![column], vec![vec![value.into()]])
    }
}

/// Ordered series list. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesCollection(Vec<Series>);

impl SeriesCollection {
    pub fn new(series: Vec<Series>) -> Self {
        Self(series)
    }

    /// Parse a JSON array of `{card, data}` objects
    pub fn from_json(json: &str) -> Result<Self, NumeralCommonError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Series> {
        self.0.first()
    }

    pub fn get(&self, index: usize) -> Option<&Series> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.0.iter()
    }
}

impl From<Vec<Series>> for SeriesCollection {
    fn from(value: Vec<Series>) -> Self {
        Self(value)
    }
}

impl FromIterator<Series> for SeriesCollection {
    fn from_iter<T: IntoIterator<Item = Series>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SeriesCollection {
    type Item = Series;
    type IntoIter = std::vec::IntoIter<Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SeriesCollection {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
