use crate::number::{decompose_to_coefficient_and_exponent, FractionDigits, NumberFormat};
use numeral_common::types::Column;
use numeral_common::value::CellValue;
use std::fmt::Debug;

/// Turns a cell into display text, taking the column type into account.
///
/// `compact` asks for an abbreviated form for constrained layouts.
pub trait DisplayFormatter: Debug + Send + Sync + 'static {
    fn format_value(&self, value: &CellValue, column: Option<&Column>, compact: bool) -> String;
}

/// Grouped numbers for full display, SI-abbreviated numbers when compact.
/// Text passes through unchanged.
#[derive(Debug, Clone, Default)]
pub struct DefaultDisplayFormatter {
    number: NumberFormat,
}

impl DefaultDisplayFormatter {
    fn format_full(&self, value: f64) -> String {
        if value.fract() == 0.0 {
            self.number.format_fixed(value, FractionDigits::exact(0))
        } else if value.abs() < 1.0 {
            self.format_significant(value, 3)
        } else {
            self.number.format_fixed(value, FractionDigits::new(0, 2))
        }
    }

    fn format_compact(&self, value: f64) -> String {
        let abs = value.abs();
        if value == 0.0 {
            "0".to_string()
        } else if abs < 1.0 {
            self.format_significant(value, 2)
        } else if abs < 1000.0 {
            self.number.format_fixed(value, FractionDigits::new(0, 1))
        } else {
            self.number.format_si(value, 2)
        }
    }

    /// Fixed-point with enough fraction digits to show `significant` digits of a value below 1
    fn format_significant(&self, value: f64, significant: usize) -> String {
        let (_, exponent) = decompose_to_coefficient_and_exponent(value.abs(), None);
        let fraction = (significant as isize - 1 - exponent).max(0) as usize;
        self.number.format_fixed(value, FractionDigits::new(0, fraction))
    }
}

impl DisplayFormatter for DefaultDisplayFormatter {
    fn format_value(&self, value: &CellValue, column: Option<&Column>, compact: bool) -> String {
        match value {
            CellValue::Null => String::new(),
            CellValue::Bool(v) => v.to_string(),
            CellValue::Text(v) => v.clone(),
            CellValue::Number(v) if column.is_some_and(|c| c.base_type.is_text()) => v.to_string(),
            CellValue::Number(v) if !v.is_finite() => self.number.format_fixed(*v, FractionDigits::exact(0)),
            CellValue::Number(v) if compact => self.format_compact(*v),
            CellValue::Number(v) => self.format_full(*v),
        }
    }
}
