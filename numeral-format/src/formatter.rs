use crate::config::FormatConfig;
use crate::currency::Currency;
use crate::display::{DefaultDisplayFormatter, DisplayFormatter};
use crate::error::FormatError;
use crate::locale::{fallback_locale, resolve_locale};
use crate::number::FractionDigits;
use numeral_common::types::Column;
use numeral_common::value::CellValue;
use std::sync::Arc;

/// Maximum fraction digits of decimal style when only a minimum is given
const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;
const MAX_FRACTION_DIGITS_LIMIT: f64 = 20.0;

/// The two renderings of a headline value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedScalar {
    /// Abbreviated form for constrained layouts
    pub compact: String,
    /// Unabbreviated form for tooltips and accessibility
    pub full: String,
}

impl FormattedScalar {
    /// A tooltip is only useful when the full form shows more than the compact one
    pub fn needs_tooltip(&self) -> bool {
        self.full != self.compact
    }
}

/// Formats headline values: scaling, rounding, locale and currency for
/// numbers, then the display formatter, then prefix and suffix.
#[derive(Debug, Clone)]
pub struct ValueFormatter {
    display: Arc<dyn DisplayFormatter>,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self {
            display: Arc::new(DefaultDisplayFormatter::default()),
        }
    }
}

impl ValueFormatter {
    pub fn new(display: Arc<dyn DisplayFormatter>) -> Self {
        Self { display }
    }

    /// Format a value for display.
    ///
    /// The compact string is produced with the `compact` flag, the full string
    /// never is. An absent value (`None` or `Null`) yields empty strings
    /// before prefix and suffix are applied.
    pub fn format(
        &self,
        value: Option<&CellValue>,
        config: &FormatConfig,
        compact: bool,
        column: Option<&Column>,
    ) -> FormattedScalar {
        let resolved = match value.and_then(CellValue::as_f64) {
            Some(number) => match format_number(number, config) {
                Ok(formatted) => Some(CellValue::Text(formatted)),
                Err(err) => {
                    log::warn!("error formatting scalar: {err}");
                    value.cloned()
                }
            },
            None => value.cloned(),
        };

        let mut formatted = match resolved {
            Some(value) if !value.is_absent() => FormattedScalar {
                compact: self.display.format_value(&value, column, compact),
                full: self.display.format_value(&value, column, false),
            },
            _ => FormattedScalar::default(),
        };

        if let Some(prefix) = config.prefix.as_deref().filter(|p| !p.is_empty()) {
            formatted.compact.insert_str(0, prefix);
            formatted.full.insert_str(0, prefix);
        }
        if let Some(suffix) = config.suffix.as_deref().filter(|s| !s.is_empty()) {
            formatted.compact.push_str(suffix);
            formatted.full.push_str(suffix);
        }
        formatted
    }
}

/// Scale, round and stringify a number according to `config`.
///
/// Without a locale, the fallback locale is used and group separators are
/// left out entirely.
pub fn format_number(value: f64, config: &FormatConfig) -> Result<String, FormatError> {
    let mut value = value;

    if let Some(scale) = config.scale.filter(|s| s.is_finite()) {
        value *= scale;
    }

    let decimals = config.decimals.filter(|d| d.is_finite());
    if let Some(decimals) = decimals {
        let factor = 10f64.powf(decimals);
        value = (value * factor).round() / factor;
    }

    let min_fraction = match decimals {
        Some(decimals) => {
            let digits = decimals.floor();
            if !(0.0..=MAX_FRACTION_DIGITS_LIMIT).contains(&digits) {
                return Err(FormatError::FractionDigitsOutOfRange(decimals));
            }
            Some(digits as usize)
        }
        None => None,
    };

    let currency = config
        .currency
        .as_deref()
        .map(Currency::from_code)
        .transpose()?;

    let (locale, grouped) = match config.locale.as_deref() {
        Some(tag) if !tag.is_empty() => (resolve_locale(tag)?, true),
        _ => (fallback_locale(), false),
    };
    let number_format = if grouped {
        locale.number_format()
    } else {
        locale.number_format().ungrouped()
    };

    let formatted = match currency {
        Some(currency) => {
            let min = min_fraction.unwrap_or(currency.digits);
            let digits = FractionDigits::new(min, currency.digits);
            let amount = number_format.format_fixed(value.abs(), digits);
            currency.place(value.is_sign_negative() && !value.is_nan(), &amount, locale)
        }
        None => {
            let min = min_fraction.unwrap_or(0);
            let digits = FractionDigits::new(min, DEFAULT_MAX_FRACTION_DIGITS);
            number_format.format_fixed(value, digits)
        }
    };
    Ok(formatted)
}
