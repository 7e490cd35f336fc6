use lazy_static::lazy_static;
use numeral_common::settings::Settings;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SCALE_KEY: &str = "scalar.scale";
pub const DECIMALS_KEY: &str = "scalar.decimals";
pub const CURRENCY_KEY: &str = "scalar.currency";
pub const LOCALE_KEY: &str = "scalar.locale";
pub const PREFIX_KEY: &str = "scalar.prefix";
pub const SUFFIX_KEY: &str = "scalar.suffix";

/// Options controlling how a headline number is rendered.
///
/// Every field is optional and independent of the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Multiplied into the value before rounding
    pub scale: Option<f64>,
    /// Fraction digits to round to and to pad up to
    pub decimals: Option<f64>,
    /// ISO 4217 code, switches to currency style
    pub currency: Option<String>,
    /// BCP 47 tag. Without one, numbers are printed without group separators.
    pub locale: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl FormatConfig {
    /// Read the `scalar.*` visualization settings.
    ///
    /// `scalar.scale` and `scalar.decimals` may be numbers or numeric strings
    /// (only the leading numeric part of a string counts); anything that
    /// doesn't yield a finite number is ignored. Any non-null
    /// `scalar.currency` enables currency style. Empty strings for locale,
    /// prefix and suffix are ignored.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            scale: settings.get(SCALE_KEY).and_then(parse_finite),
            decimals: settings.get(DECIMALS_KEY).and_then(parse_finite),
            currency: settings.get_non_null(CURRENCY_KEY).map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            locale: settings.get_str(LOCALE_KEY).map(str::to_string),
            prefix: settings.get_str(PREFIX_KEY).map(str::to_string),
            suffix: settings.get_str(SUFFIX_KEY).map(str::to_string),
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_decimals(mut self, decimals: f64) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn with_currency<S: Into<String>>(mut self, currency: S) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

lazy_static! {
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap();
}

/// Parse the leading numeric part of a setting value, like `"2.5px"` → `2.5`.
/// Numbers are taken as-is; other JSON types yield `None`.
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => LEADING_NUMBER
            .find(s.trim_start())
            .and_then(|m| m.as_str().parse::<f64>().ok()),
        _ => None,
    }
}

fn parse_finite(value: &Value) -> Option<f64> {
    parse_number(value).filter(|v| v.is_finite())
}
