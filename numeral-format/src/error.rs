#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid currency code: `{0}`")]
    InvalidCurrency(String),

    #[error("Invalid locale tag: `{0}`")]
    InvalidLocale(String),

    #[error("Fraction digits ({0}) must be between 0 and 20")]
    FractionDigitsOutOfRange(f64),
}
