use crate::error::FormatError;
use crate::locale::{CurrencyPlacement, NumberLocale};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// An ISO 4217 currency as displayed in formatted numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub code: String,
    pub symbol: String,
    /// Minor unit digits, e.g. 2 for cents
    pub digits: usize,
}

lazy_static! {
    static ref CURRENCIES: HashMap<&'static str, (&'static str, usize)> = HashMap::from([
        ("USD", ("$", 2)),
        ("EUR", ("€", 2)),
        ("GBP", ("£", 2)),
        ("JPY", ("¥", 0)),
        ("CNY", ("CN¥", 2)),
        ("INR", ("₹", 2)),
        ("KRW", ("₩", 0)),
        ("VND", ("₫", 0)),
        ("ILS", ("₪", 2)),
        ("CAD", ("CA$", 2)),
        ("AUD", ("A$", 2)),
        ("NZD", ("NZ$", 2)),
        ("HKD", ("HK$", 2)),
        ("MXN", ("MX$", 2)),
        ("BRL", ("R$", 2)),
        ("TWD", ("NT$", 2)),
        ("CHF", ("CHF", 2)),
        ("SEK", ("SEK", 2)),
        ("NOK", ("NOK", 2)),
        ("DKK", ("DKK", 2)),
        ("PLN", ("PLN", 2)),
        ("RUB", ("RUB", 2)),
        ("ISK", ("ISK", 0)),
        ("CLP", ("CLP", 0)),
        ("KWD", ("KWD", 3)),
        ("BHD", ("BHD", 3)),
        ("JOD", ("JOD", 3)),
        ("TND", ("TND", 3)),
    ]);

    /// Symbols that differ in a particular locale, by locale tag then code
    static ref LOCAL_SYMBOLS: HashMap<&'static str, &'static [(&'static str, &'static str)]> =
        HashMap::from([
            ("ja", &[("JPY", "￥")] as &[_]),
            ("zh", &[("CNY", "¥"), ("JPY", "JP¥")] as &[_]),
            ("es-mx", &[("MXN", "$")] as &[_]),
        ]);
}

const DEFAULT_DIGITS: usize = 2;

impl Currency {
    /// Look up a currency by its three-letter code (case-insensitive).
    ///
    /// Well-formed codes missing from the table are displayed by their code
    /// with two minor digits.
    pub fn from_code(code: &str) -> Result<Self, FormatError> {
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FormatError::InvalidCurrency(code.to_string()));
        }
        let code = code.to_ascii_uppercase();
        let (symbol, digits) = CURRENCIES
            .get(code.as_str())
            .map(|(symbol, digits)| (symbol.to_string(), *digits))
            .unwrap_or_else(|| (code.clone(), DEFAULT_DIGITS));
        Ok(Self {
            code,
            symbol,
            digits,
        })
    }

    /// Attach the symbol to an already formatted absolute amount. The sign
    /// always leads, e.g. `-$1.00` or `-1,00 €`.
    pub fn place(&self, negative: bool, amount: &str, locale: &NumberLocale) -> String {
        let sign = if negative { "-" } else { "" };
        let symbol = self.symbol_in(locale);
        match locale.currency_placement {
            CurrencyPlacement::Before => {
                let alphabetic = symbol.chars().last().is_some_and(char::is_alphabetic);
                if alphabetic {
                    format!("{sign}{symbol}\u{a0}{amount}")
                } else {
                    format!("{sign}{symbol}{amount}")
                }
            }
            CurrencyPlacement::BeforeSpaced => format!("{sign}{symbol}\u{a0}{amount}"),
            CurrencyPlacement::AfterSpaced => format!("{sign}{amount}\u{a0}{symbol}"),
        }
    }

    /// The symbol as written in `locale`
    pub fn symbol_in(&self, locale: &NumberLocale) -> &str {
        let local = LOCAL_SYMBOLS
            .get(locale.tag)
            .and_then(|symbols| symbols.iter().find(|(code, _)| *code == self.code));
        match local {
            Some((_, symbol)) => *symbol,
            None => self.symbol.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::resolve_locale;

    #[test]
    fn test_known_and_unknown_codes() -> Result<(), FormatError> {
        assert_eq!(Currency::from_code("usd")?.symbol, "$");
        assert_eq!(Currency::from_code("JPY")?.digits, 0);
        assert_eq!(Currency::from_code("KWD")?.digits, 3);

        let unknown = Currency::from_code("XYZ")?;
        assert_eq!(unknown.symbol, "XYZ");
        assert_eq!(unknown.digits, 2);
        Ok(())
    }

    #[test]
    fn test_malformed_codes() {
        for code in ["", "US", "DOLLAR", "U$D", "12A"] {
            assert_eq!(
                Currency::from_code(code),
                Err(FormatError::InvalidCurrency(code.to_string()))
            );
        }
    }

    #[test]
    fn test_place_by_locale() -> Result<(), FormatError> {
        let usd = Currency::from_code("USD")?;
        let chf = Currency::from_code("CHF")?;
        let eur = Currency::from_code("EUR")?;
        assert_eq!(usd.place(true, "1.00", resolve_locale("en")?), "-$1.00");
        assert_eq!(chf.place(false, "1.00", resolve_locale("en")?), "CHF\u{a0}1.00");
        assert_eq!(eur.place(false, "1,00", resolve_locale("de")?), "1,00\u{a0}€");
        assert_eq!(eur.place(false, "1,00", resolve_locale("nl")?), "€\u{a0}1,00");
        Ok(())
    }

    #[test]
    fn test_symbol_depends_on_locale() -> Result<(), FormatError> {
        let jpy = Currency::from_code("JPY")?;
        assert_eq!(jpy.symbol_in(resolve_locale("en")?), "¥");
        assert_eq!(jpy.symbol_in(resolve_locale("ja-JP")?), "￥");
        assert_eq!(jpy.symbol_in(resolve_locale("zh-CN")?), "JP¥");
        assert_eq!(jpy.place(false, "1,234", resolve_locale("ja")?), "￥1,234");

        let mxn = Currency::from_code("MXN")?;
        assert_eq!(mxn.place(false, "5.00", resolve_locale("es-MX")?), "$5.00");
        assert_eq!(mxn.place(false, "5.00", resolve_locale("en")?), "MX$5.00");
        Ok(())
    }
}
