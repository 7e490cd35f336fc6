use crate::error::FormatError;
use crate::number::NumberFormat;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Where a currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPlacement {
    /// `$1.00`, or `CHF 1.00` for alphabetic symbols
    Before,
    /// `€ 1,00`
    BeforeSpaced,
    /// `1,00 €`
    AfterSpaced,
}

/// Decimal and grouping symbols and currency layout of a locale
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLocale {
    pub tag: &'static str,
    pub decimal: char,
    pub group: char,
    pub currency_placement: CurrencyPlacement,
    /// Minimum digits in front of the first group separator
    pub min_grouping_digits: usize,
}

impl NumberLocale {
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::with_symbols(self.decimal, Some(self.group))
            .with_min_grouping(self.min_grouping_digits)
    }
}

/// Locale used when none is configured
pub const FALLBACK_LOCALE: &str = "en";

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

macro_rules! locale {
    ($tag:expr, $decimal:expr, $group:expr, $placement:ident) => {
        locale!($tag, $decimal, $group, $placement, 1)
    };
    ($tag:expr, $decimal:expr, $group:expr, $placement:ident, $min_grouping:expr) => {
        NumberLocale {
            tag: $tag,
            decimal: $decimal,
            group: $group,
            currency_placement: CurrencyPlacement::$placement,
            min_grouping_digits: $min_grouping,
        }
    };
}

lazy_static! {
    // language[-script][-region][-variant...][-u-extension...]
    static ref LOCALE_TAG: Regex = Regex::new(
        r"^(?:[A-Za-z]{2,3}|[A-Za-z]{5,8})(?:-[A-Za-z]{4})?(?:-(?:[A-Za-z]{2}|\d{3}))?(?:-(?:[A-Za-z0-9]{5,8}|\d[A-Za-z0-9]{3}))*(?:-[A-Za-z0-9](?:-[A-Za-z0-9]{2,8})+)*$"
    )
    .unwrap();

    static ref LOCALES: HashMap<&'static str, NumberLocale> = [
        locale!("en", '.', ',', Before),
        locale!("ja", '.', ',', Before),
        locale!("zh", '.', ',', Before),
        locale!("ko", '.', ',', Before),
        locale!("he", '.', ',', AfterSpaced),
        locale!("de", ',', '.', AfterSpaced),
        locale!("de-at", ',', NBSP, BeforeSpaced),
        locale!("de-ch", '.', '’', BeforeSpaced),
        locale!("fr", ',', NARROW_NBSP, AfterSpaced),
        locale!("fr-ch", ',', NARROW_NBSP, AfterSpaced),
        locale!("es", ',', '.', AfterSpaced, 2),
        locale!("es-mx", '.', ',', Before),
        locale!("it", ',', '.', AfterSpaced),
        locale!("pt", ',', NBSP, AfterSpaced, 2),
        locale!("pt-br", ',', '.', BeforeSpaced),
        locale!("nl", ',', '.', BeforeSpaced),
        locale!("da", ',', '.', AfterSpaced),
        locale!("sv", ',', NBSP, AfterSpaced),
        locale!("nb", ',', NBSP, AfterSpaced),
        locale!("fi", ',', NBSP, AfterSpaced),
        locale!("pl", ',', NBSP, AfterSpaced, 2),
        locale!("cs", ',', NBSP, AfterSpaced),
        locale!("ru", ',', NBSP, AfterSpaced),
        locale!("uk", ',', NBSP, AfterSpaced),
        locale!("tr", ',', '.', Before),
    ]
    .into_iter()
    .map(|locale| (locale.tag, locale))
    .collect();
}

/// Resolve a BCP 47 style tag such as `de-DE` to its number symbols.
///
/// Malformed tags (`en_US`, `e`) are an error. Well-formed tags that aren't
/// known fall back to their language subtag, then to [`FALLBACK_LOCALE`].
pub fn resolve_locale(tag: &str) -> Result<&'static NumberLocale, FormatError> {
    if !LOCALE_TAG.is_match(tag) {
        return Err(FormatError::InvalidLocale(tag.to_string()));
    }
    let normalized = tag.to_ascii_lowercase();
    let mut subtags = normalized.split('-');
    let language = subtags.next().unwrap_or(FALLBACK_LOCALE);
    // skip a script subtag, e.g. zh-Hant-TW
    let region = subtags
        .find(|s| s.len() == 2 || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit())));

    let by_region = region.and_then(|region| LOCALES.get(format!("{language}-{region}").as_str()));
    Ok(by_region
        .or_else(|| LOCALES.get(language))
        .unwrap_or_else(|| fallback_locale()))
}

pub fn fallback_locale() -> &'static NumberLocale {
    &LOCALES[FALLBACK_LOCALE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_region_then_language() -> Result<(), FormatError> {
        assert_eq!(resolve_locale("de-CH")?.tag, "de-ch");
        assert_eq!(resolve_locale("de-DE")?.tag, "de");
        assert_eq!(resolve_locale("pt-BR")?.tag, "pt-br");
        assert_eq!(resolve_locale("zh-Hant-TW")?.tag, "zh");
        assert_eq!(resolve_locale("en-US-u-nu-latn")?.tag, "en");
        Ok(())
    }

    #[test]
    fn test_unknown_language_falls_back() -> Result<(), FormatError> {
        assert_eq!(resolve_locale("xx")?.tag, FALLBACK_LOCALE);
        assert_eq!(resolve_locale("haw-US")?.tag, FALLBACK_LOCALE);
        assert_eq!(resolve_locale("english-with-extra")?.tag, FALLBACK_LOCALE);
        Ok(())
    }

    #[test]
    fn test_malformed_tags() {
        for tag in ["en_US", "e", "", "engl", "verylongtag", "de-", "12"] {
            assert_eq!(
                resolve_locale(tag),
                Err(FormatError::InvalidLocale(tag.to_string())),
                "{tag}"
            );
        }
    }
}
