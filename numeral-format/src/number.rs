//! Fixed-point and SI formatting of numbers with configurable decimal and
//! group symbols.
//!
//! Rounding works on the shortest decimal representation that round-trips to
//! the same `f64` (what `{:e}` prints), so `0.15` rounded to one fraction
//! digit gives `0.2` rather than following the binary expansion
//! `0.1499999...`. Ties round away from zero.

const PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Lower and upper bound on the number of digits after the decimal symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionDigits {
    pub min: usize,
    pub max: usize,
}

impl FractionDigits {
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    pub fn exact(digits: usize) -> Self {
        Self::new(digits, digits)
    }
}

/// Number formatter parameterized by the characters used as the decimal
/// symbol and as the delimiter between groups of integer digits.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    decimal: char,
    group_delimiter: Option<char>,
    /// Integers need more than three digits plus this many before they are grouped
    min_grouping: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberFormat {
    /// `.` as decimal symbol and `,` between groups
    pub fn new() -> Self {
        Self {
            decimal: '.',
            group_delimiter: Some(','),
            min_grouping: 1,
        }
    }

    pub fn with_symbols(decimal: char, group_delimiter: Option<char>) -> Self {
        Self {
            decimal,
            group_delimiter,
            min_grouping: 1,
        }
    }

    /// Leave integers with fewer than `3 + min_grouping` digits ungrouped,
    /// e.g. `1234` but `12.345` with 2.
    pub fn with_min_grouping(mut self, min_grouping: usize) -> Self {
        self.min_grouping = min_grouping.max(1);
        self
    }

    /// Same symbols, but integer digits are not grouped
    pub fn ungrouped(&self) -> Self {
        Self {
            group_delimiter: None,
            ..self.clone()
        }
    }

    /// Format `value` in fixed-point notation, rounding at `digits.max`
    /// fraction digits and then trimming trailing zeros down to `digits.min`.
    pub fn format_fixed(&self, value: f64, digits: FractionDigits) -> String {
        if let Some(special) = format_non_finite(value) {
            return special;
        }
        let (integer, mut fraction) = round_to_fraction_digits(value.abs(), digits.max);
        trim_trailing_zeros(&mut fraction, digits.min);
        self.assemble(value.is_sign_negative(), &integer, &fraction, "")
    }

    /// Format `value` with `significant` significant digits and an SI prefix,
    /// e.g. `1234` → `1.2k`. Trailing fraction zeros are trimmed.
    pub fn format_si(&self, value: f64, significant: usize) -> String {
        if let Some(special) = format_non_finite(value) {
            return special;
        }
        if value == 0.0 {
            return "0".to_string();
        }
        let (mut coefficient, prefix_exponent) = si_coefficient(value.abs(), significant);
        let prefix = PREFIXES[(8 + prefix_exponent) as usize];

        let (integer, mut fraction) = match coefficient.find('.') {
            Some(idx) => {
                let fraction = coefficient.split_off(idx + 1);
                coefficient.pop();
                (coefficient, fraction)
            }
            None => (coefficient, String::new()),
        };
        trim_trailing_zeros(&mut fraction, 0);
        self.assemble(value.is_sign_negative(), &integer, &fraction, prefix)
    }

    fn assemble(&self, negative: bool, integer: &str, fraction: &str, suffix: &str) -> String {
        let sign = if negative { "-" } else { "" };
        let integer = match self.group_delimiter {
            Some(delimiter) if integer.len() >= 3 + self.min_grouping => {
                group_value(integer, delimiter)
            }
            _ => integer.to_string(),
        };
        if fraction.is_empty() {
            format!("{sign}{integer}{suffix}")
        } else {
            format!("{sign}{integer}{}{fraction}{suffix}", self.decimal)
        }
    }
}

fn format_non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value < 0.0 { "-∞" } else { "∞" }.to_string())
    } else {
        None
    }
}

/// Computes the decimal coefficient and exponent of a positive finite number.
/// With `significant_digits`, the coefficient is rounded to that many digits;
/// otherwise it is the shortest representation that round-trips.
/// For example, `decompose_to_coefficient_and_exponent(1.23, Some(2))` returns `("12", 0)`.
pub(crate) fn decompose_to_coefficient_and_exponent(
    value: f64,
    significant_digits: Option<usize>,
) -> (String, isize) {
    let formatted_value = match significant_digits {
        Some(digits) => {
            let precision = digits.saturating_sub(1);
            format!("{value:.precision$e}")
        }
        None => format!("{value:e}"),
    };

    let (mantissa, exponent) = formatted_value
        .split_once('e')
        .unwrap_or((formatted_value.as_str(), "0"));
    let exponent = exponent.parse().unwrap_or(0);
    (mantissa.replace('.', ""), exponent)
}

/// Round a non-negative finite number to `max_fraction` fraction digits,
/// returning the integer and fraction digits separately.
pub(crate) fn round_to_fraction_digits(value: f64, max_fraction: usize) -> (String, String) {
    if value == 0.0 {
        return ("0".to_string(), "0".repeat(max_fraction));
    }
    let (coefficient, exponent) = decompose_to_coefficient_and_exponent(value, None);
    let coefficient = coefficient.as_bytes();

    // Number of coefficient digits with place value >= 10^-max_fraction
    let keep = exponent + 1 + max_fraction as isize;
    let mut digits: Vec<u8> = if keep > 0 {
        let keep = keep as usize;
        let mut kept: Vec<u8> = coefficient.iter().copied().take(keep).collect();
        kept.resize(keep, b'0');
        kept
    } else {
        Vec::new()
    };

    let next_digit = if keep >= 0 {
        coefficient.get(keep as usize).copied()
    } else {
        None
    };
    if next_digit.is_some_and(|d| d >= b'5') {
        increment_digits(&mut digits);
    }

    // `digits` now holds value * 10^max_fraction as an integer
    if digits.len() <= max_fraction {
        let mut padded = vec![b'0'; max_fraction + 1 - digits.len()];
        padded.extend(digits);
        digits = padded;
    }
    let split = digits.len() - max_fraction;
    let integer = String::from_utf8_lossy(&digits[..split]).into_owned();
    let fraction = String::from_utf8_lossy(&digits[split..]).into_owned();
    (integer, fraction)
}

fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn trim_trailing_zeros(fraction: &mut String, min: usize) {
    while fraction.len() > min && fraction.ends_with('0') {
        fraction.pop();
    }
}

/// Compute the [SI prefix](https://en.wikipedia.org/wiki/Metric_prefix) exponent of a
/// positive number and scale its coefficient accordingly. The returned coefficient uses `.`
/// as decimal symbol.
fn si_coefficient(value: f64, significant: usize) -> (String, isize) {
    let (coefficient, exponent) =
        decompose_to_coefficient_and_exponent(value, Some(significant.max(1)));
    let prefix_exponent = exponent.div_euclid(3).clamp(-8, 8);
    let i: isize = exponent - prefix_exponent * 3 + 1;
    let n: isize = coefficient.len() as isize;

    if i == n {
        (coefficient, prefix_exponent)
    } else if i > n {
        (
            format!("{}{}", coefficient, "0".repeat((i - n) as usize)),
            prefix_exponent,
        )
    } else if i > 0 {
        (
            format!(
                "{}.{}",
                &coefficient[..i as usize],
                &coefficient[i as usize..]
            ),
            prefix_exponent,
        )
    } else {
        // less than 1 yocto
        (
            format!("0.{}{}", "0".repeat(i.unsigned_abs()), coefficient),
            prefix_exponent,
        )
    }
}

/// Group integer digits in threes using `delimiter`, e.g. `1234567` → `1,234,567`.
fn group_value(value: &str, delimiter: char) -> String {
    let input_chars: Vec<char> = value.chars().rev().collect();
    let mut grouped: Vec<char> = Vec::with_capacity(input_chars.len() + input_chars.len() / 3);

    for (i, group) in input_chars.chunks(3).enumerate() {
        if i > 0 {
            grouped.push(delimiter);
        }
        grouped.extend(group);
    }
    grouped.into_iter().rev().collect()
}
