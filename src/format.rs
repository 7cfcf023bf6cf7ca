//! Number rendering for the asset table.
//!
//! Two policies are supported: full locale-grouped digits, and a compact
//! form that collapses large magnitudes into an `M`/`B`/`T` suffixed mantissa.

use std::env;

/// Text rendered for values that cannot be displayed (NaN, infinities).
pub const NOT_AVAILABLE: &str = "N/A";

/// Largest-first magnitude bands used by the compact policy.
const COMPACT_BANDS: [(f64, &str); 3] = [(1e12, "T"), (1e9, "B"), (1e6, "M")];

/// Digits kept after the decimal separator in the grouped policy.
const GROUPED_FRACTION_DIGITS: usize = 3;

/// Digit grouping and decimal conventions of the viewer's locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub group_separator: char,
    pub decimal_separator: char,
}

impl NumberLocale {
    pub const EN_US: NumberLocale = NumberLocale {
        group_separator: ',',
        decimal_separator: '.',
    };

    const CONTINENTAL: NumberLocale = NumberLocale {
        group_separator: '.',
        decimal_separator: ',',
    };

    const SPACED: NumberLocale = NumberLocale {
        group_separator: '\u{a0}',
        decimal_separator: ',',
    };

    const SWISS: NumberLocale = NumberLocale {
        group_separator: '\'',
        decimal_separator: '.',
    };

    /// Detects the locale from `LC_ALL`, `LC_NUMERIC` and `LANG`, in that order.
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(|value| Self::from_locale_name(&value))
            .unwrap_or(Self::EN_US)
    }

    /// Maps a POSIX locale name such as `de_DE.UTF-8` to its number conventions.
    pub fn from_locale_name(name: &str) -> Self {
        let base = name.split(['.', '@']).next().unwrap_or(name);
        let mut parts = base.split(['_', '-']);
        let language = parts.next().unwrap_or_default().to_lowercase();
        let region = parts.next().unwrap_or_default().to_uppercase();

        match (language.as_str(), region.as_str()) {
            ("de" | "it", "CH") => Self::SWISS,
            ("es", "MX" | "US") => Self::EN_US,
            ("de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" | "el", _) => Self::CONTINENTAL,
            (
                "fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "nn" | "uk" | "hu" | "bg",
                _,
            ) => Self::SPACED,
            _ => Self::EN_US,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::EN_US
    }
}

/// Renders numeric magnitudes as display strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberFormatter {
    locale: NumberLocale,
}

impl NumberFormatter {
    pub fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }

    /// Formats `value` with the compact policy when `compact` is set, the
    /// grouped policy otherwise. Values below one million are always grouped.
    pub fn format(&self, value: f64, compact: bool) -> String {
        if !value.is_finite() {
            return NOT_AVAILABLE.to_string();
        }
        if compact {
            for (threshold, suffix) in COMPACT_BANDS {
                if value >= threshold {
                    return format!("{:.2}{}", value / threshold, suffix);
                }
            }
        }
        self.format_grouped(value)
    }

    fn format_grouped(&self, value: f64) -> String {
        let rendered = format!("{:.*}", GROUPED_FRACTION_DIGITS, value);
        let (negative, digits) = match rendered.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, rendered.as_str()),
        };
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        let fraction = fraction.trim_end_matches('0');

        let mut out = String::with_capacity(rendered.len() + integer.len() / 3);
        // Rounding can leave "-0"; render it as plain zero.
        if negative && !(integer.trim_start_matches('0').is_empty() && fraction.is_empty()) {
            out.push('-');
        }
        out.push_str(&group_digits(integer, self.locale.group_separator));
        if !fraction.is_empty() {
            out.push(self.locale.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

/// Renders a USD price as `$` followed by two fixed decimals.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("${:.2}", value)
}

fn group_digits(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> NumberFormatter {
        NumberFormatter::new(NumberLocale::EN_US)
    }

    #[test]
    fn test_compact_suffix_bands() {
        let f = en();
        assert_eq!(f.format(1_234_567_890_123.0, true), "1.23T");
        assert_eq!(f.format(1e12, true), "1.00T");
        assert_eq!(f.format(987_654_321_000.0, true), "987.65B");
        assert_eq!(f.format(1e9, true), "1.00B");
        assert_eq!(f.format(2_500_000.0, true), "2.50M");
        assert_eq!(f.format(1e6, true), "1.00M");
    }

    #[test]
    fn test_market_cap_string_compacts_to_trillions() {
        let cap = crate::assets::parse_decimal("1234567890123");
        assert_eq!(en().format(cap, true), "1.23T");
    }

    #[test]
    fn test_compact_matches_grouped_below_one_million() {
        let f = en();
        for value in [0.0, 0.5, 12.3456, 999.0, 1_234.5678, 999_999.0, -5_000_000.0] {
            assert_eq!(f.format(value, true), f.format(value, false), "value {value}");
        }
    }

    #[test]
    fn test_compact_monotonic_within_band() {
        let f = en();
        let values = [1e6, 1.5e6, 2e6, 9.99e8, 1e9, 4.2e10, 9.9e11, 1e12, 3e13];
        let mut previous: Option<(String, f64)> = None;
        for value in values {
            let rendered = f.format(value, true);
            let suffix = rendered.chars().last().unwrap().to_string();
            let mantissa: f64 = rendered[..rendered.len() - 1].parse().unwrap();
            if let Some((prev_suffix, prev_mantissa)) = &previous {
                if *prev_suffix == suffix {
                    assert!(mantissa >= *prev_mantissa, "{rendered} decreased");
                }
            }
            previous = Some((suffix, mantissa));
        }
    }

    #[test]
    fn test_grouped_rendering() {
        let f = en();
        assert_eq!(f.format(0.0, false), "0");
        assert_eq!(f.format(999.0, false), "999");
        assert_eq!(f.format(1_000.0, false), "1,000");
        assert_eq!(f.format(1_234_567.0, false), "1,234,567");
        assert_eq!(f.format(1_234.5678, false), "1,234.568");
        assert_eq!(f.format(12_345.5, false), "12,345.5");
        assert_eq!(f.format(-1_234.25, false), "-1,234.25");
        assert_eq!(f.format(-0.0001, false), "0");
    }

    #[test]
    fn test_non_finite_values_fall_back() {
        let f = en();
        for compact in [true, false] {
            assert_eq!(f.format(f64::NAN, compact), NOT_AVAILABLE);
            assert_eq!(f.format(f64::NEG_INFINITY, compact), NOT_AVAILABLE);
            assert_eq!(f.format(f64::INFINITY, compact), NOT_AVAILABLE);
        }
    }

    #[test]
    fn test_locale_separators() {
        let de = NumberFormatter::new(NumberLocale::from_locale_name("de_DE.UTF-8"));
        assert_eq!(de.format(1_234_567.891, false), "1.234.567,891");
        // The compact mantissa is fixed-point regardless of locale
        assert_eq!(de.format(2_500_000.0, true), "2.50M");

        let fr = NumberFormatter::new(NumberLocale::from_locale_name("fr_FR"));
        assert_eq!(fr.format(1_234.5, false), "1\u{a0}234,5");

        let ch = NumberFormatter::new(NumberLocale::from_locale_name("de_CH.UTF-8"));
        assert_eq!(ch.format(1_234_567.0, false), "1'234'567");
    }

    #[test]
    fn test_locale_name_fallbacks() {
        assert_eq!(NumberLocale::from_locale_name("C"), NumberLocale::EN_US);
        assert_eq!(NumberLocale::from_locale_name("POSIX"), NumberLocale::EN_US);
        assert_eq!(NumberLocale::from_locale_name("en_GB.UTF-8"), NumberLocale::EN_US);
        assert_eq!(NumberLocale::from_locale_name("es_MX"), NumberLocale::EN_US);
        assert_eq!(
            NumberLocale::from_locale_name("es_ES@euro"),
            NumberLocale::from_locale_name("it_IT")
        );
    }

    #[test]
    fn test_format_price_rounds_to_cents() {
        let price = crate::assets::parse_decimal("50000.555");
        assert_eq!(format_price(price), "$50000.56");
        assert_eq!(format_price(0.5), "$0.50");
        assert_eq!(format_price(f64::NAN), NOT_AVAILABLE);
    }
}
