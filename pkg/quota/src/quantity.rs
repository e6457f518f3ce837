use crate::error::QuotaError;
use std::fmt;
use std::str::FromStr;

/// Unit suffix of a quantity string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    None,
    Milli,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
}

/// Suffix lookup table, two-letter binary suffixes first so that `Mi` is never
/// read as `M` followed by garbage.
const SUFFIXES: &[(&str, Suffix)] = &[
    ("Ki", Suffix::Kibi),
    ("Mi", Suffix::Mebi),
    ("Gi", Suffix::Gibi),
    ("Ti", Suffix::Tebi),
    ("Pi", Suffix::Pebi),
    ("Ei", Suffix::Exbi),
    ("m", Suffix::Milli),
    ("k", Suffix::Kilo),
    ("K", Suffix::Kilo),
    ("M", Suffix::Mega),
    ("G", Suffix::Giga),
    ("T", Suffix::Tera),
    ("P", Suffix::Peta),
    ("E", Suffix::Exa),
];

impl Suffix {
    pub fn multiplier(self) -> f64 {
        match self {
            Suffix::None => 1.0,
            Suffix::Milli => 0.001,
            Suffix::Kilo => 1e3,
            Suffix::Mega => 1e6,
            Suffix::Giga => 1e9,
            Suffix::Tera => 1e12,
            Suffix::Peta => 1e15,
            Suffix::Exa => 1e18,
            Suffix::Kibi => (1u64 << 10) as f64,
            Suffix::Mebi => (1u64 << 20) as f64,
            Suffix::Gibi => (1u64 << 30) as f64,
            Suffix::Tebi => (1u64 << 40) as f64,
            Suffix::Pebi => (1u64 << 50) as f64,
            Suffix::Exbi => (1u64 << 60) as f64,
        }
    }

    /// Split `input` into `(mantissa, suffix)` using the first table entry
    /// whose suffix ends the string. Bare numbers get [`Suffix::None`].
    fn split(input: &str) -> (&str, Suffix) {
        for (text, suffix) in SUFFIXES {
            if let Some(mantissa) = input.strip_suffix(text) {
                return (mantissa, *suffix);
            }
        }
        (input, Suffix::None)
    }
}

/// A parsed resource quantity, keeping the original notation for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    raw: String,
    suffix: Suffix,
    value: f64,
}

impl Quantity {
    /// Flat value in the resource's base unit (cores, bytes, or count).
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn suffix(&self) -> Suffix {
        self.suffix
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Quantity {
    type Err = QuotaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mantissa, suffix) = Suffix::split(s);
        if !is_mantissa(mantissa) {
            return Err(QuotaError::UnrecognizedQuantityFormat(s.to_string()));
        }
        let number: f64 = mantissa
            .parse()
            .map_err(|_| QuotaError::UnrecognizedQuantityFormat(s.to_string()))?;
        let value = number * suffix.multiplier();
        // Overlong mantissas parse to infinity.
        if !value.is_finite() {
            return Err(QuotaError::UnrecognizedQuantityFormat(s.to_string()));
        }
        Ok(Self {
            raw: s.to_string(),
            suffix,
            value,
        })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Convert a quantity string into its flat base-unit value.
pub fn normalize(quantity: &str) -> Result<f64, QuotaError> {
    quantity.parse::<Quantity>().map(|q| q.value())
}

/// `DIGITS ( "." DIGITS )?` over ASCII digits.
fn is_mantissa(s: &str) -> bool {
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match s.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_numbers() {
        assert_eq!(normalize("0").unwrap(), 0.0);
        assert_eq!(normalize("5").unwrap(), 5.0);
        assert_eq!(normalize("2.5").unwrap(), 2.5);
        assert_eq!(normalize("007").unwrap(), 7.0);
    }

    #[test]
    fn every_suffix_uses_its_multiplier() {
        let cases: &[(&str, f64)] = &[
            ("m", 0.001),
            ("k", 1e3),
            ("K", 1e3),
            ("M", 1e6),
            ("G", 1e9),
            ("T", 1e12),
            ("P", 1e15),
            ("E", 1e18),
            ("Ki", 1024.0),
            ("Mi", 1024.0 * 1024.0),
            ("Gi", 1024.0 * 1024.0 * 1024.0),
            ("Ti", 2f64.powi(40)),
            ("Pi", 2f64.powi(50)),
            ("Ei", 2f64.powi(60)),
        ];
        for (suffix, multiplier) in cases {
            for mantissa in ["1", "3", "1.5", "250"] {
                let input = format!("{}{}", mantissa, suffix);
                let expected = mantissa.parse::<f64>().unwrap() * multiplier;
                assert_eq!(normalize(&input).unwrap(), expected, "input {}", input);
            }
        }
    }

    #[test]
    fn equivalent_notations() {
        assert_eq!(normalize("1024Ki").unwrap(), normalize("1Mi").unwrap());
        assert_eq!(normalize("1000m").unwrap(), normalize("1").unwrap());
        assert_eq!(normalize("1k").unwrap(), normalize("1K").unwrap());
    }

    #[test]
    fn suffixes_are_case_sensitive() {
        assert_eq!(normalize("1M").unwrap(), 1e6);
        assert_eq!(normalize("1Mi").unwrap(), 1048576.0);
        assert_eq!(normalize("1m").unwrap(), 0.001);
        assert!(normalize("1mi").is_err());
        assert!(normalize("1KI").is_err());
        assert!(normalize("1g").is_err());
    }

    #[test]
    fn rejects_unsupported_notation() {
        for input in [
            "", "1.5Xi", "-5", "+5", "5 ", " 5", "5e3", "5E3", "1.", ".5", "1..5", "Mi", "m",
            "1.2.3", "5Mii", "5iM", "1n", "１",
        ] {
            assert_eq!(
                normalize(input),
                Err(QuotaError::UnrecognizedQuantityFormat(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn rejects_values_beyond_f64_range() {
        let huge = "9".repeat(400);
        assert_eq!(
            normalize(&huge),
            Err(QuotaError::UnrecognizedQuantityFormat(huge.clone()))
        );
        let scaled = format!("{}Ei", "9".repeat(300));
        assert_eq!(
            normalize(&scaled),
            Err(QuotaError::UnrecognizedQuantityFormat(scaled.clone()))
        );
        assert!(normalize(&"9".repeat(300)).is_ok());
    }

    #[test]
    fn quantity_keeps_raw_notation() {
        let q: Quantity = "8Gi".parse().unwrap();
        assert_eq!(q.as_str(), "8Gi");
        assert_eq!(q.to_string(), "8Gi");
        assert_eq!(q.suffix(), Suffix::Gibi);
        assert_eq!(q.value(), 8.0 * 1073741824.0);
    }
}
