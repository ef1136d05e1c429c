//! Tenor representation (e.g., 1W, 3M, 1Y).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// The nominal length of an instrument, such as `3M` or `1Y`.
///
/// A tenor keeps the unit it was quoted in: `12M` and `1Y` add the same
/// number of months to a date but render differently, so a curve node
/// labelled from its tenor keeps the market's spelling.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tenor {
    /// Days
    Days(u32),
    /// Weeks
    Weeks(u32),
    /// Months
    Months(u32),
    /// Years
    Years(u32),
}

impl Tenor {
    /// One-week tenor.
    pub const TENOR_1W: Tenor = Tenor::Weeks(1);
    /// One-month tenor.
    pub const TENOR_1M: Tenor = Tenor::Months(1);
    /// Three-month tenor.
    pub const TENOR_3M: Tenor = Tenor::Months(3);
    /// Six-month tenor.
    pub const TENOR_6M: Tenor = Tenor::Months(6);
    /// One-year tenor.
    pub const TENOR_1Y: Tenor = Tenor::Years(1);

    /// Parses a tenor from text (e.g., "3M", "1y", "10Y", "90D").
    pub fn parse(s: &str) -> CoreResult<Self> {
        let text = s.trim();
        let Some((split, unit)) = text.char_indices().next_back() else {
            return Err(CoreError::invalid_tenor(s, "expected <number><D|W|M|Y>"));
        };

        // Unsigned digits only; `u32::from_str` would accept a leading '+'.
        let num_str = &text[..split];
        if num_str.is_empty() || !num_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::invalid_tenor(
                s,
                format!("invalid tenor number: {num_str}"),
            ));
        }
        let num: u32 = num_str
            .parse()
            .map_err(|_| CoreError::invalid_tenor(s, format!("invalid tenor number: {num_str}")))?;

        match unit.to_ascii_uppercase() {
            'D' => Ok(Tenor::Days(num)),
            'W' => Ok(Tenor::Weeks(num)),
            'M' => Ok(Tenor::Months(num)),
            'Y' => Ok(Tenor::Years(num)),
            _ => Err(CoreError::invalid_tenor(s, format!("invalid tenor unit: {unit}"))),
        }
    }

    /// Whole months in the tenor; zero for day and week tenors.
    #[must_use]
    pub fn total_months(&self) -> u64 {
        match *self {
            Tenor::Months(m) => u64::from(m),
            Tenor::Years(y) => u64::from(y) * 12,
            Tenor::Days(_) | Tenor::Weeks(_) => 0,
        }
    }

    /// Days component of the tenor; zero for month and year tenors.
    #[must_use]
    pub fn days(&self) -> u64 {
        match *self {
            Tenor::Days(d) => u64::from(d),
            Tenor::Weeks(w) => u64::from(w) * 7,
            Tenor::Months(_) | Tenor::Years(_) => 0,
        }
    }

    /// Rough length in years: months / 12 when the tenor has whole months,
    /// otherwise days / 365.
    #[must_use]
    pub fn approximate_years(&self) -> f64 {
        let months = self.total_months();
        if months > 0 {
            months as f64 / 12.0
        } else {
            self.days() as f64 / 365.0
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tenor::Days(d) => write!(f, "{d}D"),
            Tenor::Weeks(w) => write!(f, "{w}W"),
            Tenor::Months(m) => write!(f, "{m}M"),
            Tenor::Years(y) => write!(f, "{y}Y"),
        }
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tenor::parse(s)
    }
}

impl TryFrom<String> for Tenor {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Tenor::parse(&s)
    }
}

impl From<Tenor> for String {
    fn from(tenor: Tenor) -> Self {
        tenor.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse() {
        assert_eq!(Tenor::parse("3M").unwrap(), Tenor::Months(3));
        assert_eq!(Tenor::parse(" 1y ").unwrap(), Tenor::Years(1));
        assert_eq!(Tenor::parse("2W").unwrap(), Tenor::Weeks(2));
        assert_eq!(Tenor::parse("90D").unwrap(), Tenor::Days(90));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Tenor::parse("").is_err());
        assert!(Tenor::parse("M").is_err());
        assert!(Tenor::parse("3Q").is_err());
        assert!(Tenor::parse("-1M").is_err());
        assert!(Tenor::parse("99999999999D").is_err());
    }

    #[test]
    fn test_parse_rejects_multibyte_unit() {
        assert!(Tenor::parse("3é").is_err());
        assert!(Tenor::parse("é").is_err());
        assert!(Tenor::parse("3\u{00e9}M").is_err());
        assert!(serde_json::from_str::<Tenor>("\"12€\"").is_err());
    }

    #[test]
    fn test_parse_rejects_sign() {
        assert!(Tenor::parse("+3M").is_err());
        assert!(Tenor::parse("+M").is_err());
    }

    #[test]
    fn test_display_keeps_unit() {
        assert_eq!(Tenor::Months(12).to_string(), "12M");
        assert_eq!(Tenor::Years(1).to_string(), "1Y");
        assert_eq!(Tenor::TENOR_1W.to_string(), "1W");
    }

    #[test]
    fn test_months_and_days() {
        assert_eq!(Tenor::Years(2).total_months(), 24);
        assert_eq!(Tenor::Months(3).days(), 0);
        assert_eq!(Tenor::Weeks(1).total_months(), 0);
        assert_eq!(Tenor::Weeks(1).days(), 7);
    }

    #[test]
    fn test_approximate_years() {
        assert_relative_eq!(Tenor::Months(6).approximate_years(), 0.5);
        assert_relative_eq!(Tenor::Years(1).approximate_years(), 1.0);
        assert_relative_eq!(Tenor::Days(90).approximate_years(), 90.0 / 365.0);
        assert_relative_eq!(Tenor::Days(0).approximate_years(), 0.0);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Tenor::Months(3)).unwrap();
        assert_eq!(json, "\"3M\"");
        let parsed: Tenor = serde_json::from_str("\"1Y\"").unwrap();
        assert_eq!(parsed, Tenor::Years(1));
        assert!(serde_json::from_str::<Tenor>("\"1X\"").is_err());
    }
}
