use crate::calc::error::{CalcError, Result};
use std::fmt;
use std::str::FromStr;

/// Time unit a duration is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    Second,
    Millisecond,
    #[default]
    Microsecond,
    Nanosecond,
    Picosecond,
}

impl TimeUnit {
    /// Every variant, coarsest first
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Second,
        TimeUnit::Millisecond,
        TimeUnit::Microsecond,
        TimeUnit::Nanosecond,
        TimeUnit::Picosecond,
    ];

    /// Multiplier that converts seconds into this unit
    pub const fn scale_factor(self) -> f64 {
        match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Millisecond => 1e3,
            TimeUnit::Microsecond => 1e6,
            TimeUnit::Nanosecond => 1e9,
            TimeUnit::Picosecond => 1e12,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Microsecond => "µs",
            TimeUnit::Nanosecond => "ns",
            TimeUnit::Picosecond => "ps",
        }
    }

    /// ASCII spelling accepted on terminals without a µ key
    const fn ascii_label(self) -> &'static str {
        match self {
            TimeUnit::Microsecond => "us",
            other => other.label(),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        // micro sign or Greek mu both spell "u"
        let normalized = match trimmed.strip_prefix(|c: char| c == 'µ' || c == 'μ') {
            Some(rest) => format!("u{}", rest),
            None => trimmed.to_string(),
        };
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.ascii_label().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| CalcError::invalid("unit", s, "expected one of s, ms, µs (us), ns, ps"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factors() {
        assert_eq!(TimeUnit::Second.scale_factor(), 1.0);
        assert_eq!(TimeUnit::Millisecond.scale_factor(), 1_000.0);
        assert_eq!(TimeUnit::Microsecond.scale_factor(), 1_000_000.0);
        assert_eq!(TimeUnit::Nanosecond.scale_factor(), 1_000_000_000.0);
        assert_eq!(TimeUnit::Picosecond.scale_factor(), 1_000_000_000_000.0);
    }

    #[test]
    fn test_parse_labels() -> Result<()> {
        for unit in TimeUnit::ALL {
            assert_eq!(unit.label().parse::<TimeUnit>()?, unit);
        }
        assert_eq!("us".parse::<TimeUnit>()?, TimeUnit::Microsecond);
        assert_eq!("NS".parse::<TimeUnit>()?, TimeUnit::Nanosecond);
        assert_eq!("µS".parse::<TimeUnit>()?, TimeUnit::Microsecond);
        assert_eq!("μs".parse::<TimeUnit>()?, TimeUnit::Microsecond);
        Ok(())
    }

    #[test]
    fn test_parse_unknown() {
        assert!("minutes".parse::<TimeUnit>().is_err());
        assert!("".parse::<TimeUnit>().is_err());
        assert!("µ".parse::<TimeUnit>().is_err());
        assert!("µms".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn test_default_is_microsecond() {
        assert_eq!(TimeUnit::default(), TimeUnit::Microsecond);
    }
}
