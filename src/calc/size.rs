use crate::calc::error::{CalcError, Result};
use std::fmt;
use std::str::FromStr;

/// Packet length in bytes
///
/// Negative lengths are unrepresentable; text input goes through [`FromStr`],
/// which is where malformed or negative entries are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PacketSize(pub u64);

impl PacketSize {
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Length in bits, widened so `u64::MAX` bytes cannot overflow
    pub const fn bits(self) -> u128 {
        self.0 as u128 * 8
    }
}

impl From<u64> for PacketSize {
    fn from(bytes: u64) -> Self {
        PacketSize(bytes)
    }
}

impl fmt::Display for PacketSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_separator(c: char) -> bool {
    c == ',' || c == '_'
}

impl FromStr for PacketSize {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalcError::invalid("packet size", s, "value is empty"));
        }
        if trimmed.starts_with('-') {
            return Err(CalcError::invalid("packet size", s, "must not be negative"));
        }

        if !trimmed.chars().all(|c| c.is_ascii_digit() || is_separator(c)) {
            return Err(CalcError::invalid("packet size", s, "not a whole number of bytes"));
        }

        // Grouping separators as printed by the formatter: 1-3 leading digits, then groups of 3
        let groups: Vec<&str> = trimmed.split(is_separator).collect();
        if let Some((first, rest)) = groups.split_first() {
            let first_ok = !first.is_empty() && first.len() <= 3;
            if !rest.is_empty() && (!first_ok || rest.iter().any(|g| g.len() != 3)) {
                return Err(CalcError::invalid("packet size", s, "misplaced grouping separator"));
            }
        }
        let digits = groups.concat();

        digits
            .parse::<u64>()
            .map(PacketSize)
            .map_err(|_| CalcError::invalid("packet size", s, "exceeds the largest supported size"))
    }
}
