use crate::calc::error::{CalcError, Result};
use std::fmt;
use std::str::FromStr;

/// Fixed-rate MAC interfaces the calculator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MacInterface {
    /// Gigabit media-independent interface, 1 Gbps
    #[default]
    Gmii,
    /// 10 Gigabit media-independent interface, 10 Gbps
    Xgmii,
}

impl MacInterface {
    /// Every variant, in display order
    pub const ALL: [MacInterface; 2] = [MacInterface::Gmii, MacInterface::Xgmii];

    /// Line rate in bits per second
    pub const fn bits_per_second(self) -> u64 {
        match self {
            MacInterface::Gmii => 1_000_000_000,
            MacInterface::Xgmii => 10_000_000_000,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MacInterface::Gmii => "GMII",
            MacInterface::Xgmii => "XGMII",
        }
    }
}

impl fmt::Display for MacInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MacInterface {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        MacInterface::ALL
            .into_iter()
            .find(|iface| iface.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CalcError::invalid("interface", s, "expected GMII or XGMII"))
    }
}
