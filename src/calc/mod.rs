//! Transmission-duration calculator
//!
//! Converts a packet length in bytes into the time it occupies the wire on a
//! fixed-rate MAC interface, expressed in a caller-chosen time unit.

pub mod duration;
pub mod error;
pub mod interface;
pub mod size;
pub mod unit;

pub use duration::{packet_duration, DurationCalculator};
pub use error::{CalcError, Result};
pub use interface::MacInterface;
pub use size::PacketSize;
pub use unit::TimeUnit;
