//! PacketTime - transmission duration calculator
//!
//! This library computes how long a packet of a given length occupies the wire
//! on a fixed-rate MAC interface (GMII or XGMII), expressed in a chosen time
//! unit, together with the terminal front end used by the `packettime` binary.

pub mod calc;
pub mod cli;
