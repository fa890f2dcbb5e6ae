//! Command-line configuration
//!
//! Provides CLI argument parsing and validation for the `packettime` binary.

use crate::calc::{DurationCalculator, MacInterface, PacketSize, TimeUnit};
use crate::cli::constants::LOG_LEVELS;
use crate::cli::error::{CliError, Result};
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(name = "packettime")]
#[command(version)]
#[command(about = "Calculate the time duration of a packet on a MAC interface")]
pub struct Config {
    /// Packet length in bytes
    #[arg(default_value = "0", allow_negative_numbers = true)]
    pub bytes: PacketSize,

    /// MAC interface (GMII or XGMII)
    #[arg(long, short = 'i', default_value = "GMII")]
    pub interface: MacInterface,

    /// Time unit of the result (s, ms, us, ns, ps)
    #[arg(long, short = 'u', default_value = "us")]
    pub unit: TimeUnit,

    /// Print the duration for every interface and unit
    #[arg(long)]
    pub table: bool,

    /// Read inputs line by line and recompute after each change
    #[arg(long)]
    pub interactive: bool,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Log format (text or json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bytes: PacketSize::default(),
            interface: MacInterface::default(),
            unit: TimeUnit::default(),
            table: false,
            interactive: false,
            plain: false,
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Calculator bound to the selected interface and unit
    pub fn calculator(&self) -> DurationCalculator {
        DurationCalculator::new(self.interface, self.unit)
    }

    /// Validates the configuration values
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(CliError::Config(format!(
                "log_level must be one of: {}",
                LOG_LEVELS.join(", ")
            )));
        }

        if self.table && self.interactive {
            return Err(CliError::Config(
                "--table and --interactive cannot be combined".into(),
            ));
        }

        debug!("Configuration validated successfully");
        Ok(())
    }

    /// Returns true if JSON format logging is enabled
    pub fn is_json_format(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
