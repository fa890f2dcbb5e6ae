use crate::calc::{CalcError, MacInterface, PacketSize, TimeUnit};
use crate::cli::constants::*;
use crate::cli::error::Result;
use crate::cli::format::format_duration;
use crate::cli::session::{DurationView, Reading};
use colored::*;
use std::io::Write;
use tracing::debug;

/// Reporter for printing readings to a terminal
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a single reading
    pub fn print_reading(&mut self, reading: &Reading) -> Result<()> {
        debug!(
            bytes = reading.size.bytes(),
            interface = %reading.interface,
            unit = %reading.unit,
            duration = reading.duration,
            "Printing reading"
        );
        writeln!(
            self.out,
            "{} bytes @ {} = {} {}",
            reading.size.to_string().bold(),
            reading.interface.label().cyan(),
            format_duration(reading.duration).green().bold(),
            reading.unit.label().green()
        )?;
        Ok(())
    }

    /// Print the duration of `size` for every interface and unit
    pub fn print_table(&mut self, size: PacketSize) -> Result<()> {
        debug!(bytes = size.bytes(), "Printing duration table");

        writeln!(self.out, "{}", format!("Packet length: {} bytes", size).bold())?;

        let mut header = format!("{:<width$}", "", width = TABLE_INTERFACE_WIDTH);
        for unit in TimeUnit::ALL {
            header.push_str(&format!("{:>width$}", unit.label(), width = TABLE_VALUE_WIDTH));
        }
        writeln!(self.out, "{}", header.cyan())?;

        for interface in MacInterface::ALL {
            let mut row = format!("{:<width$}", interface.label(), width = TABLE_INTERFACE_WIDTH);
            for unit in TimeUnit::ALL {
                let reading = Reading::compute(size, interface, unit);
                row.push_str(&format!(
                    "{:>width$}",
                    format_duration(reading.duration),
                    width = TABLE_VALUE_WIDTH
                ));
            }
            writeln!(self.out, "{}", row)?;
        }
        Ok(())
    }
}

impl<W: Write> DurationView for Reporter<W> {
    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "{}", PROMPT.dimmed())?;
        self.out.flush()?;
        Ok(())
    }

    fn show_reading(&mut self, reading: &Reading) -> Result<()> {
        self.print_reading(reading)
    }

    fn show_invalid(&mut self, error: &CalcError) -> Result<()> {
        writeln!(self.out, "{} {}", "✗".red().bold(), error.to_string().red())?;
        Ok(())
    }

    fn show_help(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "Enter one value per line:".bold())?;
        for (input, meaning) in [
            ("<bytes>", "packet length, e.g. 1500"),
            ("GMII | XGMII", "MAC interface"),
            ("s | ms | us | ns | ps", "time unit"),
            ("show", "print the current reading"),
            ("quit", "leave the session"),
        ] {
            writeln!(self.out, "  {:<23}{}", input, meaning)?;
        }
        Ok(())
    }
}
