//! Interactive session holding the three current inputs
//!
//! Every accepted change recomputes the reading and hands it to a
//! [`DurationView`]; nothing computed is ever stored.

use crate::calc::{CalcError, DurationCalculator, MacInterface, PacketSize, TimeUnit};
use crate::cli::config::Config;
use crate::cli::error::Result;
use crate::cli::format::format_duration;
use std::fmt;
use std::io::BufRead;
use tracing::{debug, info, warn};

/// Snapshot of the inputs and the duration computed from them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub size: PacketSize,
    pub interface: MacInterface,
    pub unit: TimeUnit,
    pub duration: f64,
}

impl Reading {
    pub fn compute(size: PacketSize, interface: MacInterface, unit: TimeUnit) -> Self {
        Self {
            size,
            interface,
            unit,
            duration: DurationCalculator::new(interface, unit).duration(size),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bytes @ {} = {} {}",
            self.size,
            self.interface,
            format_duration(self.duration),
            self.unit
        )
    }
}

/// Presentation side of a session
pub trait DurationView {
    /// Ask for the next line of input
    fn prompt(&mut self) -> Result<()>;

    /// Display a freshly computed reading
    fn show_reading(&mut self, reading: &Reading) -> Result<()>;

    /// Report input that was rejected; the session state is unchanged
    fn show_invalid(&mut self, error: &CalcError) -> Result<()>;

    fn show_help(&mut self) -> Result<()>;
}

/// What a single line of input did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Updated,
    Show,
    Help,
    Quit,
    Empty,
}

/// Owner of the current packet size, interface and unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    size: PacketSize,
    interface: MacInterface,
    unit: TimeUnit,
}

impl Session {
    pub fn new(size: PacketSize, interface: MacInterface, unit: TimeUnit) -> Self {
        Self {
            size,
            interface,
            unit,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.bytes, config.interface, config.unit)
    }

    /// Current reading, recomputed on every call
    pub fn reading(&self) -> Reading {
        Reading::compute(self.size, self.interface, self.unit)
    }

    pub fn set_packet_size(&mut self, size: PacketSize) {
        debug!(bytes = size.bytes(), "Packet size changed");
        self.size = size;
    }

    pub fn set_interface(&mut self, interface: MacInterface) {
        debug!(interface = %interface, "Interface changed");
        self.interface = interface;
    }

    pub fn set_unit(&mut self, unit: TimeUnit) {
        debug!(unit = %unit, "Time unit changed");
        self.unit = unit;
    }

    /// Applies one line of user input
    ///
    /// A line is a command (`show`, `help`, `quit`), an interface label, a
    /// unit label, or a byte count, tried in that order.
    pub fn apply(&mut self, line: &str) -> std::result::Result<Action, CalcError> {
        let input = line.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => return Ok(Action::Empty),
            "q" | "quit" | "exit" => return Ok(Action::Quit),
            "show" => return Ok(Action::Show),
            "?" | "help" => return Ok(Action::Help),
            _ => {}
        }

        if let Ok(interface) = input.parse::<MacInterface>() {
            self.set_interface(interface);
            return Ok(Action::Updated);
        }
        if let Ok(unit) = input.parse::<TimeUnit>() {
            self.set_unit(unit);
            return Ok(Action::Updated);
        }

        let looks_numeric = input
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_digit() || c == '-');
        if !looks_numeric {
            return Err(CalcError::invalid(
                "input",
                input,
                "expected a byte count, an interface or a time unit",
            ));
        }

        let size = input.parse::<PacketSize>()?;
        self.set_packet_size(size);
        Ok(Action::Updated)
    }

    /// Drives the session until `quit` or end of input
    pub fn run<R, V>(&mut self, input: R, view: &mut V) -> Result<()>
    where
        R: BufRead,
        V: DurationView + ?Sized,
    {
        info!("Interactive session started");
        view.show_reading(&self.reading())?;

        let mut lines = input.lines();
        loop {
            view.prompt()?;
            let Some(line) = lines.next() else {
                debug!("End of input");
                break;
            };
            let line = line?;

            match self.apply(&line) {
                Ok(Action::Updated) | Ok(Action::Show) => view.show_reading(&self.reading())?,
                Ok(Action::Help) => view.show_help()?,
                Ok(Action::Empty) => {}
                Ok(Action::Quit) => break,
                Err(e) => {
                    warn!(error = %e, "Rejected input");
                    view.show_invalid(&e)?;
                }
            }
        }

        info!("Interactive session finished");
        Ok(())
    }
}
