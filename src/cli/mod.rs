//! Terminal front end for the duration calculator

pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod logging;
pub mod reporter;
pub mod session;

pub use config::Config;
pub use constants::*;
pub use error::{CliError, Result};
pub use format::format_duration;
pub use logging::{init_logging, init_logging_with_config};
pub use reporter::Reporter;
pub use session::{DurationView, Reading, Session};
