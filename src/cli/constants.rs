//! Constants used by the terminal front end

/// Fraction digits kept when displaying a duration
pub const DISPLAY_FRACTION_DIGITS: usize = 3;

/// Digits between grouping separators
pub const GROUP_SIZE: usize = 3;

/// Grouping separator used in displayed numbers
pub const GROUP_SEPARATOR: char = ',';

/// Durations at or above this magnitude switch to scientific notation
pub const SCIENTIFIC_THRESHOLD: f64 = 1e21;

/// Prompt shown by the interactive session
pub const PROMPT: &str = "packettime> ";

/// Width of the interface column in the table view
pub const TABLE_INTERFACE_WIDTH: usize = 7;

/// Width of each unit column in the table view
pub const TABLE_VALUE_WIDTH: usize = 20;

/// Valid `--log-level` values
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
