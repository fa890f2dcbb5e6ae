use anyhow::{Context, Result};
use clap::Parser;
use packettime::cli::{init_logging_with_config, Config, Reporter, Session};
use tracing::{debug, error, info};

fn main() {
    // Parse CLI arguments
    let config = Config::parse();

    // Initialize structured logging with config options
    init_logging_with_config(&config.log_level, config.is_json_format());

    // Validate configuration
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config) {
        error!(error = %e, "PacketTime failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    if config.plain {
        colored::control::set_override(false);
    }

    debug!(
        bytes = config.bytes.bytes(),
        interface = %config.interface,
        unit = %config.unit,
        table = config.table,
        interactive = config.interactive,
        "Starting"
    );

    let mut reporter = Reporter::stdout();

    if config.interactive {
        let mut session = Session::from_config(&config);
        let stdin = std::io::stdin();
        session
            .run(stdin.lock(), &mut reporter)
            .context("interactive session failed")?;
    } else if config.table {
        reporter
            .print_table(config.bytes)
            .context("failed to print table")?;
    } else {
        let reading = Session::from_config(&config).reading();
        info!(duration = reading.duration, "Computed duration");
        reporter
            .print_reading(&reading)
            .context("failed to print reading")?;
    }

    Ok(())
}
