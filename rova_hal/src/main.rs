//! # ROVA HAL Binary
//!
//! Discover and exercise boards through a configured environment.
//!
//! # Usage
//!
//! ```bash
//! # Enumerate boards (human readable)
//! rova_hal discover
//!
//! # Machine readable discovery report
//! rova_hal discover --json
//!
//! # Construct a demo board directly and walk its LEDs
//! rova_hal demo --serial 00000
//!
//! # With a config file and verbose logging
//! rova_hal --config rova.toml -v discover
//! ```

use clap::{Parser, Subcommand};
use rova_common::config::{ConfigLoader, HalConfig, LogLevel};
use rova_common::types::BoardKind;
use rova_hal::backends::mock_environment;
use rova_hal::boards::{Board, BoardGroup, BoardType, DemoBoard};
use rova_hal::environment::Environment;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// ROVA HAL - capability-based hardware abstraction layer
#[derive(Parser, Debug)]
#[command(name = "rova_hal")]
#[command(version)]
#[command(about = "Capability-based hardware abstraction layer with pluggable backends")]
#[command(long_about = None)]
struct Args {
    /// Path to TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enumerate boards reachable in the configured environment
    Discover {
        /// Print a JSON report instead of log lines
        #[arg(long)]
        json: bool,
    },
    /// Construct a demo board and walk its LEDs
    Demo {
        /// Serial of the demo board to construct
        #[arg(long, default_value = "00000")]
        serial: String,
    },
}

/// One discovered board in the machine readable report.
#[derive(Debug, Serialize)]
struct BoardReport {
    kind: BoardKind,
    serial: String,
    name: String,
    components: usize,
    firmware_version: Option<String>,
}

/// The machine readable discovery report.
#[derive(Debug, Serialize)]
struct DiscoveryReport {
    environment: String,
    boards: Vec<BoardReport>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = run() {
        error!("HAL startup failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration (defaults when no file is given).
    let config = match &args.config {
        Some(path) => {
            let config = HalConfig::load(path)?;
            config.validate()?;
            config
        }
        None => HalConfig::default(),
    };

    setup_tracing(&args, &config);

    info!(
        "ROVA HAL v{} starting (service '{}')...",
        env!("CARGO_PKG_VERSION"),
        config.shared.service_name
    );

    let environment = build_environment(&config)?;
    info!(
        "Environment '{}' ready: {} board kind(s)",
        environment.name(),
        environment.board_kinds().len()
    );

    match args.command {
        Command::Discover { json } => discover(&environment, json)?,
        Command::Demo { serial } => demo(&environment, &serial)?,
    }

    info!("ROVA HAL done");
    Ok(())
}

/// Build the environment named in the configuration.
fn build_environment(config: &HalConfig) -> Result<Environment, Box<dyn std::error::Error>> {
    match config.environment.as_str() {
        "mock" => Ok(mock_environment(&config.mock)?),
        other => Err(format!("unknown environment '{other}' (only 'mock' is shipped)").into()),
    }
}

/// Enumerate demo boards and report them.
fn discover(environment: &Environment, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let group: BoardGroup<DemoBoard> = BoardGroup::from_environment(environment)?;
    info!("Discovered {} board(s)", group.len());

    if json {
        let boards = group
            .iter()
            .map(|board| {
                Ok(BoardReport {
                    kind: board.kind(),
                    serial: board.serial().to_string(),
                    name: board.name().to_string(),
                    components: board.component_kinds().len(),
                    firmware_version: board.firmware_version()?,
                })
            })
            .collect::<Result<Vec<_>, Box<dyn std::error::Error>>>()?;
        let report = DiscoveryReport {
            environment: environment.name().to_string(),
            boards,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for board in group.iter() {
            info!(
                "  {} (firmware {})",
                board,
                board
                    .firmware_version()?
                    .unwrap_or_else(|| "unknown".to_string())
            );
        }
    }
    Ok(())
}

/// Construct a demo board directly and walk its LEDs on and off again.
fn demo(environment: &Environment, serial: &str) -> Result<(), Box<dyn std::error::Error>> {
    let board = DemoBoard::new(serial, environment)?;
    info!("Constructed {}", board);

    for led in board.leds() {
        led.set_state(true)?;
        info!("  LED set, read back: {}", led.state()?);
    }

    board.make_safe()?;
    info!("Board made safe");
    Ok(())
}

/// Setup tracing subscriber from CLI arguments and configuration.
fn setup_tracing(args: &Args, config: &HalConfig) {
    let directive = if args.verbose {
        LogLevel::Debug.as_filter_str()
    } else {
        config.shared.log_level.as_filter_str()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive));

    if args.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
