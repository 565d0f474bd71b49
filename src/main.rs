//! naca-foil: NACA airfoil profile generator.
//!
//! Generates 2-D coordinate profiles for NACA airfoil sections from a
//! datcom designation string, as a plain listing, an AC3D polyline object
//! or a JSON document.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use naca_foil::config;
use naca_foil::naca::{self, stations::MIN_STATIONS};
use naca_foil::output::{self, OutputFormat};

/// NACA airfoil profile generator.
///
/// Parses a datcom designation (the four letters NACA, a hyphen, any
/// character, a hyphen, the family code 1, 4, 5, 6 or S, a hyphen, the
/// foil number) and writes the section boundary as coordinates.
#[derive(Parser, Debug)]
#[command(name = "naca-foil")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Airfoil designation, e.g. NACA-X-4-2412
    #[arg(value_name = "DESIGNATION")]
    designation: String,

    /// Number of chordwise stations per surface (at least 5)
    #[arg(short = 'n', long, value_name = "N")]
    stations: Option<usize>,

    /// Output format: raw, ac3d or json
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Entry point for the naca-foil generator.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let config_path = args.config.as_deref();
    let cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    // Display GPL license notice (required by GPLv3 Section 5d)
    if !args.quiet {
        eprintln!(
            "naca-foil {}  Copyright (C) 2026  The Embedded Society",
            env!("CARGO_PKG_VERSION")
        );
        eprintln!("This is free software with ABSOLUTELY NO WARRANTY, licensed GPL-3.0-or-later.");
        eprintln!();
    }

    let station_count = args.stations.unwrap_or(cfg.geometry.default_stations);
    if station_count < MIN_STATIONS {
        eprintln!("Station count must be at least {MIN_STATIONS} (got {station_count})");
        return ExitCode::FAILURE;
    }

    let format_name = args
        .format
        .clone()
        .unwrap_or_else(|| cfg.output.default_format.clone());
    let Some(format) = OutputFormat::from_str_loose(&format_name) else {
        eprintln!("Unknown output format '{format_name}' (expected raw, ac3d or json)");
        return ExitCode::FAILURE;
    };

    info!(
        designation = %args.designation,
        stations = station_count,
        %format,
        "generating profile"
    );

    let profile = match naca::generate(&args.designation, station_count) {
        Ok(profile) => profile,
        Err(e) => {
            error!(error = %e, "failed to generate profile");
            return ExitCode::FAILURE;
        }
    };

    let written = match args.output {
        Some(ref path) => {
            info!(path = %path.display(), "creating output file");
            match File::create(path) {
                Ok(file) => {
                    let mut writer = BufWriter::new(file);
                    output::write_profile(&mut writer, format, &profile, &args.designation)
                        .and_then(|()| writer.flush())
                }
                Err(e) => {
                    error!(path = %path.display(), error = %e, "unable to open file for writing");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            output::write_profile(&mut handle, format, &profile, &args.designation)
        }
    };

    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed to write profile");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(get_log_level(3, true, "warn"), Level::ERROR);
    }

    #[test]
    fn config_level_applies_without_flags() {
        assert_eq!(get_log_level(0, false, "debug"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "bogus"), Level::WARN);
    }

    #[test]
    fn verbosity_flags_escalate() {
        assert_eq!(get_log_level(1, false, "warn"), Level::INFO);
        assert_eq!(get_log_level(2, false, "warn"), Level::DEBUG);
        assert_eq!(get_log_level(5, false, "warn"), Level::TRACE);
    }
}
