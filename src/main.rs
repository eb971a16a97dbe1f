//! move-analyzer-config — settings diagnostic tool.
//!
//! Startup sequence:
//!   1. Parse CLI args
//!   2. Init logger once
//!   3. Load the host settings document (or start from an empty snapshot)
//!   4. Resolve and print the server path
//!
//! This tool only reports what the extension would resolve; it never launches
//! or probes the language server.

use std::path::Path;

use tracing::info;

use move_analyzer_config::bootstrap::logger;
use move_analyzer_config::config::{Configuration, SettingsSnapshot, SystemEnv, NAMESPACE};
use move_analyzer_config::error::AppError;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = parse_cli_args();

    let effective_log_level = args.log_level.unwrap_or("warn");
    logger::init(effective_log_level, args.log_level.is_some())?;

    let snapshot = match args.settings_path.as_deref() {
        Some(path) => SettingsSnapshot::from_document_file(Path::new(path), NAMESPACE)?,
        None => SettingsSnapshot::empty(),
    };

    info!(
        namespace = NAMESPACE,
        settings = %snapshot,
        "settings snapshot loaded"
    );

    let config = Configuration::new(snapshot, SystemEnv);
    println!("{}", config.server_path().display());

    Ok(())
}

struct CliArgs {
    log_level: Option<&'static str>,
    settings_path: Option<String>,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut settings_path = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: move-analyzer-config [OPTIONS]");
                println!();
                println!("Prints the language-server path the extension would resolve.");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -f, --settings <PATH>      Path to a host settings JSON document");
                println!("  -v, -vv, -vvv              Increase logging verbosity");
                std::process::exit(0);
            }
            "-f" | "--settings" => {
                if let Some(path) = iter.next() {
                    settings_path = Some(path);
                } else {
                    eprintln!("error: -f/--settings requires a path argument");
                    std::process::exit(1);
                }
            }
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    // Each -v raises verbosity one tier from the quiet default:
    //   -v      → info   (snapshot summary)
    //   -vv     → debug  (fallback and expansion decisions)
    //   -vvv+   → trace
    let log_level = match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };

    CliArgs {
        log_level,
        settings_path,
    }
}
