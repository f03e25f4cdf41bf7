//! Multicast Demo CLI Application
//!
//! Command-line demonstration of the multicast library:
//! - Mode state publisher with up to 3 mode change subscribers
//! - Register/invoke/unregister for callbacks of 0, 2, 3, 4 and 5 arguments
//!
//! With no arguments the built-in script runs and the program exits
//! successfully.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod callbacks;
mod config;
mod sysdata;

/// Multicast Demo - Exercise type-safe multicast callbacks
#[derive(Parser, Debug)]
#[command(name = "multicast-demo")]
#[command(about = "Register sample callbacks and print their invocations", long_about = None)]
#[command(version)]
struct Args {
    /// Path to a demo script configuration (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Multicast Demo v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using multicast library v{}", multicast::VERSION);

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            let config = config::load_config(path)?;
            log::debug!("Configuration loaded: {:?}", config);
            config
        }
        None => config::DemoConfig::default(),
    };

    callbacks::run(&config)
}

/// Log level selected by `-q` / `-v` flags
fn log_level(verbose: u8, quiet: bool) -> log::LevelFilter {
    use log::LevelFilter;

    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

/// Initialize logging; `RUST_LOG` directives override the flag level
fn init_logging(verbose: u8, quiet: bool) {
    use std::io::Write;

    env_logger::Builder::new()
        .filter_level(log_level(verbose, quiet))
        .parse_default_env()
        .format(|buf, record| {
            writeln!(buf, "{:<5} [{}] {}", record.level(), record.target(), record.args())
        })
        .init();
}
