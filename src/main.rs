//! wavscan CLI - Audio File Discovery
//!
//! Command-line interface for finding and loading audio files.

use clap::Parser;
use env_logger::Env;
use log::{debug, error};

use wavscan::cli::commands::{self, ScanArgs};
use wavscan::cli::{Cli, Commands};
use wavscan::{FrameRange, Result};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    debug!("wavscan v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("wavscan v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("[{}] {}", e.error_code(), e);
        eprintln!("Hint: {}", e.recovery_hint());
        std::process::exit(1);
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Scan {
            paths,
            extensions,
            no_recursive,
            no_follow_symlinks,
            config,
            json,
        } => {
            let args = ScanArgs {
                extensions,
                no_recursive,
                no_follow_symlinks,
                config,
            };
            commands::scan(&paths, &args, json).map(|_| ())
        }
        Commands::Load {
            path,
            sample_rate,
            start,
            stop,
            output,
            json,
        } => commands::load(
            &path,
            sample_rate,
            FrameRange::new(start, stop),
            output.as_deref(),
            json,
        )
        .map(|_| ()),
    }
}
