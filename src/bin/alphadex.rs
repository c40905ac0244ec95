//! Alphadex CLI binary.

use std::io::Write;
use std::process;

use clap::{CommandFactory, Parser};
use env_logger::Builder;
use log::LevelFilter;

use alphadex::cli::args::*;
use alphadex::cli::commands::*;
use alphadex::error::AlphadexError;

fn main() {
    // Parse command line arguments using clap
    let args = AlphadexArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        if matches!(e, AlphadexError::Manifest(_)) {
            eprintln!("{}", AlphadexArgs::command().render_usage());
        }
        process::exit(1);
    }
}
