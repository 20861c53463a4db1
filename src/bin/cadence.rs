//! Cadence CLI binary.

use std::io::Write;
use std::process;

use cadence::cli::args::CadenceArgs;
use cadence::cli::commands::execute_command;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

/// Log level for a CLI verbosity; warnings show by default.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn main() {
    let args = CadenceArgs::parse();

    Builder::new()
        .filter_level(level_for(args.verbosity()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("cadence: {e}");
        process::exit(1);
    }
}
