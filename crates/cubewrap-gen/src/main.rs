//! Generates the cube map texture wrap table.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p cubewrap-gen` to print the C++ table to standard output.
//! Run with `cargo run -p cubewrap-gen -- --format binary -o wrap.bin` to write raw bytes.

use clap::Parser;
use cubewrap_config::CliArgs;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    let (config, config_dir) = match cubewrap_gen::load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("cubewrap-gen: {e}");
            std::process::exit(1);
        }
    };

    let log_dir = config_dir
        .as_ref()
        .filter(|_| config.debug.log_to_file)
        .map(|dir| dir.join("logs"));
    cubewrap_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    info!(
        edge_width = config.table.edge_width,
        format = ?config.output.format,
        "generating cube wrap table"
    );

    if let Err(e) = cubewrap_gen::run(&config) {
        error!("cubewrap-gen failed: {e}");
        std::process::exit(1);
    }
}
