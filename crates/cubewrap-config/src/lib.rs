//! Configuration for the cube wrap table generator.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{DebugConfig, GeneratorConfig, OutputConfig, OutputFormat, TableConfig};
pub use error::ConfigError;
