//! Command-line argument parsing for the table generator.

use std::path::PathBuf;

use clap::Parser;

use crate::{GeneratorConfig, OutputFormat};

/// Cube wrap table generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(
    name = "cubewrap-gen",
    about = "Generate the cube map texture wrap table"
)]
pub struct CliArgs {
    /// Cube face edge length in texels.
    #[arg(long)]
    pub edge_width: Option<u32>,

    /// Output encoding.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the table to this file instead of standard output.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Array or constant name in source output.
    #[arg(long)]
    pub symbol: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.edge_width {
            self.table.edge_width = w;
        }
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if let Some(ref path) = args.output {
            self.output.path = Some(path.clone());
        }
        if let Some(ref symbol) = args.symbol {
            self.output.symbol = Some(symbol.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = GeneratorConfig::default();
        let args = CliArgs {
            edge_width: Some(1024),
            format: Some(OutputFormat::Binary),
            output: Some(PathBuf::from("wrap.bin")),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.table.edge_width, 1024);
        assert_eq!(config.output.format, OutputFormat::Binary);
        assert_eq!(config.output.path, Some(PathBuf::from("wrap.bin")));
        // Non-overridden fields retain defaults
        assert_eq!(config.output.symbol, None);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = GeneratorConfig::default();
        let mut config = GeneratorConfig::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "cubewrap-gen",
            "--edge-width",
            "512",
            "--format",
            "rust",
            "-o",
            "table.rs",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.edge_width, Some(512));
        assert_eq!(args.format, Some(OutputFormat::Rust));
        assert_eq!(args.output, Some(PathBuf::from("table.rs")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = CliArgs::try_parse_from(["cubewrap-gen", "--format", "yaml"]);
        assert!(result.is_err());
    }
}
