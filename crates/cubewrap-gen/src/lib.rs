//! Pipeline behind the `cubewrap-gen` binary: build the wrap table for the
//! configured edge width, check it, and encode it in the configured format.

use std::io::Write;
use std::path::{Path, PathBuf};

use cubewrap_config::{CliArgs, ConfigError, GeneratorConfig, OutputConfig, OutputFormat};
use cubewrap_geometry::{EdgeWidth, GeometryError};
use cubewrap_table::emit::{
    DEFAULT_C_SYMBOL, DEFAULT_RUST_SYMBOL, render_binary, render_c, render_json, render_rust,
};
use cubewrap_table::{TableError, WrapTable, verify};
use tracing::info;

/// Errors that abort a generator run.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// An explicitly requested configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configured edge width is unusable.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Table construction or its consistency checks failed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// The artifact could not be written.
    #[error("failed to write {target}: {source}")]
    Write {
        /// Destination file, or "standard output".
        target: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Resolve the configuration for a run and the directory it came from.
///
/// A directory passed with `--config` must load; its errors are returned.
/// The platform default directory is best effort: if it is missing or its
/// file is unreadable the defaults are used. CLI overrides apply last.
///
/// # Errors
///
/// Returns [`GenError::Config`] when the `--config` directory cannot be
/// loaded or created.
pub fn load_config(args: &CliArgs) -> Result<(GeneratorConfig, Option<PathBuf>), GenError> {
    let (mut config, dir) = match &args.config {
        Some(dir) => (GeneratorConfig::load_or_create(dir)?, Some(dir.clone())),
        None => match GeneratorConfig::default_dir() {
            Ok(dir) => {
                let config = GeneratorConfig::load_or_create(&dir).unwrap_or_else(|e| {
                    eprintln!("Failed to load config: {e}, using defaults");
                    GeneratorConfig::default()
                });
                (config, Some(dir))
            }
            Err(e) => {
                eprintln!("{e}, using defaults");
                (GeneratorConfig::default(), None)
            }
        },
    };
    config.apply_cli_overrides(args);
    Ok((config, dir))
}

/// Generate and check the table described by `config`.
///
/// # Errors
///
/// Returns [`GenError::Geometry`] for an edge width below the minimum and
/// [`GenError::Table`] if generation or a consistency check fails.
pub fn build_table(config: &GeneratorConfig) -> Result<WrapTable, GenError> {
    let edge = EdgeWidth::new(config.table.edge_width)?;
    let table = WrapTable::generate(edge)?;
    verify::check_table(&table)?;
    Ok(table)
}

/// Encode `table` as configured.
///
/// # Errors
///
/// Returns [`GenError::Table`] if JSON serialization fails.
pub fn render(table: &WrapTable, output: &OutputConfig) -> Result<Vec<u8>, GenError> {
    let symbol = output.symbol.as_deref();
    let bytes = match output.format {
        OutputFormat::C => render_c(table, symbol.unwrap_or(DEFAULT_C_SYMBOL)).into_bytes(),
        OutputFormat::Rust => render_rust(table, symbol.unwrap_or(DEFAULT_RUST_SYMBOL)).into_bytes(),
        OutputFormat::Json => render_json(table)?.into_bytes(),
        OutputFormat::Binary => render_binary(table),
    };
    Ok(bytes)
}

/// Write the artifact to `path`, or to standard output when `None`.
///
/// # Errors
///
/// Returns [`GenError::Write`] on any I/O failure.
pub fn write_artifact(bytes: &[u8], path: Option<&Path>) -> Result<(), GenError> {
    let target = path.map_or_else(|| "standard output".to_string(), |p| p.display().to_string());
    let to_error = |source| GenError::Write {
        target: target.clone(),
        source,
    };
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(to_error)?;
            }
            std::fs::write(path, bytes).map_err(to_error)?;
            info!(path = %path.display(), len = bytes.len(), "wrote wrap table");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes).map_err(to_error)?;
            stdout.flush().map_err(to_error)?;
        }
    }
    Ok(())
}

/// Full run: build, render and write.
///
/// # Errors
///
/// Propagates any stage's failure.
pub fn run(config: &GeneratorConfig) -> Result<(), GenError> {
    let table = build_table(config)?;
    let bytes = render(&table, &config.output)?;
    write_artifact(&bytes, config.output.path.as_deref())
}
