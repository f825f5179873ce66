//! Command-line entry point: `cdb-class-sort INFILE OUTFILE`.

use std::path::PathBuf;

use clap::Parser;
use tracing::error;

/// Sort the class records of a class database dump by name.
#[derive(Parser, Debug)]
#[command(name = "cdb-class-sort")]
struct Args {
    /// Class dump to read.
    infile: PathBuf,

    /// Destination for the sorted classes.
    outfile: PathBuf,
}

fn main() {
    let args = Args::parse();
    cubewrap_log::init_logging(None, false, None);

    if let Err(e) = cdb_class_sort::sort_file(&args.infile, &args.outfile) {
        error!("cdb-class-sort failed: {e}");
        std::process::exit(1);
    }
}
