//! Packing Slip Generator CLI
//!
//! Command-line interface for rendering a printable PDF packing slip from a
//! product catalog, a business-info document, and an order description.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- -m orders/1042.yaml -o slip-1042.pdf
//! cargo run -- -m orders/1042.yaml -o slip-1042.pdf --catalog data/MSM_CATALOG.tsv --no-logo
//! cargo run -- -m orders/1042.toml -o slip-1042.pdf --shipping 4.50 --verbose
//! ```
//!
//! Logging goes to stderr and defaults to warnings only; `--verbose` raises it
//! to debug, and `RUST_LOG` overrides both.
//!
//! # Exit Codes
//!
//! - 0: Success (also `--help` and `--version`)
//! - 1: Error (bad arguments, missing input file, unresolvable catalog
//!   reference, render failure, etc.)

use env_logger::Env;
use packing_slip::cli;
use std::process;

fn main() {
    let args = cli::parse_args();

    let default_filter = if args.verbose {
        "packing_slip=debug"
    } else {
        "packing_slip=warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = cli::run(&args) {
        eprintln!("FATAL: {}", e);
        process::exit(1);
    }
}
