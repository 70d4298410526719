// CLI module
// Command-line interface, argument parsing, and the top-level run

mod args;

pub use args::{CliArgs, DEFAULT_BUSINESS_INFO_PATH, DEFAULT_CATALOG_PATH, DEFAULT_LOGO_PATH};

use crate::core::ManifestBuilder;
use crate::render::SlipRenderer;
use crate::types::SlipError;
use clap::Parser;
use std::process;

/// Parse command-line arguments using clap
///
/// Usage errors print clap's message and exit with status 1; `--help` and
/// `--version` print to stdout and exit with status 0.
pub fn parse_args() -> CliArgs {
    match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            // Nothing sensible to do if the terminal is gone
            let _ = e.print();
            process::exit(code);
        }
    }
}

/// Build the manifest and render the slip
///
/// Every input is checked for existence before anything is parsed, and the
/// output file is only written once the whole slip has rendered.
///
/// # Returns
///
/// The number of pages written.
pub fn run(args: &CliArgs) -> Result<usize, SlipError> {
    args.check_inputs()?;

    let manifest = ManifestBuilder::new(args.to_sources()).build()?;
    log::debug!(
        "Order {} resolved to {} line item(s)",
        manifest.order_no,
        manifest.items.len()
    );

    SlipRenderer::new(args.to_render_options()).render_to_file(&manifest, &args.output)
}
