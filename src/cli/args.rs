use crate::core::ManifestSources;
use crate::render::RenderOptions;
use crate::types::SlipError;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// Default product catalog location
pub const DEFAULT_CATALOG_PATH: &str = "./data/MSM_CATALOG.tsv";

/// Default business-info document location
pub const DEFAULT_BUSINESS_INFO_PATH: &str = "./data/BUSINESS_INFO.yaml";

/// Default logo location
pub const DEFAULT_LOGO_PATH: &str = "./data/logo-head-transparent.png";

/// Render a printable packing slip for one order
#[derive(Parser, Debug)]
#[command(name = "packing-slip", version)]
#[command(about = "Render a PDF packing slip from a product catalog and an order manifest", long_about = None)]
pub struct CliArgs {
    /// Order description (YAML, or TOML with a .toml extension)
    #[arg(short = 'm', long = "manifest", value_name = "FILE")]
    pub manifest: PathBuf,

    /// Destination PDF path
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Tab-separated product catalog
    #[arg(
        short = 'c',
        long = "catalog",
        value_name = "FILE",
        default_value = DEFAULT_CATALOG_PATH
    )]
    pub catalog: PathBuf,

    /// Business name, address, and signoff
    #[arg(
        short = 'b',
        long = "business-info",
        value_name = "FILE",
        default_value = DEFAULT_BUSINESS_INFO_PATH
    )]
    pub business_info: PathBuf,

    /// Logo image drawn at the top of the slip (PNG or JPEG)
    #[arg(
        short = 'l',
        long = "logo",
        value_name = "FILE",
        default_value = DEFAULT_LOGO_PATH,
        conflicts_with = "no_logo"
    )]
    pub logo: PathBuf,

    /// Render without the logo
    #[arg(long = "no-logo")]
    pub no_logo: bool,

    /// Shipping & handling charge added to the subtotal
    #[arg(
        short = 's',
        long = "shipping",
        value_name = "AMOUNT",
        default_value = "1.23",
        value_parser = parse_amount
    )]
    pub shipping: Decimal,

    /// Log progress at debug level
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parse a non-negative money amount
fn parse_amount(value: &str) -> Result<Decimal, String> {
    let amount = Decimal::from_str(value.trim())
        .map_err(|e| format!("'{}' is not a decimal amount: {}", value, e))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(format!("'{}' must not be negative", value));
    }
    Ok(amount)
}

impl CliArgs {
    /// Input file locations for the manifest builder
    pub fn to_sources(&self) -> ManifestSources {
        ManifestSources {
            catalog: self.catalog.clone(),
            business_info: self.business_info.clone(),
            order: self.manifest.clone(),
        }
    }

    /// Renderer settings
    ///
    /// The logo is dropped when `--no-logo` is given.
    pub fn to_render_options(&self) -> RenderOptions {
        RenderOptions {
            shipping_and_handling: self.shipping,
            logo: (!self.no_logo).then(|| self.logo.clone()),
        }
    }

    /// Check that every input file exists before any work is done
    ///
    /// # Errors
    ///
    /// Returns [`SlipError::FileNotFound`] for the first input that is not a
    /// regular file.
    pub fn check_inputs(&self) -> Result<(), SlipError> {
        let sources = self.to_sources();
        let logo = self.to_render_options().logo;

        for path in sources.paths().into_iter().chain(logo.as_ref()) {
            if !path.is_file() {
                return Err(SlipError::file_not_found(path));
            }
        }
        Ok(())
    }
}
