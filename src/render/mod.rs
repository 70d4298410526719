//! Report rendering
//!
//! Produces the packing slip PDF for a [`Manifest`].
//!
//! # Components
//!
//! - `metrics` - Helvetica glyph widths and line wrapping
//! - `layout` - Pure pagination pass producing positioned drawing operations
//! - `logo` - Logo decoding
//! - `pdf` - `lopdf` serialization of laid-out pages
//!
//! # Example
//!
//! ```no_run
//! use packing_slip::render::{RenderOptions, SlipRenderer};
//! use packing_slip::core::ManifestBuilder;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), packing_slip::types::SlipError> {
//! # let sources = packing_slip::core::ManifestSources {
//! #     catalog: "catalog.tsv".into(),
//! #     business_info: "business.yaml".into(),
//! #     order: "order.yaml".into(),
//! # };
//! let manifest = ManifestBuilder::new(sources).build()?;
//! let renderer = SlipRenderer::new(RenderOptions::default());
//! renderer.render_to_file(&manifest, Path::new("slip.pdf"))?;
//! # Ok(())
//! # }
//! ```

pub mod layout;
pub mod logo;
pub mod metrics;
pub mod pdf;

pub use layout::{layout_packing_slip, DrawOp, ImageSize, PageGeometry, PageLayout};
pub use logo::LogoImage;
pub use metrics::FontStyle;
pub use pdf::PdfWriter;

use crate::core::Totals;
use crate::types::{Manifest, SlipError};
use rust_decimal::Decimal;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default shipping & handling charge
pub const DEFAULT_SHIPPING_AND_HANDLING: Decimal = Decimal::from_parts(123, 0, 0, false, 2);

/// Settings for one render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Flat charge added to the subtotal
    pub shipping_and_handling: Decimal,
    /// Logo drawn at the top of the first page, if any
    pub logo: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            shipping_and_handling: DEFAULT_SHIPPING_AND_HANDLING,
            logo: None,
        }
    }
}

/// Renders manifests to PDF
#[derive(Debug, Clone)]
pub struct SlipRenderer {
    options: RenderOptions,
    geometry: PageGeometry,
}

impl SlipRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            geometry: PageGeometry::letter(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Totals printed on the slip for `manifest`
    pub fn totals(&self, manifest: &Manifest) -> Result<Totals, SlipError> {
        Totals::for_manifest(manifest, self.options.shipping_and_handling)
    }

    /// Lay out the slip without producing a PDF
    pub fn layout(&self, manifest: &Manifest) -> Result<Vec<PageLayout>, SlipError> {
        let logo = self.load_logo()?;
        self.layout_with(manifest, logo.as_ref())
    }

    /// Render the slip and write the PDF to `writer`
    ///
    /// Returns the number of pages written.
    pub fn render_to_writer<W: Write>(
        &self,
        manifest: &Manifest,
        writer: &mut W,
    ) -> Result<usize, SlipError> {
        let logo = self.load_logo()?;
        let pages = self.layout_with(manifest, logo.as_ref())?;

        let mut pdf = PdfWriter::new(self.geometry, logo.as_ref());
        for page in &pages {
            pdf.add_page(page)?;
        }
        let page_count = pdf.page_count();
        pdf.finish(writer)?;

        Ok(page_count)
    }

    /// Render the slip to a file, creating or truncating it
    ///
    /// The PDF is built in memory first, so a failed render leaves no
    /// partial file behind.
    pub fn render_to_file(&self, manifest: &Manifest, path: &Path) -> Result<usize, SlipError> {
        let mut bytes = Vec::new();
        let page_count = self.render_to_writer(manifest, &mut bytes)?;

        fs::write(path, &bytes).map_err(|e| SlipError::IoError {
            message: format!("Failed to write '{}': {}", path.display(), e),
        })?;

        log::info!(
            "Wrote {} ({} page(s), {} line item(s), {} bytes)",
            path.display(),
            page_count,
            manifest.items.len(),
            bytes.len()
        );
        Ok(page_count)
    }

    fn load_logo(&self) -> Result<Option<LogoImage>, SlipError> {
        self.options
            .logo
            .as_deref()
            .map(LogoImage::load)
            .transpose()
    }

    fn layout_with(
        &self,
        manifest: &Manifest,
        logo: Option<&LogoImage>,
    ) -> Result<Vec<PageLayout>, SlipError> {
        let totals = self.totals(manifest)?;
        layout_packing_slip(manifest, &totals, logo.map(LogoImage::size), self.geometry)
    }
}
