//! Packing slip layout
//!
//! Turns a [`Manifest`] into positioned drawing operations, one list per page.
//! This pass is pure: it measures text with the standard Helvetica metrics and
//! never touches the PDF library, which keeps pagination testable.
//!
//! Coordinates are PDF user space: points, origin at the bottom-left corner.
//! The composer keeps a cursor measured from the bottom of the page and moves
//! it downwards as content is placed; content that does not fit above the
//! bottom margin starts a new page.

use super::metrics::{line_height, text_width, wrap_text, FontStyle, ASCENT};
use crate::core::Totals;
use crate::types::{Manifest, SlipError};

pub const POINTS_PER_INCH: f32 = 72.0;

/// Base font size of the document
pub const BASE_FONT_SIZE: f32 = 10.0;

/// Font size of the business name, the title line, and the totals
pub const HEADING_FONT_SIZE: f32 = 12.0;

/// Header row of the line-item table
pub const ITEM_TABLE_HEADER: [&str; 5] = ["Catalog no.", "Name", "Unit price", "Qty.", "Amount"];

const SHIPPING_TABLE_PADDING: f32 = 5.0;

/// Convert inches to points
pub fn inches(n: f32) -> f32 {
    n * POINTS_PER_INCH
}

/// Page size and margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// US Letter, portrait, half-inch margins on all sides
    pub fn letter() -> Self {
        Self {
            width: inches(8.5),
            height: inches(11.0),
            margin: inches(0.5),
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn content_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    /// Y coordinate of the top of the content area
    pub fn top(&self) -> f32 {
        self.height - self.margin
    }
}

/// Pixel dimensions of the logo image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// One positioned drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A single line of text; `y` is the baseline
    Text {
        x: f32,
        y: f32,
        style: FontStyle,
        size: f32,
        text: String,
    },
    /// A stroked rectangle; `(x, y)` is the bottom-left corner
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// The logo image; `(x, y)` is the bottom-left corner
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// The drawing operations of one page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub ops: Vec<DrawOp>,
}

impl PageLayout {
    /// Text of every text operation, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy)]
struct TableStyle {
    padding: f32,
    size: f32,
    header_rows: usize,
    repeat_header: bool,
}

/// A table row after wrapping: lines per cell, plus the row height
#[derive(Debug, Clone)]
struct PreparedRow {
    cells: Vec<Vec<String>>,
    style: FontStyle,
    height: f32,
}

impl PreparedRow {
    fn new(cells: Vec<Vec<String>>, font: FontStyle, style: TableStyle) -> Self {
        let lines = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
        Self {
            cells,
            style: font,
            height: lines as f32 * line_height(style.size) + 2.0 * style.padding,
        }
    }

    /// Split after the first `lines` lines of every cell
    fn split(&self, lines: usize, style: TableStyle) -> (Self, Self) {
        let (head, tail): (Vec<_>, Vec<_>) = self
            .cells
            .iter()
            .map(|cell| {
                let at = lines.min(cell.len());
                (cell[..at].to_vec(), cell[at..].to_vec())
            })
            .unzip();
        (
            Self::new(head, self.style, style),
            Self::new(tail, self.style, style),
        )
    }
}

/// Lay out a complete packing slip
///
/// `logo` is the pixel size of the logo image, if one is drawn.
pub fn layout_packing_slip(
    manifest: &Manifest,
    totals: &Totals,
    logo: Option<ImageSize>,
    geometry: PageGeometry,
) -> Result<Vec<PageLayout>, SlipError> {
    let mut composer = Composer::new(geometry);

    // Header block
    if let Some(size) = logo {
        composer.image(size, inches(1.25));
    }
    composer.blank_line(HEADING_FONT_SIZE);
    composer.paragraph(
        &manifest.business_info.name,
        FontStyle::Bold,
        HEADING_FONT_SIZE,
        Align::Center,
    );
    for line in manifest.business_info.address_lines() {
        composer.paragraph(line, FontStyle::Regular, BASE_FONT_SIZE, Align::Center);
    }
    composer.blank_line(BASE_FONT_SIZE);

    // Title line
    let title = format!(
        "PACKING SLIP - ORDER # {} - {}",
        manifest.order_no, manifest.order_date
    );
    composer.paragraph(&title, FontStyle::Bold, HEADING_FONT_SIZE, Align::Left);
    composer.blank_line(HEADING_FONT_SIZE);

    // Shipping block
    let shipping = vec![
        vec!["BILL TO:".to_string(), "SHIP TO:".to_string()],
        vec![manifest.bill_to.clone(), manifest.ship_to.clone()],
    ];
    composer.table(
        &shipping,
        TableStyle {
            padding: SHIPPING_TABLE_PADDING,
            size: BASE_FONT_SIZE,
            header_rows: 1,
            repeat_header: false,
        },
    )?;
    composer.blank_line(BASE_FONT_SIZE);
    composer.blank_line(BASE_FONT_SIZE);

    // Line items
    let mut rows: Vec<Vec<String>> = vec![ITEM_TABLE_HEADER.iter().map(|h| h.to_string()).collect()];
    for item in &manifest.items {
        rows.push(item.table_row()?);
    }
    composer.table(
        &rows,
        TableStyle {
            padding: inches(0.15),
            size: BASE_FONT_SIZE,
            header_rows: 1,
            repeat_header: true,
        },
    )?;

    // Totals
    composer.blank_line(HEADING_FONT_SIZE);
    for (label, value) in [
        ("SUBTOTAL:", totals.subtotal_display()),
        ("SHIPPING & HANDLING:", totals.shipping_and_handling_display()),
        ("TOTAL:", totals.total_display()),
    ] {
        let value = format!(" {}", value);
        composer.line(
            &[(label, FontStyle::Bold), (value.as_str(), FontStyle::Regular)],
            HEADING_FONT_SIZE,
            Align::Left,
        );
    }
    composer.blank_line(HEADING_FONT_SIZE);

    // Signoff
    composer.paragraph(
        &manifest.business_info.signoff,
        FontStyle::Regular,
        BASE_FONT_SIZE,
        Align::Left,
    );

    let pages = composer.finish();
    log::debug!(
        "Laid out order {} on {} page(s)",
        manifest.order_no,
        pages.len()
    );
    Ok(pages)
}

/// Places content top to bottom, breaking pages as needed
struct Composer {
    geometry: PageGeometry,
    pages: Vec<PageLayout>,
    current: PageLayout,
    cursor: f32,
}

impl Composer {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: PageLayout::default(),
            cursor: geometry.top(),
        }
    }

    fn finish(mut self) -> Vec<PageLayout> {
        self.pages.push(self.current);
        self.pages
    }

    fn remaining(&self) -> f32 {
        self.cursor - self.geometry.margin
    }

    fn at_top(&self) -> bool {
        self.cursor >= self.geometry.top()
    }

    fn new_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
        self.cursor = self.geometry.top();
    }

    /// Start a new page unless `height` fits below the cursor
    ///
    /// Content taller than a whole page is placed at the top of a fresh page
    /// and allowed to overflow.
    fn reserve(&mut self, height: f32) {
        if height > self.remaining() && !self.at_top() {
            self.new_page();
        }
    }

    fn blank_line(&mut self, size: f32) {
        let height = line_height(size);
        self.reserve(height);
        self.cursor -= height;
    }

    /// One line made of differently styled runs
    fn line(&mut self, runs: &[(&str, FontStyle)], size: f32, align: Align) {
        let height = line_height(size);
        self.reserve(height);

        let width: f32 = runs
            .iter()
            .map(|(text, style)| text_width(text, *style, size))
            .sum();
        let mut x = match align {
            Align::Left => self.geometry.margin,
            Align::Center => self.geometry.margin + (self.geometry.content_width() - width) / 2.0,
        };
        let baseline = self.cursor - ASCENT * size;

        for (text, style) in runs {
            if !text.is_empty() {
                self.current.ops.push(DrawOp::Text {
                    x,
                    y: baseline,
                    style: *style,
                    size,
                    text: text.to_string(),
                });
            }
            x += text_width(text, *style, size);
        }

        self.cursor -= height;
    }

    /// Wrapped text, one line per wrapped line
    fn paragraph(&mut self, text: &str, style: FontStyle, size: f32, align: Align) {
        for line in wrap_text(text, style, size, self.geometry.content_width()) {
            self.line(&[(line.as_str(), style)], size, align);
        }
    }

    /// Centered image with the given height, keeping the aspect ratio
    fn image(&mut self, size: ImageSize, height: f32) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        let mut width = height * size.width as f32 / size.height as f32;
        let mut height = height;
        let max_width = self.geometry.content_width();
        if width > max_width {
            height *= max_width / width;
            width = max_width;
        }

        self.reserve(height);
        let x = self.geometry.margin + (max_width - width) / 2.0;
        self.current.ops.push(DrawOp::Image {
            x,
            y: self.cursor - height,
            width,
            height,
        });
        self.cursor -= height;
    }

    fn table(&mut self, rows: &[Vec<String>], style: TableStyle) -> Result<(), SlipError> {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return Ok(());
        }

        let widths = self.column_widths(rows, columns, style);
        let prepared: Vec<PreparedRow> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let font = if i < style.header_rows {
                    FontStyle::Bold
                } else {
                    FontStyle::Regular
                };
                let cells: Vec<Vec<String>> = (0..columns)
                    .map(|c| {
                        let text = row.get(c).map(String::as_str).unwrap_or("");
                        wrap_text(text, font, style.size, widths[c] - 2.0 * style.padding)
                    })
                    .collect();
                PreparedRow::new(cells, font, style)
            })
            .collect();

        let header_rows = style.header_rows.min(prepared.len());
        let (header, body) = prepared.split_at(header_rows);
        let header_height: f32 = header.iter().map(|r| r.height).sum();
        if header_height > self.geometry.content_height() {
            return Err(SlipError::render("table header is taller than a page"));
        }

        // Keep the header together with the first body row
        let first_body = body.first().map_or(0.0, |r| r.height);
        self.reserve(header_height + first_body);

        for row in header {
            self.draw_row(row, &widths, style);
        }
        for row in body {
            self.place_body_row(row, header, &widths, style)?;
        }
        Ok(())
    }

    /// Draw a body row, moving to a new page or splitting it between pages
    ///
    /// A row that fits on a fresh page is moved there whole. A taller row is
    /// split line by line; every part repeats the header when the table asks
    /// for it.
    fn place_body_row(
        &mut self,
        row: &PreparedRow,
        header: &[PreparedRow],
        widths: &[f32],
        style: TableStyle,
    ) -> Result<(), SlipError> {
        let repeated_height: f32 = if style.repeat_header {
            header.iter().map(|r| r.height).sum()
        } else {
            0.0
        };
        let page_capacity = self.geometry.content_height() - repeated_height;

        let mut pending = row.clone();
        let mut fresh_page = self.at_top();
        loop {
            if pending.height <= self.remaining() {
                self.draw_row(&pending, widths, style);
                return Ok(());
            }

            let fit = self.lines_that_fit(style);
            if !fresh_page && (pending.height <= page_capacity || fit == 0) {
                self.continue_table(header, widths, style);
                fresh_page = true;
                continue;
            }
            if fit == 0 {
                return Err(SlipError::render(
                    "table row cannot fit a single line on a page",
                ));
            }

            let (head, tail) = pending.split(fit, style);
            log::debug!("Splitting a table row after {} line(s)", fit);
            self.draw_row(&head, widths, style);
            self.continue_table(header, widths, style);
            fresh_page = true;
            pending = tail;
        }
    }

    /// Lines of a row that fit below the cursor
    fn lines_that_fit(&self, style: TableStyle) -> usize {
        let available = self.remaining() - 2.0 * style.padding;
        if available <= 0.0 {
            return 0;
        }
        (available / line_height(style.size)).floor() as usize
    }

    fn continue_table(&mut self, header: &[PreparedRow], widths: &[f32], style: TableStyle) {
        self.new_page();
        if style.repeat_header {
            for row in header {
                self.draw_row(row, widths, style);
            }
        }
    }

    fn draw_row(&mut self, row: &PreparedRow, widths: &[f32], style: TableStyle) {
        let mut x = self.geometry.margin;
        let top = self.cursor;
        let bottom = top - row.height;

        for (cell, width) in row.cells.iter().zip(widths) {
            self.current.ops.push(DrawOp::Rect {
                x,
                y: bottom,
                width: *width,
                height: row.height,
            });

            for (k, line) in cell.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                let baseline = top
                    - style.padding
                    - ASCENT * style.size
                    - k as f32 * line_height(style.size);
                self.current.ops.push(DrawOp::Text {
                    x: x + style.padding,
                    y: baseline,
                    style: row.style,
                    size: style.size,
                    text: line.clone(),
                });
            }

            x += width;
        }

        self.cursor = bottom;
    }

    /// Column widths: natural content widths, shrunk to fit the page
    ///
    /// Columns narrower than an even share of the remaining width keep their
    /// natural width; the rest split what is left in proportion to their
    /// natural widths.
    fn column_widths(&self, rows: &[Vec<String>], columns: usize, style: TableStyle) -> Vec<f32> {
        let mut natural = vec![2.0 * style.padding; columns];
        for (i, row) in rows.iter().enumerate() {
            let font = if i < style.header_rows {
                FontStyle::Bold
            } else {
                FontStyle::Regular
            };
            for (c, cell) in row.iter().enumerate() {
                let widest = cell
                    .lines()
                    .map(|line| text_width(line, font, style.size))
                    .fold(0.0_f32, f32::max);
                natural[c] = natural[c].max(widest + 2.0 * style.padding);
            }
        }

        let available = self.geometry.content_width();
        if natural.iter().sum::<f32>() <= available {
            return natural;
        }

        let mut fixed = vec![false; columns];
        loop {
            let fixed_width: f32 = (0..columns).filter(|&c| fixed[c]).map(|c| natural[c]).sum();
            let flexible = (0..columns).filter(|&c| !fixed[c]).count();
            if flexible == 0 {
                break;
            }
            let share = (available - fixed_width) / flexible as f32;

            let mut changed = false;
            for c in 0..columns {
                if !fixed[c] && natural[c] <= share {
                    fixed[c] = true;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        let fixed_width: f32 = (0..columns).filter(|&c| fixed[c]).map(|c| natural[c]).sum();
        let flexible_natural: f32 = (0..columns).filter(|&c| !fixed[c]).map(|c| natural[c]).sum();
        let scale = ((available - fixed_width) / flexible_natural).max(0.0);

        (0..columns)
            .map(|c| {
                if fixed[c] {
                    natural[c]
                } else {
                    (natural[c] * scale).max(2.0 * style.padding + 1.0)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BusinessInfo, LineItem};
    use rust_decimal::Decimal;

    fn manifest(item_count: usize) -> Manifest {
        let items = (1..=item_count)
            .map(|n| LineItem {
                name: format!("Product {}", n),
                catalog_no: format!("MSM-{:05}", n),
                quantity: 1,
                unit_price: Decimal::new(1000, 2),
            })
            .collect();

        Manifest {
            items,
            bill_to: "Jane Doe\n1 Elm St\nSpringfield".to_string(),
            ship_to: "John Doe\n2 Oak Ave\nShelbyville".to_string(),
            order_no: "00000005".to_string(),
            order_date: "2024-01-01".to_string(),
            business_info: BusinessInfo {
                name: "Magenta Stripe Media".to_string(),
                address: "PO Box 1\nSpringfield, USA".to_string(),
                signoff: "Thank you for your order!".to_string(),
            },
        }
    }

    fn layout(manifest: &Manifest, logo: Option<ImageSize>) -> Vec<PageLayout> {
        let totals = Totals::for_manifest(manifest, Decimal::new(200, 2)).unwrap();
        layout_packing_slip(manifest, &totals, logo, PageGeometry::letter()).unwrap()
    }

    fn all_texts(pages: &[PageLayout]) -> Vec<String> {
        pages
            .iter()
            .flat_map(|p| p.texts().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_letter_geometry() {
        let geometry = PageGeometry::letter();
        assert_eq!(geometry.width, 612.0);
        assert_eq!(geometry.height, 792.0);
        assert_eq!(geometry.margin, 36.0);
        assert_eq!(geometry.content_width(), 540.0);
    }

    #[test]
    fn test_sections_in_order() {
        let pages = layout(&manifest(1), None);
        assert_eq!(pages.len(), 1);

        let texts = all_texts(&pages);
        let position = |needle: &str| {
            texts
                .iter()
                .position(|t| t == needle)
                .unwrap_or_else(|| panic!("'{}' not found in {:?}", needle, texts))
        };

        let name = position("Magenta Stripe Media");
        let address = position("PO Box 1");
        let title = position("PACKING SLIP - ORDER # 00000005 - 2024-01-01");
        let bill_to = position("BILL TO:");
        let catalog_header = position("Catalog no.");
        let subtotal = position("SUBTOTAL:");
        let total = position("TOTAL:");
        let signoff = position("Thank you for your order!");

        assert!(name < address);
        assert!(address < title);
        assert!(title < bill_to);
        assert!(bill_to < catalog_header);
        assert!(catalog_header < subtotal);
        assert!(subtotal < total);
        assert!(total < signoff);
    }

    #[test]
    fn test_item_row_and_totals_values() {
        let texts = all_texts(&layout(&manifest(1), None));

        for expected in ["MSM-00001", "Product 1", "$10.00", "1", " $10.00", " $2.00", " $12.00"] {
            assert!(texts.iter().any(|t| t == expected), "missing '{}'", expected);
        }
    }

    #[test]
    fn test_address_lines_each_on_their_own_line() {
        let texts = all_texts(&layout(&manifest(1), None));

        assert!(texts.iter().any(|t| t == "Jane Doe"));
        assert!(texts.iter().any(|t| t == "1 Elm St"));
        assert!(texts.iter().any(|t| t == "Shelbyville"));
    }

    #[test]
    fn test_business_name_is_centered_and_bold() {
        let pages = layout(&manifest(1), None);
        let geometry = PageGeometry::letter();

        let (x, style, size) = pages[0]
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { x, style, size, text, .. } if text == "Magenta Stripe Media" => {
                    Some((*x, *style, *size))
                }
                _ => None,
            })
            .unwrap();

        let width = text_width("Magenta Stripe Media", FontStyle::Bold, HEADING_FONT_SIZE);
        assert_eq!(style, FontStyle::Bold);
        assert_eq!(size, HEADING_FONT_SIZE);
        assert!((x - (geometry.width - width) / 2.0).abs() < 0.01);
    }

    #[test]
    fn test_long_orders_paginate_and_repeat_header() {
        let pages = layout(&manifest(60), None);
        assert!(pages.len() > 1);

        for page in &pages[1..] {
            if page.texts().any(|t| t.starts_with("MSM-")) {
                assert!(page.texts().any(|t| t == "Catalog no."));
            }
        }

        let texts = all_texts(&pages);
        assert_eq!(texts.iter().filter(|t| t.starts_with("MSM-")).count(), 60);
        assert!(texts.iter().any(|t| t == "MSM-00060"));
    }

    #[test]
    fn test_content_stays_within_margins() {
        let geometry = PageGeometry::letter();
        for page in layout(&manifest(60), Some(ImageSize { width: 400, height: 200 })) {
            for op in &page.ops {
                let (x, y) = match op {
                    DrawOp::Text { x, y, .. } | DrawOp::Rect { x, y, .. } | DrawOp::Image { x, y, .. } => (*x, *y),
                };
                assert!(x >= geometry.margin - 0.01);
                assert!(y >= geometry.margin - 0.01);
                assert!(y <= geometry.top() + 0.01);
            }
        }
    }

    #[test]
    fn test_tall_address_splits_across_pages() {
        let mut order = manifest(1);
        order.bill_to = (1..=80)
            .map(|n| format!("Line {}", n))
            .collect::<Vec<_>>()
            .join("\n");
        let geometry = PageGeometry::letter();

        let pages = layout(&order, None);

        assert!(pages.len() > 1);
        for page in &pages {
            for op in &page.ops {
                let (y, what) = match op {
                    DrawOp::Text { y, text, .. } => (*y, text.as_str()),
                    DrawOp::Rect { y, .. } => (*y, "cell border"),
                    DrawOp::Image { y, .. } => (*y, "image"),
                };
                assert!(y >= geometry.margin - 0.01, "{} drawn at y={}", what, y);
            }
        }

        let texts = all_texts(&pages);
        let positions: Vec<usize> = (1..=80)
            .map(|n| {
                let line = format!("Line {}", n);
                assert_eq!(texts.iter().filter(|t| **t == line).count(), 1, "{}", line);
                texts.iter().position(|t| *t == line).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tall_item_row_repeats_header_on_each_part() {
        let mut order = manifest(1);
        order.items[0].name = "word ".repeat(2500);

        let pages = layout(&order, None);

        let parts: Vec<&PageLayout> = pages
            .iter()
            .filter(|page| page.texts().any(|t| t.starts_with("word")))
            .collect();
        assert!(parts.len() > 1);
        for page in parts {
            assert!(page.texts().any(|t| t == "Catalog no."));
        }
        assert_eq!(all_texts(&pages).iter().filter(|t| *t == "MSM-00001").count(), 1);
    }

    #[test]
    fn test_page_too_short_for_a_table_is_an_error() {
        let order = manifest(1);
        let totals = Totals::for_manifest(&order, Decimal::ZERO).unwrap();
        let geometry = PageGeometry {
            width: 612.0,
            height: 80.0,
            margin: 36.0,
        };

        let result = layout_packing_slip(&order, &totals, None, geometry);

        assert!(matches!(result, Err(SlipError::RenderError { .. })));
    }

    #[test]
    fn test_logo_is_centered_with_fixed_height() {
        let pages = layout(&manifest(1), Some(ImageSize { width: 200, height: 100 }));

        let image = pages[0].ops.iter().find_map(|op| match op {
            DrawOp::Image { x, y, width, height } => Some((*x, *y, *width, *height)),
            _ => None,
        });
        let (x, y, width, height) = image.expect("logo not drawn");

        assert!((height - inches(1.25)).abs() < 0.01);
        assert!((width - inches(2.5)).abs() < 0.01);
        assert!((x - (612.0 - width) / 2.0).abs() < 0.01);
        assert!((y + height - PageGeometry::letter().top()).abs() < 0.01);
    }

    #[test]
    fn test_no_logo_no_image_op() {
        let pages = layout(&manifest(1), None);
        assert!(!pages[0].ops.iter().any(|op| matches!(op, DrawOp::Image { .. })));
    }

    #[test]
    fn test_long_names_wrap_inside_table() {
        let mut order = manifest(1);
        order.items[0].name = "An extraordinarily long product title ".repeat(6);

        let pages = layout(&order, None);
        let name_lines = pages[0]
            .texts()
            .filter(|t| t.contains("extraordinarily"))
            .count();
        assert!(name_lines > 1);
    }

    #[test]
    fn test_empty_order_still_renders_header_row() {
        let texts = all_texts(&layout(&manifest(0), None));

        assert!(texts.iter().any(|t| t == "Amount"));
        assert!(texts.iter().any(|t| t == " $0.00"));
    }
}
