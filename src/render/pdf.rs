//! PDF serialization
//!
//! Writes laid-out pages with `lopdf`. All pages share one resources
//! dictionary holding the two Helvetica faces and, when present, the logo
//! image XObject.

use super::layout::{DrawOp, PageGeometry, PageLayout};
use super::logo::LogoImage;
use super::metrics::{encode_win_ansi, FontStyle};
use crate::types::SlipError;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::io::Write;

/// Resource name of the logo image
const LOGO_RESOURCE: &str = "Im1";

/// Stroke width of table borders
const BORDER_WIDTH: f32 = 0.5;

/// Builds the PDF object graph one page at a time
pub struct PdfWriter {
    document: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    resources_id: ObjectId,
    geometry: PageGeometry,
    has_logo: bool,
}

impl PdfWriter {
    pub fn new(geometry: PageGeometry, logo: Option<&LogoImage>) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        let mut fonts = lopdf::Dictionary::new();
        for style in [FontStyle::Regular, FontStyle::Bold] {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => style.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(style.resource_name(), font_id);
        }

        let mut resources = dictionary! {
            "Font" => fonts,
        };
        if let Some(logo) = logo {
            let image_id = add_image(&mut document, logo);
            resources.set("XObject", dictionary! { LOGO_RESOURCE => image_id });
        }
        document
            .objects
            .insert(resources_id, Object::Dictionary(resources));

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![],
            "Count" => 0,
        };
        document.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        Self {
            document,
            pages_id,
            page_ids: Vec::new(),
            resources_id,
            geometry,
            has_logo: logo.is_some(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Append one page
    pub fn add_page(&mut self, page: &PageLayout) -> Result<(), SlipError> {
        let mut content = Content {
            operations: vec![Operation::new("w", vec![BORDER_WIDTH.into()])],
        };

        for op in &page.ops {
            match op {
                DrawOp::Text {
                    x,
                    y,
                    style,
                    size,
                    text,
                } => {
                    content.operations.extend([
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec![style.resource_name().into(), (*size).into()]),
                        Operation::new("Td", vec![(*x).into(), (*y).into()]),
                        Operation::new(
                            "Tj",
                            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
                        ),
                        Operation::new("ET", vec![]),
                    ]);
                }
                DrawOp::Rect {
                    x,
                    y,
                    width,
                    height,
                } => {
                    content.operations.extend([
                        Operation::new(
                            "re",
                            vec![(*x).into(), (*y).into(), (*width).into(), (*height).into()],
                        ),
                        Operation::new("S", vec![]),
                    ]);
                }
                DrawOp::Image {
                    x,
                    y,
                    width,
                    height,
                } => {
                    if !self.has_logo {
                        log::warn!("Layout placed an image but no logo was loaded");
                        continue;
                    }
                    content.operations.extend([
                        Operation::new("q", vec![]),
                        Operation::new(
                            "cm",
                            vec![
                                (*width).into(),
                                0.into(),
                                0.into(),
                                (*height).into(),
                                (*x).into(),
                                (*y).into(),
                            ],
                        ),
                        Operation::new("Do", vec![LOGO_RESOURCE.into()]),
                        Operation::new("Q", vec![]),
                    ]);
                }
            }
        }

        let content_id = self
            .document
            .add_object(Stream::new(lopdf::Dictionary::new(), content.encode()?));

        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                self.geometry.width.into(),
                self.geometry.height.into(),
            ],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);

        Ok(())
    }

    /// Fix up the page tree, compress streams, and write the file
    pub fn finish<W: Write>(mut self, writer: &mut W) -> Result<(), SlipError> {
        if self.page_ids.is_empty() {
            return Err(SlipError::render("document has no pages"));
        }

        if let Some(Object::Dictionary(pages)) = self.document.objects.get_mut(&self.pages_id) {
            let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
            pages.set("Kids", kids);
            pages.set("Count", self.page_ids.len() as i64);
        }

        self.document.compress();
        self.document.save_to(writer)?;
        Ok(())
    }
}

/// Add the logo as an RGB image XObject, with its alpha channel as soft mask
fn add_image(document: &mut Document, logo: &LogoImage) -> ObjectId {
    let mut image = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => i64::from(logo.width),
        "Height" => i64::from(logo.height),
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
    };

    if let Some(alpha) = &logo.alpha {
        let mask_id = document.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(logo.width),
                "Height" => i64::from(logo.height),
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
            },
            alpha.clone(),
        ));
        image.set("SMask", mask_id);
    }

    document.add_object(Stream::new(image, logo.rgb.clone()))
}
