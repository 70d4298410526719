//! Logo image decoding
//!
//! The logo is decoded once into 8-bit RGB samples plus an optional 8-bit
//! alpha channel, which is what the PDF image XObject and its soft mask need.

use crate::types::SlipError;
use std::path::Path;

use super::layout::ImageSize;

/// Decoded logo pixels
#[derive(Debug, Clone, PartialEq)]
pub struct LogoImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB samples, three bytes per pixel
    pub rgb: Vec<u8>,
    /// Row-major alpha samples; `None` when the image is fully opaque
    pub alpha: Option<Vec<u8>>,
}

impl LogoImage {
    /// Decode a PNG or JPEG file
    ///
    /// # Errors
    ///
    /// Returns [`SlipError::FileNotFound`] if the file does not exist and
    /// [`SlipError::RenderError`] if it cannot be decoded.
    pub fn load(path: &Path) -> Result<Self, SlipError> {
        let bytes = std::fs::read(path).map_err(|e| SlipError::open_failed(path, e))?;
        log::debug!("Decoding logo {} ({} bytes)", path.display(), bytes.len());
        let image = image::load_from_memory(&bytes)?;

        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(SlipError::render(format!(
                "Logo '{}' has no pixels",
                path.display()
            )));
        }

        let pixels = rgba.as_raw();
        let mut rgb = Vec::with_capacity(pixels.len() / 4 * 3);
        let mut alpha = Vec::with_capacity(pixels.len() / 4);
        for px in pixels.chunks_exact(4) {
            rgb.extend_from_slice(&px[..3]);
            alpha.push(px[3]);
        }
        let alpha = if alpha.iter().all(|&a| a == u8::MAX) {
            None
        } else {
            Some(alpha)
        };

        log::info!(
            "Loaded logo {} ({}x{}, {})",
            path.display(),
            width,
            height,
            if alpha.is_some() { "transparent" } else { "opaque" }
        );

        Ok(Self {
            width,
            height,
            rgb,
            alpha,
        })
    }

    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_png(dir: &TempDir, name: &str, alpha: u8) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let image = RgbaImage::from_fn(4, 2, |x, _| Rgba([x as u8 * 60, 0, 200, alpha]));
        image.save(&path).unwrap();
        path
    }

    #[test]
    fn test_load_transparent_png() {
        let dir = TempDir::new().unwrap();
        let path = write_png(&dir, "logo.png", 128);

        let logo = LogoImage::load(&path).unwrap();

        assert_eq!(logo.size(), ImageSize { width: 4, height: 2 });
        assert_eq!(logo.rgb.len(), 4 * 2 * 3);
        assert_eq!(&logo.rgb[3..6], &[60, 0, 200]);
        assert_eq!(logo.alpha.as_deref().map(<[u8]>::len), Some(8));
    }

    #[test]
    fn test_opaque_png_has_no_mask() {
        let dir = TempDir::new().unwrap();
        let path = write_png(&dir, "opaque.png", 255);

        let logo = LogoImage::load(&path).unwrap();

        assert!(logo.alpha.is_none());
    }

    #[test]
    fn test_missing_logo() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.png");

        let result = LogoImage::load(&path);

        assert_eq!(result, Err(SlipError::file_not_found(&path)));
    }

    #[test]
    fn test_undecodable_logo() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();

        let result = LogoImage::load(&path);

        match result {
            Err(SlipError::RenderError { message }) => assert!(message.starts_with("logo image: ")),
            other => panic!("Expected RenderError, got {:?}", other),
        }
    }
}
