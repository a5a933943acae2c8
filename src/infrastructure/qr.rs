//! PNG QR code rendering for short links.

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

/// Default minimum edge length of rendered images, in pixels.
pub const DEFAULT_QR_DIMENSION: u32 = 256;

/// Errors that can occur while rendering a QR code.
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("Failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("Failed to write PNG: {0}")]
    Image(#[from] image::ImageError),
}

/// Stateless renderer turning a string into PNG bytes.
#[derive(Debug, Clone)]
pub struct QrRenderer {
    min_dimension: u32,
}

impl QrRenderer {
    pub fn new(min_dimension: u32) -> Self {
        Self { min_dimension }
    }

    /// Encodes `data` as a grayscale PNG QR code.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::Encode`] if `data` does not fit in a QR code and
    /// [`QrError::Image`] if PNG encoding fails.
    pub fn render_png(&self, data: &str) -> Result<Vec<u8>, QrError> {
        let code = QrCode::new(data.as_bytes())?;
        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(self.min_dimension, self.min_dimension)
            .build();

        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

impl Default for QrRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_QR_DIMENSION)
    }
}
