//! PNG and JPEG encoding for export.
//!
//! Thin wrappers over the `image` crate's encoders. PNG keeps the alpha
//! channel; JPEG has none, so translucent pixels are flattened over white
//! before encoding. JPEG quality is expressed on the unit interval and
//! mapped onto the encoder's 1-100 scale.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::RasterImage;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Compression quality is outside the unit interval
    #[error("Invalid quality {0}: must be within 0.0..=1.0")]
    InvalidQuality(f32),

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

fn validate(image: &RasterImage) -> Result<(), EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected = (image.width as usize) * (image.height as usize) * 4;
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    Ok(())
}

/// Encode an image to PNG bytes.
///
/// # Example
///
/// ```
/// use pixkit_raster::{encode_png, RasterImage};
///
/// let image = RasterImage::solid(4, 4, [255, 0, 0, 255]);
/// let png = encode_png(&image).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode an image to JPEG bytes at the given compression quality.
///
/// `quality` runs from 0.0 (smallest file) to 1.0 (best fidelity); values
/// outside that range, or non-finite values, are rejected.
pub fn encode_jpeg(image: &RasterImage, quality: f32) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    if !quality.is_finite() || !(0.0..=1.0).contains(&quality) {
        return Err(EncodeError::InvalidQuality(quality));
    }

    // Map the unit interval to the encoder's 1-100 scale.
    let quality = ((quality * 100.0).round() as u8).clamp(1, 100);

    let rgb = flatten_over_white(image);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Composite RGBA pixels over a white background, dropping alpha.
fn flatten_over_white(image: &RasterImage) -> Vec<u8> {
    let mut rgb = Vec::with_capacity((image.width as usize) * (image.height as usize) * 3);
    for pixel in image.pixels.chunks_exact(4) {
        let alpha = u32::from(pixel[3]);
        for &channel in &pixel[0..3] {
            let c = u32::from(channel);
            rgb.push(((c * alpha + 255 * (255 - alpha) + 127) / 255) as u8);
        }
    }
    rgb
}
