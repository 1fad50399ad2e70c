//! Luminance masking.
//!
//! Converts a grayscale mask image into the alpha channel of a base
//! image: bright mask areas keep the base visible, dark areas make it
//! transparent. The mask's luminance is computed with ITU-R BT.709
//! coefficients and multiplied into the base's existing alpha. A mask of
//! different dimensions is resampled to the base size first.

use image::imageops;
use thiserror::Error;

use crate::render::FilterType;
use crate::RasterImage;

/// ITU-R BT.709 coefficient for red channel in luminance calculation.
const LUMINANCE_R: f32 = 0.2126;

/// ITU-R BT.709 coefficient for green channel in luminance calculation.
const LUMINANCE_G: f32 = 0.7152;

/// ITU-R BT.709 coefficient for blue channel in luminance calculation.
const LUMINANCE_B: f32 = 0.0722;

/// Errors that can occur when applying a mask.
#[derive(Debug, Error)]
pub enum MaskError {
    /// The base image has no pixels.
    #[error("Base image has no pixels")]
    EmptyBase,

    /// The mask image has no pixels.
    #[error("Mask image has no pixels")]
    EmptyMask,

    /// A pixel buffer doesn't match its declared dimensions.
    #[error("Pixel buffer does not match declared dimensions")]
    InvalidBuffer,
}

/// Calculate luminance from u8 RGB values (0 to 255).
#[inline]
fn luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMINANCE_R * f32::from(r) + LUMINANCE_G * f32::from(g) + LUMINANCE_B * f32::from(b);
    lum.clamp(0.0, 255.0).round() as u8
}

/// Use the mask's luminance as the base image's alpha channel.
///
/// Returns a new image; the base's color channels are untouched and its
/// alpha becomes `existing_alpha * mask_luminance / 255` per pixel.
///
/// # Example
///
/// ```
/// use pixkit_raster::{apply_luminance_mask, RasterImage};
///
/// let base = RasterImage::solid(2, 2, [200, 100, 50, 255]);
/// let mask = RasterImage::solid(2, 2, [0, 0, 0, 255]); // black mask
///
/// let masked = apply_luminance_mask(&base, &mask).unwrap();
/// assert_eq!(masked.pixels[3], 0); // fully transparent
/// ```
pub fn apply_luminance_mask(
    base: &RasterImage,
    mask: &RasterImage,
) -> Result<RasterImage, MaskError> {
    if base.is_empty() {
        return Err(MaskError::EmptyBase);
    }
    if mask.is_empty() {
        return Err(MaskError::EmptyMask);
    }

    // Resample the mask onto the base's pixel grid when sizes differ.
    let resized;
    let mask = if (mask.width, mask.height) == (base.width, base.height) {
        mask
    } else {
        let buffer = mask.to_rgba_image().ok_or(MaskError::InvalidBuffer)?;
        resized = RasterImage::from_rgba_image(imageops::resize(
            &buffer,
            base.width,
            base.height,
            FilterType::Bilinear.to_image_filter(),
        ));
        &resized
    };

    if base.pixels.len() != mask.pixels.len() {
        return Err(MaskError::InvalidBuffer);
    }

    let mut output = base.clone();
    for (pixel, mask_pixel) in output
        .pixels
        .chunks_exact_mut(4)
        .zip(mask.pixels.chunks_exact(4))
    {
        let luma = u32::from(luminance_u8(mask_pixel[0], mask_pixel[1], mask_pixel[2]));
        let alpha = u32::from(pixel[3]);
        pixel[3] = ((alpha * luma + 127) / 255) as u8;
    }

    Ok(output)
}
