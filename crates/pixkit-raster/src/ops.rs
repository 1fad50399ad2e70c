//! One-call resize and crop operations over the software renderer.
//!
//! These wrap the backend-generic operations from `pixkit-core` with a
//! default [`SoftwareRenderer`], so callers holding a [`RasterImage`] can
//! resize in one call without wiring a backend themselves. All
//! of them inherit the fallback contract: on failure the input image comes
//! back unchanged.

use pixkit_core::{backend, Size};

use crate::render::SoftwareRenderer;
use crate::RasterImage;

/// Crop to `target` with no scaling, anchored at the top-left.
pub fn crop_to_size(image: &RasterImage, target: Size, pixel_scale: f64) -> RasterImage {
    backend::crop_to_size(&SoftwareRenderer::default(), image.clone(), target, pixel_scale)
}

/// Scale to fit within `target`, preserving aspect ratio, centered.
pub fn scale_to_size(image: &RasterImage, target: Size, pixel_scale: f64) -> RasterImage {
    backend::scale_to_size(&SoftwareRenderer::default(), image.clone(), target, pixel_scale)
}

/// Scale to cover `target`, preserving aspect ratio, center-cropped.
pub fn scale_and_crop_to_size(image: &RasterImage, target: Size, pixel_scale: f64) -> RasterImage {
    backend::scale_and_crop_to_size(&SoftwareRenderer::default(), image.clone(), target, pixel_scale)
}

/// Scale so the width equals `target_width`, height proportional.
pub fn scale_to_width(image: &RasterImage, target_width: f64) -> RasterImage {
    backend::scale_to_width(&SoftwareRenderer::default(), image.clone(), target_width)
}

/// Scale so the height equals `target_height`, width proportional.
pub fn scale_to_height(image: &RasterImage, target_height: f64) -> RasterImage {
    backend::scale_to_height(&SoftwareRenderer::default(), image.clone(), target_height)
}

/// Scale so the shorter edge equals `target_dimension`.
pub fn scale_smallest_dimension_to_size(image: &RasterImage, target_dimension: f64) -> RasterImage {
    backend::scale_smallest_dimension_to_size(
        &SoftwareRenderer::default(),
        image.clone(),
        target_dimension,
    )
}
