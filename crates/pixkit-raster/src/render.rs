//! Software implementation of the rendering backend.
//!
//! Realizes a [`ResizePlan`] on the CPU: the planned source region is
//! cropped out, resampled to the planned destination size, and composited
//! onto a transparent canvas. A device pixel-density scale multiplies the
//! physical dimensions of everything drawn while leaving the plan's
//! logical coordinates untouched, matching how retina-style contexts
//! behave.

use image::imageops;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

use pixkit_core::{RenderBackend, ResizePlan, Size};

use crate::RasterImage;

/// Filter type for resampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> imageops::FilterType {
        match self {
            FilterType::Nearest => imageops::FilterType::Nearest,
            FilterType::Bilinear => imageops::FilterType::Triangle,
            FilterType::Lanczos3 => imageops::FilterType::Lanczos3,
        }
    }
}

/// CPU rendering backend over [`RasterImage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareRenderer {
    /// Resampling filter used when the destination size differs from the
    /// source region size.
    pub filter: FilterType,
}

impl SoftwareRenderer {
    /// Create a renderer with the given resampling filter.
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }
}

/// Convert a logical dimension to physical pixels under a density scale.
fn physical_extent(logical: f64, pixel_scale: f64) -> Option<u32> {
    let scaled = (logical * pixel_scale).round();
    if !scaled.is_finite() || scaled < 0.0 || scaled > f64::from(u32::MAX) {
        return None;
    }
    Some(scaled as u32)
}

/// Convert a logical offset to physical pixels under a density scale.
fn physical_offset(logical: f64, pixel_scale: f64) -> Option<i64> {
    let scaled = (logical * pixel_scale).round();
    if !scaled.is_finite() || scaled.abs() > i64::MAX as f64 {
        return None;
    }
    Some(scaled as i64)
}

impl RenderBackend for SoftwareRenderer {
    type Image = RasterImage;

    fn size(&self, image: &RasterImage) -> Size {
        image.size()
    }

    fn draw(&self, image: &RasterImage, plan: &ResizePlan, pixel_scale: f64) -> Option<RasterImage> {
        if !pixel_scale.is_finite() || pixel_scale < 1.0 {
            return None;
        }

        let canvas_w = physical_extent(plan.canvas_size.width, pixel_scale)?;
        let canvas_h = physical_extent(plan.canvas_size.height, pixel_scale)?;
        let mut canvas = RgbaImage::new(canvas_w, canvas_h);

        // A degenerate canvas has nothing to draw into.
        if canvas_w == 0 || canvas_h == 0 {
            return Some(RasterImage::from_rgba_image(canvas));
        }

        // Clamp the source-read region to the actual pixel bounds. Plans
        // produced by the geometry engine always read the whole source,
        // but the trait accepts arbitrary plans.
        let src_x = plan.source_rect.x.max(0.0).min(f64::from(image.width)).round() as u32;
        let src_y = plan.source_rect.y.max(0.0).min(f64::from(image.height)).round() as u32;
        let src_w = physical_extent(plan.source_rect.width, 1.0)?.min(image.width - src_x);
        let src_h = physical_extent(plan.source_rect.height, 1.0)?.min(image.height - src_y);

        let dest_w = physical_extent(plan.dest_rect.width, pixel_scale)?;
        let dest_h = physical_extent(plan.dest_rect.height, pixel_scale)?;
        let dest_x = physical_offset(plan.dest_rect.x, pixel_scale)?;
        let dest_y = physical_offset(plan.dest_rect.y, pixel_scale)?;

        // Degenerate source or destination: the canvas stays blank.
        if src_w == 0 || src_h == 0 || dest_w == 0 || dest_h == 0 {
            return Some(RasterImage::from_rgba_image(canvas));
        }

        let source = image.to_rgba_image()?;
        let region = imageops::crop_imm(&source, src_x, src_y, src_w, src_h).to_image();

        let scaled = if region.dimensions() == (dest_w, dest_h) {
            region
        } else {
            imageops::resize(&region, dest_w, dest_h, self.filter.to_image_filter())
        };

        // Negative offsets place the overflow outside the canvas; overlay
        // clips it.
        imageops::overlay(&mut canvas, &scaled, dest_x, dest_y);

        Some(RasterImage::from_rgba_image(canvas))
    }
}
