//! Pixkit Raster - software adapters for the Pixkit geometry engine
//!
//! This crate provides the concrete, CPU-side collaborators the geometry
//! engine delegates to:
//!
//! - `render` - a software [`pixkit_core::RenderBackend`] built on the
//!   `image` crate's scaling and compositing
//! - `ops` - one-call resize/crop conveniences over the software renderer
//! - `codec` - PNG and JPEG encoding
//! - `gif` - animated GIF decoding into frames with display durations
//! - `orient` - EXIF orientation extraction and pixel normalization
//! - `mask` - luminance-mask-to-alpha compositing

use pixkit_core::Size;

pub mod codec;
pub mod gif;
pub mod mask;
pub mod ops;
pub mod orient;
pub mod render;

pub use codec::{encode_jpeg, encode_png, EncodeError};
pub use gif::{decode_gif, AnimatedImage, AnimationFrame, GifError};
pub use mask::{apply_luminance_mask, MaskError};
pub use ops::{
    crop_to_size, scale_and_crop_to_size, scale_smallest_dimension_to_size, scale_to_height,
    scale_to_size, scale_to_width,
};
pub use orient::{normalize_orientation, orientation_from_bytes, Orientation};
pub use render::{FilterType, SoftwareRenderer};

/// An in-memory image with RGBA pixel data.
///
/// This is the opaque image handle all adapters in this crate operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a new RasterImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a single-color image of the given dimensions.
    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for _ in 0..(width as usize) * (height as usize) {
            pixels.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a RasterImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbaImage for further processing.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Logical size as seen by the geometry engine.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Mean color over all pixels, or `None` for an empty image.
    pub fn average_color(&self) -> Option<[u8; 4]> {
        if self.is_empty() {
            return None;
        }

        let mut sums = [0u64; 4];
        for pixel in self.pixels.chunks_exact(4) {
            for (sum, &channel) in sums.iter_mut().zip(pixel) {
                *sum += u64::from(channel);
            }
        }

        let count = self.pixel_count();
        let mut avg = [0u8; 4];
        for (out, sum) in avg.iter_mut().zip(sums) {
            *out = ((sum + count / 2) / count) as u8;
        }
        Some(avg)
    }
}
