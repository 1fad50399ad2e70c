//! Core value types for resize planning.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for geometry computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A dimension is negative or non-finite, or zero where a ratio is required.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
}

/// Pixel dimensions of a source or target image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True if both dimensions are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    /// True if either dimension is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// An axis-aligned rectangle, used for both source-read and
/// destination-draw regions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal origin.
    pub x: f64,
    /// Vertical origin.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of the given size anchored at the origin.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// The rectangle's dimensions as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Selects one of the three resize geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResizePolicy {
    /// Draw the source unscaled at the canvas origin; overflow is cropped,
    /// underflow leaves the canvas blank.
    Crop,
    /// Scale to fit entirely within the target, centered
    /// (letterbox/pillarbox).
    #[default]
    Fit,
    /// Scale to fully cover the target, centered; overflow is cropped.
    FitAndCrop,
}

/// The engine's output: read `source_rect` from the source image and draw it
/// into `dest_rect` on a freshly allocated canvas of `canvas_size`.
///
/// `canvas_size` always equals the requested target size. For the `Fit`
/// policy `dest_rect` lies within the canvas; for `Crop` and `FitAndCrop`
/// it may extend past the canvas edges, and the renderer clips the overflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizePlan {
    /// Region of the source image to read.
    pub source_rect: Rect,
    /// Region of the canvas to draw into.
    pub dest_rect: Rect,
    /// Dimensions of the output canvas.
    pub canvas_size: Size,
}
