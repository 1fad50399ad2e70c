//! EXIF orientation extraction and pixel normalization.
//!
//! Cameras record sensor data in one fixed direction and tag the file with
//! one of 8 EXIF orientation values. [`orientation_from_bytes`] reads that
//! tag from encoded bytes, and [`normalize_orientation`] bakes the
//! corresponding rotation/mirror into the pixels so the result displays
//! "up" with no tag needed. Left/right orientations get a true quarter
//! turn.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::RasterImage;

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl Orientation {
    /// Returns true if this orientation swaps width and height dimensions.
    ///
    /// Rotations of 90° and 270° (and their flip variants Transpose/Transverse)
    /// swap the image dimensions.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Read the EXIF orientation tag from encoded image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or the tag
/// cannot be read.
pub fn orientation_from_bytes(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Bake an orientation into the pixels, returning an upright image.
///
/// An image tagged `Normal` (or one whose buffer cannot be interpreted)
/// comes back as a plain copy.
pub fn normalize_orientation(image: &RasterImage, orientation: Orientation) -> RasterImage {
    if orientation == Orientation::Normal {
        return image.clone();
    }

    let Some(rgba) = image.to_rgba_image() else {
        return image.clone();
    };

    let img = DynamicImage::ImageRgba8(rgba);
    let upright = match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    };

    RasterImage::from_rgba_image(upright.into_rgba8())
}
