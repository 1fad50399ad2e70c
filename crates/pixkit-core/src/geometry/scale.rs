//! Aspect-preserving size derivation helpers.
//!
//! These compute the target size for a single-edge resize request; the
//! resulting size is then fed to the `Fit` planner, where it produces a
//! tight, offset-free plan.

use super::{GeometryError, Size};

fn check_edge(source: Size, edge: f64) -> Result<(), GeometryError> {
    if !source.is_valid() || source.is_degenerate() {
        return Err(GeometryError::InvalidDimensions {
            width: source.width,
            height: source.height,
        });
    }
    if !edge.is_finite() || edge < 0.0 {
        return Err(GeometryError::InvalidDimensions {
            width: edge,
            height: edge,
        });
    }
    Ok(())
}

/// Size with the width pinned to `target_width` and the height scaled
/// proportionally.
///
/// # Example
///
/// ```
/// use pixkit_core::geometry::{scale_to_width, Size};
///
/// let size = scale_to_width(Size::new(300.0, 150.0), 600.0).unwrap();
/// assert_eq!(size, Size::new(600.0, 300.0));
/// ```
pub fn scale_to_width(source: Size, target_width: f64) -> Result<Size, GeometryError> {
    check_edge(source, target_width)?;

    let aspect = source.height / source.width;
    Ok(Size::new(target_width, target_width * aspect))
}

/// Size with the height pinned to `target_height` and the width scaled
/// proportionally.
pub fn scale_to_height(source: Size, target_height: f64) -> Result<Size, GeometryError> {
    check_edge(source, target_height)?;

    let aspect = source.width / source.height;
    Ok(Size::new(target_height * aspect, target_height))
}

/// Size with the shorter source edge pinned to `target_dimension`.
///
/// A source wider than tall pins its height; a source taller than wide
/// pins its width. Square sources pin the height.
pub fn scale_smallest_dimension(source: Size, target_dimension: f64) -> Result<Size, GeometryError> {
    if source.width < source.height {
        scale_to_width(source, target_dimension)
    } else {
        scale_to_height(source, target_dimension)
    }
}
