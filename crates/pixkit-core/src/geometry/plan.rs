//! Resize plan computation for the three resize policies.
//!
//! Each planner is a pure function of `(source, target)` producing the
//! source-read rectangle, the destination-draw rectangle, and the output
//! canvas size. No pixel work happens here; a rendering backend consumes
//! the plan.

use super::{GeometryError, Rect, ResizePlan, ResizePolicy, Size};

/// Validate that a size is finite and non-negative.
fn check_size(size: Size) -> Result<(), GeometryError> {
    if !size.is_valid() {
        return Err(GeometryError::InvalidDimensions {
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}

/// Validate that a source size can act as a division denominator.
fn check_ratio_source(source: Size) -> Result<(), GeometryError> {
    if source.is_degenerate() {
        return Err(GeometryError::InvalidDimensions {
            width: source.width,
            height: source.height,
        });
    }
    Ok(())
}

/// Compute a plan for the given policy.
pub fn plan(policy: ResizePolicy, source: Size, target: Size) -> Result<ResizePlan, GeometryError> {
    match policy {
        ResizePolicy::Crop => plan_crop(source, target),
        ResizePolicy::Fit => plan_fit(source, target),
        ResizePolicy::FitAndCrop => plan_fit_and_crop(source, target),
    }
}

/// Fill the target canvas by cropping, with no scaling.
///
/// The whole source is drawn at native size into the top-left of the
/// canvas. Content past the canvas edges is cropped; a smaller source
/// leaves the rest of the canvas blank.
///
/// # Example
///
/// ```
/// use pixkit_core::geometry::{plan_crop, Rect, Size};
///
/// let plan = plan_crop(Size::new(50.0, 50.0), Size::new(200.0, 200.0)).unwrap();
/// assert_eq!(plan.dest_rect, Rect::new(0.0, 0.0, 50.0, 50.0));
/// assert_eq!(plan.canvas_size, Size::new(200.0, 200.0));
/// ```
pub fn plan_crop(source: Size, target: Size) -> Result<ResizePlan, GeometryError> {
    check_size(source)?;
    check_size(target)?;

    Ok(ResizePlan {
        source_rect: Rect::from_size(source),
        dest_rect: Rect::from_size(source),
        canvas_size: target,
    })
}

/// Scale to fit entirely within the target, preserving aspect ratio.
///
/// The smaller of the two axis scale factors is applied, so the whole
/// source fits without overflow; the non-binding axis is centered
/// (letterbox/pillarbox).
///
/// # Errors
///
/// Returns [`GeometryError::InvalidDimensions`] for non-finite or negative
/// input, and for a zero-width or zero-height source (the scale factors
/// would divide by zero).
///
/// # Example
///
/// ```
/// use pixkit_core::geometry::{plan_fit, Rect, Size};
///
/// let plan = plan_fit(Size::new(400.0, 200.0), Size::new(100.0, 100.0)).unwrap();
/// assert_eq!(plan.dest_rect, Rect::new(0.0, 25.0, 100.0, 50.0));
/// ```
pub fn plan_fit(source: Size, target: Size) -> Result<ResizePlan, GeometryError> {
    check_size(source)?;
    check_size(target)?;

    // Equal sizes need no scale factor and no offset.
    if source == target {
        return Ok(ResizePlan {
            source_rect: Rect::from_size(source),
            dest_rect: Rect::from_size(source),
            canvas_size: target,
        });
    }

    check_ratio_source(source)?;

    let width_factor = target.width / source.width;
    let height_factor = target.height / source.height;
    let scale_factor = width_factor.min(height_factor);

    let scaled_width = source.width * scale_factor;
    let scaled_height = source.height * scale_factor;

    // Center along the non-binding axis.
    let (offset_x, offset_y) = if width_factor < height_factor {
        (0.0, (target.height - scaled_height) / 2.0)
    } else if width_factor > height_factor {
        ((target.width - scaled_width) / 2.0, 0.0)
    } else {
        (0.0, 0.0)
    };

    Ok(ResizePlan {
        source_rect: Rect::from_size(source),
        dest_rect: Rect::new(offset_x, offset_y, scaled_width, scaled_height),
        canvas_size: target,
    })
}

/// Scale to fully cover the target, preserving aspect ratio and cropping
/// the overflow.
///
/// The larger of the two axis scale factors is applied, so the scaled
/// source overflows rather than underflows; the overflowing axis is
/// centered, which places the destination rectangle partly outside the
/// canvas. The renderer clips what falls beyond the canvas.
///
/// # Errors
///
/// Same conditions as [`plan_fit`].
///
/// # Example
///
/// ```
/// use pixkit_core::geometry::{plan_fit_and_crop, Rect, Size};
///
/// let plan = plan_fit_and_crop(Size::new(400.0, 200.0), Size::new(100.0, 100.0)).unwrap();
/// assert_eq!(plan.dest_rect, Rect::new(-50.0, 0.0, 200.0, 100.0));
/// ```
pub fn plan_fit_and_crop(source: Size, target: Size) -> Result<ResizePlan, GeometryError> {
    check_size(source)?;
    check_size(target)?;

    if source == target {
        return Ok(ResizePlan {
            source_rect: Rect::from_size(source),
            dest_rect: Rect::from_size(source),
            canvas_size: target,
        });
    }

    check_ratio_source(source)?;

    let width_factor = target.width / source.width;
    let height_factor = target.height / source.height;
    let scale_factor = width_factor.max(height_factor);

    let scaled_width = source.width * scale_factor;
    let scaled_height = source.height * scale_factor;

    // The binding axis is the one with the larger factor; the other axis
    // overflows and is centered.
    let (offset_x, offset_y) = if width_factor > height_factor {
        (0.0, (target.height - scaled_height) / 2.0)
    } else if width_factor < height_factor {
        ((target.width - scaled_width) / 2.0, 0.0)
    } else {
        (0.0, 0.0)
    };

    Ok(ResizePlan {
        source_rect: Rect::from_size(source),
        dest_rect: Rect::new(offset_x, offset_y, scaled_width, scaled_height),
        canvas_size: target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_crop_small_source() {
        let plan = plan_crop(Size::new(50.0, 50.0), Size::new(200.0, 200.0)).unwrap();

        assert_eq!(plan.source_rect, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(plan.dest_rect, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(plan.canvas_size, Size::new(200.0, 200.0));
    }

    #[test]
    fn test_plan_crop_large_source() {
        // Source bigger than the canvas: drawn at native size, the canvas
        // crops the rest.
        let plan = plan_crop(Size::new(400.0, 300.0), Size::new(100.0, 100.0)).unwrap();

        assert_eq!(plan.dest_rect, Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(plan.canvas_size, Size::new(100.0, 100.0));
    }

    #[test]
    fn test_plan_crop_accepts_zero_source() {
        // No ratio is involved, so a zero source is a valid degenerate plan.
        let plan = plan_crop(Size::new(0.0, 0.0), Size::new(10.0, 10.0)).unwrap();
        assert_eq!(plan.dest_rect, Rect::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_plan_fit_landscape_into_square() {
        let plan = plan_fit(Size::new(400.0, 200.0), Size::new(100.0, 100.0)).unwrap();

        // scale = min(100/400, 100/200) = 0.25
        assert_eq!(plan.dest_rect, Rect::new(0.0, 25.0, 100.0, 50.0));
        assert_eq!(plan.canvas_size, Size::new(100.0, 100.0));
        assert_eq!(plan.source_rect, Rect::new(0.0, 0.0, 400.0, 200.0));
    }

    #[test]
    fn test_plan_fit_portrait_into_square() {
        let plan = plan_fit(Size::new(200.0, 400.0), Size::new(100.0, 100.0)).unwrap();

        // Width is the non-binding axis, so it centers horizontally.
        assert_eq!(plan.dest_rect, Rect::new(25.0, 0.0, 50.0, 100.0));
    }

    #[test]
    fn test_plan_fit_identity() {
        let size = Size::new(123.0, 456.0);
        let plan = plan_fit(size, size).unwrap();

        assert_eq!(plan.dest_rect, Rect::from_size(size));
        assert_eq!(plan.canvas_size, size);
    }

    #[test]
    fn test_plan_fit_equal_aspect_no_offset() {
        // Same aspect ratio, different size: both factors equal, no offset.
        let plan = plan_fit(Size::new(200.0, 100.0), Size::new(400.0, 200.0)).unwrap();

        assert_eq!(plan.dest_rect, Rect::new(0.0, 0.0, 400.0, 200.0));
    }

    #[test]
    fn test_plan_fit_upscales() {
        let plan = plan_fit(Size::new(50.0, 50.0), Size::new(200.0, 100.0)).unwrap();

        // scale = min(4, 2) = 2, pillarboxed horizontally
        assert_eq!(plan.dest_rect, Rect::new(50.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_plan_fit_zero_target_is_valid() {
        let plan = plan_fit(Size::new(400.0, 200.0), Size::new(0.0, 0.0)).unwrap();

        assert_eq!(plan.canvas_size, Size::new(0.0, 0.0));
        assert_eq!(plan.dest_rect.size(), Size::new(0.0, 0.0));
    }

    #[test]
    fn test_plan_fit_zero_source_errors() {
        assert!(plan_fit(Size::new(0.0, 200.0), Size::new(100.0, 100.0)).is_err());
        assert!(plan_fit(Size::new(400.0, 0.0), Size::new(100.0, 100.0)).is_err());
    }

    #[test]
    fn test_plan_fit_rejects_non_finite() {
        assert!(plan_fit(Size::new(f64::NAN, 200.0), Size::new(100.0, 100.0)).is_err());
        assert!(plan_fit(Size::new(400.0, 200.0), Size::new(f64::INFINITY, 100.0)).is_err());
        assert!(plan_fit(Size::new(-400.0, 200.0), Size::new(100.0, 100.0)).is_err());
    }

    #[test]
    fn test_plan_fit_and_crop_landscape_into_square() {
        let plan = plan_fit_and_crop(Size::new(400.0, 200.0), Size::new(100.0, 100.0)).unwrap();

        // scale = max(0.25, 0.5) = 0.5; the width overflows and centers.
        assert_eq!(plan.dest_rect, Rect::new(-50.0, 0.0, 200.0, 100.0));
        assert_eq!(plan.canvas_size, Size::new(100.0, 100.0));
    }

    #[test]
    fn test_plan_fit_and_crop_portrait_into_square() {
        let plan = plan_fit_and_crop(Size::new(200.0, 400.0), Size::new(100.0, 100.0)).unwrap();

        assert_eq!(plan.dest_rect, Rect::new(0.0, -50.0, 100.0, 200.0));
    }

    #[test]
    fn test_plan_fit_and_crop_identity() {
        let size = Size::new(99.0, 77.0);
        let plan = plan_fit_and_crop(size, size).unwrap();

        assert_eq!(plan.dest_rect, Rect::from_size(size));
    }

    #[test]
    fn test_plan_fit_and_crop_zero_source_errors() {
        assert!(plan_fit_and_crop(Size::new(0.0, 200.0), Size::new(100.0, 100.0)).is_err());
        assert!(plan_fit_and_crop(Size::new(400.0, 0.0), Size::new(100.0, 100.0)).is_err());
    }

    #[test]
    fn test_plan_dispatch() {
        let source = Size::new(400.0, 200.0);
        let target = Size::new(100.0, 100.0);

        assert_eq!(
            plan(ResizePolicy::Crop, source, target).unwrap(),
            plan_crop(source, target).unwrap()
        );
        assert_eq!(
            plan(ResizePolicy::Fit, source, target).unwrap(),
            plan_fit(source, target).unwrap()
        );
        assert_eq!(
            plan(ResizePolicy::FitAndCrop, source, target).unwrap(),
            plan_fit_and_crop(source, target).unwrap()
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
