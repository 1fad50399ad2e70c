//! Rendering backend seam and backend-generic resize operations.
//!
//! The geometry engine never touches pixels. All drawing goes through the
//! [`RenderBackend`] trait, which a concrete adapter (software rasterizer,
//! GPU surface, bound native library) implements for its own image handle
//! type. The operations in this module compute a plan and delegate to the
//! backend; if the backend fails, or the geometry is invalid, the caller
//! gets the original image back unchanged.

use crate::geometry::{self, ResizePlan, ResizePolicy, Size};

/// A drawing backend that can realize a [`ResizePlan`] against its own
/// image handle type.
pub trait RenderBackend {
    /// Opaque image handle the backend draws from and into.
    type Image;

    /// Logical size of an image, in the same units the planner uses.
    fn size(&self, image: &Self::Image) -> Size;

    /// Draw `plan.source_rect` of `image` into `plan.dest_rect` on a fresh
    /// canvas of `plan.canvas_size`.
    ///
    /// `pixel_scale` (>= 1) multiplies the physical pixel dimensions of the
    /// canvas uniformly; the logical rectangle math is unaffected. Returns
    /// `None` when the backend cannot produce the canvas.
    fn draw(&self, image: &Self::Image, plan: &ResizePlan, pixel_scale: f64)
        -> Option<Self::Image>;
}

/// Resize `image` to `target` under the given policy.
///
/// On any failure - invalid geometry or a backend that declines to draw -
/// the original image is returned unchanged, so the result is never worse
/// than the input.
pub fn resize<B: RenderBackend>(
    backend: &B,
    image: B::Image,
    target: Size,
    policy: ResizePolicy,
    pixel_scale: f64,
) -> B::Image {
    let source = backend.size(&image);
    match geometry::plan(policy, source, target) {
        Ok(plan) => backend.draw(&image, &plan, pixel_scale).unwrap_or(image),
        Err(_) => image,
    }
}

/// Crop to `target` with no scaling ([`ResizePolicy::Crop`]).
pub fn crop_to_size<B: RenderBackend>(
    backend: &B,
    image: B::Image,
    target: Size,
    pixel_scale: f64,
) -> B::Image {
    resize(backend, image, target, ResizePolicy::Crop, pixel_scale)
}

/// Scale to fit within `target`, letterboxed ([`ResizePolicy::Fit`]).
pub fn scale_to_size<B: RenderBackend>(
    backend: &B,
    image: B::Image,
    target: Size,
    pixel_scale: f64,
) -> B::Image {
    resize(backend, image, target, ResizePolicy::Fit, pixel_scale)
}

/// Scale to cover `target`, center-cropped ([`ResizePolicy::FitAndCrop`]).
pub fn scale_and_crop_to_size<B: RenderBackend>(
    backend: &B,
    image: B::Image,
    target: Size,
    pixel_scale: f64,
) -> B::Image {
    resize(backend, image, target, ResizePolicy::FitAndCrop, pixel_scale)
}

/// Scale so the width equals `target_width`, height proportional.
pub fn scale_to_width<B: RenderBackend>(backend: &B, image: B::Image, target_width: f64) -> B::Image {
    let source = backend.size(&image);
    match geometry::scale_to_width(source, target_width) {
        Ok(dest) => scale_to_size(backend, image, dest, 1.0),
        Err(_) => image,
    }
}

/// Scale so the height equals `target_height`, width proportional.
pub fn scale_to_height<B: RenderBackend>(
    backend: &B,
    image: B::Image,
    target_height: f64,
) -> B::Image {
    let source = backend.size(&image);
    match geometry::scale_to_height(source, target_height) {
        Ok(dest) => scale_to_size(backend, image, dest, 1.0),
        Err(_) => image,
    }
}

/// Scale so the shorter edge equals `target_dimension`, the other edge
/// proportional.
pub fn scale_smallest_dimension_to_size<B: RenderBackend>(
    backend: &B,
    image: B::Image,
    target_dimension: f64,
) -> B::Image {
    let source = backend.size(&image);
    match geometry::scale_smallest_dimension(source, target_dimension) {
        Ok(dest) => scale_to_size(backend, image, dest, 1.0),
        Err(_) => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use std::cell::RefCell;

    /// Minimal test image: just a size tag.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct StubImage(Size);

    /// Backend that records the plan it was handed and either draws a
    /// canvas-sized stub image or refuses.
    struct StubBackend {
        fail: bool,
        last_plan: RefCell<Option<ResizePlan>>,
        last_scale: RefCell<Option<f64>>,
    }

    impl StubBackend {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                last_plan: RefCell::new(None),
                last_scale: RefCell::new(None),
            }
        }
    }

    impl RenderBackend for StubBackend {
        type Image = StubImage;

        fn size(&self, image: &StubImage) -> Size {
            image.0
        }

        fn draw(&self, _image: &StubImage, plan: &ResizePlan, pixel_scale: f64) -> Option<StubImage> {
            *self.last_plan.borrow_mut() = Some(*plan);
            *self.last_scale.borrow_mut() = Some(pixel_scale);
            if self.fail {
                None
            } else {
                Some(StubImage(plan.canvas_size))
            }
        }
    }

    #[test]
    fn test_scale_to_size_draws_canvas() {
        let backend = StubBackend::new(false);
        let image = StubImage(Size::new(400.0, 200.0));

        let out = scale_to_size(&backend, image, Size::new(100.0, 100.0), 1.0);

        assert_eq!(out.0, Size::new(100.0, 100.0));
        let plan = backend.last_plan.borrow().unwrap();
        assert_eq!(plan.dest_rect, Rect::new(0.0, 25.0, 100.0, 50.0));
    }

    #[test]
    fn test_backend_failure_returns_original() {
        let backend = StubBackend::new(true);
        let image = StubImage(Size::new(400.0, 200.0));

        let out = scale_to_size(&backend, image, Size::new(100.0, 100.0), 1.0);

        assert_eq!(out, image);
    }

    #[test]
    fn test_invalid_geometry_returns_original() {
        let backend = StubBackend::new(false);
        let image = StubImage(Size::new(0.0, 200.0));

        let out = scale_to_size(&backend, image, Size::new(100.0, 100.0), 1.0);

        // The planner never ran, so the backend saw no plan.
        assert_eq!(out, image);
        assert!(backend.last_plan.borrow().is_none());
    }

    #[test]
    fn test_crop_passes_crop_plan() {
        let backend = StubBackend::new(false);
        let image = StubImage(Size::new(50.0, 50.0));

        crop_to_size(&backend, image, Size::new(200.0, 200.0), 1.0);

        let plan = backend.last_plan.borrow().unwrap();
        assert_eq!(plan.dest_rect, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(plan.canvas_size, Size::new(200.0, 200.0));
    }

    #[test]
    fn test_pixel_scale_forwarded() {
        let backend = StubBackend::new(false);
        let image = StubImage(Size::new(50.0, 50.0));

        scale_and_crop_to_size(&backend, image, Size::new(20.0, 20.0), 3.0);

        assert_eq!(*backend.last_scale.borrow(), Some(3.0));
    }

    #[test]
    fn test_scale_to_width_derives_target() {
        let backend = StubBackend::new(false);
        let image = StubImage(Size::new(300.0, 150.0));

        let out = scale_to_width(&backend, image, 600.0);

        assert_eq!(out.0, Size::new(600.0, 300.0));
        // Edge-derived targets keep the source aspect, so the fit plan has
        // no letterbox offset.
        let plan = backend.last_plan.borrow().unwrap();
        assert_eq!(plan.dest_rect, Rect::new(0.0, 0.0, 600.0, 300.0));
    }

    #[test]
    fn test_scale_smallest_dimension_picks_short_edge() {
        let backend = StubBackend::new(false);

        let landscape = StubImage(Size::new(400.0, 200.0));
        let out = scale_smallest_dimension_to_size(&backend, landscape, 100.0);
        assert_eq!(out.0, Size::new(200.0, 100.0));

        let portrait = StubImage(Size::new(200.0, 400.0));
        let out = scale_smallest_dimension_to_size(&backend, portrait, 100.0);
        assert_eq!(out.0, Size::new(100.0, 200.0));
    }

    #[test]
    fn test_scale_to_width_invalid_source_returns_original() {
        let backend = StubBackend::new(false);
        let image = StubImage(Size::new(0.0, 100.0));

        let out = scale_to_width(&backend, image, 50.0);

        assert_eq!(out, image);
    }
}
