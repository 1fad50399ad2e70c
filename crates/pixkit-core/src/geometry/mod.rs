//! Pure geometry engine for resize and crop planning.
//!
//! This module computes, for a source image size and a requested target
//! size, which region of the source to read and where to draw it on the
//! output canvas. Three policies are supported:
//!
//! - [`plan_crop`] - draw unscaled at the origin, cropping overflow
//! - [`plan_fit`] - scale to fit entirely within the target (letterbox)
//! - [`plan_fit_and_crop`] - scale to cover the target, cropping overflow
//!
//! Everything here is a deterministic function of its inputs with no
//! shared state, so calls are safe from any number of threads.

mod plan;
mod scale;
mod types;

pub use plan::{plan, plan_crop, plan_fit, plan_fit_and_crop};
pub use scale::{scale_smallest_dimension, scale_to_height, scale_to_width};
pub use types::{GeometryError, Rect, ResizePlan, ResizePolicy, Size};
