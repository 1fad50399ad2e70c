//! Pixkit Core - resize and crop geometry engine
//!
//! This crate computes the geometry for the three classic image resize
//! policies - crop, scale-to-fit, and scale-to-fill - as pure functions
//! producing a [`geometry::ResizePlan`]: which region of the source to
//! read, where to draw it, and how big the output canvas is. Actual pixel
//! work is delegated through the [`backend::RenderBackend`] trait to a
//! rendering adapter such as the software rasterizer in `pixkit-raster`.

pub mod backend;
pub mod geometry;

pub use backend::{
    crop_to_size, resize, scale_and_crop_to_size, scale_smallest_dimension_to_size,
    scale_to_height, scale_to_size, scale_to_width, RenderBackend,
};
pub use geometry::{GeometryError, Rect, ResizePlan, ResizePolicy, Size};
