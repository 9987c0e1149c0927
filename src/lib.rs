//! Minimal software triangle rasterizer.
//!
//! Triangles are filled with the edge-function method and shaded by
//! barycentric color interpolation. All geometry code is generic over
//! [`Scalar`], with native `f32` and 16.16 [`Fix16`] implementations.

pub mod color;
pub mod config;
pub mod display;
pub mod fixed;
pub mod point2d;
pub mod raster;
pub mod rectangle;
pub mod scalar;
pub mod scene;
pub mod screen;
pub mod triangle;

pub use color::ColorRGB;
pub use fixed::Fix16;
pub use point2d::Point2D;
pub use raster::{edge_cross, is_top_left, triangle_fill, triangle_fill_par};
pub use scalar::Scalar;
pub use scene::{FrameStats, Scene};
pub use screen::{PixelTarget, ScreenSpace};
pub use triangle::Triangle;
