use std::time::Duration;

use log::debug;

use crate::color::{ColorRGB, OPAQUE_BLACK};
use crate::point2d::Point2D;
use crate::raster::{triangle_fill, triangle_fill_par};
use crate::scalar::Scalar;
use crate::screen::ScreenSpace;
use crate::triangle::Triangle;

/// Rotating quad made of two triangles sharing the `v1 - v2` diagonal.
///
/// Both halves are shaded with the same three colors by vertex role, not by
/// which of the four corners ends up in that role.
#[derive(Debug, Clone)]
pub struct Scene<S> {
    pub vertices: [Point2D<S>; 4],
    pub colors: [ColorRGB; 3],
    /// Radians per second.
    pub angular_velocity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub angle: f32,
    pub pixels: usize,
}

impl<S: Scalar> Scene<S> {
    pub fn new(vertices: [Point2D<S>; 4], colors: [ColorRGB; 3], angular_velocity: f32) -> Self {
        Scene { vertices, colors, angular_velocity }
    }

    pub fn default_quad(angular_velocity: f32) -> Self {
        Scene::new(
            [
                Point2D::from_int(40, 40),
                Point2D::from_int(80, 40),
                Point2D::from_int(40, 80),
                Point2D::from_int(90, 90),
            ],
            [ColorRGB::RED, ColorRGB::GREEN, ColorRGB::BLUE],
            angular_velocity,
        )
    }

    pub fn angle(&self, elapsed: Duration) -> f32 {
        elapsed.as_millis() as f32 / 1000.0 * self.angular_velocity
    }

    /// The two triangles at `angle`, rotated about `pivot`.
    pub fn triangles(&self, pivot: Point2D<S>, angle: f32) -> [Triangle<S>; 2] {
        let [v0, v1, v2, v3] = self.vertices.map(|v| v.rotate(pivot, angle));
        [Triangle::new(v0, v1, v2), Triangle::new(v3, v2, v1)]
    }

    /// Clears `screen` and draws the frame for `elapsed` time since start.
    pub fn render(&self, screen: &mut ScreenSpace, elapsed: Duration, parallel: bool) -> FrameStats {
        screen.clear(OPAQUE_BLACK);

        let angle = self.angle(elapsed);
        let center = Point2D::from_f32(screen.width as f32 / 2.0, screen.height as f32 / 2.0);

        let pixels: usize = self
            .triangles(center, angle)
            .into_iter()
            .map(|tri| {
                if parallel {
                    triangle_fill_par(screen, tri, &self.colors)
                } else {
                    triangle_fill(screen, tri, &self.colors)
                }
            })
            .sum();

        debug!("frame at {elapsed:?}: angle {angle:.3} rad, {pixels} px");
        FrameStats { angle, pixels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::Fix16;

    #[test]
    fn angle_follows_elapsed_time() {
        let scene = Scene::<f32>::default_quad(0.2);
        assert_eq!(scene.angle(Duration::ZERO), 0.0);
        assert!((scene.angle(Duration::from_millis(2500)) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn halves_share_winding() {
        let scene = Scene::<Fix16>::default_quad(0.2);
        let pivot = Point2D::from_int(400, 300);
        for angle in [0.0, 0.7, 2.0, 4.5] {
            for tri in scene.triangles(pivot, angle) {
                assert!(tri.area() > 0, "angle {angle}: {tri:?}");
            }
        }
    }

    #[test]
    fn second_half_reuses_diagonal() {
        let scene = Scene::<f32>::default_quad(0.2);
        let [a, b] = scene.triangles(Point2D::new(0.0, 0.0), 0.0);
        assert_eq!((b.v1, b.v2), (a.v2, a.v1));
        assert_eq!(b.v0, scene.vertices[3]);
    }
}
