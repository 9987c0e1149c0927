use crate::color::ColorRGB;
use crate::point2d::Point2D;
use crate::rectangle::Rect;
use crate::scalar::Scalar;

/// Screen-space triangle. Positive [`Triangle::area`] means clockwise on a
/// y-down screen, which is the winding the rasterizer fills.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle<S> {
    pub v0: Point2D<S>,
    pub v1: Point2D<S>,
    pub v2: Point2D<S>,
}

impl<S: Scalar> Triangle<S> {
    pub fn new(v0: Point2D<S>, v1: Point2D<S>, v2: Point2D<S>) -> Self {
        Triangle { v0, v1, v2 }
    }

    /// Twice the signed area (the edge function of `v2` against `v0 -> v1`).
    pub fn area(&self) -> S::Wide {
        crate::raster::edge_cross(self.v0, self.v1, self.v2)
    }

    pub fn is_degenerate(&self) -> bool {
        self.area() == S::WIDE_ZERO
    }

    /// Integer pixel bounds: floor of the minimum, ceil of the maximum.
    pub fn bounding_box(&self) -> Rect {
        let (a, b, c) = (self.v0, self.v1, self.v2);
        Rect {
            min_x: a.x.min(b.x).min(c.x).floor_int(),
            min_y: a.y.min(b.y).min(c.y).floor_int(),
            max_x: a.x.max(b.x).max(c.x).ceil_int(),
            max_y: a.y.max(b.y).max(c.y).ceil_int(),
        }
    }

    /// Returns the triangle in fill winding together with its colors.
    ///
    /// Counter-clockwise input gets `v1`/`v2` swapped along with their
    /// colors, so every vertex keeps the color it was given.
    pub fn normalized(self, colors: [ColorRGB; 3]) -> (Triangle<S>, [ColorRGB; 3]) {
        if self.area() < S::WIDE_ZERO {
            let [c0, c1, c2] = colors;
            (Triangle { v0: self.v0, v1: self.v2, v2: self.v1 }, [c0, c2, c1])
        } else {
            (self, colors)
        }
    }
}
