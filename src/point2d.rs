use std::ops::{Add, Sub};

use crate::scalar::Scalar;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point2D<S> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Point2D<S> {
    pub fn new(x: S, y: S) -> Self {
        Point2D { x, y }
    }

    pub fn from_f32(x: f32, y: f32) -> Self {
        Point2D { x: S::from_f32(x), y: S::from_f32(y) }
    }

    pub fn from_int(x: i32, y: i32) -> Self {
        Point2D { x: S::from_int(x), y: S::from_int(y) }
    }

    /// Center of the pixel at integer coordinates `(x, y)`.
    pub fn pixel_center(x: i32, y: i32) -> Self {
        Point2D { x: S::from_int(x) + S::HALF, y: S::from_int(y) + S::HALF }
    }

    pub fn to_f32(self) -> (f32, f32) {
        (self.x.to_f32(), self.y.to_f32())
    }

    /// Rotates `self` by `angle` radians around `pivot`.
    ///
    /// Uses the standard rotation matrix on y-down screen coordinates, so a
    /// positive angle turns clockwise as seen on screen.
    pub fn rotate(self, pivot: Point2D<S>, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let (sin, cos) = (S::from_f32(sin), S::from_f32(cos));
        let d = self - pivot;
        Point2D {
            x: d.x * cos - d.y * sin,
            y: d.x * sin + d.y * cos,
        } + pivot
    }
}

impl<S: Scalar> Add for Point2D<S> {
    type Output = Point2D<S>;
    fn add(self, other: Point2D<S>) -> Point2D<S> {
        Point2D { x: self.x + other.x, y: self.y + other.y }
    }
}

impl<S: Scalar> Sub for Point2D<S> {
    type Output = Point2D<S>;
    fn sub(self, other: Point2D<S>) -> Point2D<S> {
        Point2D { x: self.x - other.x, y: self.y - other.y }
    }
}

/// 2D cross product (z of the 3D cross), in the wide accumulator.
#[inline(always)]
pub fn cross2<S: Scalar>(a: Point2D<S>, b: Point2D<S>) -> S::Wide {
    S::wide_mul(a.x, b.y) - S::wide_mul(a.y, b.x)
}

/// Free-function form of [`Point2D::rotate`].
pub fn rotate<S: Scalar>(point: Point2D<S>, pivot: Point2D<S>, angle: f32) -> Point2D<S> {
    point.rotate(pivot, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::Fix16;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: (f32, f32), b: (f32, f32), tol: f32) -> bool {
        (a.0 - b.0).abs() <= tol && (a.1 - b.1).abs() <= tol
    }

    #[test]
    fn zero_angle_is_identity() {
        let p = Point2D::<f32>::new(13.0, -7.5);
        let pivot = Point2D::new(400.0, 300.0);
        assert_eq!(rotate(p, pivot, 0.0), p);

        let p = Point2D::<Fix16>::from_f32(13.0, -7.5);
        let pivot = Point2D::from_int(400, 300);
        assert_eq!(rotate(p, pivot, 0.0), p);
    }

    #[test]
    fn quarter_turn_about_pivot() {
        let p = Point2D::<f32>::new(2.0, 1.0);
        let pivot = Point2D::new(1.0, 1.0);
        let r = p.rotate(pivot, FRAC_PI_2);
        assert!(close(r.to_f32(), (1.0, 2.0), 1e-5), "{r:?}");
    }

    #[test]
    fn round_trip_returns_to_start() {
        let pivot = Point2D::<f32>::new(400.0, 300.0);
        for &angle in &[0.1f32, 1.0, PI, -2.5, 7.0] {
            let p = Point2D::<f32>::new(40.0, 80.0);
            let back = p.rotate(pivot, angle).rotate(pivot, -angle);
            assert!(close(back.to_f32(), p.to_f32(), 1e-3), "{angle}: {back:?}");
        }
    }

    #[test]
    fn fixed_round_trip_stays_close() {
        let pivot = Point2D::<Fix16>::from_int(400, 300);
        let p = Point2D::<Fix16>::from_int(90, 90);
        let back = p.rotate(pivot, 0.75).rotate(pivot, -0.75);
        assert!(close(back.to_f32(), (90.0, 90.0), 0.05), "{back:?}");
    }

    #[test]
    fn cross_sign() {
        let x = Point2D::<f32>::new(1.0, 0.0);
        let y = Point2D::<f32>::new(0.0, 1.0);
        assert_eq!(cross2(x, y), 1.0);
        assert_eq!(cross2(y, x), -1.0);

        let a = Point2D::<Fix16>::from_int(390, 0);
        let b = Point2D::<Fix16>::from_int(0, 390);
        assert_eq!(cross2(a, b), 152_100i64 << 32);
    }
}
