//! Edge-function triangle rasterizer.
//!
//! Every pixel center inside the (clamped) bounding box is tested against the
//! three edge functions of the triangle. The edge values double as
//! barycentric weights for color interpolation. Pixels that fall exactly on
//! an edge belong to the triangle only if that edge is top-left, so two
//! triangles sharing an edge never both draw, nor both skip, a pixel on it.
//!
//! Edge values live in [`Scalar::Wide`]. Each edge is always evaluated from
//! the same endpoint, whichever triangle it belongs to, so the two triangles
//! on a shared edge see exactly negated values and the tie test is exact.

use log::trace;
use rayon::prelude::*;

use crate::color::{ColorRGB, interpolate};
use crate::point2d::{Point2D, cross2};
use crate::rectangle::Rect;
use crate::scalar::Scalar;
use crate::screen::{PixelTarget, ScreenSpace};
use crate::triangle::Triangle;

/// Signed area of the parallelogram spanned by `a -> b` and `a -> p`.
///
/// Positive when `p` lies to the right of `a -> b` on a y-down screen.
#[inline(always)]
pub fn edge_cross<S: Scalar>(a: Point2D<S>, b: Point2D<S>, p: Point2D<S>) -> S::Wide {
    cross2(b - a, p - a)
}

/// Top edge: exactly horizontal and pointing right. Left edge: pointing up
/// the screen (decreasing y).
#[inline(always)]
pub fn is_top_left<S: Scalar>(start: Point2D<S>, end: Point2D<S>) -> bool {
    let edge = end - start;
    let is_top_edge = edge.y == S::ZERO && edge.x > S::ZERO;
    let is_left_edge = edge.y < S::ZERO;
    is_top_edge || is_left_edge
}

#[inline(always)]
fn precedes<S: Scalar>(a: Point2D<S>, b: Point2D<S>) -> bool {
    a.x < b.x || (a.x == b.x && a.y < b.y)
}

/// [`edge_cross`] evaluated from the lower endpoint of `a`, `b`.
#[inline(always)]
fn oriented_edge<S: Scalar>(a: Point2D<S>, b: Point2D<S>, p: Point2D<S>) -> S::Wide {
    if precedes(b, a) { -edge_cross(b, a, p) } else { edge_cross(a, b, p) }
}

#[inline(always)]
fn add3<W: Copy + std::ops::Add<Output = W>>(a: [W; 3], b: [W; 3]) -> [W; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Per-triangle constants shared by the sequential and parallel fills.
struct EdgeSetup<S: Scalar> {
    tri: Triangle<S>,
    colors: [ColorRGB; 3],
    area: S::Wide,
    top_left: [bool; 3],
    col_step: [S::Wide; 3],
    row_step: [S::Wide; 3],
    bbox: Rect,
}

impl<S: Scalar> EdgeSetup<S> {
    /// `None` when the triangle is degenerate or entirely off the target.
    fn new(tri: Triangle<S>, colors: &[ColorRGB; 3], width: u32, height: u32) -> Option<Self> {
        let (tri, colors) = tri.normalized(*colors);
        let area = tri.area();
        if area == S::WIDE_ZERO {
            trace!("skipping degenerate triangle {tri:?}");
            return None;
        }

        let bbox = tri.bounding_box().clamp_to(width, height);
        if bbox.is_empty() {
            return None;
        }

        let Triangle { v0, v1, v2 } = tri;
        let step = |d: S| S::wide_mul(d, S::ONE);
        Some(EdgeSetup {
            tri,
            colors,
            area,
            top_left: [is_top_left(v1, v2), is_top_left(v2, v0), is_top_left(v0, v1)],
            col_step: [step(v1.y - v2.y), step(v2.y - v0.y), step(v0.y - v1.y)],
            row_step: [step(v2.x - v1.x), step(v0.x - v2.x), step(v1.x - v0.x)],
            bbox,
        })
    }

    /// Weights `w0, w1, w2` at `p`; `w_i` is the edge opposite `v_i`.
    fn weights_at(&self, p: Point2D<S>) -> [S::Wide; 3] {
        let Triangle { v0, v1, v2 } = self.tri;
        [oriented_edge(v1, v2, p), oriented_edge(v2, v0, p), oriented_edge(v0, v1, p)]
    }

    /// Inside test. A zero weight counts only on a top-left edge, which is
    /// a bias of one unit below the weight's own precision.
    #[inline(always)]
    fn covers(&self, w: [S::Wide; 3]) -> bool {
        (0..3).all(|i| w[i] > S::WIDE_ZERO || (w[i] == S::WIDE_ZERO && self.top_left[i]))
    }

    fn shade(&self, w: [S::Wide; 3]) -> u32 {
        let alpha = S::wide_ratio(w[0], self.area);
        let beta = S::wide_ratio(w[1], self.area);
        let gamma = S::wide_ratio(w[2], self.area);
        interpolate(&self.colors, alpha, beta, gamma)
    }

    /// Walks scanline `y` starting from the weights at its first pixel
    /// center, calling `plot(x, color)` for each covered pixel.
    ///
    /// Columns are stepped only where stepping is exact; otherwise every
    /// pixel is evaluated directly, so coverage never depends on which
    /// path reached the row.
    fn scan_row(&self, y: i32, w_start: [S::Wide; 3], mut plot: impl FnMut(i32, u32)) -> usize {
        let mut written = 0;
        let mut w = w_start;
        for x in self.bbox.min_x..=self.bbox.max_x {
            if !S::EXACT_STEPPING && x != self.bbox.min_x {
                w = self.weights_at(Point2D::pixel_center(x, y));
            }
            if self.covers(w) {
                plot(x, self.shade(w));
                written += 1;
            }
            if S::EXACT_STEPPING {
                w = add3(w, self.col_step);
            }
        }
        written
    }

    fn row_start(&self, y: i32) -> [S::Wide; 3] {
        self.weights_at(Point2D::pixel_center(self.bbox.min_x, y))
    }
}

/// Rasterizes `tri` into `target`, blending `colors[i]` at vertex `v_i`.
///
/// Weights are evaluated once at the first pixel center of the bounding box
/// and then stepped by constant per-column and per-row deltas when `S` steps
/// exactly, and evaluated per pixel otherwise. Returns the number of pixels
/// written.
pub fn triangle_fill<S, T>(target: &mut T, tri: Triangle<S>, colors: &[ColorRGB; 3]) -> usize
where
    S: Scalar,
    T: PixelTarget + ?Sized,
{
    let Some(setup) = EdgeSetup::new(tri, colors, target.width(), target.height()) else {
        return 0;
    };
    let bbox = setup.bbox;

    let mut written = 0;
    let mut w_row = setup.row_start(bbox.min_y);
    for y in bbox.min_y..=bbox.max_y {
        if !S::EXACT_STEPPING {
            w_row = setup.row_start(y);
        }
        written += setup.scan_row(y, w_row, |x, color| target.set_pixel(x as u32, y as u32, color));
        w_row = add3(w_row, setup.row_step);
    }
    written
}

/// Same coverage and colors as [`triangle_fill`], with scanlines spread over
/// the rayon pool. Each row evaluates its starting weights directly, so the
/// result is independent of scheduling.
pub fn triangle_fill_par<S: Scalar>(
    screen: &mut ScreenSpace,
    tri: Triangle<S>,
    colors: &[ColorRGB; 3],
) -> usize {
    let Some(setup) = EdgeSetup::new(tri, colors, screen.width, screen.height) else {
        return 0;
    };
    let bbox = setup.bbox;

    screen
        .par_rows_mut()
        .enumerate()
        .skip(bbox.min_y as usize)
        .take(bbox.height() as usize)
        .map(|(y, row)| {
            let y = y as i32;
            setup.scan_row(y, setup.row_start(y), |x, color| row[x as usize] = color.to_le())
        })
        .sum()
}
