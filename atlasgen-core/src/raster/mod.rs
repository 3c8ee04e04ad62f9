//! Shape rasterization into a [`Canvas`].
//!
//! Every primitive samples pixel `(x, y)` at its integer coordinate and decides
//! coverage with exact integer arithmetic, so output never depends on float
//! rounding at shape boundaries. Primitives overwrite; none of them blend.
//!
//! Coordinates are widened to `i64` before any extent is computed. Coverage that
//! falls off the canvas is never written; it is added to the canvas's rejected
//! write count instead.

pub mod prng;

use crate::canvas::{Canvas, Color};
use glam::IVec2;
pub use prng::SplitMix64;

/// Largest side, in pixels, of a shape that may leave the canvas and still be
/// tested pixel by pixel. A bigger shape that leaves the canvas is not drawn and
/// its whole bounding box counts as rejected.
pub const MAX_SHAPE_EXTENT: i64 = 4096;

// ============================================================================
// FILLED SHAPES
// ============================================================================

/// Fill the inclusive rectangle `min..=max`. Inverted corners draw nothing.
///
/// Only the on-canvas part is visited; the clipped area is counted
/// arithmetically, so rectangles of any size are cheap.
pub fn fill_rect(canvas: &mut Canvas, min: IVec2, max: IVec2, color: Color) {
    fill_box(canvas, Bounds::new(min, max), color);
}

/// Fill the ellipse inscribed in the inclusive box `min..=max`.
///
/// A pixel is inside when `((x-cx)/rx)^2 + ((y-cy)/ry)^2 < 1` (boundary excluded).
pub fn fill_ellipse(canvas: &mut Canvas, min: IVec2, max: IVec2, color: Color) {
    let bounds = Bounds::new(min, max);
    let Some(e) = EllipseTest::new(bounds) else { return };
    paint(canvas, bounds, color, |x, y| e.inside(x, y));
}

/// Fill a polygon with the even-odd rule. Fewer than three vertices draw nothing.
pub fn fill_polygon(canvas: &mut Canvas, points: &[IVec2], color: Color) {
    if points.len() < 3 {
        return;
    }
    let pts: Vec<(i64, i64)> = points.iter().map(|p| (p.x as i64, p.y as i64)).collect();
    let bounds = pts.iter().fold(Bounds::point(pts[0]), |b, &p| b.include(p));
    paint(canvas, bounds, color, |x, y| even_odd_contains(&pts, x, y));
}

fn even_odd_contains(points: &[(i64, i64)], x: i64, y: i64) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) {
            // x < xi + (y - yi) * (xj - xi) / (yj - yi), cross-multiplied
            let dy = (yj - yi) as i128;
            let lhs = (x - xi) as i128 * dy;
            let rhs = (y - yi) as i128 * (xj - xi) as i128;
            if (dy > 0 && lhs < rhs) || (dy < 0 && lhs > rhs) {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

// ============================================================================
// STROKES
// ============================================================================

/// Stroke a segment with flat caps: a pixel is drawn when its projection falls
/// on the segment (endpoints included) and it lies within `width / 2` of it.
pub fn stroke_line(canvas: &mut Canvas, from: IVec2, to: IVec2, width: u32, color: Color) {
    if width == 0 {
        return;
    }
    let w = width as i128;
    let (fx, fy) = (from.x as i64, from.y as i64);
    let (dx, dy) = (to.x as i64 - fx, to.y as i64 - fy);
    let (dx, dy) = (dx as i128, dy as i128);
    let len2 = dx * dx + dy * dy;
    let bounds = Bounds::point((fx, fy))
        .include((to.x as i64, to.y as i64))
        .grow(((width as i64) + 1) / 2);

    paint(canvas, bounds, color, |x, y| {
        let px = (x - fx) as i128;
        let py = (y - fy) as i128;
        if len2 == 0 {
            4 * (px * px + py * py) <= w * w
        } else {
            let along = px * dx + py * dy;
            let cross = px * dy - py * dx;
            (0..=len2).contains(&along) && 4 * cross * cross <= w * w * len2
        }
    });
}

/// Stroke part of the ellipse inscribed in `min..=max`, `width` pixels thick
/// measured inward.
///
/// Angles are degrees counter-clockwise from +x as seen on screen (y grows
/// downward, so 0..180 is the upper half). The range is inclusive; a span of
/// 360 or more draws the whole ring.
pub fn stroke_arc(
    canvas: &mut Canvas,
    min: IVec2,
    max: IVec2,
    start_deg: f32,
    end_deg: f32,
    width: u32,
    color: Color,
) {
    if width == 0 {
        return;
    }
    let bounds = Bounds::new(min, max);
    let Some(outer) = EllipseTest::new(bounds) else { return };
    let shrink = 2 * width as i64;
    let inner = EllipseTest::from_doubled(outer.a - shrink, outer.b - shrink, outer.sx, outer.sy);

    let start = start_deg as f64;
    let span = end_deg as f64 - start;
    let full = span >= 360.0;
    let span = span.rem_euclid(360.0);

    paint(canvas, bounds, color, |x, y| {
        if !outer.inside(x, y) || inner.as_ref().is_some_and(|e| e.inside(x, y)) {
            return false;
        }
        if full {
            return true;
        }
        let (dx, dy) = outer.offset(x, y);
        let angle = ((-dy) as f64).atan2(dx as f64).to_degrees();
        (angle - start).rem_euclid(360.0) <= span
    });
}

// ============================================================================
// TEXTURE DETAIL
// ============================================================================

/// Scatter `count` square speckles of side `size` inside the inclusive region
/// `min..=max`, drawing x, then y, then a palette index from `rng` for each.
pub fn scatter_speckles(
    canvas: &mut Canvas,
    min: IVec2,
    max: IVec2,
    count: u32,
    size: u32,
    rng: &mut SplitMix64,
    colors: &[Color],
) {
    if colors.is_empty() || size == 0 {
        return;
    }
    let region = Bounds::new(min, max);
    let size = size as i64;
    // number of valid top-left positions per axis
    let span_x = region.width() - size + 1;
    let span_y = region.height() - size + 1;
    if span_x <= 0 || span_y <= 0 {
        return;
    }
    for _ in 0..count {
        let x = region.x0 + rng.below(span_x as u64) as i64;
        let y = region.y0 + rng.below(span_y as u64) as i64;
        let color = colors[rng.below(colors.len() as u64) as usize];
        fill_box(canvas, Bounds { x0: x, y0: y, x1: x + size - 1, y1: y + size - 1 }, color);
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Inclusive pixel box in `i64`, so no manifest coordinate can overflow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

impl Bounds {
    fn new(min: IVec2, max: IVec2) -> Self {
        Self { x0: min.x as i64, y0: min.y as i64, x1: max.x as i64, y1: max.y as i64 }
    }

    fn point((x, y): (i64, i64)) -> Self {
        Self { x0: x, y0: y, x1: x, y1: y }
    }

    fn include(self, (x, y): (i64, i64)) -> Self {
        Self { x0: self.x0.min(x), y0: self.y0.min(y), x1: self.x1.max(x), y1: self.y1.max(y) }
    }

    fn grow(self, pad: i64) -> Self {
        Self { x0: self.x0 - pad, y0: self.y0 - pad, x1: self.x1 + pad, y1: self.y1 + pad }
    }

    fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    fn width(&self) -> i64 { self.x1 - self.x0 + 1 }
    fn height(&self) -> i64 { self.y1 - self.y0 + 1 }

    fn area(&self) -> u128 {
        if self.is_empty() {
            0
        } else {
            self.width() as u128 * self.height() as u128
        }
    }

    fn clip(&self, canvas: &Canvas) -> Self {
        Self {
            x0: self.x0.max(0),
            y0: self.y0.max(0),
            x1: self.x1.min(canvas.width() as i64 - 1),
            y1: self.y1.min(canvas.height() as i64 - 1),
        }
    }

    fn within(&self, canvas: &Canvas) -> bool {
        self.clip(canvas) == *self
    }
}

fn saturate(n: u128) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

/// Write every on-canvas pixel of `bounds` and count the rest as rejected.
fn fill_box(canvas: &mut Canvas, bounds: Bounds, color: Color) {
    if bounds.is_empty() {
        return;
    }
    let visible = bounds.clip(canvas);
    for y in visible.y0..=visible.y1 {
        for x in visible.x0..=visible.x1 {
            canvas.set_pixel(x as i32, y as i32, color);
        }
    }
    canvas.reject(saturate(bounds.area() - visible.area()));
}

/// Write every pixel of `bounds` that `inside` accepts. Off-canvas hits are
/// counted as rejected writes.
fn paint(canvas: &mut Canvas, bounds: Bounds, color: Color, inside: impl Fn(i64, i64) -> bool) {
    if bounds.is_empty() {
        return;
    }
    let contained = bounds.within(canvas);
    if !contained && (bounds.width() > MAX_SHAPE_EXTENT || bounds.height() > MAX_SHAPE_EXTENT) {
        log::debug!("{}x{} shape leaves the canvas; rejected whole", bounds.width(), bounds.height());
        canvas.reject(saturate(bounds.area()));
        return;
    }
    for y in bounds.y0..=bounds.y1 {
        for x in bounds.x0..=bounds.x1 {
            if !inside(x, y) {
                continue;
            }
            match (i32::try_from(x), i32::try_from(y)) {
                (Ok(x), Ok(y)) => canvas.set_pixel(x, y, color),
                _ => canvas.reject(1),
            }
        }
    }
}

/// Ellipse inside test in doubled coordinates: with `a = 2rx`, `b = 2ry`,
/// `u = 2x - sx`, `v = 2y - sy` the pixel is inside when `u²b² + v²a² < a²b²`.
struct EllipseTest {
    a: i64,
    b: i64,
    sx: i64,
    sy: i64,
}

impl EllipseTest {
    fn new(bounds: Bounds) -> Option<Self> {
        Self::from_doubled(
            bounds.x1 - bounds.x0,
            bounds.y1 - bounds.y0,
            bounds.x0 + bounds.x1,
            bounds.y0 + bounds.y1,
        )
    }

    fn from_doubled(a: i64, b: i64, sx: i64, sy: i64) -> Option<Self> {
        (a > 0 && b > 0).then_some(Self { a, b, sx, sy })
    }

    fn offset(&self, x: i64, y: i64) -> (i64, i64) {
        (2 * x - self.sx, 2 * y - self.sy)
    }

    fn inside(&self, x: i64, y: i64) -> bool {
        let (u, v) = self.offset(x, y);
        let (u, v) = (u as i128, v as i128);
        let (a2, b2) = ((self.a as i128).pow(2), (self.b as i128).pow(2));
        u * u * b2 + v * v * a2 < a2 * b2
    }
}
