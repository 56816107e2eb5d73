// ============================================================================
// SCAN FILL — solid/pattern/gradient region fills (rect, ellipse, polygon)
// ============================================================================
//
// Every fill routine is paint-agnostic: the shape code only emits horizontal
// runs and hands each pixel to a pre-resolved `PixelSource`.

use crate::bitmap::Bitmap;
use crate::geom::{IntPoint, IntRect};
use crate::paint::{Paint, PixelSource};

use super::stroke;

/// Write the run `[x0, x1] × {y}`, clipped to the destination.
pub(crate) fn hspan(dst: &mut Bitmap, x0: i32, x1: i32, y: i32, src: &PixelSource) {
    if y < 0 || y >= dst.height() as i32 {
        return;
    }
    let (mut x0, mut x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    x0 = x0.max(0);
    x1 = x1.min(dst.width() as i32 - 1);
    for x in x0..=x1 {
        src.write(dst, x, y);
    }
}

/// Fill an axis-aligned rectangle.  Zero-area rects no-op.
pub fn fill_rect(dst: &mut Bitmap, rect: IntRect, paint: &Paint) {
    let rect = rect.normalized();
    if rect.is_empty() {
        return;
    }
    let src = PixelSource::resolve(paint, dst, rect);
    fill_rect_src(dst, rect, &src);
}

pub(crate) fn fill_rect_src(dst: &mut Bitmap, rect: IntRect, src: &PixelSource) {
    for y in rect.y..rect.bottom() {
        hspan(dst, rect.x, rect.right() - 1, y, src);
    }
}

// ---------------------------------------------------------------------------
//  Ellipses
// ---------------------------------------------------------------------------

/// The integer frame of an ellipse inscribed in a rect.  Even widths/heights
/// split the center into a left/right (top/bottom) pair so the shape stays
/// symmetric and spans the full rect.
pub(crate) struct EllipseFrame {
    pub a: i64,
    pub b: i64,
    pub cxl: i32,
    pub cxr: i32,
    pub cyt: i32,
    pub cyb: i32,
}

impl EllipseFrame {
    /// `rect` must be normalized and non-empty.
    pub(crate) fn from_rect(rect: IntRect) -> Self {
        let a = ((rect.w - 1) / 2) as i64;
        let b = ((rect.h - 1) / 2) as i64;
        Self {
            a,
            b,
            cxl: rect.x + a as i32,
            cxr: rect.x + rect.w - 1 - a as i32,
            cyt: rect.y + b as i32,
            cyb: rect.y + rect.h - 1 - b as i32,
        }
    }
}

/// Standard two-region midpoint ellipse sweep over the first quadrant
/// (decision variables scaled by 4 to stay in integers).  Calls `plot(x, y)`
/// once per stepper iteration; flat regions revisit a `y` with growing `x`.
pub(crate) fn ellipse_sweep(a: i64, b: i64, plot: &mut dyn FnMut(i64, i64)) {
    debug_assert!(a > 0 && b > 0);
    let a2 = a * a;
    let b2 = b * b;

    // Region 1: |slope| < 1, x advances every step
    let mut x = 0i64;
    let mut y = b;
    let mut dx = 0i64;
    let mut dy = 2 * a2 * y;
    let mut d1 = 4 * b2 - 4 * a2 * b + a2;
    while dx < dy {
        plot(x, y);
        if d1 < 0 {
            x += 1;
            dx += 2 * b2;
            d1 += 4 * (dx + b2);
        } else {
            x += 1;
            y -= 1;
            dx += 2 * b2;
            dy -= 2 * a2;
            d1 += 4 * (dx - dy + b2);
        }
    }

    // Region 2: y advances every step
    let mut d2 = b2 * (2 * x + 1) * (2 * x + 1) + 4 * a2 * (y - 1) * (y - 1) - 4 * a2 * b2;
    while y >= 0 {
        plot(x, y);
        if d2 > 0 {
            y -= 1;
            dy -= 2 * a2;
            d2 += 4 * (a2 - dy);
        } else {
            y -= 1;
            x += 1;
            dx += 2 * b2;
            dy -= 2 * a2;
            d2 += 4 * (dx - dy + a2);
        }
    }
}

/// Fill the ellipse inscribed in `rect`.  A zero radius collapses the shape
/// to a 1-2 px thick bar.
pub fn fill_ellipse(dst: &mut Bitmap, rect: IntRect, paint: &Paint) {
    let rect = rect.normalized();
    if rect.is_empty() {
        return;
    }
    let src = PixelSource::resolve(paint, dst, rect);
    fill_ellipse_src(dst, rect, &src);
}

/// Midpoint sweep emitting horizontal runs instead of boundary points.
/// Later iterations re-emit a row with a wider run; the union is the filled
/// ellipse.
pub(crate) fn fill_ellipse_src(dst: &mut Bitmap, rect: IntRect, src: &PixelSource) {
    let rect = rect.normalized();
    if rect.is_empty() {
        return;
    }
    let f = EllipseFrame::from_rect(rect);
    if f.a == 0 || f.b == 0 {
        fill_rect_src(dst, rect, src);
        return;
    }
    ellipse_sweep(f.a, f.b, &mut |x, y| {
        let (x, y) = (x as i32, y as i32);
        hspan(dst, f.cxl - x, f.cxr + x, f.cyb + y, src);
        if f.cyt - y != f.cyb + y {
            hspan(dst, f.cxl - x, f.cxr + x, f.cyt - y, src);
        }
    });
}

// ---------------------------------------------------------------------------
//  Polygons
// ---------------------------------------------------------------------------

/// General scanline polygon fill with the even-odd parity rule.  Edges are
/// treated half-open (`y0 < y <= y1`, either direction), so shared vertices
/// count once and horizontal edges drop out.
pub fn fill_polygon(dst: &mut Bitmap, pts: &[IntPoint], paint: &Paint) {
    if pts.is_empty() {
        return;
    }
    let src = PixelSource::resolve(paint, dst, bounding_rect(pts));
    fill_polygon_src(dst, pts, &src);
}

pub(crate) fn fill_polygon_src(dst: &mut Bitmap, pts: &[IntPoint], src: &PixelSource) {
    let n = pts.len();
    if n == 0 {
        return;
    }
    if n == 1 {
        src.write(dst, pts[0].x, pts[0].y);
        return;
    }

    let y_min = pts.iter().map(|p| p.y).min().unwrap().max(0);
    let y_max = pts
        .iter()
        .map(|p| p.y)
        .max()
        .unwrap()
        .min(dst.height() as i32 - 1);

    let mut xs: Vec<i32> = Vec::with_capacity(n);
    for y in y_min..=y_max {
        xs.clear();
        for i in 0..n {
            let p = pts[i];
            let q = pts[(i + 1) % n];
            if (p.y < y && y <= q.y) || (q.y < y && y <= p.y) {
                let t = (y - p.y) as f64 / (q.y - p.y) as f64;
                xs.push((p.x as f64 + t * (q.x - p.x) as f64).round() as i32);
            }
        }
        xs.sort_unstable();
        for pair in xs.chunks_exact(2) {
            hspan(dst, pair[0], pair[1], y, src);
        }
    }
}

/// Fill a triangle.  The scan fill is followed by a 1-px outline of the same
/// paint so that a border drawn over the same three vertices leaves no
/// 1-pixel gap.
pub fn fill_triangle(dst: &mut Bitmap, a: IntPoint, b: IntPoint, c: IntPoint, paint: &Paint) {
    let pts = [a, b, c];
    let src = PixelSource::resolve(paint, dst, bounding_rect(&pts));
    fill_polygon_src(dst, &pts, &src);
    stroke::thin_segment(dst, &src, a, b);
    stroke::thin_segment(dst, &src, b, c);
    stroke::thin_segment(dst, &src, c, a);
}

pub(crate) fn bounding_rect(pts: &[IntPoint]) -> IntRect {
    if pts.is_empty() {
        return IntRect::default();
    }
    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;
    for p in pts {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    IntRect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    const INK: Color = Color::rgb(255, 0, 0);

    fn count_ink(bmp: &Bitmap) -> usize {
        let mut n = 0;
        for y in 0..bmp.height() as i32 {
            for x in 0..bmp.width() as i32 {
                if bmp.get(x, y) == Some(INK) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn fill_rect_exact_coverage() {
        let mut bmp = Bitmap::new(8, 8);
        fill_rect(&mut bmp, IntRect::new(2, 3, 3, 2), &Paint::Solid(INK));
        assert_eq!(count_ink(&bmp), 6);
        assert_eq!(bmp.get(2, 3), Some(INK));
        assert_eq!(bmp.get(4, 4), Some(INK));
        assert_eq!(bmp.get(5, 4), Some(Color::TRANSPARENT));
        assert_eq!(bmp.get(2, 5), Some(Color::TRANSPARENT));
    }

    #[test]
    fn fill_rect_negative_extent_normalizes() {
        let mut bmp = Bitmap::new(8, 8);
        fill_rect(&mut bmp, IntRect::new(5, 5, -3, -2), &Paint::Solid(INK));
        assert_eq!(count_ink(&bmp), 6);
        assert_eq!(bmp.get(2, 3), Some(INK));
    }

    #[test]
    fn zero_area_rect_is_a_no_op() {
        let mut bmp = Bitmap::new(4, 4);
        fill_rect(&mut bmp, IntRect::new(1, 1, 0, 3), &Paint::Solid(INK));
        assert_eq!(count_ink(&bmp), 0);
    }

    #[test]
    fn polygon_parity_fills_diamond() {
        let mut bmp = Bitmap::new(16, 16);
        let pts = [
            IntPoint::new(8, 2),
            IntPoint::new(14, 8),
            IntPoint::new(8, 14),
            IntPoint::new(2, 8),
        ];
        fill_polygon(&mut bmp, &pts, &Paint::Solid(INK));
        // Center row spans the full diamond width
        assert_eq!(bmp.get(2, 8), Some(INK));
        assert_eq!(bmp.get(14, 8), Some(INK));
        // Corners of the bounding box stay empty
        assert_eq!(bmp.get(2, 2), Some(Color::TRANSPARENT));
        assert_eq!(bmp.get(14, 14), Some(Color::TRANSPARENT));
        // Interior is filled
        assert_eq!(bmp.get(8, 8), Some(INK));
    }

    #[test]
    fn polygon_fill_clips_to_canvas() {
        let mut bmp = Bitmap::new(4, 4);
        let pts = [
            IntPoint::new(-10, -10),
            IntPoint::new(20, -10),
            IntPoint::new(20, 20),
            IntPoint::new(-10, 20),
        ];
        fill_polygon(&mut bmp, &pts, &Paint::Solid(INK));
        assert_eq!(count_ink(&bmp), 16);
    }

    #[test]
    fn triangle_fill_covers_its_outline() {
        let mut bmp = Bitmap::new(16, 16);
        let (a, b, c) = (
            IntPoint::new(2, 2),
            IntPoint::new(13, 4),
            IntPoint::new(5, 13),
        );
        fill_triangle(&mut bmp, a, b, c, &Paint::Solid(INK));
        // All three vertices are painted (the outline pass guarantees it)
        assert_eq!(bmp.get(2, 2), Some(INK));
        assert_eq!(bmp.get(13, 4), Some(INK));
        assert_eq!(bmp.get(5, 13), Some(INK));
        assert_eq!(bmp.get(6, 6), Some(INK));
    }

    #[test]
    fn ellipse_fill_center_row_and_extents() {
        let mut bmp = Bitmap::new(16, 16);
        fill_ellipse(&mut bmp, IntRect::new(1, 3, 13, 9), &Paint::Solid(INK));
        // Center row spans the full width, corners stay clear
        assert_eq!(bmp.get(1, 7), Some(INK));
        assert_eq!(bmp.get(13, 7), Some(INK));
        assert_eq!(bmp.get(7, 3), Some(INK));
        assert_eq!(bmp.get(7, 11), Some(INK));
        assert_eq!(bmp.get(1, 3), Some(Color::TRANSPARENT));
        assert_eq!(bmp.get(13, 11), Some(Color::TRANSPARENT));
    }

    #[test]
    fn even_sized_disc_spans_full_rect() {
        let mut bmp = Bitmap::new(8, 8);
        fill_ellipse(&mut bmp, IntRect::new(2, 2, 4, 4), &Paint::Solid(INK));
        // 4x4 disc = full square minus the 4 corners
        assert_eq!(count_ink(&bmp), 12);
        assert_eq!(bmp.get(2, 3), Some(INK));
        assert_eq!(bmp.get(5, 4), Some(INK));
        assert_eq!(bmp.get(2, 2), Some(Color::TRANSPARENT));
        assert_eq!(bmp.get(5, 5), Some(Color::TRANSPARENT));
    }

    #[test]
    fn fill_is_deterministic() {
        let paint = Paint::Solid(INK);
        let pts = [
            IntPoint::new(1, 1),
            IntPoint::new(10, 3),
            IntPoint::new(6, 11),
        ];
        let mut a = Bitmap::new(12, 12);
        let mut b = Bitmap::new(12, 12);
        fill_polygon(&mut a, &pts, &paint);
        fill_polygon(&mut b, &pts, &paint);
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
