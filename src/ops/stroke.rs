// ============================================================================
// STROKE RASTERIZER — lines, polylines, polygon/rect/ellipse borders
// ============================================================================

use crate::bitmap::Bitmap;
use crate::geom::{IntPoint, IntRect};
use crate::paint::{BorderAttributes, CapStyle, LineAttributes, LineStyle, Paint, PixelSource};

use super::fill::{self, EllipseFrame};

// ---------------------------------------------------------------------------
//  Dash phase
// ---------------------------------------------------------------------------

/// On/off toggle stepped once per primary-axis pixel.  The segment length is
/// `2 * width` steps, so wide strokes keep their dash rhythm proportional to
/// their thickness.  One toggle instance is threaded through all segments of
/// a polyline so the phase carries across joints.
struct DashToggle {
    /// 0 = solid (never toggles).
    seg: u32,
    counter: u32,
    on: bool,
}

impl DashToggle {
    fn new(style: LineStyle, width: i32) -> Self {
        Self {
            seg: match style {
                LineStyle::Solid => 0,
                LineStyle::LongDash => 2 * width.max(1) as u32,
            },
            counter: 0,
            on: true,
        }
    }

    fn solid() -> Self {
        Self::new(LineStyle::Solid, 1)
    }

    #[inline]
    fn step(&mut self) -> bool {
        if self.seg == 0 {
            return true;
        }
        let cur = self.on;
        self.counter += 1;
        if self.counter >= self.seg {
            self.counter = 0;
            self.on = !self.on;
        }
        cur
    }
}

// ---------------------------------------------------------------------------
//  1-px lines
// ---------------------------------------------------------------------------

/// Integer Bresenham stepper with the steep/shallow axis swap.  Walks from
/// `a` to `b` in order (never reversed) so the dash phase is directional.
fn thin_line(dst: &mut Bitmap, src: &PixelSource, a: IntPoint, b: IntPoint, dash: &mut DashToggle) {
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    let steep = dy > dx;
    let (mut u, mut v, u1, v1, du, dv) = if steep {
        (a.y, a.x, b.y, b.x, dy, dx)
    } else {
        (a.x, a.y, b.x, b.y, dx, dy)
    };
    let su = if u <= u1 { 1 } else { -1 };
    let sv = if v <= v1 { 1 } else { -1 };
    let mut err = du / 2;
    loop {
        if dash.step() {
            if steep {
                src.write(dst, v, u);
            } else {
                src.write(dst, u, v);
            }
        }
        if u == u1 {
            break;
        }
        u += su;
        err -= dv;
        if err < 0 {
            v += sv;
            err += du;
        }
    }
}

/// Solid 1-px segment; used by `fill::fill_triangle` for its outline pass.
pub(crate) fn thin_segment(dst: &mut Bitmap, src: &PixelSource, a: IntPoint, b: IntPoint) {
    let mut dash = DashToggle::solid();
    thin_line(dst, src, a, b, &mut dash);
}

// ---------------------------------------------------------------------------
//  Wide lines (Murphy parallel-sweep)
// ---------------------------------------------------------------------------

#[inline]
fn plot(dst: &mut Bitmap, src: &PixelSource, u: i32, v: i32, swapped: bool) {
    if swapped {
        src.write(dst, v, u);
    } else {
        src.write(dst, u, v);
    }
}

/// One perpendicular sweep of the wide-line walker: from the primary-line
/// pixel `(u0, v0)`, walk both sides of the stroke until the accumulated
/// error crosses the stop-line thresholds.  `einit`/`winit` thread the
/// primary stepper's error state in so the trailing edge stays in step with
/// the leading edge.
fn perpendicular(
    dst: &mut Bitmap,
    src: &PixelSource,
    u0: i32,
    v0: i32,
    du: i64,
    dv: i64,
    su: i32,
    sv: i32,
    einit: i64,
    w_left: f64,
    w_right: f64,
    winit: i64,
    swapped: bool,
) {
    let threshold = du - 2 * dv;
    let e_diag = -2 * du;
    let e_square = 2 * dv;

    let (mut u, mut v) = (u0, v0);
    let mut error = einit;
    let mut tk = (du + dv - winit) as f64;
    let mut q = 0u32;
    while tk <= w_left {
        plot(dst, src, u, v, swapped);
        if error >= threshold {
            u += su;
            error += e_diag;
            tk += (2 * dv) as f64;
        }
        error += e_square;
        v += sv;
        tk += (2 * du) as f64;
        q += 1;
    }

    let (mut u, mut v) = (u0, v0);
    let mut error = -einit;
    let mut tk = (du + dv + winit) as f64;
    let mut p = 0u32;
    while tk <= w_right {
        if p > 0 {
            plot(dst, src, u, v, swapped);
        }
        if error > threshold {
            u -= su;
            error += e_diag;
            tk += (2 * dv) as f64;
        }
        error += e_square;
        v -= sv;
        tk += (2 * du) as f64;
        p += 1;
    }

    // Degenerate widths can strand the center pixel
    if q == 0 && p < 2 {
        plot(dst, src, u0, v0, swapped);
    }
}

/// Wide line in major-axis space (`du >= dv` guaranteed by the caller; when
/// `swapped`, u/v are really y/x).  The stop-line thresholds bounding the two
/// perpendicular half-sweeps are computed once from the segment length.
fn wide_line_major(
    dst: &mut Bitmap,
    src: &PixelSource,
    u0: i32,
    v0: i32,
    u1: i32,
    v1: i32,
    width: i32,
    dash: &mut DashToggle,
    swapped: bool,
) {
    let du = (u1 - u0).abs() as i64;
    let dv = (v1 - v0).abs() as i64;
    let su = if u0 <= u1 { 1 } else { -1 };
    let sv = if v0 <= v1 { 1 } else { -1 };

    let length = ((du * du + dv * dv) as f64).sqrt();
    let left = (width - 1) / 2;
    let right = width - 1 - left;
    let w_left = (2 * left + 1) as f64 * length;
    let w_right = (2 * right + 1) as f64 * length;

    let threshold = du - 2 * dv;
    let e_diag = -2 * du;
    let e_square = 2 * dv;
    let mut p_error: i64 = 0;
    let mut error: i64 = 0;
    let (mut u, mut v) = (u0, v0);

    for _ in 0..=du {
        let on = dash.step();
        if on {
            perpendicular(
                dst, src, u, v, du, dv, su, sv, p_error, w_left, w_right, error, swapped,
            );
        }
        if error >= threshold {
            v += sv;
            error += e_diag;
            if p_error >= threshold {
                // The diagonal step opens a gap on the trailing edge; close
                // it with one extra perpendicular
                if on {
                    perpendicular(
                        dst,
                        src,
                        u,
                        v,
                        du,
                        dv,
                        su,
                        sv,
                        p_error + e_diag + e_square,
                        w_left,
                        w_right,
                        error,
                        swapped,
                    );
                }
                p_error += e_diag;
            }
            p_error += e_square;
        }
        error += e_square;
        u += su;
    }
}

fn wide_line(
    dst: &mut Bitmap,
    src: &PixelSource,
    a: IntPoint,
    b: IntPoint,
    width: i32,
    dash: &mut DashToggle,
) {
    if (b.y - a.y).abs() > (b.x - a.x).abs() {
        wide_line_major(dst, src, a.y, a.x, b.y, b.x, width, dash, true);
    } else {
        wide_line_major(dst, src, a.x, a.y, b.x, b.y, width, dash, false);
    }
}

// ---------------------------------------------------------------------------
//  Caps, joints, segments
// ---------------------------------------------------------------------------

/// Stamp a filled disc of the given diameter (round caps and polyline
/// joints).
fn stamp_disc(dst: &mut Bitmap, src: &PixelSource, center: IntPoint, diameter: i32) {
    if diameter <= 1 {
        src.write(dst, center.x, center.y);
        return;
    }
    let rect = IntRect::new(
        center.x - diameter / 2,
        center.y - diameter / 2,
        diameter,
        diameter,
    );
    fill::fill_ellipse_src(dst, rect, src);
}

fn draw_segment(
    dst: &mut Bitmap,
    src: &PixelSource,
    a: IntPoint,
    b: IntPoint,
    width: i32,
    dash: &mut DashToggle,
) {
    if width <= 1 {
        thin_line(dst, src, a, b, dash);
    } else if a == b {
        stamp_disc(dst, src, a, width);
    } else {
        wide_line(dst, src, a, b, width, dash);
    }
}

// ---------------------------------------------------------------------------
//  Public entry points
// ---------------------------------------------------------------------------

/// Draw a single line segment.
pub fn draw_line(dst: &mut Bitmap, a: IntPoint, b: IntPoint, paint: &Paint, attrs: &LineAttributes) {
    let width = attrs.effective_width();
    let bounds = fill::bounding_rect(&[a, b]).inflated(width);
    let src = PixelSource::resolve(paint, dst, bounds);
    let mut dash = DashToggle::new(attrs.style, width);
    draw_segment(dst, &src, a, b, width, &mut dash);
    if attrs.cap == CapStyle::Round && width > 1 {
        stamp_disc(dst, &src, a, width);
        stamp_disc(dst, &src, b, width);
    }
}

/// Draw connected segments through `pts`.  The dash phase carries across
/// joints; wide strokes get a round joint disc at every interior vertex so
/// direction changes leave no notch.
pub fn draw_polyline(dst: &mut Bitmap, pts: &[IntPoint], paint: &Paint, attrs: &LineAttributes) {
    if pts.is_empty() {
        return;
    }
    let width = attrs.effective_width();
    let bounds = fill::bounding_rect(pts).inflated(width);
    let src = PixelSource::resolve(paint, dst, bounds);
    let mut dash = DashToggle::new(attrs.style, width);

    if pts.len() == 1 {
        draw_segment(dst, &src, pts[0], pts[0], width, &mut dash);
    } else {
        for seg in pts.windows(2) {
            draw_segment(dst, &src, seg[0], seg[1], width, &mut dash);
        }
        if width > 1 {
            for p in &pts[1..pts.len() - 1] {
                stamp_disc(dst, &src, *p, width);
            }
        }
    }

    if attrs.cap == CapStyle::Round && width > 1 {
        stamp_disc(dst, &src, pts[0], width);
        stamp_disc(dst, &src, *pts.last().unwrap(), width);
    }
}

/// Draw a closed outline through `pts` (last point connects back to the
/// first).  Caps do not apply; wide strokes get joint discs at every vertex.
pub fn draw_polygon(dst: &mut Bitmap, pts: &[IntPoint], paint: &Paint, attrs: &LineAttributes) {
    if pts.is_empty() {
        return;
    }
    let width = attrs.effective_width();
    let bounds = fill::bounding_rect(pts).inflated(width);
    let src = PixelSource::resolve(paint, dst, bounds);
    let mut dash = DashToggle::new(attrs.style, width);

    if pts.len() == 1 {
        draw_segment(dst, &src, pts[0], pts[0], width, &mut dash);
        return;
    }
    let n = pts.len();
    for i in 0..n {
        draw_segment(dst, &src, pts[i], pts[(i + 1) % n], width, &mut dash);
    }
    if width > 1 {
        for p in pts {
            stamp_disc(dst, &src, *p, width);
        }
    }
}

/// Draw a rectangle border.  Solid borders are rendered as `width` exact
/// concentric rings of horizontal/vertical runs; dashed borders go through
/// the general polygon path.
pub fn draw_rect(dst: &mut Bitmap, rect: IntRect, paint: &Paint, attrs: &BorderAttributes) {
    let rect = rect.normalized();
    if rect.is_empty() {
        return;
    }
    let width = attrs.effective_width();

    if attrs.style == LineStyle::LongDash {
        let corners = [
            IntPoint::new(rect.x, rect.y),
            IntPoint::new(rect.right() - 1, rect.y),
            IntPoint::new(rect.right() - 1, rect.bottom() - 1),
            IntPoint::new(rect.x, rect.bottom() - 1),
        ];
        draw_polygon(
            dst,
            &corners,
            paint,
            &LineAttributes::new(width, LineStyle::LongDash, CapStyle::Butt),
        );
        return;
    }

    let src = PixelSource::resolve(paint, dst, rect);
    for i in 0..width {
        let x0 = rect.x + i;
        let y0 = rect.y + i;
        let x1 = rect.right() - 1 - i;
        let y1 = rect.bottom() - 1 - i;
        if x0 > x1 || y0 > y1 {
            break; // border thicker than the rect: it is fully filled now
        }
        fill::hspan(dst, x0, x1, y0, &src);
        if y1 != y0 {
            fill::hspan(dst, x0, x1, y1, &src);
        }
        for y in y0 + 1..y1 {
            src.write(dst, x0, y);
            if x1 != x0 {
                src.write(dst, x1, y);
            }
        }
    }
}

/// Draw an ellipse border inscribed in `rect`.  Either radius collapsing to
/// zero degenerates to a straight line through the rect.
pub fn draw_ellipse(dst: &mut Bitmap, rect: IntRect, paint: &Paint, attrs: &BorderAttributes) {
    let rect = rect.normalized();
    if rect.is_empty() {
        return;
    }
    let width = attrs.effective_width();
    let frame = EllipseFrame::from_rect(rect);

    if frame.a == 0 || frame.b == 0 {
        // Degenerate: a line along the longer axis
        let (a, b) = if frame.b == 0 {
            (
                IntPoint::new(rect.x, frame.cyt),
                IntPoint::new(rect.right() - 1, frame.cyt),
            )
        } else {
            (
                IntPoint::new(frame.cxl, rect.y),
                IntPoint::new(frame.cxl, rect.bottom() - 1),
            )
        };
        draw_line(
            dst,
            a,
            b,
            paint,
            &LineAttributes::new(width, attrs.style, CapStyle::Butt),
        );
        return;
    }

    let src = PixelSource::resolve(paint, dst, rect);
    if width <= 1 {
        thin_ellipse(dst, &src, &frame, attrs.style);
    } else {
        wide_ellipse(dst, &src, rect, &frame, width);
    }
}

/// Midpoint ellipse border: 4 mirrored points per stepper iteration, dash
/// toggled once per iteration.
fn thin_ellipse(dst: &mut Bitmap, src: &PixelSource, frame: &EllipseFrame, style: LineStyle) {
    let mut dash = DashToggle::new(style, 1);
    let (cxl, cxr, cyt, cyb) = (frame.cxl, frame.cxr, frame.cyt, frame.cyb);
    fill::ellipse_sweep(frame.a, frame.b, &mut |x, y| {
        if !dash.step() {
            return;
        }
        let (x, y) = (x as i32, y as i32);
        src.write(dst, cxr + x, cyb + y);
        src.write(dst, cxl - x, cyb + y);
        src.write(dst, cxr + x, cyt - y);
        src.write(dst, cxl - x, cyt - y);
    });
}

/// Constant-width ellipse ring: sweep the deflated inner ellipse recording
/// the leftmost boundary x per scanline, then sweep the outer ellipse and
/// fill outer→inner spans per scanline (full half-chord where the inner
/// ellipse no longer reaches).
fn wide_ellipse(
    dst: &mut Bitmap,
    src: &PixelSource,
    rect: IntRect,
    frame: &EllipseFrame,
    width: i32,
) {
    let inner_a = frame.a - (width - 1) as i64;
    let inner_b = frame.b - (width - 1) as i64;
    if inner_a <= 0 || inner_b <= 0 {
        // Ring swallows the interior
        fill::fill_ellipse_src(dst, rect, src);
        return;
    }

    let mut inner: Vec<i64> = vec![i64::MAX; inner_b as usize + 1];
    fill::ellipse_sweep(inner_a, inner_b, &mut |x, y| {
        let slot = &mut inner[y as usize];
        *slot = (*slot).min(x);
    });

    let mut outer: Vec<i64> = vec![0; frame.b as usize + 1];
    fill::ellipse_sweep(frame.a, frame.b, &mut |x, y| {
        let slot = &mut outer[y as usize];
        *slot = (*slot).max(x);
    });

    for dy in 0..=frame.b {
        let xo = outer[dy as usize] as i32;
        let xi = if dy <= inner_b {
            let v = inner[dy as usize];
            if v == i64::MAX { 0 } else { v as i32 }
        } else {
            0
        };
        let rows = [frame.cyb + dy as i32, frame.cyt - dy as i32];
        for (k, &row) in rows.iter().enumerate() {
            if k == 1 && rows[0] == rows[1] {
                break;
            }
            fill::hspan(dst, frame.cxr + xi, frame.cxr + xo, row, src);
            fill::hspan(dst, frame.cxl - xo, frame.cxl - xi, row, src);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    const INK: Color = Color::rgb(0, 0, 255);

    fn ink_pixels(bmp: &Bitmap) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..bmp.height() as i32 {
            for x in 0..bmp.width() as i32 {
                if bmp.get(x, y) == Some(INK) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    fn solid_attrs(width: i32) -> LineAttributes {
        LineAttributes::new(width, LineStyle::Solid, CapStyle::Butt)
    }

    #[test]
    fn thin_line_exact_endpoints() {
        let mut bmp = Bitmap::new(10, 10);
        draw_line(
            &mut bmp,
            IntPoint::new(0, 0),
            IntPoint::new(5, 0),
            &Paint::Solid(INK),
            &solid_attrs(1),
        );
        assert_eq!(
            ink_pixels(&bmp),
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]
        );
    }

    #[test]
    fn thin_diagonal_hits_both_endpoints() {
        let mut bmp = Bitmap::new(10, 10);
        draw_line(
            &mut bmp,
            IntPoint::new(8, 7),
            IntPoint::new(1, 2),
            &Paint::Solid(INK),
            &solid_attrs(1),
        );
        assert_eq!(bmp.get(8, 7), Some(INK));
        assert_eq!(bmp.get(1, 2), Some(INK));
    }

    #[test]
    fn dash_toggle_two_pixel_period() {
        let mut bmp = Bitmap::new(10, 10);
        draw_line(
            &mut bmp,
            IntPoint::new(0, 0),
            IntPoint::new(7, 0),
            &Paint::Solid(INK),
            &LineAttributes::new(1, LineStyle::LongDash, CapStyle::Butt),
        );
        assert_eq!(ink_pixels(&bmp), vec![(0, 0), (1, 0), (4, 0), (5, 0)]);
    }

    #[test]
    fn dashed_line_is_deterministic() {
        let attrs = LineAttributes::new(3, LineStyle::LongDash, CapStyle::Butt);
        let mut a = Bitmap::new(20, 20);
        let mut b = Bitmap::new(20, 20);
        for bmp in [&mut a, &mut b] {
            draw_line(
                bmp,
                IntPoint::new(1, 2),
                IntPoint::new(17, 13),
                &Paint::Solid(INK),
                &attrs,
            );
        }
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn wide_horizontal_line_covers_three_rows() {
        let mut bmp = Bitmap::new(12, 9);
        draw_line(
            &mut bmp,
            IntPoint::new(2, 4),
            IntPoint::new(7, 4),
            &Paint::Solid(INK),
            &solid_attrs(3),
        );
        for x in 2..=7 {
            for y in 3..=5 {
                assert_eq!(bmp.get(x, y), Some(INK), "missing ({x},{y})");
            }
        }
        assert_eq!(ink_pixels(&bmp).len(), 18);
    }

    #[test]
    fn wide_vertical_line_covers_three_columns() {
        let mut bmp = Bitmap::new(9, 12);
        draw_line(
            &mut bmp,
            IntPoint::new(4, 2),
            IntPoint::new(4, 7),
            &Paint::Solid(INK),
            &solid_attrs(3),
        );
        for y in 2..=7 {
            for x in 3..=5 {
                assert_eq!(bmp.get(x, y), Some(INK), "missing ({x},{y})");
            }
        }
        assert_eq!(ink_pixels(&bmp).len(), 18);
    }

    #[test]
    fn even_width_line_covers_requested_thickness() {
        let mut bmp = Bitmap::new(12, 9);
        draw_line(
            &mut bmp,
            IntPoint::new(2, 4),
            IntPoint::new(9, 4),
            &Paint::Solid(INK),
            &solid_attrs(2),
        );
        // 8 columns x 2 rows
        assert_eq!(ink_pixels(&bmp).len(), 16);
    }

    #[test]
    fn round_caps_extend_past_butt_caps() {
        let mut butt = Bitmap::new(20, 20);
        let mut round = Bitmap::new(20, 20);
        let a = IntPoint::new(6, 10);
        let b = IntPoint::new(13, 10);
        draw_line(&mut butt, a, b, &Paint::Solid(INK), &solid_attrs(5));
        draw_line(
            &mut round,
            a,
            b,
            &Paint::Solid(INK),
            &LineAttributes::new(5, LineStyle::Solid, CapStyle::Round),
        );
        assert!(ink_pixels(&round).len() > ink_pixels(&butt).len());
        // Disc sticks out left of the start point
        assert_eq!(round.get(4, 10), Some(INK));
        assert_eq!(butt.get(4, 10), Some(Color::TRANSPARENT));
    }

    #[test]
    fn polygon_closes_back_to_start() {
        let mut bmp = Bitmap::new(16, 16);
        let pts = [
            IntPoint::new(2, 2),
            IntPoint::new(12, 2),
            IntPoint::new(7, 12),
        ];
        draw_polygon(&mut bmp, &pts, &Paint::Solid(INK), &solid_attrs(1));
        // A pixel on the closing edge (7,12) -> (2,2)
        assert_eq!(bmp.get(2, 2), Some(INK));
        assert_eq!(bmp.get(7, 12), Some(INK));
        let on_closing_edge = ink_pixels(&bmp)
            .iter()
            .any(|&(x, y)| x < 7 && y > 2 && y < 12);
        assert!(on_closing_edge);
    }

    #[test]
    fn single_point_polyline_draws_a_dot() {
        let mut bmp = Bitmap::new(8, 8);
        draw_polyline(
            &mut bmp,
            &[IntPoint::new(3, 3)],
            &Paint::Solid(INK),
            &solid_attrs(1),
        );
        assert_eq!(ink_pixels(&bmp), vec![(3, 3)]);
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut bmp = Bitmap::new(8, 8);
        draw_polyline(&mut bmp, &[], &Paint::Solid(INK), &solid_attrs(3));
        draw_polygon(&mut bmp, &[], &Paint::Solid(INK), &solid_attrs(3));
        assert!(ink_pixels(&bmp).is_empty());
    }

    #[test]
    fn rect_border_rings_are_exact() {
        let mut bmp = Bitmap::new(10, 9);
        draw_rect(
            &mut bmp,
            IntRect::new(1, 1, 6, 5),
            &Paint::Solid(INK),
            &BorderAttributes::new(2, LineStyle::Solid),
        );
        // Outer ring: 6x5 perimeter = 18 px, inner ring: 4x3 perimeter = 10 px
        assert_eq!(ink_pixels(&bmp).len(), 28);
        assert_eq!(bmp.get(1, 1), Some(INK));
        assert_eq!(bmp.get(6, 5), Some(INK));
        assert_eq!(bmp.get(2, 2), Some(INK));
        // Interior hole survives
        assert_eq!(bmp.get(3, 3), Some(Color::TRANSPARENT));
    }

    #[test]
    fn rect_border_wider_than_rect_fills_it() {
        let mut bmp = Bitmap::new(10, 10);
        draw_rect(
            &mut bmp,
            IntRect::new(2, 2, 4, 4),
            &Paint::Solid(INK),
            &BorderAttributes::new(9, LineStyle::Solid),
        );
        assert_eq!(ink_pixels(&bmp).len(), 16);
    }

    #[test]
    fn thin_circle_hits_axis_extremes() {
        let mut bmp = Bitmap::new(13, 13);
        draw_ellipse(
            &mut bmp,
            IntRect::new(2, 2, 9, 9),
            &Paint::Solid(INK),
            &BorderAttributes::new(1, LineStyle::Solid),
        );
        assert_eq!(bmp.get(2, 6), Some(INK));
        assert_eq!(bmp.get(10, 6), Some(INK));
        assert_eq!(bmp.get(6, 2), Some(INK));
        assert_eq!(bmp.get(6, 10), Some(INK));
        assert_eq!(bmp.get(6, 6), Some(Color::TRANSPARENT));
    }

    #[test]
    fn wide_ellipse_ring_has_constant_equator_width() {
        let mut bmp = Bitmap::new(15, 15);
        draw_ellipse(
            &mut bmp,
            IntRect::new(1, 1, 13, 13),
            &Paint::Solid(INK),
            &BorderAttributes::new(3, LineStyle::Solid),
        );
        // Equator row: ring spans exactly 3 px on each side
        for x in 1..=3 {
            assert_eq!(bmp.get(x, 7), Some(INK), "left ring x={x}");
        }
        for x in 11..=13 {
            assert_eq!(bmp.get(x, 7), Some(INK), "right ring x={x}");
        }
        assert_eq!(bmp.get(4, 7), Some(Color::TRANSPARENT));
        assert_eq!(bmp.get(7, 7), Some(Color::TRANSPARENT));
        assert_eq!(bmp.get(10, 7), Some(Color::TRANSPARENT));
    }

    #[test]
    fn zero_radius_ellipse_degenerates_to_line() {
        let mut bmp = Bitmap::new(10, 10);
        draw_ellipse(
            &mut bmp,
            IntRect::new(2, 5, 7, 1),
            &Paint::Solid(INK),
            &BorderAttributes::new(1, LineStyle::Solid),
        );
        assert_eq!(
            ink_pixels(&bmp),
            vec![(2, 5), (3, 5), (4, 5), (5, 5), (6, 5), (7, 5), (8, 5)]
        );
    }

    #[test]
    fn width_zero_is_clamped_to_one() {
        let mut bmp = Bitmap::new(8, 8);
        draw_line(
            &mut bmp,
            IntPoint::new(1, 1),
            IntPoint::new(4, 1),
            &Paint::Solid(INK),
            &solid_attrs(0),
        );
        assert_eq!(ink_pixels(&bmp).len(), 4);
    }
}
