// ============================================================================
// PAINT — color, pattern and gradient sources + per-pixel dispatch
// ============================================================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::bitmap::Bitmap;
use crate::geom::{IntPoint, IntRect};

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Dash style of a stroked outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    LongDash,
}

/// End-cap style of an open stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapStyle {
    #[default]
    Butt,
    Round,
}

/// Stroke parameters for open curves (lines, polylines).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAttributes {
    pub width: i32,
    pub style: LineStyle,
    pub cap: CapStyle,
}

impl LineAttributes {
    pub fn new(width: i32, style: LineStyle, cap: CapStyle) -> Self {
        Self { width, style, cap }
    }

    /// Width with the `<= 0` case normalized away.
    #[inline]
    pub(crate) fn effective_width(&self) -> i32 {
        self.width.max(1)
    }
}

impl Default for LineAttributes {
    fn default() -> Self {
        Self {
            width: 1,
            style: LineStyle::Solid,
            cap: CapStyle::Butt,
        }
    }
}

/// Stroke parameters for closed borders (rectangles, ellipses, polygons).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderAttributes {
    pub width: i32,
    pub style: LineStyle,
}

impl BorderAttributes {
    pub fn new(width: i32, style: LineStyle) -> Self {
        Self { width, style }
    }

    #[inline]
    pub(crate) fn effective_width(&self) -> i32 {
        self.width.max(1)
    }
}

impl Default for BorderAttributes {
    fn default() -> Self {
        Self {
            width: 1,
            style: LineStyle::Solid,
        }
    }
}

/// Tiled-bitmap paint.  The backing bitmap is shared and immutable, so
/// copying a `Pattern` only bumps a reference count.
#[derive(Clone)]
pub struct Pattern {
    pub bitmap: Arc<Bitmap>,
    /// Canvas position the tile grid is anchored to.
    pub anchor: IntPoint,
    /// When set, the anchor is additionally offset by the painted shape's
    /// bounding-box origin so the tiles stick to the shape.
    pub object_aligned: bool,
}

impl Pattern {
    pub fn new(bitmap: Arc<Bitmap>, anchor: IntPoint) -> Self {
        Self {
            bitmap,
            anchor,
            object_aligned: false,
        }
    }
}

/// One gradient color stop at `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Color,
    pub offset: f32,
}

impl GradientStop {
    pub fn new(color: Color, offset: f32) -> Self {
        Self { color, offset }
    }
}

/// Geometry of a gradient ramp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GradientShape {
    /// Ramp along `angle_deg` (0° = left→right, 90° = top→bottom), spanning
    /// the gradient frame.
    Linear { angle_deg: f32 },
    /// Elliptical ramp out from `center` with the given x/y radii.
    Radial { center: IntPoint, radii: (f32, f32) },
}

/// Multi-stop gradient paint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub stops: Vec<GradientStop>,
    pub shape: GradientShape,
    /// When set, the gradient frame is the painted shape's bounding box;
    /// otherwise it is the whole destination bitmap.
    pub object_aligned: bool,
}

impl Gradient {
    pub fn linear(stops: Vec<GradientStop>, angle_deg: f32) -> Self {
        Self {
            stops,
            shape: GradientShape::Linear { angle_deg },
            object_aligned: true,
        }
    }

    pub fn radial(stops: Vec<GradientStop>, center: IntPoint, radii: (f32, f32)) -> Self {
        Self {
            stops,
            shape: GradientShape::Radial { center, radii },
            object_aligned: true,
        }
    }
}

/// What a shape is painted with.  Exactly one variant is active; every
/// rasterizer dispatches on the tag once, up front, via [`PixelSource`].
#[derive(Clone)]
pub enum Paint {
    Solid(Color),
    Pattern(Pattern),
    Gradient(Gradient),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

// ============================================================================
// PIXEL SOURCE — resolved per-pixel color supplier
// ============================================================================

/// A `Paint` resolved against a concrete destination + shape bounding box.
/// Rasterizers build one of these per call and then treat painting as a
/// plain `(x, y) -> Color` lookup, keeping the scan-conversion loops
/// paint-agnostic.
pub(crate) enum PixelSource {
    Solid(Color),
    Pattern {
        bitmap: Arc<Bitmap>,
        origin: IntPoint,
    },
    Gradient(PreparedGradient),
}

impl PixelSource {
    /// Resolve `paint` for painting into `dst` within `bounds` (the shape's
    /// bounding rectangle, used by object-aligned patterns/gradients).
    pub(crate) fn resolve(paint: &Paint, dst: &Bitmap, bounds: IntRect) -> Self {
        match paint {
            Paint::Solid(c) => PixelSource::Solid(*c),
            Paint::Pattern(p) => {
                let mut origin = p.anchor;
                if p.object_aligned {
                    origin.x += bounds.x;
                    origin.y += bounds.y;
                }
                PixelSource::Pattern {
                    bitmap: Arc::clone(&p.bitmap),
                    origin,
                }
            }
            Paint::Gradient(g) => {
                let frame = if g.object_aligned {
                    bounds
                } else {
                    IntRect::new(0, 0, dst.width() as i32, dst.height() as i32)
                };
                PixelSource::Gradient(PreparedGradient::new(g, frame))
            }
        }
    }

    /// The paint color at destination pixel `(x, y)`.
    #[inline]
    pub(crate) fn color_at(&self, x: i32, y: i32) -> Color {
        match self {
            PixelSource::Solid(c) => *c,
            PixelSource::Pattern { bitmap, origin } => {
                let w = bitmap.width() as i32;
                let h = bitmap.height() as i32;
                let px = (x - origin.x).rem_euclid(w);
                let py = (y - origin.y).rem_euclid(h);
                bitmap.get(px, py).unwrap_or(Color::TRANSPARENT)
            }
            PixelSource::Gradient(g) => g.eval(x, y),
        }
    }

    /// Write the paint color at `(x, y)` into `dst` (bounds-checked).
    #[inline]
    pub(crate) fn write(&self, dst: &mut Bitmap, x: i32, y: i32) {
        dst.set(x, y, self.color_at(x, y));
    }
}

/// Gradient with its stops sorted and its geometry resolved against a frame
/// rectangle, ready for per-pixel evaluation.
pub(crate) struct PreparedGradient {
    stops: Vec<GradientStop>,
    ramp: Ramp,
}

enum Ramp {
    /// Projection onto a unit direction, remapped to `[0, 1]` over the frame.
    Linear { dx: f32, dy: f32, min: f32, span: f32 },
    /// Normalized elliptical distance from a center.
    Radial { cx: f32, cy: f32, rx: f32, ry: f32 },
}

impl PreparedGradient {
    pub(crate) fn new(grad: &Gradient, frame: IntRect) -> Self {
        let mut stops = grad.stops.clone();
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));

        let frame = frame.normalized();
        let ramp = match grad.shape {
            GradientShape::Linear { angle_deg } => {
                let (dy, dx) = angle_deg.to_radians().sin_cos();
                // Project the frame corners to find the ramp extent
                let xs = [frame.x as f32, (frame.right() - 1) as f32];
                let ys = [frame.y as f32, (frame.bottom() - 1) as f32];
                let mut min = f32::MAX;
                let mut max = f32::MIN;
                for &px in &xs {
                    for &py in &ys {
                        let p = px * dx + py * dy;
                        min = min.min(p);
                        max = max.max(p);
                    }
                }
                let span = if max > min { max - min } else { 1.0 };
                Ramp::Linear { dx, dy, min, span }
            }
            GradientShape::Radial { center, radii } => {
                let (mut cx, mut cy) = (center.x as f32, center.y as f32);
                if grad.object_aligned {
                    cx += frame.x as f32;
                    cy += frame.y as f32;
                }
                // Non-positive radii fall back to the frame half-extents
                let rx = if radii.0 > 0.0 {
                    radii.0
                } else {
                    (frame.w as f32 / 2.0).max(1.0)
                };
                let ry = if radii.1 > 0.0 {
                    radii.1
                } else {
                    (frame.h as f32 / 2.0).max(1.0)
                };
                Ramp::Radial { cx, cy, rx, ry }
            }
        };
        Self { stops, ramp }
    }

    #[inline]
    fn eval(&self, x: i32, y: i32) -> Color {
        let t = match self.ramp {
            Ramp::Linear { dx, dy, min, span } => {
                ((x as f32 * dx + y as f32 * dy) - min) / span
            }
            Ramp::Radial { cx, cy, rx, ry } => {
                let nx = (x as f32 - cx) / rx;
                let ny = (y as f32 - cy) / ry;
                (nx * nx + ny * ny).sqrt()
            }
        };
        sample_stops(&self.stops, t.clamp(0.0, 1.0))
    }
}

/// Interpolate a sorted stop list at `t` in `[0, 1]`.
fn sample_stops(stops: &[GradientStop], t: f32) -> Color {
    match stops {
        [] => Color::TRANSPARENT,
        [only] => only.color,
        _ => {
            let first = &stops[0];
            let last = &stops[stops.len() - 1];
            if t <= first.offset {
                return first.color;
            }
            if t >= last.offset {
                return last.color;
            }
            // Find the enclosing segment and lerp channel-wise
            for pair in stops.windows(2) {
                let (lo, hi) = (&pair[0], &pair[1]);
                if t <= hi.offset {
                    let span = hi.offset - lo.offset;
                    let f = if span > 0.0 { (t - lo.offset) / span } else { 0.0 };
                    let lerp = |a: u8, b: u8| -> u8 {
                        (a as f32 + (b as f32 - a as f32) * f).round() as u8
                    };
                    return Color::new(
                        lerp(lo.color.r, hi.color.r),
                        lerp(lo.color.g, hi.color.g),
                        lerp(lo.color.b, hi.color.b),
                        lerp(lo.color.a, hi.color.a),
                    );
                }
            }
            last.color
        }
    }
}

/// Render a gradient into a standalone bitmap covering `rect` (used by the
/// gradient flood fill, which composites the result through a coverage mask).
pub(crate) fn render_gradient(grad: &Gradient, rect: IntRect) -> Bitmap {
    let rect = rect.normalized();
    let mut out = Bitmap::new(rect.w.max(1) as u32, rect.h.max(1) as u32);
    let prepared = PreparedGradient::new(grad, rect);
    for y in 0..out.height() as i32 {
        for x in 0..out.width() as i32 {
            out.set(x, y, prepared.eval(rect.x + x, rect.y + y));
        }
    }
    out
}
