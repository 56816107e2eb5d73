//! RasterFE — the raster engine beneath the paint editor.
//!
//! A self-contained scan-conversion and compositing core: Bresenham-family
//! stroke and fill rasterizers, seeded region fills, alpha compositing and
//! image resampling, all operating directly on in-memory RGBA
//! [`Bitmap`]s.  The GUI, document model, undo history and file I/O live in
//! the application layers above; they call into this crate and render its
//! output.
//!
//! Everything is synchronous and single-threaded: each operation runs to
//! completion on the calling thread, mutating its destination buffer in
//! place, and no state is retained between calls.

pub mod bitmap;
pub mod geom;
pub mod logger;
pub mod ops;
pub mod paint;

pub use bitmap::{AlphaMask, Bitmap, Offsat, RasterError, BYTES_PER_PIXEL};
pub use geom::{IntPoint, IntRect, IntSize};
pub use paint::{
    BorderAttributes, CapStyle, Color, Gradient, GradientShape, GradientStop, LineAttributes,
    LineStyle, Paint, Pattern,
};

pub use ops::composite::{blend, blend_mask, blend_masked, blit, blit_masked, intersects};
pub use ops::fill::{fill_ellipse, fill_polygon, fill_rect, fill_triangle};
pub use ops::resample::{
    flip_horizontal, flip_vertical, rotate_90ccw, rotate_90cw, rotate_180, scale_bilinear,
    scale_nearest, scaled_sub_bitmap, sub_bitmap, ScaleFilter,
};
pub use ops::seed_fill::{boundary_fill, flood_fill};
pub use ops::stroke::{draw_ellipse, draw_line, draw_polygon, draw_polyline, draw_rect};
