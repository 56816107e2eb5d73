// ============================================================================
// RESAMPLER — nearest/bilinear scaling, sub-bitmap extraction, flips/rotation
// ============================================================================

use crate::bitmap::{Bitmap, RasterError, BYTES_PER_PIXEL};
use crate::geom::IntRect;
use crate::log_warn;

/// Interpolation used by [`scaled_sub_bitmap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleFilter {
    Nearest,
    #[default]
    Bilinear,
}

/// Nearest-neighbor scaling with independent per-axis factors, stepped with
/// 16.16 fixed-point source ratios.  Scale factors are unsigned magnitudes
/// here: zero, negative or non-finite factors are rejected (mirroring is a
/// separate flip step).
pub fn scale_nearest(src: &Bitmap, sx: f32, sy: f32) -> Result<Bitmap, RasterError> {
    if !sx.is_finite() || !sy.is_finite() || sx <= 0.0 || sy <= 0.0 {
        log_warn!("scale_nearest: rejected scale factors ({}, {})", sx, sy);
        return Err(RasterError::InvalidScale);
    }
    let new_w = ((src.width() as f32 * sx).round() as u32).max(1);
    let new_h = ((src.height() as f32 * sy).round() as u32).max(1);

    let rx = ((src.width() as u64) << 16) / new_w as u64;
    let ry = ((src.height() as u64) << 16) / new_h as u64;

    let mut out = Bitmap::new(new_w, new_h);
    for y in 0..new_h {
        let sy_i = (((y as u64 * ry) >> 16) as u32).min(src.height() - 1);
        let srow = src.row(sy_i);
        let orow = out.row_mut(y);
        for x in 0..new_w as usize {
            let sx_i = (((x as u64 * rx) >> 16) as usize).min(src.width() as usize - 1);
            orow[x * BYTES_PER_PIXEL..(x + 1) * BYTES_PER_PIXEL]
                .copy_from_slice(&srow[sx_i * BYTES_PER_PIXEL..(sx_i + 1) * BYTES_PER_PIXEL]);
        }
    }
    Ok(out)
}

/// Bilinear scaling.  The new size is `round(old * |scale|)` clamped to at
/// least 1 per axis; each destination pixel interpolates its 2×2 source
/// neighborhood per channel with a `+0.5` rounding bias.  Negative factors
/// flip the finished result along that axis instead of being handled inside
/// the interpolation.
pub fn scale_bilinear(src: &Bitmap, sx: f32, sy: f32) -> Result<Bitmap, RasterError> {
    if !sx.is_finite() || !sy.is_finite() || sx == 0.0 || sy == 0.0 {
        log_warn!("scale_bilinear: rejected scale factors ({}, {})", sx, sy);
        return Err(RasterError::InvalidScale);
    }
    let new_w = ((src.width() as f32 * sx.abs()).round() as u32).max(1);
    let new_h = ((src.height() as f32 * sy.abs()).round() as u32).max(1);

    let src_w = src.width() as i32;
    let src_h = src.height() as i32;
    let x_ratio = src.width() as f32 / new_w as f32;
    let y_ratio = src.height() as f32 / new_h as f32;

    let mut out = Bitmap::new(new_w, new_h);
    for y in 0..new_h {
        let fy = y as f32 * y_ratio;
        let y0 = fy as i32;
        let dy = fy - y0 as f32;
        let y1 = (y0 + 1).min(src_h - 1);
        let row_a = src.row(y0 as u32);
        let row_c = src.row(y1 as u32);
        let orow = out.row_mut(y);
        for x in 0..new_w as usize {
            let fx = x as f32 * x_ratio;
            let x0 = fx as i32;
            let dx = fx - x0 as f32;
            let x1 = (x0 + 1).min(src_w - 1);

            let ao = x0 as usize * BYTES_PER_PIXEL;
            let bo = x1 as usize * BYTES_PER_PIXEL;
            let wa = (1.0 - dx) * (1.0 - dy);
            let wb = dx * (1.0 - dy);
            let wc = (1.0 - dx) * dy;
            let wd = dx * dy;
            for ch in 0..BYTES_PER_PIXEL {
                let v = row_a[ao + ch] as f32 * wa
                    + row_a[bo + ch] as f32 * wb
                    + row_c[ao + ch] as f32 * wc
                    + row_c[bo + ch] as f32 * wd;
                orow[x * BYTES_PER_PIXEL + ch] = (v + 0.5) as u8;
            }
        }
    }

    if sx < 0.0 {
        flip_horizontal(&mut out);
    }
    if sy < 0.0 {
        flip_vertical(&mut out);
    }
    Ok(out)
}

/// Copy out an axis-aligned sub-rectangle.  The rect must lie fully inside
/// the source; anything else is an `OutOfBounds` error rather than a wild
/// read.
pub fn sub_bitmap(src: &Bitmap, rect: IntRect) -> Result<Bitmap, RasterError> {
    let rect = rect.normalized();
    if rect.is_empty()
        || rect.x < 0
        || rect.y < 0
        || rect.right() > src.width() as i32
        || rect.bottom() > src.height() as i32
    {
        return Err(RasterError::OutOfBounds);
    }
    let mut out = Bitmap::new(rect.w as u32, rect.h as u32);
    let x_off = rect.x as usize * BYTES_PER_PIXEL;
    let row_len = rect.w as usize * BYTES_PER_PIXEL;
    for y in 0..rect.h as u32 {
        let srow = src.row(rect.y as u32 + y);
        out.row_mut(y).copy_from_slice(&srow[x_off..x_off + row_len]);
    }
    Ok(out)
}

/// Extract a sub-rectangle and resample it in one call.
pub fn scaled_sub_bitmap(
    src: &Bitmap,
    rect: IntRect,
    sx: f32,
    sy: f32,
    filter: ScaleFilter,
) -> Result<Bitmap, RasterError> {
    let cut = sub_bitmap(src, rect)?;
    match filter {
        ScaleFilter::Nearest => scale_nearest(&cut, sx, sy),
        ScaleFilter::Bilinear => scale_bilinear(&cut, sx, sy),
    }
}

/// Mirror left↔right in place.
pub fn flip_horizontal(bmp: &mut Bitmap) {
    let w = bmp.width() as usize;
    for y in 0..bmp.height() {
        let row = bmp.row_mut(y);
        for x in 0..w / 2 {
            let (a, b) = (x * BYTES_PER_PIXEL, (w - 1 - x) * BYTES_PER_PIXEL);
            for ch in 0..BYTES_PER_PIXEL {
                row.swap(a + ch, b + ch);
            }
        }
    }
}

/// Mirror top↕bottom in place.
pub fn flip_vertical(bmp: &mut Bitmap) {
    let h = bmp.height() as usize;
    let stride = bmp.stride();
    let row_len = bmp.width() as usize * BYTES_PER_PIXEL;
    let data = bmp.as_raw_mut();
    for y in 0..h / 2 {
        let top = y * stride;
        let bottom = (h - 1 - y) * stride;
        let (head, tail) = data.split_at_mut(bottom);
        head[top..top + row_len].swap_with_slice(&mut tail[..row_len]);
    }
}

/// Rotate 90° clockwise into a new bitmap (dimensions swap).
pub fn rotate_90cw(src: &Bitmap) -> Bitmap {
    let (w, h) = (src.width(), src.height());
    let mut out = Bitmap::new(h, w);
    for dy in 0..w {
        let orow = out.row_mut(dy);
        for dx in 0..h as usize {
            let srow = src.row(h - 1 - dx as u32);
            orow[dx * BYTES_PER_PIXEL..(dx + 1) * BYTES_PER_PIXEL].copy_from_slice(
                &srow[dy as usize * BYTES_PER_PIXEL..(dy as usize + 1) * BYTES_PER_PIXEL],
            );
        }
    }
    out
}

/// Rotate 90° counter-clockwise into a new bitmap (dimensions swap).
pub fn rotate_90ccw(src: &Bitmap) -> Bitmap {
    let (w, h) = (src.width(), src.height());
    let mut out = Bitmap::new(h, w);
    for dy in 0..w {
        let orow = out.row_mut(dy);
        for dx in 0..h as usize {
            let srow = src.row(dx as u32);
            let sx = (w - 1 - dy) as usize;
            orow[dx * BYTES_PER_PIXEL..(dx + 1) * BYTES_PER_PIXEL]
                .copy_from_slice(&srow[sx * BYTES_PER_PIXEL..(sx + 1) * BYTES_PER_PIXEL]);
        }
    }
    out
}

/// Rotate 180° in place.
pub fn rotate_180(bmp: &mut Bitmap) {
    flip_horizontal(bmp);
    flip_vertical(bmp);
}
