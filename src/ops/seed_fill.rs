// ============================================================================
// SEED FILL — iterative scanline flood fill / boundary fill
// ============================================================================
//
// The traversal is the classic horizontal-span seed fill: a worklist of span
// heads, each popped head walking west pixel-by-pixel and then independently
// east, marking a flat coverage mask as it goes and queueing at most one new
// head per contiguous matching run on the rows above and below.  No
// recursion, so arbitrarily large regions fill without stack growth; the
// mask doubles as the visited set, so no pixel is processed twice.

use crate::bitmap::{AlphaMask, Bitmap};
use crate::geom::{IntPoint, IntRect};
use crate::paint::{render_gradient, Color, Paint, PixelSource};

use super::composite;

/// Fill the 4-connected region of pixels whose color equals the seed
/// pixel's original color.  Off-canvas seeds no-op; a solid fill whose color
/// already equals the seed color no-ops (nothing would change).
pub fn flood_fill(dst: &mut Bitmap, seed: IntPoint, paint: &Paint) {
    let Some(target) = dst.get(seed.x, seed.y) else {
        return;
    };
    if let Paint::Solid(c) = paint
        && *c == target
    {
        return;
    }
    fill_region(dst, seed, move |c| c == target, paint);
}

/// Fill the 4-connected region of pixels whose color differs from
/// `boundary` — i.e. fill up to a drawn outline rather than over a uniform
/// area.  No-ops when the seed pixel already is the boundary color.
pub fn boundary_fill(dst: &mut Bitmap, seed: IntPoint, boundary: Color, paint: &Paint) {
    let Some(seed_color) = dst.get(seed.x, seed.y) else {
        return;
    };
    if seed_color == boundary {
        return;
    }
    fill_region(dst, seed, move |c| c != boundary, paint);
}

/// Shared paint-kind dispatch over one traversal predicate.
fn fill_region<F: Fn(Color) -> bool>(dst: &mut Bitmap, seed: IntPoint, matches: F, paint: &Paint) {
    match paint {
        Paint::Solid(_) | Paint::Pattern(_) => {
            // Colors are written during the traversal itself.  The coverage
            // mask is consulted before the predicate, so a written pixel
            // (which may collide with the predicate's target) is never
            // re-examined.
            let full = IntRect::new(0, 0, dst.width() as i32, dst.height() as i32);
            let src = PixelSource::resolve(paint, dst, full);
            traverse(dst, seed, &matches, Some(&src));
        }
        Paint::Gradient(grad) => {
            // Discover the region first, then render the gradient over its
            // tight bounding box and composite it through the coverage mask.
            let (mask, bbox) = traverse(dst, seed, &matches, None);
            let Some(rect) = bbox else {
                return;
            };
            let ramp = render_gradient(grad, rect);
            for y in 0..rect.h {
                for x in 0..rect.w {
                    if mask.get(rect.x + x, rect.y + y) == 0 {
                        continue;
                    }
                    let c = ramp.get(x, y).unwrap_or(Color::TRANSPARENT);
                    composite::blend_pixel(dst, rect.x + x, rect.y + y, c);
                }
            }
        }
    }
}

/// Span-based traversal core.  Returns the coverage mask (255 = filled) and
/// the tight bounding box of everything filled.  When `write` is given, the
/// paint is applied to each pixel as it is visited.
fn traverse<F: Fn(Color) -> bool>(
    dst: &mut Bitmap,
    seed: IntPoint,
    matches: &F,
    write: Option<&PixelSource>,
) -> (AlphaMask, Option<IntRect>) {
    let w = dst.width() as i32;
    let h = dst.height() as i32;
    let mut mask = vec![0u8; (w as usize) * (h as usize)];

    let seed_ok = seed.x >= 0
        && seed.y >= 0
        && seed.x < w
        && seed.y < h
        && matches(dst.get(seed.x, seed.y).expect("seed in bounds"));
    if !seed_ok {
        return (AlphaMask::from_raw(w as u32, h as u32, mask).expect("mask sized"), None);
    }

    // bbox as (min_x, min_y, max_x, max_y)
    let mut bbox = (seed.x, seed.y, seed.x, seed.y);

    // Worklist of span heads as packed flat indices (w*h stays below the
    // 256M-pixel bitmap cap, so u32 suffices)
    let mut work: Vec<u32> = Vec::with_capacity(1024);
    work.push((seed.y * w + seed.x) as u32);

    while let Some(head) = work.pop() {
        let hx = head as i32 % w;
        let hy = head as i32 / w;
        if mask[head as usize] != 0 {
            continue; // an earlier span already swallowed this head
        }
        walk_span(dst, &mut mask, &mut work, matches, write, hx, hy, -1, &mut bbox);
        walk_span(dst, &mut mask, &mut work, matches, write, hx + 1, hy, 1, &mut bbox);
    }

    let rect = IntRect::new(bbox.0, bbox.1, bbox.2 - bbox.0 + 1, bbox.3 - bbox.1 + 1);
    (
        AlphaMask::from_raw(w as u32, h as u32, mask).expect("mask sized"),
        Some(rect),
    )
}

/// Walk one horizontal direction from `start_x` while the predicate holds,
/// marking/painting pixels and queueing the first pixel of every contiguous
/// matching run directly above and below.
fn walk_span<F: Fn(Color) -> bool>(
    dst: &mut Bitmap,
    mask: &mut [u8],
    work: &mut Vec<u32>,
    matches: &F,
    write: Option<&PixelSource>,
    start_x: i32,
    y: i32,
    step: i32,
    bbox: &mut (i32, i32, i32, i32),
) {
    let w = dst.width() as i32;
    let h = dst.height() as i32;
    let mut run_up = false;
    let mut run_down = false;

    let mut x = start_x;
    while x >= 0 && x < w {
        let i = (y * w + x) as usize;
        if mask[i] != 0 {
            break;
        }
        match dst.get(x, y) {
            Some(c) if matches(c) => {}
            _ => break,
        }
        mask[i] = 255;
        bbox.0 = bbox.0.min(x);
        bbox.1 = bbox.1.min(y);
        bbox.2 = bbox.2.max(x);
        bbox.3 = bbox.3.max(y);
        if let Some(src) = write {
            src.write(dst, x, y);
        }

        if y > 0 {
            let ni = i - w as usize;
            if mask[ni] == 0 && matches(dst.get(x, y - 1).expect("in bounds")) {
                if !run_up {
                    work.push(ni as u32);
                    run_up = true;
                }
            } else {
                run_up = false;
            }
        }
        if y + 1 < h {
            let ni = i + w as usize;
            if mask[ni] == 0 && matches(dst.get(x, y + 1).expect("in bounds")) {
                if !run_down {
                    work.push(ni as u32);
                    run_down = true;
                }
            } else {
                run_down = false;
            }
        }

        x += step;
    }
}
