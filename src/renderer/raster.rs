//! Software raster primitives
//!
//! All primitives clip against the target, so callers may pass shapes that are
//! partly or entirely outside the surface.

use super::framebuffer::FrameBuffer;
use crate::color::{Rgb, mix_color};

/// Fill the half-open rectangle `[x0, x1) x [y0, y1)`.
pub fn fill_rect(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
    let x0 = x0.clamp(0, fb.width as i32) as usize;
    let x1 = x1.clamp(0, fb.width as i32) as usize;
    let y0 = y0.clamp(0, fb.height as i32) as usize;
    let y1 = y1.clamp(0, fb.height as i32) as usize;
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    let px = color.to_u32();
    for y in y0..y1 {
        let row = y * fb.width;
        fb.pixels[row + x0..row + x1].fill(px);
    }
}

/// Top-to-bottom linear gradient over the whole surface.
pub fn vertical_gradient(fb: &mut FrameBuffer, top: Rgb, bottom: Rgb) {
    let h = fb.height.max(1) as f32;
    for y in 0..fb.height {
        let px = mix_color(top, bottom, y as f32 / h).to_u32();
        let row = y * fb.width;
        fb.pixels[row..row + fb.width].fill(px);
    }
}

/// Put a single pixel if it lies on the surface.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.pixels[y * fb.width + x] = color;
}

/// Filled disc centered at (cx, cy), sampled at pixel centers.
pub fn fill_circle(fb: &mut FrameBuffer, cx: f32, cy: f32, r: f32, color: Rgb) {
    if !(cx.is_finite() && cy.is_finite() && r.is_finite()) || r <= 0.0 {
        return;
    }
    let px = color.to_u32();
    let y_start = ((cy - r).floor() as i64).max(0);
    let y_end = ((cy + r).ceil() as i64).min(fb.height as i64);
    let r2 = r * r;

    for y in y_start..y_end {
        let dy = y as f32 + 0.5 - cy;
        let span2 = r2 - dy * dy;
        if span2 < 0.0 {
            continue;
        }
        let half = span2.sqrt();
        let x_start = ((cx - half).round() as i64).max(0);
        let x_end = ((cx + half).round() as i64).min(fb.width as i64);
        if x_start >= x_end {
            continue;
        }
        let row = y as usize * fb.width;
        fb.pixels[row + x_start as usize..row + x_end as usize].fill(px);
    }
}

/// Bresenham line between two points, `thickness` pixels wide (square pen).
pub fn draw_line(
    fb: &mut FrameBuffer,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    thickness: i32,
    color: Rgb,
) {
    let px = color.to_u32();
    let thickness = thickness.max(1);
    let lo = -(thickness - 1) / 2;
    let hi = lo + thickness;

    let (mut x, mut y) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        for oy in lo..hi {
            for ox in lo..hi {
                put_pixel(fb, x + ox, y + oy, px);
            }
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Source-over blend of `src` onto `dst` at a constant opacity (0-255).
///
/// Only the overlapping top-left region is touched when sizes differ.
pub fn composite(dst: &mut FrameBuffer, src: &FrameBuffer, alpha: u8) {
    let a = alpha as u32;
    let width = dst.width.min(src.width);
    let height = dst.height.min(src.height);
    for y in 0..height {
        let d_row = &mut dst.pixels[y * dst.width..y * dst.width + width];
        let s_row = &src.pixels[y * src.width..y * src.width + width];
        for (d, s) in d_row.iter_mut().zip(s_row) {
            *d = blend_pixel(*s, *d, a);
        }
    }
}

#[inline]
fn blend_pixel(src: u32, dst: u32, a: u32) -> u32 {
    let channel = |shift: u32| -> u32 {
        let s = (src >> shift) & 0xFF;
        let d = (dst >> shift) & 0xFF;
        ((s * a + d * (255 - a) + 127) / 255) << shift
    };
    channel(16) | channel(8) | channel(0)
}
