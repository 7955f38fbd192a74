//! Drawing primitives over an opaque RGB canvas.
//!
//! All shape functions take signed coordinates and silently clip pixels that
//! fall outside the canvas. Nothing here antialiases: edges are exactly as
//! jagged as the underlying rectangle and circle fills, which is the look
//! the card intentionally has.

use image::{Rgb, Rgba, RgbaImage, RgbImage};

/// Paints a full-height vertical line at column `x`.
///
/// Does nothing if the column is outside the canvas.
pub fn fill_vline(canvas: &mut RgbImage, x: i64, color: Rgb<u8>) {
    if x < 0 || x >= canvas.width() as i64 {
        return;
    }
    for y in 0..canvas.height() {
        canvas.put_pixel(x as u32, y, color);
    }
}

/// Fills an axis-aligned rectangle, clipping to the canvas.
pub fn fill_rect(canvas: &mut RgbImage, x: i64, y: i64, width: u32, height: u32, color: Rgb<u8>) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + width as i64).min(canvas.width() as i64);
    let y1 = (y + height as i64).min(canvas.height() as i64);

    for py in y0..y1 {
        for px in x0..x1 {
            canvas.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Fills a circle of the given radius centered at `(cx, cy)`.
///
/// A pixel belongs to the circle when its center lies within `radius` of the
/// circle center.
pub fn fill_circle(canvas: &mut RgbImage, cx: f32, cy: f32, radius: f32, color: Rgb<u8>) {
    if radius <= 0.0 {
        return;
    }
    let x0 = ((cx - radius).floor() as i64).max(0);
    let y0 = ((cy - radius).floor() as i64).max(0);
    let x1 = ((cx + radius).ceil() as i64).min(canvas.width() as i64);
    let y1 = ((cy + radius).ceil() as i64).min(canvas.height() as i64);
    let r_sq = radius * radius;

    for py in y0..y1 {
        for px in x0..x1 {
            let dx = px as f32 + 0.5 - cx;
            let dy = py as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r_sq {
                canvas.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// Fills a rounded rectangle approximated from primitive shapes.
///
/// The shape is the union of one horizontal rectangle spanning the full
/// width minus the corners, one vertical rectangle spanning the full height
/// minus the corners, and four corner circles of diameter `2 * radius`.
/// A radius of at least half the smaller dimension produces overlapping
/// shapes; callers choose the radius conservatively.
pub fn fill_rounded_rect(
    canvas: &mut RgbImage,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    radius: u32,
    color: Rgb<u8>,
) {
    let r = radius as i64;
    let w = width as i64;
    let h = height as i64;

    fill_rect(canvas, x + r, y, width.saturating_sub(2 * radius), height, color);
    fill_rect(canvas, x, y + r, width, height.saturating_sub(2 * radius), color);

    let rf = radius as f32;
    fill_circle(canvas, (x + r) as f32, (y + r) as f32, rf, color);
    fill_circle(canvas, (x + w - r) as f32, (y + r) as f32, rf, color);
    fill_circle(canvas, (x + r) as f32, (y + h - r) as f32, rf, color);
    fill_circle(canvas, (x + w - r) as f32, (y + h - r) as f32, rf, color);
}

/// Replaces the alpha channel of `img` with an inscribed-circle mask.
///
/// Pixels whose centers lie within the inscribed circle become fully opaque;
/// everything outside becomes fully transparent, discarding any alpha the
/// source image carried.
pub fn circular_alpha_mask(img: &mut RgbaImage) {
    let cx = img.width() as f32 / 2.0;
    let cy = img.height() as f32 / 2.0;
    let radius = img.width().min(img.height()) as f32 / 2.0;
    let r_sq = radius * radius;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        pixel[3] = if dx * dx + dy * dy <= r_sq { 255 } else { 0 };
    }
}

/// Composites an RGBA image onto the opaque canvas at the given position.
///
/// Standard source-over blending against an opaque destination; source
/// pixels outside the canvas are skipped.
pub fn overlay_rgba(canvas: &mut RgbImage, src: &RgbaImage, x: i64, y: i64) {
    let dest_width = canvas.width() as i64;
    let dest_height = canvas.height() as i64;

    for sy in 0..src.height() {
        for sx in 0..src.width() {
            let dx = x + sx as i64;
            let dy = y + sy as i64;
            if dx < 0 || dy < 0 || dx >= dest_width || dy >= dest_height {
                continue;
            }

            let src_pixel = *src.get_pixel(sx, sy);
            if src_pixel[3] == 0 {
                continue;
            }

            let dst_pixel = *canvas.get_pixel(dx as u32, dy as u32);
            canvas.put_pixel(dx as u32, dy as u32, blend_over_opaque(src_pixel, dst_pixel));
        }
    }
}

/// Blends an RGBA source pixel over an opaque RGB destination pixel.
fn blend_over_opaque(src: Rgba<u8>, dst: Rgb<u8>) -> Rgb<u8> {
    let sa = src[3] as f32 / 255.0;
    let blend = |s: u8, d: u8| -> u8 {
        let out = s as f32 * sa + d as f32 * (1.0 - sa);
        out.round().min(255.0) as u8
    };
    Rgb([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
    ])
}
