//! Raster primitives for the hall diagram.
//!
//! All drawing is clipped to the image bounds; coordinates may lie partly
//! or entirely outside the canvas.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};

/// Glyph cell size of the bitmap font, in pixels.
pub const GLYPH_SIZE: i32 = 8;

/// Fill an axis-aligned rectangle.
pub fn fill_rect(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32, color: Rgba<u8>) {
    for py in y..y + h {
        for px in x..x + w {
            put_pixel(img, px, py, color);
        }
    }
}

/// Draw a one-pixel outline just inside the rectangle.
pub fn stroke_rect(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32, color: Rgba<u8>) {
    if w <= 0 || h <= 0 {
        return;
    }
    for px in x..x + w {
        put_pixel(img, px, y, color);
        put_pixel(img, px, y + h - 1, color);
    }
    for py in y..y + h {
        put_pixel(img, x, py, color);
        put_pixel(img, x + w - 1, py, color);
    }
}

/// Draw `text` with its baseline at `baseline_y`.
///
/// Glyphs occupy the [`GLYPH_SIZE`] rows directly above the baseline.
/// Characters outside the basic Latin set are skipped but still advance.
pub fn draw_text(img: &mut RgbaImage, x: i32, baseline_y: i32, text: &str, color: Rgba<u8>) {
    let top = baseline_y - GLYPH_SIZE;
    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let origin_x = x + i as i32 * GLYPH_SIZE;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                // Bit 0 is the leftmost pixel of the row.
                if bits & (1u8 << col) != 0 {
                    put_pixel(img, origin_x + col, top + row as i32, color);
                }
            }
        }
    }
}

/// Width in pixels of `text` rendered with [`draw_text`].
pub fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * GLYPH_SIZE
}

fn put_pixel(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < img.width() && y < img.height() {
        img.put_pixel(x, y, color);
    }
}
