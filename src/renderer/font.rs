//! Built-in 5x7 bitmap font
//!
//! Uppercase letters, digits and a little punctuation. Lowercase input is drawn
//! with the uppercase glyphs. Glyphs are scaled by whole pixels.

use super::framebuffer::FrameBuffer;
use super::raster::fill_rect;
use crate::color::Rgb;

const GLYPH_W: i32 = 5;
const GLYPH_H: i32 = 7;
/// Horizontal advance in unscaled pixels (glyph + 1 column gap)
const ADVANCE: i32 = GLYPH_W + 1;

/// Text size for HUD labels
pub const SMALL: i32 = 2;
/// Text size for headlines
pub const LARGE: i32 = 4;

/// 5x7 glyph rows; the low 5 bits are pixels, bit 4 is the leftmost column.
fn glyph(ch: char) -> Option<[u8; 7]> {
    macro_rules! g {
        ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr, $g:expr) => {
            Some([$a, $b, $c, $d, $e, $f, $g])
        };
    }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110),
        '1' => g!(0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        '2' => g!(0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111),
        '3' => g!(0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110),
        '4' => g!(0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010),
        '5' => g!(0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110),
        '6' => g!(0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110),
        '7' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000),
        '8' => g!(0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110),
        '9' => g!(0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100),

        'A' => g!(0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'B' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110),
        'C' => g!(0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110),
        'D' => g!(0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100),
        'E' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111),
        'F' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000),
        'G' => g!(0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111),
        'H' => g!(0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'I' => g!(0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        'J' => g!(0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100),
        'K' => g!(0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001),
        'L' => g!(0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111),
        'M' => g!(0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001),
        'N' => g!(0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001),
        'O' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'P' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000),
        'Q' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101),
        'R' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001),
        'S' => g!(0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110),
        'T' => g!(0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),
        'U' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'V' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100),
        'W' => g!(0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010),
        'X' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001),
        'Y' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100),
        'Z' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111),

        ' ' => g!(0, 0, 0, 0, 0, 0, 0),
        '|' => g!(0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),
        ':' => g!(0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000),
        '.' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000),
        ',' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b01000),
        '-' => g!(0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000),
        '!' => g!(0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100),
        '/' => g!(0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000),
        '(' => g!(0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010),
        ')' => g!(0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000),

        _ => None,
    }
}

fn draw_glyph(fb: &mut FrameBuffer, x: i32, y: i32, rows: &[u8; 7], scale: i32, color: Rgb) {
    for (ry, bits) in rows.iter().enumerate() {
        for rx in 0..GLYPH_W {
            if bits & (1 << (GLYPH_W - 1 - rx)) != 0 {
                let px = x + rx * scale;
                let py = y + ry as i32 * scale;
                fill_rect(fb, px, py, px + scale, py + scale, color);
            }
        }
    }
}

/// Width in pixels of `text` at `scale` (no trailing gap)
pub fn text_width(text: &str, scale: i32) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 {
        return 0;
    }
    (n * ADVANCE - 1) * scale
}

/// Height in pixels of one line at `scale`
pub fn line_height(scale: i32) -> i32 {
    GLYPH_H * scale
}

/// Draw `text` with its top-left corner at (x, y) and a dark drop shadow.
///
/// Unknown characters advance the pen without drawing.
pub fn draw_text(fb: &mut FrameBuffer, x: i32, y: i32, text: &str, scale: i32, color: Rgb) {
    let scale = scale.max(1);
    let mut pen = x;
    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            draw_glyph(fb, pen + scale, y + scale, &rows, scale, Rgb::BLACK);
            draw_glyph(fb, pen, y, &rows, scale, color);
        }
        pen += ADVANCE * scale;
    }
}

/// Draw `text` horizontally centered on the surface, top edge at `y`.
pub fn draw_text_centered(fb: &mut FrameBuffer, y: i32, text: &str, scale: i32, color: Rgb) {
    let x = (fb.width as i32 - text_width(text, scale.max(1))) / 2;
    draw_text(fb, x, y, text, scale, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_for_hud_strings() {
        let strings = [
            "Score: 1234567890",
            "Time: 12.5s",
            "Calm Flight Lost",
            "Press R to drift again   |   Esc to quit",
            "FPS: 60",
        ];
        for s in strings {
            for ch in s.chars() {
                assert!(glyph(ch).is_some(), "missing glyph {ch:?} in {s:?}");
            }
        }
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("AB", 2), 22);
    }

    #[test]
    fn test_draw_text_pixels() {
        let mut fb = FrameBuffer::try_new(40, 20).unwrap();
        let white = Rgb::WHITE;
        let gray = Rgb::new(50, 50, 50);
        fb.fill(gray);
        draw_text(&mut fb, 0, 0, "L", 1, white);
        // 'L' has a full left column and a full bottom row
        for y in 0..7 {
            assert_eq!(fb.pixel(0, y), Some(white));
        }
        assert_eq!(fb.pixel(4, 6), Some(white));
        // Shadow sits one pixel down and right
        assert_eq!(fb.pixel(5, 7), Some(Rgb::BLACK));
        assert_eq!(fb.pixel(1, 3), Some(Rgb::BLACK));
        assert_eq!(fb.pixel(3, 0), Some(gray));
    }

    #[test]
    fn test_centered_text() {
        let mut fb = FrameBuffer::try_new(100, 30).unwrap();
        draw_text_centered(&mut fb, 5, "I", 2, Rgb::WHITE);
        // 'I' is 10 wide at scale 2; starts at x = 45, stem at columns 2..3 -> x 49..51
        assert_eq!(fb.pixel(49, 10), Some(Rgb::WHITE));
        assert_eq!(fb.pixel(50, 10), Some(Rgb::WHITE));
    }

    #[test]
    fn test_offscreen_text_is_clipped() {
        let mut fb = FrameBuffer::try_new(10, 10).unwrap();
        draw_text(&mut fb, -100, -100, "SCORE", 4, Rgb::WHITE);
        draw_text(&mut fb, 500, 500, "SCORE", 4, Rgb::WHITE);
        assert!(fb.pixels.iter().all(|p| *p == 0));
    }
}
