//! 5x7 bitmap font for HUD text
//!
//! Each glyph row is a 5-bit mask, most significant bit on the left, row 0 at
//! the top. Lit pixels become small quads. Lowercase letters render as
//! uppercase; unknown characters render as blanks.

use super::shapes::rect;
use super::vertex::Vertex;

const GLYPH_W: usize = 5;
const GLYPH_H: usize = 7;
/// Horizontal advance per character, in font pixels
const ADVANCE: usize = GLYPH_W + 1;

#[rustfmt::skip]
fn glyph(ch: char) -> [u8; GLYPH_H] {
    match ch.to_ascii_uppercase() {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '/' => [0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000],
        '[' => [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110],
        ']' => [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        _ => [0; GLYPH_H],
    }
}

/// Width of `text` in pixels at the given pixel scale
pub fn text_width(text: &str, scale: f32) -> f32 {
    let chars = text.chars().count();
    if chars == 0 {
        0.0
    } else {
        (chars * ADVANCE - 1) as f32 * scale
    }
}

/// Height of a line of text in pixels
pub fn text_height(scale: f32) -> f32 {
    GLYPH_H as f32 * scale
}

/// Append quads for `text` with its lower-left corner at (x, y)
pub fn draw_text(out: &mut Vec<Vertex>, x: f32, y: f32, text: &str, scale: f32, color: [f32; 4]) {
    let mut cursor_x = x;

    for ch in text.chars() {
        let rows = glyph(ch);
        for (row, &bits) in rows.iter().enumerate() {
            // Row 0 is the top of the glyph
            let py = y + (GLYPH_H - 1 - row) as f32 * scale;
            for col in 0..GLYPH_W {
                if (bits >> (GLYPH_W - 1 - col)) & 1 == 1 {
                    rect(out, cursor_x + col as f32 * scale, py, scale, scale, color);
                }
            }
        }
        cursor_x += ADVANCE as f32 * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pixels(ch: char) -> u32 {
        glyph(ch).iter().map(|r| r.count_ones()).sum()
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 2.0), 0.0);
        assert_eq!(text_width("A", 1.0), 5.0);
        assert_eq!(text_width("AB", 2.0), 22.0);
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut out = Vec::new();
        draw_text(&mut out, 0.0, 0.0, "   ", 2.0, [1.0; 4]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_quads_per_lit_pixel() {
        let mut out = Vec::new();
        draw_text(&mut out, 0.0, 0.0, "L", 1.0, [1.0; 4]);
        assert_eq!(out.len() as u32, lit_pixels('L') * 6);
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(glyph('r'), glyph('R'));
        assert_eq!(glyph('w'), glyph('W'));
    }

    #[test]
    fn test_glyphs_stay_in_box() {
        let mut out = Vec::new();
        draw_text(&mut out, 10.0, 20.0, "SCORE: 120", 2.0, [1.0; 4]);
        let max_x = 10.0 + text_width("SCORE: 120", 2.0);
        let max_y = 20.0 + text_height(2.0);
        for v in &out {
            assert!(v.position[0] >= 10.0 && v.position[0] <= max_x);
            assert!(v.position[1] >= 20.0 && v.position[1] <= max_y);
        }
    }

    #[test]
    fn test_hud_characters_are_defined() {
        for ch in "SCOREMISLVWAPUDGFNTH0123456789:[]()".chars() {
            assert!(lit_pixels(ch) > 0, "glyph for {ch:?} is blank");
        }
    }
}
