//! Digit glyph rendering with an explicit two-branch font choice.
//!
//! The preferred branch loads a system TrueType face via `ab_glyph`. If no
//! candidate font exists on the host, the builtin 5x7 bitmap face takes over
//! so icon generation never fails on a bare machine.

use ab_glyph::{Font, FontVec, PxScale};
use image::{Rgba, RgbaImage};
use std::fs;
use std::path::Path;

use crate::constants;
use crate::draw;

pub enum DigitFont {
    Truetype(FontVec),
    Builtin,
}

impl DigitFont {
    /// Probe the candidate system fonts in order; fall back to the builtin
    /// bitmap face when none loads. Never fails.
    pub fn load() -> Self {
        for path in constants::font::CANDIDATES {
            if let Some(font) = load_truetype(Path::new(path)) {
                return DigitFont::Truetype(font);
            }
        }
        DigitFont::Builtin
    }

    /// Human-readable name for progress output.
    pub fn describe(&self) -> &'static str {
        match self {
            DigitFont::Truetype(_) => "system TrueType",
            DigitFont::Builtin => "builtin 5x7 bitmap",
        }
    }

    /// Rasterize one digit centered on `(cx, cy)` at roughly `px_height`
    /// pixels tall.
    pub fn draw_digit(
        &self,
        img: &mut RgbaImage,
        digit: char,
        cx: i32,
        cy: i32,
        px_height: u32,
        color: Rgba<u8>,
    ) {
        match self {
            DigitFont::Truetype(font) => {
                // A face without this glyph yields no outline; the bitmap
                // face still covers every ASCII digit.
                if !draw_truetype_digit(font, img, digit, cx, cy, px_height, color) {
                    draw_builtin_digit(img, digit, cx, cy, px_height, color);
                }
            }
            DigitFont::Builtin => draw_builtin_digit(img, digit, cx, cy, px_height, color),
        }
    }
}

fn load_truetype(path: &Path) -> Option<FontVec> {
    let data = fs::read(path).ok()?;
    // Index 0 selects the first face of a .ttc collection; plain .ttf/.otf
    // files ignore the index.
    FontVec::try_from_vec_and_index(data, 0).ok()
}

fn draw_truetype_digit(
    font: &FontVec,
    img: &mut RgbaImage,
    digit: char,
    cx: i32,
    cy: i32,
    px_height: u32,
    color: Rgba<u8>,
) -> bool {
    let scale = PxScale::from(px_height as f32);
    let glyph = font
        .glyph_id(digit)
        .with_scale_and_position(scale, ab_glyph::point(0.0, 0.0));

    let Some(outlined) = font.outline_glyph(glyph) else {
        return false;
    };

    // Center the ink box on the cell center, same as measuring the text
    // bounding box and offsetting by half of it.
    let bounds = outlined.px_bounds();
    let left = cx as f32 - bounds.width() / 2.0;
    let top = cy as f32 - bounds.height() / 2.0;

    outlined.draw(|gx, gy, coverage| {
        let alpha = (coverage * color.0[3] as f32).round() as u8;
        if alpha > 0 {
            let px = (left + gx as f32).round() as i32;
            let py = (top + gy as f32).round() as i32;
            draw::blend_pixel(img, px, py, Rgba([color.0[0], color.0[1], color.0[2], alpha]));
        }
    });
    true
}

/// 5x7 digit bitmaps, one row per byte, bit 4 is the leftmost column.
const DIGIT_ROWS: [[u8; 7]; 10] = [
    // 0
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    // 1
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 2
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    // 3
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    // 4
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    // 5
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    // 6
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    // 7
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    // 8
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    // 9
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

fn draw_builtin_digit(
    img: &mut RgbaImage,
    digit: char,
    cx: i32,
    cy: i32,
    px_height: u32,
    color: Rgba<u8>,
) {
    let Some(value) = digit.to_digit(10) else {
        return;
    };
    let rows = &DIGIT_ROWS[value as usize];

    let dot = (px_height / 7).max(1);
    let glyph_w = (5 * dot) as i32;
    let glyph_h = (7 * dot) as i32;
    let left = cx - glyph_w / 2;
    let top = cy - glyph_h / 2;

    for (row, bits) in rows.iter().enumerate() {
        for col in 0..5u32 {
            if bits & (1 << (4 - col)) != 0 {
                draw::fill_rect(
                    img,
                    left + (col * dot) as i32,
                    top + (row as u32 * dot) as i32,
                    dot,
                    dot,
                    color,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_colored(img: &RgbaImage, color: [u8; 4]) -> usize {
        img.pixels().filter(|p| p.0 == color).count()
    }

    #[test]
    fn builtin_face_covers_every_digit() {
        for d in '0'..='9' {
            let mut img = RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 0]));
            draw_builtin_digit(&mut img, d, 16, 16, 14, Rgba([10, 20, 30, 255]));
            assert!(
                count_colored(&img, [10, 20, 30, 255]) > 0,
                "digit {} rendered no pixels",
                d
            );
        }
    }

    #[test]
    fn builtin_face_ignores_non_digits() {
        let mut img = RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 0]));
        draw_builtin_digit(&mut img, 'x', 16, 16, 14, Rgba([255, 0, 0, 255]));
        assert_eq!(count_colored(&img, [255, 0, 0, 255]), 0);
    }

    #[test]
    fn builtin_glyph_is_centered() {
        let mut img = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 0]));
        draw_builtin_digit(&mut img, '8', 32, 32, 28, Rgba([255, 255, 255, 255]));

        let (mut min_x, mut max_x, mut min_y, mut max_y) = (u32::MAX, 0, u32::MAX, 0);
        for (x, y, p) in img.enumerate_pixels() {
            if p.0[3] != 0 {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
                min_y = min_y.min(y);
                max_y = max_y.max(y);
            }
        }
        let center_x = (min_x + max_x) / 2;
        let center_y = (min_y + max_y) / 2;
        assert!(center_x.abs_diff(32) <= 2);
        assert!(center_y.abs_diff(32) <= 2);
    }

    #[test]
    fn load_always_yields_a_usable_font() {
        let font = DigitFont::load();
        let mut img = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 0]));
        font.draw_digit(&mut img, '3', 32, 32, 28, Rgba([255, 0, 0, 255]));
        let inked = img.pixels().filter(|p| p.0[3] != 0).count();
        assert!(inked > 0, "no pixels rendered with {}", font.describe());
    }
}
