//! Composition of the minesweeper board artwork.
//!
//! Renders at any square edge length; every measurement scales from the
//! 512 px reference design so an iconset entry at 16 px and the master at
//! 512 px come out of the same code path.

use image::{Rgba, RgbaImage};

use crate::constants::canvas::{
    BORDER_WIDTH, FLAG_POLE_WIDTH, GRID_CELLS, GRID_LINE_WIDTH, REFERENCE_SIZE,
};
use crate::draw;
use crate::font::DigitFont;
use crate::theme::Theme;

pub fn render(size: u32, theme: &Theme, font: &DigitFont) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba(theme.palette.background));

    let scale = size as f32 / REFERENCE_SIZE as f32;
    let border = ((BORDER_WIDTH as f32 * scale) as u32).max(1);
    let cell = size / GRID_CELLS;

    paint_bands(&mut img, theme);
    draw::stroke_rect(&mut img, 0, 0, size, size, border, Rgba(theme.palette.border));
    paint_grid(&mut img, theme, border, cell, scale);
    paint_mines(&mut img, theme, cell);
    paint_flag(&mut img, theme, cell, scale);
    paint_digits(&mut img, theme, font, cell);

    img
}

/// One blended row per scanline, strongest at the top and fading to nothing
/// at the bottom, approximating a vertical gradient.
fn paint_bands(img: &mut RgbaImage, theme: &Theme) {
    let size = img.height();
    let [r, g, b] = theme.palette.band;

    for y in 0..size {
        let alpha = (255.0 * (1.0 - y as f32 / size as f32) * 0.1) as u8;
        draw::blend_row(img, y, Rgba([r, g, b, alpha]));
    }
}

fn paint_grid(img: &mut RgbaImage, theme: &Theme, border: u32, cell: u32, scale: f32) {
    let size = img.width();
    let line = ((GRID_LINE_WIDTH as f32 * scale) as u32).max(1);
    let span = size.saturating_sub(2 * border);
    let color = Rgba(theme.palette.grid);

    for i in 1..GRID_CELLS {
        let pos = (i * cell) as i32 - (line / 2) as i32;
        draw::fill_rect(img, pos, border as i32, line, span, color);
        draw::fill_rect(img, border as i32, pos, span, line, color);
    }
}

fn paint_mines(img: &mut RgbaImage, theme: &Theme, cell: u32) {
    let radius = (cell / 4).max(1);
    for &[col, row] in &theme.layout.mines {
        let (cx, cy) = cell_center(col, row, cell);
        draw::fill_circle(img, cx, cy, radius, Rgba(theme.palette.mine));
    }
}

fn paint_flag(img: &mut RgbaImage, theme: &Theme, cell: u32, scale: f32) {
    let [col, row] = theme.layout.flag;
    let (fx, fy) = cell_center(col, row, cell);

    let pole_w = ((FLAG_POLE_WIDTH as f32 * scale) as u32).max(1);
    let pole_h = (cell / 2).max(2);
    draw::fill_rect(
        img,
        fx - (pole_w / 2) as i32,
        fy - (pole_h / 2) as i32,
        pole_w,
        pole_h,
        Rgba(theme.palette.flag_pole),
    );

    // Cloth hangs off the pole top, pointing right
    let top = fy as f32 - pole_h as f32 / 2.0;
    draw::fill_triangle(
        img,
        (fx as f32, top),
        (fx as f32 + cell as f32 / 3.0, top + pole_h as f32 / 4.0),
        (fx as f32, fy as f32),
        Rgba(theme.palette.flag_cloth),
    );
}

fn paint_digits(img: &mut RgbaImage, theme: &Theme, font: &DigitFont, cell: u32) {
    let px_height = (cell / 2).max(1);
    for digit_cell in &theme.layout.digits {
        let (cx, cy) = cell_center(digit_cell.col, digit_cell.row, cell);
        let color = theme.digit_color(digit_cell.digit);
        font.draw_digit(img, digit_cell.digit, cx, cy, px_height, Rgba(color));
    }
}

fn cell_center(col: u32, row: u32, cell: u32) -> (i32, i32) {
    (
        (col * cell + cell / 2) as i32,
        (row * cell + cell / 2) as i32,
    )
}
