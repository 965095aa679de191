//! Pixel-level drawing primitives for the icon canvas.
//!
//! All helpers clip against the image bounds, so callers can pass geometry
//! that hangs over an edge (small render sizes round cell math down to zero).

use image::{Rgba, RgbaImage};

/// Fill an axis-aligned rectangle. Coordinates may be negative; the visible
/// part is clipped to the image.
pub fn fill_rect(img: &mut RgbaImage, x: i32, y: i32, w: u32, h: u32, color: Rgba<u8>) {
    let width = img.width() as i32;
    let height = img.height() as i32;

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w as i32).min(width);
    let y1 = (y + h as i32).min(height);

    for py in y0..y1 {
        for px in x0..x1 {
            img.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Draw a rectangular frame of the given stroke width, inset inside the
/// rectangle `(x, y, w, h)`.
pub fn stroke_rect(img: &mut RgbaImage, x: i32, y: i32, w: u32, h: u32, stroke: u32, color: Rgba<u8>) {
    if stroke == 0 || w == 0 || h == 0 {
        return;
    }
    let s = stroke.min(w).min(h);

    // Top and bottom strips
    fill_rect(img, x, y, w, s, color);
    fill_rect(img, x, y + (h - s) as i32, w, s, color);
    // Left and right strips
    fill_rect(img, x, y, s, h, color);
    fill_rect(img, x + (w - s) as i32, y, s, h, color);
}

/// Fill a circle centered at `(cx, cy)`.
pub fn fill_circle(img: &mut RgbaImage, cx: i32, cy: i32, radius: u32, color: Rgba<u8>) {
    let width = img.width() as i32;
    let height = img.height() as i32;
    let r = radius as i32;
    let r_sq = r * r;

    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r_sq {
                let px = cx + dx;
                let py = cy + dy;
                if px >= 0 && px < width && py >= 0 && py < height {
                    img.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}

/// Fill a triangle given by three vertices, using an edge-function test
/// against each pixel center inside the bounding box.
pub fn fill_triangle(
    img: &mut RgbaImage,
    a: (f32, f32),
    b: (f32, f32),
    c: (f32, f32),
    color: Rgba<u8>,
) {
    let area = edge(a, b, c);
    if area == 0.0 {
        return;
    }
    let sign = area.signum();

    let min_x = a.0.min(b.0).min(c.0).floor().max(0.0) as u32;
    let min_y = a.1.min(b.1).min(c.1).floor().max(0.0) as u32;
    let max_x = (a.0.max(b.0).max(c.0).ceil() as i64).clamp(0, img.width() as i64) as u32;
    let max_y = (a.1.max(b.1).max(c.1).ceil() as i64).clamp(0, img.height() as i64) as u32;

    for py in min_y..max_y {
        for px in min_x..max_x {
            let p = (px as f32 + 0.5, py as f32 + 0.5);
            if edge(a, b, p) * sign >= 0.0
                && edge(b, c, p) * sign >= 0.0
                && edge(c, a, p) * sign >= 0.0
            {
                img.put_pixel(px, py, color);
            }
        }
    }
}

fn edge(p: (f32, f32), q: (f32, f32), r: (f32, f32)) -> f32 {
    (q.0 - p.0) * (r.1 - p.1) - (q.1 - p.1) * (r.0 - p.0)
}

/// Source-over blend of a single pixel. A fully opaque color degenerates to
/// `put_pixel`; zero alpha is a no-op.
pub fn blend_pixel(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let a = color.0[3] as u32;
    if a == 0 {
        return;
    }
    if a == 255 {
        img.put_pixel(x as u32, y as u32, color);
        return;
    }

    let dst = img.get_pixel_mut(x as u32, y as u32);
    for i in 0..3 {
        let src = color.0[i] as u32;
        let bg = dst.0[i] as u32;
        dst.0[i] = ((src * a + bg * (255 - a)) / 255) as u8;
    }
    dst.0[3] = (a + dst.0[3] as u32 * (255 - a) / 255) as u8;
}

/// Blend one full-width row. Used for the banded background gradient.
pub fn blend_row(img: &mut RgbaImage, y: u32, color: Rgba<u8>) {
    if y >= img.height() {
        return;
    }
    for x in 0..img.width() {
        blend_pixel(img, x as i32, y as i32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(edge: u32) -> RgbaImage {
        RgbaImage::from_pixel(edge, edge, Rgba([0, 0, 0, 255]))
    }

    #[test]
    fn fill_rect_clips_to_image() {
        let mut img = canvas(8);
        fill_rect(&mut img, -4, -4, 20, 20, Rgba([255, 0, 0, 255]));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(7, 7).0, [255, 0, 0, 255]);
    }

    #[test]
    fn stroke_rect_leaves_interior_untouched() {
        let mut img = canvas(16);
        stroke_rect(&mut img, 0, 0, 16, 16, 2, Rgba([9, 9, 9, 255]));
        assert_eq!(img.get_pixel(0, 0).0, [9, 9, 9, 255]);
        assert_eq!(img.get_pixel(15, 1).0, [9, 9, 9, 255]);
        assert_eq!(img.get_pixel(8, 8).0, [0, 0, 0, 255]);
    }

    #[test]
    fn fill_circle_covers_center_not_corner() {
        let mut img = canvas(16);
        fill_circle(&mut img, 8, 8, 4, Rgba([1, 2, 3, 255]));
        assert_eq!(img.get_pixel(8, 8).0, [1, 2, 3, 255]);
        assert_eq!(img.get_pixel(8, 12).0, [1, 2, 3, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn fill_triangle_covers_centroid_regardless_of_winding() {
        let a = (2.0, 2.0);
        let b = (13.0, 3.0);
        let c = (7.0, 13.0);

        let mut img = canvas(16);
        fill_triangle(&mut img, a, b, c, Rgba([5, 5, 5, 255]));
        assert_eq!(img.get_pixel(7, 6).0, [5, 5, 5, 255]);

        let mut img = canvas(16);
        fill_triangle(&mut img, c, b, a, Rgba([5, 5, 5, 255]));
        assert_eq!(img.get_pixel(7, 6).0, [5, 5, 5, 255]);
    }

    #[test]
    fn blend_pixel_mixes_half_alpha() {
        let mut img = canvas(2);
        blend_pixel(&mut img, 0, 0, Rgba([255, 255, 255, 128]));
        let px = img.get_pixel(0, 0).0;
        // 255 * 128/255 over black is ~128
        assert!(px[0] >= 127 && px[0] <= 129);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn blend_pixel_ignores_out_of_bounds() {
        let mut img = canvas(2);
        blend_pixel(&mut img, -1, 0, Rgba([255, 255, 255, 255]));
        blend_pixel(&mut img, 0, 5, Rgba([255, 255, 255, 255]));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }
}
