use crate::model::Polygon;
use image::{Rgba, RgbaImage};

/// Paste `src` onto `canvas` so that its center lands on `(cx, cy)`.
///
/// Source alpha is blended over the canvas ("over" operator); pixels falling
/// outside the canvas are clipped.
pub fn paste_centered(src: &RgbaImage, canvas: &mut RgbaImage, cx: u32, cy: u32) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();
    let dx = i64::from(cx) - i64::from(sw / 2);
    let dy = i64::from(cy) - i64::from(sh / 2);

    for (sx, sy, px) in src.enumerate_pixels() {
        let a = px[3];
        if a == 0 {
            continue;
        }
        let tx = dx + i64::from(sx);
        let ty = dy + i64::from(sy);
        if tx < 0 || ty < 0 || tx >= i64::from(cw) || ty >= i64::from(ch) {
            continue;
        }
        let (tx, ty) = (tx as u32, ty as u32);
        if a == 255 {
            canvas.put_pixel(tx, ty, *px);
            continue;
        }
        let dst = *canvas.get_pixel(tx, ty);
        canvas.put_pixel(tx, ty, blend_over(*px, dst));
    }
}

fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = u32::from(src[3]);
    let da = u32::from(dst[3]);
    // out_a = sa + da * (1 - sa), all in 0..=255
    let out_a = sa + da * (255 - sa) / 255;
    if out_a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let mut out = [0u8; 4];
    for i in 0..3 {
        let s = u32::from(src[i]) * sa;
        let d = u32::from(dst[i]) * da * (255 - sa) / 255;
        out[i] = ((s + d) / out_a).min(255) as u8;
    }
    out[3] = out_a as u8;
    Rgba(out)
}

/// Draw a 1px outline along the edges of `polygon` (debug).
pub fn draw_polygon_outline(canvas: &mut RgbaImage, polygon: &Polygon, color: Rgba<u8>) {
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[(i + 1) % polygon.len()];
        draw_line(canvas, (a.x, a.y), (b.x, b.y), color);
    }
}

fn draw_line(canvas: &mut RgbaImage, from: (f64, f64), to: (f64, f64), color: Rgba<u8>) {
    let (cw, ch) = canvas.dimensions();
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).ceil().max(1.0) as u32;
    for s in 0..=steps {
        let t = f64::from(s) / f64::from(steps);
        let x = (from.0 + (to.0 - from.0) * t).round();
        let y = (from.1 + (to.1 - from.1) * t).round();
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let (x, y) = (x as u32, y as u32);
        // points on the far edge map to the last pixel column/row
        let (x, y) = (x.min(cw.saturating_sub(1)), y.min(ch.saturating_sub(1)));
        if cw > 0 && ch > 0 {
            canvas.put_pixel(x, y, color);
        }
    }
}
