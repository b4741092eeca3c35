//! Word rasterization for the puzzle canvas.
//!
//! The layout only needs a bounding box per word; [`TextRenderer`] is that oracle.
//! [`BitmapFont`] is a self-contained implementation: a 5x7 block font scaled to
//! the requested size, thickened by a stroke, trimmed to its visible pixels and
//! turned by quarter rotations.

use crate::config::Rotation;
use image::{Rgba, RgbaImage, imageops};

/// A rendered word: the glyph image to paste plus its collision extents.
#[derive(Debug, Clone)]
pub struct RenderedText {
    pub image: RgbaImage,
    /// Collision width/height after rotation (glyph bounds plus collision padding).
    pub width: u32,
    pub height: u32,
}

/// Renders a string at a font size and rotation.
///
/// Returns `None` when the string has no visible pixels (empty, whitespace,
/// or only unsupported characters).
pub trait TextRenderer {
    fn render(&self, text: &str, font_size: u32, rotation: Rotation) -> Option<RenderedText>;
}

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;

// each row is 5 bits (MSB left)
const LETTERS_5X7: [[u8; 7]; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

const DIGITS_5X7: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

/// Glyph rows for `ch`; letters are case-insensitive. `None` for anything else.
fn glyph(ch: char) -> Option<&'static [u8; 7]> {
    if ch.is_ascii_alphabetic() {
        let idx = (ch.to_ascii_uppercase() as u8 - b'A') as usize;
        return LETTERS_5X7.get(idx);
    }
    ch.to_digit(10).and_then(|d| DIGITS_5X7.get(d as usize))
}

/// Scalable block font.
#[derive(Debug, Clone)]
pub struct BitmapFont {
    pub color: [u8; 4],
    /// Pixels added around every lit block to thicken strokes.
    pub stroke: u32,
    /// Transparent border kept around the trimmed glyphs in the output image.
    pub padding: u32,
    /// Added to each side of the trimmed glyph bounds for the collision extents.
    pub collision_padding: u32,
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self {
            color: [0, 0, 0, 255],
            stroke: 2,
            padding: 10,
            collision_padding: 10,
        }
    }
}

impl BitmapFont {
    pub fn with_color(mut self, color: [u8; 4]) -> Self {
        self.color = color;
        self
    }

    /// Pixel size of one font block for `font_size` (the height of a glyph cell).
    pub fn block_size(font_size: u32) -> u32 {
        (font_size / GLYPH_ROWS).max(1)
    }

    /// Draws `text` unrotated onto a transparent image large enough to hold it.
    fn rasterize(&self, text: &str, font_size: u32) -> RgbaImage {
        let scale = Self::block_size(font_size);
        let advance = (GLYPH_COLS + 1) * scale;
        let len = text.chars().count() as u32;
        let border = self.stroke + self.padding;
        let w = len * advance + 2 * border;
        let h = GLYPH_ROWS * scale + 2 * border;
        let mut img = RgbaImage::new(w, h);
        let color = Rgba(self.color);

        for (i, ch) in text.chars().enumerate() {
            let Some(rows) = glyph(ch) else {
                continue;
            };
            let x0 = border + i as u32 * advance;
            for (row_i, row) in rows.iter().enumerate() {
                for col in 0..GLYPH_COLS {
                    if (row >> (GLYPH_COLS - 1 - col)) & 1 == 0 {
                        continue;
                    }
                    let bx = x0 + col * scale;
                    let by = border + row_i as u32 * scale;
                    fill_block(
                        &mut img,
                        bx - self.stroke,
                        by - self.stroke,
                        scale + 2 * self.stroke,
                        scale + 2 * self.stroke,
                        color,
                    );
                }
            }
        }
        img
    }
}

fn fill_block(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, c: Rgba<u8>) {
    let (iw, ih) = img.dimensions();
    for yy in y.min(ih)..y.saturating_add(h).min(ih) {
        for xx in x.min(iw)..x.saturating_add(w).min(iw) {
            img.put_pixel(xx, yy, c);
        }
    }
}

/// Bounds `[x, y, w, h]` of the pixels whose alpha exceeds `threshold`;
/// `None` if every pixel is at or below it.
pub fn alpha_bounds(rgba: &RgbaImage, threshold: u8) -> Option<[u32; 4]> {
    let mut x1 = u32::MAX;
    let mut y1 = u32::MAX;
    let mut x2 = 0;
    let mut y2 = 0;
    for (x, y, px) in rgba.enumerate_pixels() {
        if px[3] > threshold {
            x1 = x1.min(x);
            y1 = y1.min(y);
            x2 = x2.max(x);
            y2 = y2.max(y);
        }
    }
    if x1 == u32::MAX {
        return None;
    }
    Some([x1, y1, x2 - x1 + 1, y2 - y1 + 1])
}

impl TextRenderer for BitmapFont {
    fn render(&self, text: &str, font_size: u32, rotation: Rotation) -> Option<RenderedText> {
        if font_size == 0 || text.is_empty() {
            return None;
        }
        let raw = self.rasterize(text, font_size);
        let [bx, by, bw, bh] = alpha_bounds(&raw, 0)?;

        let (rw, rh) = raw.dimensions();
        let cx = bx.saturating_sub(self.padding);
        let cy = by.saturating_sub(self.padding);
        let cw = (bx + bw + self.padding).min(rw) - cx;
        let ch = (by + bh + self.padding).min(rh) - cy;
        let trimmed = imageops::crop_imm(&raw, cx, cy, cw, ch).to_image();

        // quarter turns counter-clockwise as seen on screen
        let image = match rotation {
            Rotation::Deg0 => trimmed,
            Rotation::Deg90 => imageops::rotate270(&trimmed),
            Rotation::Deg180 => imageops::rotate180(&trimmed),
            Rotation::Deg270 => imageops::rotate90(&trimmed),
        };

        let (gw, gh) = if rotation.is_quarter_turn() {
            (bh, bw)
        } else {
            (bw, bh)
        };
        Some(RenderedText {
            image,
            width: gw + 2 * self.collision_padding,
            height: gh + 2 * self.collision_padding,
        })
    }
}
