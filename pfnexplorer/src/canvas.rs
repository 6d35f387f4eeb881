//! An in-memory 1-bit surface for previewing text.

use pfn_render::{DrawGlyph, GlyphBitmap};

pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    fn set(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = true;
    }
}

impl DrawGlyph for Canvas {
    fn draw_glyph(&mut self, glyph: &GlyphBitmap<'_>, x: i32, y: i32) {
        for gy in 0..glyph.height() as u32 {
            for gx in 0..glyph.width() as u32 {
                if glyph.pixel(gx, gy) {
                    self.set(x as i64 + gx as i64, y as i64 + gy as i64);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfn_render::Font;
    use pfn_test_data::fonts;

    #[test]
    fn draws_text() {
        let buf = fonts::simple_8x8();
        let mut font = Font::with_painter(&buf, Canvas::new(16, 8)).unwrap();
        assert_eq!(font.draw_str("AB", 0, 0), 16);
        let canvas = font.into_painter().unwrap();
        // top of 'A'
        assert!(!canvas.get(2, 0));
        assert!(canvas.get(3, 0));
        assert!(canvas.get(4, 0));
        // left edge of 'B'
        assert!(canvas.get(9, 0));
        assert!(!canvas.get(8, 0));
    }

    #[test]
    fn clips() {
        let buf = fonts::simple_8x8();
        let mut font = Font::with_painter(&buf, Canvas::new(4, 4)).unwrap();
        assert_eq!(font.draw_str("AB", -2, -2), 16);
        let canvas = font.into_painter().unwrap();
        // row 4 of 'A' is the crossbar, shifted two pixels left and up
        assert!(canvas.get(0, 2));
        assert!(canvas.get(3, 2));
        assert!(!canvas.get(0, 0));
        assert!(!canvas.get(4, 2));
    }
}
