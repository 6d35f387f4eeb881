//! Glyph entries and their packed bitmaps.

use types::Codepoint;

use crate::ReadError;

/// A glyph located in the font data.
///
/// This borrows the font buffer directly; no copying is performed, so any
/// number of `GlyphRef`s may be alive at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphRef<'a> {
    codepoint: Codepoint,
    width: u8,
    height: u8,
    bitmap: &'a [u8],
}

impl<'a> GlyphRef<'a> {
    pub(crate) fn new(codepoint: Codepoint, width: u8, height: u8, bitmap: &'a [u8]) -> Self {
        GlyphRef {
            codepoint,
            width,
            height,
            bitmap,
        }
    }

    /// The codepoint stored in the glyph entry.
    ///
    /// When a lookup fell back to the replacement glyph this is `'?'`, not
    /// the codepoint that was requested.
    pub fn codepoint(&self) -> Codepoint {
        self.codepoint
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// The packed 1-bit bitmap: row-major, MSB first, rows not padded.
    pub fn bitmap(&self) -> &'a [u8] {
        self.bitmap
    }

    /// Whether the pixel at (`x`, `y`) is set.
    ///
    /// Coordinates outside the glyph are never set.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        is_pixel_set(self.bitmap, self.width, self.height, x, y)
    }

    /// Copy the bitmap into a caller-provided buffer, returning the number of
    /// bytes written.
    pub fn copy_bitmap_to(&self, out: &mut [u8]) -> Result<usize, ReadError> {
        let len = self.bitmap.len();
        out.get_mut(..len)
            .ok_or(ReadError::OutOfBounds)?
            .copy_from_slice(self.bitmap);
        Ok(len)
    }
}

/// Test a single pixel of a packed bitmap with the given dimensions.
pub fn is_pixel_set(bitmap: &[u8], width: u8, height: u8, x: u32, y: u32) -> bool {
    if x >= width as u32 || y >= height as u32 {
        return false;
    }
    let bit = (y * width as u32 + x) as usize;
    bitmap
        .get(bit / 8)
        .is_some_and(|byte| byte & (0x80 >> (bit % 8)) != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_msb_first() {
        // 3x3 cross: .#. / ### / .#.  -> 010 111 010 -> 0101_1101 0...
        let bitmap = [0b0101_1101, 0b0000_0000];
        let glyph = GlyphRef::new(Codepoint::new(0x2B), 3, 3, &bitmap);
        let rendered = (0..3)
            .map(|y| {
                (0..3)
                    .map(|x| if glyph.pixel(x, y) { '#' } else { '.' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        assert_eq!(rendered, [".#.", "###", ".#."]);
        assert!(!glyph.pixel(3, 0));
        assert!(!glyph.pixel(0, 3));
    }

    #[test]
    fn copy_to_caller_buffer() {
        let bitmap = [1, 2, 3, 4, 5, 6, 7, 8];
        let glyph = GlyphRef::new(Codepoint::new(0x41), 8, 8, &bitmap);
        let mut out = [0u8; 12];
        assert_eq!(glyph.copy_bitmap_to(&mut out), Ok(8));
        assert_eq!(&out[..8], &bitmap);
        let mut small = [0u8; 4];
        assert_eq!(
            glyph.copy_bitmap_to(&mut small),
            Err(ReadError::OutOfBounds)
        );
    }
}
