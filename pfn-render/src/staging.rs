//! A reusable, word-aligned buffer for glyph bitmaps.

use alloc::vec::Vec;

use read_pfn::GlyphRef;

use crate::GlyphBitmap;

/// Scratch space holding the most recently staged glyph bitmap.
///
/// The buffer is backed by `u32`s so it is always 4-byte aligned and a
/// multiple of four bytes long, which lets display drivers move it with word
/// or DMA transfers. It is sized once, from the largest glyph dimensions in a
/// font, and reused for every glyph.
#[derive(Clone, Debug, Default)]
pub struct GlyphStaging {
    words: Vec<u32>,
}

impl GlyphStaging {
    /// Create a buffer able to hold `max_bitmap_len` bytes.
    pub fn new(max_bitmap_len: usize) -> Self {
        Self {
            words: alloc::vec![0; max_bitmap_len.div_ceil(4)],
        }
    }

    /// The usable size of the buffer in bytes (always a multiple of four).
    pub fn capacity(&self) -> usize {
        self.words.len() * 4
    }

    /// Copy a glyph's bitmap into the buffer.
    ///
    /// Any previously staged bitmap is overwritten. If the glyph is larger
    /// than the buffer (it came from a different font) the buffer grows.
    pub fn stage(&mut self, glyph: &GlyphRef<'_>) -> GlyphBitmap<'_> {
        let src = glyph.bitmap();
        let needed = src.len().div_ceil(4);
        if needed > self.words.len() {
            log::debug!(
                "growing glyph staging buffer from {} to {} bytes",
                self.capacity(),
                needed * 4
            );
            self.words.resize(needed, 0);
        }
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(self.words.as_mut_slice());
        bytes[..src.len()].copy_from_slice(src);
        let words = &self.words[..needed];
        GlyphBitmap {
            codepoint: glyph.codepoint(),
            width: glyph.width(),
            height: glyph.height(),
            data: &bytemuck::cast_slice::<u32, u8>(words)[..src.len()],
            words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfn_test_data::fonts;
    use read_pfn::FontRef;

    #[test]
    fn padded_to_words() {
        assert_eq!(GlyphStaging::new(0).capacity(), 0);
        assert_eq!(GlyphStaging::new(1).capacity(), 4);
        assert_eq!(GlyphStaging::new(8).capacity(), 8);
        assert_eq!(GlyphStaging::new(21).capacity(), 24);
    }

    #[test]
    fn stage_copies_bitmap() {
        let buf = fonts::simple_8x8();
        let font = FontRef::new(&buf).unwrap();
        let mut staging = GlyphStaging::new(font.max_bitmap_len());
        let glyph = font.resolve('A').unwrap();
        let staged = staging.stage(&glyph);
        assert_eq!(staged.data(), &fonts::PATTERN_A);
        assert_eq!(staged.words().len(), 2);
        assert_eq!((staged.width(), staged.height()), (8, 8));
        assert_eq!(staging.capacity(), 8);
    }

    #[test]
    fn smaller_glyph_after_larger() {
        let buf = fonts::two_blocks();
        let font = FontRef::new(&buf).unwrap();
        let mut staging = GlyphStaging::new(font.max_bitmap_len());
        assert_eq!(staging.capacity(), 32);
        let wide = font.resolve(0x100u32).unwrap();
        assert_eq!(staging.stage(&wide).data(), &fonts::PATTERN_WIDE);
        let narrow = font.resolve('B').unwrap();
        let staged = staging.stage(&narrow);
        assert_eq!(staged.data(), &fonts::PATTERN_B);
        assert_eq!(staged.words().len(), 2);
    }

    #[test]
    fn grows_for_foreign_glyphs() {
        let small = fonts::simple_8x8();
        let large = fonts::two_blocks();
        let mut staging = GlyphStaging::new(FontRef::new(&small).unwrap().max_bitmap_len());
        let large = FontRef::new(&large).unwrap();
        let glyph = large.resolve(0x101u32).unwrap();
        assert_eq!(staging.stage(&glyph).data(), &[0x0F; 32]);
        assert_eq!(staging.capacity(), 32);
    }
}
