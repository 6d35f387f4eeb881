//! The interface between text rendering and a display.

use read_pfn::{glyph::is_pixel_set, types::Codepoint};

/// A glyph bitmap staged for drawing.
///
/// The bitmap lives in a [`GlyphStaging`](crate::GlyphStaging) buffer and is
/// only valid until the next glyph is staged; the borrow enforces this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphBitmap<'a> {
    pub(crate) codepoint: Codepoint,
    pub(crate) width: u8,
    pub(crate) height: u8,
    pub(crate) data: &'a [u8],
    pub(crate) words: &'a [u32],
}

impl<'a> GlyphBitmap<'a> {
    /// The codepoint of the glyph that was staged.
    pub fn codepoint(&self) -> Codepoint {
        self.codepoint
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// The packed bitmap: row-major, MSB first, `ceil(width * height / 8)`
    /// bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The staging buffer as 32-bit words.
    ///
    /// This covers the whole bitmap and may include trailing bytes left over
    /// from earlier, larger glyphs. Useful for word-at-a-time copies into
    /// display memory.
    pub fn words(&self) -> &'a [u32] {
        self.words
    }

    /// Whether the pixel at (`x`, `y`) is set.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        is_pixel_set(self.data, self.width, self.height, x, y)
    }
}

/// Interface for receiving glyphs as text is drawn.
///
/// This is implemented by whatever owns the actual display. Glyphs arrive
/// left to right; `x` and `y` are the top-left corner of the glyph cell.
pub trait DrawGlyph {
    fn draw_glyph(&mut self, glyph: &GlyphBitmap<'_>, x: i32, y: i32);
}

impl<F> DrawGlyph for F
where
    F: FnMut(&GlyphBitmap<'_>, i32, i32),
{
    fn draw_glyph(&mut self, glyph: &GlyphBitmap<'_>, x: i32, y: i32) {
        self(glyph, x, y)
    }
}

/// A [`DrawGlyph`] that is never called.
///
/// This is the painter type of a [`Font`](crate::Font) created without one;
/// drawing with such a font advances nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDraw;

impl DrawGlyph for NoDraw {
    fn draw_glyph(&mut self, _glyph: &GlyphBitmap<'_>, _x: i32, _y: i32) {}
}
