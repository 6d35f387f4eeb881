//! Drawing text with a PFN font.

use read_pfn::{types::Codepoint, FontRef, ReadError};

use crate::{utf8::Utf8Codepoints, DrawGlyph, GlyphBitmap, GlyphStaging, NoDraw};

/// A loaded font together with its glyph staging buffer and painter.
///
/// The font data is borrowed for the lifetime of the `Font`; the only thing
/// the `Font` owns is the staging buffer, sized from the largest glyph
/// dimensions in the font.
///
/// Staging is shared, so a `Font` hands out one [`GlyphBitmap`] at a time.
/// For concurrent or reentrant lookups use [`FontRef::resolve`] through
/// [`Font::font_ref`], which does not copy.
#[derive(Clone, Debug)]
pub struct Font<'a, P = NoDraw> {
    font: FontRef<'a>,
    staging: GlyphStaging,
    painter: Option<P>,
}

impl<'a> Font<'a> {
    /// Load a font without a painter.
    ///
    /// Glyphs can be looked up and measured, but [`Font::draw_string`] draws
    /// nothing and returns zero.
    pub fn new(data: &'a [u8]) -> Result<Self, ReadError> {
        FontRef::new(data).map(|font| Self::from_parts(font, None))
    }
}

impl<'a, P: DrawGlyph> Font<'a, P> {
    /// Load a font that draws through `painter`.
    pub fn with_painter(data: &'a [u8], painter: P) -> Result<Self, ReadError> {
        FontRef::new(data).map(|font| Self::from_parts(font, Some(painter)))
    }

    /// Wrap an already loaded font.
    pub fn from_parts(font: FontRef<'a>, painter: Option<P>) -> Self {
        let staging = GlyphStaging::new(font.max_bitmap_len());
        Font {
            font,
            staging,
            painter,
        }
    }

    /// The underlying zero-copy font.
    pub fn font_ref(&self) -> &FontRef<'a> {
        &self.font
    }

    pub fn max_width(&self) -> u8 {
        self.font.max_width()
    }

    pub fn max_height(&self) -> u8 {
        self.font.max_height()
    }

    /// The font name, up to the first NUL byte.
    pub fn name(&self) -> &[u8] {
        self.font.name()
    }

    pub fn name_str(&self) -> Option<&str> {
        self.font.name_str()
    }

    pub fn painter(&self) -> Option<&P> {
        self.painter.as_ref()
    }

    pub fn painter_mut(&mut self) -> Option<&mut P> {
        self.painter.as_mut()
    }

    pub fn into_painter(self) -> Option<P> {
        self.painter
    }

    /// Resolve `codepoint` (falling back to `'?'`) and stage its bitmap.
    ///
    /// The returned bitmap borrows the staging buffer, so it must be dropped
    /// before the next lookup.
    pub fn glyph(&mut self, codepoint: impl Into<Codepoint>) -> Option<GlyphBitmap<'_>> {
        let glyph = self.font.resolve(codepoint)?;
        Some(self.staging.stage(&glyph))
    }

    /// Draw a NUL-terminated UTF-8 string starting at (`x`, `y`).
    ///
    /// Each resolved glyph is passed to the painter and the pen advances by
    /// the glyph's width. Codepoints with no glyph (and no `'?'` glyph to
    /// stand in) are skipped without advancing. There is no line wrapping;
    /// `y` is passed through unchanged.
    ///
    /// Returns the total horizontal advance in pixels.
    pub fn draw_string(&mut self, text: &[u8], x: i32, y: i32) -> i32 {
        let Some(painter) = self.painter.as_mut() else {
            return 0;
        };
        let mut pen_x = x;
        for codepoint in Utf8Codepoints::new(text) {
            let Some(glyph) = self.font.resolve(codepoint) else {
                log::trace!("skipping {codepoint}: no glyph");
                continue;
            };
            let bitmap = self.staging.stage(&glyph);
            painter.draw_glyph(&bitmap, pen_x, y);
            pen_x = pen_x.saturating_add(glyph.width() as i32);
        }
        pen_x.saturating_sub(x)
    }

    /// Draw a string slice; see [`Font::draw_string`].
    pub fn draw_str(&mut self, text: &str, x: i32, y: i32) -> i32 {
        self.draw_string(text.as_bytes(), x, y)
    }

    /// The advance [`Font::draw_string`] would produce with a painter,
    /// without drawing anything.
    pub fn text_width(&self, text: &[u8]) -> i32 {
        Utf8Codepoints::new(text)
            .filter_map(|codepoint| self.font.resolve(codepoint))
            .fold(0i32, |width, glyph| {
                width.saturating_add(glyph.width() as i32)
            })
    }
}
