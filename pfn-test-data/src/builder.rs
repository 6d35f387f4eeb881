//! Synthesizing PFN fonts for tests.

use pfn_types::{bitmap_len, Codepoint, CodepointSize, FONT_NAME_LEN, PFN_SIGNATURE, PFN_VERSION};

use crate::LeBuffer;

/// Builds a complete font buffer.
///
/// Glyphs are written in the order they are added; tests that need a valid
/// lookup table must add them in ascending codepoint order.
#[derive(Clone, Debug)]
pub struct FontBuilder {
    name: [u8; FONT_NAME_LEN],
    version: u8,
    blocks: Vec<BlockBuilder>,
}

/// Builds a single block: a run of glyphs sharing one size.
#[derive(Clone, Debug)]
pub struct BlockBuilder {
    width: u8,
    height: u8,
    codepoint_size: Option<CodepointSize>,
    attribute: u8,
    glyphs: Vec<(Codepoint, Vec<u8>)>,
}

impl FontBuilder {
    /// Start a font with the given name, truncated to eight bytes.
    pub fn new(name: &str) -> Self {
        let mut raw = [0u8; FONT_NAME_LEN];
        let len = name.len().min(FONT_NAME_LEN);
        raw[..len].copy_from_slice(&name.as_bytes()[..len]);
        FontBuilder {
            name: raw,
            version: PFN_VERSION,
            blocks: Vec::new(),
        }
    }

    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Add a block of `width` x `height` glyphs.
    pub fn block(
        mut self,
        width: u8,
        height: u8,
        glyphs: impl FnOnce(BlockBuilder) -> BlockBuilder,
    ) -> Self {
        self.blocks.push(glyphs(BlockBuilder::new(width, height)));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = LeBuffer::new()
            .push(PFN_SIGNATURE)
            .push(self.version)
            .push(self.name);
        for block in &self.blocks {
            buf = block.write(buf);
        }
        buf.into_vec()
    }
}

impl BlockBuilder {
    pub fn new(width: u8, height: u8) -> Self {
        BlockBuilder {
            width,
            height,
            codepoint_size: None,
            attribute: 0,
            glyphs: Vec::new(),
        }
    }

    /// Force the codepoint field width instead of picking the smallest that
    /// fits every glyph.
    pub fn codepoint_size(mut self, size: CodepointSize) -> Self {
        self.codepoint_size = Some(size);
        self
    }

    pub fn attribute(mut self, attribute: u8) -> Self {
        self.attribute = attribute;
        self
    }

    /// Add a glyph.
    ///
    /// # Panics
    ///
    /// If `bitmap` is not exactly `ceil(width * height / 8)` bytes.
    pub fn glyph(mut self, codepoint: u32, bitmap: &[u8]) -> Self {
        assert_eq!(
            bitmap.len(),
            bitmap_len(self.width, self.height),
            "bitmap for U+{codepoint:04X} has the wrong length for a {}x{} glyph",
            self.width,
            self.height
        );
        self.glyphs.push((Codepoint::new(codepoint), bitmap.to_vec()));
        self
    }

    fn resolved_codepoint_size(&self) -> CodepointSize {
        self.codepoint_size.unwrap_or_else(|| {
            let max = self
                .glyphs
                .iter()
                .map(|(cp, _)| cp.to_u32())
                .max()
                .unwrap_or_default();
            CodepointSize::for_codepoint(max)
        })
    }

    fn write(&self, buf: LeBuffer) -> LeBuffer {
        let size = self.resolved_codepoint_size();
        let mut buf = buf
            .push(self.width)
            .push(self.height)
            .push(size as u8)
            .push(self.attribute)
            .push(self.glyphs.len() as u16);
        for (codepoint, bitmap) in &self.glyphs {
            let mut field = [0u8; 4];
            size.write(*codepoint, &mut field)
                .expect("codepoint does not fit the block's codepoint size");
            buf = buf.push(&field[..size.byte_len()]).push(bitmap.as_slice());
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::le_buffer;

    #[test]
    fn single_block_layout() {
        let built = FontBuilder::new("abc")
            .block(4, 4, |b| b.glyph(0x41, &[0xF0, 0x0F]))
            .build();
        let expected = le_buffer! {
            (*b"PINOTFN"),
            1u8,
            (*b"abc\0\0\0\0\0"),
            4u8, 4u8, 1u8, 0u8, 1u16,
            0x41u8, 0xF0u8, 0x0Fu8
        };
        assert_eq!(built, expected.into_vec());
    }

    #[test]
    fn picks_codepoint_width() {
        let built = FontBuilder::new("w")
            .block(1, 1, |b| b.glyph(0x100, &[0x80]))
            .build();
        assert_eq!(built[18], 2);
        assert_eq!(&built[22..24], &[0x00, 0x01]);
    }

    #[test]
    fn long_names_are_truncated() {
        let built = FontBuilder::new("much_too_long")
            .block(1, 1, |b| b)
            .build();
        assert_eq!(&built[8..16], b"much_too");
    }
}
