//! Font blocks: runs of same-sized glyphs.

use std::ops::RangeInclusive;

use types::{bitmap_len, Codepoint, CodepointSize, BLOCK_HEADER_LEN};

use crate::{glyph::GlyphRef, FontData, ReadError};

/// The six byte header that starts every block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub width: u8,
    pub height: u8,
    pub codepoint_size: CodepointSize,
    /// Reserved; carried through but never interpreted.
    pub attribute: u8,
    pub num_glyphs: u16,
}

impl BlockHeader {
    /// Bytes of packed bitmap per glyph.
    pub fn bitmap_len(&self) -> usize {
        bitmap_len(self.width, self.height)
    }

    /// Bytes per glyph entry: the codepoint field followed by the bitmap.
    pub fn glyph_len(&self) -> usize {
        self.codepoint_size.byte_len() + self.bitmap_len()
    }

    /// Total bytes of glyph entries following the header.
    pub fn data_len(&self) -> usize {
        self.num_glyphs as usize * self.glyph_len()
    }

    /// Total bytes spanned by the block, header included.
    pub fn byte_len(&self) -> usize {
        BLOCK_HEADER_LEN + self.data_len()
    }
}

/// A validated block within a font.
///
/// Constructing a `Block` checks that its glyph table lies entirely inside
/// the font data, so glyph accessors never fail on bounds.
#[derive(Clone, Debug)]
pub struct Block<'a> {
    offset: usize,
    header: BlockHeader,
    glyphs: FontData<'a>,
}

impl<'a> Block<'a> {
    /// Read the block starting at `offset` in `data`.
    pub fn read(data: FontData<'a>, offset: usize) -> Result<Self, ReadError> {
        let truncated = ReadError::TruncatedBlock { offset };
        let block_data = data.split_off(offset).ok_or(truncated.clone())?;
        if block_data.len() < BLOCK_HEADER_LEN {
            return Err(truncated);
        }
        let mut cursor = block_data.cursor();
        let width = cursor.read::<u8>()?;
        let height = cursor.read::<u8>()?;
        let codepoint_size = CodepointSize::new(cursor.read::<u8>()?)?;
        let attribute = cursor.read::<u8>()?;
        let num_glyphs = cursor.read::<u16>()?;
        let header = BlockHeader {
            width,
            height,
            codepoint_size,
            attribute,
            num_glyphs,
        };
        let start = cursor.position()?;
        let glyphs = block_data
            .slice(start..start + header.data_len())
            .ok_or(truncated)?;
        Ok(Block {
            offset: data.position_in_font() + offset,
            header,
            glyphs,
        })
    }

    /// Offset of the block header relative to the start of the font.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    pub fn width(&self) -> u8 {
        self.header.width
    }

    pub fn height(&self) -> u8 {
        self.header.height
    }

    pub fn codepoint_size(&self) -> CodepointSize {
        self.header.codepoint_size
    }

    pub fn attribute(&self) -> u8 {
        self.header.attribute
    }

    pub fn num_glyphs(&self) -> u16 {
        self.header.num_glyphs
    }

    /// Total bytes spanned by the block, header included.
    pub fn byte_len(&self) -> usize {
        self.header.byte_len()
    }

    /// The codepoint of the glyph at `index` in the block's table.
    pub fn codepoint_at(&self, index: usize) -> Option<Codepoint> {
        let size = self.header.codepoint_size;
        let bytes = self
            .glyphs
            .read_bytes(index.checked_mul(self.header.glyph_len())?, size.byte_len())
            .ok()?;
        size.read(bytes)
    }

    /// The glyph at `index` in the block's table.
    pub fn glyph(&self, index: usize) -> Option<GlyphRef<'a>> {
        let glyph_len = self.header.glyph_len();
        let cp_len = self.header.codepoint_size.byte_len();
        let start = index.checked_mul(glyph_len)?;
        let codepoint = self.codepoint_at(index)?;
        let bitmap = self
            .glyphs
            .read_bytes(start + cp_len, self.header.bitmap_len())
            .ok()?;
        Some(GlyphRef::new(
            codepoint,
            self.header.width,
            self.header.height,
            bitmap,
        ))
    }

    /// The inclusive range between the first and last codepoint in the table.
    ///
    /// Returns `None` for a block with no glyphs. Glyph tables are required to
    /// be sorted, but that is not verified; an unsorted table yields whatever
    /// its first and last entries hold.
    pub fn codepoint_range(&self) -> Option<RangeInclusive<Codepoint>> {
        let last = (self.header.num_glyphs as usize).checked_sub(1)?;
        Some(self.codepoint_at(0)?..=self.codepoint_at(last)?)
    }

    /// `true` if `codepoint` lies within [`codepoint_range`](Self::codepoint_range).
    pub fn covers(&self, codepoint: Codepoint) -> bool {
        self.codepoint_range()
            .is_some_and(|range| range.contains(&codepoint))
    }

    /// Binary search the glyph table for an exact codepoint match.
    ///
    /// Entries are compared by their decoded integer value.
    pub fn find(&self, codepoint: Codepoint) -> Option<GlyphRef<'a>> {
        let mut lo = 0usize;
        let mut hi = self.header.num_glyphs as usize;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.codepoint_at(mid)?.cmp(&codepoint) {
                std::cmp::Ordering::Equal => return self.glyph(mid),
                std::cmp::Ordering::Less => lo = mid + 1,
                std::cmp::Ordering::Greater => hi = mid,
            }
        }
        None
    }

    /// Iterate over all glyphs in the block, in table order.
    pub fn glyphs(&self) -> impl Iterator<Item = GlyphRef<'a>> + 'a + Clone {
        let block = self.clone();
        (0..self.header.num_glyphs as usize).filter_map(move |ix| block.glyph(ix))
    }
}

/// An iterator over the blocks of a font.
///
/// Iteration stops at the end of the data; a block that cannot be read is
/// yielded as an error and ends the iteration.
#[derive(Clone)]
pub struct Blocks<'a> {
    data: FontData<'a>,
    pos: usize,
}

impl<'a> Blocks<'a> {
    /// Iterate the blocks in `data`, starting at `first_block_offset`.
    pub fn new(data: FontData<'a>, first_block_offset: usize) -> Self {
        Blocks {
            data,
            pos: first_block_offset,
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Result<Block<'a>, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        match Block::read(self.data, self.pos) {
            Ok(block) => {
                log::trace!(
                    "block at {}: {}x{}, {} glyphs",
                    self.pos,
                    block.width(),
                    block.height(),
                    block.num_glyphs()
                );
                self.pos += block.byte_len();
                Some(Ok(block))
            }
            Err(e) => {
                self.pos = self.data.len();
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Blocks<'_> {}

/// Summary of a font's blocks, computed once at load time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockIndex {
    pub num_blocks: usize,
    pub num_glyphs: usize,
    pub max_width: u8,
    pub max_height: u8,
}

impl BlockIndex {
    /// Walk every block, validating each and tracking the largest glyph
    /// dimensions.
    pub fn scan(data: FontData<'_>, first_block_offset: usize) -> Result<Self, ReadError> {
        let mut index = BlockIndex::default();
        for block in Blocks::new(data, first_block_offset) {
            let block = block?;
            index.num_blocks += 1;
            index.num_glyphs += block.num_glyphs() as usize;
            index.max_width = index.max_width.max(block.width());
            index.max_height = index.max_height.max(block.height());
        }
        Ok(index)
    }

    /// Size of a bitmap buffer able to hold any glyph in the font.
    ///
    /// This is computed from the maximum width and height independently, so
    /// it can exceed the largest bitmap actually present.
    pub fn max_bitmap_len(&self) -> usize {
        bitmap_len(self.max_width, self.max_height)
    }
}
