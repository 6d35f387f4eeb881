//! Reading PFN bitmap fonts
//!
//! This crate provides memory safe, zero-allocation parsing of PFN font
//! files: a compact container of 1-bit glyph bitmaps intended to be embedded
//! as a flat byte array in firmware.
//!
//! A font is a 16 byte header (the `PINOTFN` signature, a version byte and an
//! eight byte name) followed by one or more blocks. Each block stores glyphs
//! of a single pixel size in a table sorted by codepoint. Mapping a codepoint
//! to a glyph first picks the block whose codepoint range contains it, then
//! binary searches that block's table.
//!
//! All data is borrowed. Every field is read through bounds-checked cursors,
//! and loading a font validates the extent of every block, so lookups on a
//! successfully loaded font never read outside the buffer.
//!
//! For staging glyphs into an aligned buffer and drawing text, see
//! `pfn-render`.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use read_pfn::FontRef;
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let font = FontRef::new(&font_bytes).expect("failed to read font data");
//! if let Some(glyph) = font.resolve('A') {
//!     println!("{}: {}x{}", glyph.codepoint(), glyph.width(), glyph.height());
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

pub mod block;
mod font_data;
pub mod glyph;
mod header;
mod read;

pub use block::{Block, BlockHeader, BlockIndex, Blocks};
pub use font_data::FontData;
pub use glyph::GlyphRef;
pub use header::Header;
pub use read::{FontRead, ReadError};

/// Public re-export of the pfn-types crate.
pub extern crate pfn_types as types;

use types::Codepoint;

/// Reference to an in-memory PFN font.
///
/// Construction validates the header and walks every block once; the result
/// is cheap to copy and every lookup is a scan over borrowed data.
#[derive(Clone, Debug)]
pub struct FontRef<'a> {
    data: FontData<'a>,
    header: Header,
    index: BlockIndex,
}

impl<'a> FontRef<'a> {
    /// Creates a new reference to an in-memory font backed by the given data.
    ///
    /// Fails if the header is missing or has the wrong signature, if no block
    /// data follows it, or if any block is truncated or declares an
    /// unsupported codepoint size.
    pub fn new(data: &'a [u8]) -> Result<Self, ReadError> {
        let data = FontData::new(data);
        let result = Header::read(data).and_then(|header| {
            let index = BlockIndex::scan(data, header.first_block_offset())?;
            Ok(FontRef {
                data,
                header,
                index,
            })
        });
        if let Err(e) = &result {
            log::warn!("rejecting font data ({} bytes): {e}", data.len());
        }
        result
    }

    /// Returns the underlying font data.
    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The format version byte.
    pub fn version(&self) -> u8 {
        self.header.version()
    }

    /// The font name, up to the first NUL byte (at most eight bytes).
    pub fn name(&self) -> &[u8] {
        self.header.name()
    }

    /// The font name as a string, if it is valid UTF-8.
    pub fn name_str(&self) -> Option<&str> {
        self.header.name_str()
    }

    /// Summary information gathered while loading the font.
    pub fn block_index(&self) -> &BlockIndex {
        &self.index
    }

    /// The largest glyph width of any block.
    pub fn max_width(&self) -> u8 {
        self.index.max_width
    }

    /// The largest glyph height of any block.
    pub fn max_height(&self) -> u8 {
        self.index.max_height
    }

    /// The size of a buffer able to hold any glyph bitmap in this font.
    pub fn max_bitmap_len(&self) -> usize {
        self.index.max_bitmap_len()
    }

    /// Returns an iterator over the blocks of the font, in file order.
    pub fn blocks(&self) -> impl Iterator<Item = Block<'a>> + 'a + Clone {
        // every block was validated in `new`
        Blocks::new(self.data, self.header.first_block_offset()).filter_map(Result::ok)
    }

    /// Returns the first block whose codepoint range contains `codepoint`.
    ///
    /// Blocks are not required to have disjoint ranges; when they overlap,
    /// the earliest block in the file wins.
    pub fn block_for(&self, codepoint: impl Into<Codepoint>) -> Option<Block<'a>> {
        let codepoint = codepoint.into();
        self.blocks().find(|block| block.covers(codepoint))
    }

    /// Returns the glyph for exactly `codepoint`, if present.
    ///
    /// Only the first block whose range covers the codepoint is searched.
    pub fn lookup(&self, codepoint: impl Into<Codepoint>) -> Option<GlyphRef<'a>> {
        let codepoint = codepoint.into();
        self.block_for(codepoint)?.find(codepoint)
    }

    /// Returns the glyph for `codepoint`, falling back to the `'?'` glyph.
    ///
    /// The fallback is attempted once; if the font has no `'?'` glyph this
    /// returns `None`.
    pub fn resolve(&self, codepoint: impl Into<Codepoint>) -> Option<GlyphRef<'a>> {
        let codepoint = codepoint.into();
        self.lookup(codepoint).or_else(|| {
            if codepoint == Codepoint::REPLACEMENT {
                return None;
            }
            log::debug!("no glyph for {codepoint}, substituting '?'");
            self.lookup(Codepoint::REPLACEMENT)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfn_test_data::{fonts, FontBuilder};

    #[test]
    fn load_simple() {
        let _ = env_logger::builder().is_test(true).try_init();
        let buf = fonts::simple_8x8();
        let font = FontRef::new(&buf).unwrap();
        assert_eq!(font.name_str(), Some("simple"));
        assert_eq!(font.version(), 1);
        assert_eq!(font.max_width(), 8);
        assert_eq!(font.max_height(), 8);
        assert_eq!(font.max_bitmap_len(), 8);
        assert_eq!(font.blocks().count(), 1);
    }

    #[test]
    fn resolve_exact() {
        let buf = fonts::simple_8x8();
        let font = FontRef::new(&buf).unwrap();
        let glyph = font.resolve(0x41u32).unwrap();
        assert_eq!(glyph.width(), 8);
        assert_eq!(glyph.height(), 8);
        assert_eq!(glyph.bitmap(), &fonts::PATTERN_A);
    }

    #[test]
    fn resolve_falls_back_to_question_mark() {
        let _ = env_logger::builder().is_test(true).try_init();
        let buf = fonts::simple_8x8();
        let font = FontRef::new(&buf).unwrap();
        assert!(font.lookup(0x5Au32).is_none());
        let glyph = font.resolve(0x5Au32).unwrap();
        assert_eq!(glyph.codepoint(), Codepoint::REPLACEMENT);
        assert_eq!(glyph.bitmap(), &fonts::PATTERN_Q);
    }

    #[test]
    fn no_replacement_glyph() {
        let buf = FontBuilder::new("noq")
            .block(8, 8, |b| {
                b.glyph(0x41, &fonts::PATTERN_A)
                    .glyph(0x42, &fonts::PATTERN_B)
            })
            .build();
        let font = FontRef::new(&buf).unwrap();
        assert!(font.resolve(0x5Au32).is_none());
        assert!(font.resolve('?').is_none());
        assert!(font.resolve(0x41u32).is_some());
    }

    #[test]
    fn disjoint_blocks() {
        let buf = fonts::two_blocks();
        let font = FontRef::new(&buf).unwrap();
        let glyph = font.resolve(0x100u32).unwrap();
        assert_eq!(glyph.codepoint(), Codepoint::new(0x100));
        assert_eq!(glyph.width(), 16);
        assert_eq!(glyph.bitmap(), &fonts::PATTERN_WIDE);
        assert_eq!(font.max_width(), 16);
        assert_eq!(font.max_height(), 16);
        assert_eq!(font.max_bitmap_len(), 32);
    }

    #[test]
    fn sparse_block_does_not_search_further() {
        // 0x43 is inside the first block's range but absent from it; the
        // second block is never consulted.
        let buf = FontBuilder::new("sparse")
            .block(8, 8, |b| {
                b.glyph(0x41, &fonts::PATTERN_A)
                    .glyph(0x45, &fonts::PATTERN_B)
            })
            .block(8, 8, |b| b.glyph(0x43, &fonts::PATTERN_Q))
            .build();
        let font = FontRef::new(&buf).unwrap();
        assert!(font.lookup(0x43u32).is_none());
    }

    #[test]
    fn overlapping_blocks_first_wins() {
        let buf = FontBuilder::new("overlap")
            .block(8, 8, |b| {
                b.glyph(0x41, &fonts::PATTERN_A)
                    .glyph(0x42, &fonts::PATTERN_B)
            })
            .block(16, 16, |b| b.glyph(0x41, &fonts::PATTERN_WIDE))
            .build();
        let font = FontRef::new(&buf).unwrap();
        assert_eq!(font.resolve(0x41u32).unwrap().width(), 8);
    }

    #[test]
    fn wide_codepoints() {
        let buf = FontBuilder::new("emoji")
            .block(16, 16, |b| {
                b.glyph(0x1F600, &fonts::PATTERN_WIDE)
                    .glyph(0x1F601, &[0xFF; 32])
            })
            .build();
        let font = FontRef::new(&buf).unwrap();
        assert_eq!(
            font.blocks().next().unwrap().codepoint_size(),
            types::CodepointSize::U32
        );
        assert_eq!(font.resolve(0x1F601u32).unwrap().bitmap(), &[0xFF; 32]);
    }

    #[test]
    fn wide_field_attribute_and_version() {
        let buf = FontBuilder::new("wide")
            .version(9)
            .block(8, 8, |b| {
                b.codepoint_size(types::CodepointSize::U32)
                    .attribute(0x5A)
                    .glyph(0x3F, &fonts::PATTERN_Q)
                    .glyph(0x41, &fonts::PATTERN_A)
            })
            .build();
        let font = FontRef::new(&buf).unwrap();
        assert_eq!(font.version(), 9);
        let block = font.blocks().next().unwrap();
        assert_eq!(block.codepoint_size(), types::CodepointSize::U32);
        assert_eq!(block.attribute(), 0x5A);
        assert_eq!(block.byte_len(), 6 + 2 * (4 + 8));
        assert_eq!(font.resolve('A').unwrap().bitmap(), &fonts::PATTERN_A);
        let fallback = font.resolve('Z').unwrap();
        assert_eq!(fallback.codepoint(), Codepoint::REPLACEMENT);
        assert_eq!(fallback.bitmap(), &fonts::PATTERN_Q);
    }

    #[test]
    fn wrong_signature_is_rejected() {
        let mut buf = fonts::simple_8x8();
        buf[..7].copy_from_slice(b"NOTAPFN");
        assert!(matches!(
            FontRef::new(&buf),
            Err(ReadError::InvalidSignature(_))
        ));
        // garbage after a bad signature is never looked at
        let garbage = [b"XXXXXXX".as_slice(), &[0xFF; 64]].concat();
        assert!(FontRef::new(&garbage).is_err());
    }

    #[test]
    fn truncated_font_is_rejected() {
        let buf = fonts::simple_8x8();
        let truncated = &buf[..buf.len() - 3];
        assert!(matches!(
            FontRef::new(truncated),
            Err(ReadError::TruncatedBlock { offset: 16 })
        ));
    }

    #[test]
    fn repeated_resolve_is_stable() {
        let buf = fonts::two_blocks();
        let font = FontRef::new(&buf).unwrap();
        let first = font.resolve(0x101u32).unwrap();
        let second = font.resolve(0x101u32).unwrap();
        assert_eq!(first, second);
    }
}
