//! Common scalar data types used in PFN bitmap font files
//!
//! A PFN file is a flat byte blob: a fixed 16 byte header followed by a
//! sequence of blocks, each holding glyphs of a single pixel size. The types
//! in this crate describe the fixed-width fields of that layout; parsing lives
//! in `read-pfn`.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod codepoint;
mod raw;
mod signature;


pub use codepoint::{Codepoint, CodepointSize, InvalidCodepointSize};
pub use raw::{FixedSize, Scalar};
pub use signature::Signature;

/// The magic bytes at the start of every PFN font.
pub const PFN_SIGNATURE: Signature = Signature::new(b"PINOTFN");

/// The format version written by current tooling.
pub const PFN_VERSION: u8 = 1;

/// The size of the font name field, in bytes.
pub const FONT_NAME_LEN: usize = 8;

/// The size of the font header, in bytes.
///
/// This is the signature, the version byte and the font name.
pub const HEADER_LEN: usize = Signature::RAW_BYTE_LEN + 1 + FONT_NAME_LEN;

/// The size of a block header, in bytes.
pub const BLOCK_HEADER_LEN: usize = 6;

/// The number of bytes needed to store a packed 1-bit bitmap of the given
/// dimensions.
///
/// Rows are not padded; the bitmap is `width * height` bits rounded up to the
/// next whole byte.
pub const fn bitmap_len(width: u8, height: u8) -> usize {
    (width as usize * height as usize).div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout() {
        assert_eq!(HEADER_LEN, 16);
        assert_eq!(PFN_SIGNATURE.to_bytes(), *b"PINOTFN");
    }

    #[test]
    fn packed_bitmap_len() {
        assert_eq!(bitmap_len(8, 8), 8);
        assert_eq!(bitmap_len(8, 16), 16);
        assert_eq!(bitmap_len(5, 7), 5);
        assert_eq!(bitmap_len(12, 12), 18);
        assert_eq!(bitmap_len(0, 16), 0);
        assert_eq!(bitmap_len(255, 255), 8129);
    }
}
