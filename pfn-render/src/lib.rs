//! Drawing text with PFN bitmap fonts
//!
//! This crate sits on top of [`read-pfn`] and provides what a display driver
//! needs to put text on screen: a lenient UTF-8 decoder, a word-aligned
//! staging buffer for glyph bitmaps and a string renderer that hands each
//! glyph to a caller supplied [`DrawGlyph`] implementation.
//!
//! # Example
//!
//! ```no_run
//! # let font_bytes: Vec<u8> = Vec::new();
//! use pfn_render::{Font, GlyphBitmap};
//!
//! let mut font = Font::with_painter(&font_bytes, |glyph: &GlyphBitmap<'_>, x: i32, y: i32| {
//!     println!("{} at ({x}, {y})", glyph.codepoint());
//! })
//! .unwrap();
//! let advance = font.draw_str("Hello", 0, 0);
//! println!("advanced {advance} pixels");
//! ```
//!
//! [`read-pfn`]: https://docs.rs/read-pfn

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod draw;
mod font;
mod staging;
pub mod utf8;

pub use draw::{DrawGlyph, GlyphBitmap, NoDraw};
pub use font::Font;
pub use staging::GlyphStaging;
pub use utf8::Utf8Codepoints;

/// Public re-export of the read-pfn crate.
pub extern crate read_pfn as raw;
