//! Canned fonts used across the test suites.

use crate::FontBuilder;

#[rustfmt::skip]
pub static PATTERN_A: [u8; 8] = [
    0b0001_1000,
    0b0010_0100,
    0b0100_0010,
    0b0100_0010,
    0b0111_1110,
    0b0100_0010,
    0b0100_0010,
    0b0000_0000,
];

#[rustfmt::skip]
pub static PATTERN_B: [u8; 8] = [
    0b0111_1100,
    0b0100_0010,
    0b0100_0010,
    0b0111_1100,
    0b0100_0010,
    0b0100_0010,
    0b0111_1100,
    0b0000_0000,
];

#[rustfmt::skip]
pub static PATTERN_Q: [u8; 8] = [
    0b0011_1100,
    0b0100_0010,
    0b0000_0010,
    0b0000_1100,
    0b0001_0000,
    0b0000_0000,
    0b0001_0000,
    0b0000_0000,
];

/// A 16x16 hollow square.
#[rustfmt::skip]
pub static PATTERN_WIDE: [u8; 32] = [
    0xFF, 0xFF,
    0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01,
    0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01,
    0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01,
    0x80, 0x01, 0x80, 0x01,
    0xFF, 0xFF,
];

/// One 8x8 block holding `'?'`, `'A'` and `'B'`.
pub fn simple_8x8() -> Vec<u8> {
    FontBuilder::new("simple")
        .block(8, 8, |b| {
            b.glyph(0x3F, &PATTERN_Q)
                .glyph(0x41, &PATTERN_A)
                .glyph(0x42, &PATTERN_B)
        })
        .build()
}

/// An 8x8 block covering `A..=B` and a 16x16 block covering `U+0100..=U+0101`.
///
/// There is no `'?'` glyph.
pub fn two_blocks() -> Vec<u8> {
    FontBuilder::new("twoblk")
        .block(8, 8, |b| {
            b.glyph(0x41, &PATTERN_A)
                .glyph(0x42, &PATTERN_B)
        })
        .block(16, 16, |b| {
            b.glyph(0x100, &PATTERN_WIDE)
                .glyph(0x101, &[0x0F; 32])
        })
        .build()
}

/// A font shaped like a typical embedded font: printable ASCII at 8x16 and
/// a handful of hiragana at 16x16.
///
/// Glyph bitmaps are filler (every byte is the low byte of the codepoint);
/// this is for exercising lookup and layout, not for looking at.
pub fn mixed() -> Vec<u8> {
    FontBuilder::new("mixed")
        .block(8, 16, |mut b| {
            for cp in 0x20u32..=0x7E {
                b = b.glyph(cp, &[cp as u8; 16]);
            }
            b
        })
        .block(16, 16, |mut b| {
            for cp in 0x3041u32..=0x3046 {
                b = b.glyph(cp, &[cp as u8; 32]);
            }
            b
        })
        .build()
}
