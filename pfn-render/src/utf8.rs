//! Lenient UTF-8 decoding.
//!
//! Text handed to a display is often assembled by hand in firmware, so this
//! decoder never fails: a byte that cannot start a sequence decodes as `'?'`
//! and consumes exactly one byte. Continuation bytes are not checked and
//! overlong forms are accepted, matching the permissive behavior expected of
//! the drawing path. A sequence cut short by the end of the input decodes as
//! `'?'` and consumes what is left.

use read_pfn::types::Codepoint;

/// Decode one codepoint from the start of `bytes`.
///
/// Returns the codepoint and the number of bytes consumed, or `None` if
/// `bytes` is empty.
pub fn decode(bytes: &[u8]) -> Option<(Codepoint, usize)> {
    let lead = *bytes.first()?;
    let (len, bits) = match lead {
        0x00..=0x7F => return Some((Codepoint::new(lead as u32), 1)),
        _ if lead & 0xE0 == 0xC0 => (2, lead & 0x1F),
        _ if lead & 0xF0 == 0xE0 => (3, lead & 0x0F),
        _ if lead & 0xF8 == 0xF0 => (4, lead & 0x07),
        _ => return Some((Codepoint::REPLACEMENT, 1)),
    };
    let Some(tail) = bytes.get(1..len) else {
        return Some((Codepoint::REPLACEMENT, bytes.len()));
    };
    let raw = tail
        .iter()
        .fold(bits as u32, |acc, byte| (acc << 6) | (byte & 0x3F) as u32);
    Some((Codepoint::new(raw), len))
}

/// Decode one codepoint and advance `cursor` past it.
///
/// Returns `None` at the end of the input or at a NUL terminator; the cursor
/// is left pointing at the NUL.
pub fn next_codepoint<'a>(cursor: &mut &'a [u8]) -> Option<Codepoint> {
    if cursor.first().copied().unwrap_or(0) == 0 {
        return None;
    }
    let rest: &'a [u8] = *cursor;
    let (codepoint, len) = decode(rest)?;
    *cursor = &rest[len..];
    Some(codepoint)
}

/// An iterator over the codepoints of a NUL-terminated UTF-8 string.
///
/// Iteration ends at the first NUL in lead position or at the end of the
/// slice, whichever comes first.
#[derive(Clone, Debug)]
pub struct Utf8Codepoints<'a> {
    remaining: &'a [u8],
}

impl<'a> Utf8Codepoints<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self { remaining: text }
    }

    /// The bytes not yet decoded.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.remaining
    }
}

impl Iterator for Utf8Codepoints<'_> {
    type Item = Codepoint;

    fn next(&mut self) -> Option<Self::Item> {
        next_codepoint(&mut self.remaining)
    }
}

impl core::iter::FusedIterator for Utf8Codepoints<'_> {}
