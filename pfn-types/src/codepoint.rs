//! Codepoints and the variable-width fields that store them.

use crate::Scalar;

/// A Unicode scalar value as stored in a PFN glyph table.
///
/// This is a plain `u32`; it is not validated as a `char`, since fonts may
/// (and the lenient UTF-8 decoder can) produce surrogates or values above
/// `0x10FFFF`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Codepoint(u32);

impl Codepoint {
    /// The codepoint substituted when a requested glyph is missing, `'?'`.
    pub const REPLACEMENT: Codepoint = Codepoint(0x3F);

    /// Construct a new `Codepoint`.
    pub const fn new(raw: u32) -> Self {
        Codepoint(raw)
    }

    /// The codepoint as a u32.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// The codepoint as a `char`, if it is a valid Unicode scalar value.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl From<u32> for Codepoint {
    fn from(value: u32) -> Self {
        Codepoint(value)
    }
}

impl From<char> for Codepoint {
    fn from(value: char) -> Self {
        Codepoint(value as u32)
    }
}

impl From<Codepoint> for u32 {
    fn from(value: Codepoint) -> Self {
        value.0
    }
}

impl std::fmt::Display for Codepoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

/// The width of the codepoint field in each glyph entry of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CodepointSize {
    U8 = 1,
    U16 = 2,
    U32 = 4,
}

/// An unsupported value in a block's `codepoint_size` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidCodepointSize(pub u8);

impl std::fmt::Display for InvalidCodepointSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid codepoint size {} (expected 1, 2 or 4)", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidCodepointSize {}

impl CodepointSize {
    /// Interpret the raw `codepoint_size` byte of a block header.
    pub const fn new(raw: u8) -> Result<Self, InvalidCodepointSize> {
        match raw {
            1 => Ok(CodepointSize::U8),
            2 => Ok(CodepointSize::U16),
            4 => Ok(CodepointSize::U32),
            other => Err(InvalidCodepointSize(other)),
        }
    }

    /// The smallest field width able to store `codepoint`.
    pub const fn for_codepoint(codepoint: u32) -> Self {
        if codepoint <= u8::MAX as u32 {
            CodepointSize::U8
        } else if codepoint <= u16::MAX as u32 {
            CodepointSize::U16
        } else {
            CodepointSize::U32
        }
    }

    /// The width of the field in bytes.
    pub const fn byte_len(self) -> usize {
        self as u8 as usize
    }

    /// Decode a codepoint field.
    ///
    /// `bytes` must be exactly [`byte_len`](Self::byte_len) bytes long.
    pub fn read(self, bytes: &[u8]) -> Option<Codepoint> {
        let raw = match self {
            CodepointSize::U8 => u8::read(bytes)? as u32,
            CodepointSize::U16 => u16::read(bytes)? as u32,
            CodepointSize::U32 => u32::read(bytes)?,
        };
        Some(Codepoint(raw))
    }

    /// Encode a codepoint into `out`, returning `None` if it does not fit
    /// either the field width or the output buffer.
    pub fn write(self, codepoint: Codepoint, out: &mut [u8]) -> Option<()> {
        let out = out.get_mut(..self.byte_len())?;
        match self {
            CodepointSize::U8 => out.copy_from_slice(&u8::try_from(codepoint.0).ok()?.to_raw()),
            CodepointSize::U16 => {
                out.copy_from_slice(&u16::try_from(codepoint.0).ok()?.to_raw())
            }
            CodepointSize::U32 => out.copy_from_slice(&codepoint.0.to_raw()),
        }
        Some(())
    }
}

impl TryFrom<u8> for CodepointSize {
    type Error = InvalidCodepointSize;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CodepointSize::new(value)
    }
}
