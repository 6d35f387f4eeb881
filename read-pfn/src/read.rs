//! Traits for interpreting font data

use types::Signature;

use crate::font_data::FontData;

/// A type that can be read from raw font data.
///
/// Implementors are responsible for validating the input: after a successful
/// `read`, accessors on the returned value must not need to report errors for
/// the fields that were checked.
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data, performing validation.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    OutOfBounds,
    /// The buffer is smaller than the fixed header.
    BufferTooSmall {
        needed: usize,
        available: usize,
    },
    InvalidSignature(Signature),
    /// The header is not followed by any block data.
    EmptyFont,
    InvalidCodepointSize(u8),
    /// A block header or glyph table runs past the end of the buffer.
    TruncatedBlock {
        offset: usize,
    },
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::BufferTooSmall { needed, available } => write!(
                f,
                "Font data too small: need at least {needed} bytes, have {available}"
            ),
            ReadError::InvalidSignature(sig) => write!(f, "Invalid signature '{sig}'"),
            ReadError::EmptyFont => write!(f, "Font contains no blocks"),
            ReadError::InvalidCodepointSize(size) => {
                write!(f, "Invalid codepoint size {size} (expected 1, 2 or 4)")
            }
            ReadError::TruncatedBlock { offset } => {
                write!(f, "Block at offset {offset} extends past the end of the data")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}

impl From<types::InvalidCodepointSize> for ReadError {
    fn from(value: types::InvalidCodepointSize) -> Self {
        ReadError::InvalidCodepointSize(value.0)
    }
}
