//! The fixed-size font header.

use types::{FixedSize, Signature, FONT_NAME_LEN, HEADER_LEN, PFN_SIGNATURE};

use crate::{FontData, FontRead, ReadError};

/// The validated header at the start of a PFN font.
///
/// Reading a header checks that the buffer is at least [`HEADER_LEN`] bytes,
/// that it starts with [`PFN_SIGNATURE`], and that at least one byte of block
/// data follows the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    version: u8,
    name: [u8; FONT_NAME_LEN],
}

impl Header {
    /// The format version byte.
    ///
    /// This is reported but not checked; all known files use version 1.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The font name, up to the first NUL byte.
    ///
    /// The field is eight bytes and is not NUL terminated when full.
    pub fn name(&self) -> &[u8] {
        let len = self
            .name
            .iter()
            .position(|b| *b == 0)
            .unwrap_or(FONT_NAME_LEN);
        &self.name[..len]
    }

    /// The font name as a string, if it is valid UTF-8.
    pub fn name_str(&self) -> Option<&str> {
        core::str::from_utf8(self.name()).ok()
    }

    /// Offset of the first block, relative to the start of the font.
    pub const fn first_block_offset(&self) -> usize {
        HEADER_LEN
    }
}

impl<'a> FontRead<'a> for Header {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        if data.len() < HEADER_LEN {
            return Err(ReadError::BufferTooSmall {
                needed: HEADER_LEN,
                available: data.len(),
            });
        }
        let mut cursor = data.cursor();
        let signature = cursor
            .read_bytes(Signature::RAW_BYTE_LEN)
            .ok()
            .and_then(Signature::from_slice)
            .ok_or(ReadError::OutOfBounds)?;
        if signature != PFN_SIGNATURE {
            return Err(ReadError::InvalidSignature(signature));
        }
        let version = cursor.read::<u8>()?;
        let mut name = [0u8; FONT_NAME_LEN];
        name.copy_from_slice(cursor.read_bytes(FONT_NAME_LEN)?);
        // the block region must hold at least one byte
        if cursor.remaining_bytes() == 0 {
            return Err(ReadError::EmptyFont);
        }
        Ok(Header { version, name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfn_test_data::le_buffer;

    #[test]
    fn read_header() {
        let buf = le_buffer! {
            (*b"PINOTFN"),
            1u8,
            (*b"shnmk14u"),
            0u8
        };
        let header = Header::read(FontData::new(&buf)).unwrap();
        assert_eq!(header.version(), 1);
        assert_eq!(header.name(), b"shnmk14u");
        assert_eq!(header.name_str(), Some("shnmk14u"));
        assert_eq!(header.first_block_offset(), 16);
    }

    #[test]
    fn short_name() {
        let buf = le_buffer! {
            (*b"PINOTFN"),
            7u8,
            (*b"tiny\0\0\0\0"),
            0u8
        };
        let header = Header::read(FontData::new(&buf)).unwrap();
        assert_eq!(header.version(), 7);
        assert_eq!(header.name(), b"tiny");
    }

    #[test]
    fn bad_signature() {
        let buf = le_buffer! {
            (*b"PINOTFX"),
            1u8,
            (*b"shnmk14u"),
            0u8
        };
        assert_eq!(
            Header::read(FontData::new(&buf)),
            Err(ReadError::InvalidSignature(Signature::new(b"PINOTFX")))
        );
    }

    #[test]
    fn too_small() {
        let buf = b"PINOTFN\x01abc";
        assert_eq!(
            Header::read(FontData::new(buf)),
            Err(ReadError::BufferTooSmall {
                needed: HEADER_LEN,
                available: 11
            })
        );
        assert!(Header::read(FontData::new(&[])).is_err());
    }

    #[test]
    fn header_only() {
        let buf = le_buffer! {
            (*b"PINOTFN"),
            1u8,
            (*b"shnmk14u")
        };
        assert_eq!(buf.len(), HEADER_LEN);
        assert_eq!(
            Header::read(FontData::new(&buf)),
            Err(ReadError::EmptyFont)
        );
    }
}
