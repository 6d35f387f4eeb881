use std::fmt::{Debug, Display, Formatter};

use crate::FixedSize;

/// The seven byte magic string that opens a PFN font.
///
/// Like most magic numbers this is compared byte for byte; no attempt is
/// made to interpret it as text beyond formatting.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Signature([u8; 7]);

impl Signature {
    /// Construct a `Signature` from raw bytes.
    pub const fn new(src: &[u8; 7]) -> Self {
        Signature(*src)
    }

    /// Attempt to construct a `Signature` from the start of a slice.
    ///
    /// Returns `None` if the slice is shorter than seven bytes.
    pub fn from_slice(src: &[u8]) -> Option<Self> {
        src.get(..Self::RAW_BYTE_LEN)
            .and_then(|bytes| bytes.try_into().ok())
            .map(Signature)
    }

    /// Return the raw bytes of this signature.
    pub const fn to_bytes(self) -> [u8; 7] {
        self.0
    }
}

impl FixedSize for Signature {
    const RAW_BYTE_LEN: usize = 7;
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for byte in self.0 {
            if (0x20..=0x7E).contains(&byte) {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "{{0x{byte:02X}}}")?;
            }
        }
        Ok(())
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature(\"{self}\")")
    }
}
