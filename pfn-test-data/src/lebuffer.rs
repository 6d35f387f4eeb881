//! small utilities for writing little-endian test buffers

use pfn_types::{Codepoint, Scalar, Signature};

/// A value that can be appended to a [`LeBuffer`].
pub trait ToLeBytes {
    fn write_le(&self, out: &mut Vec<u8>);
}

macro_rules! scalar_bytes {
    ($($ty:ty),*) => {
        $(
            impl ToLeBytes for $ty {
                fn write_le(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(self.to_raw().as_ref());
                }
            }
        )*
    };
}

scalar_bytes!(u8, u16, u32);

impl<const N: usize> ToLeBytes for [u8; N] {
    fn write_le(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

impl ToLeBytes for &[u8] {
    fn write_le(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

impl ToLeBytes for Signature {
    fn write_le(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_ref());
    }
}

impl ToLeBytes for Codepoint {
    fn write_le(&self, out: &mut Vec<u8>) {
        self.to_u32().write_le(out)
    }
}

/// A convenience type for generating a buffer of little-endian bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeBuffer {
    data: Vec<u8>,
}

impl LeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return a reference to the contents of the buffer
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Write any value to this buffer.
    pub fn push(mut self, item: impl ToLeBytes) -> Self {
        item.write_le(&mut self.data);
        self
    }

    /// Write multiple values into the buffer
    pub fn extend<T: ToLeBytes>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            item.write_le(&mut self.data);
        }
        self
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl std::ops::Deref for LeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<LeBuffer> for Vec<u8> {
    fn from(value: LeBuffer) -> Self {
        value.data
    }
}

/// Build a [`LeBuffer`] from a list of values.
///
/// Non-literal expressions should be wrapped in parentheses.
#[macro_export]
macro_rules! le_buffer {
    ( $( $item:expr ),* $(,)? ) => {{
        let buf = $crate::LeBuffer::new();
        $(
            let buf = buf.push($item);
        )*
        buf
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_values() {
        let buf = le_buffer! {
            (*b"PI"),
            1u8,
            0x0102u16,
            0x0A0B0C0Du32,
            [9u8; 2]
        };
        assert_eq!(
            buf.as_slice(),
            &[b'P', b'I', 1, 0x02, 0x01, 0x0D, 0x0C, 0x0B, 0x0A, 9, 9]
        );
    }

    #[test]
    fn extend() {
        let buf = LeBuffer::new().extend([1u16, 2u16]);
        assert_eq!(buf.into_vec(), vec![1, 0, 2, 0]);
    }
}
