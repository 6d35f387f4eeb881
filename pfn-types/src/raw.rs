//! types for working with raw little-endian bytes

/// A type with a known, constant size in the font file.
pub trait FixedSize: Sized {
    /// The raw size of this type, in bytes.
    const RAW_BYTE_LEN: usize;
}

/// A trait for font scalars.
///
/// Multi-byte PFN fields are stored little-endian, the native order of the
/// microcontrollers the format is built for. This trait is the boundary
/// between those raw bytes and native values; nothing in this crate ever
/// reinterprets buffer memory as a typed struct.
pub trait Scalar: FixedSize + Copy {
    /// The raw byte representation of this type.
    type Raw: Copy + AsRef<[u8]>;

    /// Create an instance of this type from raw little-endian bytes
    fn from_raw(raw: Self::Raw) -> Self;

    /// Encode this type as raw little-endian bytes
    fn to_raw(self) -> Self::Raw;

    /// Attempt to read a scalar from a slice.
    ///
    /// This will always succeed if `slice.len() == Self::RAW_BYTE_LEN`, and will
    /// always return `None` otherwise.
    fn read(slice: &[u8]) -> Option<Self>;
}

macro_rules! int_scalar {
    ($ty:ty, $len:literal) => {
        impl FixedSize for $ty {
            const RAW_BYTE_LEN: usize = $len;
        }

        impl Scalar for $ty {
            type Raw = [u8; $len];

            #[inline(always)]
            fn from_raw(raw: [u8; $len]) -> $ty {
                <$ty>::from_le_bytes(raw)
            }

            fn to_raw(self) -> [u8; $len] {
                self.to_le_bytes()
            }

            #[inline]
            fn read(slice: &[u8]) -> Option<$ty> {
                slice.try_into().ok().map(Self::from_raw)
            }
        }
    };
}

int_scalar!(u8, 1);
int_scalar!(u16, 2);
int_scalar!(u32, 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian() {
        assert_eq!(u16::read(&[0x34, 0x12]), Some(0x1234));
        assert_eq!(u32::read(&[0x78, 0x56, 0x34, 0x12]), Some(0x1234_5678));
        assert_eq!(0x0100u16.to_raw(), [0x00, 0x01]);
    }

    #[test]
    fn wrong_len() {
        assert_eq!(u16::read(&[1]), None);
        assert_eq!(u32::read(&[1, 2, 3, 4, 5]), None);
        assert_eq!(u8::read(&[]), None);
    }
}
