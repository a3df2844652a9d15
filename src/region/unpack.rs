//! Fixed-format numeric reads over region bytes.

use super::region::ByteRegion;
use crate::error::RangeError;

/// Fixed-width binary numeric formats understood by
/// [`ByteRegion::unpack`].
///
/// Multi-byte formats are network (big-endian) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 16-bit integer, network order.
    U16,
    /// Signed 16-bit integer, network order.
    I16,
    /// Unsigned 32-bit integer, network order.
    U32,
    /// Signed 32-bit integer, network order.
    I32,
}

impl WireFormat {
    /// Width of one value in bytes.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 => 4,
        }
    }
}

impl ByteRegion {
    /// Read one `format` value starting at `offset`.
    ///
    /// The result is widened to `i64`, which represents every supported
    /// format losslessly.
    ///
    /// # Errors
    ///
    /// [`RangeError::Overrun`] when the value's width exceeds
    /// `self.len() - offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use byteregion::{ByteRegion, WireFormat};
    ///
    /// let region = ByteRegion::allocate(4).unwrap();
    /// region.set_byte_at(0, 0x12).unwrap();
    /// region.set_byte_at(1, 0x34).unwrap();
    /// assert_eq!(region.unpack(WireFormat::U16, 0).unwrap(), 0x1234);
    /// ```
    pub fn unpack(&self, format: WireFormat, offset: usize) -> Result<i64, RangeError> {
        let width = format.width();
        if width > self.len().saturating_sub(offset) {
            return Err(RangeError::Overrun {
                width,
                offset,
                len: self.len(),
            });
        }
        Ok(self.with_bytes(|bytes| {
            let field = &bytes[offset..offset + width];
            match format {
                WireFormat::U8 => i64::from(field[0]),
                WireFormat::I8 => i64::from(i8::from_be_bytes([field[0]])),
                WireFormat::U16 => i64::from(u16::from_be_bytes([field[0], field[1]])),
                WireFormat::I16 => i64::from(i16::from_be_bytes([field[0], field[1]])),
                WireFormat::U32 => i64::from(u32::from_be_bytes([
                    field[0], field[1], field[2], field[3],
                ])),
                WireFormat::I32 => i64::from(i32::from_be_bytes([
                    field[0], field[1], field[2], field[3],
                ])),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_with(data: &[u8]) -> ByteRegion {
        let region = ByteRegion::allocate(data.len()).expect("allocate");
        for (i, &b) in data.iter().enumerate() {
            region.set_byte_at(i, b).expect("set");
        }
        region
    }

    #[test]
    fn test_widths() {
        assert_eq!(WireFormat::U8.width(), 1);
        assert_eq!(WireFormat::I8.width(), 1);
        assert_eq!(WireFormat::U16.width(), 2);
        assert_eq!(WireFormat::I16.width(), 2);
        assert_eq!(WireFormat::U32.width(), 4);
        assert_eq!(WireFormat::I32.width(), 4);
    }

    #[test]
    fn test_unpack_network_order() {
        let region = region_with(&[0x12, 0x34, 0x56, 0x78]);
        assert_eq!(region.unpack(WireFormat::U8, 0).expect("u8"), 0x12);
        assert_eq!(region.unpack(WireFormat::U16, 0).expect("u16"), 0x1234);
        assert_eq!(region.unpack(WireFormat::U16, 2).expect("u16"), 0x5678);
        assert_eq!(region.unpack(WireFormat::U32, 0).expect("u32"), 0x1234_5678);
    }

    #[test]
    fn test_unpack_signed() {
        let region = region_with(&[0xFF, 0xFE, 0xFF, 0xFF]);
        assert_eq!(region.unpack(WireFormat::I8, 0).expect("i8"), -1);
        assert_eq!(region.unpack(WireFormat::I16, 0).expect("i16"), -2);
        assert_eq!(region.unpack(WireFormat::I32, 0).expect("i32"), -65537);
        assert_eq!(
            region.unpack(WireFormat::U32, 0).expect("u32"),
            0xFFFE_FFFF
        );
    }

    #[test]
    fn test_unpack_overrun() {
        let region = region_with(&[1, 2, 3]);
        assert_eq!(
            region.unpack(WireFormat::U32, 0).unwrap_err(),
            RangeError::Overrun {
                width: 4,
                offset: 0,
                len: 3
            }
        );
        assert_eq!(
            region.unpack(WireFormat::U16, 2).unwrap_err(),
            RangeError::Overrun {
                width: 2,
                offset: 2,
                len: 3
            }
        );
        assert_eq!(
            region.unpack(WireFormat::U8, 9).unwrap_err(),
            RangeError::Overrun {
                width: 1,
                offset: 9,
                len: 3
            }
        );
    }

    #[test]
    fn test_unpack_through_slice() {
        let region = region_with(&[0, 0xAB, 0xCD, 0]);
        let mid = region.slice(1, 3).expect("slice");
        assert_eq!(mid.unpack(WireFormat::U16, 0).expect("u16"), 0xABCD);
    }
}
