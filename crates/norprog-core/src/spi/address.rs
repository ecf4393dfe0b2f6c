//! Address width types

/// Address width for addressed commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AddressWidth {
    /// 3-byte (24-bit) address - supports up to 16 MiB
    #[default]
    ThreeByte,
    /// 4-byte (32-bit) address - supports up to 4 GiB
    FourByte,
}

impl AddressWidth {
    /// Returns the number of address bytes
    pub const fn bytes(&self) -> usize {
        match self {
            Self::ThreeByte => 3,
            Self::FourByte => 4,
        }
    }

    /// Encode an address big-endian into `buf`, returning the used prefix
    pub fn encode<'b>(&self, address: u32, buf: &'b mut [u8; 4]) -> &'b [u8] {
        let be = address.to_be_bytes();
        match self {
            Self::ThreeByte => {
                buf[..3].copy_from_slice(&be[1..]);
                &buf[..3]
            }
            Self::FourByte => {
                *buf = be;
                &buf[..]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_three_byte_drops_top_byte() {
        let mut buf = [0u8; 4];
        assert_eq!(
            AddressWidth::ThreeByte.encode(0x12_34_56_78, &mut buf),
            &[0x34, 0x56, 0x78]
        );
    }

    #[test]
    fn test_encode_four_byte() {
        let mut buf = [0u8; 4];
        assert_eq!(
            AddressWidth::FourByte.encode(0x01_FF_00_10, &mut buf),
            &[0x01, 0xFF, 0x00, 0x10]
        );
    }
}
