//! Chip descriptor types

use crate::spi::{opcodes, AddressWidth};

/// Program page size shared by every supported chip
pub const PAGE_SIZE: u32 = 256;

/// Mask selecting the device family from a JEDEC id
pub const FAMILY_MASK: u32 = 0xFFFF_0000;

/// Manufacturer id of Spansion/Cypress parts
pub const MFR_SPANSION: u8 = 0x01;
/// Manufacturer id of Winbond parts
pub const MFR_WINBOND: u8 = 0xEF;

/// Static description of one flash chip model
///
/// Descriptors never change after construction; the built-in ones live in a
/// `'static` table and the ones loaded from catalog files live for the rest
/// of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipDescriptor {
    /// Vendor name (e.g., "Winbond")
    pub vendor: &'static str,
    /// Chip model name (e.g., "W25Q128BV")
    pub name: &'static str,
    /// First byte of the RDID response
    pub manufacturer_id: u8,
    /// RDID bytes 1..=4, big-endian
    pub jedec_id: u32,
    /// Erase sector size in bytes
    pub sector_size: u32,
    /// Number of erase sectors
    pub sector_count: u32,
    /// Chip needs 4-byte addressing
    pub four_byte_addr: bool,
    /// Minimum supply voltage in millivolts
    pub vcc_min_mv: u16,
    /// Maximum supply voltage in millivolts
    pub vcc_max_mv: u16,
}

/// How a chip is switched between 3-byte and 4-byte addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FourByteMethod {
    /// Write the bank register, then read it back to confirm (Spansion)
    BankRegister,
    /// Dedicated enter/exit opcodes
    EnterExit {
        /// Exiting must also zero the extended address register (Winbond)
        clear_ext_addr: bool,
    },
}

impl ChipDescriptor {
    /// Total capacity in bytes
    pub const fn total_size(&self) -> u32 {
        self.sector_size * self.sector_count
    }

    /// Device family (upper half of the JEDEC id)
    pub const fn family(&self) -> u32 {
        self.jedec_id & FAMILY_MASK
    }

    /// Address width used by addressed commands
    pub const fn address_width(&self) -> AddressWidth {
        if self.four_byte_addr {
            AddressWidth::FourByte
        } else {
            AddressWidth::ThreeByte
        }
    }

    /// The addressing-mode switch this chip needs, if any
    pub fn four_byte_method(&self) -> Option<FourByteMethod> {
        if !self.four_byte_addr {
            return None;
        }
        Some(match self.manufacturer_id {
            MFR_SPANSION => FourByteMethod::BankRegister,
            id => FourByteMethod::EnterExit {
                clear_ext_addr: id == MFR_WINBOND,
            },
        })
    }

    /// Minimum supply voltage in volts
    pub fn vcc_min(&self) -> f32 {
        self.vcc_min_mv as f32 / 1000.0
    }

    /// Maximum supply voltage in volts
    pub fn vcc_max(&self) -> f32 {
        self.vcc_max_mv as f32 / 1000.0
    }

    /// Chip cannot be powered at 3.3V and needs a 1.8V adapter
    pub const fn needs_low_voltage_adapter(&self) -> bool {
        self.vcc_max_mv < 3000
    }

    /// The RDID response this chip answers with
    pub const fn rdid_bytes(&self) -> [u8; opcodes::RDID_LEN] {
        let id = self.jedec_id.to_be_bytes();
        [self.manufacturer_id, id[0], id[1], id[2], id[3]]
    }
}

/// Vendor name for a JEDEC manufacturer id
pub fn vendor_name(manufacturer_id: u8) -> Option<&'static str> {
    let name = match manufacturer_id {
        0x01 => "Spansion",
        0x0B => "XTX",
        0x1C => "EON",
        0x1F => "Atmel",
        0x20 => "Micron/XMC",
        0x37 => "AMIC",
        0x4A => "Excel Semi",
        0x54 => "Douqi",
        0x5E => "Zbit",
        0x62 => "ON Semi",
        0x68 => "Boya",
        0x7F => "PFLASH",
        0x85 => "Puya",
        0x8C => "ESMT",
        0x9D => "ISSI",
        0xA1 => "Fudan",
        0xBA => "Zetta",
        0xBF => "PCT",
        0xC2 => "Macronix",
        0xC8 | 0xD8 => "GigaDevice",
        0xE0 => "Paragon",
        0xEF => "Winbond",
        0xF8 => "Fidelix",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chip(manufacturer_id: u8, four_byte_addr: bool) -> ChipDescriptor {
        ChipDescriptor {
            vendor: "Test",
            name: "TEST",
            manufacturer_id,
            jedec_id: 0x4019_0000,
            sector_size: 64 * 1024,
            sector_count: 512,
            four_byte_addr,
            vcc_min_mv: 2700,
            vcc_max_mv: 3600,
        }
    }

    #[test]
    fn test_four_byte_method_by_vendor() {
        assert_eq!(chip(0xC2, false).four_byte_method(), None);
        assert_eq!(
            chip(MFR_SPANSION, true).four_byte_method(),
            Some(FourByteMethod::BankRegister)
        );
        assert_eq!(
            chip(MFR_WINBOND, true).four_byte_method(),
            Some(FourByteMethod::EnterExit {
                clear_ext_addr: true
            })
        );
        assert_eq!(
            chip(0xC2, true).four_byte_method(),
            Some(FourByteMethod::EnterExit {
                clear_ext_addr: false
            })
        );
    }

    #[test]
    fn test_rdid_bytes() {
        let c = chip(0xEF, true);
        assert_eq!(c.rdid_bytes(), [0xEF, 0x40, 0x19, 0x00, 0x00]);
        assert_eq!(c.total_size(), 32 * 1024 * 1024);
        assert_eq!(c.address_width(), AddressWidth::FourByte);
    }

    #[test]
    fn test_low_voltage_adapter() {
        let mut c = chip(0xEF, false);
        assert!(!c.needs_low_voltage_adapter());
        c.vcc_max_mv = 1950;
        assert!(c.needs_low_voltage_adapter());
        assert!((c.vcc_max() - 1.95).abs() < 1e-6);
    }
}
