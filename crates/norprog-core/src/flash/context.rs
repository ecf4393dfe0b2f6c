//! Flash context - runtime state for flash operations

use crate::chip::ChipDescriptor;
use crate::error::{Error, Result};
use crate::spi::AddressWidth;

/// Address mode currently in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressMode {
    /// 3-byte addressing (up to 16 MiB)
    #[default]
    ThreeByte,
    /// 4-byte addressing (up to 4 GiB)
    FourByte,
}

/// Runtime context for flash operations
///
/// Produced by [`probe`](super::probe); holding one means a chip has been
/// identified. Every bulk operation takes it by mutable reference so the
/// current addressing mode stays in sync with the device.
#[derive(Debug, Clone)]
pub struct FlashContext<'c> {
    /// The identified flash chip
    pub chip: &'c ChipDescriptor,
    /// Current address mode
    pub address_mode: AddressMode,
}

impl<'c> FlashContext<'c> {
    /// Create a context for a chip that is still in its power-on mode
    pub fn new(chip: &'c ChipDescriptor) -> Self {
        Self {
            chip,
            address_mode: AddressMode::ThreeByte,
        }
    }

    /// Total capacity in bytes
    pub fn total_size(&self) -> u32 {
        self.chip.total_size()
    }

    /// Erase sector size in bytes
    pub fn sector_size(&self) -> u32 {
        self.chip.sector_size
    }

    /// Address width matching the current mode
    pub fn address_width(&self) -> AddressWidth {
        match self.address_mode {
            AddressMode::ThreeByte => AddressWidth::ThreeByte,
            AddressMode::FourByte => AddressWidth::FourByte,
        }
    }

    /// Addressed commands must be bracketed by 4-byte mode entry and exit
    pub fn needs_mode_switch(&self) -> bool {
        self.chip.four_byte_method().is_some()
    }

    /// Check that `[addr, addr + len)` lies within the chip
    pub fn check_range(&self, addr: u32, len: usize) -> Result<()> {
        let capacity = self.total_size();
        let end = (addr as u64).saturating_add(len as u64);
        if end > capacity as u64 {
            log::error!(
                "Range 0x{:08X}+0x{:X} exceeds {} capacity 0x{:08X}",
                addr,
                len,
                self.chip.name,
                capacity
            );
            return Err(Error::OutOfBounds {
                addr,
                len: u32::try_from(len).unwrap_or(u32::MAX),
                capacity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip::Catalog;

    #[test]
    fn test_check_range() {
        let catalog = Catalog::builtin();
        let ctx = FlashContext::new(catalog.find_by_name("W25Q128BV").unwrap());
        let size = ctx.total_size();

        assert!(ctx.check_range(0, size as usize).is_ok());
        assert!(ctx.check_range(size - 1, 1).is_ok());
        assert!(ctx.check_range(size, 0).is_ok());
        assert_eq!(
            ctx.check_range(size - 1, 2),
            Err(Error::OutOfBounds {
                addr: size - 1,
                len: 2,
                capacity: size
            })
        );
        assert!(ctx.check_range(u32::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_address_width_follows_mode() {
        let catalog = Catalog::builtin();
        let mut ctx = FlashContext::new(catalog.find_by_name("W25Q256FV").unwrap());
        assert!(ctx.needs_mode_switch());
        assert_eq!(ctx.address_width(), AddressWidth::ThreeByte);
        ctx.address_mode = AddressMode::FourByte;
        assert_eq!(ctx.address_width(), AddressWidth::FourByte);
    }
}
