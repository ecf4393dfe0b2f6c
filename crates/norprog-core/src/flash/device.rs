//! SPI NOR flash device adapter
//!
//! This module provides `SpiNorFlash`, which bundles a bus with the context
//! of the chip identified on it.

use crate::chip::{Catalog, ChipDescriptor};
use crate::error::Result;
use crate::programmer::SpiBus;

use super::context::FlashContext;
use super::operations;
use super::progress::Progress;

/// An identified flash chip on a bus
///
/// # Example
///
/// ```ignore
/// use norprog_core::chip::Catalog;
/// use norprog_core::flash::SpiNorFlash;
///
/// fn dump<B: SpiBus>(bus: &mut B) -> norprog_core::Result<()> {
///     let catalog = Catalog::builtin();
///     let mut flash = SpiNorFlash::probe(bus, &catalog)?;
///
///     let mut buf = [0u8; 4096];
///     flash.read(0, &mut buf)?;
///     Ok(())
/// }
/// ```
pub struct SpiNorFlash<'a, 'c, B: SpiBus + ?Sized> {
    bus: &'a mut B,
    ctx: FlashContext<'c>,
}

impl<'a, 'c, B: SpiBus + ?Sized> SpiNorFlash<'a, 'c, B> {
    /// Wrap a bus and a context obtained from [`operations::probe`]
    pub fn new(bus: &'a mut B, ctx: FlashContext<'c>) -> Self {
        Self { bus, ctx }
    }

    /// Identify the chip on `bus`
    pub fn probe(bus: &'a mut B, catalog: &'c Catalog) -> Result<Self> {
        let ctx = operations::probe(bus, catalog)?;
        Ok(Self { bus, ctx })
    }

    /// The identified chip
    pub fn chip(&self) -> &'c ChipDescriptor {
        self.ctx.chip
    }

    /// Capacity in bytes
    pub fn size(&self) -> u32 {
        self.ctx.total_size()
    }

    /// Get a reference to the flash context
    pub fn context(&self) -> &FlashContext<'c> {
        &self.ctx
    }

    /// Get a reference to the underlying bus
    pub fn bus(&mut self) -> &mut B {
        self.bus
    }

    /// Consume the adapter and return the flash context
    pub fn into_context(self) -> FlashContext<'c> {
        self.ctx
    }

    /// See [`operations::erase`]
    pub fn erase(&mut self, offset: u32, len: u32) -> Result<()> {
        operations::erase(self.bus, &mut self.ctx, offset, len)
    }

    /// See [`operations::erase_with_progress`]
    pub fn erase_with_progress<P: Progress + ?Sized>(
        &mut self,
        offset: u32,
        len: u32,
        progress: &mut P,
    ) -> Result<()> {
        operations::erase_with_progress(self.bus, &mut self.ctx, offset, len, progress)
    }

    /// See [`operations::chip_erase`]
    pub fn chip_erase(&mut self) -> Result<()> {
        operations::chip_erase(self.bus, &mut self.ctx)
    }

    /// See [`operations::read`]
    pub fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<usize> {
        operations::read(self.bus, &mut self.ctx, offset, buf)
    }

    /// See [`operations::read_with_progress`]
    pub fn read_with_progress<P: Progress + ?Sized>(
        &mut self,
        offset: u32,
        buf: &mut [u8],
        progress: &mut P,
    ) -> Result<usize> {
        operations::read_with_progress(self.bus, &mut self.ctx, offset, buf, progress)
    }

    /// See [`operations::write`]
    pub fn write(&mut self, offset: u32, data: &[u8]) -> Result<usize> {
        operations::write(self.bus, &mut self.ctx, offset, data)
    }

    /// See [`operations::write_with_progress`]
    pub fn write_with_progress<P: Progress + ?Sized>(
        &mut self,
        offset: u32,
        data: &[u8],
        progress: &mut P,
    ) -> Result<usize> {
        operations::write_with_progress(self.bus, &mut self.ctx, offset, data, progress)
    }

    /// See [`operations::verify`]
    pub fn verify(&mut self, offset: u32, expected: &[u8]) -> Result<()> {
        operations::verify(self.bus, &mut self.ctx, offset, expected)
    }

    /// See [`operations::verify_with_progress`]
    pub fn verify_with_progress<P: Progress + ?Sized>(
        &mut self,
        offset: u32,
        expected: &[u8],
        progress: &mut P,
    ) -> Result<()> {
        operations::verify_with_progress(self.bus, &mut self.ctx, offset, expected, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::programmer::mock::MockBus;
    use crate::spi::opcodes;

    #[test]
    fn test_probe_and_read() {
        let catalog = Catalog::builtin();
        let mut bus = MockBus::new();
        bus.rdid = [0xEF, 0x40, 0x18, 0x00, 0x00];
        bus.registers[opcodes::READ as usize] = 0x5A;

        let mut flash = SpiNorFlash::probe(&mut bus, &catalog).unwrap();
        assert_eq!(flash.chip().name, "W25Q128BV");
        assert_eq!(flash.size(), 16 * 1024 * 1024);

        let mut buf = [0u8; 16];
        assert_eq!(flash.read(0x100, &mut buf).unwrap(), 16);
        assert_eq!(buf, [0x5A; 16]);
        assert!(flash.verify(0x100, &[0x5A; 16]).is_ok());
        assert!(flash.read(flash.size(), &mut buf).is_err());
    }
}
