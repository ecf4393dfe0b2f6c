//! Programmer trait definitions

use core::ops::{Deref, DerefMut};

use crate::error::{Error, Result};
use crate::spi::IoMode;

/// Byte-level SPI bus with software-controlled chip select
///
/// Every flash command is one chip-select window: assert, shift the opcode
/// and arguments out, optionally shift a response in, deassert. The driver
/// never keeps chip select asserted across calls into the sequencer.
///
/// Implementations may buffer bytes between `assert_select` and
/// `deassert_select` as long as the bytes reach the chip in order and a
/// `read_bytes` call sees the effect of every byte written before it.
pub trait SpiBus {
    /// Drive chip select active (low)
    fn assert_select(&mut self) -> Result<()>;

    /// Release chip select, ending the current command
    fn deassert_select(&mut self) -> Result<()>;

    /// Shift bytes out to the chip
    ///
    /// Returns the number of bytes the transport accepted, which may be
    /// less than `data.len()`.
    fn write_bytes(&mut self, data: &[u8], mode: IoMode) -> Result<usize>;

    /// Shift `buf.len()` bytes in from the chip
    fn read_bytes(&mut self, buf: &mut [u8], mode: IoMode) -> Result<()>;

    /// Shift a single byte out
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        match self.write_bytes(&[byte], IoMode::Single)? {
            1 => Ok(()),
            _ => Err(Error::Transport),
        }
    }

    /// Delay for the specified number of microseconds
    fn delay_us(&mut self, us: u32);

    /// Monotonic time in microseconds, used for ready-wait deadlines
    fn monotonic_us(&self) -> u64;
}

// Lets the CLI pick a programmer at runtime
#[cfg(feature = "alloc")]
impl SpiBus for alloc::boxed::Box<dyn SpiBus + Send> {
    fn assert_select(&mut self) -> Result<()> {
        (**self).assert_select()
    }

    fn deassert_select(&mut self) -> Result<()> {
        (**self).deassert_select()
    }

    fn write_bytes(&mut self, data: &[u8], mode: IoMode) -> Result<usize> {
        (**self).write_bytes(data, mode)
    }

    fn read_bytes(&mut self, buf: &mut [u8], mode: IoMode) -> Result<()> {
        (**self).read_bytes(buf, mode)
    }

    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }

    fn monotonic_us(&self) -> u64 {
        (**self).monotonic_us()
    }
}

/// Chip-select window over a bus
///
/// Created by asserting chip select; deasserts it when dropped, so every
/// early return inside a command still ends the command. Use
/// [`Selected::release`] on the success path to observe deassert errors.
pub struct Selected<'a, B: SpiBus + ?Sized> {
    bus: &'a mut B,
    released: bool,
}

impl<'a, B: SpiBus + ?Sized> Selected<'a, B> {
    /// Assert chip select
    pub fn new(bus: &'a mut B) -> Result<Self> {
        bus.assert_select()?;
        Ok(Self {
            bus,
            released: false,
        })
    }

    /// Deassert chip select and report the result
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        self.bus.deassert_select()
    }
}

impl<B: SpiBus + ?Sized> Deref for Selected<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.bus
    }
}

impl<B: SpiBus + ?Sized> DerefMut for Selected<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.bus
    }
}

impl<B: SpiBus + ?Sized> Drop for Selected<'_, B> {
    fn drop(&mut self) {
        if !self.released && self.bus.deassert_select().is_err() {
            log::warn!("Failed to release chip select");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::programmer::mock::MockBus;

    #[test]
    fn test_selected_releases_on_drop() {
        let mut bus = MockBus::new();
        {
            let mut cs = Selected::new(&mut bus).unwrap();
            cs.write_byte(0x06).unwrap();
            assert!(cs.selected);
        }
        assert!(!bus.selected);
        assert_eq!(bus.transactions, std::vec![std::vec![0x06u8]]);
    }

    #[test]
    fn test_selected_releases_on_error_path() {
        fn failing(bus: &mut MockBus) -> Result<()> {
            let mut cs = Selected::new(bus)?;
            cs.write_byte(0x03)?;
            let mut buf = [0u8; 4];
            cs.read_bytes(&mut buf, IoMode::Single)?;
            cs.release()
        }

        let mut bus = MockBus::new();
        bus.fail_reads = true;
        assert_eq!(failing(&mut bus), Err(Error::Transport));
        assert!(!bus.selected);
    }

    #[test]
    fn test_write_byte_detects_short_transfer() {
        let mut bus = MockBus::new();
        bus.accept_limit = Some(0);
        bus.assert_select().unwrap();
        assert_eq!(bus.write_byte(0x06), Err(Error::Transport));
    }
}
