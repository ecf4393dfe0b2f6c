//! Status register

use bitflags::bitflags;

use crate::spi::opcodes;

bitflags! {
    /// Status register contents as returned by RDSR
    ///
    /// Read fresh on every poll; never cache it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusRegister: u8 {
        /// Write in progress
        const WIP = opcodes::SR_WIP;
        /// Write enable latch
        const WEL = opcodes::SR_WEL;
        /// Block protect 0
        const BP0 = opcodes::SR_BP0;
        /// Block protect 1
        const BP1 = opcodes::SR_BP1;
        /// Block protect 2
        const BP2 = opcodes::SR_BP2;
        /// Erase/program error
        const EPE = opcodes::SR_EPE;
        /// Status register write disable
        const SRWD = opcodes::SR_SRWD;

        /// All block protect bits
        const BP = Self::BP0.bits() | Self::BP1.bits() | Self::BP2.bits();
    }
}

impl StatusRegister {
    /// A program or erase is still running
    pub fn is_write_in_progress(&self) -> bool {
        self.contains(Self::WIP)
    }

    /// The write enable latch is set
    pub fn is_write_enabled(&self) -> bool {
        self.contains(Self::WEL)
    }

    /// Any block protect bit is set
    pub fn is_protected(&self) -> bool {
        self.intersects(Self::BP)
    }

    /// The last erase or program failed
    pub fn has_error(&self) -> bool {
        self.contains(Self::EPE)
    }

    /// Not ready for the next command
    ///
    /// A pending write enable or a latched error also counts as busy.
    pub fn is_busy(&self) -> bool {
        self.intersects(Self::WIP | Self::WEL | Self::EPE)
    }
}
