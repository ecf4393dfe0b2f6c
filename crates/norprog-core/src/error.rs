//! Error types for norprog-core
//!
//! This module provides a no_std compatible error type shared by the
//! sequencer, the bulk operations and every transport.

use core::fmt;

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No catalog row matched the identification bytes
    NotDetected,
    /// Status register never reported ready within the allowed time
    Timeout,
    /// A bus primitive failed
    Transport,
    /// Operation range exceeds the chip capacity
    OutOfBounds {
        /// First byte of the requested range
        addr: u32,
        /// Requested length in bytes
        len: u32,
        /// Capacity of the active chip
        capacity: u32,
    },
    /// Zero-length erase request
    ZeroLength,
    /// Addressing-width switch was not acknowledged by the chip
    ModeMismatch {
        /// Register value written
        expected: u8,
        /// Register value read back
        found: u8,
    },
    /// The transport accepted fewer bytes than a page program requested
    ShortWrite {
        /// Bytes completely programmed before the short chunk
        written: usize,
    },
    /// Read-back data differs from the expected contents
    VerifyMismatch {
        /// Address of the first differing byte
        addr: u32,
        /// Expected byte
        expected: u8,
        /// Byte read from the chip
        found: u8,
    },
}

impl Error {
    /// Returns true for errors caused by the caller's arguments rather than
    /// the chip or the bus
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::ZeroLength)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDetected => write!(f, "SPI NOR flash not detected"),
            Self::Timeout => write!(f, "timed out waiting for flash to become ready"),
            Self::Transport => write!(f, "SPI transfer failed"),
            Self::OutOfBounds {
                addr,
                len,
                capacity,
            } => write!(
                f,
                "range 0x{:08X}+0x{:X} exceeds chip capacity 0x{:08X}",
                addr, len, capacity
            ),
            Self::ZeroLength => write!(f, "zero-length erase requested"),
            Self::ModeMismatch { expected, found } => write!(
                f,
                "4-byte mode switch failed: wrote 0x{:02X}, read back 0x{:02X}",
                expected, found
            ),
            Self::ShortWrite { written } => {
                write!(f, "short write after {} bytes", written)
            }
            Self::VerifyMismatch {
                addr,
                expected,
                found,
            } => write!(
                f,
                "verify failed at 0x{:08X}: expected 0x{:02X}, found 0x{:02X}",
                addr, expected, found
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
