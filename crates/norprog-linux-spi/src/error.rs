//! Error types for the spidev transport

use core::fmt;
use thiserror::Error;

/// A controller setting applied while opening the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// SPI_IOC_WR_MODE
    Mode(u8),
    /// SPI_IOC_WR_BITS_PER_WORD
    BitsPerWord(u8),
    /// SPI_IOC_WR_MAX_SPEED_HZ
    SpeedHz(u32),
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mode(mode) => write!(f, "SPI mode {}", mode),
            Self::BitsPerWord(bits) => write!(f, "{} bits per word", bits),
            Self::SpeedHz(hz) => write!(f, "clock speed {} Hz", hz),
        }
    }
}

/// Errors opening or driving a spidev device
#[derive(Debug, Error)]
pub enum LinuxSpiError {
    /// The device node could not be opened
    #[error("Failed to open {path}: {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The driver rejected a setting
    #[error("Failed to set {setting}: {source}")]
    Configure {
        setting: Setting,
        #[source]
        source: std::io::Error,
    },

    /// SPI_IOC_MESSAGE failed
    #[error("SPI transfer of {len} bytes failed: {source}")]
    TransferFailed {
        len: usize,
        #[source]
        source: std::io::Error,
    },

    /// A programmer option has an unusable value
    #[error("Invalid option {key}={value}: {reason}")]
    InvalidOption {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    /// No `dev=` option was given
    #[error("No device specified. Use dev=/dev/spidevX.Y")]
    NoDevice,
}

impl LinuxSpiError {
    pub(crate) fn configure(setting: Setting, errno: nix::errno::Errno) -> Self {
        Self::Configure {
            setting,
            source: std::io::Error::from_raw_os_error(errno as i32),
        }
    }
}

/// Result type for spidev operations
pub type Result<T> = std::result::Result<T, LinuxSpiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = LinuxSpiError::configure(Setting::SpeedHz(2_000_000), nix::errno::Errno::EINVAL);
        assert!(err.to_string().starts_with("Failed to set clock speed 2000000 Hz"));

        let err = LinuxSpiError::InvalidOption {
            key: "mode",
            value: "7".into(),
            reason: "must be 0-3",
        };
        assert_eq!(err.to_string(), "Invalid option mode=7: must be 0-3");
    }
}
