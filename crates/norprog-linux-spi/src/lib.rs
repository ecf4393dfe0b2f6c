//! norprog-linux-spi - spidev transport
//!
//! Drives a flash chip wired to the SPI controller of a Linux board through
//! the `/dev/spidevX.Y` character device (bus X, chip select Y). The kernel
//! owns chip select, so bytes written inside one [`SpiBus`] select window
//! are collected and sent as a single `SPI_IOC_MESSAGE` when the window
//! reads or ends.
//!
//! # Example
//!
//! ```no_run
//! use norprog_core::chip::Catalog;
//! use norprog_core::flash;
//! use norprog_linux_spi::{LinuxSpi, LinuxSpiConfig};
//!
//! let config = LinuxSpiConfig::new("/dev/spidev0.0")
//!     .with_speed(4_000_000)  // 4 MHz
//!     .with_mode(0);
//! let mut spi = LinuxSpi::open(&config)?;
//!
//! let catalog = Catalog::builtin();
//! let ctx = flash::probe(&mut spi, &catalog)?;
//! println!("Found {} {}", ctx.chip.vendor, ctx.chip.name);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Usage with the norprog CLI
//!
//! ```bash
//! # Probe chip using default settings
//! norprog probe -p linux_spi:dev=/dev/spidev0.0
//!
//! # Specify SPI speed in kHz
//! norprog probe -p linux_spi:dev=/dev/spidev0.0,spispeed=4000
//!
//! # Specify SPI mode
//! norprog read -p linux_spi:dev=/dev/spidev0.0,mode=3 -o flash.bin
//! ```
//!
//! The node must exist (`CONFIG_SPI_SPIDEV`) and be readable and writable
//! by the invoking user.
//!
//! [`SpiBus`]: norprog_core::programmer::SpiBus

pub mod device;
pub mod error;

// Re-exports
pub use device::{mode, parse_options, LinuxSpi, LinuxSpiConfig};
pub use error::{LinuxSpiError, Result, Setting};

/// Open a spidev node from programmer options (`dev=`, `spispeed=` in kHz,
/// `mode=`) as a boxed bus
pub fn open_linux_spi(
    options: &[(&str, &str)],
) -> Result<Box<dyn norprog_core::programmer::SpiBus + Send>> {
    let config = parse_options(options)?;
    let spi = LinuxSpi::open(&config)?;
    Ok(Box::new(spi))
}
