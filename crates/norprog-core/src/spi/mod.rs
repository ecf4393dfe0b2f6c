//! SPI-level building blocks
//!
//! Opcodes, address encoding and bus I/O modes shared by the sequencer and
//! the transports.

mod address;
mod io_mode;
pub mod opcodes;

pub use address::AddressWidth;
pub use io_mode::IoMode;
pub use opcodes::*;
