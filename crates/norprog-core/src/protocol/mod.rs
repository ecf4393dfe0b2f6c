//! SPI NOR command sequencer
//!
//! Elementary flash verbs: status access, write enable, block protection,
//! ready polling and the addressing-mode switch. Each verb is one or more
//! complete chip-select windows.

mod spi25;
mod status;

pub use spi25::*;
pub use status::StatusRegister;
