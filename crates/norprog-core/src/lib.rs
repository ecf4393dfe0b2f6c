//! norprog-core - SPI NOR flash identification and bulk operations
//!
//! This crate talks to a serial NOR flash chip over an [`SpiBus`] transport:
//! it identifies the chip against a catalog of known parts, then erases,
//! reads and programs it while respecting sector and page boundaries. It is
//! `no_std` compatible so the same driver can run on a microcontroller that
//! bit-bangs the bus itself.
//!
//! # Features
//!
//! - `std` - Enable standard library support (includes `alloc`) and RON
//!   catalog files
//! - `alloc` - Allow extending the built-in catalog at runtime
//!
//! # Example
//!
//! ```ignore
//! use norprog_core::{chip::Catalog, flash, programmer::SpiBus};
//!
//! fn dump<B: SpiBus>(bus: &mut B, out: &mut [u8]) -> norprog_core::Result<()> {
//!     let catalog = Catalog::builtin();
//!     let mut ctx = flash::probe(bus, &catalog)?;
//!     println!("Found: {} {}", ctx.chip.vendor, ctx.chip.name);
//!     flash::read(bus, &mut ctx, 0, out)?;
//!     Ok(())
//! }
//! ```
//!
//! [`SpiBus`]: programmer::SpiBus

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod chip;
pub mod error;
pub mod flash;
pub mod programmer;
pub mod protocol;
pub mod spi;

pub use error::{Error, Result};
