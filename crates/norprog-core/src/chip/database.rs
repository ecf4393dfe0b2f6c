//! Chip catalog files
//!
//! Extends a [`Catalog`] with chip definitions loaded from RON files at
//! runtime. One file describes the chips of one vendor:
//!
//! ```ron
//! (
//!     vendor: "Winbond",
//!     manufacturer_id: 0xEF,
//!     chips: [
//!         (
//!             name: "W25Q01JV",
//!             jedec_id: 0x40210000,
//!             sector_count: 2048,
//!             four_byte: true,
//!             voltage: (min: 2700, max: 3600),
//!         ),
//!     ],
//! )
//! ```

use alloc::{string::String, vec::Vec};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::catalog::Catalog;
use super::types::{ChipDescriptor, PAGE_SIZE};

/// Error type for catalog file operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// I/O error reading files
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// RON parsing error
    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// A definition is not usable
    #[error("invalid chip {name}: {reason}")]
    Validation {
        /// Chip name
        name: String,
        /// What is wrong with it
        reason: &'static str,
    },
    /// A chip with the same id is already known
    #[error("chip {name} duplicates id {manufacturer_id:02X} {jedec_id:08X}")]
    Duplicate {
        /// Name of the rejected chip
        name: String,
        /// Manufacturer id
        manufacturer_id: u8,
        /// JEDEC id
        jedec_id: u32,
    },
}

// ============================================================================
// RON deserialization types (intermediate format)
// ============================================================================

/// Size specification with human-readable units (for RON parsing)
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub enum Size {
    /// Size in bytes
    B(u32),
    /// Size in kibibytes (1024 bytes)
    KiB(u32),
    /// Size in mebibytes (1024 * 1024 bytes)
    MiB(u32),
}

impl Size {
    /// Convert to bytes
    pub fn to_bytes(self) -> Option<u32> {
        match self {
            Size::B(n) => Some(n),
            Size::KiB(n) => n.checked_mul(1024),
            Size::MiB(n) => n.checked_mul(1024 * 1024),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::KiB(64)
    }
}

/// Supply voltage range in millivolts
#[derive(Debug, Clone, Copy, serde::Deserialize)]
struct VoltageDef {
    min: u16,
    max: u16,
}

impl Default for VoltageDef {
    fn default() -> Self {
        Self {
            min: 2700,
            max: 3600,
        }
    }
}

/// Single chip definition in RON format
#[derive(Debug, Clone, serde::Deserialize)]
struct ChipDef {
    name: String,
    jedec_id: u32,
    #[serde(default)]
    sector_size: Size,
    sector_count: u32,
    #[serde(default)]
    four_byte: bool,
    #[serde(default)]
    voltage: VoltageDef,
}

/// Vendor definition containing multiple chips
#[derive(Debug, Clone, serde::Deserialize)]
struct VendorDef {
    vendor: String,
    manufacturer_id: u8,
    chips: Vec<ChipDef>,
}

fn invalid(name: &str, reason: &'static str) -> CatalogError {
    CatalogError::Validation {
        name: name.into(),
        reason,
    }
}

impl ChipDef {
    fn into_descriptor(
        self,
        vendor: &'static str,
        manufacturer_id: u8,
    ) -> Result<ChipDescriptor, CatalogError> {
        let sector_size = self
            .sector_size
            .to_bytes()
            .ok_or_else(|| invalid(&self.name, "sector size overflows"))?;
        if sector_size == 0 || sector_size % PAGE_SIZE != 0 {
            return Err(invalid(
                &self.name,
                "sector size must be a non-zero multiple of the page size",
            ));
        }
        if self.sector_count == 0 {
            return Err(invalid(&self.name, "sector count must be non-zero"));
        }
        let total = sector_size
            .checked_mul(self.sector_count)
            .ok_or_else(|| invalid(&self.name, "capacity exceeds 4 GiB"))?;
        if total > 16 * 1024 * 1024 && !self.four_byte {
            return Err(invalid(
                &self.name,
                "chips above 16 MiB need 4-byte addressing",
            ));
        }
        if self.voltage.min > self.voltage.max {
            return Err(invalid(&self.name, "voltage range is inverted"));
        }

        Ok(ChipDescriptor {
            vendor,
            // Catalog entries live until the process exits
            name: self.name.leak(),
            manufacturer_id,
            jedec_id: self.jedec_id,
            sector_size,
            sector_count: self.sector_count,
            four_byte_addr: self.four_byte,
            vcc_min_mv: self.voltage.min,
            vcc_max_mv: self.voltage.max,
        })
    }
}

impl Catalog {
    /// Load chip definitions from a RON string
    ///
    /// Either every chip of the file is appended or, on error, none is.
    pub fn load_ron(&mut self, content: &str) -> Result<usize, CatalogError> {
        let vendor_def: VendorDef = ron::from_str(content)?;
        let vendor: &'static str = vendor_def.vendor.leak();
        let manufacturer_id = vendor_def.manufacturer_id;

        let mut chips: Vec<ChipDescriptor> = Vec::with_capacity(vendor_def.chips.len());
        for def in vendor_def.chips {
            let chip = def.into_descriptor(vendor, manufacturer_id)?;
            let clash = self.find_by_id(manufacturer_id, chip.jedec_id).is_some()
                || chips.iter().any(|c| c.jedec_id == chip.jedec_id);
            if clash {
                return Err(CatalogError::Duplicate {
                    name: chip.name.into(),
                    manufacturer_id,
                    jedec_id: chip.jedec_id,
                });
            }
            chips.push(chip);
        }

        let count = chips.len();
        for chip in chips {
            self.add(chip);
        }
        log::debug!("Loaded {} {} chip definitions", count, vendor);
        Ok(count)
    }

    /// Load chip definitions from a single RON file
    pub fn load_file(&mut self, path: &Path) -> Result<usize, CatalogError> {
        let content = fs::read_to_string(path)?;
        self.load_ron(&content)
    }

    /// Load all RON files from a directory, in file name order
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, CatalogError> {
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut total = 0;
        for path in &paths {
            total += self.load_file(path)?;
        }
        Ok(total)
    }
}
