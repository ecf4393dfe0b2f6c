//! CLI command implementations
//!
//! Every command except the list commands opens a programmer, identifies
//! the chip on it and then works through a [`SpiNorFlash`].
//!
//! [`SpiNorFlash`]: norprog_core::flash::SpiNorFlash

mod erase;
mod list;
mod probe;
mod progress;
mod read;
mod verify;
mod write;

pub use erase::run_erase;
pub use list::{list_chips, list_programmers};
pub use probe::{print_chip_info, run_probe};
pub use read::run_read;
pub use verify::run_verify;
pub use write::{run_write, WriteOptions};

use norprog_core::flash::SpiNorFlash;
use norprog_core::programmer::SpiBus;

/// Format a byte count the way sizes are printed everywhere in the CLI
pub fn format_size(bytes: u32) -> String {
    if bytes >= 1024 * 1024 && bytes % (1024 * 1024) == 0 {
        format!("{} MiB", bytes / (1024 * 1024))
    } else if bytes >= 1024 && bytes % 1024 == 0 {
        format!("{} KiB", bytes / 1024)
    } else {
        format!("{} B", bytes)
    }
}

/// Print the one-line detection summary every device command starts with
fn print_found<B: SpiBus + ?Sized>(flash: &SpiNorFlash<'_, '_, B>) {
    let chip = flash.chip();
    println!(
        "Found: {} {} ({})",
        chip.vendor,
        chip.name,
        format_size(chip.total_size())
    );
}

/// Resolve `--start`/`--length` against the chip size
///
/// A missing start means 0, a missing length means "to the end of the chip".
fn resolve_range(
    start: Option<u32>,
    length: Option<u32>,
    size: u32,
) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    let start = start.unwrap_or(0);
    if start >= size {
        return Err(format!("Start address 0x{:X} is beyond the chip size 0x{:X}", start, size).into());
    }
    let length = length.unwrap_or(size - start);
    if u64::from(start) + u64::from(length) > u64::from(size) {
        return Err(format!(
            "Range 0x{:X}+0x{:X} exceeds the chip size 0x{:X}",
            start, length, size
        )
        .into());
    }
    Ok((start, length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(16 * 1024 * 1024), "16 MiB");
        assert_eq!(format_size(64 * 1024), "64 KiB");
        assert_eq!(format_size(1536 * 1024), "1536 KiB");
        assert_eq!(format_size(100), "100 B");
    }

    #[test]
    fn test_resolve_range() {
        let size = 0x10_0000;
        assert_eq!(resolve_range(None, None, size).unwrap(), (0, size));
        assert_eq!(
            resolve_range(Some(0x1000), None, size).unwrap(),
            (0x1000, size - 0x1000)
        );
        assert_eq!(
            resolve_range(Some(0x1000), Some(0x20), size).unwrap(),
            (0x1000, 0x20)
        );
        assert!(resolve_range(Some(size), None, size).is_err());
        assert!(resolve_range(Some(0x1000), Some(size), size).is_err());
    }
}
