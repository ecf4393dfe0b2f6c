//! Write command implementation

use norprog_core::flash::SpiNorFlash;
use norprog_core::programmer::SpiBus;
use std::fs;
use std::path::Path;

use super::print_found;
use super::progress::IndicatifProgress;

/// Options for the write command
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    /// Address the image is written at
    pub start: u32,
    /// Erase the covered sectors first
    pub erase: bool,
    /// Read back and compare afterwards
    pub verify: bool,
}

/// Run the write command
pub fn run_write<B: SpiBus + ?Sized>(
    flash: &mut SpiNorFlash<'_, '_, B>,
    input: &Path,
    options: WriteOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    print_found(flash);

    let data = fs::read(input)?;
    if data.is_empty() {
        return Err(format!("{:?} is empty", input).into());
    }
    let size = flash.size();
    let len = u32::try_from(data.len()).ok().filter(|&len| {
        u64::from(options.start) + u64::from(len) <= u64::from(size)
    });
    let Some(len) = len else {
        return Err(format!(
            "File size ({} bytes) at 0x{:X} doesn't fit a {} byte chip",
            data.len(),
            options.start,
            size
        )
        .into());
    };

    let mut progress = IndicatifProgress::new();

    if options.erase {
        flash.erase_with_progress(options.start, len, &mut progress)?;
    } else {
        log::info!("Skipping erase, the target range must already be blank");
    }

    let written = flash.write_with_progress(options.start, &data, &mut progress)?;
    println!("Wrote {} bytes at 0x{:08X}", written, options.start);

    if options.verify {
        flash.verify_with_progress(options.start, &data, &mut progress)?;
        println!("Verification passed");
    }

    Ok(())
}
