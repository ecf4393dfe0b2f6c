//! Read command implementation

use norprog_core::flash::SpiNorFlash;
use norprog_core::programmer::SpiBus;
use std::fs;
use std::path::Path;

use super::progress::IndicatifProgress;
use super::{print_found, resolve_range};

/// Run the read command
pub fn run_read<B: SpiBus + ?Sized>(
    flash: &mut SpiNorFlash<'_, '_, B>,
    output: &Path,
    start: Option<u32>,
    length: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    print_found(flash);

    let (start, length) = resolve_range(start, length, flash.size())?;
    let mut data = vec![0u8; length as usize];
    flash.read_with_progress(start, &mut data, &mut IndicatifProgress::new())?;

    fs::write(output, &data)?;
    println!("Wrote {} bytes to {:?}", data.len(), output);

    Ok(())
}
