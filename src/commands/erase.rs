//! Erase command implementation

use norprog_core::flash::SpiNorFlash;
use norprog_core::programmer::SpiBus;

use super::progress::IndicatifProgress;
use super::{print_found, resolve_range};

/// Run the erase command
///
/// Without a range the whole chip is erased in one bulk erase. A partial
/// range is widened to the sectors it touches.
pub fn run_erase<B: SpiBus + ?Sized>(
    flash: &mut SpiNorFlash<'_, '_, B>,
    start: Option<u32>,
    length: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    print_found(flash);

    let (start, length) = resolve_range(start, length, flash.size())?;
    let sector_size = flash.chip().sector_size;
    if start % sector_size != 0 || length % sector_size != 0 {
        log::warn!(
            "Range 0x{:X}+0x{:X} is not sector aligned, erasing the whole {} byte sectors around it",
            start,
            length,
            sector_size
        );
    }

    flash.erase_with_progress(start, length, &mut IndicatifProgress::new())?;
    println!("Erase complete");

    Ok(())
}
