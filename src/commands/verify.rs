//! Verify command implementation

use norprog_core::flash::SpiNorFlash;
use norprog_core::programmer::SpiBus;
use std::fs;
use std::path::Path;

use super::print_found;
use super::progress::IndicatifProgress;

/// Run the verify command
pub fn run_verify<B: SpiBus + ?Sized>(
    flash: &mut SpiNorFlash<'_, '_, B>,
    input: &Path,
    start: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    print_found(flash);

    let expected = fs::read(input)?;
    if expected.is_empty() {
        return Err(format!("{:?} is empty", input).into());
    }

    flash.verify_with_progress(start, &expected, &mut IndicatifProgress::new())?;
    println!("Verification passed ({} bytes)", expected.len());

    Ok(())
}
