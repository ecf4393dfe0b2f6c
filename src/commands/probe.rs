//! Probe and info commands

use norprog_core::chip::{FourByteMethod, PAGE_SIZE};
use norprog_core::flash::SpiNorFlash;
use norprog_core::programmer::SpiBus;

use super::{format_size, print_found};

/// Run the probe command
pub fn run_probe<B: SpiBus + ?Sized>(flash: &SpiNorFlash<'_, '_, B>) {
    print_found(flash);
}

/// Print everything the catalog knows about the detected chip
pub fn print_chip_info<B: SpiBus + ?Sized>(flash: &SpiNorFlash<'_, '_, B>) {
    let chip = flash.chip();

    println!("Flash Chip Information");
    println!("======================");
    println!();
    println!("Vendor:          {}", chip.vendor);
    println!("Name:            {}", chip.name);
    println!(
        "JEDEC ID:        {:02X} {:08X}",
        chip.manufacturer_id, chip.jedec_id
    );
    println!(
        "Size:            {} bytes ({})",
        chip.total_size(),
        format_size(chip.total_size())
    );
    println!(
        "Sectors:         {} x {}",
        chip.sector_count,
        format_size(chip.sector_size)
    );
    println!("Page size:       {} bytes", PAGE_SIZE);

    let addressing = match chip.four_byte_method() {
        None => "3-byte",
        Some(FourByteMethod::BankRegister) => "4-byte (bank register)",
        Some(FourByteMethod::EnterExit {
            clear_ext_addr: false,
        }) => "4-byte (EN4B/EX4B)",
        Some(FourByteMethod::EnterExit {
            clear_ext_addr: true,
        }) => "4-byte (EN4B/EX4B, extended address register)",
    };
    println!("Addressing:      {}", addressing);
    println!(
        "Voltage range:   {:.2}V - {:.2}V",
        chip.vcc_min(),
        chip.vcc_max()
    );
    if chip.needs_low_voltage_adapter() {
        println!();
        println!("Note: this chip needs a 1.8V adapter on a 3.3V programmer.");
    }
}
