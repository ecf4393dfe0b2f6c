//! List commands implementation

use norprog_core::chip::Catalog;
use norprog_core::flash;

use super::format_size;
use crate::programmers;

/// List all supported programmers
pub fn list_programmers() {
    let programmers = programmers::available_programmers();
    if programmers.is_empty() {
        println!("No programmers compiled in.");
        return;
    }

    println!("Supported programmers:");
    println!();
    for p in &programmers {
        println!("  {:12} - {}", p.name, p.description);
        if !p.aliases.is_empty() {
            println!("  {:12}   aliases: {}", "", p.aliases.join(", "));
        }
    }
}

/// List supported chips, optionally filtered by vendor
///
/// The numbering follows catalog order, which is also the order chips are
/// tried in during identification.
pub fn list_chips(catalog: &Catalog, vendor_filter: Option<&str>, long: bool) {
    let matches_vendor = |vendor: &str| {
        vendor_filter.map_or(true, |v| {
            vendor.to_lowercase().contains(&v.to_lowercase())
        })
    };

    if !long {
        let names = flash::support_list(catalog)
            .zip(catalog.iter())
            .filter(|(_, chip)| matches_vendor(chip.vendor))
            .map(|(name, _)| name);
        for (i, name) in names.enumerate() {
            println!("{:03}. {}", i + 1, name);
        }
        return;
    }

    println!(
        "{:<12} {:<20} {:>10} {:>14} {:>10} {:>4}",
        "Vendor", "Name", "Size", "JEDEC ID", "Sector", "Addr"
    );
    println!("{}", "-".repeat(75));

    for chip in catalog.iter().filter(|chip| matches_vendor(chip.vendor)) {
        println!(
            "{:<12} {:<20} {:>10} {:>14} {:>10} {:>4}",
            chip.vendor,
            chip.name,
            format_size(chip.total_size()),
            format!("{:02X} {:08X}", chip.manufacturer_id, chip.jedec_id),
            format_size(chip.sector_size),
            if chip.four_byte_addr { "4B" } else { "3B" },
        );
    }
}
