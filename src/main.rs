//! norprog - SPI NOR flash programmer
//!
//! Identifies a serial NOR flash chip by its JEDEC id and reads, writes,
//! erases or verifies it through one of the compiled-in programmers.
//!
//! # Architecture
//!
//! Programmers hand out a boxed [`SpiBus`]. The chip on it is identified
//! against the built-in catalog, optionally extended with `--chip-db` RON
//! files, and every command then works through a [`SpiNorFlash`] session.
//!
//! [`SpiBus`]: norprog_core::programmer::SpiBus
//! [`SpiNorFlash`]: norprog_core::flash::SpiNorFlash

mod cli;
mod commands;
mod programmers;

use clap::Parser;
use cli::{Cli, Commands};
use commands::WriteOptions;
use norprog_core::chip::Catalog;
use norprog_core::flash::SpiNorFlash;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    let catalog = match load_catalog(cli.chip_db.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to load chip database: {}", e);
            std::process::exit(1);
        }
    };

    log::debug!("Catalog holds {} chip definitions", catalog.len());

    match cli.command {
        Commands::ListProgrammers => {
            commands::list_programmers();
            Ok(())
        }
        Commands::ListChips { vendor, long } => {
            commands::list_chips(&catalog, vendor.as_deref(), long);
            Ok(())
        }
        Commands::Probe { programmer } => {
            let mut bus = programmers::open_programmer(&programmer, &catalog)?;
            let flash = SpiNorFlash::probe(bus.as_mut(), &catalog)?;
            commands::run_probe(&flash);
            Ok(())
        }
        Commands::Info { programmer } => {
            let mut bus = programmers::open_programmer(&programmer, &catalog)?;
            let flash = SpiNorFlash::probe(bus.as_mut(), &catalog)?;
            commands::print_chip_info(&flash);
            Ok(())
        }
        Commands::Read {
            programmer,
            output,
            range,
        } => {
            let mut bus = programmers::open_programmer(&programmer, &catalog)?;
            let mut flash = SpiNorFlash::probe(bus.as_mut(), &catalog)?;
            commands::run_read(&mut flash, &output, range.start, range.length)
        }
        Commands::Write {
            programmer,
            input,
            start,
            no_erase,
            no_verify,
        } => {
            let mut bus = programmers::open_programmer(&programmer, &catalog)?;
            let mut flash = SpiNorFlash::probe(bus.as_mut(), &catalog)?;
            let options = WriteOptions {
                start,
                erase: !no_erase,
                verify: !no_verify,
            };
            commands::run_write(&mut flash, &input, options)
        }
        Commands::Erase { programmer, range } => {
            let mut bus = programmers::open_programmer(&programmer, &catalog)?;
            let mut flash = SpiNorFlash::probe(bus.as_mut(), &catalog)?;
            commands::run_erase(&mut flash, range.start, range.length)
        }
        Commands::Verify {
            programmer,
            input,
            start,
        } => {
            let mut bus = programmers::open_programmer(&programmer, &catalog)?;
            let mut flash = SpiNorFlash::probe(bus.as_mut(), &catalog)?;
            commands::run_verify(&mut flash, &input, start)
        }
    }
}

/// Build the catalog: built-in rows, then any from `--chip-db`
fn load_catalog(path: Option<&Path>) -> Result<Catalog, Box<dyn std::error::Error>> {
    let mut catalog = Catalog::builtin();

    let Some(path) = path else {
        return Ok(catalog);
    };

    let count = if path.is_dir() {
        catalog.load_dir(path)?
    } else if path.is_file() {
        catalog.load_file(path)?
    } else {
        return Err(format!("Chip database path not found: {}", path.display()).into());
    };
    log::info!("Loaded {} chip definitions from {}", count, path.display());

    Ok(catalog)
}
