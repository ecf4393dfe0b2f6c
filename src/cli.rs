//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a string as a hex or decimal u32
fn parse_hex_u32(s: &str) -> Result<u32, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
    } else {
        s.parse::<u32>().map_err(|e| format!("Invalid number: {}", e))
    }
}

const PROGRAMMER_HELP: &str =
    "Programmer to use, as name[:key=value,...] (see list-programmers)";

#[derive(Parser)]
#[command(name = "norprog")]
#[command(author, version, about = "SPI NOR flash programmer", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Extra chip definitions: a .ron file or a directory of .ron files
    ///
    /// Rows are appended after the built-in table.
    #[arg(long, global = true)]
    pub chip_db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Address range shared by read and erase
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct RangeArgs {
    /// Start address (hex, e.g., 0x10000)
    #[arg(long, value_parser = parse_hex_u32)]
    pub start: Option<u32>,

    /// Length of the region (hex or decimal), defaults to the rest of the chip
    #[arg(long, value_parser = parse_hex_u32)]
    pub length: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe for flash chip
    Probe {
        #[arg(short, long, help = PROGRAMMER_HELP)]
        programmer: String,
    },

    /// Show chip information
    Info {
        #[arg(short, long, help = PROGRAMMER_HELP)]
        programmer: String,
    },

    /// Read flash contents to file
    Read {
        #[arg(short, long, help = PROGRAMMER_HELP)]
        programmer: String,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Write file to flash
    Write {
        #[arg(short, long, help = PROGRAMMER_HELP)]
        programmer: String,

        /// Input file path
        #[arg(short, long)]
        input: PathBuf,

        /// Address to write the file at (hex or decimal)
        #[arg(long, value_parser = parse_hex_u32, default_value = "0")]
        start: u32,

        /// Don't erase before writing
        ///
        /// Without this, every sector the file touches is erased first,
        /// including the parts of those sectors outside the file.
        #[arg(long)]
        no_erase: bool,

        /// Skip read-back verification
        #[arg(long)]
        no_verify: bool,
    },

    /// Erase flash chip, or the sectors covering a range
    Erase {
        #[arg(short, long, help = PROGRAMMER_HELP)]
        programmer: String,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Verify flash contents against file
    Verify {
        #[arg(short, long, help = PROGRAMMER_HELP)]
        programmer: String,

        /// Input file path to verify against
        #[arg(short, long)]
        input: PathBuf,

        /// Address the file was written at
        #[arg(long, value_parser = parse_hex_u32, default_value = "0")]
        start: u32,
    },

    /// List supported programmers
    ListProgrammers,

    /// List supported chips
    ListChips {
        /// Filter by vendor
        #[arg(long)]
        vendor: Option<String>,

        /// Show a table with ids and geometry instead of names only
        #[arg(short, long)]
        long: bool,
    },
}
