//! Programmer registration and dispatch
//!
//! This module provides a centralized registry for all programmers, with
//! support for feature-gated inclusion and dynamic help text generation.

use norprog_core::chip::Catalog;
use norprog_core::programmer::SpiBus;
use thiserror::Error;

/// Information about a programmer
pub struct ProgrammerInfo {
    /// Primary name (used for matching)
    pub name: &'static str,
    /// Alternative names/aliases
    pub aliases: &'static [&'static str],
    /// Short description
    pub description: &'static str,
}

/// Errors raised while opening a programmer
#[derive(Debug, Error)]
pub enum ProgrammerError {
    /// The name matches no compiled-in programmer
    #[error("Unknown programmer: {0}\n\n{help}Use 'norprog list-programmers' for more details", help = programmer_help())]
    Unknown(String),
    /// An option value could not be used
    #[error("Invalid {programmer} parameter {key}={value}: {reason}")]
    InvalidOption {
        programmer: &'static str,
        key: String,
        value: String,
        reason: String,
    },
    /// The transport failed to open
    #[error("Failed to open {programmer}: {message}")]
    Open {
        programmer: &'static str,
        message: String,
    },
}

/// Get information about all available programmers (enabled at compile time)
#[allow(unused_mut, clippy::vec_init_then_push)]
pub fn available_programmers() -> Vec<ProgrammerInfo> {
    let mut programmers = Vec::new();

    #[cfg(feature = "dummy")]
    programmers.push(ProgrammerInfo {
        name: "dummy",
        aliases: &["emulator"],
        description: "In-memory flash emulator (chip=<name>,protect=1)",
    });

    #[cfg(feature = "linux-spi")]
    programmers.push(ProgrammerInfo {
        name: "linux_spi",
        aliases: &["linux-spi", "spidev"],
        description: "Linux spidev interface (dev=/dev/spidevX.Y,spispeed=<kHz>,mode=<0-3>)",
    });

    programmers
}

/// Generate help text listing all available programmers
pub fn programmer_help() -> String {
    let programmers = available_programmers();

    if programmers.is_empty() {
        return "No programmers available (recompile with programmer features enabled)\n"
            .to_string();
    }

    let mut help = String::from("Available programmers:\n");
    for p in &programmers {
        help.push_str(&format!("  {:12} - {}\n", p.name, p.description));
    }
    help
}

/// Resolve a programmer name or alias to its primary name
pub fn find_programmer(name: &str) -> Option<&'static str> {
    available_programmers()
        .into_iter()
        .find(|p| p.name == name || p.aliases.contains(&name))
        .map(|p| p.name)
}

/// Parse a programmer string into name and options
///
/// Format: "name" or "name:option1=value1,option2=value2"
pub fn parse_programmer_string(s: &str) -> (&str, Vec<(&str, &str)>) {
    if let Some((name, opts)) = s.split_once(':') {
        let options: Vec<_> = opts
            .split(',')
            .filter_map(|opt| opt.split_once('='))
            .collect();
        (name, options)
    } else {
        (s, Vec::new())
    }
}

/// Open the programmer described by `spec` as a boxed bus
///
/// `catalog` is consulted by the emulator to pick the chip it pretends to be.
#[allow(unused_variables)]
pub fn open_programmer(
    spec: &str,
    catalog: &Catalog,
) -> Result<Box<dyn SpiBus + Send>, ProgrammerError> {
    let (name, options) = parse_programmer_string(spec);

    match find_programmer(name) {
        #[cfg(feature = "dummy")]
        Some("dummy") => open_dummy(&options, catalog),

        #[cfg(feature = "linux-spi")]
        Some("linux_spi") => {
            log::info!("Opening Linux SPI programmer...");
            norprog_linux_spi::open_linux_spi(&options).map_err(|e| ProgrammerError::Open {
                programmer: "linux_spi",
                message: format!(
                    "{}\n\
                     Make sure the device exists and you have read/write permissions.\n\
                     You may need to: sudo usermod -aG spi $USER",
                    e
                ),
            })
        }

        _ => Err(ProgrammerError::Unknown(name.to_string())),
    }
}

#[cfg(feature = "dummy")]
fn open_dummy(
    options: &[(&str, &str)],
    catalog: &Catalog,
) -> Result<Box<dyn SpiBus + Send>, ProgrammerError> {
    use norprog_dummy::{DummyConfig, DummyFlash};

    let mut config = DummyConfig::default();
    for &(key, value) in options {
        match key {
            "chip" => {
                let chip = catalog.find_by_name(value).ok_or_else(|| {
                    ProgrammerError::InvalidOption {
                        programmer: "dummy",
                        key: key.to_string(),
                        value: value.to_string(),
                        reason: "no such chip (see list-chips)".to_string(),
                    }
                })?;
                config = DummyConfig {
                    initial_status: config.initial_status,
                    ..DummyConfig::from_chip(chip)
                };
            }
            "protect" => match value {
                "1" | "yes" | "on" => config = config.protected(),
                "0" | "no" | "off" => {}
                _ => {
                    return Err(ProgrammerError::InvalidOption {
                        programmer: "dummy",
                        key: key.to_string(),
                        value: value.to_string(),
                        reason: "expected 0 or 1".to_string(),
                    })
                }
            },
            _ => log::warn!("Ignoring unknown dummy option: {}", key),
        }
    }

    log::info!(
        "Using dummy flash emulator ({} bytes, id {:02X} {:08X})",
        config.size,
        config.manufacturer_id,
        config.jedec_id
    );
    Ok(Box::new(DummyFlash::new(config)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_programmer_string() {
        assert_eq!(parse_programmer_string("dummy"), ("dummy", vec![]));
        assert_eq!(
            parse_programmer_string("linux_spi:dev=/dev/spidev0.0,spispeed=4000"),
            ("linux_spi", vec![("dev", "/dev/spidev0.0"), ("spispeed", "4000")])
        );
        assert_eq!(
            parse_programmer_string("dummy:chip=W25Q256FV,bogus"),
            ("dummy", vec![("chip", "W25Q256FV")])
        );
    }

    #[test]
    fn test_unknown_programmer() {
        let catalog = Catalog::builtin();
        let err = open_programmer("nonexistent", &catalog).err().unwrap();
        assert!(matches!(err, ProgrammerError::Unknown(ref n) if n == "nonexistent"));
        assert!(err.to_string().contains("list-programmers"));
    }

    #[cfg(feature = "dummy")]
    #[test]
    fn test_dummy_aliases_resolve() {
        assert_eq!(find_programmer("dummy"), Some("dummy"));
        assert_eq!(find_programmer("emulator"), Some("dummy"));
        assert!(programmer_help().contains("dummy"));
    }

    #[cfg(feature = "dummy")]
    #[test]
    fn test_dummy_emulates_named_chip() {
        let catalog = Catalog::builtin();
        let mut bus = open_programmer("dummy:chip=MX25L25635E", &catalog).unwrap();
        let ctx = norprog_core::flash::probe(&mut bus, &catalog).unwrap();
        assert_eq!(ctx.chip.name, "MX25L25635E");
    }

    #[cfg(feature = "dummy")]
    #[test]
    fn test_dummy_rejects_bad_options() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            open_programmer("dummy:chip=NOPE", &catalog),
            Err(ProgrammerError::InvalidOption { .. })
        ));
        assert!(matches!(
            open_programmer("dummy:protect=maybe", &catalog),
            Err(ProgrammerError::InvalidOption { .. })
        ));
    }
}
