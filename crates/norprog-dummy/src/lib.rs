//! norprog-dummy - In-memory SPI NOR flash emulator
//!
//! This crate provides a byte-level emulation of a serial NOR flash chip
//! behind the [`SpiBus`] trait. It decodes the same command stream a real
//! chip sees, including the write enable latch, block protection, busy
//! periods and 3/4-byte addressing, so the driver can be exercised without
//! hardware. Time is virtual: it only advances through
//! [`SpiBus::delay_us`], which keeps timeout tests instant.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use norprog_core::chip::{ChipDescriptor, PAGE_SIZE};
use norprog_core::error::{Error, Result};
use norprog_core::programmer::SpiBus;
use norprog_core::spi::{opcodes, IoMode};

/// Status bits a status register write can change
const SR_WRITABLE: u8 = opcodes::SR_BP0 | opcodes::SR_BP1 | opcodes::SR_BP2 | opcodes::SR_SRWD;
const SR_BP: u8 = opcodes::SR_BP0 | opcodes::SR_BP1 | opcodes::SR_BP2;

/// Configuration for the dummy flash
#[derive(Debug, Clone)]
pub struct DummyConfig {
    /// JEDEC manufacturer ID
    pub manufacturer_id: u8,
    /// RDID bytes 1..=4
    pub jedec_id: u32,
    /// Flash size in bytes
    pub size: usize,
    /// Erase sector size in bytes
    pub sector_size: usize,
    /// Chip supports 4-byte addressing
    pub four_byte: bool,
    /// Status register at power-on
    pub initial_status: u8,
    /// Busy time after a page program
    pub program_time_us: u64,
    /// Busy time after a sector erase
    pub erase_time_us: u64,
    /// Busy time after a chip erase
    pub chip_erase_time_us: u64,
    /// Busy time after a status register write
    pub status_write_time_us: u64,
}

impl Default for DummyConfig {
    fn default() -> Self {
        Self {
            manufacturer_id: 0xEF, // Winbond
            jedec_id: 0x4018_0000, // W25Q128BV
            size: 16 * 1024 * 1024,
            sector_size: 64 * 1024,
            four_byte: false,
            initial_status: 0,
            program_time_us: 700,
            erase_time_us: 45_000,
            chip_erase_time_us: 2_000_000,
            status_write_time_us: 10_000,
        }
    }
}

impl DummyConfig {
    /// Emulate a catalog chip
    pub fn from_chip(chip: &ChipDescriptor) -> Self {
        Self {
            manufacturer_id: chip.manufacturer_id,
            jedec_id: chip.jedec_id,
            size: chip.total_size() as usize,
            sector_size: chip.sector_size as usize,
            four_byte: chip.four_byte_addr,
            ..Self::default()
        }
    }

    /// Power up with all block protect bits set
    pub fn protected(mut self) -> Self {
        self.initial_status |= SR_BP;
        self
    }
}

/// Fault injection switches
#[derive(Debug, Clone, Default)]
pub struct Faults {
    /// Status always reports a write in progress; every command is ignored
    pub stuck_busy: bool,
    /// Data reads (READ, FAST_READ) fail at the transport
    pub fail_data_reads: bool,
    /// Total page-program payload bytes accepted before the bus starts
    /// truncating transfers
    pub short_write_after: Option<usize>,
    /// Bank register writes are dropped, as on a part without one
    pub ignore_bank_writes: bool,
}

/// One decoded command, recorded when chip select is released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRecord {
    /// Opcode
    pub opcode: u8,
    /// Decoded address for addressed commands
    pub addr: Option<u32>,
    /// Payload bytes written or data bytes read
    pub len: usize,
}

/// Dummy flash programmer
///
/// Emulates a flash chip in memory for testing purposes.
#[cfg(feature = "alloc")]
pub struct DummyFlash {
    config: DummyConfig,
    faults: Faults,
    data: Vec<u8>,
    status: u8,
    four_byte_mode: bool,
    bank: u8,
    ext_addr: u8,
    clock_us: u64,
    busy_until: u64,
    selected: bool,
    tx: Vec<u8>,
    read_len: usize,
    programmed: usize,
    log: Vec<CommandRecord>,
}

#[cfg(feature = "alloc")]
impl DummyFlash {
    /// Create a new dummy flash with the given configuration
    pub fn new(config: DummyConfig) -> Self {
        let data = vec![0xFF; config.size];
        Self {
            status: config.initial_status & SR_WRITABLE,
            config,
            faults: Faults::default(),
            data,
            four_byte_mode: false,
            bank: 0,
            ext_addr: 0,
            clock_us: 0,
            busy_until: 0,
            selected: false,
            tx: Vec::new(),
            read_len: 0,
            programmed: 0,
            log: Vec::new(),
        }
    }

    /// Create a new dummy flash with default configuration (W25Q128BV)
    pub fn new_default() -> Self {
        Self::new(DummyConfig::default())
    }

    /// Create a dummy flash with pre-filled data
    pub fn with_data(config: DummyConfig, initial_data: &[u8]) -> Self {
        let mut flash = Self::new(config);
        let len = core::cmp::min(initial_data.len(), flash.data.len());
        flash.data[..len].copy_from_slice(&initial_data[..len]);
        flash
    }

    /// Get a reference to the flash data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the flash data
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get the configuration
    pub fn config(&self) -> &DummyConfig {
        &self.config
    }

    /// Fault injection switches
    pub fn faults_mut(&mut self) -> &mut Faults {
        &mut self.faults
    }

    /// Commands decoded so far
    pub fn commands(&self) -> &[CommandRecord] {
        &self.log
    }

    /// Forget the recorded commands
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Recorded commands with the given opcode
    pub fn commands_with(&self, opcode: u8) -> impl Iterator<Item = &CommandRecord> + '_ {
        self.log.iter().filter(move |c| c.opcode == opcode)
    }

    /// Number of recorded commands with the given opcode
    pub fn count(&self, opcode: u8) -> usize {
        self.commands_with(opcode).count()
    }

    /// Current status register value, as RDSR would return it
    pub fn status(&self) -> u8 {
        let mut status = self.status;
        if self.is_busy() {
            status |= opcodes::SR_WIP;
        }
        status
    }

    /// Chip select is currently asserted
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Chip is in 4-byte addressing mode
    pub fn in_four_byte_mode(&self) -> bool {
        self.four_byte_mode
    }

    /// Extended address register (Winbond)
    pub fn extended_address(&self) -> u8 {
        self.ext_addr
    }

    /// Virtual time in microseconds
    pub fn clock_us(&self) -> u64 {
        self.clock_us
    }

    fn is_busy(&self) -> bool {
        self.faults.stuck_busy || self.clock_us < self.busy_until
    }

    fn write_enabled(&self) -> bool {
        self.status & opcodes::SR_WEL != 0
    }

    fn is_protected(&self) -> bool {
        self.status & SR_BP != 0
    }

    fn start_busy(&mut self, duration_us: u64) {
        self.busy_until = self.clock_us + duration_us;
    }

    fn addr_len(&self) -> usize {
        if self.four_byte_mode {
            4
        } else {
            3
        }
    }

    fn is_addressed(opcode: u8) -> bool {
        matches!(
            opcode,
            opcodes::READ | opcodes::FAST_READ | opcodes::PP | opcodes::SE
        )
    }

    /// Address following the opcode, if all of its bytes have arrived
    fn decode_address(&self, tx: &[u8]) -> Option<u32> {
        let n = self.addr_len();
        let bytes = tx.get(1..1 + n)?;
        let addr = bytes.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32);
        let addr = if n == 3 {
            (self.ext_addr as u32) << 24 | addr
        } else {
            addr
        };
        Some(addr % self.config.size as u32)
    }

    fn header_len(&self, opcode: u8) -> usize {
        match opcode {
            opcodes::FAST_READ => 2 + self.addr_len(),
            op if Self::is_addressed(op) => 1 + self.addr_len(),
            _ => 1,
        }
    }

    fn handle_read(&mut self, buf: &mut [u8]) -> Result<()> {
        if self.faults.fail_data_reads {
            log::debug!("dummy: injected read failure");
            return Err(Error::Transport);
        }
        let Some(addr) = self.decode_address(&self.tx) else {
            return Err(Error::Transport);
        };

        let size = self.data.len();
        let start = addr as usize + self.read_len;
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = self.data[(start + i) % size];
        }
        self.read_len += buf.len();
        Ok(())
    }

    fn handle_page_program(&mut self, addr: u32, payload: &[u8]) {
        if self.is_protected() {
            log::warn!("dummy: page program at 0x{:08X} inside protected area", addr);
            return;
        }
        // Bytes past the end of the page wrap to its start
        let page = PAGE_SIZE as usize;
        let size = self.data.len();
        let base = addr as usize & !(page - 1);
        let mut offset = addr as usize % page;
        for &byte in payload {
            self.data[(base + offset) % size] &= byte;
            offset = (offset + 1) % page;
        }
        self.programmed += payload.len();
        self.start_busy(self.config.program_time_us);
    }

    fn handle_sector_erase(&mut self, addr: u32) {
        if self.is_protected() {
            log::warn!("dummy: sector erase at 0x{:08X} inside protected area", addr);
            return;
        }
        let size = self.config.sector_size;
        let start = addr as usize / size * size;
        self.data[start..start + size].fill(0xFF);
        self.start_busy(self.config.erase_time_us);
    }

    fn handle_chip_erase(&mut self) {
        if self.is_protected() {
            log::warn!("dummy: chip erase while protected");
            return;
        }
        self.data.fill(0xFF);
        self.start_busy(self.config.chip_erase_time_us);
    }

    /// Apply a completed write-type command
    fn execute(&mut self, tx: &[u8]) {
        let Some(&opcode) = tx.first() else {
            return;
        };
        let addr = if Self::is_addressed(opcode) {
            self.decode_address(tx)
        } else {
            None
        };
        let header = self.header_len(opcode);
        let len = match opcode {
            opcodes::READ | opcodes::FAST_READ => self.read_len,
            _ => tx.len().saturating_sub(header),
        };
        self.log.push(CommandRecord { opcode, addr, len });

        if self.is_busy() && opcode != opcodes::RDSR {
            log::debug!("dummy: ignoring 0x{:02X} while busy", opcode);
            return;
        }

        let arg = tx.get(1).copied();
        match opcode {
            opcodes::WREN => self.status |= opcodes::SR_WEL,
            opcodes::WRDI => self.status &= !opcodes::SR_WEL,
            opcodes::WRSR => {
                if let (true, Some(value)) = (self.write_enabled(), arg) {
                    self.status = (self.status & !SR_WRITABLE) | (value & SR_WRITABLE);
                    self.status &= !opcodes::SR_WEL;
                    self.start_busy(self.config.status_write_time_us);
                }
            }
            opcodes::PP => {
                if let (true, Some(addr)) = (self.write_enabled(), addr) {
                    self.handle_page_program(addr, &tx[header.min(tx.len())..]);
                    self.status &= !opcodes::SR_WEL;
                }
            }
            opcodes::SE => {
                if let (true, Some(addr)) = (self.write_enabled(), addr) {
                    self.handle_sector_erase(addr);
                    self.status &= !opcodes::SR_WEL;
                }
            }
            opcodes::BE | opcodes::BE_ALT => {
                if self.write_enabled() {
                    self.handle_chip_erase();
                    self.status &= !opcodes::SR_WEL;
                }
            }
            opcodes::EN4B if self.config.four_byte => self.four_byte_mode = true,
            opcodes::EX4B if self.config.four_byte => self.four_byte_mode = false,
            opcodes::BRWR => {
                if let (false, Some(value)) = (self.faults.ignore_bank_writes, arg) {
                    self.bank = value;
                    // Bit 7 of the bank register selects 4-byte addressing
                    self.four_byte_mode = self.config.four_byte && value & 0x80 != 0;
                }
            }
            opcodes::WREAR => {
                if let (true, Some(value)) = (self.write_enabled(), arg) {
                    self.ext_addr = value;
                    self.status &= !opcodes::SR_WEL;
                }
            }
            _ => {}
        }
    }
}

#[cfg(feature = "alloc")]
impl SpiBus for DummyFlash {
    fn assert_select(&mut self) -> Result<()> {
        if self.selected {
            log::error!("dummy: chip select asserted twice");
            return Err(Error::Transport);
        }
        self.selected = true;
        self.tx.clear();
        self.read_len = 0;
        Ok(())
    }

    fn deassert_select(&mut self) -> Result<()> {
        if !self.selected {
            return Ok(());
        }
        self.selected = false;
        let tx = core::mem::take(&mut self.tx);
        self.execute(&tx);
        self.tx = tx;
        self.tx.clear();
        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8], _mode: IoMode) -> Result<usize> {
        if !self.selected {
            log::error!("dummy: write without chip select");
            return Err(Error::Transport);
        }

        let mut accepted = data.len();
        if let Some(limit) = self.faults.short_write_after {
            let in_payload = self.tx.first() == Some(&opcodes::PP)
                && self.tx.len() >= self.header_len(opcodes::PP);
            if in_payload {
                let pending = self.tx.len() - self.header_len(opcodes::PP);
                let room = limit.saturating_sub(self.programmed + pending);
                accepted = accepted.min(room);
            }
        }

        self.tx.extend_from_slice(&data[..accepted]);
        Ok(accepted)
    }

    fn read_bytes(&mut self, buf: &mut [u8], _mode: IoMode) -> Result<()> {
        if !self.selected {
            log::error!("dummy: read without chip select");
            return Err(Error::Transport);
        }

        let Some(&opcode) = self.tx.first() else {
            return Err(Error::Transport);
        };
        if self.is_busy() && opcode != opcodes::RDSR {
            buf.fill(0xFF);
            return Ok(());
        }

        match opcode {
            opcodes::RDSR => buf.fill(self.status()),
            opcodes::RDID => {
                let id = self.config.jedec_id.to_be_bytes();
                let rdid = [self.config.manufacturer_id, id[0], id[1], id[2], id[3]];
                for (i, byte) in buf.iter_mut().enumerate() {
                    *byte = rdid.get(i).copied().unwrap_or(0xFF);
                }
            }
            opcodes::BRRD => buf.fill(self.bank),
            opcodes::RDEAR => buf.fill(self.ext_addr),
            opcodes::READ | opcodes::FAST_READ => return self.handle_read(buf),
            _ => buf.fill(0xFF),
        }
        Ok(())
    }

    fn delay_us(&mut self, us: u32) {
        self.clock_us += us as u64;
    }

    fn monotonic_us(&self) -> u64 {
        self.clock_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use norprog_core::chip::Catalog;
    use norprog_core::flash::{self, FlashContext};
    use norprog_core::protocol;

    const SECTOR: usize = 64 * 1024;
    const MIB: usize = 1024 * 1024;

    fn emulate(catalog: &Catalog, name: &str) -> DummyFlash {
        DummyFlash::new(DummyConfig::from_chip(catalog.find_by_name(name).unwrap()))
    }

    #[test]
    fn test_read_jedec_id() {
        let mut flash = DummyFlash::new_default();
        let id = protocol::read_jedec_id(&mut flash).unwrap();
        assert_eq!(id.manufacturer, 0xEF);
        assert_eq!(id.jedec, 0x4018_0000);
    }

    #[test]
    fn test_program_only_clears_bits() {
        let mut flash = DummyFlash::new_default();
        flash.data_mut()[0x1000] = 0x0F;

        protocol::write_enable(&mut flash).unwrap();
        protocol::program_page(
            &mut flash,
            norprog_core::spi::AddressWidth::ThreeByte,
            0x1000,
            &[0xF3, 0x12],
        )
        .unwrap();
        assert_eq!(flash.data()[0x1000..0x1002], [0x03, 0x12]);
        assert_eq!(flash.status() & opcodes::SR_WEL, 0);
    }

    #[test]
    fn test_program_wraps_within_page() {
        let mut flash = DummyFlash::new_default();
        let last = flash.data().len() - 2;

        protocol::write_enable(&mut flash).unwrap();
        protocol::program_page(
            &mut flash,
            norprog_core::spi::AddressWidth::ThreeByte,
            last as u32,
            &[0x11, 0x22, 0x33, 0x44],
        )
        .unwrap();
        let data = flash.data();
        assert_eq!(data[last..], [0x11, 0x22]);
        // Overflow lands at the start of the same (last) page
        let page_start = data.len() - PAGE_SIZE as usize;
        assert_eq!(data[page_start..page_start + 2], [0x33, 0x44]);
        assert_eq!(data[0], 0xFF);
    }

    #[test]
    fn test_commands_ignored_without_write_enable() {
        let mut flash = DummyFlash::new_default();
        flash.data_mut()[0] = 0x00;
        protocol::sector_erase(&mut flash, norprog_core::spi::AddressWidth::ThreeByte, 0).unwrap();
        assert_eq!(flash.data()[0], 0x00);
    }

    #[test]
    fn test_probe_w25q128() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "W25Q128BV");

        let ctx = flash::probe(&mut bus, &catalog).unwrap();
        assert_eq!(ctx.chip.sector_size, 65536);
        assert_eq!(ctx.chip.sector_count, 256);
        assert!(!ctx.chip.four_byte_addr);
        assert_eq!(ctx.total_size() as usize, 16 * MIB);
    }

    #[test]
    fn test_probe_unknown_chip() {
        let catalog = Catalog::builtin();
        let mut bus = DummyFlash::new(DummyConfig {
            manufacturer_id: 0x42,
            ..DummyConfig::default()
        });
        assert_eq!(
            flash::probe(&mut bus, &catalog).err(),
            Some(Error::NotDetected)
        );
    }

    #[test]
    fn test_full_range_erase_is_one_bulk_erase() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "W25Q128BV");
        bus.data_mut()[..4096].fill(0x00);
        bus.data_mut()[15 * MIB..].fill(0x55);
        let mut ctx = flash::probe(&mut bus, &catalog).unwrap();

        flash::erase(&mut bus, &mut ctx, 0, 16 * MIB as u32).unwrap();

        assert_eq!(bus.count(opcodes::BE), 1);
        assert_eq!(bus.count(opcodes::SE), 0);
        assert!(bus.data().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_write_splits_at_page_boundary() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "W25Q128BV");
        let mut ctx = flash::probe(&mut bus, &catalog).unwrap();
        let data: Vec<u8> = (0..20).collect();

        assert_eq!(flash::write(&mut bus, &mut ctx, 250, &data).unwrap(), 20);

        let programs: Vec<_> = bus
            .commands_with(opcodes::PP)
            .map(|c| (c.addr, c.len))
            .collect();
        assert_eq!(programs, [(Some(250), 6), (Some(256), 14)]);
        assert_eq!(bus.data()[250..270], data[..]);
    }

    #[test]
    fn test_erase_write_read_round_trip() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "W25Q128BV");
        bus.data_mut().fill(0x00);
        let mut ctx = flash::probe(&mut bus, &catalog).unwrap();

        let offset = 0x12345;
        let data: Vec<u8> = (0..3000).map(|i| (i * 7 % 251) as u8).collect();

        flash::erase(&mut bus, &mut ctx, offset, data.len() as u32).unwrap();
        // Whole containing sector is erased, neighbours are not
        assert!(bus.data()[SECTOR..2 * SECTOR].iter().all(|&b| b == 0xFF));
        assert_eq!(bus.data()[SECTOR - 1], 0x00);
        assert_eq!(bus.data()[2 * SECTOR], 0x00);

        flash::write(&mut bus, &mut ctx, offset, &data).unwrap();
        let mut back = vec![0u8; data.len()];
        assert_eq!(
            flash::read(&mut bus, &mut ctx, offset, &mut back).unwrap(),
            data.len()
        );
        assert_eq!(back, data);
        assert!(flash::verify(&mut bus, &mut ctx, offset, &data).is_ok());
    }

    #[test]
    fn test_erase_is_idempotent() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "W25Q128BV");
        let mut ctx = flash::probe(&mut bus, &catalog).unwrap();

        flash::erase(&mut bus, &mut ctx, 3 * SECTOR as u32, SECTOR as u32).unwrap();
        flash::erase(&mut bus, &mut ctx, 3 * SECTOR as u32, SECTOR as u32).unwrap();
        assert!(bus.data().iter().all(|&b| b == 0xFF));
        assert_eq!(bus.count(opcodes::SE), 2);
    }

    #[test]
    fn test_read_never_crosses_a_sector() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "W25Q128BV");
        let mut ctx = flash::probe(&mut bus, &catalog).unwrap();

        let mut buf = vec![0u8; SECTOR + 20];
        flash::read(&mut bus, &mut ctx, SECTOR as u32 - 10, &mut buf).unwrap();

        let reads: Vec<_> = bus
            .commands_with(opcodes::READ)
            .map(|c| (c.addr, c.len))
            .collect();
        assert_eq!(
            reads,
            [
                (Some(SECTOR as u32 - 10), 10),
                (Some(SECTOR as u32), SECTOR),
                (Some(2 * SECTOR as u32), 10),
            ]
        );
    }

    #[test]
    fn test_four_byte_chip_round_trip() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "W25Q256FV");
        let mut ctx = flash::probe(&mut bus, &catalog).unwrap();

        let offset = 16 * MIB as u32 - 100;
        let data = [0x3Cu8; 300];
        flash::erase(&mut bus, &mut ctx, offset, data.len() as u32).unwrap();
        flash::write(&mut bus, &mut ctx, offset, &data).unwrap();

        let mut back = [0u8; 300];
        flash::read(&mut bus, &mut ctx, offset, &mut back).unwrap();
        assert_eq!(back, data);
        assert_eq!(bus.data()[16 * MIB + 199], 0x3C);
        assert_eq!(bus.data()[16 * MIB + 200], 0xFF);

        // Every entry was paired with an exit that also reset the extended address
        assert_eq!(bus.count(opcodes::EN4B), bus.count(opcodes::EX4B));
        assert_eq!(bus.count(opcodes::EX4B), bus.count(opcodes::WREAR));
        assert!(!bus.in_four_byte_mode());
        assert_eq!(bus.extended_address(), 0);
        assert_eq!(ctx.address_mode, flash::AddressMode::ThreeByte);
    }

    #[test]
    fn test_spansion_bank_register_round_trip() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "S25FL256S");
        let mut ctx = flash::probe(&mut bus, &catalog).unwrap();

        let offset = 20 * MIB as u32;
        flash::erase(&mut bus, &mut ctx, offset, 256).unwrap();
        flash::write(&mut bus, &mut ctx, offset, &[1, 2, 3, 4]).unwrap();
        assert_eq!(bus.data()[20 * MIB..20 * MIB + 4], [1, 2, 3, 4]);
        assert!(bus.count(opcodes::BRWR) > 0);
        assert_eq!(bus.count(opcodes::EN4B), 0);
        assert!(!bus.in_four_byte_mode());
    }

    #[test]
    fn test_spansion_mode_mismatch() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "S25FL256S");
        bus.faults_mut().ignore_bank_writes = true;
        let mut ctx = flash::probe(&mut bus, &catalog).unwrap();

        let mut buf = [0u8; 16];
        assert_eq!(
            flash::read(&mut bus, &mut ctx, 0, &mut buf),
            Err(Error::ModeMismatch {
                expected: 0x81,
                found: 0x00
            })
        );
        assert_eq!(bus.count(opcodes::READ), 0);
        assert!(!bus.is_selected());
    }

    #[test]
    fn test_stuck_busy_times_out() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "W25Q128BV");
        let mut ctx = flash::probe(&mut bus, &catalog).unwrap();
        bus.faults_mut().stuck_busy = true;

        assert_eq!(
            flash::write(&mut bus, &mut ctx, 0, &[0; 16]),
            Err(Error::Timeout)
        );
        // 1.5s start budget on the virtual clock
        assert!(bus.clock_us() >= 1_500_000);
        assert!(bus.clock_us() < 1_600_000);
        assert_eq!(bus.count(opcodes::PP), 0);
        assert!(!bus.is_selected());
    }

    #[test]
    fn test_short_write_reports_completed_bytes() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "W25Q256FV");
        let mut ctx = flash::probe(&mut bus, &catalog).unwrap();
        bus.faults_mut().short_write_after = Some(300);

        assert_eq!(
            flash::write(&mut bus, &mut ctx, 0, &[0u8; 1024]),
            Err(Error::ShortWrite { written: 256 })
        );
        assert!(bus.data()[..256].iter().all(|&b| b == 0));
        // 4-byte mode is left and the latch cleared even on failure
        assert!(!bus.in_four_byte_mode());
        assert_eq!(bus.count(opcodes::EX4B), 1);
        assert_eq!(bus.commands().last().map(|c| c.opcode), Some(opcodes::WRDI));
        assert!(!bus.is_selected());
    }

    #[test]
    fn test_read_failure_leaves_four_byte_mode() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "W25Q256FV");
        let mut ctx = flash::probe(&mut bus, &catalog).unwrap();
        bus.faults_mut().fail_data_reads = true;

        let mut buf = [0u8; 64];
        assert_eq!(
            flash::read(&mut bus, &mut ctx, 0x0200_0000 - 64, &mut buf),
            Err(Error::Transport)
        );
        assert_eq!(bus.count(opcodes::EN4B), 1);
        assert_eq!(bus.count(opcodes::EX4B), 1);
        assert!(!bus.in_four_byte_mode());
        assert!(!bus.is_selected());
    }

    #[test]
    fn test_protected_chip_is_unlocked() {
        let catalog = Catalog::builtin();
        let chip = catalog.find_by_name("W25Q128BV").unwrap();
        let mut bus = DummyFlash::new(DummyConfig::from_chip(chip).protected());
        let mut ctx = FlashContext::new(chip);

        flash::erase(&mut bus, &mut ctx, 0, 1).unwrap();
        assert_eq!(bus.status() & SR_BP, 0);
        flash::write(&mut bus, &mut ctx, 0, &[0xA5]).unwrap();
        assert_eq!(bus.data()[0], 0xA5);
    }

    #[test]
    fn test_verify_detects_mismatch() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "W25Q128BV");
        bus.data_mut()[0x2010] = 0x00;
        let mut ctx = flash::probe(&mut bus, &catalog).unwrap();

        assert_eq!(
            flash::verify(&mut bus, &mut ctx, 0x2000, &[0xFF; 64]),
            Err(Error::VerifyMismatch {
                addr: 0x2010,
                expected: 0xFF,
                found: 0x00
            })
        );
    }

    #[test]
    fn test_session_wrapper() {
        let catalog = Catalog::builtin();
        let mut bus = emulate(&catalog, "MX25L25635E");
        let mut dev = flash::SpiNorFlash::probe(&mut bus, &catalog).unwrap();

        dev.erase(0x0180_0000, 4096).unwrap();
        dev.write(0x0180_0000, b"norprog").unwrap();
        let mut back = [0u8; 7];
        dev.read(0x0180_0000, &mut back).unwrap();
        assert_eq!(&back, b"norprog");
        drop(dev);
        // Macronix parts have no extended address register to reset
        assert_eq!(bus.count(opcodes::WREAR), 0);
        assert!(!bus.in_four_byte_mode());
    }
}
