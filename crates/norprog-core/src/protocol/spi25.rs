//! SPI25 command sequences
//!
//! Every function here opens its own chip-select window through
//! [`Selected`], so chip select is released on every return path.
//!
//! Ready polling treats the write enable latch as busy. A caller that has
//! just issued WREN must therefore send the command that consumes the latch
//! before the next [`wait_ready`]; the bulk operations order their steps
//! accordingly.

use core::time::Duration;

use crate::chip::{FourByteMethod, RawId};
use crate::error::{Error, Result};
use crate::flash::{AddressMode, FlashContext};
use crate::programmer::{Selected, SpiBus};
use crate::spi::{opcodes, AddressWidth, IoMode};

use super::StatusRegister;

/// Delay between two status polls
pub const POLL_INTERVAL_US: u32 = 500;

/// Ready wait before an addressing-mode switch or a read
pub const MODE_SWITCH_TIMEOUT: Duration = Duration::from_millis(1000);
/// Ready wait before a write starts
pub const WRITE_START_TIMEOUT: Duration = Duration::from_millis(1500);
/// Ready wait before each page program and before a chip erase
pub const PROGRAM_TIMEOUT: Duration = Duration::from_millis(2000);
/// Ready wait around a sector erase and after a chip erase
pub const ERASE_TIMEOUT: Duration = Duration::from_secs(475);
/// Ready wait after a status register write
pub const STATUS_WRITE_TIMEOUT: Duration = Duration::from_millis(1000);

/// Shift out all of `data`, failing if the transport takes fewer bytes
fn write_all<B: SpiBus + ?Sized>(bus: &mut B, data: &[u8]) -> Result<()> {
    if bus.write_bytes(data, IoMode::Single)? != data.len() {
        return Err(Error::Transport);
    }
    Ok(())
}

/// Opcode followed by a big-endian address
fn write_header<B: SpiBus + ?Sized>(
    bus: &mut B,
    opcode: u8,
    width: AddressWidth,
    addr: u32,
) -> Result<()> {
    let mut buf = [0u8; 4];
    bus.write_byte(opcode)?;
    write_all(bus, width.encode(addr, &mut buf))
}

/// Read the identification bytes
pub fn read_jedec_id<B: SpiBus + ?Sized>(bus: &mut B) -> Result<RawId> {
    let mut buf = [0u8; opcodes::RDID_LEN];
    let mut cs = Selected::new(bus)?;
    cs.write_byte(opcodes::RDID)?;
    cs.read_bytes(&mut buf, IoMode::Single)?;
    cs.release()?;
    Ok(RawId::from_bytes(buf))
}

/// Send a command that has no arguments
pub fn send_command<B: SpiBus + ?Sized>(bus: &mut B, opcode: u8) -> Result<()> {
    let mut cs = Selected::new(bus)?;
    cs.write_byte(opcode)?;
    cs.release()
}

/// Send the Write Enable command
pub fn write_enable<B: SpiBus + ?Sized>(bus: &mut B) -> Result<()> {
    send_command(bus, opcodes::WREN)
}

/// Send the Write Disable command
pub fn write_disable<B: SpiBus + ?Sized>(bus: &mut B) -> Result<()> {
    send_command(bus, opcodes::WRDI)
}

/// Read a one-byte register
pub fn read_register<B: SpiBus + ?Sized>(bus: &mut B, opcode: u8) -> Result<u8> {
    let mut buf = [0u8; 1];
    let mut cs = Selected::new(bus)?;
    cs.write_byte(opcode)?;
    cs.read_bytes(&mut buf, IoMode::Single)?;
    cs.release()?;
    Ok(buf[0])
}

/// Write a one-byte register
///
/// Does not send WREN; registers that need it are preceded by
/// [`write_enable`] at the call site.
pub fn write_register<B: SpiBus + ?Sized>(bus: &mut B, opcode: u8, value: u8) -> Result<()> {
    let mut cs = Selected::new(bus)?;
    cs.write_byte(opcode)?;
    write_all(&mut *cs, &[value])?;
    cs.release()
}

/// Read the status register
pub fn read_status<B: SpiBus + ?Sized>(bus: &mut B) -> Result<StatusRegister> {
    read_register(bus, opcodes::RDSR).map(StatusRegister::from_bits_retain)
}

/// Write the status register
pub fn write_status<B: SpiBus + ?Sized>(bus: &mut B, value: u8) -> Result<()> {
    write_register(bus, opcodes::WRSR, value)
}

/// Poll the status register until the chip is ready
///
/// Ready means none of WIP, WEL or EPE is set. Polls every
/// [`POLL_INTERVAL_US`] until `timeout` has elapsed on the bus clock.
pub fn wait_ready<B: SpiBus + ?Sized>(bus: &mut B, timeout: Duration) -> Result<()> {
    let budget = u64::try_from(timeout.as_micros()).unwrap_or(u64::MAX);
    let deadline = bus.monotonic_us().saturating_add(budget);

    loop {
        let status = read_status(bus)?;
        if !status.is_busy() {
            return Ok(());
        }
        if bus.monotonic_us() >= deadline {
            log::error!(
                "Flash still busy after {:?} (status 0x{:02X})",
                timeout,
                status.bits()
            );
            return Err(Error::Timeout);
        }
        bus.delay_us(POLL_INTERVAL_US);
    }
}

/// Clear all block protect bits if any is set
///
/// A write enable latch that was set on entry is set again on return, so
/// this can sit between WREN and the command that needs it.
pub fn unprotect<B: SpiBus + ?Sized>(bus: &mut B) -> Result<()> {
    let status = read_status(bus)?;
    if !status.is_protected() {
        return Ok(());
    }

    log::debug!(
        "Clearing block protection (status 0x{:02X})",
        status.bits()
    );
    write_enable(bus)?;
    write_status(bus, 0)?;
    wait_ready(bus, STATUS_WRITE_TIMEOUT)?;

    if status.is_write_enabled() {
        write_enable(bus)?;
    }
    Ok(())
}

/// Switch between 3-byte and 4-byte addressing
///
/// Does nothing for chips that only use 3-byte addresses. On success the
/// new mode is recorded in `ctx`.
pub fn set_addressing_mode<B: SpiBus + ?Sized>(
    bus: &mut B,
    ctx: &mut FlashContext<'_>,
    four_byte: bool,
) -> Result<()> {
    let Some(method) = ctx.chip.four_byte_method() else {
        return Ok(());
    };

    wait_ready(bus, MODE_SWITCH_TIMEOUT)?;

    match method {
        FourByteMethod::BankRegister => {
            let value = if four_byte { opcodes::BANK_4BYTE } else { 0 };
            write_register(bus, opcodes::BRWR, value)?;
            let found = read_register(bus, opcodes::BRRD)?;
            if found != value {
                log::error!(
                    "4-byte mode {} failed: bank register 0x{:02X}, expected 0x{:02X}",
                    if four_byte { "enter" } else { "exit" },
                    found,
                    value
                );
                return Err(Error::ModeMismatch {
                    expected: value,
                    found,
                });
            }
        }
        FourByteMethod::EnterExit { clear_ext_addr } => {
            send_command(
                bus,
                if four_byte {
                    opcodes::EN4B
                } else {
                    opcodes::EX4B
                },
            )?;
            if !four_byte && clear_ext_addr {
                write_enable(bus)?;
                write_register(bus, opcodes::WREAR, 0)?;
            }
        }
    }

    ctx.address_mode = if four_byte {
        AddressMode::FourByte
    } else {
        AddressMode::ThreeByte
    };
    log::trace!("Address mode now {:?}", ctx.address_mode);
    Ok(())
}

/// Read `buf.len()` bytes starting at `addr` in one transaction
pub fn read_data<B: SpiBus + ?Sized>(
    bus: &mut B,
    width: AddressWidth,
    addr: u32,
    buf: &mut [u8],
) -> Result<()> {
    let mut cs = Selected::new(bus)?;
    write_header(&mut *cs, opcodes::READ, width, addr)?;
    cs.read_bytes(buf, IoMode::Single)?;
    cs.release()
}

/// Issue a page program
///
/// Returns the number of payload bytes the transport accepted. `data` must
/// not cross a page boundary.
pub fn program_page<B: SpiBus + ?Sized>(
    bus: &mut B,
    width: AddressWidth,
    addr: u32,
    data: &[u8],
) -> Result<usize> {
    let mut cs = Selected::new(bus)?;
    write_header(&mut *cs, opcodes::PP, width, addr)?;
    let accepted = cs.write_bytes(data, IoMode::Single)?;
    cs.release()?;
    Ok(accepted)
}

/// Issue a sector erase for the sector containing `addr`
pub fn sector_erase<B: SpiBus + ?Sized>(
    bus: &mut B,
    width: AddressWidth,
    addr: u32,
) -> Result<()> {
    let mut cs = Selected::new(bus)?;
    write_header(&mut *cs, opcodes::SE, width, addr)?;
    cs.release()
}

/// Issue a bulk (whole chip) erase
pub fn bulk_erase<B: SpiBus + ?Sized>(bus: &mut B) -> Result<()> {
    send_command(bus, opcodes::BE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip::Catalog;
    use crate::programmer::mock::MockBus;
    use std::collections::VecDeque;
    use std::vec;

    #[test]
    fn test_read_jedec_id() {
        let mut bus = MockBus::new();
        bus.rdid = [0xEF, 0x40, 0x18, 0x00, 0x00];
        let id = read_jedec_id(&mut bus).unwrap();
        assert_eq!(id.manufacturer, 0xEF);
        assert_eq!(id.jedec, 0x4018_0000);
        assert_eq!(bus.transactions, vec![vec![opcodes::RDID]]);
    }

    #[test]
    fn test_wait_ready_polls_until_idle() {
        let mut bus = MockBus::new();
        bus.status = VecDeque::from([0x03, 0x01, 0x01, 0x00]);
        wait_ready(&mut bus, PROGRAM_TIMEOUT).unwrap();
        assert_eq!(bus.opcodes(), [opcodes::RDSR; 4]);
        assert_eq!(bus.clock_us, 3 * POLL_INTERVAL_US as u64);
    }

    #[test]
    fn test_wait_ready_times_out_on_deadline() {
        let mut bus = MockBus::new();
        bus.status = VecDeque::from([opcodes::SR_WIP]);
        assert_eq!(
            wait_ready(&mut bus, Duration::from_millis(10)),
            Err(Error::Timeout)
        );
        // 10ms of 500us polls, plus the final check
        assert_eq!(bus.clock_us, 10_000);
        assert_eq!(bus.transactions.len(), 21);
        assert!(!bus.selected);
    }

    #[test]
    fn test_wait_ready_treats_wel_and_epe_as_busy() {
        for status in [opcodes::SR_WEL, opcodes::SR_EPE] {
            let mut bus = MockBus::new();
            bus.status = VecDeque::from([status]);
            assert_eq!(
                wait_ready(&mut bus, Duration::from_millis(1)),
                Err(Error::Timeout)
            );
        }
    }

    #[test]
    fn test_wait_ready_propagates_transport_error() {
        let mut bus = MockBus::new();
        bus.fail_reads = true;
        assert_eq!(wait_ready(&mut bus, ERASE_TIMEOUT), Err(Error::Transport));
        assert_eq!(bus.clock_us, 0);
        assert!(!bus.selected);
    }

    #[test]
    fn test_unprotect_noop_when_unprotected() {
        let mut bus = MockBus::new();
        bus.status = VecDeque::from([0x40]);
        unprotect(&mut bus).unwrap();
        assert_eq!(bus.opcodes(), [opcodes::RDSR]);
    }

    #[test]
    fn test_unprotect_clears_bits_and_keeps_write_enable() {
        let mut bus = MockBus::new();
        // WEL + BP0..2 on entry, idle after the status write
        bus.status = VecDeque::from([0x1E, 0x00]);
        unprotect(&mut bus).unwrap();
        assert_eq!(
            bus.transactions,
            vec![
                vec![opcodes::RDSR],
                vec![opcodes::WREN],
                vec![opcodes::WRSR, 0x00],
                vec![opcodes::RDSR],
                vec![opcodes::WREN],
            ]
        );
    }

    #[test]
    fn test_unprotect_without_pending_write_enable() {
        let mut bus = MockBus::new();
        bus.status = VecDeque::from([0x0C, 0x00]);
        unprotect(&mut bus).unwrap();
        assert_eq!(
            bus.opcodes(),
            [opcodes::RDSR, opcodes::WREN, opcodes::WRSR, opcodes::RDSR]
        );
    }

    #[test]
    fn test_enter_exit_opcodes() {
        let catalog = Catalog::builtin();
        let chip = catalog.find_by_name("MX25L25635E").unwrap();
        let mut ctx = FlashContext::new(chip);
        let mut bus = MockBus::new();

        set_addressing_mode(&mut bus, &mut ctx, true).unwrap();
        assert_eq!(ctx.address_mode, AddressMode::FourByte);
        set_addressing_mode(&mut bus, &mut ctx, false).unwrap();
        assert_eq!(ctx.address_mode, AddressMode::ThreeByte);

        assert_eq!(
            bus.opcodes(),
            [opcodes::RDSR, opcodes::EN4B, opcodes::RDSR, opcodes::EX4B]
        );
    }

    #[test]
    fn test_winbond_exit_clears_extended_address() {
        let catalog = Catalog::builtin();
        let chip = catalog.find_by_name("W25Q256FV").unwrap();
        let mut ctx = FlashContext::new(chip);
        let mut bus = MockBus::new();

        set_addressing_mode(&mut bus, &mut ctx, false).unwrap();
        assert_eq!(
            bus.transactions,
            vec![
                vec![opcodes::RDSR],
                vec![opcodes::EX4B],
                vec![opcodes::WREN],
                vec![opcodes::WREAR, 0x00],
            ]
        );
    }

    #[test]
    fn test_bank_register_switch() {
        let catalog = Catalog::builtin();
        let chip = catalog.find_by_name("S25FL256S").unwrap();
        let mut ctx = FlashContext::new(chip);
        let mut bus = MockBus::new();

        set_addressing_mode(&mut bus, &mut ctx, true).unwrap();
        assert_eq!(
            bus.transactions,
            vec![
                vec![opcodes::RDSR],
                vec![opcodes::BRWR, opcodes::BANK_4BYTE],
                vec![opcodes::BRRD],
            ]
        );
        assert_eq!(ctx.address_mode, AddressMode::FourByte);
    }

    #[test]
    fn test_bank_register_mismatch() {
        let catalog = Catalog::builtin();
        let chip = catalog.find_by_name("S25FL256S").unwrap();
        let mut ctx = FlashContext::new(chip);
        let mut bus = MockBus::new();
        bus.ignore_bank_writes = true;

        assert_eq!(
            set_addressing_mode(&mut bus, &mut ctx, true),
            Err(Error::ModeMismatch {
                expected: 0x81,
                found: 0x00
            })
        );
        assert_eq!(ctx.address_mode, AddressMode::ThreeByte);
        assert!(!bus.selected);
    }

    #[test]
    fn test_three_byte_chip_needs_no_switch() {
        let catalog = Catalog::builtin();
        let chip = catalog.find_by_name("W25Q128BV").unwrap();
        let mut ctx = FlashContext::new(chip);
        let mut bus = MockBus::new();

        set_addressing_mode(&mut bus, &mut ctx, true).unwrap();
        assert!(bus.transactions.is_empty());
    }

    #[test]
    fn test_addressed_commands() {
        let mut bus = MockBus::new();
        sector_erase(&mut bus, AddressWidth::FourByte, 0x0123_0000).unwrap();
        let n = program_page(&mut bus, AddressWidth::ThreeByte, 0x00_10_FA, &[1, 2, 3]).unwrap();
        assert_eq!(n, 3);
        assert_eq!(
            bus.transactions,
            vec![
                vec![opcodes::SE, 0x01, 0x23, 0x00, 0x00],
                vec![opcodes::PP, 0x00, 0x10, 0xFA, 1, 2, 3],
            ]
        );
    }

    #[test]
    fn test_program_page_reports_short_transfer() {
        let mut bus = MockBus::new();
        bus.accept_limit = Some(3);
        assert_eq!(
            program_page(&mut bus, AddressWidth::ThreeByte, 0, &[0; 16]),
            Ok(3)
        );
        assert!(!bus.selected);
    }

    #[test]
    fn test_short_header_is_a_transport_error() {
        let mut bus = MockBus::new();
        bus.accept_limit = Some(2);
        assert_eq!(
            sector_erase(&mut bus, AddressWidth::ThreeByte, 0),
            Err(Error::Transport)
        );
        assert!(!bus.selected);
    }
}
