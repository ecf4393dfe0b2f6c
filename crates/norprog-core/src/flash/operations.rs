//! Identification and bulk flash operations
//!
//! Every addressed command on a chip above 16 MiB is bracketed by 4-byte
//! mode entry and exit. Once entry succeeded the exit is always attempted,
//! and the error of the operation itself wins over an exit failure.

use crate::chip::{vendor_name, Catalog, ChipDescriptor, IdMatch};
use crate::error::{Error, Result};
use crate::programmer::SpiBus;
use crate::protocol as spi25;
use crate::spi::AddressWidth;

use super::chunks::{page_chunks, sector_span, BoundaryChunks};
use super::context::FlashContext;
use super::progress::{NoProgress, Operation, Progress};

/// Largest piece read back at once while verifying
const VERIFY_CHUNK: u32 = 4096;

/// Identify the attached chip and return a context for it
///
/// Fails with [`Error::NotDetected`] if no catalog row matches the
/// identification bytes exactly or by device family.
pub fn probe<'c, B: SpiBus + ?Sized>(
    bus: &mut B,
    catalog: &'c Catalog,
) -> Result<FlashContext<'c>> {
    let id = spi25::read_jedec_id(bus)?;
    log::debug!("SPI device id: {}", id);

    match catalog.identify(&id) {
        IdMatch::Exact(chip) => {
            report_chip(chip);
            Ok(FlashContext::new(chip))
        }
        IdMatch::Family(chip) => {
            log::debug!(
                "No exact match for {}, using family member {} ({:08X})",
                id,
                chip.name,
                chip.jedec_id
            );
            report_chip(chip);
            Ok(FlashContext::new(chip))
        }
        IdMatch::NotFound { closest } => {
            log::warn!(
                "SPI NOR flash not detected (id {}, vendor {})",
                id,
                vendor_name(id.manufacturer).unwrap_or("unknown")
            );
            if let Some(chip) = closest {
                log::info!(
                    "Closest known chip: {} {} ({:08X})",
                    chip.vendor,
                    chip.name,
                    chip.jedec_id
                );
            }
            Err(Error::NotDetected)
        }
    }
}

fn report_chip(chip: &ChipDescriptor) {
    log::info!(
        "Detected {} {} ({} KiB), VCC {:.2}...{:.2}V",
        chip.vendor,
        chip.name,
        chip.total_size() / 1024,
        chip.vcc_min(),
        chip.vcc_max()
    );
    if chip.needs_low_voltage_adapter() {
        log::warn!("{} runs at {:.2}V max, use the 1.8V adapter", chip.name, chip.vcc_max());
    }
}

/// Run `f` with the chip in 4-byte mode if the chip needs it
fn with_address_mode<B, T, F>(bus: &mut B, ctx: &mut FlashContext<'_>, f: F) -> Result<T>
where
    B: SpiBus + ?Sized,
    F: FnOnce(&mut B, AddressWidth) -> Result<T>,
{
    if !ctx.needs_mode_switch() {
        return f(bus, ctx.address_width());
    }

    spi25::set_addressing_mode(bus, ctx, true)?;
    let result = f(bus, ctx.address_width());
    let exit = spi25::set_addressing_mode(bus, ctx, false);

    match (result, exit) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), exit) => {
            if let Err(exit_err) = exit {
                log::warn!("Leaving 4-byte mode failed: {}", exit_err);
            }
            Err(e)
        }
    }
}

/// Erase all sectors overlapping `[offset, offset + len)`
///
/// A request covering the whole chip is turned into one chip erase.
pub fn erase<B: SpiBus + ?Sized>(
    bus: &mut B,
    ctx: &mut FlashContext<'_>,
    offset: u32,
    len: u32,
) -> Result<()> {
    erase_with_progress(bus, ctx, offset, len, &mut NoProgress)
}

/// [`erase`] with progress reporting, one update per sector
pub fn erase_with_progress<B: SpiBus + ?Sized, P: Progress + ?Sized>(
    bus: &mut B,
    ctx: &mut FlashContext<'_>,
    offset: u32,
    len: u32,
    progress: &mut P,
) -> Result<()> {
    if len == 0 {
        log::error!("Refusing zero-length erase at 0x{:08X}", offset);
        return Err(Error::ZeroLength);
    }
    ctx.check_range(offset, len as usize)?;

    if offset == 0 && len == ctx.total_size() {
        progress.start(Operation::Erase, len as usize);
        chip_erase(bus, ctx)?;
        progress.update(len as usize);
        progress.finish();
        return Ok(());
    }

    let sector_size = ctx.sector_size();
    let sectors = sector_span(offset, len, sector_size);
    log::debug!(
        "Erasing sectors {}..{} for 0x{:08X}+0x{:X}",
        sectors.start,
        sectors.end,
        offset,
        len
    );
    progress.start(
        Operation::Erase,
        sectors.len() * sector_size as usize,
    );

    spi25::unprotect(bus)?;

    for (done, sector) in sectors.enumerate() {
        let addr = sector * sector_size;
        spi25::wait_ready(bus, spi25::ERASE_TIMEOUT)?;
        with_address_mode(bus, ctx, |bus, width| {
            spi25::write_enable(bus)?;
            spi25::sector_erase(bus, width, addr)?;
            spi25::wait_ready(bus, spi25::ERASE_TIMEOUT)
        })
        .inspect_err(|e| log::error!("Erasing sector at 0x{:08X} failed: {}", addr, e))?;
        progress.update((done + 1) * sector_size as usize);
    }

    progress.finish();
    Ok(())
}

/// Erase the entire chip with a single bulk erase
pub fn chip_erase<B: SpiBus + ?Sized>(bus: &mut B, ctx: &mut FlashContext<'_>) -> Result<()> {
    log::info!("Erasing entire {}, this may take a while", ctx.chip.name);
    spi25::wait_ready(bus, spi25::PROGRAM_TIMEOUT)?;
    spi25::write_enable(bus)?;
    spi25::unprotect(bus)?;
    spi25::bulk_erase(bus)?;
    spi25::wait_ready(bus, spi25::ERASE_TIMEOUT)
        .inspect_err(|_| log::error!("Chip erase did not complete"))?;
    spi25::write_disable(bus)
}

/// Read one piece that lies within a single sector
fn read_piece<B: SpiBus + ?Sized>(
    bus: &mut B,
    ctx: &mut FlashContext<'_>,
    addr: u32,
    buf: &mut [u8],
) -> Result<()> {
    let len = buf.len();
    with_address_mode(bus, ctx, |bus, width| {
        spi25::read_data(bus, width, addr, buf)
    })
    .inspect_err(|e| log::error!("Reading 0x{:X} bytes at 0x{:08X} failed: {}", len, addr, e))
}

/// Read `buf.len()` bytes starting at `from`
///
/// Returns the number of bytes read, which is always `buf.len()` on success.
pub fn read<B: SpiBus + ?Sized>(
    bus: &mut B,
    ctx: &mut FlashContext<'_>,
    from: u32,
    buf: &mut [u8],
) -> Result<usize> {
    read_with_progress(bus, ctx, from, buf, &mut NoProgress)
}

/// [`read`] with progress reporting, one update per sector
pub fn read_with_progress<B: SpiBus + ?Sized, P: Progress + ?Sized>(
    bus: &mut B,
    ctx: &mut FlashContext<'_>,
    from: u32,
    buf: &mut [u8],
    progress: &mut P,
) -> Result<usize> {
    if buf.is_empty() {
        return Ok(0);
    }
    ctx.check_range(from, buf.len())?;

    progress.start(Operation::Read, buf.len());
    spi25::wait_ready(bus, spi25::MODE_SWITCH_TIMEOUT)?;

    for chunk in BoundaryChunks::new(from, buf.len(), ctx.sector_size()) {
        let piece = &mut buf[chunk.offset..chunk.offset + chunk.len];
        read_piece(bus, ctx, chunk.addr, piece)?;
        progress.update(chunk.offset + chunk.len);
    }

    progress.finish();
    Ok(buf.len())
}

/// Program `data` at `to`
///
/// The target range must already be erased. Returns the number of bytes
/// written, which is always `data.len()` on success.
pub fn write<B: SpiBus + ?Sized>(
    bus: &mut B,
    ctx: &mut FlashContext<'_>,
    to: u32,
    data: &[u8],
) -> Result<usize> {
    write_with_progress(bus, ctx, to, data, &mut NoProgress)
}

/// [`write`] with progress reporting, one update per page
pub fn write_with_progress<B: SpiBus + ?Sized, P: Progress + ?Sized>(
    bus: &mut B,
    ctx: &mut FlashContext<'_>,
    to: u32,
    data: &[u8],
    progress: &mut P,
) -> Result<usize> {
    if data.is_empty() {
        return Ok(0);
    }
    ctx.check_range(to, data.len())?;

    progress.start(Operation::Write, data.len());
    spi25::wait_ready(bus, spi25::WRITE_START_TIMEOUT)?;

    let result = with_address_mode(bus, ctx, |bus, width| {
        program_pages(bus, width, to, data, progress)
    });
    let disable = spi25::write_disable(bus);

    let written = result?;
    disable?;
    progress.finish();
    Ok(written)
}

fn program_pages<B: SpiBus + ?Sized, P: Progress + ?Sized>(
    bus: &mut B,
    width: AddressWidth,
    to: u32,
    data: &[u8],
    progress: &mut P,
) -> Result<usize> {
    let mut written = 0;
    for chunk in page_chunks(to, data.len()) {
        let payload = &data[chunk.offset..chunk.offset + chunk.len];

        spi25::wait_ready(bus, spi25::PROGRAM_TIMEOUT)?;
        spi25::write_enable(bus)?;
        spi25::unprotect(bus)?;
        let accepted = spi25::program_page(bus, width, chunk.addr, payload)?;
        if accepted != chunk.len {
            log::error!(
                "Short write at 0x{:08X}: {} of {} bytes accepted",
                chunk.addr,
                accepted,
                chunk.len
            );
            return Err(Error::ShortWrite { written });
        }

        written += chunk.len;
        progress.update(written);
    }
    Ok(written)
}

/// Compare the chip contents at `addr` with `expected`
pub fn verify<B: SpiBus + ?Sized>(
    bus: &mut B,
    ctx: &mut FlashContext<'_>,
    addr: u32,
    expected: &[u8],
) -> Result<()> {
    verify_with_progress(bus, ctx, addr, expected, &mut NoProgress)
}

/// [`verify`] with progress reporting
pub fn verify_with_progress<B: SpiBus + ?Sized, P: Progress + ?Sized>(
    bus: &mut B,
    ctx: &mut FlashContext<'_>,
    addr: u32,
    expected: &[u8],
    progress: &mut P,
) -> Result<()> {
    if expected.is_empty() {
        return Ok(());
    }
    ctx.check_range(addr, expected.len())?;

    progress.start(Operation::Verify, expected.len());
    spi25::wait_ready(bus, spi25::MODE_SWITCH_TIMEOUT)?;

    let mut buf = [0u8; VERIFY_CHUNK as usize];
    for chunk in BoundaryChunks::new(addr, expected.len(), ctx.sector_size()) {
        for piece in BoundaryChunks::new(chunk.addr, chunk.len, VERIFY_CHUNK) {
            let start = chunk.offset + piece.offset;
            let want = &expected[start..start + piece.len];
            let have = &mut buf[..piece.len];
            read_piece(bus, ctx, piece.addr, have)?;

            if let Some(i) = have.iter().zip(want).position(|(h, w)| h != w) {
                let err = Error::VerifyMismatch {
                    addr: piece.addr + i as u32,
                    expected: want[i],
                    found: have[i],
                };
                log::error!("{}", err);
                return Err(err);
            }
            progress.update(start + piece.len);
        }
    }

    progress.finish();
    Ok(())
}

/// Names of every chip the catalog can identify, in identification order
///
/// Display only; the bus is not touched.
pub fn support_list(catalog: &Catalog) -> impl Iterator<Item = &'static str> + '_ {
    catalog.names()
}
