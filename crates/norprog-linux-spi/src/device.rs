//! Linux SPI device implementation
//!
//! This module provides the `LinuxSpi` struct that implements the `SpiBus`
//! trait using Linux's spidev interface.
//!
//! spidev has no call to assert chip select on its own: chip select is
//! active for the duration of one `SPI_IOC_MESSAGE`. Bytes written inside a
//! chip-select window are therefore buffered and sent together with the
//! following read, or on release. When a command does not fit into the
//! kernel buffer the message is split, with `cs_change` set on the last
//! transfer of every message but the final one so the kernel keeps the chip
//! selected in between. If a command fails while the chip is held that way,
//! releasing the window sends an empty message to drop chip select.

use crate::error::{LinuxSpiError, Result, Setting};

use norprog_core::error::{Error as CoreError, Result as CoreResult};
use norprog_core::programmer::SpiBus;
use norprog_core::spi::IoMode;

use std::fs::{File, OpenOptions};
use std::os::unix::io::AsRawFd;
use std::time::Instant;

/// Path to kernel spidev buffer size parameter
const BUF_SIZE_SYSFS: &str = "/sys/module/spidev/parameters/bufsiz";

/// Default SPI clock speed in Hz (2 MHz)
const DEFAULT_SPEED_HZ: u32 = 2_000_000;

/// SPI mode constants
pub mod mode {
    /// SPI mode 0: CPOL=0, CPHA=0
    pub const MODE_0: u8 = 0;
    /// SPI mode 1: CPOL=0, CPHA=1
    pub const MODE_1: u8 = 1;
    /// SPI mode 2: CPOL=1, CPHA=0
    pub const MODE_2: u8 = 2;
    /// SPI mode 3: CPOL=1, CPHA=1
    pub const MODE_3: u8 = 3;
}

/// Linux spidev ioctl constants
mod ioctl {
    use nix::ioctl_write_ptr;

    const SPI_IOC_MAGIC: u8 = b'k';

    const SPI_IOC_TYPE_MODE: u8 = 1;
    const SPI_IOC_TYPE_BITS_PER_WORD: u8 = 3;
    const SPI_IOC_TYPE_MAX_SPEED_HZ: u8 = 4;

    ioctl_write_ptr!(spi_ioc_wr_mode, SPI_IOC_MAGIC, SPI_IOC_TYPE_MODE, u8);
    ioctl_write_ptr!(
        spi_ioc_wr_bits_per_word,
        SPI_IOC_MAGIC,
        SPI_IOC_TYPE_BITS_PER_WORD,
        u8
    );
    ioctl_write_ptr!(
        spi_ioc_wr_max_speed_hz,
        SPI_IOC_MAGIC,
        SPI_IOC_TYPE_MAX_SPEED_HZ,
        u32
    );

    /// SPI_IOC_MESSAGE(n) = _IOW(SPI_IOC_MAGIC, 0, char[n * sizeof(spi_ioc_transfer)])
    pub fn spi_ioc_message(n: usize) -> libc::c_ulong {
        let size = n * core::mem::size_of::<super::SpiIocTransfer>();
        // _IOC(dir, type, nr, size) = dir << 30 | size << 16 | type << 8 | nr
        ((1u32 << 30) | ((size as u32) << 16) | ((SPI_IOC_MAGIC as u32) << 8)) as libc::c_ulong
    }
}

/// SPI transfer structure for ioctl
/// This must match the kernel's struct spi_ioc_transfer layout
#[repr(C)]
#[derive(Debug, Default, Clone)]
struct SpiIocTransfer {
    tx_buf: u64,          // __u64 tx_buf
    rx_buf: u64,          // __u64 rx_buf
    len: u32,             // __u32 len
    speed_hz: u32,        // __u32 speed_hz
    delay_usecs: u16,     // __u16 delay_usecs
    bits_per_word: u8,    // __u8 bits_per_word
    cs_change: u8,        // __u8 cs_change
    tx_nbits: u8,         // __u8 tx_nbits
    rx_nbits: u8,         // __u8 rx_nbits
    word_delay_usecs: u8, // __u8 word_delay_usecs
    _pad: u8,             // padding
}

/// Configuration for opening a Linux SPI device
#[derive(Debug, Clone)]
pub struct LinuxSpiConfig {
    /// Device path (e.g., "/dev/spidev0.0")
    pub device: String,
    /// SPI clock speed in Hz (default: 2 MHz)
    pub speed_hz: u32,
    /// SPI mode (0-3, default: 0)
    pub mode: u8,
}

impl Default for LinuxSpiConfig {
    fn default() -> Self {
        Self {
            device: String::new(),
            speed_hz: DEFAULT_SPEED_HZ,
            mode: mode::MODE_0,
        }
    }
}

impl LinuxSpiConfig {
    /// Create a new configuration with the given device path
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            ..Default::default()
        }
    }

    /// Set the SPI clock speed in Hz
    pub fn with_speed(mut self, speed_hz: u32) -> Self {
        self.speed_hz = speed_hz;
        self
    }

    /// Set the SPI mode (0-3)
    pub fn with_mode(mut self, mode: u8) -> Self {
        self.mode = mode;
        self
    }
}

/// Sends one `SPI_IOC_MESSAGE`: `tx` out, then `rx` in
///
/// With `keep_selected` chip select stays active after the message. A
/// message with no bytes at all only toggles chip select.
trait MessageSink {
    fn send(&mut self, tx: &[u8], rx: &mut [u8], keep_selected: bool) -> Result<()>;
}

/// An open spidev node
struct Spidev {
    file: File,
    speed_hz: u32,
}

impl MessageSink for Spidev {
    fn send(&mut self, tx: &[u8], rx: &mut [u8], keep_selected: bool) -> Result<()> {
        let transfer = |tx_buf: u64, rx_buf: u64, len: usize| SpiIocTransfer {
            tx_buf,
            rx_buf,
            len: len as u32,
            speed_hz: self.speed_hz,
            bits_per_word: 8,
            ..Default::default()
        };

        let mut transfers = Vec::with_capacity(2);
        if !tx.is_empty() {
            transfers.push(transfer(tx.as_ptr() as u64, 0, tx.len()));
        }
        if !rx.is_empty() {
            transfers.push(transfer(0, rx.as_mut_ptr() as u64, rx.len()));
        }
        if transfers.is_empty() {
            transfers.push(transfer(0, 0, 0));
        }
        if let Some(last) = transfers.last_mut() {
            last.cs_change = keep_selected as u8;
        }

        let fd = self.file.as_raw_fd();
        let ioctl_num = ioctl::spi_ioc_message(transfers.len());
        // SAFETY: every buffer referenced by `transfers` outlives the call
        let ret = unsafe { libc::ioctl(fd, ioctl_num, transfers.as_ptr()) };

        if ret < 0 {
            return Err(LinuxSpiError::TransferFailed {
                len: tx.len() + rx.len(),
                source: std::io::Error::last_os_error(),
            });
        }
        Ok(())
    }
}

/// Chip-select window bookkeeping on top of a [`MessageSink`]
struct Window {
    /// Maximum bytes in one SPI_IOC_MESSAGE
    max_len: usize,
    /// Bytes written in the current window, not yet sent
    pending: Vec<u8>,
    selected: bool,
    /// The window's data phase is over, only the release remains
    finished: bool,
    /// A message ended with chip select left active
    cs_held: bool,
}

impl Window {
    fn new(max_len: usize) -> Self {
        Self {
            max_len,
            pending: Vec::with_capacity(max_len),
            selected: false,
            finished: false,
            cs_held: false,
        }
    }

    /// Send through `sink`, tracking whether chip select is left active
    ///
    /// A failed message leaves the tracked state alone: chip select may
    /// still be held from an earlier piece.
    fn send<S: MessageSink>(
        &mut self,
        sink: &mut S,
        tx: &[u8],
        rx: &mut [u8],
        keep_selected: bool,
    ) -> Result<()> {
        sink.send(tx, rx, keep_selected)?;
        self.cs_held = keep_selected;
        Ok(())
    }

    /// Send the buffered bytes
    fn flush<S: MessageSink>(&mut self, sink: &mut S, keep_selected: bool) -> Result<()> {
        let pending = std::mem::take(&mut self.pending);
        let result = self.send(sink, &pending, &mut [], keep_selected);
        self.pending = pending;
        self.pending.clear();
        result
    }

    fn assert_select(&mut self) -> CoreResult<()> {
        if self.selected {
            log::error!("linux_spi: chip select already asserted");
            return Err(CoreError::Transport);
        }
        self.selected = true;
        self.finished = false;
        self.pending.clear();
        Ok(())
    }

    fn deassert_select<S: MessageSink>(&mut self, sink: &mut S) -> CoreResult<()> {
        if !self.selected {
            return Ok(());
        }
        self.selected = false;

        let mut result = Ok(());
        if !self.finished && !self.pending.is_empty() {
            result = self.flush(sink, false);
        }
        if self.cs_held {
            log::debug!("linux_spi: releasing chip select left active");
            let release = self.send(sink, &[], &mut [], false);
            result = result.and(release);
        }
        result.map_err(transport_error)
    }

    fn write_bytes<S: MessageSink>(&mut self, sink: &mut S, data: &[u8]) -> CoreResult<usize> {
        if !self.selected || self.finished {
            log::error!("linux_spi: write outside of a command");
            return Err(CoreError::Transport);
        }

        for piece in data.chunks(self.max_len) {
            if self.pending.len() + piece.len() > self.max_len {
                self.flush(sink, true).map_err(transport_error)?;
            }
            self.pending.extend_from_slice(piece);
        }
        Ok(data.len())
    }

    fn read_bytes<S: MessageSink>(&mut self, sink: &mut S, buf: &mut [u8]) -> CoreResult<()> {
        if !self.selected || self.finished {
            log::error!("linux_spi: read outside of a command");
            return Err(CoreError::Transport);
        }
        if self.pending.len() >= self.max_len {
            self.flush(sink, true).map_err(transport_error)?;
        }

        let pending = std::mem::take(&mut self.pending);
        let first = buf.len().min(self.max_len - pending.len());
        let (head, mut rest) = buf.split_at_mut(first);
        let result = self.send(sink, &pending, head, !rest.is_empty());
        self.pending = pending;
        self.pending.clear();
        self.finished = true;
        result.map_err(transport_error)?;

        while !rest.is_empty() {
            let n = rest.len().min(self.max_len);
            let (piece, tail) = std::mem::take(&mut rest).split_at_mut(n);
            self.send(sink, &[], piece, !tail.is_empty())
                .map_err(transport_error)?;
            rest = tail;
        }
        Ok(())
    }
}

/// Linux SPI programmer using spidev interface
pub struct LinuxSpi {
    dev: Spidev,
    window: Window,
    epoch: Instant,
}

impl LinuxSpi {
    /// Open a Linux SPI device with the given configuration
    pub fn open(config: &LinuxSpiConfig) -> Result<Self> {
        if config.device.is_empty() {
            return Err(LinuxSpiError::NoDevice);
        }

        log::debug!("linux_spi: Opening device {}", config.device);

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&config.device)
            .map_err(|e| LinuxSpiError::OpenFailed {
                path: config.device.clone(),
                source: e,
            })?;

        let fd = file.as_raw_fd();

        let mode = config.mode;
        let bits: u8 = 8;
        let speed = config.speed_hz;
        // SAFETY: fd is an open spidev node and each pointer outlives its call
        unsafe {
            ioctl::spi_ioc_wr_mode(fd, &mode)
                .map_err(|e| LinuxSpiError::configure(Setting::Mode(mode), e))?;
            ioctl::spi_ioc_wr_bits_per_word(fd, &bits)
                .map_err(|e| LinuxSpiError::configure(Setting::BitsPerWord(bits), e))?;
            ioctl::spi_ioc_wr_max_speed_hz(fd, &speed)
                .map_err(|e| LinuxSpiError::configure(Setting::SpeedHz(speed), e))?;
        }

        log::info!(
            "linux_spi: Opened {} (mode={}, speed={} kHz)",
            config.device,
            mode,
            speed / 1000
        );

        let max_kernel_buf_size = get_max_kernel_buf_size();
        log::debug!(
            "linux_spi: Max kernel buffer size: {} bytes",
            max_kernel_buf_size
        );

        Ok(Self {
            dev: Spidev {
                file,
                speed_hz: speed,
            },
            window: Window::new(max_kernel_buf_size),
            epoch: Instant::now(),
        })
    }

    /// Open a device with default settings
    pub fn open_device(device: &str) -> Result<Self> {
        Self::open(&LinuxSpiConfig::new(device))
    }

    /// Get current speed setting
    pub fn speed_hz(&self) -> u32 {
        self.dev.speed_hz
    }
}

fn transport_error(e: LinuxSpiError) -> CoreError {
    log::error!("linux_spi: {}", e);
    CoreError::Transport
}

impl SpiBus for LinuxSpi {
    fn assert_select(&mut self) -> CoreResult<()> {
        self.window.assert_select()
    }

    fn deassert_select(&mut self) -> CoreResult<()> {
        self.window.deassert_select(&mut self.dev)
    }

    fn write_bytes(&mut self, data: &[u8], _mode: IoMode) -> CoreResult<usize> {
        self.window.write_bytes(&mut self.dev, data)
    }

    fn read_bytes(&mut self, buf: &mut [u8], _mode: IoMode) -> CoreResult<()> {
        self.window.read_bytes(&mut self.dev, buf)
    }

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(std::time::Duration::from_micros(us as u64));
    }

    fn monotonic_us(&self) -> u64 {
        self.epoch.elapsed().as_micros() as u64
    }
}

/// Read the maximum kernel buffer size from sysfs, or use page size as fallback
fn get_max_kernel_buf_size() -> usize {
    if let Ok(content) = std::fs::read_to_string(BUF_SIZE_SYSFS) {
        if let Ok(size) = content.trim().parse::<usize>() {
            if size > 0 {
                log::debug!("linux_spi: Using buffer size {} from sysfs", size);
                return size;
            }
        }
        log::warn!("linux_spi: Invalid buffer size in {}", BUF_SIZE_SYSFS);
    } else {
        log::debug!("linux_spi: Cannot read {}, using page size", BUF_SIZE_SYSFS);
    }

    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if page_size > 0 {
        log::debug!("linux_spi: Using page size {} as buffer size", page_size);
        page_size as usize
    } else {
        4096
    }
}

fn invalid(key: &'static str, value: &str, reason: &'static str) -> LinuxSpiError {
    LinuxSpiError::InvalidOption {
        key,
        value: value.to_string(),
        reason,
    }
}

/// Parse programmer options from a list of key-value pairs
pub fn parse_options(options: &[(&str, &str)]) -> Result<LinuxSpiConfig> {
    let mut config = LinuxSpiConfig::default();

    for (key, value) in options {
        match *key {
            "dev" => {
                config.device = value.to_string();
            }
            "spispeed" => {
                // Speed is given in kHz
                config.speed_hz = value
                    .parse::<u32>()
                    .ok()
                    .and_then(|khz| khz.checked_mul(1000))
                    .filter(|&hz| hz > 0)
                    .ok_or_else(|| invalid("spispeed", value, "expected a speed in kHz"))?;
            }
            "mode" => {
                let mode = value
                    .parse::<u8>()
                    .ok()
                    .filter(|m| *m <= mode::MODE_3)
                    .ok_or_else(|| invalid("mode", value, "must be 0-3"))?;
                config.mode = mode;
            }
            _ => {
                log::warn!("linux_spi: Unknown option: {}={}", key, value);
            }
        }
    }

    if config.device.is_empty() {
        return Err(LinuxSpiError::NoDevice);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_layout_matches_kernel() {
        assert_eq!(core::mem::size_of::<SpiIocTransfer>(), 32);
        // SPI_IOC_MESSAGE(1) and (2) as computed by the C headers
        assert_eq!(ioctl::spi_ioc_message(1), 0x4020_6B00);
        assert_eq!(ioctl::spi_ioc_message(2), 0x4040_6B00);
    }

    #[test]
    fn test_parse_options() {
        let config = parse_options(&[
            ("dev", "/dev/spidev1.0"),
            ("spispeed", "8000"),
            ("mode", "3"),
        ])
        .unwrap();
        assert_eq!(config.device, "/dev/spidev1.0");
        assert_eq!(config.speed_hz, 8_000_000);
        assert_eq!(config.mode, mode::MODE_3);

        let config = parse_options(&[("dev", "/dev/spidev0.0")]).unwrap();
        assert_eq!(config.speed_hz, DEFAULT_SPEED_HZ);
        assert_eq!(config.mode, mode::MODE_0);
    }

    #[test]
    fn test_parse_options_errors() {
        assert!(matches!(
            parse_options(&[("spispeed", "1000")]),
            Err(LinuxSpiError::NoDevice)
        ));
        assert!(matches!(
            parse_options(&[("dev", "/dev/spidev0.0"), ("mode", "4")]),
            Err(LinuxSpiError::InvalidOption { key: "mode", .. })
        ));
        assert!(matches!(
            parse_options(&[("dev", "/dev/spidev0.0"), ("spispeed", "fast")]),
            Err(LinuxSpiError::InvalidOption { key: "spispeed", .. })
        ));
    }

    /// Records messages as (tx, rx length, keep_selected)
    #[derive(Default)]
    struct RecordingSink {
        sent: Vec<(Vec<u8>, usize, bool)>,
        fail_at: Option<usize>,
    }

    impl MessageSink for RecordingSink {
        fn send(&mut self, tx: &[u8], rx: &mut [u8], keep_selected: bool) -> Result<()> {
            if self.fail_at == Some(self.sent.len()) {
                self.fail_at = None;
                return Err(LinuxSpiError::TransferFailed {
                    len: tx.len() + rx.len(),
                    source: std::io::Error::from_raw_os_error(libc::EIO),
                });
            }
            rx.fill(0xA5);
            self.sent.push((tx.to_vec(), rx.len(), keep_selected));
            Ok(())
        }
    }

    #[test]
    fn test_command_is_one_message() {
        let mut sink = RecordingSink::default();
        let mut window = Window::new(16);

        window.assert_select().unwrap();
        window.write_bytes(&mut sink, &[0x9F]).unwrap();
        let mut id = [0u8; 5];
        window.read_bytes(&mut sink, &mut id).unwrap();
        window.deassert_select(&mut sink).unwrap();

        assert_eq!(sink.sent, vec![(vec![0x9F], 5, false)]);
        assert_eq!(id, [0xA5; 5]);
        assert!(!window.cs_held);
    }

    #[test]
    fn test_long_read_keeps_chip_selected_between_messages() {
        let mut sink = RecordingSink::default();
        let mut window = Window::new(16);

        window.assert_select().unwrap();
        window.write_bytes(&mut sink, &[0x03, 0, 0, 0]).unwrap();
        let mut buf = [0u8; 40];
        window.read_bytes(&mut sink, &mut buf).unwrap();
        window.deassert_select(&mut sink).unwrap();

        assert_eq!(
            sink.sent,
            vec![
                (vec![0x03, 0, 0, 0], 12, true),
                (vec![], 16, true),
                (vec![], 12, false),
            ]
        );
    }

    #[test]
    fn test_failed_read_piece_releases_chip_select() {
        let mut sink = RecordingSink {
            fail_at: Some(1),
            ..Default::default()
        };
        let mut window = Window::new(16);

        window.assert_select().unwrap();
        window.write_bytes(&mut sink, &[0x03, 0, 0, 0]).unwrap();
        let mut buf = [0u8; 40];
        assert_eq!(
            window.read_bytes(&mut sink, &mut buf),
            Err(CoreError::Transport)
        );
        assert!(window.cs_held);
        window.deassert_select(&mut sink).unwrap();

        // First piece held chip select; the release is an empty message
        assert_eq!(sink.sent.len(), 2);
        assert_eq!(sink.sent[1], (vec![], 0, false));
        assert!(!window.cs_held);
    }

    #[test]
    fn test_failed_final_flush_still_releases() {
        let mut sink = RecordingSink {
            fail_at: Some(1),
            ..Default::default()
        };
        let mut window = Window::new(8);

        window.assert_select().unwrap();
        window.write_bytes(&mut sink, &[0x02, 0, 0, 0]).unwrap();
        window.write_bytes(&mut sink, &[0x55; 8]).unwrap();
        assert_eq!(sink.sent, vec![(vec![0x02, 0, 0, 0], 0, true)]);

        assert_eq!(
            window.deassert_select(&mut sink),
            Err(CoreError::Transport)
        );
        assert_eq!(sink.sent.last(), Some(&(vec![], 0, false)));
        assert!(!window.cs_held);
        assert!(!window.selected);
    }

    #[test]
    fn test_open_missing_device() {
        let err = LinuxSpi::open_device("/nonexistent/spidev9.9").err().unwrap();
        assert!(matches!(err, LinuxSpiError::OpenFailed { .. }));
    }
}
