//! SPI NOR flash opcodes
//!
//! The single-I/O command set used by the driver, plus the multi-I/O read and
//! program opcodes a faster transport could use.

// ============================================================================
// Write control
// ============================================================================

/// Write Enable - sets the write enable latch
pub const WREN: u8 = 0x06;
/// Write Disable - clears the write enable latch
pub const WRDI: u8 = 0x04;

// ============================================================================
// Status and configuration registers
// ============================================================================

/// Read Status Register
pub const RDSR: u8 = 0x05;
/// Write Status Register
pub const WRSR: u8 = 0x01;
/// Read Configuration Register (Spansion)
pub const RCR: u8 = 0x35;
/// Clear Status Register (Spansion)
pub const CLSR: u8 = 0x30;

// ============================================================================
// Identification
// ============================================================================

/// Read JEDEC ID
pub const RDID: u8 = 0x9F;
/// Read Electronic Signature
pub const RES: u8 = 0xAB;
/// Read Manufacturer and Device ID
pub const REMS: u8 = 0x90;

/// Number of bytes returned by RDID that take part in identification
pub const RDID_LEN: usize = 5;

// ============================================================================
// Read and program
// ============================================================================

/// Read Data
pub const READ: u8 = 0x03;
/// Fast Read (one dummy byte)
pub const FAST_READ: u8 = 0x0B;
/// Dual Output Read (1-1-2)
pub const DOR: u8 = 0x3B;
/// Quad Output Read (1-1-4)
pub const QOR: u8 = 0x6B;
/// Dual I/O Read (1-2-2)
pub const DIOR: u8 = 0xBB;
/// Quad I/O Read (1-4-4)
pub const QIOR: u8 = 0xEB;
/// Page Program
pub const PP: u8 = 0x02;
/// Quad Page Program
pub const QPP: u8 = 0x32;

// ============================================================================
// Erase
// ============================================================================

/// Sector Erase (64 KiB)
pub const SE: u8 = 0xD8;
/// 4 KiB parameter sector erase
pub const P4E: u8 = 0x20;
/// 8 KiB parameter sector erase
pub const P8E: u8 = 0x40;
/// Bulk (chip) erase
pub const BE: u8 = 0xC7;
/// Bulk (chip) erase, alternate opcode
pub const BE_ALT: u8 = 0x60;

// ============================================================================
// Addressing mode
// ============================================================================

/// Enter 4-byte address mode
pub const EN4B: u8 = 0xB7;
/// Exit 4-byte address mode
pub const EX4B: u8 = 0xE9;
/// Bank Register Read (Spansion)
pub const BRRD: u8 = 0x16;
/// Bank Register Write (Spansion)
pub const BRWR: u8 = 0x17;
/// Write Extended Address Register (Winbond)
pub const WREAR: u8 = 0xC5;
/// Read Extended Address Register (Winbond)
pub const RDEAR: u8 = 0xC8;

/// Bank register value selecting 4-byte addressing (EXTADD | BA24)
pub const BANK_4BYTE: u8 = 0x81;

// ============================================================================
// Status register bits
// ============================================================================

/// Write In Progress
pub const SR_WIP: u8 = 0x01;
/// Write Enable Latch
pub const SR_WEL: u8 = 0x02;
/// Block Protect 0
pub const SR_BP0: u8 = 0x04;
/// Block Protect 1
pub const SR_BP1: u8 = 0x08;
/// Block Protect 2
pub const SR_BP2: u8 = 0x10;
/// Erase/Program Error
pub const SR_EPE: u8 = 0x20;
/// Status Register Write Disable
pub const SR_SRWD: u8 = 0x80;
