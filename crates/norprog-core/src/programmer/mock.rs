//! Scripted bus for unit tests

use std::collections::VecDeque;
use std::vec::Vec;

use super::SpiBus;
use crate::error::{Error, Result};
use crate::spi::{opcodes, IoMode};

/// Records every chip-select window and answers reads from fixed values
pub(crate) struct MockBus {
    pub selected: bool,
    /// Bytes written in each completed chip-select window
    pub transactions: Vec<Vec<u8>>,
    current: Vec<u8>,
    /// Successive RDSR answers; the last one repeats
    pub status: VecDeque<u8>,
    /// Answer to RDID
    pub rdid: [u8; opcodes::RDID_LEN],
    /// Answers for single-byte register reads, indexed by opcode
    pub registers: [u8; 256],
    /// Writes to the bank register are not latched
    pub ignore_bank_writes: bool,
    pub fail_reads: bool,
    pub accept_limit: Option<usize>,
    pub clock_us: u64,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            selected: false,
            transactions: Vec::new(),
            current: Vec::new(),
            status: VecDeque::from([0]),
            rdid: [0xFF; opcodes::RDID_LEN],
            registers: [0; 256],
            ignore_bank_writes: false,
            fail_reads: false,
            accept_limit: None,
            clock_us: 0,
        }
    }

    /// Opcodes of all completed transactions
    pub fn opcodes(&self) -> Vec<u8> {
        self.transactions.iter().map(|t| t[0]).collect()
    }

    fn next_status(&mut self) -> u8 {
        if self.status.len() > 1 {
            self.status.pop_front().unwrap_or(0)
        } else {
            self.status.front().copied().unwrap_or(0)
        }
    }
}

impl SpiBus for MockBus {
    fn assert_select(&mut self) -> Result<()> {
        assert!(!self.selected, "chip select asserted twice");
        self.selected = true;
        Ok(())
    }

    fn deassert_select(&mut self) -> Result<()> {
        self.selected = false;
        let tx = core::mem::take(&mut self.current);
        if let [opcodes::BRWR, value] = tx.as_slice() {
            if !self.ignore_bank_writes {
                self.registers[opcodes::BRRD as usize] = *value;
            }
        }
        if !tx.is_empty() {
            self.transactions.push(tx);
        }
        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8], _mode: IoMode) -> Result<usize> {
        assert!(self.selected, "write without chip select");
        let n = self.accept_limit.map_or(data.len(), |l| l.min(data.len()));
        self.current.extend_from_slice(&data[..n]);
        Ok(n)
    }

    fn read_bytes(&mut self, buf: &mut [u8], _mode: IoMode) -> Result<()> {
        assert!(self.selected, "read without chip select");
        if self.fail_reads {
            return Err(Error::Transport);
        }
        match self.current.first().copied() {
            Some(opcodes::RDSR) => buf.fill(self.next_status()),
            Some(opcodes::RDID) => {
                let n = buf.len().min(self.rdid.len());
                buf[..n].copy_from_slice(&self.rdid[..n]);
            }
            Some(op) => buf.fill(self.registers[op as usize]),
            None => return Err(Error::Transport),
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
