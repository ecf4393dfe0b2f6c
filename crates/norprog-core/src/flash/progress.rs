//! Progress reporting hooks

use core::fmt;

/// Bulk operation being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Sector or chip erase
    Erase,
    /// Read
    Read,
    /// Page program
    Write,
    /// Read-back comparison
    Verify,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Erase => "Erasing",
            Self::Read => "Reading",
            Self::Write => "Writing",
            Self::Verify => "Verifying",
        };
        f.write_str(name)
    }
}

/// Callback for progress reporting during bulk operations
///
/// All amounts are in bytes. Erase reports whole sectors, so its total may
/// exceed the requested length.
pub trait Progress {
    /// Called once before the first bus command
    fn start(&mut self, op: Operation, total: usize);

    /// Called with the number of bytes completed so far
    fn update(&mut self, done: usize);

    /// Called after the operation completed successfully
    fn finish(&mut self);
}

/// A no-op progress reporter
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn start(&mut self, _op: Operation, _total: usize) {}
    fn update(&mut self, _done: usize) {}
    fn finish(&mut self) {}
}
