//! SPI I/O modes

/// Line width used for the data phase of a transfer
///
/// The driver only issues single-I/O commands; the wider modes are accepted
/// by transports that support them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IoMode {
    /// One data line
    #[default]
    Single,
    /// Two data lines
    Dual,
    /// Four data lines
    Quad,
}

impl IoMode {
    /// Returns the number of data lines used
    pub const fn data_lines(&self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Dual => 2,
            Self::Quad => 4,
        }
    }
}
