use thiserror::Error;

use crate::gb_sequence::GbSequence;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("cannot open conversion from {source_label} to {target_label}")]
    Open {
        source_label: String,
        target_label: String,
    },
    /// Reserved or unassigned code. Skipped by the table driver.
    #[error("{0} has no UTF-8 mapping")]
    Unmapped(GbSequence),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid UTF-8 leading byte {0:#04x}")]
    InvalidLeadingByte(u8),
    #[error("invalid UTF-8 continuation byte {byte:#04x} at index {index}")]
    InvalidContinuationByte { index: usize, byte: u8 },
    #[error("UTF-8 sequence should be {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("cannot decode conversion of {code}: {source}")]
    Decode { code: GbSequence, source: DecodeError },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
