pub mod error;
pub mod gateway;
pub mod gb_sequence;
pub mod row;
pub mod utf;

use std::{ffi::OsString, io::Write};

pub use crate::error::{DecodeError, GatewayError, TableError};
pub use crate::gateway::{ConversionGateway, EncodingGateway};
pub use crate::gb_sequence::{code_points, BlockRange, GbSequence, GB2312_BLOCKS};
pub use crate::utf::utf8sequence::Utf8Sequence;

/// GBK is a superset of GB2312.
pub const SOURCE_LABEL: &str = "gbk";
pub const TARGET_LABEL: &str = "utf-8";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub visited: usize,
    pub emitted: usize,
    pub skipped: usize,
}

/// Writes the full GB2312 to UTF-8 table to `out`. Arguments are ignored.
pub fn gbtable<W: Write>(
    argv: impl Iterator<Item = OsString>,
    out: &mut W,
) -> Result<Summary, TableError> {
    for argument in argv {
        log::warn!("ignoring argument {}", argument.to_string_lossy());
    }
    let gateway = EncodingGateway::open(SOURCE_LABEL, TARGET_LABEL)?;
    log::debug!(
        "opened {} to {TARGET_LABEL} conversion",
        gateway.source_name()
    );
    let summary = emit_table(&gateway, code_points(), out)?;
    log::info!(
        "visited {} codes, emitted {} rows, skipped {}",
        summary.visited,
        summary.emitted,
        summary.skipped
    );
    Ok(summary)
}

/// Converts each `(block, position)` in order and writes a row for it.
///
/// Unmapped codes are skipped. Any other gateway error, a sequence that does
/// not decode, or a write failure stops the table.
pub fn emit_table<G, W>(
    gateway: &G,
    points: impl Iterator<Item = (u8, u8)>,
    out: &mut W,
) -> Result<Summary, TableError>
where
    G: ConversionGateway + ?Sized,
    W: Write,
{
    let mut summary = Summary::default();
    for (block, position) in points {
        summary.visited += 1;
        let code = GbSequence::encode(block, position);
        let sequence = match gateway.convert(code) {
            Ok(sequence) => sequence,
            Err(GatewayError::Unmapped(_)) => {
                summary.skipped += 1;
                continue;
            }
            Err(error) => return Err(error.into()),
        };
        let scalar = sequence
            .decode()
            .map_err(|source| TableError::Decode { code, source })?;
        row::write_row(out, code, &sequence, scalar)?;
        summary.emitted += 1;
    }
    out.flush()?;
    Ok(summary)
}
