use std::io::{self, Write};

use itertools::Itertools;

use crate::gb_sequence::GbSequence;
use crate::utf::utf8sequence::Utf8Sequence;

/// Writes `gb2312 utf-8 unicode char`, e.g. `b0a1 e5958a 21834 啊`.
///
/// Hex bytes are lower case and padded to width two. The last field is the
/// UTF-8 bytes themselves.
pub fn write_row<W: Write>(
    out: &mut W,
    code: GbSequence,
    sequence: &Utf8Sequence,
    scalar: u32,
) -> io::Result<()> {
    write!(
        out,
        "{code} {:2x} {scalar} ",
        sequence.as_bytes().iter().format("")
    )?;
    out.write_all(sequence.as_bytes())?;
    out.write_all(b"\n")
}
