use crate::error::DecodeError;
use crate::utf::*;

/// Up to four UTF-8 bytes with an explicit length. The bytes past
/// `length` are always zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Utf8Sequence {
    length: u8,
    bytes: [u8; 4],
}

impl Utf8Sequence {
    /// `None` unless `input` holds one to four bytes.
    pub fn new(input: &[u8]) -> Option<Self> {
        if input.is_empty() || input.len() > 4 {
            return None;
        }
        let mut bytes = [0; 4];
        bytes[..input.len()].copy_from_slice(input);
        Some(Self {
            length: input.len() as u8,
            bytes,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    pub const fn len(&self) -> usize {
        self.length as usize
    }

    /// Length announced by the leading byte.
    pub fn full_len(&self) -> Result<usize, DecodeError> {
        classify(self.bytes[0])
    }

    /// Unicode scalar value of the sequence.
    ///
    /// The leading byte is classified, its pattern bits masked off, and the
    /// low six bits of each continuation byte shifted in. Continuation bytes
    /// must match `10xxxxxx`; the scalar is not checked for being assigned,
    /// overlong, or a surrogate.
    pub fn decode(&self) -> Result<u32, DecodeError> {
        let leading = self.bytes[0];
        let (mask, full_len) = leading_pattern(leading)?;
        if full_len != self.len() {
            return Err(DecodeError::LengthMismatch {
                expected: full_len,
                actual: self.len(),
            });
        }
        if full_len == 1 {
            return Ok(leading as u32);
        }
        let mut codepoint = (leading & !mask) as u32;
        for (index, &byte) in self.as_bytes().iter().enumerate().skip(1) {
            if !is_continuation(byte) {
                return Err(DecodeError::InvalidContinuationByte { index, byte });
            }
            codepoint = (codepoint << 6) | payload(byte);
        }
        Ok(codepoint)
    }
}
