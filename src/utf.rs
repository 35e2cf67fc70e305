pub(crate) mod utf8sequence;

use crate::error::DecodeError;

/// `(mask, expected, length)` for a UTF-8 leading byte. The patterns share
/// prefixes, so they are tested in this order and the first match wins.
const LEADING_PATTERNS: [(u8, u8, usize); 4] = [
    (0b1000_0000, 0b0000_0000, 1),
    (0b1110_0000, 0b1100_0000, 2),
    (0b1111_0000, 0b1110_0000, 3),
    (0b1111_1000, 0b1111_0000, 4),
];

const CONTINUATION_MASK: u8 = 0b1100_0000;
const CONTINUATION_TAG: u8 = 0b1000_0000;
const CONTINUATION_PAYLOAD: u8 = 0b0011_1111;

/// Length in bytes of the sequence introduced by `leading`.
#[inline]
pub fn classify(leading: u8) -> Result<usize, DecodeError> {
    leading_pattern(leading).map(|(_, length)| length)
}

/// Pattern mask and sequence length for `leading`.
#[inline]
pub(crate) fn leading_pattern(leading: u8) -> Result<(u8, usize), DecodeError> {
    LEADING_PATTERNS
        .iter()
        .find(|(mask, expected, _)| leading & mask == *expected)
        .map(|&(mask, _, length)| (mask, length))
        .ok_or(DecodeError::InvalidLeadingByte(leading))
}

#[inline]
pub(crate) const fn is_continuation(byte: u8) -> bool {
    byte & CONTINUATION_MASK == CONTINUATION_TAG
}

#[inline]
pub(crate) const fn payload(byte: u8) -> u32 {
    (byte & CONTINUATION_PAYLOAD) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths() {
        assert_eq!(classify(0x41), Ok(1));
        assert_eq!(classify(0x00), Ok(1));
        assert_eq!(classify(0x7F), Ok(1));
        assert_eq!(classify(0xC2), Ok(2));
        assert_eq!(classify(0xDF), Ok(2));
        assert_eq!(classify(0xE5), Ok(3));
        assert_eq!(classify(0xEF), Ok(3));
        assert_eq!(classify(0xF0), Ok(4));
        assert_eq!(classify(0xF7), Ok(4));
    }

    #[test]
    fn invalid_leading() {
        assert_eq!(classify(0x80), Err(DecodeError::InvalidLeadingByte(0x80)));
        assert_eq!(classify(0xBF), Err(DecodeError::InvalidLeadingByte(0xBF)));
        assert_eq!(classify(0xF8), Err(DecodeError::InvalidLeadingByte(0xF8)));
        assert_eq!(classify(0xFF), Err(DecodeError::InvalidLeadingByte(0xFF)));
    }

    #[test]
    fn every_byte_agrees_with_leading_ones() {
        for byte in u8::MIN..=u8::MAX {
            let expected = match byte.leading_ones() {
                0 => Some(1),
                n @ 2..=4 => Some(n as usize),
                _ => None,
            };
            assert_eq!(classify(byte).ok(), expected, "{byte:#04x}");
        }
    }

    #[test]
    fn continuation() {
        assert!(is_continuation(0x80));
        assert!(is_continuation(0xBF));
        assert!(!is_continuation(0x7F));
        assert!(!is_continuation(0xC0));
        assert_eq!(payload(0x95), 0x15);
    }
}
