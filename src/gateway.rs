use std::ops::RangeInclusive;

use encoding_rs::{Encoding, UTF_8};

use crate::error::GatewayError;
use crate::gb_sequence::GbSequence;
use crate::utf::utf8sequence::Utf8Sequence;

const PRIVATE_USE_AREA: RangeInclusive<char> = '\u{E000}'..='\u{F8FF}';

/// Converts one GB2312 code to its UTF-8 sequence.
pub trait ConversionGateway {
    fn convert(&self, code: GbSequence) -> Result<Utf8Sequence, GatewayError>;
}

impl<F> ConversionGateway for F
where
    F: Fn(GbSequence) -> Result<Utf8Sequence, GatewayError>,
{
    fn convert(&self, code: GbSequence) -> Result<Utf8Sequence, GatewayError> {
        self(code)
    }
}

/// Conversion backed by an `encoding_rs` decoder. Only UTF-8 output is
/// supported, which is all `encoding_rs` decodes to.
#[derive(Debug)]
pub struct EncodingGateway {
    source: &'static Encoding,
}

impl EncodingGateway {
    pub fn open(source_label: &str, target_label: &str) -> Result<Self, GatewayError> {
        let source = Encoding::for_label(source_label.as_bytes());
        let target = Encoding::for_label(target_label.as_bytes());
        match (source, target) {
            (Some(source), Some(target)) if target == UTF_8 => Ok(Self { source }),
            _ => Err(GatewayError::Open {
                source_label: source_label.to_owned(),
                target_label: target_label.to_owned(),
            }),
        }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }
}

impl ConversionGateway for EncodingGateway {
    fn convert(&self, code: GbSequence) -> Result<Utf8Sequence, GatewayError> {
        let bytes = code.bytes();
        let decoded = self
            .source
            .decode_without_bom_handling_and_without_replacement(&bytes)
            .ok_or(GatewayError::Unmapped(code))?;
        // A single code must come back as a single assigned scalar. Reserved
        // cells decode into the Private Use Area.
        let mut chars = decoded.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !PRIVATE_USE_AREA.contains(&c) => {}
            _ => return Err(GatewayError::Unmapped(code)),
        }
        Utf8Sequence::new(decoded.as_bytes()).ok_or(GatewayError::Unmapped(code))
    }
}
