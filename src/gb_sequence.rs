use std::{fmt, ops::RangeInclusive};

use itertools::iproduct;

/// Offset added to a block or position number to form a GB2312 byte.
pub const GB2312_OFFSET: u8 = 0xA0;
pub const POSITIONS_PER_BLOCK: u8 = 94;

/// Closed interval of GB2312 block numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockRange {
    start: u8,
    end: u8,
}

impl BlockRange {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }
    pub const fn blocks(&self) -> RangeInclusive<u8> {
        self.start..=self.end
    }
    /// Zero when `start > end`.
    pub fn code_count(&self) -> usize {
        self.blocks().len() * POSITIONS_PER_BLOCK as usize
    }
}

/// Symbol blocks, then first and second class hanzi. Blocks 10-15 and 88-94 are reserved.
pub const GB2312_BLOCKS: [BlockRange; 2] = [BlockRange::new(1, 9), BlockRange::new(16, 87)];

/// A two byte GB2312 code, e.g. `b0a1` for block 16 position 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GbSequence([u8; 2]);

impl GbSequence {
    #[inline]
    pub fn encode(block: u8, position: u8) -> Self {
        debug_assert!((1..=POSITIONS_PER_BLOCK).contains(&block));
        debug_assert!((1..=POSITIONS_PER_BLOCK).contains(&position));
        Self([block + GB2312_OFFSET, position + GB2312_OFFSET])
    }
    pub const fn bytes(&self) -> [u8; 2] {
        self.0
    }
    pub const fn block(&self) -> u8 {
        self.0[0] - GB2312_OFFSET
    }
    pub const fn position(&self) -> u8 {
        self.0[1] - GB2312_OFFSET
    }
}

impl fmt::Display for GbSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:2x}{:2x}", self.0[0], self.0[1])
    }
}

/// Every `(block, position)` pair of `ranges`, ranges in order, then blocks
/// ascending, then positions 1..=94. Clone the iterator to restart it.
pub fn code_points_in(
    ranges: &[BlockRange],
) -> impl Iterator<Item = (u8, u8)> + Clone + '_ {
    ranges
        .iter()
        .flat_map(|range| iproduct!(range.blocks(), 1..=POSITIONS_PER_BLOCK))
}

pub fn code_points() -> impl Iterator<Item = (u8, u8)> + Clone {
    code_points_in(&GB2312_BLOCKS)
}

pub fn code_count(ranges: &[BlockRange]) -> usize {
    ranges.iter().map(BlockRange::code_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_first_hanzi() {
        let code = GbSequence::encode(16, 1);
        assert_eq!(code.bytes(), [0xB0, 0xA1]);
        assert_eq!(code.block(), 16);
        assert_eq!(code.position(), 1);
        assert_eq!(code.to_string(), "b0a1");
    }

    #[test]
    fn encode_bounds() {
        assert_eq!(GbSequence::encode(1, 1).bytes(), [0xA1, 0xA1]);
        assert_eq!(GbSequence::encode(87, 94).bytes(), [0xF7, 0xFE]);
    }

    #[test]
    fn encoded_bytes_in_range() {
        for (block, position) in code_points() {
            let [lead, trail] = GbSequence::encode(block, position).bytes();
            assert!((0xA1..=0xF7).contains(&lead));
            assert!((0xA1..=0xFE).contains(&trail));
            assert!(!(0xAA..=0xAF).contains(&lead));
        }
    }

    #[test]
    fn count() {
        assert_eq!(code_points().count(), 7614);
        assert_eq!(code_count(&GB2312_BLOCKS), 7614);
    }

    #[test]
    fn order() {
        let points: Vec<_> = code_points().collect();
        assert_eq!(points[0], (1, 1));
        assert_eq!(points[93], (1, 94));
        assert_eq!(points[94], (2, 1));
        assert_eq!(points[9 * 94], (16, 1));
        assert_eq!(points.last(), Some(&(87, 94)));
        assert!(points
            .windows(2)
            .all(|pair| (pair[0].0, pair[0].1) < (pair[1].0, pair[1].1)));
    }

    #[test]
    fn restartable() {
        let points = code_points();
        let first: Vec<_> = points.clone().take(3).collect();
        let again: Vec<_> = points.take(3).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn empty_range() {
        let range = BlockRange::new(5, 3);
        assert_eq!(range.code_count(), 0);
        assert_eq!(code_points_in(&[range]).count(), 0);
        assert_eq!(BlockRange::new(7, 7).code_count(), 94);
    }

    #[test]
    fn custom_ranges() {
        let ranges = [BlockRange::new(3, 3), BlockRange::new(1, 1)];
        let points: Vec<_> = code_points_in(&ranges).collect();
        assert_eq!(points.len(), 188);
        assert_eq!(points[0], (3, 1));
        assert_eq!(points[94], (1, 1));
    }
}
