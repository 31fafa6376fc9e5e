//! Pixel ranges and range merging.
//!
//! Category spans are half-open `[min, max)` intervals over viewport widths.
//! [`merge_ranges`] collapses any collection of them into the fewest
//! disjoint intervals covering exactly the same pixels, which is what keeps
//! the generated media queries minimal.

use std::ops::{Range, RangeFrom};

use smallvec::SmallVec;

/// A contiguous span of viewport widths: `min` inclusive, `max` exclusive.
/// `max == None` means the span is unbounded above.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl PixelRange {
    pub const fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub const fn is_unbounded(self) -> bool {
        self.max.is_none()
    }

    pub fn contains(self, width: u32) -> bool {
        width >= self.min && self.max.is_none_or(|max| width < max)
    }
}

impl From<Range<u32>> for PixelRange {
    fn from(value: Range<u32>) -> Self {
        PixelRange::new(value.start, Some(value.end))
    }
}

impl From<RangeFrom<u32>> for PixelRange {
    fn from(value: RangeFrom<u32>) -> Self {
        PixelRange::new(value.start, None)
    }
}

/// Merged ranges, ascending and pairwise non-adjacent. Inline capacity
/// covers a full category table.
pub type MergedRanges = SmallVec<[PixelRange; 4]>;

/// Collapse ranges into the minimal disjoint set covering the same pixels.
///
/// Ranges are sorted by lower bound and walked once; a range that overlaps
/// or exactly abuts the current merged range extends it (upper bound takes
/// the larger of the two), anything else starts a new one. Empty input
/// yields empty output.
pub fn merge_ranges<I>(ranges: I) -> MergedRanges
where
    I: IntoIterator<Item = PixelRange>,
{
    let mut sorted: MergedRanges = ranges.into_iter().collect();
    sorted.sort_by_key(|range| range.min);

    let mut merged = MergedRanges::new();
    for range in sorted {
        let Some(current) = merged.last_mut() else {
            merged.push(range);
            continue;
        };
        match current.max {
            Some(max) if range.min <= max => {
                current.max = match (max, range.max) {
                    (a, Some(b)) => Some(a.max(b)),
                    (_, None) => None,
                };
            }
            Some(_) => merged.push(range),
            // The current range is unbounded; everything after is inside it.
            None => {}
        }
    }
    merged
}
