//! Breakpoint categories and category sets.
//!
//! The category table is literal configuration: four named buckets in
//! ascending lower-bound order, tiling the width axis contiguously from
//! zero. Edit the table by editing [`MIN_WIDTHS`] and the [`Breakpoint`]
//! variants together; nothing here is derived.

use std::ops::{BitOr, Bound, RangeBounds};

use bitflags::bitflags;
use strum::{EnumCount, IntoEnumIterator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::range::PixelRange;

/// Lower pixel bound of each category, in [`Breakpoint`] order. The last
/// category has no upper bound. Strictly increasing, starting at zero.
pub const MIN_WIDTHS: [u32; Breakpoint::COUNT] = [0, 768, 1024, 1280];

/// Named viewport-width buckets, ordered by ascending lower bound.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
#[derive(
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::EnumCount,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
    Wide,
}

impl Breakpoint {
    /// Stable lowercase label, as stored in selection state and map keys.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Lowest viewport width (inclusive) that falls in this category.
    pub const fn min_width(self) -> u32 {
        MIN_WIDTHS[self as usize]
    }

    /// The `[min, max)` span of viewport widths covered by this category.
    pub fn span(self) -> PixelRange {
        let index = self as usize;
        PixelRange::new(MIN_WIDTHS[index], MIN_WIDTHS.get(index + 1).copied())
    }

    /// Category whose span contains the given viewport width.
    pub fn for_width(width: u32) -> Breakpoint {
        // Categories tile the axis from zero, so every width matches one.
        Breakpoint::iter()
            .rev()
            .find(|breakpoint| width >= breakpoint.min_width())
            .unwrap_or(Breakpoint::Mobile)
    }

    const fn flag(self) -> BreakpointFlags {
        match self {
            Breakpoint::Mobile => BreakpointFlags::MOBILE,
            Breakpoint::Tablet => BreakpointFlags::TABLET,
            Breakpoint::Desktop => BreakpointFlags::DESKTOP,
            Breakpoint::Wide => BreakpointFlags::WIDE,
        }
    }
}

bitflags! {
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd)]
    #[must_use]
    pub struct BreakpointFlags: u8 {
        const MOBILE = 1;
        const TABLET = 2;
        const DESKTOP = 4;
        const WIDE = 8;
    }
}

fn next(set: BreakpointSet) -> BreakpointSet {
    BreakpointSet {
        flags: BreakpointFlags::from_bits(set.flags.bits() * 2).unwrap(),
    }
}

fn prev(set: BreakpointSet) -> BreakpointSet {
    BreakpointSet {
        flags: BreakpointFlags::from_bits(set.flags.bits() / 2).unwrap(),
    }
}

/// Set covering a contiguous band of categories.
///
/// ```
/// use responsive_query::breakpoint::{range, BreakpointSet};
///
/// let tablet_and_up = range(BreakpointSet::TABLET..);
/// assert_eq!(
///     tablet_and_up,
///     BreakpointSet::TABLET | BreakpointSet::DESKTOP | BreakpointSet::WIDE
/// );
/// ```
pub fn range<R: RangeBounds<BreakpointSet>>(range: R) -> BreakpointSet {
    let start = match range.start_bound() {
        Bound::Included(i) => *i,
        Bound::Excluded(e) => next(*e),
        Bound::Unbounded => BreakpointSet::MOBILE,
    };
    let end = match range.end_bound() {
        Bound::Included(s) => *s,
        Bound::Excluded(e) => prev(*e),
        Bound::Unbounded => BreakpointSet::WIDE,
    };
    // Take the first enabled flag from the start and the last from the end,
    // so a set with multiple flags (e.g. MOBILE|TABLET) still works as a
    // bound.
    let lowest_start: BreakpointFlags = start.flags.iter().next().unwrap();
    let highest_end: BreakpointFlags = end.flags.iter().last().unwrap();

    let mask = highest_end.bits() - lowest_start.bits();
    // Subtract to get all the flags between the two, and then OR to ensure
    // everything in the range is set.
    let result =
        BreakpointFlags::from_bits(highest_end.bits() | mask | lowest_start.bits()).unwrap();

    BreakpointSet { flags: result }
}

/// A set of breakpoint categories.
///
/// Selection order never matters: two sets are equal iff they contain the
/// same categories, whatever order they were built in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BreakpointSet {
    flags: BreakpointFlags,
}

impl BreakpointSet {
    pub const EMPTY: BreakpointSet = BreakpointSet::new(BreakpointFlags::empty());
    pub const MOBILE: BreakpointSet = BreakpointSet::new(BreakpointFlags::MOBILE);
    pub const TABLET: BreakpointSet = BreakpointSet::new(BreakpointFlags::TABLET);
    pub const DESKTOP: BreakpointSet = BreakpointSet::new(BreakpointFlags::DESKTOP);
    pub const WIDE: BreakpointSet = BreakpointSet::new(BreakpointFlags::WIDE);
    pub const ALL: BreakpointSet = BreakpointSet::new(BreakpointFlags::all());

    const fn new(flags: BreakpointFlags) -> Self {
        Self { flags }
    }

    /// Set with every category except those in `set`.
    pub const fn not(set: BreakpointSet) -> Self {
        let flags = BreakpointFlags::all().difference(set.flags);
        Self { flags }
    }

    pub const fn from_flags(flags: BreakpointFlags) -> Self {
        Self { flags }
    }

    pub const fn flags(self) -> BreakpointFlags {
        self.flags
    }

    pub fn contains(self, breakpoint: Breakpoint) -> bool {
        self.flags.contains(breakpoint.flag())
    }

    pub fn is_empty(self) -> bool {
        self.flags.is_empty()
    }

    pub fn len(self) -> usize {
        self.flags.bits().count_ones() as usize
    }

    /// Selected categories in table order.
    pub fn breakpoints(self) -> Vec<Breakpoint> {
        Breakpoint::iter()
            .filter(|breakpoint| self.contains(*breakpoint))
            .collect()
    }

    /// Parse a set from selection-state labels.
    ///
    /// An unknown label is a caller error and rejects the whole set.
    pub fn from_labels<I>(labels: I) -> Result<BreakpointSet, strum::ParseError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        labels
            .into_iter()
            .map(|label| label.as_ref().parse::<Breakpoint>())
            .collect()
    }
}

impl From<Breakpoint> for BreakpointSet {
    fn from(breakpoint: Breakpoint) -> Self {
        BreakpointSet::new(breakpoint.flag())
    }
}

impl FromIterator<Breakpoint> for BreakpointSet {
    fn from_iter<T: IntoIterator<Item = Breakpoint>>(iter: T) -> Self {
        iter.into_iter()
            .fold(BreakpointSet::EMPTY, |set, breakpoint| {
                set | BreakpointSet::from(breakpoint)
            })
    }
}

impl BitOr for BreakpointSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.flags | rhs.flags)
    }
}
