//! Precomputed category-combination lookup tables.
//!
//! Every non-empty combination of categories gets its canonical query
//! computed once, up front; encode and decode are then plain map lookups on
//! the editor's render path. With four categories that is 15 entries.

use rustc_hash::FxHashMap;
use strum::EnumCount;

use crate::breakpoint::{Breakpoint, BreakpointFlags, BreakpointSet};
use crate::query::build_query;
use crate::range::merge_ranges;

/// Canonical map key for a category set: sorted labels joined by `_`.
/// Two sets derive the same key iff they contain the same categories.
pub(crate) fn canonical_key(set: BreakpointSet) -> String {
    let mut labels: Vec<&'static str> = set
        .breakpoints()
        .into_iter()
        .map(Breakpoint::label)
        .collect();
    labels.sort_unstable();
    labels.join("_")
}

/// The two lookup tables backing the codec, immutable once built.
#[derive(Debug)]
pub(crate) struct CombinationIndex {
    by_key: FxHashMap<String, String>,
    by_query: FxHashMap<String, BreakpointSet>,
}

impl CombinationIndex {
    pub(crate) fn build() -> Self {
        let mut by_key = FxHashMap::default();
        let mut by_query = FxHashMap::default();

        // Every non-empty subset of categories, as a bitmask over the flags.
        for bits in 1..(1u8 << Breakpoint::COUNT) {
            let set = BreakpointSet::from_flags(BreakpointFlags::from_bits_truncate(bits));
            let spans = set.breakpoints().into_iter().map(Breakpoint::span);
            let query = build_query(&merge_ranges(spans));

            by_key.insert(canonical_key(set), query.clone());
            by_query.insert(query, set);
        }

        // Distinct sets always merge to distinct queries because category
        // spans tile the axis without gaps or duplicate boundaries.
        debug_assert_eq!(by_key.len(), by_query.len());

        Self { by_key, by_query }
    }

    pub(crate) fn query_for(&self, key: &str) -> Option<&str> {
        self.by_key.get(key).map(String::as_str)
    }

    pub(crate) fn set_for(&self, query: &str) -> Option<BreakpointSet> {
        self.by_query.get(query).copied()
    }
}

#[cfg(test)]
mod tests {
    use strum::EnumCount;

    use super::{canonical_key, CombinationIndex};
    use crate::breakpoint::{Breakpoint, BreakpointFlags, BreakpointSet};

    #[test]
    fn keys_sort_labels_lexicographically() {
        assert_eq!(canonical_key(BreakpointSet::MOBILE), "mobile");
        assert_eq!(
            canonical_key(BreakpointSet::MOBILE | BreakpointSet::TABLET),
            "mobile_tablet"
        );
        assert_eq!(
            canonical_key(BreakpointSet::MOBILE | BreakpointSet::DESKTOP),
            "desktop_mobile"
        );
        assert_eq!(
            canonical_key(BreakpointSet::ALL),
            "desktop_mobile_tablet_wide"
        );
    }

    #[test]
    fn every_combination_is_indexed() {
        let index = CombinationIndex::build();
        let combinations = (1usize << Breakpoint::COUNT) - 1;

        for bits in 1..=combinations as u8 {
            let set = BreakpointSet::from_flags(BreakpointFlags::from_bits_truncate(bits));
            let query = index
                .query_for(&canonical_key(set))
                .expect("every non-empty combination has a query");
            assert!(!query.is_empty());
            assert_eq!(index.set_for(query), Some(set));
        }
    }

    #[test]
    fn queries_are_unique_per_set() {
        let index = CombinationIndex::build();
        assert_eq!(
            index.by_key.len(),
            (1usize << Breakpoint::COUNT) - 1,
            "one entry per non-empty combination"
        );
        assert_eq!(index.by_key.len(), index.by_query.len());
    }
}
