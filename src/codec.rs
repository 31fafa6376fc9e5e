//! The category-set ⇄ media-query codec.

use std::sync::LazyLock;

use crate::breakpoint::BreakpointSet;
use crate::condition::ResponsiveCondition;
use crate::index::{canonical_key, CombinationIndex};

static GLOBAL: LazyLock<MediaQueryCodec> = LazyLock::new(MediaQueryCodec::new);

/// Bidirectional codec between breakpoint sets and canonical media queries.
///
/// All lookup tables are precomputed in [`new`](MediaQueryCodec::new) and
/// immutable afterwards; every operation is a pure function over them, so a
/// codec can be shared freely across threads.
#[derive(Debug)]
pub struct MediaQueryCodec {
    index: CombinationIndex,
}

impl MediaQueryCodec {
    pub fn new() -> Self {
        Self {
            index: CombinationIndex::build(),
        }
    }

    /// Shared process-wide instance. Construction is a pure function of the
    /// breakpoint table, so building it lazily behind a `LazyLock` is safe
    /// from any thread.
    pub fn global() -> &'static MediaQueryCodec {
        &GLOBAL
    }

    /// Canonical media query for a set of categories.
    ///
    /// The empty set encodes to the empty string, the documented "no
    /// condition" state, not an error. Every non-empty set has a precomputed
    /// query; adjacent selections collapse to minimal clauses and selecting
    /// everything yields an explicit always-true query.
    pub fn encode(&self, set: BreakpointSet) -> String {
        if set.is_empty() {
            return String::new();
        }
        // A miss can only happen if the index was built from a different
        // category table than the set, and there is only one table.
        self.index
            .query_for(&canonical_key(set))
            .expect("combination index covers every non-empty set")
            .to_string()
    }

    /// Category set for a media query produced by [`encode`](Self::encode).
    ///
    /// The empty string decodes to the empty set ("unset"). A non-empty
    /// query this codec never produced (hand-written, or built from other
    /// breakpoint definitions) is reported as `None`; callers should show
    /// an empty selection while leaving the stored string untouched, so
    /// nothing is lost until the user actually edits the rule.
    pub fn decode(&self, query: &str) -> Option<BreakpointSet> {
        if query.is_empty() {
            return Some(BreakpointSet::EMPTY);
        }
        self.index.set_for(query)
    }

    /// Whether a query can round-trip through this codec: empty, or one of
    /// the canonical precomputed strings.
    pub fn is_representable(&self, query: &str) -> bool {
        query.is_empty() || self.index.set_for(query).is_some()
    }

    /// Validation hook for externally supplied condition records.
    pub fn validate(&self, condition: &ResponsiveCondition) -> bool {
        self.is_representable(&condition.media_query)
    }
}

impl Default for MediaQueryCodec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use strum::EnumCount;

    use super::MediaQueryCodec;
    use crate::breakpoint::{range, Breakpoint, BreakpointFlags, BreakpointSet};
    use crate::condition::ResponsiveCondition;

    fn all_non_empty_sets() -> impl Iterator<Item = BreakpointSet> {
        (1..(1u8 << Breakpoint::COUNT))
            .map(|bits| BreakpointSet::from_flags(BreakpointFlags::from_bits_truncate(bits)))
    }

    #[test]
    fn every_set_round_trips() {
        let codec = MediaQueryCodec::new();
        for set in all_non_empty_sets() {
            let query = codec.encode(set);
            assert_eq!(codec.decode(&query), Some(set), "query: {query:?}");
        }
    }

    #[test]
    fn encode_ignores_input_order() {
        let codec = MediaQueryCodec::new();
        let forward: BreakpointSet = [Breakpoint::Mobile, Breakpoint::Wide, Breakpoint::Tablet]
            .into_iter()
            .collect();
        let backward: BreakpointSet = [Breakpoint::Tablet, Breakpoint::Wide, Breakpoint::Mobile]
            .into_iter()
            .collect();
        assert_eq!(codec.encode(forward), codec.encode(backward));
    }

    #[test]
    fn empty_set_is_unset() {
        let codec = MediaQueryCodec::new();
        assert_eq!(codec.encode(BreakpointSet::EMPTY), "");
        assert_eq!(codec.decode(""), Some(BreakpointSet::EMPTY));
    }

    #[test]
    fn adjacent_categories_merge_into_one_clause() {
        let codec = MediaQueryCodec::new();
        let query = codec.encode(BreakpointSet::MOBILE | BreakpointSet::TABLET);
        assert_eq!(query, "(max-width: 1023px)");
    }

    #[test]
    fn non_adjacent_categories_stay_separate_clauses() {
        let codec = MediaQueryCodec::new();
        let set = BreakpointSet::MOBILE | BreakpointSet::DESKTOP;
        let query = codec.encode(set);
        assert_eq!(
            query,
            "(max-width: 767px), (min-width: 1024px) and (max-width: 1279px)"
        );
        assert_eq!(codec.decode(&query), Some(set));
    }

    #[test]
    fn interior_and_tail_clauses() {
        let codec = MediaQueryCodec::new();
        assert_eq!(
            codec.encode(BreakpointSet::TABLET),
            "(min-width: 768px) and (max-width: 1023px)"
        );
        assert_eq!(codec.encode(BreakpointSet::WIDE), "(min-width: 1280px)");
        assert_eq!(
            codec.encode(BreakpointSet::DESKTOP | BreakpointSet::WIDE),
            "(min-width: 1024px)"
        );
        assert_eq!(
            codec.encode(range(BreakpointSet::MOBILE..=BreakpointSet::DESKTOP)),
            "(max-width: 1279px)"
        );
    }

    #[test]
    fn unknown_query_is_absent() {
        let codec = MediaQueryCodec::new();
        assert_eq!(codec.decode("(min-width: 999px)"), None);
        assert!(!codec.is_representable("(min-width: 999px)"));
    }

    #[test]
    fn full_coverage_round_trips() {
        let codec = MediaQueryCodec::new();
        let query = codec.encode(BreakpointSet::ALL);
        assert!(!query.is_empty(), "full coverage must stay distinguishable from unset");
        assert_eq!(codec.decode(&query), Some(BreakpointSet::ALL));
    }

    #[test]
    fn representability_matches_decode() {
        let codec = MediaQueryCodec::new();
        assert!(codec.is_representable(""));
        for set in all_non_empty_sets() {
            assert!(codec.is_representable(&codec.encode(set)));
        }
    }

    #[test]
    fn validates_condition_records() {
        let codec = MediaQueryCodec::new();
        assert!(codec.validate(&ResponsiveCondition::default()));
        assert!(codec.validate(&ResponsiveCondition::new(
            codec.encode(BreakpointSet::TABLET | BreakpointSet::WIDE)
        )));
        assert!(!codec.validate(&ResponsiveCondition::new("(min-width: 5px)")));
    }

    #[test]
    fn global_instance_is_shared() {
        let a = MediaQueryCodec::global();
        let b = MediaQueryCodec::global();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.encode(BreakpointSet::MOBILE), "(max-width: 767px)");
    }
}
