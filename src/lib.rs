//! # Responsive Query
//! A bidirectional codec between named viewport breakpoints and canonical
//! CSS media-query strings.
//!
//! A display-responsive rule ("show this element on tablet and wide
//! screens") is edited as a set of breakpoint categories, but persisted as a
//! single media-query string so that a generic condition engine that only
//! understands media queries can evaluate it. This crate owns the
//! translation in both directions.
//!
//! ## Example
//! ```rust
//! use responsive_query::{BreakpointSet, MediaQueryCodec};
//!
//! let codec = MediaQueryCodec::new();
//!
//! // Adjacent categories collapse into one minimal clause.
//! let set = BreakpointSet::MOBILE | BreakpointSet::TABLET;
//! let query = codec.encode(set);
//! assert_eq!(query, "(max-width: 1023px)");
//!
//! // The canonical string decodes back to the same set.
//! assert_eq!(codec.decode(&query), Some(set));
//!
//! // Hand-written queries the codec never produced are reported absent,
//! // not treated as errors.
//! assert_eq!(codec.decode("(min-width: 999px)"), None);
//! ```
//!
//! ## Canonical queries
//! The four categories in [`breakpoint`] tile the width axis contiguously,
//! so any selection reduces to a few half-open pixel ranges. Those are
//! merged ([`range::merge_ranges`]) into the fewest disjoint spans, each
//! span becomes a `(min-width: …)`/`(max-width: …)` clause, and clauses are
//! joined with `", "` (logical OR). All 15 non-empty combinations of
//! categories are precomputed into a pair of lookup tables at construction,
//! which makes [`MediaQueryCodec::encode`] and [`MediaQueryCodec::decode`]
//! cheap enough for the editor's render path.
//!
//! ## Unset versus absent
//! The empty string is the "no condition" state: encoding the empty set
//! produces it and decoding it yields the empty set. A *non-empty* query
//! with no canonical counterpart decodes to `None` instead; the editor
//! shows an empty selection but must keep the original string until the
//! user edits the rule, so hand-authored queries are never silently
//! rewritten. Selecting every category covers the whole axis and encodes to
//! an explicit always-true query rather than the empty string, keeping the
//! two states distinguishable.

pub mod breakpoint;
mod codec;
pub mod condition;
mod index;
mod query;
pub mod range;

pub use breakpoint::{Breakpoint, BreakpointFlags, BreakpointSet};
pub use codec::MediaQueryCodec;
pub use condition::{
    breakpoint_options, BreakpointOption, BreakpointSelection, ResponsiveCondition,
    RESPONSIVE_CONDITION,
};
pub use range::PixelRange;
