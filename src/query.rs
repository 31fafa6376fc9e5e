//! Media-query string construction.

use crate::range::PixelRange;

/// Query emitted for a selection that covers the entire width axis. A real,
/// always-true width query, so it stays distinguishable from the empty
/// "unset" string and survives a decode round trip.
pub(crate) const ALWAYS_TRUE_QUERY: &str = "(min-width: 0px)";

/// Clause for one merged range, e.g. `(min-width: 768px) and
/// (max-width: 1023px)`.
///
/// A range starting at zero needs no `min-width` clause and an unbounded
/// range needs no `max-width` clause, so the full axis produces an empty
/// clause. The exclusive upper bound becomes an inclusive `max-width`.
pub(crate) fn range_clause(range: PixelRange) -> String {
    let mut query = Vec::new();
    if range.min > 0 {
        query.push(format!("(min-width: {}px)", range.min));
    }
    if let Some(max) = range.max {
        query.push(format!("(max-width: {}px)", max - 1));
    }
    query.join(" and ")
}

/// Join per-range clauses into one query; the comma is a logical OR.
///
/// Ranges that produced no clause text are dropped. If a non-empty set of
/// ranges drops every clause (the whole axis in one unbounded range), the
/// result is [`ALWAYS_TRUE_QUERY`] rather than the empty string.
pub(crate) fn build_query(ranges: &[PixelRange]) -> String {
    let clauses: Vec<String> = ranges
        .iter()
        .map(|range| range_clause(*range))
        .filter(|clause| !clause.is_empty())
        .collect();

    if clauses.is_empty() && !ranges.is_empty() {
        return ALWAYS_TRUE_QUERY.to_string();
    }
    clauses.join(", ")
}
