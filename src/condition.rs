//! Persisted condition records and editor-facing selection types.
//!
//! The only artifact written to durable configuration is
//! [`ResponsiveCondition`]; everything else here is the thin data contract
//! between the codec and the surrounding condition editor (its form
//! renderer and localization function live elsewhere).

use strum::IntoEnumIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::breakpoint::{Breakpoint, BreakpointSet};

/// Condition tag the generic condition engine routes on.
pub const RESPONSIVE_CONDITION: &str = "responsive";

/// Persisted form of a responsive visibility rule.
///
/// `media_query` is either empty (the rule is unset) or a canonical string
/// produced by [`MediaQueryCodec::encode`](crate::MediaQueryCodec::encode).
/// Records read back from configuration should be checked with
/// [`MediaQueryCodec::validate`](crate::MediaQueryCodec::validate) before
/// being round-tripped through the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResponsiveCondition {
    /// Always [`RESPONSIVE_CONDITION`].
    pub condition: String,
    /// Canonical media query, or empty when the rule is unset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub media_query: String,
}

impl ResponsiveCondition {
    pub fn new(media_query: impl Into<String>) -> Self {
        Self {
            condition: RESPONSIVE_CONDITION.to_string(),
            media_query: media_query.into(),
        }
    }
}

impl Default for ResponsiveCondition {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Multi-select state of the condition editor: the user-facing category
/// list, kept in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BreakpointSelection {
    #[cfg_attr(feature = "serde", serde(default))]
    pub breakpoints: Vec<Breakpoint>,
}

impl From<BreakpointSet> for BreakpointSelection {
    fn from(set: BreakpointSet) -> Self {
        Self {
            breakpoints: set.breakpoints(),
        }
    }
}

impl From<BreakpointSelection> for BreakpointSet {
    fn from(selection: BreakpointSelection) -> Self {
        selection.breakpoints.into_iter().collect()
    }
}

impl From<&BreakpointSelection> for BreakpointSet {
    fn from(selection: &BreakpointSelection) -> Self {
        selection.breakpoints.iter().copied().collect()
    }
}

/// One entry of the category multi-select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointOption {
    /// Stable value stored in the selection state.
    pub value: &'static str,
    /// Human-readable label from the caller's localization function.
    pub label: String,
}

/// Options for the category multi-select, one per category in table order.
///
/// `localize` receives the category and its lower pixel bound (`None` for
/// the zero-based first category) and returns the displayed label, e.g.
/// `"Tablet (min 768px)"`.
pub fn breakpoint_options<F>(localize: F) -> Vec<BreakpointOption>
where
    F: Fn(Breakpoint, Option<u32>) -> String,
{
    Breakpoint::iter()
        .map(|breakpoint| {
            let min = breakpoint.min_width();
            BreakpointOption {
                value: breakpoint.label(),
                label: localize(breakpoint, (min > 0).then_some(min)),
            }
        })
        .collect()
}
