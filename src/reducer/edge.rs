//! Edge visibility rules.

use super::ResolvedState;
use crate::graph::{EdgeAttributes, EdgeDisplay};

/// Derive an edge's display from its endpoints and the resolved state.
///
/// An edge hides when a hover is live and neither endpoint is the
/// hovered node nor one of its neighbors, and when a search is active
/// and either endpoint falls outside the suggestion set. The two
/// conditions stack: surviving one does not exempt an edge from the
/// other.
pub(super) fn reduce(
    source: &str,
    target: &str,
    base: &EdgeAttributes,
    state: &ResolvedState<'_>,
) -> EdgeDisplay {
    let mut display = EdgeDisplay::from_base(base);

    if state.hovered.is_some()
        && !state.in_hover_neighborhood(source)
        && !state.in_hover_neighborhood(target)
    {
        display.hidden = true;
    }

    if state.searching()
        && !(state.suggested(source) && state.suggested(target))
    {
        display.hidden = true;
    }

    display
}
