//! Node style rules, in override order.

use super::ResolvedState;
use crate::graph::{NodeAttributes, NodeDisplay};
use crate::options::StyleOptions;

/// One rule: reads the context, overrides fields on the running display.
type NodeRule = fn(&RuleContext<'_>, &mut NodeDisplay);

/// Everything a rule may read.
struct RuleContext<'a> {
    key: &'a str,
    base: &'a NodeAttributes,
    state: &'a ResolvedState<'a>,
    style: &'a StyleOptions,
}

/// The pipeline, top to bottom. Order is the contract: selection must
/// run after hover dimming to win over it, and search runs last as the
/// else-branch of selection.
const NODE_RULES: [NodeRule; 3] = [
    dim_outside_hover_neighborhood,
    promote_selection,
    emphasize_search_matches,
];

/// Run every rule over a display seeded from the base attributes.
pub(super) fn reduce(
    key: &str,
    base: &NodeAttributes,
    state: &ResolvedState<'_>,
    style: &StyleOptions,
) -> NodeDisplay {
    let ctx = RuleContext {
        key,
        base,
        state,
        style,
    };
    let mut display = NodeDisplay::from_base(base);
    for rule in NODE_RULES {
        rule(&ctx, &mut display);
    }
    display
}

/// Rule 2: while a hovered node has neighbors, everything outside the
/// hovered neighborhood loses its label and desaturates.
fn dim_outside_hover_neighborhood(ctx: &RuleContext<'_>, display: &mut NodeDisplay) {
    if !ctx.state.dimming() || ctx.state.in_hover_neighborhood(ctx.key) {
        return;
    }
    dim(display, ctx.style);
}

/// Rule 3: the selected node is highlighted, overriding any dimming —
/// base styling is restored in full, not merely flagged over.
fn promote_selection(ctx: &RuleContext<'_>, display: &mut NodeDisplay) {
    if ctx.state.selected != Some(ctx.key) {
        return;
    }
    *display = NodeDisplay::from_base(ctx.base);
    display.highlighted = true;
    display.size_multiplier = ctx.style.highlight_size_multiplier;
}

/// Rule 4 (selection's else-branch): while a search is active, matches
/// get their label forced visible and everything else dims.
fn emphasize_search_matches(ctx: &RuleContext<'_>, display: &mut NodeDisplay) {
    if !ctx.state.searching() || ctx.state.selected == Some(ctx.key) {
        return;
    }
    if ctx.state.suggested(ctx.key) {
        display.label.clone_from(&ctx.base.label);
    } else {
        dim(display, ctx.style);
    }
}

/// The shared dim treatment: no label, color pulled toward gray.
fn dim(display: &mut NodeDisplay, style: &StyleOptions) {
    display.label = None;
    display.color = display.color.desaturate(style.dim_strength);
}
