//! Platform-agnostic pointer events.
//!
//! These are produced by the rendering engine's hit-testing layer and fed
//! into the handler installed by
//! [`EventDispatcher`](super::EventDispatcher). The engine decides what
//! counts as a hover or a click; this vocabulary only names the outcome.

use crate::graph::EntityKey;

/// A pointer interaction resolved against the graph by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    /// Cursor entered a node's hit area.
    EnterNode {
        /// The node under the cursor.
        key: EntityKey,
    },
    /// Cursor left a node's hit area.
    LeaveNode {
        /// The node that was under the cursor.
        key: EntityKey,
    },
    /// Primary click landed on a node.
    ClickNode {
        /// The clicked node.
        key: EntityKey,
    },
    /// Primary click landed on empty canvas.
    ClickBackground,
}

/// Repaint hint returned to the engine after an event is dispatched.
///
/// The engine owns paint scheduling (normally one paint per animation
/// frame); `Style` tells it only display attributes changed, so it may
/// take its skip-reindex fast path instead of rebuilding spatial indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Refresh {
    /// Nothing changed; no repaint needed.
    #[default]
    None,
    /// Interaction state changed: repaint styles, topology untouched.
    Style,
}
