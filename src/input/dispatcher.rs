//! Builds the input handler that the engine invokes for pointer events.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::{PointerEvent, Refresh};
use crate::graph::GraphRead;
use crate::host::InputHandler;
use crate::interaction::InteractionTracker;

/// Forwards engine pointer events into the interaction tracker.
///
/// The dispatcher itself is stateless; [`handler`](Self::handler)
/// produces the boxed closure a [`RenderHost`](crate::host::RenderHost)
/// installs. Installation replaces any previous handler wholesale, so a
/// remounted view can never stack a second forwarding path on top of the
/// first.
pub struct EventDispatcher;

impl EventDispatcher {
    /// Build the forwarding handler over shared graph and tracker
    /// handles.
    ///
    /// Hover events become [`InteractionTracker::set_hover`], node clicks
    /// become selection, background clicks clear the selection. The
    /// returned [`Refresh`] hint is [`Refresh::Style`] exactly when the
    /// snapshot changed.
    #[must_use]
    pub fn handler<G: GraphRead + 'static>(
        graph: Rc<RefCell<G>>,
        tracker: InteractionTracker,
    ) -> InputHandler {
        Box::new(move |event| {
            let graph = graph.borrow();
            let changed = match event {
                PointerEvent::EnterNode { key } => {
                    tracker.set_hover(&*graph, Some(&key))
                }
                PointerEvent::LeaveNode { .. } => tracker.set_hover(&*graph, None),
                PointerEvent::ClickNode { key } => {
                    tracker.set_selection(Some(&key))
                }
                PointerEvent::ClickBackground => tracker.set_selection(None),
            };
            if changed {
                Refresh::Style
            } else {
                Refresh::None
            }
        })
    }
}
