//! Camera-synchronized positioning for world-anchored overlay elements.
//!
//! Cluster labels and legends are rendered by an external overlay layer
//! (DOM, egui, anything outside the canvas draw pipeline). This module
//! keeps their screen positions locked to the canvas: positions are
//! recomputed once per post-render signal from the camera state as of
//! that signal, so overlays can never tear against the canvas.

mod anchor;
mod sync;

pub use anchor::OverlayAnchor;
pub use sync::OverlaySynchronizer;
