//! Transient interaction state: hover, selection, search.
//!
//! The [`InteractionTracker`] owns the one canonical
//! [`InteractionState`] snapshot. Installed style closures and the event
//! dispatcher each hold a cheap tracker clone and read the current
//! snapshot through it — state changes swap the snapshot, they never
//! reinstall anything on the engine.

mod state;
mod tracker;

pub use state::InteractionState;
pub use tracker::InteractionTracker;
