//! Pointer events and the dispatcher that forwards them into the
//! interaction tracker.

mod dispatcher;
mod event;

pub use dispatcher::EventDispatcher;
pub use event::{PointerEvent, Refresh};
