//! Camera state, the world/screen viewport mapper, and camera tweening.
//!
//! The rendering engine owns and mutates the camera; this module only
//! reads it (through [`CameraSource`]) and writes it back along the
//! single documented tween path.

mod mapper;
mod state;
mod tween;

pub use mapper::{project, unproject, ViewportMapper};
pub use state::{CameraState, Viewport};
pub use tween::{center_on, fit_to_positions, CameraTween};

/// Live access to the engine's camera transform.
///
/// Implementations return the state as of the call — the mapper and the
/// overlay synchronizer re-read it rather than caching a transform.
pub trait CameraSource {
    /// Current camera state.
    fn camera(&self) -> CameraState;

    /// Current viewport size in pixels.
    fn viewport(&self) -> Viewport;
}
