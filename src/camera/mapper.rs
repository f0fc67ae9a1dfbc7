//! World/screen coordinate transforms.
//!
//! [`project`] and [`unproject`] are pure functions of a camera state and
//! viewport; [`ViewportMapper`] is the stateless adapter form that
//! re-reads the live camera on every call, so callers can never hold a
//! transform that has drifted from the canvas.

use glam::Vec2;

use super::state::{CameraState, Viewport};
use super::CameraSource;

/// Map a world-space point to screen pixels.
///
/// Translate by the camera center, rotate by the negated camera angle,
/// scale by `1/ratio`, then offset to the viewport center. World +y maps
/// to screen +y; hosts with a flipped axis compose that into their own
/// draw transform.
#[must_use]
pub fn project(camera: &CameraState, viewport: Viewport, world: Vec2) -> Vec2 {
    let delta = Vec2::from_angle(-camera.angle).rotate(world - camera.center());
    viewport.center() + delta / camera.ratio
}

/// Map a screen-pixel point back to world space. Exact inverse of
/// [`project`] up to float precision.
#[must_use]
pub fn unproject(camera: &CameraState, viewport: Viewport, screen: Vec2) -> Vec2 {
    let delta = (screen - viewport.center()) * camera.ratio;
    camera.center() + Vec2::from_angle(camera.angle).rotate(delta)
}

/// Stateless world/screen adapter over a live [`CameraSource`].
///
/// Holds no cached transform: each call reads the camera as of that call.
pub struct ViewportMapper<'a, C: CameraSource + ?Sized> {
    source: &'a C,
}

impl<'a, C: CameraSource + ?Sized> ViewportMapper<'a, C> {
    /// Adapter over `source`.
    #[must_use]
    pub fn new(source: &'a C) -> Self {
        Self { source }
    }

    /// World point to screen pixels under the current camera.
    #[must_use]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        project(&self.source.camera(), self.source.viewport(), world)
    }

    /// Screen pixels to world point under the current camera.
    #[must_use]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        unproject(&self.source.camera(), self.source.viewport(), screen)
    }
}
