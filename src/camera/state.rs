//! Camera and viewport value types.

use glam::Vec2;

/// The pan/zoom/rotation transform between world and screen space.
///
/// Owned and mutated by the rendering engine; read-only to this crate
/// outside the tween path. `ratio` follows the zoom-ratio convention:
/// larger values are zoomed further out (world distances divide by it on
/// the way to the screen).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// World x of the viewport center.
    pub x: f32,
    /// World y of the viewport center.
    pub y: f32,
    /// Zoom ratio (1.0 = unity, larger = zoomed out).
    pub ratio: f32,
    /// View rotation in radians, counter-clockwise.
    pub angle: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            ratio: 1.0,
            angle: 0.0,
        }
    }
}

impl CameraState {
    /// World-space point at the viewport center.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Whether every component is a usable finite value.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.angle.is_finite()
            && self.ratio.is_finite()
            && self.ratio > 0.0
    }
}

/// Viewport size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Construct from a size pair.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Screen-space center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
