//! Animated camera moves: center-on-node, fit-to-graph.
//!
//! At most one tween is active at a time. Starting a new one replaces the
//! in-flight one before any camera write happens, so two animations can
//! never compete for the camera; nothing is ever queued.

use glam::Vec2;
use web_time::{Duration, Instant};

use super::state::{CameraState, Viewport};
use crate::util::easing::EasingFunction;

/// Interpolates the engine camera toward a target state.
///
/// Drive it from the render loop: [`sample`](Self::sample) returns the
/// state to write while a tween is running and `None` once it has
/// finished (the final sample is exactly the target).
#[derive(Debug, Default)]
pub struct CameraTween {
    active: Option<ActiveTween>,
}

#[derive(Debug)]
struct ActiveTween {
    from: CameraState,
    to: CameraState,
    started: Instant,
    duration: Duration,
    easing: EasingFunction,
}

impl CameraTween {
    /// Idle tween.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a tween from `from` to `to`.
    ///
    /// A running tween is cancelled first — replaced, never queued — so
    /// there is exactly one camera writer at any time.
    pub fn start(
        &mut self,
        from: CameraState,
        to: CameraState,
        duration: Duration,
        easing: EasingFunction,
        now: Instant,
    ) {
        if self.active.is_some() {
            log::debug!("camera tween replaced while in flight");
        }
        self.active = Some(ActiveTween {
            from,
            to,
            started: now,
            duration,
            easing,
        });
    }

    /// Cancel the in-flight tween, if any.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Whether a tween is currently running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Target state of the in-flight tween, if any.
    #[must_use]
    pub fn target(&self) -> Option<CameraState> {
        self.active.as_ref().map(|t| t.to)
    }

    /// The camera state to write at `now`, or `None` when idle.
    ///
    /// The tween deactivates itself on completion after returning the
    /// exact target state once.
    pub fn sample(&mut self, now: Instant) -> Option<CameraState> {
        let tween = self.active.as_ref()?;
        let elapsed = now.saturating_duration_since(tween.started);
        if elapsed >= tween.duration || tween.duration.is_zero() {
            let end = tween.to;
            self.active = None;
            return Some(end);
        }
        let t = elapsed.as_secs_f32() / tween.duration.as_secs_f32();
        Some(interpolate(&tween.from, &tween.to, tween.easing.evaluate(t)))
    }
}

/// Blend two camera states at eased progress `t`.
///
/// Pan is linear; ratio interpolates in log space so zoom speed feels
/// uniform across magnitudes; the angle takes the shortest arc.
fn interpolate(a: &CameraState, b: &CameraState, t: f32) -> CameraState {
    let ratio = if a.ratio > 0.0 && b.ratio > 0.0 {
        (a.ratio.ln() + (b.ratio.ln() - a.ratio.ln()) * t).exp()
    } else {
        a.ratio + (b.ratio - a.ratio) * t
    };
    CameraState {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
        ratio,
        angle: a.angle + shortest_arc(b.angle - a.angle) * t,
    }
}

/// Wrap an angle difference into (-pi, pi].
fn shortest_arc(diff: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = diff.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Target state that centers the view on a world point, keeping the
/// current zoom and rotation.
#[must_use]
pub fn center_on(camera: CameraState, world: Vec2) -> CameraState {
    CameraState {
        x: world.x,
        y: world.y,
        ..camera
    }
}

/// Target state that fits a set of world positions into the viewport.
///
/// Centers on the centroid and picks the smallest ratio that keeps every
/// position inside the viewport less `padding` pixels per side, with the
/// view rotation reset. Returns `None` for an empty position set.
#[must_use]
pub fn fit_to_positions(
    positions: &[Vec2],
    viewport: Viewport,
    padding: f32,
) -> Option<CameraState> {
    if positions.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let centroid =
        positions.iter().copied().sum::<Vec2>() / positions.len() as f32;
    let extent = positions
        .iter()
        .map(|p| (*p - centroid).abs())
        .fold(Vec2::ZERO, Vec2::max);

    let usable = Vec2::new(
        (viewport.width - 2.0 * padding).max(1.0),
        (viewport.height - 2.0 * padding).max(1.0),
    );
    // Half the usable viewport must cover the largest half-extent.
    let ratio = (2.0 * extent.x / usable.x)
        .max(2.0 * extent.y / usable.y)
        .max(f32::MIN_POSITIVE);

    Some(CameraState {
        x: centroid.x,
        y: centroid.y,
        ratio,
        angle: 0.0,
    })
}
