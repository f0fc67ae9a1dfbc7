//! Camera tween and fit parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

/// Serializable tag for the easing curves a preset can pick.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    /// No shaping.
    Linear,
    /// Slow start.
    QuadraticIn,
    /// Slow finish.
    QuadraticOut,
    /// Slow start and finish.
    SmoothStep,
}

impl EasingKind {
    /// Convert to the corresponding evaluation curve.
    #[must_use]
    pub fn to_function(self) -> EasingFunction {
        match self {
            Self::Linear => EasingFunction::Linear,
            Self::QuadraticIn => EasingFunction::QuadraticIn,
            Self::QuadraticOut => EasingFunction::QuadraticOut,
            Self::SmoothStep => EasingFunction::SmoothStep,
        }
    }
}

/// Knobs for animated camera moves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct CameraOptions {
    /// Tween duration in milliseconds.
    pub tween_duration_ms: u64,
    /// Easing curve for tweens.
    pub easing: EasingKind,
    /// Pixels kept free on each side by fit-to-graph.
    pub fit_padding: f32,
    /// Smallest allowed zoom ratio (most zoomed in).
    pub min_ratio: f32,
    /// Largest allowed zoom ratio (most zoomed out).
    pub max_ratio: f32,
}

impl CameraOptions {
    /// Tween duration as a [`Duration`].
    #[must_use]
    pub fn tween_duration(&self) -> Duration {
        Duration::from_millis(self.tween_duration_ms)
    }

    /// Clamp a zoom ratio into the configured range.
    #[must_use]
    pub fn clamp_ratio(&self, ratio: f32) -> f32 {
        ratio.clamp(self.min_ratio, self.max_ratio)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            tween_duration_ms: 350,
            easing: EasingKind::SmoothStep,
            fit_padding: 40.0,
            min_ratio: 0.05,
            max_ratio: 20.0,
        }
    }
}
