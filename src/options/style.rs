//! Parameters of the style rule pipeline.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Knobs for the dim and highlight treatments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct StyleOptions {
    /// How far dimmed colors are pulled toward gray, in [0, 1].
    pub dim_strength: f32,
    /// Size multiplier applied to the selected node.
    pub highlight_size_multiplier: f32,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            dim_strength: 0.7,
            highlight_size_multiplier: 1.25,
        }
    }
}
