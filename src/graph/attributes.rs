//! Base display attributes and the whitelisted reducer outputs.

use glam::Vec2;

use crate::util::color::Color;

/// Key identifying a node or edge in the external data store.
pub type EntityKey = String;

/// Base display attributes of a node, as read from the data store.
///
/// Owned by the store; this core never writes them. Position and topology
/// belong to the layout/editing collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeAttributes {
    /// World-space position.
    pub position: Vec2,
    /// Base size (world units).
    pub size: f32,
    /// Base fill color.
    pub color: Color,
    /// Label text, if the node has one.
    pub label: Option<String>,
    /// Whether the node is hidden independently of interaction state.
    pub hidden: bool,
    /// Draw-order bias.
    pub z_index: i32,
}

impl Default for NodeAttributes {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: 1.0,
            color: Color::rgb(0x99, 0x99, 0x99),
            label: None,
            hidden: false,
            z_index: 0,
        }
    }
}

/// Base display attributes of an edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeAttributes {
    /// Base stroke color.
    pub color: Color,
    /// Base thickness (world units).
    pub size: f32,
    /// Whether the edge is hidden independently of interaction state.
    pub hidden: bool,
}

impl Default for EdgeAttributes {
    fn default() -> Self {
        Self {
            color: Color::rgb(0xcc, 0xcc, 0xcc),
            size: 1.0,
            hidden: false,
        }
    }
}

/// Final node display attributes produced by the style pipeline.
///
/// This is the complete set of attributes the reducer is allowed to write.
/// Everything else a node carries (position, topology, z-order) passes
/// through the engine untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDisplay {
    /// Final fill color.
    pub color: Color,
    /// Label to render; `None` renders no label.
    pub label: Option<String>,
    /// Whether the engine should apply its highlight treatment.
    pub highlighted: bool,
    /// Whether the node is suppressed for this paint.
    pub hidden: bool,
    /// Multiplier applied to the base size.
    pub size_multiplier: f32,
}

impl NodeDisplay {
    /// Seed the display from base attributes (rule 1 of the pipeline).
    #[must_use]
    pub fn from_base(base: &NodeAttributes) -> Self {
        Self {
            color: base.color,
            label: base.label.clone(),
            highlighted: false,
            hidden: base.hidden,
            size_multiplier: 1.0,
        }
    }
}

/// Final edge display attributes produced by the style pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDisplay {
    /// Final stroke color.
    pub color: Color,
    /// Whether the edge is suppressed for this paint.
    pub hidden: bool,
    /// Multiplier applied to the base thickness.
    pub size_multiplier: f32,
}

impl EdgeDisplay {
    /// Seed the display from base attributes.
    #[must_use]
    pub fn from_base(base: &EdgeAttributes) -> Self {
        Self {
            color: base.color,
            hidden: base.hidden,
            size_multiplier: 1.0,
        }
    }
}
