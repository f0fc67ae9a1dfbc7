//! Graph entities, base attributes, and the data-store read seam.
//!
//! The graph data store is an external collaborator: this core only reads
//! entities through [`GraphRead`] and emits display attributes restricted
//! to the whitelist in [`NodeDisplay`]/[`EdgeDisplay`]. [`MemoryGraph`] is
//! a concrete store for hosts and tests that do not bring their own.

mod attributes;
mod store;

pub use attributes::{
    EdgeAttributes, EdgeDisplay, EntityKey, NodeAttributes, NodeDisplay,
};
pub use store::{GraphRead, MemoryGraph};
