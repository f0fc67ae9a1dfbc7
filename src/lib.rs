// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interaction-state and overlay core for 2D graph visualization engines.
//!
//! Grava sits between a WebGL-style graph rendering engine and the
//! application: it tracks transient interaction state (hover, selection,
//! search), derives final node and edge display attributes through an
//! ordered style rule pipeline, and keeps world-anchored overlay
//! annotations (cluster labels, legends) pixel-aligned with a continuously
//! panning, zooming, and rotating canvas.
//!
//! # Key entry points
//!
//! - [`view::GraphView`] - wires every component onto a rendering engine
//!   through the [`host::RenderHost`] seam
//! - [`interaction::InteractionTracker`] - the canonical interaction
//!   snapshot (hover, selection, search)
//! - [`reducer::StylePipeline`] - the ordered attribute-override rules
//! - [`overlay::OverlaySynchronizer`] - camera-synchronized overlay
//!   positioning
//! - [`options::Options`] - runtime configuration with TOML preset support
//!
//! # Architecture
//!
//! The crate is single-threaded and reactive: every operation is a
//! synchronous response to either an input event (forwarded by the engine
//! into the installed handler) or the engine's post-render lifecycle
//! signal. The graph data store, the draw pipeline, layout processes, and
//! the overlay layer are external collaborators reached through the traits
//! in [`host`], [`graph`], and [`layout`].

pub mod camera;
pub mod error;
pub mod graph;
pub mod host;
pub mod input;
pub mod interaction;
pub mod layout;
pub mod options;
pub mod overlay;
pub mod reducer;
pub mod util;
pub mod view;
