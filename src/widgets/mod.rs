//! Widget components for the HUD display.
//!
//! This module organizes the visual components into submodules:
//!
//! - [`horizontal_tape`]: scrolling heading/horizon tape widget
//! - [`tape_geometry`]: build-time tick and label-slot layout for a tape
//!
//! # Architecture
//!
//! Geometry is built once per tape instance and reused for its whole
//! lifetime: tick offsets never change, and label slots keep their tape
//! positions while only their text is rewritten. Per-frame work is limited
//! to translating that fixed pool by the cached per-axis offsets.
//!
//! # Optimizations Applied
//!
//! All widgets draw through the generic `DrawTarget` seam, so the same
//! code serves the simulator window and unit-test targets. Text uses the
//! static styles from the [`styles`](crate::styles) module and
//! `heapless::String` buffers (no heap allocation on the draw path).

mod horizontal_tape;
mod tape_geometry;

pub use horizontal_tape::HorizontalTape;
pub use tape_geometry::{LabelSlot, TapeGeometry};
