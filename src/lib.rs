//! Host-testable core of the HUD instrument stack.
//!
//! This library contains the logic that runs headless: the flight-data
//! bus, tape configuration, geometry building, and the tape widget itself.
//! The `simulator` binary uses this library and adds the SDL window and
//! event loop on top.
//!
//! - [`bus`]: topic-based flight-data distribution with change detection
//! - [`colors`]: RGB565 color constants for the display
//! - [`config`]: display layout and tape configuration constants
//! - [`styles`]: pre-computed text styles
//! - [`widgets`]: the horizontal tape widget and its geometry
//!
//! # Testing
//!
//! The full update path runs headless:
//! ```bash
//! cargo test --lib
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod bus;
pub mod colors;
pub mod config;
pub mod styles;
pub mod widgets;
