//! Color constants for the HUD symbology.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! The HUD itself is monochrome green on black, the way a collimated
//! combiner glass renders it; white exists for the simulator's debug
//! overlay only.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Background of the whole display.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Simulator debug overlay text only.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Primary symbology green (0, 63, 0). Ticks, labels, and readouts.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Dimmed symbology green for fixed furniture (center index, horizon
/// reference). RGB565: (2, 34, 4) - roughly half brightness.
pub const GREEN_DIM: Rgb565 = Rgb565::new(2, 34, 4);
