//! Display and instrument configuration.
//!
//! Screen layout values are `const` so positions are computed at compile
//! time. Each tape instance is additionally described by a [`TapeConfig`]
//! value consumed once at construction; the two instances the simulator
//! creates are themselves `const`, so all geometry inputs are fixed before
//! the first frame.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (simulator window, before SDL scaling).
pub const SCREEN_WIDTH: u32 = 480;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

/// Screen center X coordinate. Pre-computed as i32 to avoid casts in
/// drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate. Pre-computed as i32 to avoid casts in
/// drawing code.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes
/// early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

// =============================================================================
// Tape Layout
// =============================================================================

/// Number of tick steps built to each side of the tape center.
pub const TICK_STEPS_PER_SIDE: usize = 6;

/// Tick mark length for the heading-tape variant, in pixels.
pub const TICK_LEN_HEADING: i32 = 8;

/// Tick mark length for the horizon variant, in pixels.
pub const TICK_LEN_HORIZON: i32 = 5;

/// Vertical distance from the tick row to the label baseline.
pub const LABEL_DROP: i32 = 26;

/// Clip window height for the heading-tape variant (ticks plus labels).
pub const WINDOW_HEIGHT_HEADING: u32 = 56;

/// Clip window height for the horizon variant, tall enough to cover the
/// commanded vertical travel.
pub const WINDOW_HEIGHT_HORIZON: u32 = 96;

// =============================================================================
// Tape Instance Configuration
// =============================================================================

/// Geometry variant of a horizontal tape instance.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TapeMode {
    /// Ticks at 10-degree multiples only, no labels. The whole row is
    /// slaved vertically to the horizon line.
    Horizon,
    /// Ticks at every spacing step plus a pool of heading labels.
    HeadingTape,
}

/// Per-instance tape configuration, consumed at construction.
///
/// Non-positive spacings are an implicit precondition, not validated.
#[derive(Clone, Copy, Debug)]
pub struct TapeConfig {
    /// Half-range of headings visible through the clip window, in degrees.
    pub display_range: f32,
    /// Degrees between adjacent tick marks.
    pub value_spacing: f32,
    /// Pixels between adjacent tick marks.
    pub distance_spacing: f32,
    /// Geometry variant.
    pub mode: TapeMode,
}

impl TapeConfig {
    /// Horizontal scale factor: pixels of tape travel per degree of heading.
    #[inline]
    pub const fn px_per_degree(&self) -> f32 { self.distance_spacing / self.value_spacing }

    /// Half-width of the visible window in pixels.
    #[inline]
    pub const fn window_half_width(&self) -> f32 { self.display_range * self.px_per_degree() }
}

/// Heading tape across the top of the HUD: 5-degree ticks, labels every 10.
pub const HEADING_TAPE: TapeConfig = TapeConfig {
    display_range: 25.0,
    value_spacing: 5.0,
    distance_spacing: 30.0,
    mode: TapeMode::HeadingTape,
};

/// Horizon tick row at screen center, following the horizon line.
pub const HORIZON_TAPE: TapeConfig = TapeConfig {
    display_range: 20.0,
    value_spacing: 5.0,
    distance_spacing: 30.0,
    mode: TapeMode::Horizon,
};
