//! Static tape geometry: tick marks and the heading label pool.
//!
//! Geometry is built once per instance from a [`TapeConfig`] and never
//! resized afterwards. Scrolling happens by translating the finished
//! geometry; heading changes rewrite label text in place. The builder is
//! deterministic: same configuration, same geometry.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::config::{TICK_LEN_HEADING, TICK_LEN_HORIZON, TICK_STEPS_PER_SIDE, TapeConfig, TapeMode};

// =============================================================================
// Pool Bounds
// =============================================================================

/// Upper bound on tick marks: one per step on each side, plus the center.
pub const MAX_TICKS: usize = 2 * TICK_STEPS_PER_SIDE + 1;

/// Upper bound on label slots: every tick step can land on a major
/// graduation, plus the center anchor.
pub const MAX_LABELS: usize = 2 * TICK_STEPS_PER_SIDE + 1;

/// Capacity of one label slot's text ("360" is the longest content).
pub const LABEL_LEN: usize = 4;

// =============================================================================
// Geometry Types
// =============================================================================

/// One entry of the label pool: a fixed x offset and rewritable text.
pub struct LabelSlot {
    /// Horizontal offset from the tape center, in pixels. Fixed for the
    /// lifetime of the pool.
    pub dx: f32,
    /// Current label text. Overwritten in place, never reallocated.
    pub text: String<LABEL_LEN>,
}

impl LabelSlot {
    /// Slot seeded with a whole-degree placeholder. The first delivered
    /// heading rewrites it.
    fn new(
        dx: f32,
        placeholder_degrees: i32,
    ) -> Self {
        let mut text = String::new();
        let _ = write!(text, "{placeholder_degrees}");
        Self { dx, text }
    }
}

/// Ticks and label slots for one tape instance, ordered left to right.
pub struct TapeGeometry {
    /// Tick x offsets from the tape center, in pixels.
    pub ticks: Vec<f32, MAX_TICKS>,
    /// Label pool. Empty in horizon mode.
    pub labels: Vec<LabelSlot, MAX_LABELS>,
    /// Tick mark length in pixels.
    pub tick_len: i32,
}

// =============================================================================
// Builders
// =============================================================================

/// Build the static geometry for one tape instance.
pub fn build(config: &TapeConfig) -> TapeGeometry {
    match config.mode {
        TapeMode::Horizon => build_horizon_ticks(config),
        TapeMode::HeadingTape => build_heading_ticks(config),
    }
}

/// Horizon variant: a center tick plus a tick wherever a spacing step lands
/// on a 10-degree multiple. Symmetric, no labels.
fn build_horizon_ticks(config: &TapeConfig) -> TapeGeometry {
    let mut ticks: Vec<f32, MAX_TICKS> = Vec::new();

    for i in (1..=TICK_STEPS_PER_SIDE).rev() {
        let heading_offset = i as f32 * config.value_spacing;
        if heading_offset as i32 % 10 == 0 {
            ticks.push(-heading_offset * config.px_per_degree()).ok();
        }
    }
    ticks.push(0.0).ok();
    for i in 1..=TICK_STEPS_PER_SIDE {
        let heading_offset = i as f32 * config.value_spacing;
        if heading_offset as i32 % 10 == 0 {
            ticks.push(heading_offset * config.px_per_degree()).ok();
        }
    }

    TapeGeometry {
        ticks,
        labels: Vec::new(),
        tick_len: TICK_LEN_HORIZON,
    }
}

/// Heading-tape variant: a tick at every spacing step, and a label slot at
/// every 10-degree multiple plus the "360" anchor at the center.
///
/// Side slots are seeded with the degree value of their build-time position
/// (left side the offset itself, right side 360 minus the offset); these
/// placeholders survive only until the first heading reading arrives.
fn build_heading_ticks(config: &TapeConfig) -> TapeGeometry {
    let mut ticks: Vec<f32, MAX_TICKS> = Vec::new();
    let mut labels: Vec<LabelSlot, MAX_LABELS> = Vec::new();

    for i in (1..=TICK_STEPS_PER_SIDE).rev() {
        let heading_offset = i as f32 * config.value_spacing;
        let dx = heading_offset * config.px_per_degree();
        ticks.push(-dx).ok();
        if heading_offset as i32 % 10 == 0 {
            labels.push(LabelSlot::new(-dx, heading_offset as i32)).ok();
        }
    }

    ticks.push(0.0).ok();
    labels.push(LabelSlot::new(0.0, 360)).ok();

    for i in 1..=TICK_STEPS_PER_SIDE {
        let heading_offset = i as f32 * config.value_spacing;
        let dx = heading_offset * config.px_per_degree();
        ticks.push(dx).ok();
        if heading_offset as i32 % 10 == 0 {
            labels.push(LabelSlot::new(dx, 360 - heading_offset as i32)).ok();
        }
    }

    TapeGeometry {
        ticks,
        labels,
        tick_len: TICK_LEN_HEADING,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HEADING_TAPE, HORIZON_TAPE};

    fn heading_config_10deg() -> TapeConfig {
        TapeConfig {
            display_range: 35.0,
            value_spacing: 10.0,
            distance_spacing: 30.0,
            mode: TapeMode::HeadingTape,
        }
    }

    #[test]
    fn test_horizon_ticks_major_steps_only() {
        // 5-degree steps: only 10, 20, 30 land on majors, each side
        let geometry = build(&HORIZON_TAPE);
        assert_eq!(geometry.ticks.len(), 7, "Center tick plus 3 majors per side");
        assert!(geometry.labels.is_empty(), "Horizon variant has no labels");
    }

    #[test]
    fn test_horizon_ticks_all_steps_major() {
        // 10-degree steps: every step is a major
        let config = TapeConfig {
            mode: TapeMode::Horizon,
            ..heading_config_10deg()
        };
        let geometry = build(&config);
        assert_eq!(geometry.ticks.len(), 13, "Center tick plus 6 majors per side");
    }

    #[test]
    fn test_horizon_tick_positions_symmetric() {
        let geometry = build(&HORIZON_TAPE);
        // px_per_degree = 30 / 5 = 6, majors at 10/20/30 degrees
        let expected = [-180.0, -120.0, -60.0, 0.0, 60.0, 120.0, 180.0];
        for (tick, want) in geometry.ticks.iter().zip(expected) {
            assert!(
                (tick - want).abs() < 1e-3,
                "Tick at {tick} should be at {want}"
            );
        }
    }

    #[test]
    fn test_heading_tape_tick_every_step() {
        let geometry = build(&HEADING_TAPE);
        assert_eq!(
            geometry.ticks.len(),
            13,
            "Heading tape draws a tick at every spacing step"
        );
        // Ordered left to right, 30 px apart
        for (i, tick) in geometry.ticks.iter().enumerate() {
            let want = (i as f32 - 6.0) * 30.0;
            assert!(
                (tick - want).abs() < 1e-3,
                "Tick {i} at {tick} should be at {want}"
            );
        }
    }

    #[test]
    fn test_heading_tape_label_pool_size() {
        // 5-degree steps: 3 majors per side + center anchor
        let geometry = build(&HEADING_TAPE);
        assert_eq!(geometry.labels.len(), 7, "3 side labels each way plus the anchor");

        // 10-degree steps: every step is a major
        let geometry = build(&heading_config_10deg());
        assert_eq!(geometry.labels.len(), 13, "6 side labels each way plus the anchor");
    }

    #[test]
    fn test_heading_tape_center_anchor() {
        let geometry = build(&HEADING_TAPE);
        let center = &geometry.labels[geometry.labels.len() / 2];
        assert!(center.dx.abs() < 1e-6, "Anchor slot sits at the tape center");
        assert_eq!(center.text.as_str(), "360", "Anchor is seeded with 360");
    }

    #[test]
    fn test_heading_tape_placeholder_texts() {
        let geometry = build(&HEADING_TAPE);
        let texts: std::vec::Vec<&str> = geometry.labels.iter().map(|slot| slot.text.as_str()).collect();
        assert_eq!(
            texts,
            ["30", "20", "10", "360", "350", "340", "330"],
            "Placeholders mirror the build-time degree positions"
        );
    }

    #[test]
    fn test_heading_tape_label_positions() {
        // Labels exist only at 10-degree multiples: 10 degrees apart on screen
        let geometry = build(&HEADING_TAPE);
        let spacing_px = 10.0 * HEADING_TAPE.px_per_degree();
        for (i, slot) in geometry.labels.iter().enumerate() {
            let want = (i as f32 - 3.0) * spacing_px;
            assert!(
                (slot.dx - want).abs() < 1e-3,
                "Label slot {i} at {} should be at {want}",
                slot.dx
            );
        }
    }

    #[test]
    fn test_tick_lengths_per_mode() {
        assert_eq!(build(&HEADING_TAPE).tick_len, TICK_LEN_HEADING);
        assert_eq!(build(&HORIZON_TAPE).tick_len, TICK_LEN_HORIZON);
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = build(&HEADING_TAPE);
        let second = build(&HEADING_TAPE);
        assert_eq!(first.ticks.len(), second.ticks.len());
        assert_eq!(first.labels.len(), second.labels.len());
        for (a, b) in first.labels.iter().zip(second.labels.iter()) {
            assert_eq!(a.text, b.text);
            assert!((a.dx - b.dx).abs() < f32::EPSILON);
        }
    }
}
