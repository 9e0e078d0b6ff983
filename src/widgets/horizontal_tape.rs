//! Horizontal heading/horizon tape.
//!
//! The tape subscribes to the heading topic and translates its pre-built
//! geometry horizontally on every reading: the fractional part of the
//! heading maps to pixels through the configured spacing, so motion stays
//! smooth between graduations. Label text is only rewritten when the
//! displayed tens bucket changes; steady flight between two graduations
//! costs no text writes at all.
//!
//! # Update policy
//!
//! - The horizontal offset is recomputed on every reading.
//! - The label pool is rewritten when the reading crosses a 10-degree
//!   bucket boundary in either direction. The trigger fires again while a
//!   reading sits exactly on a boundary; slot writes that would not change
//!   the text are skipped instead.
//! - The vertical offset comes from an independent topic and never touches
//!   the horizontal axis. Drawing composes the translation from the latest
//!   cached value of each axis, so delivery order between the two topics
//!   does not matter.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::bus::{FlightDataBus, Subscription};
use crate::colors::GREEN;
use crate::config::{LABEL_DROP, TapeConfig, TapeMode, WINDOW_HEIGHT_HEADING, WINDOW_HEIGHT_HORIZON};
use crate::styles::{CENTERED, TAPE_LABEL_STYLE};
use crate::widgets::tape_geometry::{self, LABEL_LEN, TapeGeometry};

// =============================================================================
// Drawing Constants
// =============================================================================

/// Tick stroke (1px symbology green).
/// `PrimitiveStyle::with_stroke` is const fn, so this is computed at compile time.
const TICK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GREEN, 1);

/// Out-of-band tens bucket. Start here so the first delivered reading
/// always rewrites the pool, replacing the build-time placeholders.
const UNDRAWN: i32 = i32::MIN;

// =============================================================================
// Widget
// =============================================================================

/// One tape instance: owned geometry, bus subscriptions, and the cached
/// per-axis translation.
pub struct HorizontalTape {
    /// Screen position of the tape center (middle of the tick row).
    origin: Point,
    config: TapeConfig,
    geometry: TapeGeometry,
    heading_sub: Subscription,
    /// Present only on instances that follow the horizon line.
    vertical_sub: Option<Subscription>,
    /// Horizontal translation in pixels. Kept fractional; rounded at draw.
    tape_offset: f32,
    /// Vertical translation in pixels, applied verbatim from the bus.
    y_offset: f32,
    /// Tens bucket the label pool was last drawn for.
    current_drawn_heading: i32,
    /// Label-pool rewrites since construction, for the debug overlay.
    label_rewrites: u32,
}

impl HorizontalTape {
    /// Build a tape at `origin` with its geometry pool allocated up front.
    pub fn new(
        origin: Point,
        config: TapeConfig,
    ) -> Self {
        Self {
            origin,
            config,
            geometry: tape_geometry::build(&config),
            heading_sub: Subscription::new(),
            vertical_sub: None,
            tape_offset: 0.0,
            y_offset: 0.0,
            current_drawn_heading: UNDRAWN,
            label_rewrites: 0,
        }
    }

    /// Additionally subscribe to the vertical-offset topic. Used by
    /// horizon-mode instances that ride the horizon line.
    #[must_use]
    pub fn with_vertical_offset(mut self) -> Self {
        self.vertical_sub = Some(Subscription::new());
        self
    }

    /// Poll the bus once and fold any new readings into the tape state.
    ///
    /// Called synchronously by the host loop; each topic contributes at
    /// most its newest reading per call.
    pub fn update(
        &mut self,
        bus: &FlightDataBus,
    ) {
        if let Some(heading) = self.heading_sub.poll(&bus.heading) {
            self.on_heading(heading);
        }

        if let Some(sub) = self.vertical_sub.as_mut()
            && let Some(dy) = sub.poll(&bus.horizon_offset)
        {
            self.y_offset = dy;
        }
    }

    /// Handle one heading reading.
    fn on_heading(
        &mut self,
        heading: f32,
    ) {
        let tape_offset = -(heading % 10.0) * self.config.px_per_degree();

        // Tens-bucket change check. The inequality form re-fires while the
        // reading sits exactly on a boundary, and catches backward motion.
        if heading / 10.0 >= (self.current_drawn_heading + 1) as f32
            || heading / 10.0 <= self.current_drawn_heading as f32
        {
            self.current_drawn_heading = (heading / 10.0).floor() as i32;
            self.rewrite_labels();
        }

        self.tape_offset = tape_offset;
    }

    /// Rewrite the label pool around the current tens bucket.
    ///
    /// Slot `i` (left to right) shows `(start + i*10) mod 360` where
    /// `start` is the leftmost visible major graduation. A graduation at
    /// absolute heading 0 reads "0", never "00" or "360"; a slot off the
    /// major grid is blanked. Writes that would not change a slot's text
    /// are skipped.
    fn rewrite_labels(&mut self) {
        let side_labels = self.geometry.labels.len() / 2;
        let start = (self.current_drawn_heading - side_labels as i32) * 10;

        for (index, slot) in self.geometry.labels.iter_mut().enumerate() {
            let heading = (start + index as i32 * 10).rem_euclid(360);

            let mut content: String<LABEL_LEN> = String::new();
            if heading % 10 == 0 {
                if heading == 0 {
                    content.push('0').ok();
                } else {
                    let _ = write!(content, "{}", heading / 10);
                }
            }

            if slot.text != content {
                slot.text = content;
            }
        }

        self.label_rewrites = self.label_rewrites.wrapping_add(1);
    }

    /// Draw ticks and labels translated by the cached per-axis offsets.
    ///
    /// Draw errors are discarded; a failed draw shows up as stale pixels,
    /// nothing else.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let row_y = self.origin.y + self.y_offset.round() as i32;

        for tick_dx in &self.geometry.ticks {
            let x = self.origin.x + (self.tape_offset + tick_dx).round() as i32;
            Line::new(Point::new(x, row_y), Point::new(x, row_y + self.geometry.tick_len))
                .into_styled(TICK_STYLE)
                .draw(display)
                .ok();
        }

        for slot in &self.geometry.labels {
            if slot.text.is_empty() {
                continue;
            }
            let x = self.origin.x + (self.tape_offset + slot.dx).round() as i32;
            Text::with_text_style(&slot.text, Point::new(x, row_y + LABEL_DROP), TAPE_LABEL_STYLE, CENTERED)
                .draw(display)
                .ok();
        }
    }

    /// Fixed screen-space window this tape is meant to be seen through.
    ///
    /// The host applies it with `DrawTargetExt::clipped`; content scrolled
    /// beyond `display_range` degrees is masked, not destroyed.
    pub fn clip_window(&self) -> Rectangle {
        let half_width = self.config.window_half_width() as i32;
        match self.config.mode {
            TapeMode::HeadingTape => Rectangle::new(
                // From just above the tick row down past the labels
                Point::new(self.origin.x - half_width, self.origin.y - 4),
                Size::new(2 * half_width as u32, WINDOW_HEIGHT_HEADING),
            ),
            TapeMode::Horizon => Rectangle::new(
                // Centered on the row; tall enough for the vertical travel
                Point::new(
                    self.origin.x - half_width,
                    self.origin.y - WINDOW_HEIGHT_HORIZON as i32 / 2,
                ),
                Size::new(2 * half_width as u32, WINDOW_HEIGHT_HORIZON),
            ),
        }
    }

    /// Current horizontal translation in pixels (fractional until draw).
    #[inline]
    pub const fn tape_offset(&self) -> f32 { self.tape_offset }

    /// Current vertical translation in pixels.
    #[inline]
    pub const fn y_offset(&self) -> f32 { self.y_offset }

    /// Label-pool rewrites since construction.
    #[inline]
    pub const fn label_rewrites(&self) -> u32 { self.label_rewrites }
}

// =============================================================================
// Unit Tests
// =============================================================================
