// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_wrap)] // u32->i32 for screen coordinate math
#![allow(clippy::cast_precision_loss)] // u32->f32 in the FPS calculation

//! HUD instrument simulator.
//!
//! Desktop host for the horizontal tape widgets: a heading tape across the
//! top of the screen and a horizon tick row at screen center riding a
//! synthetic horizon line. Flight data is generated locally and published
//! through the same bus the widgets consume everywhere else, so the full
//! subscribe/update/draw path runs exactly as it would on a target device.
//!
//! # Controls
//!
//! - `X`: toggle the debug overlay (FPS, label rewrite counter)
//! - `P`: pause the synthetic flight
//! - `Left` / `Right`: slew the heading by 1 degree while paused
//!
//! Close the window to quit.

use core::fmt::Write;
use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use hud_instruments::bus::FlightDataBus;
use hud_instruments::colors::{BLACK, GREEN_DIM};
use hud_instruments::config::{
    CENTER_X,
    CENTER_Y,
    FRAME_TIME,
    HEADING_TAPE,
    HORIZON_TAPE,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use hud_instruments::styles::{CENTERED, DEBUG_STYLE, LEFT_ALIGNED, READOUT_STYLE, RIGHT_ALIGNED};
use hud_instruments::widgets::HorizontalTape;

// =============================================================================
// Simulator Layout
// =============================================================================
// Pre-computed positions for everything that never moves.

/// Center of the heading tape tick row, near the top edge.
const HEADING_TAPE_ORIGIN: Point = Point::new(CENTER_X, 36);

/// Center of the horizon tick row at rest (mid screen).
const HORIZON_TAPE_ORIGIN: Point = Point::new(CENTER_X, CENTER_Y);

/// Fixed center index mark just below the heading tape window.
const INDEX_TOP: Point = Point::new(CENTER_X, 92);
const INDEX_BOTTOM: Point = Point::new(CENTER_X, 102);

/// Waterline reference stubs either side of the screen center.
const WATERLINE_LEFT_START: Point = Point::new(CENTER_X - 28, CENTER_Y);
const WATERLINE_LEFT_END: Point = Point::new(CENTER_X - 10, CENTER_Y);
const WATERLINE_RIGHT_START: Point = Point::new(CENTER_X + 10, CENTER_Y);
const WATERLINE_RIGHT_END: Point = Point::new(CENTER_X + 28, CENTER_Y);

/// Heading readout baseline, centered under the center index.
const READOUT_POS: Point = Point::new(CENTER_X, 128);

/// Debug overlay rows (top-right) and pause indicator (top-left).
const FPS_POS: Point = Point::new(SCREEN_WIDTH as i32 - 6, 12);
const REWRITES_POS: Point = Point::new(SCREEN_WIDTH as i32 - 6, 24);
const PAUSED_POS: Point = Point::new(6, 12);

/// Dim stroke for the fixed furniture (index mark, waterline).
const FURNITURE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GREEN_DIM, 2);

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("HUD Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    // The bus and both tape instances; the horizon row also follows the
    // vertical-offset topic
    let mut bus = FlightDataBus::new();
    let mut heading_tape = HorizontalTape::new(HEADING_TAPE_ORIGIN, HEADING_TAPE);
    let mut horizon_tape = HorizontalTape::new(HORIZON_TAPE_ORIGIN, HORIZON_TAPE).with_vertical_offset();

    // Signal generation time parameter (advances each frame while flying)
    let mut t = 0.0f32;
    // Manual heading adjustment accumulated from the arrow keys
    let mut slew = 0.0f32;
    // Pause state (P toggles); arrows only slew while paused
    let mut paused = false;

    // Debug overlay state (X toggles)
    let mut show_overlay = true;
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, key presses)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    match keycode {
                        // X: Toggle debug overlay
                        // Ignore OS key repeat to prevent toggle spam when holding keys
                        Keycode::X if !repeat => {
                            show_overlay = !show_overlay;
                        }
                        // P: Pause/resume the synthetic flight
                        Keycode::P if !repeat => {
                            paused = !paused;
                        }
                        // Arrows: slew heading while paused (key repeat is
                        // welcome here, it scrubs the tape)
                        Keycode::Left if paused => {
                            slew -= 1.0;
                            bus.heading.publish(flight_heading(t, slew));
                        }
                        Keycode::Right if paused => {
                            slew += 1.0;
                            bus.heading.publish(flight_heading(t, slew));
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // ======================================================================
        // Generate Flight Data (simulator mode)
        // ======================================================================

        if !paused {
            bus.heading.publish(flight_heading(t, slew));
            bus.horizon_offset.publish(horizon_drift(t));
        }

        // Fold any new readings into the widgets
        heading_tape.update(&bus);
        horizon_tape.update(&bus);

        // ======================================================================
        // Render Frame
        // ======================================================================

        // Tape content moves every frame, so a full clear and redraw is the
        // honest option; there is nothing static enough for dirty rects
        display.clear(BLACK).ok();

        heading_tape.draw(&mut display.clipped(&heading_tape.clip_window()));
        horizon_tape.draw(&mut display.clipped(&horizon_tape.clip_window()));

        // Fixed furniture drawn unclipped on top
        Line::new(INDEX_TOP, INDEX_BOTTOM).into_styled(FURNITURE_STYLE).draw(&mut display).ok();
        Line::new(WATERLINE_LEFT_START, WATERLINE_LEFT_END)
            .into_styled(FURNITURE_STYLE)
            .draw(&mut display)
            .ok();
        Line::new(WATERLINE_RIGHT_START, WATERLINE_RIGHT_END)
            .into_styled(FURNITURE_STYLE)
            .draw(&mut display)
            .ok();

        // Digital heading readout under the center index
        let heading = bus.heading.latest().unwrap_or(0.0);
        let mut readout: String<8> = String::new();
        let _ = write!(readout, "{heading:05.1}");
        Text::with_text_style(&readout, READOUT_POS, READOUT_STYLE, CENTERED)
            .draw(&mut display)
            .ok();

        // Recalculate FPS once per second
        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        if show_overlay {
            let mut fps_str: String<16> = String::new();
            let _ = write!(fps_str, "{current_fps:.0} FPS");
            Text::with_text_style(&fps_str, FPS_POS, DEBUG_STYLE, RIGHT_ALIGNED)
                .draw(&mut display)
                .ok();

            let mut rewrites_str: String<24> = String::new();
            let _ = write!(rewrites_str, "LBL RW {}", heading_tape.label_rewrites());
            Text::with_text_style(&rewrites_str, REWRITES_POS, DEBUG_STYLE, RIGHT_ALIGNED)
                .draw(&mut display)
                .ok();

            if paused {
                Text::with_text_style("PAUSED", PAUSED_POS, DEBUG_STYLE, LEFT_ALIGNED)
                    .draw(&mut display)
                    .ok();
            }
        }

        // Update window with rendered frame
        window.update(&display);

        // Advance signal time
        if !paused {
            t += 0.05;
        }

        // Sleep to maintain target frame rate (~50 FPS)
        let pre_sleep = frame_start.elapsed();
        if pre_sleep < FRAME_TIME {
            thread::sleep(FRAME_TIME.checked_sub(pre_sleep).unwrap());
        }
    }
}

/// Synthetic flight heading in degrees, wrapped to `[0, 360)`.
///
/// Forward drift with sinusoidal reversals, so the tape regularly crosses
/// tens boundaries in both directions and wraps through north.
///
/// # Parameters
/// - `t`: Time parameter (advances each frame)
/// - `slew`: Manual adjustment accumulated from the arrow keys
fn flight_heading(
    t: f32,
    slew: f32,
) -> f32 {
    (10.0f32.mul_add(t, 120.0 * (0.15 * t).sin()) + slew).rem_euclid(360.0)
}

/// Synthetic horizon line offset in pixels (positive is down).
///
/// Slow sine well inside the horizon window, enough to show the vertical
/// axis moving independently of the heading.
fn horizon_drift(t: f32) -> f32 {
    20.0 * (0.35 * t).sin()
}
