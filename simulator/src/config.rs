//! Simulator configuration.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

// =============================================================================
// Window Layout
// =============================================================================

/// Level surface sizes selectable with keys `1`, `2` and `3`.
pub const SURFACE_SIZES: [u32; 3] = [240, 300, 450];

/// Index into [`SURFACE_SIZES`] used at startup.
pub const INITIAL_SURFACE: usize = 1;

/// Largest selectable surface; the window is allocated for it once.
pub const MAX_SURFACE: u32 = SURFACE_SIZES[2];

/// Height of the text panel below the level surface.
pub const PANEL_HEIGHT: u32 = 96;

pub const WINDOW_WIDTH: u32 = MAX_SURFACE;
pub const WINDOW_HEIGHT: u32 = MAX_SURFACE + PANEL_HEIGHT;

/// Pixel scale of the SDL window.
pub const WINDOW_SCALE: u32 = 1;

const _: () = assert!(SURFACE_SIZES[0] < SURFACE_SIZES[1] && SURFACE_SIZES[1] < SURFACE_SIZES[2]);
const _: () = assert!(INITIAL_SURFACE < SURFACE_SIZES.len());

// =============================================================================
// Timing
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(1500);

/// Simulated delay before the platform answers a permission request.
pub const PERMISSION_DELAY: Duration = Duration::from_millis(1200);

// =============================================================================
// Simulated Motion
// =============================================================================

/// Phase advance per tick for the automatic wobble.
pub const AUTO_TICK: f32 = 0.05;

/// Peak beta of the automatic wobble, degrees.
pub const AUTO_BETA_AMPLITUDE: f32 = 35.0;

/// Peak gamma of the automatic wobble, degrees.
pub const AUTO_GAMMA_AMPLITUDE: f32 = 50.0;

pub const AUTO_BETA_FREQ: f32 = 0.7;
pub const AUTO_GAMMA_FREQ: f32 = 0.45;

/// Degrees per arrow key press in manual mode.
pub const MANUAL_STEP: f32 = 1.5;

/// Manual tilt may overshoot the sensor range to exercise clamping.
pub const MANUAL_LIMIT: f32 = 135.0;
