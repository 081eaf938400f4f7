//! Simulated orientation sensor.
//!
//! Stands in for a phone's orientation events: an automatic wobble built from
//! two sine waves, or manual tilt driven by the arrow keys. The permission
//! handshake answers after [`PERMISSION_DELAY`], cycling through outcomes each
//! time the user retries.

use std::time::Instant;

use level_common::{AngleSample, OrientationSource, Permission, RawSample};

use crate::config::{
    AUTO_BETA_AMPLITUDE,
    AUTO_BETA_FREQ,
    AUTO_GAMMA_AMPLITUDE,
    AUTO_GAMMA_FREQ,
    AUTO_TICK,
    MANUAL_LIMIT,
    MANUAL_STEP,
    PERMISSION_DELAY,
};

/// Answers handed out by successive permission requests.
const OUTCOMES: [Permission; 3] = [Permission::Granted, Permission::Denied, Permission::Unsupported];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TiltMode {
    Auto,
    Manual,
}

pub struct SimulatedSource {
    mode: TiltMode,
    phase: f32,
    manual: AngleSample,
    available: bool,
    inject_nan: bool,
    next_outcome: usize,
    /// Outcome and request time of an unanswered permission request.
    pending: Option<(Permission, Instant)>,
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self {
            mode: TiltMode::Auto,
            phase: 0.0,
            manual: AngleSample::ZERO,
            available: true,
            inject_nan: false,
            next_outcome: 0,
            pending: None,
        }
    }

    #[inline]
    pub fn mode(&self) -> TiltMode { self.mode }

    #[inline]
    pub fn is_available(&self) -> bool { self.available }

    /// Switch between auto and manual; manual starts from the current attitude.
    pub fn toggle_mode(&mut self) -> TiltMode {
        self.mode = match self.mode {
            TiltMode::Auto => {
                self.manual = self.auto_angles();
                TiltMode::Manual
            }
            TiltMode::Manual => TiltMode::Auto,
        };
        self.mode
    }

    /// Nudge the manual attitude. Ignored in auto mode.
    pub fn tilt(
        &mut self,
        d_beta: f32,
        d_gamma: f32,
    ) {
        if self.mode != TiltMode::Manual {
            return;
        }
        self.manual.beta = (self.manual.beta + d_beta * MANUAL_STEP).clamp(-MANUAL_LIMIT, MANUAL_LIMIT);
        self.manual.gamma = (self.manual.gamma + d_gamma * MANUAL_STEP).clamp(-MANUAL_LIMIT, MANUAL_LIMIT);
    }

    /// Unplug or replug the sensor. Returns the new availability.
    pub fn toggle_available(&mut self) -> bool {
        self.available = !self.available;
        self.available
    }

    /// Make the next sample a NaN beta, as a misbehaving platform might.
    pub fn inject_nan(&mut self) { self.inject_nan = true; }

    /// Answer of the outstanding permission request once its delay has passed.
    pub fn resolve_permission(&mut self) -> Option<Permission> {
        let (outcome, requested_at) = self.pending?;
        if requested_at.elapsed() < PERMISSION_DELAY {
            return None;
        }
        self.pending = None;
        Some(outcome)
    }

    fn auto_angles(&self) -> AngleSample {
        AngleSample::new(
            AUTO_BETA_AMPLITUDE * (self.phase * AUTO_BETA_FREQ).sin(),
            AUTO_GAMMA_AMPLITUDE * (self.phase * AUTO_GAMMA_FREQ + 1.0).sin(),
        )
    }
}

impl OrientationSource for SimulatedSource {
    fn request_permission(&mut self) -> Permission {
        let outcome = OUTCOMES[self.next_outcome];
        self.next_outcome = (self.next_outcome + 1) % OUTCOMES.len();
        self.pending = Some((outcome, Instant::now()));
        Permission::Pending
    }

    fn poll(&mut self) -> Option<RawSample> {
        if !self.available {
            return None;
        }

        let angles = match self.mode {
            TiltMode::Auto => {
                self.phase += AUTO_TICK;
                self.auto_angles()
            }
            TiltMode::Manual => self.manual,
        };

        if self.inject_nan {
            self.inject_nan = false;
            return Some(RawSample::new(f32::NAN, angles.gamma));
        }
        Some(RawSample::new(angles.beta, angles.gamma))
    }
}
