//! Event-driven composition of calibration, widgets and renderer.
//!
//! The host owns one [`Leveler`] and feeds it [`Event`]s in arrival order.
//! Each call to [`Leveler::handle`] answers with the frame to paint, or `None`
//! when the screen should stay as it is.
//!
//! # Sensor lifecycle
//!
//! ```text
//! Pending ──Granted──> Active <──sample── Lost
//!    │                   └──SensorLost──────^
//!    └──Denied / Unsupported──> (terminal until the next permission event)
//! ```
//!
//! Samples are ignored unless the sensor is `Active` or `Lost`. Nothing in
//! this module panics on sensor trouble; it is recorded in the [`EventLog`].

use crate::angles::AngleSample;
use crate::calibration::CalibrationOffset;
use crate::error::LevelError;
use crate::log::{EventLog, LogEvent};
use crate::orientation::{OrientationSource, Permission, RawSample};
use crate::readout::Readout;
use crate::render::{RenderFrame, render};
use crate::widgets::WidgetSet;

/// Where the orientation sensor stands, as far as the display cares.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SensorStatus {
    /// Permission requested, no answer yet.
    Pending,
    /// Samples are flowing.
    Active,
    /// Permission was granted but the source stopped delivering.
    Lost,
    Denied,
    Unsupported,
}

impl SensorStatus {
    /// Whether samples should be applied in this state.
    #[inline]
    pub const fn accepts_samples(self) -> bool { matches!(self, Self::Active | Self::Lost) }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "WAITING",
            Self::Active => "ACTIVE",
            Self::Lost => "NO SIGNAL",
            Self::Denied => "DENIED",
            Self::Unsupported => "UNSUPPORTED",
        }
    }
}

impl From<Permission> for SensorStatus {
    fn from(permission: Permission) -> Self {
        match permission {
            Permission::Pending => Self::Pending,
            Permission::Granted => Self::Active,
            Permission::Denied => Self::Denied,
            Permission::Unsupported => Self::Unsupported,
        }
    }
}

/// Everything the host can tell the leveler.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Event {
    Sample(RawSample),
    /// Host surface changed size. Non-square surfaces are squared by width.
    Resize { width: u32, height: u32 },
    /// Make the current attitude the new zero.
    Calibrate,
    /// Permission handshake answered (or restarted with `Pending`).
    Permission(Permission),
    /// The source reported it can no longer deliver samples.
    SensorLost,
}

pub struct Leveler {
    widgets: WidgetSet,
    offset: CalibrationOffset,
    /// Last accepted calibrated angles; always finite.
    calibrated: AngleSample,
    side: u32,
    status: SensorStatus,
    frame: RenderFrame,
    log: EventLog,
}

impl Leveler {
    /// Start with zero offsets, level angles and a pending sensor.
    pub fn new(
        widgets: WidgetSet,
        side: u32,
    ) -> Result<Self, LevelError> {
        let frame = render(&widgets, AngleSample::ZERO, side)?;
        let mut log = EventLog::new();
        log.push(LogEvent::Permission(Permission::Pending));
        Ok(Self {
            widgets,
            offset: CalibrationOffset::new(),
            calibrated: AngleSample::ZERO,
            side,
            status: SensorStatus::Pending,
            frame,
            log,
        })
    }

    /// Apply one event. Returns the frame to paint when it changed.
    pub fn handle(
        &mut self,
        event: Event,
    ) -> Option<&RenderFrame> {
        match event {
            Event::Sample(raw) => self.on_sample(raw),
            Event::Resize { width, height: _ } => {
                self.side = width;
                self.note(LogEvent::Resized(width));
                self.rerender()
            }
            Event::Calibrate => {
                self.offset.calibrate(self.calibrated);
                self.calibrated = AngleSample::ZERO;
                self.note(LogEvent::Calibrated {
                    beta_offset: self.offset.beta_offset(),
                    gamma_offset: self.offset.gamma_offset(),
                });
                self.rerender()
            }
            Event::Permission(permission) => {
                self.status = permission.into();
                self.note(LogEvent::Permission(permission));
                None
            }
            Event::SensorLost => {
                if self.status == SensorStatus::Active {
                    self.status = SensorStatus::Lost;
                    self.note(LogEvent::SensorLost);
                }
                None
            }
        }
    }

    /// Run the permission handshake against `source`.
    pub fn request_permission<S: OrientationSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Option<&RenderFrame> {
        let permission = source.request_permission();
        self.handle(Event::Permission(permission))
    }

    /// Poll `source` once and apply whatever it delivered.
    pub fn poll<S: OrientationSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Option<&RenderFrame> {
        let raw = source.poll()?;
        self.handle(Event::Sample(raw))
    }

    fn on_sample(
        &mut self,
        raw: RawSample,
    ) -> Option<&RenderFrame> {
        if !self.status.accepts_samples() {
            self.note(LogEvent::SamplesIgnored);
            return None;
        }
        let angles = raw.angles()?;
        if self.status == SensorStatus::Lost {
            self.status = SensorStatus::Active;
            self.note(LogEvent::SensorRestored);
        }

        let calibrated = self.offset.apply_offset(angles);
        match render(&self.widgets, calibrated, self.side) {
            Ok(frame) => {
                self.calibrated = calibrated;
                self.frame = frame;
                Some(&self.frame)
            }
            Err(_) => {
                self.note(LogEvent::SampleRejected);
                None
            }
        }
    }

    fn rerender(&mut self) -> Option<&RenderFrame> {
        // last-known angles are finite, so this cannot be rejected
        self.frame = render(&self.widgets, self.calibrated, self.side).ok()?;
        Some(&self.frame)
    }

    /// Log an event unless it repeats the newest entry.
    fn note(
        &mut self,
        event: LogEvent,
    ) {
        if self.log.latest() != Some(&event) {
            self.log.push(event);
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Frame currently on screen.
    #[inline]
    pub fn frame(&self) -> &RenderFrame { &self.frame }

    #[inline]
    pub fn status(&self) -> SensorStatus { self.status }

    #[inline]
    pub fn offset(&self) -> &CalibrationOffset { &self.offset }

    #[inline]
    pub fn calibrated(&self) -> AngleSample { self.calibrated }

    #[inline]
    pub fn side(&self) -> u32 { self.side }

    #[inline]
    pub fn widgets(&self) -> &WidgetSet { &self.widgets }

    #[inline]
    pub fn log(&self) -> &EventLog { &self.log }

    pub fn readout(&self) -> Readout { Readout::new(self.calibrated) }
}
