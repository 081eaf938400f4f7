//! Event log for the on-screen status panel.
//!
//! A fixed ring buffer of typed events. Formatting is deferred to display
//! time through [`Display`], so pushing an entry never formats or allocates.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push(LogEvent::Permission(Permission::Granted));
//!
//! for event in log.iter() {
//!     println!("{event}");
//! }
//! ```

use core::fmt::{self, Display};

use heapless::Deque;

use crate::config::LOG_CAPACITY;
use crate::orientation::Permission;

/// Something worth telling the user about.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum LogEvent {
    Permission(Permission),
    /// Calibration applied; carries the resulting total offsets.
    Calibrated { beta_offset: f32, gamma_offset: f32 },
    /// A NaN or infinite sample was dropped.
    SampleRejected,
    /// Samples are arriving but permission has not been granted.
    SamplesIgnored,
    Resized(u32),
    SensorLost,
    SensorRestored,
}

impl Display for LogEvent {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Permission(Permission::Pending) => write!(f, "Sensor: waiting for permission"),
            Self::Permission(Permission::Granted) => write!(f, "Sensor: permission granted"),
            Self::Permission(Permission::Denied) => write!(f, "Sensor: permission denied"),
            Self::Permission(Permission::Unsupported) => write!(f, "Sensor: not supported"),
            Self::Calibrated {
                beta_offset,
                gamma_offset,
            } => write!(f, "Calibrated B{beta_offset:+.1} G{gamma_offset:+.1}"),
            Self::SampleRejected => write!(f, "Sample rejected (not finite)"),
            Self::SamplesIgnored => write!(f, "Samples ignored (no permission)"),
            Self::Resized(side) => write!(f, "Surface {side}x{side}"),
            Self::SensorLost => write!(f, "Sensor: unavailable"),
            Self::SensorRestored => write!(f, "Sensor: restored"),
        }
    }
}

/// Ring buffer of the last [`LOG_CAPACITY`] events, oldest first.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Deque<LogEvent, LOG_CAPACITY>,
}

impl EventLog {
    pub const fn new() -> Self { Self { events: Deque::new() } }

    /// Append an event, dropping the oldest one when full.
    pub fn push(
        &mut self,
        event: LogEvent,
    ) {
        if self.events.is_full() {
            self.events.pop_front();
        }
        self.events.push_back(event).ok();
    }

    /// Events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEvent> { self.events.iter() }

    #[inline]
    pub fn latest(&self) -> Option<&LogEvent> { self.events.back() }

    #[inline]
    pub fn len(&self) -> usize { self.events.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.events.is_empty() }
}
