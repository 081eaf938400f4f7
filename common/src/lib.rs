//! Platform-agnostic core of the bubble level.
//!
//! Everything here is pure or event driven and shared by any host that can
//! deliver tilt samples and draw primitives:
//!
//! - [`angles`]: Tilt samples and axis bindings
//! - [`calibration`]: Zero-point offsets
//! - [`widgets`]: Circle and bar descriptors, the widget set
//! - [`render`]: Frame construction in the 300-unit reference frame
//! - [`surface`]: Drawing boundary and the `embedded-graphics` adapter
//! - [`orientation`]: Sensor boundary and permission handshake
//! - [`leveler`]: Event loop state tying it all together
//! - [`log`]: On-screen event log
//! - [`readout`]: Text lines for the calibrated angles
//! - [`colors`], [`config`]: Palette and tuning constants
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and never allocates; all buffers are
//! `heapless` with capacities fixed in [`config`].

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod angles;
pub mod calibration;
pub mod colors;
pub mod config;
pub mod error;
pub mod leveler;
pub mod log;
pub mod orientation;
pub mod readout;
pub mod render;
pub mod surface;
pub mod widgets;

// Re-export commonly used items
pub use angles::{AngleSample, Axis};
pub use calibration::CalibrationOffset;
pub use error::LevelError;
pub use leveler::{Event, Leveler, SensorStatus};
pub use log::{EventLog, LogEvent};
pub use orientation::{OrientationSource, Permission, RawSample};
pub use readout::Readout;
pub use render::{DrawOp, RenderFrame, render};
pub use surface::{EgSurface, Surface, paint};
pub use widgets::{WidgetDescriptor, WidgetKind, WidgetSet};
