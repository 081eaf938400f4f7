//! Reference frame and rendering configuration constants.
//!
//! All widget geometry is authored in a fixed square reference frame of
//! [`REFERENCE_SIZE`] logical units. The renderer applies a single uniform
//! scale (`surface_side / REFERENCE_SIZE`) before anything reaches the
//! surface, so none of the constants below depend on the physical size.
//!
//! # Compile-Time Validation
//!
//! Each group carries `const` assertions. A misconfigured value (for example
//! a zero tilt range, which would divide by zero in every transform) fails
//! the build instead of producing NaN coordinates at runtime.

// =============================================================================
// Reference Frame
// =============================================================================

/// Side length of the square logical coordinate space.
pub const REFERENCE_SIZE: f32 = 300.0;

const _: () = assert!(REFERENCE_SIZE > 0.0);

// =============================================================================
// Tilt Mapping
// =============================================================================

/// Tilt that maps to a full deflection of an indicator.
pub const MAX_TILT_DEGREES: f32 = 90.0;

/// Tilt below which a widget reads as level (shared by the standard widgets).
pub const LEVEL_TOLERANCE_DEGREES: f32 = 2.0;

const _: () = assert!(MAX_TILT_DEGREES > 0.0);
const _: () = assert!(LEVEL_TOLERANCE_DEGREES > 0.0);
const _: () = assert!(LEVEL_TOLERANCE_DEGREES < MAX_TILT_DEGREES);

// =============================================================================
// Widget Drawing
// =============================================================================

/// Gap between the circle widget's outer track edge and its frame line.
pub const CIRCLE_BORDER_PADDING: f32 = 10.0;

/// Center lines are drawn at this fraction of a widget's normal line thickness.
pub const CENTER_LINE_THICKNESS_FACTOR: f32 = 0.5;

/// Offset of the gradient highlight from the bubble center, as a fraction of
/// the bubble radius (applied to both axes, up and to the left).
pub const HIGHLIGHT_OFFSET_FACTOR: f32 = 0.3;

/// Radius of the gradient's inner highlight circle, as a fraction of the
/// bubble radius.
pub const HIGHLIGHT_RADIUS_FACTOR: f32 = 0.1;

/// Opacity of the white highlight at the first gradient stop.
pub const HIGHLIGHT_ALPHA: f32 = 0.7;

const _: () = assert!(CIRCLE_BORDER_PADDING >= 0.0);
const _: () = assert!(HIGHLIGHT_RADIUS_FACTOR < 1.0);
const _: () = assert!(HIGHLIGHT_ALPHA >= 0.0 && HIGHLIGHT_ALPHA <= 1.0);

// =============================================================================
// Capacities
// =============================================================================

/// Maximum number of widgets in a [`WidgetSet`](crate::widgets::WidgetSet).
pub const MAX_WIDGETS: usize = 4;

/// Ops emitted before any widget (clear + background fill).
pub const FRAME_PROLOGUE_OPS: usize = 2;

/// Upper bound on ops a single widget emits (the circle is the largest).
pub const MAX_OPS_PER_WIDGET: usize = 8;

/// Capacity of a [`RenderFrame`](crate::render::RenderFrame)'s op list.
pub const MAX_FRAME_OPS: usize = FRAME_PROLOGUE_OPS + MAX_WIDGETS * MAX_OPS_PER_WIDGET;

/// Number of entries kept by the [`EventLog`](crate::log::EventLog).
pub const LOG_CAPACITY: usize = 6;

const _: () = assert!(MAX_WIDGETS >= 3);
const _: () = assert!(LOG_CAPACITY > 0);

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_capacity_covers_full_widget_set() {
        assert_eq!(MAX_FRAME_OPS, 34);
        assert!(MAX_FRAME_OPS >= FRAME_PROLOGUE_OPS + 3 * MAX_OPS_PER_WIDGET);
    }

    #[test]
    fn test_tolerance_inside_tilt_range() {
        assert!(LEVEL_TOLERANCE_DEGREES < MAX_TILT_DEGREES);
    }
}
