//! Bullseye widget.
//!
//! The bubble is offset from the center by `-angle / MAX_TILT` of the main
//! radius on each axis (negated, so it drifts toward the raised side) and is
//! then pulled radially back inside `main_radius - bubble_radius`.
//!
//! The norm is taken with `libm::hypotf` on the tilt fractions, not on the
//! scaled offsets: it is exact in `no_std` builds and cannot overflow for any
//! finite input.

use crate::angles::AngleSample;
use crate::config::{CENTER_LINE_THICKNESS_FACTOR, CIRCLE_BORDER_PADDING, MAX_TILT_DEGREES};
use crate::render::{DrawOp, FrameOps, LogicalPoint, emit};
use crate::widgets::WidgetHeader;

/// Circle-specific geometry, in reference units.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CircleGeometry {
    pub size: f32,
    pub zero_circle_padding: f32,
    pub bullseye_radius: f32,
}

impl CircleGeometry {
    /// Radius of the frame line the bubble travels inside.
    #[inline]
    pub fn main_radius(&self) -> f32 { self.size / 2.0 - CIRCLE_BORDER_PADDING }
}

/// Bubble offset from the circle center, clamped to `main_radius - bubble_radius`.
pub fn indicator_offset(
    angles: AngleSample,
    main_radius: f32,
    bubble_radius: f32,
) -> (f32, f32) {
    let gx = angles.gamma / MAX_TILT_DEGREES;
    let gy = angles.beta / MAX_TILT_DEGREES;
    let limit = main_radius - bubble_radius;

    let norm = libm::hypotf(gx, gy);
    if norm > 0.0 && norm * main_radius > limit {
        // unit direction times limit; never divides an infinite distance
        (-(gx / norm) * limit, -(gy / norm) * limit)
    } else {
        (-gx * main_radius, -gy * main_radius)
    }
}

/// Radius of the ring marking the level dead zone.
#[inline]
pub fn zero_ring_radius(
    tolerance: f32,
    main_radius: f32,
    bubble_radius: f32,
    zero_circle_padding: f32,
) -> f32 {
    (tolerance / MAX_TILT_DEGREES) * main_radius + bubble_radius + zero_circle_padding
}

/// Emit track, frame, crosshair, zero ring and bullseye; return the bubble center.
pub(crate) fn draw(
    ops: &mut FrameOps,
    header: &WidgetHeader,
    geometry: CircleGeometry,
    angles: AngleSample,
) -> LogicalPoint {
    let style = &header.style;
    let half = geometry.size / 2.0;
    let center = LogicalPoint::new(header.origin.x + half, header.origin.y + half);
    let main_radius = geometry.main_radius();

    emit(
        ops,
        DrawOp::FillCircle {
            center,
            radius: half,
            color: style.track_color,
        },
    );
    emit(
        ops,
        DrawOp::StrokeCircle {
            center,
            radius: main_radius,
            color: style.line_color,
            thickness: style.normal_line_thickness,
        },
    );

    let center_thickness = style.normal_line_thickness * CENTER_LINE_THICKNESS_FACTOR;
    emit(
        ops,
        DrawOp::Line {
            from: LogicalPoint::new(center.x, center.y - main_radius),
            to: LogicalPoint::new(center.x, center.y + main_radius),
            color: style.center_line_color,
            thickness: center_thickness,
        },
    );
    emit(
        ops,
        DrawOp::Line {
            from: LogicalPoint::new(center.x - main_radius, center.y),
            to: LogicalPoint::new(center.x + main_radius, center.y),
            color: style.center_line_color,
            thickness: center_thickness,
        },
    );

    emit(
        ops,
        DrawOp::StrokeCircle {
            center,
            radius: zero_ring_radius(
                header.tolerance,
                main_radius,
                header.bubble_radius,
                geometry.zero_circle_padding,
            ),
            color: style.line_color,
            thickness: style.zero_line_thickness,
        },
    );
    emit(
        ops,
        DrawOp::FillCircle {
            center,
            radius: geometry.bullseye_radius,
            color: style.center_line_color,
        },
    );

    let (dx, dy) = indicator_offset(angles, main_radius, header.bubble_radius);
    LogicalPoint::new(center.x + dx, center.y + dy)
}
