//! Linear bar widgets.
//!
//! Both bars share one transform along their long axis:
//!
//! ```text
//! pos = center - (angle / MAX_TILT) * (half_length - bubble_radius)
//! pos = min(max(pos, start + bubble_radius), end - bubble_radius)
//! ```
//!
//! The vertical bar feeds it beta along Y, the horizontal bar gamma along X.
//! The subtraction gives the same "bubble rises to the high side" behavior
//! as the circle.

use embedded_graphics::pixelcolor::Rgb888;

use crate::config::{CENTER_LINE_THICKNESS_FACTOR, MAX_TILT_DEGREES};
use crate::render::{DrawOp, FrameOps, LogicalPoint, emit};
use crate::widgets::WidgetHeader;

/// Bar-specific geometry, in reference units.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BarGeometry {
    pub width: f32,
    pub height: f32,
    pub zero_line_padding: f32,
    pub line_shorten: f32,
}

/// Bubble position along a track centered at `center` with half length
/// `half_length`, kept fully inside the track.
pub fn indicator_position(
    angle: f32,
    center: f32,
    half_length: f32,
    bubble_radius: f32,
) -> f32 {
    let travel = half_length - bubble_radius;
    let unclamped = center - (angle / MAX_TILT_DEGREES) * travel;
    // max-then-min rather than clamp(): a bubble wider than its track must not panic
    unclamped
        .max(center - half_length + bubble_radius)
        .min(center + half_length - bubble_radius)
}

/// Distance of each zero line from the track center.
#[inline]
pub fn zero_line_gap(
    bubble_radius: f32,
    zero_line_padding: f32,
) -> f32 {
    bubble_radius + zero_line_padding
}

fn draw_track(
    ops: &mut FrameOps,
    header: &WidgetHeader,
    geometry: &BarGeometry,
) {
    let style = &header.style;
    emit(
        ops,
        DrawOp::FillRect {
            origin: header.origin,
            width: geometry.width,
            height: geometry.height,
            color: style.track_color,
        },
    );
    emit(
        ops,
        DrawOp::StrokeRect {
            origin: header.origin,
            width: geometry.width,
            height: geometry.height,
            color: style.line_color,
            thickness: style.normal_line_thickness,
        },
    );
}

fn line(
    ops: &mut FrameOps,
    from: LogicalPoint,
    to: LogicalPoint,
    color: Rgb888,
    thickness: f32,
) {
    emit(
        ops,
        DrawOp::Line {
            from,
            to,
            color,
            thickness,
        },
    );
}

/// Emit the beta bar's track and markers; return the bubble center.
pub(crate) fn draw_vertical(
    ops: &mut FrameOps,
    header: &WidgetHeader,
    geometry: BarGeometry,
    beta: f32,
) -> LogicalPoint {
    let style = &header.style;
    let LogicalPoint { x, y } = header.origin;
    let center_x = x + geometry.width / 2.0;
    let center_y = y + geometry.height / 2.0;

    draw_track(ops, header, &geometry);
    line(
        ops,
        LogicalPoint::new(center_x, y),
        LogicalPoint::new(center_x, y + geometry.height),
        style.center_line_color,
        style.normal_line_thickness * CENTER_LINE_THICKNESS_FACTOR,
    );

    let gap = zero_line_gap(header.bubble_radius, geometry.zero_line_padding);
    let length = geometry.width - geometry.line_shorten;
    let start_x = x + (geometry.width - length) / 2.0;
    for zero_y in [center_y - gap, center_y + gap] {
        line(
            ops,
            LogicalPoint::new(start_x, zero_y),
            LogicalPoint::new(start_x + length, zero_y),
            style.line_color,
            style.zero_line_thickness,
        );
    }

    let bubble_y = indicator_position(beta, center_y, geometry.height / 2.0, header.bubble_radius);
    LogicalPoint::new(center_x, bubble_y)
}

/// Emit the gamma bar's track and markers; return the bubble center.
pub(crate) fn draw_horizontal(
    ops: &mut FrameOps,
    header: &WidgetHeader,
    geometry: BarGeometry,
    gamma: f32,
) -> LogicalPoint {
    let style = &header.style;
    let LogicalPoint { x, y } = header.origin;
    let center_x = x + geometry.width / 2.0;
    let center_y = y + geometry.height / 2.0;

    draw_track(ops, header, &geometry);
    line(
        ops,
        LogicalPoint::new(x, center_y),
        LogicalPoint::new(x + geometry.width, center_y),
        style.center_line_color,
        style.normal_line_thickness * CENTER_LINE_THICKNESS_FACTOR,
    );

    let gap = zero_line_gap(header.bubble_radius, geometry.zero_line_padding);
    let length = geometry.height - geometry.line_shorten;
    let start_y = y + (geometry.height - length) / 2.0;
    for zero_x in [center_x - gap, center_x + gap] {
        line(
            ops,
            LogicalPoint::new(zero_x, start_y),
            LogicalPoint::new(zero_x, start_y + length),
            style.line_color,
            style.zero_line_thickness,
        );
    }

    let bubble_x = indicator_position(gamma, center_x, geometry.width / 2.0, header.bubble_radius);
    LogicalPoint::new(bubble_x, center_y)
}
