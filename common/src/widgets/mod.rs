//! Level widget descriptors and the widget set.
//!
//! A widget is a shared [`WidgetHeader`] (origin, tolerance, bubble radius,
//! style) plus a [`WidgetKind`] holding the variant's geometry. Each kind binds
//! to a fixed [`Axis`] and is rendered by exactly one function in [`circle`] or
//! [`bar`], dispatched from [`WidgetDescriptor::render_into`].
//!
//! Descriptors are plain `Copy` values built once at startup; nothing mutates
//! them afterwards. The [`WidgetSet`] order is paint order, back to front.

pub mod bar;
pub mod circle;

use embedded_graphics::pixelcolor::Rgb888;
use heapless::Vec;

use crate::angles::{AngleSample, Axis};
use crate::colors::{BUBBLE_LEVEL, BUBBLE_NOT_LEVEL, CENTER_LINE, LINE, TRACK, WHITE, mix};
use crate::config::{
    HIGHLIGHT_ALPHA,
    HIGHLIGHT_OFFSET_FACTOR,
    HIGHLIGHT_RADIUS_FACTOR,
    LEVEL_TOLERANCE_DEGREES,
    MAX_WIDGETS,
};
use crate::render::{DrawOp, FrameOps, GradientStop, Indicator, LogicalPoint, emit};

// =============================================================================
// Descriptor Types
// =============================================================================

/// Colors and line widths of one widget.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WidgetStyle {
    pub track_color: Rgb888,
    pub line_color: Rgb888,
    pub center_line_color: Rgb888,
    pub bubble_color_level: Rgb888,
    pub bubble_color_not_level: Rgb888,
    pub zero_line_thickness: f32,
    pub normal_line_thickness: f32,
    pub bubble_line_thickness: f32,
}

impl WidgetStyle {
    /// Dark theme used by the standard bars.
    pub const BAR: Self = Self {
        track_color: TRACK,
        line_color: LINE,
        center_line_color: CENTER_LINE,
        bubble_color_level: BUBBLE_LEVEL,
        bubble_color_not_level: BUBBLE_NOT_LEVEL,
        zero_line_thickness: 2.0,
        normal_line_thickness: 1.5,
        bubble_line_thickness: 1.5,
    };

    /// Dark theme used by the standard circle (heavier lines).
    pub const CIRCLE: Self = Self {
        zero_line_thickness: 2.5,
        normal_line_thickness: 2.0,
        ..Self::BAR
    };

    /// Bubble fill for the given classification.
    #[inline]
    pub const fn bubble_color(
        &self,
        level: bool,
    ) -> Rgb888 {
        if level {
            self.bubble_color_level
        } else {
            self.bubble_color_not_level
        }
    }
}

/// Fields every widget kind shares.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WidgetHeader {
    /// Top-left corner in reference units.
    pub origin: LogicalPoint,
    /// Tilt in degrees below which the widget reads level.
    pub tolerance: f32,
    pub bubble_radius: f32,
    pub style: WidgetStyle,
}

/// Per-variant geometry.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum WidgetKind {
    /// Bullseye driven by both angles.
    Circle {
        size: f32,
        zero_circle_padding: f32,
        bullseye_radius: f32,
    },
    /// Vertical track driven by beta.
    VerticalBar {
        width: f32,
        height: f32,
        zero_line_padding: f32,
        line_shorten: f32,
    },
    /// Horizontal track driven by gamma.
    HorizontalBar {
        width: f32,
        height: f32,
        zero_line_padding: f32,
        line_shorten: f32,
    },
}

impl WidgetKind {
    /// Axis binding implied by the variant.
    pub const fn axis(&self) -> Axis {
        match self {
            Self::Circle { .. } => Axis::Both,
            Self::VerticalBar { .. } => Axis::Beta,
            Self::HorizontalBar { .. } => Axis::Gamma,
        }
    }
}

/// A complete, immutable widget description.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WidgetDescriptor {
    header: WidgetHeader,
    kind: WidgetKind,
}

impl WidgetDescriptor {
    pub const fn new(
        header: WidgetHeader,
        kind: WidgetKind,
    ) -> Self {
        Self { header, kind }
    }

    /// Bullseye of `size` at `(x, y)` with the standard circle parameters.
    pub const fn circle(
        x: f32,
        y: f32,
        size: f32,
    ) -> Self {
        Self::new(
            WidgetHeader {
                origin: LogicalPoint::new(x, y),
                tolerance: LEVEL_TOLERANCE_DEGREES,
                bubble_radius: 15.0,
                style: WidgetStyle::CIRCLE,
            },
            WidgetKind::Circle {
                size,
                zero_circle_padding: 3.0,
                bullseye_radius: 2.0,
            },
        )
    }

    /// Vertical bar with the standard bar parameters.
    pub const fn vertical_bar(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Self {
        Self::new(
            Self::bar_header(x, y),
            WidgetKind::VerticalBar {
                width,
                height,
                zero_line_padding: 2.0,
                line_shorten: 8.0,
            },
        )
    }

    /// Horizontal bar with the standard bar parameters.
    pub const fn horizontal_bar(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Self {
        Self::new(
            Self::bar_header(x, y),
            WidgetKind::HorizontalBar {
                width,
                height,
                zero_line_padding: 2.0,
                line_shorten: 8.0,
            },
        )
    }

    const fn bar_header(
        x: f32,
        y: f32,
    ) -> WidgetHeader {
        WidgetHeader {
            origin: LogicalPoint::new(x, y),
            tolerance: LEVEL_TOLERANCE_DEGREES,
            bubble_radius: 10.0,
            style: WidgetStyle::BAR,
        }
    }

    /// Copy of this widget with its own tolerance.
    #[must_use]
    pub const fn with_tolerance(
        mut self,
        tolerance: f32,
    ) -> Self {
        self.header.tolerance = tolerance;
        self
    }

    #[inline]
    pub const fn header(&self) -> &WidgetHeader { &self.header }

    #[inline]
    pub const fn kind(&self) -> &WidgetKind { &self.kind }

    #[inline]
    pub const fn axis(&self) -> Axis { self.kind.axis() }

    #[inline]
    pub const fn tolerance(&self) -> f32 { self.header.tolerance }

    /// Whether the widget reads level for these calibrated angles.
    #[inline]
    pub fn classify(
        &self,
        calibrated: AngleSample,
    ) -> bool {
        self.axis().is_level(calibrated, self.header.tolerance)
    }

    /// Append this widget's ops and report where its bubble landed.
    pub fn render_into(
        &self,
        calibrated: AngleSample,
        ops: &mut FrameOps,
    ) -> Indicator {
        let level = self.classify(calibrated);
        let center = match self.kind {
            WidgetKind::Circle {
                size,
                zero_circle_padding,
                bullseye_radius,
            } => circle::draw(
                ops,
                &self.header,
                circle::CircleGeometry {
                    size,
                    zero_circle_padding,
                    bullseye_radius,
                },
                calibrated,
            ),
            WidgetKind::VerticalBar {
                width,
                height,
                zero_line_padding,
                line_shorten,
            } => bar::draw_vertical(
                ops,
                &self.header,
                bar::BarGeometry {
                    width,
                    height,
                    zero_line_padding,
                    line_shorten,
                },
                calibrated.beta,
            ),
            WidgetKind::HorizontalBar {
                width,
                height,
                zero_line_padding,
                line_shorten,
            } => bar::draw_horizontal(
                ops,
                &self.header,
                bar::BarGeometry {
                    width,
                    height,
                    zero_line_padding,
                    line_shorten,
                },
                calibrated.gamma,
            ),
        };

        draw_bubble(ops, &self.header, center, level);
        Indicator {
            center,
            radius: self.header.bubble_radius,
            level,
        }
    }
}

/// Gradient fill plus outline, always the last two ops of a widget.
fn draw_bubble(
    ops: &mut FrameOps,
    header: &WidgetHeader,
    center: LogicalPoint,
    level: bool,
) {
    let radius = header.bubble_radius;
    let base = header.style.bubble_color(level);
    let highlight_offset = radius * HIGHLIGHT_OFFSET_FACTOR;

    emit(
        ops,
        DrawOp::FillRadialGradient {
            center,
            radius,
            focus: LogicalPoint::new(center.x - highlight_offset, center.y - highlight_offset),
            focus_radius: radius * HIGHLIGHT_RADIUS_FACTOR,
            stops: [
                GradientStop {
                    offset: 0.0,
                    color: mix(WHITE, base, HIGHLIGHT_ALPHA),
                },
                GradientStop { offset: 0.5, color: base },
                GradientStop { offset: 1.0, color: base },
            ],
        },
    );
    emit(
        ops,
        DrawOp::StrokeCircle {
            center,
            radius,
            color: header.style.line_color,
            thickness: header.style.bubble_line_thickness,
        },
    );
}

// =============================================================================
// Widget Set
// =============================================================================

/// Ordered, bounded list of widgets.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct WidgetSet {
    widgets: Vec<WidgetDescriptor, MAX_WIDGETS>,
}

impl WidgetSet {
    pub const fn new() -> Self { Self { widgets: Vec::new() } }

    /// Circle top-left, beta bar on the right, gamma bar along the bottom.
    pub fn standard() -> Self {
        let mut set = Self::new();
        for widget in [
            WidgetDescriptor::circle(10.0, 10.0, 220.0),
            WidgetDescriptor::vertical_bar(250.0, 10.0, 30.0, 220.0),
            WidgetDescriptor::horizontal_bar(10.0, 250.0, 220.0, 30.0),
        ] {
            set.widgets.push(widget).ok();
        }
        set
    }

    /// Append a widget, handing it back when the set is full.
    pub fn push(
        &mut self,
        widget: WidgetDescriptor,
    ) -> Result<(), WidgetDescriptor> {
        self.widgets.push(widget)
    }

    #[inline]
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&WidgetDescriptor> {
        self.widgets.get(index)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &WidgetDescriptor> { self.widgets.iter() }

    #[inline]
    pub fn len(&self) -> usize { self.widgets.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.widgets.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let set = WidgetSet::standard();
        assert_eq!(set.len(), 3);
        let axes: std::vec::Vec<Axis> = set.iter().map(WidgetDescriptor::axis).collect();
        assert_eq!(axes, [Axis::Both, Axis::Beta, Axis::Gamma]);
        assert_eq!(set.get(0).unwrap().header().bubble_radius, 15.0);
        assert_eq!(set.get(1).unwrap().header().bubble_radius, 10.0);
        assert_eq!(set.get(2).unwrap().header().origin, LogicalPoint::new(10.0, 250.0));
    }

    #[test]
    fn test_standard_widgets_share_tolerance() {
        for widget in WidgetSet::standard().iter() {
            assert_eq!(widget.tolerance(), LEVEL_TOLERANCE_DEGREES);
        }
    }

    #[test]
    fn test_classify_strict_boundary() {
        let circle = WidgetDescriptor::circle(0.0, 0.0, 200.0);
        assert!(circle.classify(AngleSample::new(1.999, -1.999)));
        assert!(!circle.classify(AngleSample::new(2.0, 0.0)));
        assert!(!circle.classify(AngleSample::new(0.0, 2.0)));
    }

    #[test]
    fn test_tolerance_override() {
        let bar = WidgetDescriptor::vertical_bar(0.0, 0.0, 30.0, 220.0).with_tolerance(5.0);
        assert_eq!(bar.tolerance(), 5.0);
        assert!(bar.classify(AngleSample::new(4.9, 80.0)));
        assert!(!bar.classify(AngleSample::new(5.0, 0.0)));

        let default_bar = WidgetDescriptor::vertical_bar(0.0, 0.0, 30.0, 220.0);
        assert!(!default_bar.classify(AngleSample::new(4.9, 0.0)));
    }

    #[test]
    fn test_set_capacity() {
        let mut set = WidgetSet::standard();
        let extra = WidgetDescriptor::circle(0.0, 0.0, 50.0);
        assert!(set.push(extra).is_ok());
        assert_eq!(set.push(extra), Err(extra));
        assert_eq!(set.len(), MAX_WIDGETS);
    }

    #[test]
    fn test_bubble_color_policy() {
        let style = WidgetStyle::BAR;
        assert_eq!(style.bubble_color(true), BUBBLE_LEVEL);
        assert_eq!(style.bubble_color(false), BUBBLE_NOT_LEVEL);
        assert_eq!(WidgetStyle::CIRCLE.bubble_line_thickness, 1.5);
        assert_eq!(WidgetStyle::CIRCLE.normal_line_thickness, 2.0);
    }

    #[test]
    fn test_bubble_gradient_uses_classified_color() {
        let widget = WidgetDescriptor::horizontal_bar(0.0, 0.0, 220.0, 30.0);
        let mut ops = FrameOps::new();
        let indicator = widget.render_into(AngleSample::new(0.0, 30.0), &mut ops);
        assert!(!indicator.level);

        let gradient = ops.iter().rev().nth(1).copied();
        match gradient {
            Some(DrawOp::FillRadialGradient { stops, focus, center, .. }) => {
                assert_eq!(stops[1].color, BUBBLE_NOT_LEVEL);
                assert_eq!(stops[2].color, BUBBLE_NOT_LEVEL);
                assert!(focus.x < center.x && focus.y < center.y);
            }
            other => panic!("expected gradient, got {other:?}"),
        }
    }
}
