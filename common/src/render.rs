//! Frame construction: widgets plus calibrated angles in, draw ops out.
//!
//! # Coordinate Spaces
//!
//! | Space | Units | Used by |
//! |-------|-------|---------|
//! | Reference | `0.0..=REFERENCE_SIZE` logical units | widget geometry, [`DrawOp`]s |
//! | Physical | surface pixels, `0.0..=side` | [`Surface`](crate::surface::Surface) calls |
//!
//! [`render`] only ever produces reference coordinates. The single conversion
//! to physical pixels is [`DrawOp::scaled`], applied by
//! [`paint`](crate::surface::paint) with the frame's scale factor
//! `side / REFERENCE_SIZE`.
//!
//! # Purity
//!
//! `render` reads nothing but its arguments and keeps no state, so identical
//! inputs give identical frames. That is what lets resize events re-render at
//! the last known angles without any bookkeeping.

use embedded_graphics::pixelcolor::Rgb888;
use heapless::Vec;

use crate::angles::AngleSample;
use crate::colors::BACKGROUND;
use crate::config::{MAX_FRAME_OPS, MAX_WIDGETS, REFERENCE_SIZE};
use crate::error::LevelError;
use crate::widgets::WidgetSet;

/// Op list of one frame.
pub type FrameOps = Vec<DrawOp, MAX_FRAME_OPS>;

// =============================================================================
// Geometry
// =============================================================================

/// A point in either coordinate space (the op says which).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct LogicalPoint {
    pub x: f32,
    pub y: f32,
}

impl LogicalPoint {
    #[inline]
    pub const fn new(
        x: f32,
        y: f32,
    ) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn scaled(
        self,
        scale: f32,
    ) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

/// One color stop of a radial gradient.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GradientStop {
    /// Position along the gradient, `0.0..=1.0`.
    pub offset: f32,
    pub color: Rgb888,
}

// =============================================================================
// Draw Ops
// =============================================================================

/// A single drawing instruction.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DrawOp {
    /// Wipe the whole surface.
    Clear,
    FillRect {
        origin: LogicalPoint,
        width: f32,
        height: f32,
        color: Rgb888,
    },
    StrokeRect {
        origin: LogicalPoint,
        width: f32,
        height: f32,
        color: Rgb888,
        thickness: f32,
    },
    FillCircle {
        center: LogicalPoint,
        radius: f32,
        color: Rgb888,
    },
    StrokeCircle {
        center: LogicalPoint,
        radius: f32,
        color: Rgb888,
        thickness: f32,
    },
    Line {
        from: LogicalPoint,
        to: LogicalPoint,
        color: Rgb888,
        thickness: f32,
    },
    /// Disk filled with a two-circle radial gradient: color runs from the
    /// `focus` circle (`focus_radius`) out to the disk edge.
    FillRadialGradient {
        center: LogicalPoint,
        radius: f32,
        focus: LogicalPoint,
        focus_radius: f32,
        stops: [GradientStop; 3],
    },
}

impl DrawOp {
    /// Uniformly scale every coordinate, length and line width.
    pub fn scaled(
        self,
        scale: f32,
    ) -> Self {
        match self {
            Self::Clear => Self::Clear,
            Self::FillRect {
                origin,
                width,
                height,
                color,
            } => Self::FillRect {
                origin: origin.scaled(scale),
                width: width * scale,
                height: height * scale,
                color,
            },
            Self::StrokeRect {
                origin,
                width,
                height,
                color,
                thickness,
            } => Self::StrokeRect {
                origin: origin.scaled(scale),
                width: width * scale,
                height: height * scale,
                color,
                thickness: thickness * scale,
            },
            Self::FillCircle { center, radius, color } => Self::FillCircle {
                center: center.scaled(scale),
                radius: radius * scale,
                color,
            },
            Self::StrokeCircle {
                center,
                radius,
                color,
                thickness,
            } => Self::StrokeCircle {
                center: center.scaled(scale),
                radius: radius * scale,
                color,
                thickness: thickness * scale,
            },
            Self::Line {
                from,
                to,
                color,
                thickness,
            } => Self::Line {
                from: from.scaled(scale),
                to: to.scaled(scale),
                color,
                thickness: thickness * scale,
            },
            Self::FillRadialGradient {
                center,
                radius,
                focus,
                focus_radius,
                stops,
            } => Self::FillRadialGradient {
                center: center.scaled(scale),
                radius: radius * scale,
                focus: focus.scaled(scale),
                focus_radius: focus_radius * scale,
                stops,
            },
        }
    }
}

/// Append an op. Capacity is fixed by [`MAX_FRAME_OPS`], which is sized for
/// a full widget set, so a failed push only drops ops of an oversized set.
#[inline]
pub(crate) fn emit(
    ops: &mut FrameOps,
    op: DrawOp,
) {
    let pushed = ops.push(op);
    debug_assert!(pushed.is_ok(), "frame op capacity exceeded");
}

// =============================================================================
// Frame
// =============================================================================

/// Where a widget's bubble ended up, in reference units.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Indicator {
    pub center: LogicalPoint,
    pub radius: f32,
    pub level: bool,
}

/// Everything needed to paint one update.
#[derive(Clone, PartialEq, Debug)]
pub struct RenderFrame {
    side: u32,
    scale: f32,
    angles: AngleSample,
    ops: FrameOps,
    indicators: Vec<Indicator, MAX_WIDGETS>,
}

impl RenderFrame {
    /// Physical side length of the square surface this frame targets.
    #[inline]
    pub const fn side(&self) -> u32 { self.side }

    /// Reference-to-physical scale factor.
    #[inline]
    pub const fn scale(&self) -> f32 { self.scale }

    /// Calibrated angles the frame was rendered from.
    #[inline]
    pub const fn angles(&self) -> AngleSample { self.angles }

    /// Ops in reference units, in paint order.
    #[inline]
    pub fn ops(&self) -> &[DrawOp] { &self.ops }

    /// Ops converted to physical pixels, in paint order.
    pub fn physical_ops(&self) -> impl Iterator<Item = DrawOp> + '_ {
        let scale = self.scale;
        self.ops.iter().map(move |op| op.scaled(scale))
    }

    /// One indicator per widget, in widget order.
    #[inline]
    pub fn indicators(&self) -> &[Indicator] { &self.indicators }

    /// Indicator center of widget `index` in physical pixels.
    pub fn physical_indicator(
        &self,
        index: usize,
    ) -> Option<LogicalPoint> {
        self.indicators
            .get(index)
            .map(|indicator| indicator.center.scaled(self.scale))
    }
}

/// Build the frame for `angles` on a square surface of `side` pixels.
///
/// Returns [`LevelError::NonFiniteSample`] for NaN or infinite angles; the
/// caller keeps showing its previous frame.
pub fn render(
    widgets: &WidgetSet,
    angles: AngleSample,
    side: u32,
) -> Result<RenderFrame, LevelError> {
    if !angles.is_finite() {
        return Err(LevelError::NonFiniteSample);
    }

    let mut ops = FrameOps::new();
    emit(&mut ops, DrawOp::Clear);
    emit(
        &mut ops,
        DrawOp::FillRect {
            origin: LogicalPoint::new(0.0, 0.0),
            width: REFERENCE_SIZE,
            height: REFERENCE_SIZE,
            color: BACKGROUND,
        },
    );

    let mut indicators = Vec::new();
    for widget in widgets.iter() {
        let indicator = widget.render_into(angles, &mut ops);
        indicators.push(indicator).ok();
    }

    Ok(RenderFrame {
        side,
        scale: side as f32 / REFERENCE_SIZE,
        angles,
        ops,
        indicators,
    })
}
