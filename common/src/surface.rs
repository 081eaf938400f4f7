//! Surface Host boundary: the draw API a host provides, and the painter that
//! replays a [`RenderFrame`] onto it.
//!
//! [`EgSurface`] implements the API for any `embedded_graphics` draw target,
//! which covers the desktop simulator and embedded displays alike. Primitives
//! are rasterized with `embedded_graphics` styles (strokes centered on the
//! outline, like a canvas); the radial gradient is rasterized per pixel.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
#[cfg(not(test))]
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::error::LevelError;
use crate::render::{DrawOp, GradientStop, LogicalPoint, RenderFrame};

// =============================================================================
// Draw API
// =============================================================================

/// A square drawable area. All coordinates are physical pixels.
pub trait Surface {
    /// Side length in pixels. Zero means no drawable area.
    fn side(&self) -> u32;

    fn clear(&mut self) -> Result<(), LevelError>;

    fn fill_rect(
        &mut self,
        origin: LogicalPoint,
        width: f32,
        height: f32,
        color: Rgb888,
    ) -> Result<(), LevelError>;

    fn stroke_rect(
        &mut self,
        origin: LogicalPoint,
        width: f32,
        height: f32,
        color: Rgb888,
        thickness: f32,
    ) -> Result<(), LevelError>;

    fn fill_circle(
        &mut self,
        center: LogicalPoint,
        radius: f32,
        color: Rgb888,
    ) -> Result<(), LevelError>;

    fn stroke_circle(
        &mut self,
        center: LogicalPoint,
        radius: f32,
        color: Rgb888,
        thickness: f32,
    ) -> Result<(), LevelError>;

    fn line(
        &mut self,
        from: LogicalPoint,
        to: LogicalPoint,
        color: Rgb888,
        thickness: f32,
    ) -> Result<(), LevelError>;

    fn fill_radial_gradient(
        &mut self,
        center: LogicalPoint,
        radius: f32,
        focus: LogicalPoint,
        focus_radius: f32,
        stops: &[GradientStop; 3],
    ) -> Result<(), LevelError>;
}

/// Replay `frame` onto `surface`, scaling reference units to pixels.
///
/// Stops at the first failing primitive; the host decides whether that is
/// fatal for its view.
pub fn paint<S: Surface + ?Sized>(
    frame: &RenderFrame,
    surface: &mut S,
) -> Result<(), LevelError> {
    if surface.side() == 0 {
        return Err(LevelError::SurfaceUnavailable);
    }

    for op in frame.physical_ops() {
        match op {
            DrawOp::Clear => surface.clear()?,
            DrawOp::FillRect {
                origin,
                width,
                height,
                color,
            } => surface.fill_rect(origin, width, height, color)?,
            DrawOp::StrokeRect {
                origin,
                width,
                height,
                color,
                thickness,
            } => surface.stroke_rect(origin, width, height, color, thickness)?,
            DrawOp::FillCircle { center, radius, color } => surface.fill_circle(center, radius, color)?,
            DrawOp::StrokeCircle {
                center,
                radius,
                color,
                thickness,
            } => surface.stroke_circle(center, radius, color, thickness)?,
            DrawOp::Line {
                from,
                to,
                color,
                thickness,
            } => surface.line(from, to, color, thickness)?,
            DrawOp::FillRadialGradient {
                center,
                radius,
                focus,
                focus_radius,
                stops,
            } => surface.fill_radial_gradient(center, radius, focus, focus_radius, &stops)?,
        }
    }
    Ok(())
}

// =============================================================================
// embedded-graphics Adapter
// =============================================================================

/// [`Surface`] over an `embedded_graphics` draw target.
///
/// The side is the target's bounding box width; a non-square target is
/// treated as a square of that width.
pub struct EgSurface<'a, D> {
    target: &'a mut D,
}

impl<'a, D> EgSurface<'a, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    pub fn new(target: &'a mut D) -> Self { Self { target } }
}

#[inline]
fn to_point(p: LogicalPoint) -> Point { Point::new(p.x.round() as i32, p.y.round() as i32) }

#[inline]
fn to_length(value: f32) -> u32 { value.round().max(0.0) as u32 }

/// Canvas strokes never vanish: anything thinner than a pixel draws one pixel wide.
#[inline]
fn to_stroke(thickness: f32) -> u32 { to_length(thickness).max(1) }

fn stroke_style(
    color: Rgb888,
    thickness: f32,
) -> PrimitiveStyle<Rgb888> {
    PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(to_stroke(thickness))
        .stroke_alignment(StrokeAlignment::Center)
        .build()
}

impl<D> Surface for EgSurface<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    fn side(&self) -> u32 { self.target.bounding_box().size.width }

    fn clear(&mut self) -> Result<(), LevelError> {
        self.target.clear(Rgb888::BLACK).map_err(|_| LevelError::Surface)
    }

    fn fill_rect(
        &mut self,
        origin: LogicalPoint,
        width: f32,
        height: f32,
        color: Rgb888,
    ) -> Result<(), LevelError> {
        Rectangle::new(to_point(origin), Size::new(to_length(width), to_length(height)))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self.target)
            .map_err(|_| LevelError::Surface)
    }

    fn stroke_rect(
        &mut self,
        origin: LogicalPoint,
        width: f32,
        height: f32,
        color: Rgb888,
        thickness: f32,
    ) -> Result<(), LevelError> {
        Rectangle::new(to_point(origin), Size::new(to_length(width), to_length(height)))
            .into_styled(stroke_style(color, thickness))
            .draw(self.target)
            .map_err(|_| LevelError::Surface)
    }

    fn fill_circle(
        &mut self,
        center: LogicalPoint,
        radius: f32,
        color: Rgb888,
    ) -> Result<(), LevelError> {
        Circle::with_center(to_point(center), to_length(radius * 2.0))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self.target)
            .map_err(|_| LevelError::Surface)
    }

    fn stroke_circle(
        &mut self,
        center: LogicalPoint,
        radius: f32,
        color: Rgb888,
        thickness: f32,
    ) -> Result<(), LevelError> {
        Circle::with_center(to_point(center), to_length(radius * 2.0))
            .into_styled(stroke_style(color, thickness))
            .draw(self.target)
            .map_err(|_| LevelError::Surface)
    }

    fn line(
        &mut self,
        from: LogicalPoint,
        to: LogicalPoint,
        color: Rgb888,
        thickness: f32,
    ) -> Result<(), LevelError> {
        Line::new(to_point(from), to_point(to))
            .into_styled(PrimitiveStyle::with_stroke(color, to_stroke(thickness)))
            .draw(self.target)
            .map_err(|_| LevelError::Surface)
    }

    fn fill_radial_gradient(
        &mut self,
        center: LogicalPoint,
        radius: f32,
        focus: LogicalPoint,
        focus_radius: f32,
        stops: &[GradientStop; 3],
    ) -> Result<(), LevelError> {
        let min_x = (center.x - radius).floor() as i32;
        let max_x = (center.x + radius).ceil() as i32;
        let min_y = (center.y - radius).floor() as i32;
        let max_y = (center.y + radius).ceil() as i32;
        let radius_sq = radius * radius;

        let pixels = (min_y..=max_y).flat_map(move |py| {
            (min_x..=max_x).filter_map(move |px| {
                let sample = LogicalPoint::new(px as f32 + 0.5, py as f32 + 0.5);
                let dx = sample.x - center.x;
                let dy = sample.y - center.y;
                if dx * dx + dy * dy > radius_sq {
                    return None;
                }
                let t = gradient_position(sample, focus, focus_radius, center, radius);
                Some(Pixel(Point::new(px, py), color_at(stops, t)))
            })
        });
        self.target.draw_iter(pixels).map_err(|_| LevelError::Surface)
    }
}

// =============================================================================
// Gradient Math
// =============================================================================

/// Position of `p` along a two-circle radial gradient, padded to `0.0..=1.0`.
///
/// Solves `|p - c(w)| = r(w)` for the largest `w`, where the circle
/// interpolates from `(focus, focus_radius)` at `w = 0` to
/// `(center, radius)` at `w = 1`.
pub fn gradient_position(
    p: LogicalPoint,
    focus: LogicalPoint,
    focus_radius: f32,
    center: LogicalPoint,
    radius: f32,
) -> f32 {
    let cdx = center.x - focus.x;
    let cdy = center.y - focus.y;
    let dr = radius - focus_radius;
    let pdx = p.x - focus.x;
    let pdy = p.y - focus.y;

    let a = cdx * cdx + cdy * cdy - dr * dr;
    let b = pdx * cdx + pdy * cdy + focus_radius * dr;
    let c = pdx * pdx + pdy * pdy - focus_radius * focus_radius;

    let w = if a.abs() < f32::EPSILON {
        if b.abs() < f32::EPSILON { 0.0 } else { c / (2.0 * b) }
    } else {
        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return 0.0;
        }
        let root = discriminant.sqrt();
        let w1 = (b + root) / a;
        let w2 = (b - root) / a;
        let valid = |w: f32| focus_radius + w * dr >= 0.0;
        match (valid(w1), valid(w2)) {
            (true, true) => w1.max(w2),
            (true, false) => w1,
            (false, true) => w2,
            (false, false) => 0.0,
        }
    };
    w.clamp(0.0, 1.0)
}

/// Piecewise-linear color lookup over sorted stops.
pub fn color_at(
    stops: &[GradientStop; 3],
    t: f32,
) -> Rgb888 {
    if t <= stops[0].offset {
        return stops[0].color;
    }
    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t <= hi.offset {
            let span = hi.offset - lo.offset;
            let k = if span > 0.0 { (t - lo.offset) / span } else { 1.0 };
            return crate::colors::mix(hi.color, lo.color, k);
        }
    }
    stops[2].color
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::angles::AngleSample;
    use crate::colors::{BACKGROUND, BUBBLE_LEVEL, TRACK, WHITE};
    use crate::render::render;
    use crate::widgets::WidgetSet;

    /// Records calls as (name, first coordinate) for order and scale checks.
    struct RecordingSurface {
        side: u32,
        calls: std::vec::Vec<(&'static str, f32)>,
    }

    impl RecordingSurface {
        fn new(side: u32) -> Self {
            Self {
                side,
                calls: std::vec::Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        fn side(&self) -> u32 { self.side }

        fn clear(&mut self) -> Result<(), LevelError> {
            self.calls.push(("clear", 0.0));
            Ok(())
        }

        fn fill_rect(
            &mut self,
            origin: LogicalPoint,
            _width: f32,
            _height: f32,
            _color: Rgb888,
        ) -> Result<(), LevelError> {
            self.calls.push(("fill_rect", origin.x));
            Ok(())
        }

        fn stroke_rect(
            &mut self,
            origin: LogicalPoint,
            _width: f32,
            _height: f32,
            _color: Rgb888,
            _thickness: f32,
        ) -> Result<(), LevelError> {
            self.calls.push(("stroke_rect", origin.x));
            Ok(())
        }

        fn fill_circle(
            &mut self,
            center: LogicalPoint,
            _radius: f32,
            _color: Rgb888,
        ) -> Result<(), LevelError> {
            self.calls.push(("fill_circle", center.x));
            Ok(())
        }

        fn stroke_circle(
            &mut self,
            center: LogicalPoint,
            _radius: f32,
            _color: Rgb888,
            _thickness: f32,
        ) -> Result<(), LevelError> {
            self.calls.push(("stroke_circle", center.x));
            Ok(())
        }

        fn line(
            &mut self,
            from: LogicalPoint,
            _to: LogicalPoint,
            _color: Rgb888,
            _thickness: f32,
        ) -> Result<(), LevelError> {
            self.calls.push(("line", from.x));
            Ok(())
        }

        fn fill_radial_gradient(
            &mut self,
            center: LogicalPoint,
            _radius: f32,
            _focus: LogicalPoint,
            _focus_radius: f32,
            _stops: &[GradientStop; 3],
        ) -> Result<(), LevelError> {
            self.calls.push(("gradient", center.x));
            Ok(())
        }
    }

    fn solid_stops(color: Rgb888) -> [GradientStop; 3] {
        [
            GradientStop { offset: 0.0, color },
            GradientStop { offset: 0.5, color },
            GradientStop { offset: 1.0, color },
        ]
    }

    #[test]
    fn test_paint_order_matches_frame() {
        let frame = render(&WidgetSet::standard(), AngleSample::ZERO, 300).unwrap();
        let mut surface = RecordingSurface::new(300);
        paint(&frame, &mut surface).unwrap();

        let names: std::vec::Vec<&str> = surface.calls.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names[..10],
            [
                "clear",
                "fill_rect",
                "fill_circle",
                "stroke_circle",
                "line",
                "line",
                "stroke_circle",
                "fill_circle",
                "gradient",
                "stroke_circle",
            ]
        );
        assert_eq!(names.len(), frame.ops().len());
        assert_eq!(names.last(), Some(&"stroke_circle"));
    }

    #[test]
    fn test_paint_scales_coordinates() {
        let frame = render(&WidgetSet::standard(), AngleSample::ZERO, 600).unwrap();
        let mut surface = RecordingSurface::new(600);
        paint(&frame, &mut surface).unwrap();
        // circle track center 120 reference units -> 240 px
        assert_eq!(surface.calls[2], ("fill_circle", 240.0));
    }

    #[test]
    fn test_zero_sized_surface_is_unavailable() {
        let frame = render(&WidgetSet::standard(), AngleSample::ZERO, 0).unwrap();
        let mut surface = RecordingSurface::new(0);
        assert_eq!(paint(&frame, &mut surface), Err(LevelError::SurfaceUnavailable));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_gradient_position_endpoints() {
        let center = LogicalPoint::new(0.0, 0.0);
        let focus = LogicalPoint::new(-3.0, -3.0);
        // on the focus circle's center: inside start circle -> padded to 0
        assert_eq!(gradient_position(focus, focus, 1.0, center, 10.0), 0.0);
        // on the outer edge, opposite the focus
        let edge = LogicalPoint::new(10.0 / 2f32.sqrt(), 10.0 / 2f32.sqrt());
        assert!((gradient_position(edge, focus, 1.0, center, 10.0) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_gradient_position_concentric() {
        let center = LogicalPoint::new(5.0, 5.0);
        let halfway = LogicalPoint::new(10.0, 5.0);
        // start radius 0, end radius 10: halfway out is w = 0.5
        assert!((gradient_position(halfway, center, 0.0, center, 10.0) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_color_at_stops() {
        let stops = [
            GradientStop { offset: 0.0, color: WHITE },
            GradientStop { offset: 0.5, color: BUBBLE_LEVEL },
            GradientStop { offset: 1.0, color: BUBBLE_LEVEL },
        ];
        assert_eq!(color_at(&stops, 0.0), WHITE);
        assert_eq!(color_at(&stops, 0.5), BUBBLE_LEVEL);
        assert_eq!(color_at(&stops, 0.8), BUBBLE_LEVEL);
        assert_eq!(color_at(&stops, 1.0), BUBBLE_LEVEL);
        let between = color_at(&stops, 0.25);
        assert_ne!(between, WHITE);
        assert_ne!(between, BUBBLE_LEVEL);
    }

    #[test]
    fn test_eg_surface_side() {
        let mut display = MockDisplay::<Rgb888>::new();
        let surface = EgSurface::new(&mut display);
        assert_eq!(surface.side(), 64);
    }

    #[test]
    fn test_eg_surface_fills_gradient_disk() {
        let mut display = MockDisplay::<Rgb888>::new();
        display.set_allow_overdraw(true);
        let mut surface = EgSurface::new(&mut display);
        surface
            .fill_radial_gradient(
                LogicalPoint::new(20.0, 20.0),
                8.0,
                LogicalPoint::new(17.6, 17.6),
                0.8,
                &solid_stops(BUBBLE_LEVEL),
            )
            .unwrap();
        assert_eq!(display.get_pixel(Point::new(20, 20)), Some(BUBBLE_LEVEL));
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
        assert_eq!(display.get_pixel(Point::new(20, 40)), None);
    }

    #[test]
    fn test_eg_surface_paints_standard_frame() {
        let mut display = MockDisplay::<Rgb888>::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);

        let frame = render(&WidgetSet::standard(), AngleSample::ZERO, 64).unwrap();
        paint(&frame, &mut EgSurface::new(&mut display)).unwrap();

        // outside every widget
        assert_eq!(display.get_pixel(Point::new(63, 63)), Some(BACKGROUND));
        // inside the circle track, away from every marker (reference (60, 60))
        assert_eq!(display.get_pixel(Point::new(13, 13)), Some(TRACK));
    }
}
