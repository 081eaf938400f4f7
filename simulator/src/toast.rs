//! Transient toast overlay with time-based expiration.

use std::time::Instant;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use level_common::colors::{BUBBLE_LEVEL, BUBBLE_NOT_LEVEL, TRACK, WHITE};
use level_common::{Permission, SensorStatus};

use crate::config::TOAST_DURATION;
use crate::styles::CENTERED;

const TOAST_WIDTH: u32 = 200;
const TOAST_HEIGHT: u32 = 44;
const BORDER: u32 = 3;

const TEXT_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Active toast with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Toast {
    Calibrated(Instant),
    SensorOff(Instant),
    SensorOn(Instant),
    AutoTilt(Instant),
    ManualTilt(Instant),
    NanInjected(Instant),
    /// Permission answer arrived.
    Status(SensorStatus, Instant),
    PermissionRequested(Instant),
}

impl Toast {
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Calibrated(t)
            | Self::SensorOff(t)
            | Self::SensorOn(t)
            | Self::AutoTilt(t)
            | Self::ManualTilt(t)
            | Self::NanInjected(t)
            | Self::Status(_, t)
            | Self::PermissionRequested(t) => *t,
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= TOAST_DURATION }

    pub fn for_permission(permission: Permission) -> Self { Self::Status(permission.into(), Instant::now()) }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::Calibrated(_) => "CALIBRATED",
            Self::SensorOff(_) => "SENSOR OFF",
            Self::SensorOn(_) => "SENSOR ON",
            Self::AutoTilt(_) => "AUTO TILT",
            Self::ManualTilt(_) => "MANUAL TILT",
            Self::NanInjected(_) => "BAD SAMPLE",
            Self::Status(status, _) => status.label(),
            Self::PermissionRequested(_) => "ASKING...",
        }
    }

    /// Good news is green, trouble is red, everything else neutral.
    const fn background(&self) -> Rgb888 {
        match self {
            Self::Calibrated(_) | Self::SensorOn(_) | Self::Status(SensorStatus::Active, _) => BUBBLE_LEVEL,
            Self::SensorOff(_) | Self::NanInjected(_) | Self::Status(SensorStatus::Denied | SensorStatus::Unsupported, _) => {
                BUBBLE_NOT_LEVEL
            }
            _ => TRACK,
        }
    }
}

/// Draw `toast` centered on a level surface of `side` pixels.
pub fn draw_toast<D>(
    display: &mut D,
    toast: &Toast,
    side: u32,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let x = (side as i32 - TOAST_WIDTH as i32) / 2;
    let y = (side as i32 - TOAST_HEIGHT as i32) / 2;

    Rectangle::new(
        Point::new(x - BORDER as i32, y - BORDER as i32),
        Size::new(TOAST_WIDTH + 2 * BORDER, TOAST_HEIGHT + 2 * BORDER),
    )
    .into_styled(PrimitiveStyle::with_fill(WHITE))
    .draw(display)
    .ok();

    Rectangle::new(Point::new(x, y), Size::new(TOAST_WIDTH, TOAST_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(toast.background()))
        .draw(display)
        .ok();

    let center = Point::new(side as i32 / 2, side as i32 / 2 + 6);
    Text::with_text_style(toast.message(), center, TEXT_STYLE, CENTERED)
        .draw(display)
        .ok();
}
