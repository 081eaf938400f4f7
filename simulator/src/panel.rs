//! Info panel below the level surface: angle readout, sensor status and the
//! tail of the event log.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use level_common::colors::{BUBBLE_NOT_LEVEL, CENTER_LINE, TRACK};
use level_common::{Leveler, LogEvent, Permission};

use crate::config::PANEL_HEIGHT;
use crate::source::TiltMode;
use crate::styles::{LABEL_FONT, LOG_PROMPT_STYLE, READOUT_STYLE, STATUS_STYLE};

const PANEL_BG: Rgb888 = Rgb888::new(0x16, 0x16, 0x16);
const PAD_X: i32 = 6;
const READOUT_Y: i32 = 16;
const READOUT_LINE_HEIGHT: i32 = 16;
const STATUS_Y: i32 = 50;
const LOG_Y: i32 = 64;
const LOG_LINE_HEIGHT: i32 = 11;
const LOG_LINES: usize = 3;

/// Everything shown in the panel that is not owned by the leveler.
pub struct PanelInfo {
    pub mode: TiltMode,
    pub sensor_plugged: bool,
    pub fps: f32,
}

pub fn draw_panel<D>(
    display: &mut D,
    top: i32,
    width: u32,
    leveler: &Leveler,
    info: &PanelInfo,
) where
    D: DrawTarget<Color = Rgb888>,
{
    Rectangle::new(Point::new(0, top), Size::new(width, PANEL_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(PANEL_BG))
        .draw(display)
        .ok();
    Line::new(Point::new(0, top), Point::new(width as i32 - 1, top))
        .into_styled(PrimitiveStyle::with_stroke(TRACK, 1))
        .draw(display)
        .ok();

    let readout = leveler.readout();
    Text::new(readout.gamma_line(), Point::new(PAD_X, top + READOUT_Y), READOUT_STYLE)
        .draw(display)
        .ok();
    Text::new(
        readout.beta_line(),
        Point::new(PAD_X, top + READOUT_Y + READOUT_LINE_HEIGHT),
        READOUT_STYLE,
    )
    .draw(display)
    .ok();

    let mut status: String<48> = String::new();
    let mode = match info.mode {
        TiltMode::Auto => "AUTO",
        TiltMode::Manual => "MANUAL",
    };
    let plug = if info.sensor_plugged { "" } else { " UNPLUGGED" };
    let _ = write!(
        status,
        "{}{plug} | {mode} | {}px | {:.0} FPS",
        leveler.status().label(),
        leveler.side(),
        info.fps
    );
    Text::new(&status, Point::new(PAD_X, top + STATUS_Y), STATUS_STYLE)
        .draw(display)
        .ok();

    draw_log_tail(display, top + LOG_Y, leveler);
}

fn draw_log_tail<D>(
    display: &mut D,
    mut y: i32,
    leveler: &Leveler,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let log = leveler.log();
    for event in log.iter().skip(log.len().saturating_sub(LOG_LINES)) {
        let mut line: String<48> = String::new();
        let _ = write!(line, "{event}");

        Text::new(">", Point::new(PAD_X, y), LOG_PROMPT_STYLE).draw(display).ok();
        Text::new(&line, Point::new(PAD_X + 10, y), MonoTextStyle::new(LABEL_FONT, log_color(event)))
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }
}

fn log_color(event: &LogEvent) -> Rgb888 {
    match event {
        LogEvent::SampleRejected
        | LogEvent::SensorLost
        | LogEvent::Permission(Permission::Denied | Permission::Unsupported) => BUBBLE_NOT_LEVEL,
        _ => CENTER_LINE,
    }
}
