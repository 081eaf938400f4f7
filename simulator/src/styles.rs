//! Pre-computed static text styles for the simulator overlays.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::text::{Alignment, TextStyle, TextStyleBuilder};
use level_common::colors::{BUBBLE_LEVEL, LINE, WHITE};
use profont::PROFONT_12_POINT;

/// Centered text alignment. Used for toast text.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Small label font (6x10 pixels). Exposed for creating dynamic-color styles.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Angle readout lines (`ProFont` 12pt).
pub const READOUT_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_12_POINT, WHITE);

/// Status line under the readout.
pub const STATUS_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_6X10, LINE);

/// Log prompt marker.
pub const LOG_PROMPT_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_6X10, BUBBLE_LEVEL);
