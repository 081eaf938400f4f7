//! Color palette for the level display.
//!
//! Colors are `Rgb888` so the palette keeps the exact 24-bit values of the
//! dark theme. Targets with a narrower native format convert at the edge
//! (`Rgb565::from(Rgb888)` is provided by `embedded_graphics`).

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Surface
// =============================================================================

/// Canvas background behind all widgets (#212121).
pub const BACKGROUND: Rgb888 = Rgb888::new(0x21, 0x21, 0x21);

/// Pure white. Source of the bubble highlight.
pub const WHITE: Rgb888 = Rgb888::WHITE;

// =============================================================================
// Widget Palette
// =============================================================================

/// Track fill inside every widget (#424242).
pub const TRACK: Rgb888 = Rgb888::new(0x42, 0x42, 0x42);

/// Frame outline, zero markers and bubble outline (#B0BEC5).
pub const LINE: Rgb888 = Rgb888::new(0xB0, 0xBE, 0xC5);

/// Center lines and bullseye (#CFD8DC).
pub const CENTER_LINE: Rgb888 = Rgb888::new(0xCF, 0xD8, 0xDC);

/// Bubble color while the widget reads level (#8BC34A).
pub const BUBBLE_LEVEL: Rgb888 = Rgb888::new(0x8B, 0xC3, 0x4A);

/// Bubble color while the widget reads tilted (#EF5350).
pub const BUBBLE_NOT_LEVEL: Rgb888 = Rgb888::new(0xEF, 0x53, 0x50);

// =============================================================================
// Blending
// =============================================================================

/// Linear blend of `over` onto `under` with `alpha` in `0.0..=1.0`.
///
/// Used to flatten the translucent highlight stop of the bubble gradient,
/// since the draw targets are opaque.
pub fn mix(
    over: Rgb888,
    under: Rgb888,
    alpha: f32,
) -> Rgb888 {
    let alpha = alpha.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| -> u8 {
        let value = f32::from(a) * alpha + f32::from(b) * (1.0 - alpha);
        (value + 0.5) as u8
    };
    Rgb888::new(
        channel(over.r(), under.r()),
        channel(over.g(), under.g()),
        channel(over.b(), under.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(WHITE, BUBBLE_LEVEL, 1.0), WHITE);
        assert_eq!(mix(WHITE, BUBBLE_LEVEL, 0.0), BUBBLE_LEVEL);
    }

    #[test]
    fn test_mix_clamps_alpha() {
        assert_eq!(mix(WHITE, TRACK, 3.0), WHITE);
        assert_eq!(mix(WHITE, TRACK, -1.0), TRACK);
    }

    #[test]
    fn test_mix_highlight_is_lighter() {
        let highlight = mix(WHITE, BUBBLE_NOT_LEVEL, 0.7);
        assert!(highlight.g() > BUBBLE_NOT_LEVEL.g());
        assert!(highlight.b() > BUBBLE_NOT_LEVEL.b());
        assert_eq!(highlight.r(), 0xFA);
    }

    #[test]
    fn test_level_colors_differ() {
        assert_ne!(BUBBLE_LEVEL, BUBBLE_NOT_LEVEL);
    }
}
