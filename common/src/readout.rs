//! Text readout of the calibrated angles.
//!
//! Gamma is reported against the X axis and beta against the Y axis, matching
//! the direction each one moves the bubble. One decimal, explicit sign.

use core::fmt::Write;

use heapless::String;

use crate::angles::AngleSample;

/// Longest line: `"G (X-axis): -1000000.0 deg"` fits with room to spare.
pub const READOUT_LINE_CAPACITY: usize = 32;

pub type ReadoutLine = String<READOUT_LINE_CAPACITY>;

/// Both readout lines, formatted once per frame.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Readout {
    gamma: ReadoutLine,
    beta: ReadoutLine,
}

impl Readout {
    pub fn new(calibrated: AngleSample) -> Self {
        Self {
            gamma: format_line('G', 'X', calibrated.gamma),
            beta: format_line('B', 'Y', calibrated.beta),
        }
    }

    #[inline]
    pub fn gamma_line(&self) -> &str { &self.gamma }

    #[inline]
    pub fn beta_line(&self) -> &str { &self.beta }
}

fn format_line(
    symbol: char,
    axis: char,
    value: f32,
) -> ReadoutLine {
    let mut line = ReadoutLine::new();
    // absurd magnitudes do not fit; show a placeholder instead of a cut number
    if write!(line, "{symbol} ({axis}-axis): {value:+.1} deg").is_err() {
        line.clear();
        write!(line, "{symbol} ({axis}-axis): ---").ok();
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_lines() {
        let readout = Readout::new(AngleSample::new(-0.4, 1.2));
        assert_eq!(readout.gamma_line(), "G (X-axis): +1.2 deg");
        assert_eq!(readout.beta_line(), "B (Y-axis): -0.4 deg");
    }

    #[test]
    fn test_zero_has_plus_sign() {
        let readout = Readout::new(AngleSample::ZERO);
        assert_eq!(readout.gamma_line(), "G (X-axis): +0.0 deg");
    }

    #[test]
    fn test_overflowing_value_falls_back() {
        let readout = Readout::new(AngleSample::new(f32::MAX, 0.0));
        assert_eq!(readout.beta_line(), "B (Y-axis): ---");
    }
}
