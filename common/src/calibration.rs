//! Zero-point calibration.
//!
//! The offset is subtracted from every raw sample before any other logic runs.
//! Calibrating folds the currently displayed (already calibrated) angles into
//! the offset, so offsets accumulate and a second calibration without
//! movement adds nothing.

use crate::angles::AngleSample;

/// Per-axis zero offset, in degrees.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct CalibrationOffset {
    beta_offset: f32,
    gamma_offset: f32,
}

impl CalibrationOffset {
    /// No offset: calibrated angles equal raw angles.
    pub const fn new() -> Self {
        Self {
            beta_offset: 0.0,
            gamma_offset: 0.0,
        }
    }

    #[inline]
    pub const fn beta_offset(&self) -> f32 { self.beta_offset }

    #[inline]
    pub const fn gamma_offset(&self) -> f32 { self.gamma_offset }

    /// Map a raw sample into the calibrated frame.
    #[inline]
    pub fn apply_offset(
        &self,
        raw: AngleSample,
    ) -> AngleSample {
        raw - AngleSample::new(self.beta_offset, self.gamma_offset)
    }

    /// Make `current_calibrated` the new zero.
    pub fn calibrate(
        &mut self,
        current_calibrated: AngleSample,
    ) {
        self.beta_offset += current_calibrated.beta;
        self.gamma_offset += current_calibrated.gamma;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offset_is_identity() {
        let offset = CalibrationOffset::new();
        let raw = AngleSample::new(12.5, -3.25);
        assert_eq!(offset.apply_offset(raw), raw);
        assert_eq!(CalibrationOffset::default(), offset);
    }

    #[test]
    fn test_calibrate_zeroes_current_sample() {
        let samples = [
            AngleSample::new(0.0, 0.0),
            AngleSample::new(12.0, -7.5),
            AngleSample::new(-89.0, 45.25),
            AngleSample::new(150.0, -300.0),
        ];
        for raw in samples {
            let mut offset = CalibrationOffset::new();
            offset.calibrate(offset.apply_offset(raw));
            assert_eq!(offset.apply_offset(raw), AngleSample::ZERO, "raw {raw:?}");
        }
    }

    #[test]
    fn test_offsets_accumulate() {
        let mut offset = CalibrationOffset::new();
        let first = AngleSample::new(4.0, 2.0);
        offset.calibrate(offset.apply_offset(first));

        let second = AngleSample::new(10.0, -1.0);
        let shown = offset.apply_offset(second);
        assert_eq!(shown, AngleSample::new(6.0, -3.0));

        offset.calibrate(shown);
        assert_eq!(offset.beta_offset(), 10.0);
        assert_eq!(offset.gamma_offset(), -1.0);
        assert_eq!(offset.apply_offset(second), AngleSample::ZERO);
    }

    #[test]
    fn test_double_calibrate_is_noop() {
        let mut offset = CalibrationOffset::new();
        let raw = AngleSample::new(3.0, 8.0);
        offset.calibrate(offset.apply_offset(raw));
        let after_first = offset;

        offset.calibrate(offset.apply_offset(raw));
        assert_eq!(offset, after_first);
    }
}
