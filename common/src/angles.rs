//! Tilt samples and axis bindings.

use core::ops::Sub;

#[cfg(not(test))]
#[allow(unused_imports)]
use micromath::F32Ext;

/// One pair of tilt angles in degrees.
///
/// `beta` is the front/back tilt (drives the vertical bar), `gamma` the
/// left/right tilt (drives the horizontal bar). Values are conceptually in
/// `-90.0..=90.0`, but nothing here depends on that.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct AngleSample {
    pub beta: f32,
    pub gamma: f32,
}

impl AngleSample {
    /// Level attitude.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(
        beta: f32,
        gamma: f32,
    ) -> Self {
        Self { beta, gamma }
    }

    /// Whether both angles are usable for geometry.
    #[inline]
    pub const fn is_finite(&self) -> bool { self.beta.is_finite() && self.gamma.is_finite() }
}

impl Sub for AngleSample {
    type Output = Self;

    #[inline]
    fn sub(
        self,
        rhs: Self,
    ) -> Self {
        Self::new(self.beta - rhs.beta, self.gamma - rhs.gamma)
    }
}

/// Which angle(s) a widget reacts to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    Beta,
    Gamma,
    Both,
}

impl Axis {
    /// Strict tolerance test: a reading exactly at `tolerance` is not level.
    pub fn is_level(
        self,
        angles: AngleSample,
        tolerance: f32,
    ) -> bool {
        let beta_level = angles.beta.abs() < tolerance;
        let gamma_level = angles.gamma.abs() < tolerance;
        match self {
            Self::Beta => beta_level,
            Self::Gamma => gamma_level,
            Self::Both => beta_level && gamma_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_subtraction() {
        let diff = AngleSample::new(10.0, -4.0) - AngleSample::new(2.5, 1.0);
        assert_eq!(diff, AngleSample::new(7.5, -5.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(AngleSample::new(1.0, -89.0).is_finite());
        assert!(!AngleSample::new(f32::NAN, 0.0).is_finite());
        assert!(!AngleSample::new(0.0, f32::INFINITY).is_finite());
        assert!(!AngleSample::new(f32::NEG_INFINITY, f32::NAN).is_finite());
    }

    #[test]
    fn test_both_axis_inside_tolerance() {
        for &(beta, gamma) in &[(0.0, 0.0), (1.99, -1.99), (-1.5, 0.5), (0.0, 1.999)] {
            assert!(Axis::Both.is_level(AngleSample::new(beta, gamma), 2.0), "({beta}, {gamma}) should be level");
        }
    }

    #[test]
    fn test_tolerance_boundary_is_not_level() {
        assert!(!Axis::Both.is_level(AngleSample::new(2.0, 0.0), 2.0));
        assert!(!Axis::Both.is_level(AngleSample::new(0.0, -2.0), 2.0));
        assert!(!Axis::Beta.is_level(AngleSample::new(-2.0, 0.0), 2.0));
        assert!(!Axis::Gamma.is_level(AngleSample::new(0.0, 2.0), 2.0));
    }

    #[test]
    fn test_single_axis_ignores_other_angle() {
        let sample = AngleSample::new(0.5, 45.0);
        assert!(Axis::Beta.is_level(sample, 2.0));
        assert!(!Axis::Gamma.is_level(sample, 2.0));
        assert!(!Axis::Both.is_level(sample, 2.0));
    }

    #[test]
    fn test_nan_is_never_level() {
        let sample = AngleSample::new(f32::NAN, f32::NAN);
        assert!(!Axis::Beta.is_level(sample, 2.0));
        assert!(!Axis::Both.is_level(sample, 2.0));
    }
}
