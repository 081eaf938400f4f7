//! Orientation Source boundary.
//!
//! A source is polled once per tick. Before it may deliver samples it must
//! answer a one-shot permission request; hosts where the answer arrives later
//! report [`Permission::Pending`] and resolve it through
//! [`Event::Permission`](crate::leveler::Event::Permission).

use crate::angles::AngleSample;

/// Outcome of the platform permission handshake.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Permission {
    /// Still waiting for the platform to answer.
    Pending,
    Granted,
    Denied,
    /// The platform has no orientation sensor.
    Unsupported,
}

/// Sample as delivered by the platform; either axis may be missing.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct RawSample {
    pub beta: Option<f32>,
    pub gamma: Option<f32>,
}

impl RawSample {
    pub const fn new(
        beta: f32,
        gamma: f32,
    ) -> Self {
        Self {
            beta: Some(beta),
            gamma: Some(gamma),
        }
    }

    /// Resolve to angles. A single missing axis reads as zero; a sample with
    /// no axes at all carries no information and yields `None`.
    pub fn angles(&self) -> Option<AngleSample> {
        match (self.beta, self.gamma) {
            (None, None) => None,
            (beta, gamma) => Some(AngleSample::new(beta.unwrap_or(0.0), gamma.unwrap_or(0.0))),
        }
    }
}

/// Something that produces tilt samples.
pub trait OrientationSource {
    /// Ask for access. Called once at startup; may be called again by hosts
    /// that let the user retry.
    fn request_permission(&mut self) -> Permission;

    /// Next sample, or `None` when nothing new arrived this tick.
    fn poll(&mut self) -> Option<RawSample>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sample() {
        assert_eq!(RawSample::new(3.0, -4.0).angles(), Some(AngleSample::new(3.0, -4.0)));
    }

    #[test]
    fn test_missing_axis_reads_zero() {
        let sample = RawSample {
            beta: None,
            gamma: Some(7.5),
        };
        assert_eq!(sample.angles(), Some(AngleSample::new(0.0, 7.5)));
    }

    #[test]
    fn test_empty_sample_is_no_change() {
        assert_eq!(RawSample::default().angles(), None);
    }

    #[test]
    fn test_nan_passes_through_for_validation() {
        let angles = RawSample::new(f32::NAN, 0.0).angles().unwrap();
        assert!(!angles.is_finite());
    }
}
