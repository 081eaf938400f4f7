//! Error type shared by the renderer and the surface adapters.
//!
//! Sensor problems are deliberately absent: a denied or missing sensor is a
//! [`SensorStatus`](crate::leveler::SensorStatus), not an error.

use core::fmt::{self, Display};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LevelError {
    /// A sample had a NaN or infinite angle. The previous frame stays up.
    NonFiniteSample,
    /// The host has no drawable surface (zero-sized or not yet created).
    SurfaceUnavailable,
    /// The draw target rejected a primitive.
    Surface,
}

impl Display for LevelError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::NonFiniteSample => write!(f, "orientation sample is not finite"),
            Self::SurfaceUnavailable => write!(f, "drawing surface unavailable"),
            Self::Surface => write!(f, "draw target rejected a primitive"),
        }
    }
}

impl core::error::Error for LevelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(LevelError::NonFiniteSample.to_string(), "orientation sample is not finite");
        assert_eq!(LevelError::SurfaceUnavailable.to_string(), "drawing surface unavailable");
    }
}
