//! Orientation Samples
//!
//! Device attitude as delivered by the host orientation sensor.

use std::fmt;

use crate::MapError;

/// Device attitude axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Compass heading (Z axis)
    Alpha,
    /// Front-back tilt (X axis)
    Beta,
    /// Left-right tilt (Y axis)
    Gamma,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Gamma => "gamma",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One orientation reading, in degrees.
///
/// Any axis may be absent when the sensor cannot report it. Non-finite
/// readings are treated the same as absent ones by the accessors.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationSample {
    pub alpha: Option<f64>, // Z-axis rotation (0-360)
    pub beta: Option<f64>,  // X-axis rotation (-180 to 180)
    pub gamma: Option<f64>, // Y-axis rotation (-90 to 90)
}

impl OrientationSample {
    pub fn new(alpha: Option<f64>, beta: Option<f64>, gamma: Option<f64>) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Sample with only the two tilt axes
    pub fn tilt(beta: f64, gamma: f64) -> Self {
        Self {
            alpha: None,
            beta: Some(beta),
            gamma: Some(gamma),
        }
    }

    /// Sample reporting nothing
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Usable reading for an axis
    pub fn axis(&self, axis: Axis) -> Option<f64> {
        let raw = match axis {
            Axis::Alpha => self.alpha,
            Axis::Beta => self.beta,
            Axis::Gamma => self.gamma,
        };
        raw.filter(|value| value.is_finite())
    }

    /// Reading for an axis the caller cannot do without
    pub fn require(&self, axis: Axis) -> Result<f64, MapError> {
        self.axis(axis).ok_or(MapError::SampleIncomplete { axis })
    }
}
