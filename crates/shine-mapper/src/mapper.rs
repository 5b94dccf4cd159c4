//! Orientation Mapper
//!
//! Tilt angles → normalized percent → gradient position / rotation.

use crate::config::{ClampBounds, MapperConfig};
use crate::output::VisualOutput;
use crate::sample::{Axis, OrientationSample};
use crate::{ConfigError, MapError};

/// Map a tilt angle onto 0-100.
///
/// The angle is clamped to `[-range/2, range/2]` first, so anything past
/// either end lands exactly on 0 or 100.
pub fn normalize_axis(angle: f64, range: f64) -> f64 {
    let half = range / 2.0;
    let clamped = angle.max(-half).min(half);
    (clamped + half) / range * 100.0
}

/// Background position (percent) that puts the gradient's highlight at
/// fraction `s` of the surface.
///
/// A layer `factor` times the surface size moves by `(1 - factor)` surface
/// widths per 100%, so the naive `s * 100` is inverted through that ratio.
pub fn gradient_position(s: f64, factor: f64, center: f64, bounds: ClampBounds) -> f64 {
    let percent = if factor == 1.0 {
        s * 100.0
    } else {
        ((s - center * factor) / (1.0 - factor)) * 100.0
    };
    bounds.clamp(percent)
}

/// Fraction of the surface where the highlight appears for a given
/// background position. Forward form of [`gradient_position`].
pub fn gradient_coverage(position_percent: f64, factor: f64, center: f64) -> f64 {
    position_percent / 100.0 * (1.0 - factor) + center * factor
}

/// Rotation (x, y) in degrees for a tilt.
///
/// Each axis is normalized to [-1, 1] over `range` and scaled by `max`.
/// Tilting right turns the right edge away from the viewer, so gamma drives
/// the Y rotation negated while beta drives X as-is.
pub fn rotation_angles(beta: f64, gamma: f64, range: f64, max: f64) -> (f64, f64) {
    let half = range / 2.0;
    let beta_unit = beta.max(-half).min(half) / half;
    let gamma_unit = gamma.max(-half).min(half) / half;

    let bounds = ClampBounds::symmetric(max);
    let rotate_x = bounds.clamp(beta_unit * max);
    let rotate_y = bounds.clamp(-gamma_unit * max);
    (rotate_x, rotate_y)
}

/// Orientation mapper bound to a validated config
#[derive(Debug, Clone)]
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    pub fn new(config: MapperConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Axes the active channels cannot do without
    pub fn required_axes(&self) -> Vec<Axis> {
        let channels = self.config.channels;
        let mut axes = Vec::with_capacity(2);
        if channels.shine_x || channels.rotation {
            axes.push(Axis::Gamma);
        }
        if channels.shine_y || channels.rotation {
            axes.push(Axis::Beta);
        }
        axes
    }

    /// Compute output for one sample.
    ///
    /// Fails before any arithmetic when a required axis is missing, so no
    /// partial output is ever produced.
    pub fn map(&self, sample: &OrientationSample) -> Result<VisualOutput, MapError> {
        for axis in self.required_axes() {
            sample.require(axis)?;
        }

        let config = &self.config;
        let channels = config.channels;
        let mut output = VisualOutput::default();

        if channels.shine_x {
            let gamma = sample.require(Axis::Gamma)?;
            output.shine_x = Some(self.shine_position(gamma, config.gradient_size.x));
        }
        if channels.shine_y {
            let beta = sample.require(Axis::Beta)?;
            output.shine_y = Some(self.shine_position(beta, config.gradient_size.y));
        }
        if channels.rotation {
            let beta = sample.require(Axis::Beta)?;
            let gamma = sample.require(Axis::Gamma)?;
            let (rotate_x, rotate_y) =
                rotation_angles(beta, gamma, config.rotation_range_deg, config.max_rotation_deg);
            output.rotate_x = Some(config.output_clamp.clamp(rotate_x));
            output.rotate_y = Some(config.output_clamp.clamp(rotate_y));
        }

        tracing::trace!(?output, "Mapped orientation sample");
        Ok(output)
    }

    fn shine_position(&self, angle: f64, factor: f64) -> f64 {
        let target = normalize_axis(angle, self.config.sensitivity_range_deg) / 100.0;
        gradient_position(
            target,
            factor,
            self.config.gradient_center_fraction,
            self.config.output_clamp,
        )
    }
}
