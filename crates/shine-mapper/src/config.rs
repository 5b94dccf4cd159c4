//! Mapper Configuration
//!
//! Sensitivity, gradient geometry, rotation limits and output policy.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Value tunable independently per axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPair {
    pub x: f64,
    pub y: f64,
}

impl AxisPair {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn uniform(value: f64) -> Self {
        Self { x: value, y: value }
    }
}

/// Inclusive (min, max) range applied to final output values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampBounds {
    pub min: f64,
    pub max: f64,
}

impl ClampBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Symmetric bounds around zero
    pub const fn symmetric(limit: f64) -> Self {
        Self { min: -limit, max: limit }
    }

    /// Clamp a value into the bounds.
    ///
    /// NaN lands on the in-bounds value nearest zero.
    pub fn clamp(&self, value: f64) -> f64 {
        let value = if value.is_nan() { 0.0 } else { value };
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Which outputs the mapper produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputChannels {
    pub shine_x: bool,
    pub shine_y: bool,
    pub rotation: bool,
}

impl Default for OutputChannels {
    fn default() -> Self {
        Self {
            shine_x: true,
            shine_y: true,
            rotation: false,
        }
    }
}

/// What happens to output already on the surface when a sample is incomplete
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaleOutputPolicy {
    /// Leave the last applied values in place
    #[default]
    Retain,
    /// Remove every channel property from the surface
    Reset,
}

/// Preset configurations for the shine button variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Left-right tilt only, two layers (350% and 300%) averaged
    Horizontal,
    /// Both axes, 250% gradient
    Planar,
    /// Both axes, 350% gradient
    Wide,
    /// Both axes plus 3D rotation
    Rotating,
}

impl Variant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "horizontal" => Some(Self::Horizontal),
            "planar" => Some(Self::Planar),
            "wide" => Some(Self::Wide),
            "rotating" => Some(Self::Rotating),
            _ => None,
        }
    }

    pub fn config(&self) -> MapperConfig {
        let base = MapperConfig::default();
        match self {
            Self::Horizontal => MapperConfig {
                gradient_size: AxisPair::uniform((3.5 + 3.0) / 2.0),
                channels: OutputChannels {
                    shine_x: true,
                    shine_y: false,
                    rotation: false,
                },
                ..base
            },
            Self::Planar => base,
            Self::Wide => MapperConfig {
                gradient_size: AxisPair::uniform(3.5),
                ..base
            },
            Self::Rotating => MapperConfig {
                channels: OutputChannels {
                    shine_x: true,
                    shine_y: true,
                    rotation: true,
                },
                ..base
            },
        }
    }
}

/// Mapper configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Tilt span, centered on 0, covering the full 0-100% output
    pub sensitivity_range_deg: f64,
    /// Gradient size relative to the surface, per axis
    pub gradient_size: AxisPair,
    /// Where the highlight sits inside the gradient definition
    pub gradient_center_fraction: f64,
    /// Largest rotation applied in either direction
    pub max_rotation_deg: f64,
    /// Tilt span mapped onto the full rotation range
    pub rotation_range_deg: f64,
    /// Bounds applied to every output value
    pub output_clamp: ClampBounds,
    pub channels: OutputChannels,
    pub stale_output: StaleOutputPolicy,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            sensitivity_range_deg: 90.0,
            gradient_size: AxisPair::uniform(2.5),
            gradient_center_fraction: 0.5,
            max_rotation_deg: 8.0,
            rotation_range_deg: 60.0,
            output_clamp: ClampBounds::new(-250.0, 250.0),
            channels: OutputChannels::default(),
            stale_output: StaleOutputPolicy::Retain,
        }
    }
}

impl MapperConfig {
    /// Create a config builder
    pub fn builder() -> MapperConfigBuilder {
        MapperConfigBuilder::new()
    }

    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Bounds for rotation output
    pub fn rotation_bounds(&self) -> ClampBounds {
        ClampBounds::symmetric(self.max_rotation_deg)
    }

    /// Check every value the mapper divides by or clamps with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("sensitivity_range_deg", self.sensitivity_range_deg)?;
        positive("rotation_range_deg", self.rotation_range_deg)?;
        positive("gradient_size.x", self.gradient_size.x)?;
        positive("gradient_size.y", self.gradient_size.y)?;

        if !self.max_rotation_deg.is_finite() || self.max_rotation_deg < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "max_rotation_deg",
                value: self.max_rotation_deg,
                reason: "must be finite and non-negative",
            });
        }

        let center = self.gradient_center_fraction;
        if !(0.0..=1.0).contains(&center) {
            return Err(ConfigError::InvalidValue {
                field: "gradient_center_fraction",
                value: center,
                reason: "must lie within [0, 1]",
            });
        }

        let bounds = self.output_clamp;
        for (field, value) in [("output_clamp.min", bounds.min), ("output_clamp.max", bounds.max)] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field,
                    value,
                    reason: "must be finite",
                });
            }
        }
        if bounds.min > bounds.max {
            return Err(ConfigError::InvertedBounds {
                min: bounds.min,
                max: bounds.max,
            });
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must be finite and positive",
        })
    }
}

/// Mapper config builder
#[derive(Debug, Clone)]
pub struct MapperConfigBuilder {
    config: MapperConfig,
}

impl MapperConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: MapperConfig::default(),
        }
    }

    /// Start from a variant preset
    pub fn variant(mut self, variant: Variant) -> Self {
        self.config = variant.config();
        self
    }

    pub fn sensitivity_range(mut self, degrees: f64) -> Self {
        self.config.sensitivity_range_deg = degrees;
        self
    }

    pub fn gradient_size(mut self, x: f64, y: f64) -> Self {
        self.config.gradient_size = AxisPair::new(x, y);
        self
    }

    pub fn gradient_center(mut self, fraction: f64) -> Self {
        self.config.gradient_center_fraction = fraction;
        self
    }

    pub fn rotation(mut self, max_deg: f64, range_deg: f64) -> Self {
        self.config.max_rotation_deg = max_deg;
        self.config.rotation_range_deg = range_deg;
        self.config.channels.rotation = true;
        self
    }

    pub fn output_clamp(mut self, min: f64, max: f64) -> Self {
        self.config.output_clamp = ClampBounds::new(min, max);
        self
    }

    pub fn channels(mut self, channels: OutputChannels) -> Self {
        self.config.channels = channels;
        self
    }

    pub fn stale_output(mut self, policy: StaleOutputPolicy) -> Self {
        self.config.stale_output = policy;
        self
    }

    pub fn build(self) -> Result<MapperConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for MapperConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = MapperConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sensitivity_range_deg, 90.0);
        assert_eq!(config.output_clamp, ClampBounds::new(-250.0, 250.0));
    }

    #[test]
    fn test_variants_are_valid() {
        for variant in [Variant::Horizontal, Variant::Planar, Variant::Wide, Variant::Rotating] {
            assert!(variant.config().validate().is_ok(), "{variant:?}");
        }
        assert_eq!(Variant::Horizontal.config().gradient_size.x, 3.25);
        assert!(Variant::Rotating.config().channels.rotation);
        assert!(!Variant::Horizontal.config().channels.shine_y);
        assert_eq!(Variant::from_name("rotating"), Some(Variant::Rotating));
        assert_eq!(Variant::from_name("Rotating"), None);
    }

    #[test]
    fn test_builder_rejects_zero_range() {
        let result = MapperConfig::builder().sensitivity_range(0.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "sensitivity_range_deg", .. })
        ));
    }

    #[test]
    fn test_builder_rejects_inverted_bounds() {
        let result = MapperConfig::builder().output_clamp(10.0, -10.0).build();
        assert!(matches!(result, Err(ConfigError::InvertedBounds { .. })));
    }

    #[test]
    fn test_builder_rejects_center_outside_gradient() {
        let result = MapperConfig::builder().gradient_center(1.5).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_clamp_nan_lands_near_zero() {
        assert_eq!(ClampBounds::new(-250.0, 250.0).clamp(f64::NAN), 0.0);
        assert_eq!(ClampBounds::new(10.0, 20.0).clamp(f64::NAN), 10.0);
        assert_eq!(ClampBounds::new(-250.0, 250.0).clamp(f64::INFINITY), 250.0);
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let config = MapperConfig::from_json(r#"{ "sensitivity_range_deg": 60.0 }"#).unwrap();
        assert_eq!(config.sensitivity_range_deg, 60.0);
        assert_eq!(config.gradient_center_fraction, 0.5);
    }

    #[test]
    fn test_json_round_trip() {
        let config = MapperConfig::builder()
            .variant(Variant::Rotating)
            .stale_output(StaleOutputPolicy::Reset)
            .build()
            .unwrap();
        let json = config.to_json().unwrap();

        assert!(json.contains("\"reset\""));
        assert_eq!(MapperConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_rejects_invalid_values() {
        let result = MapperConfig::from_json(r#"{ "gradient_size": { "x": -1.0, "y": 2.5 } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        let result = MapperConfig::from_json("not json");
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }
}
