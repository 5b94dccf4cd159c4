//! tiltshine Mapper
//!
//! Pure conversion of device tilt into shine position and rotation values.
//!
//! Features:
//! - Axis normalization over a configurable sensitivity range
//! - Gradient position remap for oversized background layers
//! - Rotation remap for the tilt-toward-viewer effect
//! - Variant presets over a single configuration type

mod config;
mod format;
mod mapper;
mod output;
mod sample;

pub use config::{
    AxisPair, ClampBounds, MapperConfig, MapperConfigBuilder, OutputChannels, StaleOutputPolicy,
    Variant,
};
pub use format::{format_readout, format_value, Unit, UNAVAILABLE};
pub use mapper::{gradient_coverage, gradient_position, normalize_axis, rotation_angles, Mapper};
pub use output::{Channel, VisualOutput};
pub use sample::{Axis, OrientationSample};

/// Per-sample mapping error
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("Sample incomplete: {axis} unavailable")]
    SampleIncomplete { axis: Axis },
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {field}: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    
    #[error("Inverted clamp bounds: min {min} > max {max}")]
    InvertedBounds { min: f64, max: f64 },
    
    #[error("Malformed config: {0}")]
    Malformed(#[from] serde_json::Error),
}
