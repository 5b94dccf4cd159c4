//! tiltshine
//!
//! A button whose reflective shine follows the device's physical tilt.
//!
//! # Example
//! ```rust,ignore
//! use tiltshine::{ButtonConfig, ShinyButton, Surface};
//! use tiltshine::mapper::{Mapper, MapperConfig};
//!
//! let mapper = Mapper::new(MapperConfig::default())?;
//! let button = ShinyButton::mount(sensor, mapper, Surface::new(style, notices), ButtonConfig::default());
//! smol::block_on(button.click())?;
//! ```

mod effect;
mod button;

pub use effect::{with_layer_sizes, ShineEffect};
pub use button::{ButtonConfig, ControlState, ShinyButton, Surface};

// Re-export sub-crates for advanced usage
pub use shine_mapper as mapper;
pub use shine_sensors as sensors;
pub use shine_surface as surface;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
