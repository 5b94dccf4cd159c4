//! tiltshine Sensors
//!
//! Access negotiation for the host orientation sensor.
//!
//! Features:
//! - Capability probing (missing, direct, permission-gated)
//! - One-shot, gesture-triggered permission requests
//! - Subscription state machine
//! - Scripted in-process sensor for demos and tests

pub mod capability;
pub mod manager;
pub mod simulated;

pub use capability::{OrientationCapability, OrientationHandler, PermissionOutcome, PermissionState, Support};
pub use manager::{Activation, SubscriptionManager, SubscriptionState};
pub use simulated::{PermissionPrompt, SimulatedSensor};

/// Sensor access error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SensorError {
    #[error("Device orientation not supported")]
    SensorUnavailable,
    
    #[error("Device orientation permission denied")]
    PermissionDenied,
    
    #[error("Device orientation permission request failed: {0}")]
    PermissionRequestFailed(String),
}
