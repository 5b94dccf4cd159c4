//! Orientation Capability
//!
//! What the host platform offers: sensor presence, permission, events.

use std::future::Future;

use shine_mapper::OrientationSample;

/// Consumer of orientation events
pub type OrientationHandler = Box<dyn FnMut(OrientationSample)>;

/// How the host exposes the orientation sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    /// No orientation events at all
    Unsupported,
    /// Events available without asking
    Direct,
    /// Events require an explicit grant requested from a user gesture
    PermissionGated,
}

/// Resolution of a permission request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionOutcome {
    Granted,
    Denied,
    /// Platform-level failure, with whatever detail the host gave
    Error(String),
}

/// Permission state as the host currently reports it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PermissionState {
    #[default]
    Prompt,
    Granted,
    Denied,
}

/// Host orientation sensor
pub trait OrientationCapability {
    fn support(&self) -> Support;

    /// Current permission state without prompting
    fn query_permission(&self) -> PermissionState {
        PermissionState::Prompt
    }

    /// Ask the user for access. Resolves exactly once.
    fn request_permission(&self) -> impl Future<Output = PermissionOutcome>;

    /// Register the event consumer for the lifetime of the surface
    fn subscribe(&self, handler: OrientationHandler);
}
