//! Subscription Manager
//!
//! Decides whether and when orientation events reach the mapper.
//!
//! ```text
//! Unsubscribed ──(direct)──────────────────────────► Subscribed
//! Unsubscribed ──(gesture)──► PermissionPending ──► Subscribed | Denied
//! Unsubscribed ──(no sensor)───────────────────────► Unsupported
//! ```

use std::cell::{Cell, RefCell};

use crate::capability::{OrientationCapability, OrientationHandler, PermissionOutcome, Support};
use crate::SensorError;

/// Subscription state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    Unsubscribed,
    PermissionPending,
    Subscribed,
    Denied,
    Unsupported,
}

/// Result of a user activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Permission granted and the handler subscribed
    Subscribed,
    /// No permission flow was armed, or it already fired
    Ignored,
}

/// Subscription manager.
///
/// Single-threaded; all state sits in cells so the gesture handler and the
/// permission continuation can share one manager by reference. No borrow is
/// held across the permission request.
pub struct SubscriptionManager<C> {
    capability: C,
    state: Cell<SubscriptionState>,
    initialized: Cell<bool>,
    trigger_armed: Cell<bool>,
    pending_handler: RefCell<Option<OrientationHandler>>,
}

impl<C: OrientationCapability> SubscriptionManager<C> {
    pub fn new(capability: C) -> Self {
        Self {
            capability,
            state: Cell::new(SubscriptionState::Unsubscribed),
            initialized: Cell::new(false),
            trigger_armed: Cell::new(false),
            pending_handler: RefCell::new(None),
        }
    }

    pub fn capability(&self) -> &C {
        &self.capability
    }

    pub fn state(&self) -> SubscriptionState {
        self.state.get()
    }

    /// A gesture would start the permission request
    pub fn awaiting_gesture(&self) -> bool {
        self.trigger_armed.get()
    }

    /// Probe the host and subscribe, or arm the gesture trigger.
    ///
    /// Only the first call has any effect.
    pub fn initialize(&self, handler: OrientationHandler) -> Result<SubscriptionState, SensorError> {
        if self.initialized.replace(true) {
            tracing::warn!(state = ?self.state.get(), "Subscription manager already initialized");
            return Ok(self.state.get());
        }

        match self.capability.support() {
            Support::Unsupported => {
                tracing::warn!("Device orientation not supported on this device");
                self.state.set(SubscriptionState::Unsupported);
                Err(SensorError::SensorUnavailable)
            }
            Support::Direct => {
                self.capability.subscribe(handler);
                self.state.set(SubscriptionState::Subscribed);
                tracing::info!("Device orientation supported directly");
                Ok(SubscriptionState::Subscribed)
            }
            Support::PermissionGated => {
                *self.pending_handler.borrow_mut() = Some(handler);
                self.trigger_armed.set(true);
                tracing::info!("Device orientation requires permission, waiting for user gesture");
                Ok(SubscriptionState::Unsubscribed)
            }
        }
    }

    /// User gesture: issue the permission request once.
    ///
    /// The trigger is disarmed before the request is issued, so overlapping
    /// activations while it is pending resolve to [`Activation::Ignored`].
    pub async fn activate(&self) -> Result<Activation, SensorError> {
        if !self.trigger_armed.replace(false) {
            tracing::debug!(state = ?self.state.get(), "Ignoring activation");
            return Ok(Activation::Ignored);
        }

        self.state.set(SubscriptionState::PermissionPending);
        tracing::info!("Requesting device orientation permission");

        let outcome = self.capability.request_permission().await;
        self.resolve(outcome)
    }

    fn resolve(&self, outcome: PermissionOutcome) -> Result<Activation, SensorError> {
        let handler = self.pending_handler.borrow_mut().take();

        match outcome {
            PermissionOutcome::Granted => {
                if let Some(handler) = handler {
                    self.capability.subscribe(handler);
                }
                self.state.set(SubscriptionState::Subscribed);
                tracing::info!("Device orientation permission granted");
                Ok(Activation::Subscribed)
            }
            PermissionOutcome::Denied => {
                self.state.set(SubscriptionState::Denied);
                tracing::warn!("Device orientation permission not granted");
                Err(SensorError::PermissionDenied)
            }
            PermissionOutcome::Error(detail) => {
                self.state.set(SubscriptionState::Denied);
                tracing::error!(%detail, "Error requesting device orientation permission");
                Err(SensorError::PermissionRequestFailed(detail))
            }
        }
    }
}
