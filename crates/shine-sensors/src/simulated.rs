//! Simulated Sensor
//!
//! In-process orientation capability with a scripted support level and
//! permission answer. Cloning shares the same sensor, so the host side can
//! keep a handle to dispatch samples after the manager owns its copy.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use shine_mapper::OrientationSample;
use smol::channel::{self, Receiver, Sender};

use crate::capability::{
    OrientationCapability, OrientationHandler, PermissionOutcome, PermissionState, Support,
};

#[derive(Clone)]
enum Answer {
    Immediate(PermissionOutcome),
    Deferred(Receiver<PermissionOutcome>),
}

struct Inner {
    support: Support,
    answer: Answer,
    permission: Cell<PermissionState>,
    requests: Cell<usize>,
    handlers: RefCell<Vec<OrientationHandler>>,
}

/// Scripted orientation sensor
#[derive(Clone)]
pub struct SimulatedSensor {
    inner: Rc<Inner>,
}

/// Host-side answer to a deferred permission prompt
#[derive(Debug, Clone)]
pub struct PermissionPrompt {
    sender: Sender<PermissionOutcome>,
}

impl PermissionPrompt {
    /// Answer the pending (or next) request. Returns false if already answered.
    pub fn resolve(&self, outcome: PermissionOutcome) -> bool {
        self.sender.try_send(outcome).is_ok()
    }
}

impl SimulatedSensor {
    fn with(support: Support, answer: Answer) -> Self {
        Self {
            inner: Rc::new(Inner {
                support,
                answer,
                permission: Cell::new(PermissionState::Prompt),
                requests: Cell::new(0),
                handlers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Device without orientation events
    pub fn unsupported() -> Self {
        Self::with(Support::Unsupported, Answer::Immediate(PermissionOutcome::Denied))
    }

    /// Events available without permission
    pub fn direct() -> Self {
        Self::with(Support::Direct, Answer::Immediate(PermissionOutcome::Granted))
    }

    /// Permission-gated sensor answering immediately
    pub fn gated(outcome: PermissionOutcome) -> Self {
        Self::with(Support::PermissionGated, Answer::Immediate(outcome))
    }

    /// Permission-gated sensor whose answer comes from the returned prompt.
    ///
    /// Until the prompt is resolved the request stays pending.
    pub fn deferred() -> (Self, PermissionPrompt) {
        let (sender, receiver) = channel::bounded(1);
        let sensor = Self::with(Support::PermissionGated, Answer::Deferred(receiver));
        (sensor, PermissionPrompt { sender })
    }

    /// Pretend an earlier session already settled the permission
    pub fn with_prior_permission(self, state: PermissionState) -> Self {
        self.inner.permission.set(state);
        self
    }

    /// Number of permission requests issued so far
    pub fn request_count(&self) -> usize {
        self.inner.requests.get()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }

    /// Deliver a sample to every subscriber.
    ///
    /// Handlers may subscribe more handlers; those receive the next sample.
    /// A dispatch from inside a handler reaches only handlers subscribed
    /// during the current dispatch.
    pub fn dispatch(&self, sample: OrientationSample) {
        let mut handlers = std::mem::take(&mut *self.inner.handlers.borrow_mut());
        for handler in handlers.iter_mut() {
            handler(sample);
        }

        let mut slot = self.inner.handlers.borrow_mut();
        let added = std::mem::replace(&mut *slot, handlers);
        slot.extend(added);
    }

    /// Deliver samples one after another
    pub fn replay(&self, samples: impl IntoIterator<Item = OrientationSample>) {
        for sample in samples {
            self.dispatch(sample);
        }
    }
}

impl OrientationCapability for SimulatedSensor {
    fn support(&self) -> Support {
        self.inner.support
    }

    fn query_permission(&self) -> PermissionState {
        self.inner.permission.get()
    }

    fn request_permission(&self) -> impl Future<Output = PermissionOutcome> {
        self.inner.requests.set(self.inner.requests.get() + 1);
        let inner = self.inner.clone();

        async move {
            let outcome = match inner.answer.clone() {
                Answer::Immediate(outcome) => outcome,
                Answer::Deferred(receiver) => receiver
                    .recv()
                    .await
                    .unwrap_or_else(|_| PermissionOutcome::Error("permission prompt closed".into())),
            };
            match outcome {
                PermissionOutcome::Granted => inner.permission.set(PermissionState::Granted),
                PermissionOutcome::Denied => inner.permission.set(PermissionState::Denied),
                PermissionOutcome::Error(_) => {}
            }
            outcome
        }
    }

    fn subscribe(&self, handler: OrientationHandler) {
        self.inner.handlers.borrow_mut().push(handler);
    }
}
