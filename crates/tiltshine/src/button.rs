//! Shiny Button
//!
//! Wires the subscription manager, the shine effect and the button control.

use std::cell::RefCell;
use std::time::Duration;

use shine_mapper::Mapper;
use shine_sensors::{
    Activation, OrientationCapability, OrientationHandler, PermissionState, SensorError,
    SubscriptionManager, SubscriptionState,
};
use shine_surface::{DiagnosticsSink, NoDiagnostics, Notice, NoticeSink, StyleSink};

use crate::effect::ShineEffect;

/// Button labels and prompt timing
#[derive(Debug, Clone)]
pub struct ButtonConfig {
    /// Label the button normally shows
    pub label: String,
    /// Label while a gesture is needed to enable the sensor
    pub prompt_label: String,
    /// Label once the sensor turns out to be missing
    pub unsupported_label: String,
    /// How long the prompt label stays before reverting
    pub prompt_timeout: Duration,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            label: "Shiny Button".into(),
            prompt_label: "Click to Enable Tilt!".into(),
            unsupported_label: "Tilt Not Supported".into(),
            prompt_timeout: Duration::from_secs(5),
        }
    }
}

/// Visible state of the button control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub label: String,
    pub disabled: bool,
}

/// Sinks the button writes to
pub struct Surface {
    pub style: Box<dyn StyleSink>,
    pub diagnostics: Box<dyn DiagnosticsSink>,
    pub notices: Box<dyn NoticeSink>,
}

impl Surface {
    /// Surface without diagnostic readouts
    pub fn new(style: impl StyleSink + 'static, notices: impl NoticeSink + 'static) -> Self {
        Self {
            style: Box::new(style),
            diagnostics: Box::new(NoDiagnostics),
            notices: Box::new(notices),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: impl DiagnosticsSink + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }
}

fn notice_for(err: &SensorError) -> Notice {
    match err {
        SensorError::SensorUnavailable => Notice::Unsupported,
        SensorError::PermissionDenied => Notice::PermissionDenied,
        SensorError::PermissionRequestFailed(detail) => Notice::PermissionRequestFailed {
            detail: detail.clone(),
        },
    }
}

/// Tilt-driven shine button
pub struct ShinyButton<C> {
    config: ButtonConfig,
    manager: SubscriptionManager<C>,
    notices: RefCell<Box<dyn NoticeSink>>,
    control: RefCell<ControlState>,
}

impl<C: OrientationCapability> ShinyButton<C> {
    /// Attach the effect to a surface and negotiate sensor access
    pub fn mount(capability: C, mapper: Mapper, surface: Surface, config: ButtonConfig) -> Self {
        let mut effect = ShineEffect::new(mapper, surface.style, surface.diagnostics);
        let button = Self {
            control: RefCell::new(ControlState {
                label: config.label.clone(),
                disabled: false,
            }),
            config,
            manager: SubscriptionManager::new(capability),
            notices: RefCell::new(surface.notices),
        };

        let handler: OrientationHandler = Box::new(move |sample| {
            if let Err(err) = effect.handle_sample(&sample) {
                tracing::trace!(%err, "Orientation sample left output unchanged");
            }
        });

        match button.manager.initialize(handler) {
            Ok(SubscriptionState::Unsubscribed) => {
                if button.manager.capability().query_permission() == PermissionState::Granted {
                    tracing::debug!("Permission already granted, keeping label");
                } else {
                    button.set_label(&button.config.prompt_label);
                }
            }
            Ok(_) => {}
            Err(err) => {
                let mut control = button.control.borrow_mut();
                control.label = button.config.unsupported_label.clone();
                control.disabled = true;
                drop(control);
                button.report(&err);
            }
        }

        button
    }

    /// User activation of the button
    pub async fn click(&self) -> Result<Activation, SensorError> {
        if self.control.borrow().disabled {
            return Ok(Activation::Ignored);
        }

        let result = self.manager.activate().await;
        match &result {
            Ok(Activation::Subscribed) => self.restore_label(),
            Ok(Activation::Ignored) => {}
            Err(err) => {
                self.restore_label();
                self.report(err);
            }
        }
        result
    }

    /// Revert the prompt label after the configured timeout
    pub async fn expire_prompt(&self) {
        smol::Timer::after(self.config.prompt_timeout).await;
        self.restore_label();
    }

    pub fn state(&self) -> SubscriptionState {
        self.manager.state()
    }

    pub fn awaiting_gesture(&self) -> bool {
        self.manager.awaiting_gesture()
    }

    pub fn control(&self) -> ControlState {
        self.control.borrow().clone()
    }

    pub fn capability(&self) -> &C {
        self.manager.capability()
    }

    fn set_label(&self, label: &str) {
        self.control.borrow_mut().label = label.to_string();
    }

    fn restore_label(&self) {
        let mut control = self.control.borrow_mut();
        if control.label == self.config.prompt_label {
            control.label = self.config.label.clone();
        }
    }

    fn report(&self, err: &SensorError) {
        let notice = notice_for(err);
        tracing::info!(notice = notice.message(), detail = notice.detail(), "Showing notice");
        self.notices.borrow_mut().notify(notice);
    }
}
