//! Diagnostic Readouts
//!
//! Optional plain-text labels showing raw and computed values.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use shine_mapper::{Axis, Channel, UNAVAILABLE};

/// Readout label slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Readout {
    /// Raw sensor angle
    Raw(Axis),
    /// Computed channel value
    Computed(Channel),
}

impl Readout {
    pub const ALL: [Readout; 7] = [
        Readout::Raw(Axis::Alpha),
        Readout::Raw(Axis::Beta),
        Readout::Raw(Axis::Gamma),
        Readout::Computed(Channel::ShinePositionX),
        Readout::Computed(Channel::ShinePositionY),
        Readout::Computed(Channel::RotateX),
        Readout::Computed(Channel::RotateY),
    ];
}

/// Diagnostic label writer.
///
/// Every method defaults to doing nothing, so a surface without readouts
/// needs no code at all.
pub trait DiagnosticsSink {
    fn show(&mut self, _readout: Readout, _text: &str) {}

    fn mark_unavailable(&mut self, readout: Readout) {
        self.show(readout, UNAVAILABLE);
    }
}

impl<T: DiagnosticsSink + ?Sized> DiagnosticsSink for Box<T> {
    fn show(&mut self, readout: Readout, text: &str) {
        (**self).show(readout, text);
    }

    fn mark_unavailable(&mut self, readout: Readout) {
        (**self).mark_unavailable(readout);
    }
}

impl<T: DiagnosticsSink + ?Sized> DiagnosticsSink for Rc<RefCell<T>> {
    fn show(&mut self, readout: Readout, text: &str) {
        self.borrow_mut().show(readout, text);
    }

    fn mark_unavailable(&mut self, readout: Readout) {
        self.borrow_mut().mark_unavailable(readout);
    }
}

/// Surface without readouts
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl DiagnosticsSink for NoDiagnostics {}

/// Readout labels held in memory.
///
/// Only slots listed at construction are written, mirroring a page that
/// carries some labels and not others.
#[derive(Debug, Clone, Default)]
pub struct ReadoutPanel {
    labels: HashMap<Readout, String>,
}

impl ReadoutPanel {
    /// Panel with every readout slot
    pub fn new() -> Self {
        Self::with_slots(Readout::ALL)
    }

    pub fn with_slots(slots: impl IntoIterator<Item = Readout>) -> Self {
        Self {
            labels: slots.into_iter().map(|slot| (slot, String::new())).collect(),
        }
    }

    pub fn text(&self, readout: Readout) -> Option<&str> {
        self.labels.get(&readout).map(String::as_str)
    }
}

impl DiagnosticsSink for ReadoutPanel {
    fn show(&mut self, readout: Readout, text: &str) {
        if let Some(label) = self.labels.get_mut(&readout) {
            label.clear();
            label.push_str(text);
        }
    }
}
