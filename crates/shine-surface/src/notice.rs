//! User Notices
//!
//! Modal messages for permission outcomes and missing sensor support.

use std::cell::RefCell;
use std::rc::Rc;

/// User-visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Orientation capability missing on this device
    Unsupported,
    /// User declined the permission prompt
    PermissionDenied,
    /// Platform failed to run the permission request
    PermissionRequestFailed { detail: String },
}

impl Notice {
    /// Text presented to the user
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unsupported => {
                "Device orientation is not supported on this browser/device. The shine effect will not work."
            }
            Self::PermissionDenied => {
                "Device orientation permission was not granted. The shine effect will not work."
            }
            Self::PermissionRequestFailed { .. } => {
                "Could not request device orientation permission."
            }
        }
    }

    /// Diagnostic detail kept for logs, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::PermissionRequestFailed { detail } => Some(detail.as_str()),
            _ => None,
        }
    }
}

/// Presents notices to the user
pub trait NoticeSink {
    fn notify(&mut self, notice: Notice);
}

impl<T: NoticeSink + ?Sized> NoticeSink for Box<T> {
    fn notify(&mut self, notice: Notice) {
        (**self).notify(notice);
    }
}

impl<T: NoticeSink + ?Sized> NoticeSink for Rc<RefCell<T>> {
    fn notify(&mut self, notice: Notice) {
        self.borrow_mut().notify(notice);
    }
}

/// Notices collected in order of appearance
#[derive(Debug, Clone, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl NoticeSink for NoticeLog {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
