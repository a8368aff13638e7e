//! Error-reporting collaborators.
//!
//! The store hands human-readable messages to an [`ErrorReporter`] whenever
//! it recovers from a failure. How (and for how long) the message is shown
//! is up to the host.

use std::cell::RefCell;
use std::rc::Rc;

/// Message shown for any persistence failure.
pub const STORAGE_MESSAGE: &str =
    "Unable to save or load tasks. Please check your storage settings.";

/// Receives user-facing error messages.
pub trait ErrorReporter {
    fn report(&self, message: &str);
}

/// Forwards messages to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Keeps every reported message. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    /// Remove and return everything reported so far.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.borrow_mut())
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
