//! Notification sinks for tests.

use std::sync::{Arc, Mutex};

use crate::notify::{NotifyError, NotifySink};

/// Records every message it is given.
#[derive(Debug, Clone, Default)]
pub(crate) struct CapturingSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl CapturingSink {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("sink mutex poisoned").clone()
    }
}

impl NotifySink for CapturingSink {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        self.messages
            .lock()
            .expect("sink mutex poisoned")
            .push(message.to_owned());
        Ok(())
    }
}

/// Fails every send as if no notification daemon were running.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingSink;

impl NotifySink for FailingSink {
    async fn send(&self, _message: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Spawn {
            command: "notify-send".to_owned(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
        })
    }
}
