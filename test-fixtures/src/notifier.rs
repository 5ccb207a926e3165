use std::sync::{Arc, Mutex};

use visualeyes_core::models::Notification;
use visualeyes_core::traits::INotifier;

/// Notifier that records every notice for later assertion.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts of all recorded notices, in emission order.
    pub fn texts(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.text.clone())
            .collect()
    }

    /// Whether any recorded notice contains the given fragment.
    pub fn saw(&self, fragment: &str) -> bool {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .any(|n| n.text.contains(fragment))
    }
}

impl INotifier for RecordingNotifier {
    fn notify(&self, notice: Notification) {
        self.notices.lock().unwrap().push(notice);
    }
}
