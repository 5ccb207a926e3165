use serde::{Deserialize, Serialize};

/// Seconds a notification stays on screen before auto-dismissal.
pub const DEFAULT_DISPLAY_SECS: u64 = 5;

/// A short-lived, auto-dismissing user-facing notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    /// Display duration in seconds; the host dismisses the notice after this
    /// unless the user dismisses it first.
    pub display_secs: u64,
}

impl Notification {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            display_secs: DEFAULT_DISPLAY_SECS,
        }
    }
}
