use crate::models::Notification;

/// User-facing notification capability supplied by the host.
pub trait INotifier: Send {
    /// Show a short-lived notice. Display and dismissal are host concerns.
    fn notify(&self, notice: Notification);
}
