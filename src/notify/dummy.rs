use tracing::trace;

use crate::config::APPLICATION_NAME;
use crate::notify::AbstractNotification;

/// Notification sender for platforms without a delivery backend.
///
/// Keeps the capability available so callers do not need platform checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    application_name: String,
}

impl Notification {
    pub fn new() -> Self {
        Self::with_application_name(APPLICATION_NAME)
    }

    /// The name is stored as given, empty strings included.
    pub fn with_application_name(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
        }
    }
}

impl Default for Notification {
    fn default() -> Self {
        Self::new()
    }
}

impl AbstractNotification for Notification {
    fn application_name(&self) -> &str {
        &self.application_name
    }

    fn send_notification(&self, title: &str, message: &str, icon: Option<&str>, append: bool) {
        // TODO: deliver through native backends (toasts on Windows, libnotify on Linux)
        trace!(
            application = %self.application_name,
            title,
            message,
            icon,
            append,
            "Dropping notification, no delivery backend on this platform"
        );
    }
}
