use serde::{Deserialize, Serialize};

use crate::notify::AbstractNotification;

/// A notification to show to the end user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,

    pub message: String,

    /// Icon resource, passed through to the sender as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Merge into an already visible notification instead of showing a new one
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub append: bool,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            icon: None,
            append: false,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn appended(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    pub fn dispatch(&self, notifier: &dyn AbstractNotification) {
        notifier.send_notification(
            &self.title,
            &self.message,
            self.icon.as_deref(),
            self.append,
        );
    }
}
