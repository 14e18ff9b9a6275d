//! User notification capability.
//!
//! Every sync-daemon component that wants to tell the end user something goes
//! through [`AbstractNotification`]. No platform backend delivers
//! notifications yet, so the only implementation is the [`dummy`] sender.

mod dummy;

pub use dummy::Notification;

/// Notify the end user.
///
/// Implementations must not block the caller on delivery and must not fail
/// loudly: delivery problems are logged and swallowed, since notifications
/// are best-effort and must never stall synchronization.
pub trait AbstractNotification: Send + Sync {
    /// Name shown as the source of the notification
    fn application_name(&self) -> &str;

    /// Show a notification.
    ///
    /// `icon` and `append` are passed through untouched until a backend gives
    /// them meaning.
    fn send_notification(&self, title: &str, message: &str, icon: Option<&str>, append: bool);
}
