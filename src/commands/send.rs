use anyhow::{Context, Result, bail};
use tracing::debug;

use magicicada_notify::config::Settings;
use magicicada_notify::message::NotificationRequest;
use magicicada_notify::{AbstractNotification, Notification};

pub struct SendArgs {
    pub message: Option<String>,
    pub title: String,
    pub icon: Option<String>,
    pub append: bool,
    pub json: Option<String>,
    pub app_name: Option<String>,
}

pub fn run(args: SendArgs) -> Result<()> {
    let request = build_request(args.message, args.title, args.icon, args.append, args.json)?;

    let notifier = notifier(args.app_name)?;

    debug!(
        "Dispatching notification {:?} to {:?}",
        request.title,
        notifier.application_name()
    );
    request.dispatch(&notifier);
    Ok(())
}

/// An explicit name wins over the settings file, which wins over the default.
fn notifier(app_name: Option<String>) -> Result<Notification> {
    match app_name {
        Some(name) => Ok(Notification::with_application_name(name)),
        None => Ok(Settings::load()
            .context("Failed to load notification settings")?
            .notifier()),
    }
}

fn build_request(
    message: Option<String>,
    title: String,
    icon: Option<String>,
    append: bool,
    json: Option<String>,
) -> Result<NotificationRequest> {
    if let Some(json_str) = json {
        return serde_json::from_str(&json_str).context("Failed to parse notification JSON");
    }

    let Some(message) = message else {
        bail!("Either a message or --json must be provided");
    };

    let mut request = NotificationRequest::new(title, message).appended(append);
    if let Some(icon) = icon {
        request = request.with_icon(icon);
    }
    Ok(request)
}
