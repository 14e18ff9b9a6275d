pub mod config;
pub mod error;
pub mod message;
pub mod notify;

pub use config::APPLICATION_NAME;
pub use notify::{AbstractNotification, Notification};
