use tracing::{error, info, warn};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Outbound surface for user-visible messages (the toast system in the
/// browser console). The core only reports decisions through this trait;
/// presentation is entirely the implementor's concern.
pub trait NotificationSink {
    fn notify(&self, severity: Severity, message: &str);
}

/// Default sink that forwards notifications to the tracing subscriber.
/// Used by the CLI binary and anywhere no toast surface exists.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => info!("{}", message),
            Severity::Warning => warn!("{}", message),
            Severity::Error => error!("{}", message),
        }
    }
}
