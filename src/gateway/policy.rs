//! Per-category failure handling policy
//!
//! Read operations degrade silently (the display keeps stale values) while
//! write/trigger operations surface a blocking notice to the user. That
//! asymmetry is deliberate; lifting it into an explicit table makes it
//! auditable and testable independently of the transport logic.

use async_trait::async_trait;
use tracing::error;

/// How an operation category reacts when a request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure and move on; no user-facing signal.
    LogOnly,
    /// Log the failure and raise a blocking notice through the [`Notifier`].
    Notify,
}

/// Failure policy per operation category.
#[derive(Debug, Clone, Copy)]
pub struct PolicyTable {
    pub reads: FailurePolicy,
    pub writes: FailurePolicy,
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self {
            reads: FailurePolicy::LogOnly,
            writes: FailurePolicy::Notify,
        }
    }
}

/// A blocking user-facing notice.
///
/// Deliberately carries no failure-kind detail beyond "try again"; the full
/// error is only visible in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub detail: String,
}

impl Notice {
    /// Standard notice for a failed user-triggered action.
    pub fn action_failed(action: &str) -> Self {
        Self {
            title: format!("Failed to {action}"),
            detail: "The request could not be completed. Please try again.".to_string(),
        }
    }
}

/// Sink for blocking user notices.
///
/// The production implementation writes to the log stream; tests substitute
/// a recording implementation to assert that write failures surface.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notice: Notice);
}

/// Notifier that surfaces notices through the log stream.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notice: Notice) {
        error!(title = %notice.title, detail = %notice.detail, "user notice");
    }
}
