//! Dashboard operations
//!
//! Thin callers of the request gateway plus a side effect: read operations
//! populate the display registry, write/trigger operations start backend
//! work and report the assigned identifier. Failure handling for both
//! categories goes through [`ConsoleOps::absorb`] so the policy lives in
//! exactly one place.

pub mod core;
pub mod dashboard;
pub mod innovation;
pub mod simulation;

use std::sync::Arc;

use tracing::warn;

use crate::display::DisplayRegistry;
use crate::error::Result;
use crate::gateway::{ApiGateway, FailurePolicy, Notice, Notifier, PolicyTable};

/// Category an operation belongs to, for failure-policy lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCategory {
    Read,
    Write,
}

/// Shared context for all dashboard operations.
pub struct ConsoleOps {
    gateway: ApiGateway,
    display: Arc<DisplayRegistry>,
    notifier: Arc<dyn Notifier>,
    policies: PolicyTable,
}

impl ConsoleOps {
    pub fn new(
        gateway: ApiGateway,
        display: Arc<DisplayRegistry>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_policies(gateway, display, notifier, PolicyTable::default())
    }

    pub fn with_policies(
        gateway: ApiGateway,
        display: Arc<DisplayRegistry>,
        notifier: Arc<dyn Notifier>,
        policies: PolicyTable,
    ) -> Self {
        Self {
            gateway,
            display,
            notifier,
            policies,
        }
    }

    pub fn display(&self) -> &DisplayRegistry {
        &self.display
    }

    pub fn gateway(&self) -> &ApiGateway {
        &self.gateway
    }

    /// Apply the failure policy for an operation category.
    ///
    /// The error has already been logged by the gateway; this decides whether
    /// it additionally surfaces as a blocking notice. Either way the error is
    /// discarded afterwards, so callers see `None` rather than a `Result`.
    pub(crate) async fn absorb<T>(
        &self,
        category: OpCategory,
        action: &str,
        result: Result<T>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(action, error = %e, "operation failed");
                let policy = match category {
                    OpCategory::Read => self.policies.reads,
                    OpCategory::Write => self.policies.writes,
                };
                if policy == FailurePolicy::Notify {
                    self.notifier.notify(Notice::action_failed(action)).await;
                }
                None
            }
        }
    }
}
