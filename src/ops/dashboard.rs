//! Metrics and health read operations

use serde_json::Value;
use tracing::info;

use crate::display::{self, value_text};
use crate::endpoints::Endpoint;
use crate::error::Result;
use crate::ops::{ConsoleOps, OpCategory};

/// Which metrics field feeds which display target.
const METRIC_TARGETS: &[(&str, &str)] = &[
    ("total_analyses", display::TOTAL_ANALYSES),
    ("total_simulations", display::TOTAL_SIMULATIONS),
    ("total_innovations", display::TOTAL_INNOVATIONS),
    ("uptime", display::UPTIME),
];

impl ConsoleOps {
    /// Refresh the headline metric tiles from the metrics endpoint.
    ///
    /// Fields absent from the payload leave their targets untouched; a
    /// failed call degrades silently and the display keeps stale values.
    pub async fn load_metrics(&self) -> Option<Value> {
        let result = self.try_load_metrics().await;
        self.absorb(OpCategory::Read, "load metrics", result).await
    }

    async fn try_load_metrics(&self) -> Result<Value> {
        let data = self.gateway().get(Endpoint::Metrics.path()).await?;

        if data["status"] == "success" {
            if let Some(metrics) = data.get("metrics") {
                for (field, target) in METRIC_TARGETS {
                    if let Some(text) = metrics.get(*field).and_then(value_text) {
                        self.display().set_text(target, &text);
                    }
                }
            }
        }

        Ok(data)
    }

    /// Check backend health and return the payload.
    pub async fn check_health(&self) -> Option<Value> {
        let result = self.try_check_health().await;
        self.absorb(OpCategory::Read, "check health", result).await
    }

    async fn try_check_health(&self) -> Result<Value> {
        let data = self.gateway().get(Endpoint::Health.path()).await?;
        info!(health = %data, "system health");
        Ok(data)
    }
}
