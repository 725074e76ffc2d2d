//! Innovation generation and breakthrough operations

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::endpoints::Endpoint;
use crate::error::Result;
use crate::ops::{ConsoleOps, OpCategory};

/// Payload for generating innovations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InnovationRequest {
    pub problem: String,
    /// Domains to draw ideas from.
    pub domains: Vec<String>,
    pub cross_pollinate: bool,
    pub mode: String,
    pub count: u32,
}

impl ConsoleOps {
    /// Start innovation generation. Returns the server-assigned id on
    /// declared success; failures surface a blocking notice.
    pub async fn generate_innovations(&self, request: &InnovationRequest) -> Option<String> {
        let result = self.try_generate_innovations(request).await;
        self.absorb(OpCategory::Write, "generate innovations", result)
            .await
            .flatten()
    }

    async fn try_generate_innovations(&self, request: &InnovationRequest) -> Result<Option<String>> {
        debug!(problem = %request.problem, domains = request.domains.len(), "generating innovations");
        let response = self
            .gateway()
            .post(Endpoint::InnovationGenerate.path(), request)
            .await?;

        if response["status"] == "success" {
            if let Some(id) = response["innovation_id"].as_str() {
                info!(innovation_id = id, "innovation generation started");
                return Ok(Some(id.to_string()));
            }
        }
        Ok(None)
    }

    /// Load the breakthrough list. Absent or undeclared payloads yield an
    /// empty list; failures degrade silently per the read policy.
    pub async fn load_breakthroughs(&self) -> Option<Vec<Value>> {
        let result = self.try_load_breakthroughs().await;
        self.absorb(OpCategory::Read, "load breakthroughs", result)
            .await
    }

    async fn try_load_breakthroughs(&self) -> Result<Vec<Value>> {
        let data = self
            .gateway()
            .get(Endpoint::InnovationBreakthroughs.path())
            .await?;

        let breakthroughs = if data["status"] == "success" {
            data.get("breakthroughs")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        debug!(count = breakthroughs.len(), "loaded breakthroughs");
        Ok(breakthroughs)
    }
}
