//! Core analysis and decision triggers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::endpoints::Endpoint;
use crate::error::Result;
use crate::ops::{ConsoleOps, OpCategory};

/// Payload for a core analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Problem statement; the backend rejects empty strings.
    pub problem: String,
}

/// Payload for requesting a decision on an analyzed problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ConsoleOps {
    /// Run a core analysis. Returns the response payload on declared
    /// success; failures surface a blocking notice.
    pub async fn run_analysis(&self, request: &AnalysisRequest) -> Option<Value> {
        let result = self.try_run_analysis(request).await;
        self.absorb(OpCategory::Write, "run analysis", result)
            .await
            .flatten()
    }

    async fn try_run_analysis(&self, request: &AnalysisRequest) -> Result<Option<Value>> {
        debug!(problem = %request.problem, "running analysis");
        let response = self
            .gateway()
            .post(Endpoint::CoreAnalyze.path(), request)
            .await?;

        if response["status"] == "success" {
            info!("analysis completed");
            return Ok(Some(response));
        }
        Ok(None)
    }

    /// Request a decision for an analyzed problem.
    pub async fn request_decision(&self, request: &DecisionRequest) -> Option<Value> {
        let result = self.try_request_decision(request).await;
        self.absorb(OpCategory::Write, "request decision", result)
            .await
            .flatten()
    }

    async fn try_request_decision(&self, request: &DecisionRequest) -> Result<Option<Value>> {
        debug!(problem = %request.problem, "requesting decision");
        let response = self
            .gateway()
            .post(Endpoint::CoreDecision.path(), request)
            .await?;

        if response["status"] == "success" {
            info!("decision received");
            return Ok(Some(response));
        }
        Ok(None)
    }
}
