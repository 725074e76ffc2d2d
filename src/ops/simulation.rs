//! Simulation trigger and result operations

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::endpoints::Endpoint;
use crate::error::Result;
use crate::ops::{ConsoleOps, OpCategory};

/// Payload for starting a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Problem statement the simulation works on.
    pub problem: String,
    /// Companies selected for the scenario.
    pub companies: Vec<String>,
    pub parameters: SimulationParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub iterations: u32,
}

impl ConsoleOps {
    /// Kick off a simulation run. Returns the server-assigned id on declared
    /// success; on failure a blocking notice is surfaced and the error is
    /// discarded (nothing was mutated client-side).
    pub async fn start_simulation(&self, request: &SimulationRequest) -> Option<String> {
        let result = self.try_start_simulation(request).await;
        self.absorb(OpCategory::Write, "start simulation", result)
            .await
            .flatten()
    }

    async fn try_start_simulation(&self, request: &SimulationRequest) -> Result<Option<String>> {
        debug!(problem = %request.problem, companies = request.companies.len(), "starting simulation");
        let response = self
            .gateway()
            .post(Endpoint::SimulationRun.path(), request)
            .await?;

        if response["status"] == "success" {
            if let Some(id) = response["simulation_id"].as_str() {
                info!(simulation_id = id, "simulation started");
                return Ok(Some(id.to_string()));
            }
        }
        Ok(None)
    }

    /// Load simulation results. Returns the full payload; failures degrade
    /// silently per the read policy.
    pub async fn load_simulation_results(&self) -> Option<Value> {
        let result = self.try_load_simulation_results().await;
        self.absorb(OpCategory::Read, "load simulation results", result)
            .await
    }

    async fn try_load_simulation_results(&self) -> Result<Value> {
        let data = self.gateway().get(Endpoint::SimulationResults.path()).await?;

        if data["status"] == "success" {
            if let Some(results) = data.get("results").and_then(Value::as_array) {
                debug!(count = results.len(), "loaded simulation results");
            }
        }

        Ok(data)
    }
}
