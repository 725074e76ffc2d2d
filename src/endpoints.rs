//! Fixed registry of backend endpoints consumed by the console

/// Symbolic names for the backend operations the console talks to.
///
/// The name-to-path mapping is fixed at compile time; paths are always
/// relative and resolve against the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    Metrics,
    CoreAnalyze,
    CoreDecision,
    SimulationRun,
    SimulationResults,
    InnovationGenerate,
    InnovationBreakthroughs,
}

impl Endpoint {
    /// Relative path for this endpoint.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Health => "/api/health",
            Endpoint::Metrics => "/api/metrics",
            Endpoint::CoreAnalyze => "/api/core/analyze",
            Endpoint::CoreDecision => "/api/core/decision",
            Endpoint::SimulationRun => "/api/simulation/run",
            Endpoint::SimulationResults => "/api/simulation/results",
            Endpoint::InnovationGenerate => "/api/innovation/generate",
            Endpoint::InnovationBreakthroughs => "/api/innovation/breakthroughs",
        }
    }

    /// All endpoints the console knows about.
    pub fn all() -> &'static [Endpoint] {
        &[
            Endpoint::Health,
            Endpoint::Metrics,
            Endpoint::CoreAnalyze,
            Endpoint::CoreDecision,
            Endpoint::SimulationRun,
            Endpoint::SimulationResults,
            Endpoint::InnovationGenerate,
            Endpoint::InnovationBreakthroughs,
        ]
    }
}
