use serde::{Deserialize, Serialize};

/// Result of `POST /api/ai/simulate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    /// Probability (0-100) that the client accepts the offer
    pub acceptance_probability: i32,
    pub financial_impact: String,
    pub explanation: String,
}
