use contracts::usecases::u101_simulate_scenario::{SimulationRequest, SimulationResponse};

use crate::shared::api_utils::{post_json, ApiError};
use crate::shared::config::use_mock_data;
use crate::shared::mock_data;

/// Scenario simulation for a discount and contract length
pub async fn simulate(request: &SimulationRequest) -> Result<SimulationResponse, ApiError> {
    if use_mock_data() {
        return Ok(mock_data::simulation());
    }
    post_json("/api/ai/simulate", request).await
}
