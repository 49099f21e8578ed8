use serde::{Deserialize, Serialize};

/// Upper bound of the discount slider, in percent
pub const MAX_DISCOUNT_PERCENTAGE: u32 = 50;

/// Contract lengths offered by the simulator, in months
pub const CONTRACT_DURATIONS: [u32; 3] = [12, 24, 36];

/// Body of `POST /api/ai/simulate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Client the scenario is simulated for (the backend calls it `userId`)
    pub user_id: i64,
    pub discount_percentage: u32,
    pub contract_duration_months: u32,
}

impl SimulationRequest {
    /// Builds a request, clamping the discount and snapping the duration to an offered one
    pub fn new(client_id: i64, discount_percentage: u32, contract_duration_months: u32) -> Self {
        let duration = if CONTRACT_DURATIONS.contains(&contract_duration_months) {
            contract_duration_months
        } else {
            CONTRACT_DURATIONS[0]
        };
        Self {
            user_id: client_id,
            discount_percentage: discount_percentage.min(MAX_DISCOUNT_PERCENTAGE),
            contract_duration_months: duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = SimulationRequest::new(3, 15, 24);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["userId"], 3);
        assert_eq!(value["discountPercentage"], 15);
        assert_eq!(value["contractDurationMonths"], 24);
    }

    #[test]
    fn test_request_clamps_inputs() {
        let request = SimulationRequest::new(1, 80, 18);
        assert_eq!(request.discount_percentage, 50);
        assert_eq!(request.contract_duration_months, 12);
    }
}
