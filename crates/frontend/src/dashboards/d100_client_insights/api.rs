use contracts::dashboards::d100_client_insights::{AnalyticsDto, SalesAnalysis, SalesAnalysisResponse};
use contracts::domain::a001_client::ClientId;
use futures::future::try_join;
use std::future::Future;

use super::state::ClientSnapshot;
use crate::shared::api_utils::{get_json, post_json, ApiError};
use crate::shared::config::use_mock_data;
use crate::shared::mock_data;

/// Order ids of the client
pub async fn get_order_ids(client_id: ClientId) -> Result<Vec<i64>, ApiError> {
    if use_mock_data() {
        return Ok(mock_data::order_ids());
    }
    get_json(&format!("/api/orders/client/{}/ids", client_id)).await
}

/// Sales totals of the client, by category and by month
pub async fn get_analytics(client_id: ClientId) -> Result<AnalyticsDto, ApiError> {
    if use_mock_data() {
        return Ok(mock_data::analytics());
    }
    get_json(&format!("/api/analytics/{}", client_id)).await
}

/// Both client fetches run concurrently; either failure fails the whole load
pub async fn load_client_snapshot(client_id: ClientId) -> Result<ClientSnapshot, ApiError> {
    join_snapshot(get_order_ids(client_id), get_analytics(client_id)).await
}

/// A snapshot only exists when both halves arrived
async fn join_snapshot<O, A>(order_ids: O, analytics: A) -> Result<ClientSnapshot, ApiError>
where
    O: Future<Output = Result<Vec<i64>, ApiError>>,
    A: Future<Output = Result<AnalyticsDto, ApiError>>,
{
    let (order_ids, analytics) = try_join(order_ids, analytics).await?;
    Ok(ClientSnapshot { order_ids, analytics })
}

/// AI analysis; the body is the bare JSON array of order ids
pub async fn analyze_orders(order_ids: &[i64]) -> Result<SalesAnalysisResponse, ApiError> {
    if use_mock_data() {
        return Ok(mock_data::analysis());
    }
    post_json("/api/ai/analyze-orders", &order_ids).await
}

pub async fn get_analysis_history(client_id: ClientId) -> Result<Vec<SalesAnalysis>, ApiError> {
    if use_mock_data() {
        return Ok(mock_data::analysis_history());
    }
    get_json(&format!("/api/analysis/history/{}", client_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;
    use std::collections::BTreeMap;

    fn analytics() -> AnalyticsDto {
        AnalyticsDto {
            sales_by_category: BTreeMap::from([("Hardware".to_string(), 100.0)]),
            monthly_sales: BTreeMap::from([("Ene".to_string(), 50.0)]),
        }
    }

    #[test]
    fn test_snapshot_needs_both_halves() {
        let snapshot = block_on(join_snapshot(ready(Ok(vec![1001, 1002])), ready(Ok(analytics())))).unwrap();
        assert_eq!(snapshot.order_ids, vec![1001, 1002]);
        assert_eq!(snapshot.analytics, analytics());
    }

    #[test]
    fn test_failed_order_ids_discard_analytics() {
        let result = block_on(join_snapshot(
            ready(Err(ApiError::Status {
                status: 500,
                message: None,
            })),
            ready(Ok(analytics())),
        ));
        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
    }

    #[test]
    fn test_failed_analytics_discard_order_ids() {
        let result = block_on(join_snapshot(
            ready(Ok(vec![1001])),
            ready(Err(ApiError::Network("offline".into()))),
        ));
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
