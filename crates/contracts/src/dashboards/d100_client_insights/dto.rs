use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Result of `POST /api/ai/analyze-orders`.
///
/// The backend emits Spanish keys; the Rust side uses English field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesAnalysisResponse {
    #[serde(rename = "resumen_ejecutivo")]
    pub executive_summary: String,
    #[serde(rename = "score_oportunidad")]
    pub opportunity_score: i32,
    #[serde(rename = "alertas", default, deserialize_with = "null_as_empty")]
    pub alerts: Vec<String>,
    #[serde(rename = "accion_recomendada")]
    pub recommended_action: String,
}

/// The model may answer `null` instead of an empty list
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stored analysis, element of `GET /api/analysis/history/{clientId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAnalysis {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub score: i32,
    pub executive_summary: String,
    pub recommendation: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub alerts: Vec<String>,
    /// ISO local datetime, e.g. "2024-03-15T14:02:26.123"
    #[serde(default)]
    pub created_at: String,
}

/// History records render exactly like a fresh analysis: fields are renamed, nothing is computed.
impl From<&SalesAnalysis> for SalesAnalysisResponse {
    fn from(record: &SalesAnalysis) -> Self {
        Self {
            executive_summary: record.executive_summary.clone(),
            opportunity_score: record.score,
            alerts: record.alerts.clone(),
            recommended_action: record.recommendation.clone(),
        }
    }
}

/// Result of `GET /api/analytics/{clientId}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDto {
    #[serde(default)]
    pub sales_by_category: BTreeMap<String, f64>,
    #[serde(default)]
    pub monthly_sales: BTreeMap<String, f64>,
}

/// Single labelled value prepared for a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl AnalyticsDto {
    /// Sum of all category amounts (center label of the spending chart)
    pub fn total_sales(&self) -> f64 {
        self.sales_by_category.values().sum()
    }

    /// Categories, largest first
    pub fn categories(&self) -> Vec<ChartPoint> {
        let mut points: Vec<ChartPoint> = self
            .sales_by_category
            .iter()
            .map(|(label, value)| ChartPoint {
                label: label.clone(),
                value: *value,
            })
            .collect();
        points.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.label.cmp(&b.label))
        });
        points
    }

    /// Months in calendar order; labels that are not Spanish month names go first
    pub fn months(&self) -> Vec<ChartPoint> {
        let mut points: Vec<ChartPoint> = self
            .monthly_sales
            .iter()
            .map(|(label, value)| ChartPoint {
                label: label.clone(),
                value: *value,
            })
            .collect();
        points.sort_by_key(|p| month_order(&p.label));
        points
    }
}

/// Position of a Spanish month abbreviation (1..=12), 0 when unknown
pub fn month_order(label: &str) -> u8 {
    match label.trim().to_lowercase().as_str() {
        "ene" => 1,
        "feb" => 2,
        "mar" => 3,
        "abr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "ago" => 8,
        "sep" | "sept" => 9,
        "oct" => 10,
        "nov" => 11,
        "dic" => 12,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_response_uses_spanish_keys() {
        let json = r#"{
            "resumen_ejecutivo": "X",
            "score_oportunidad": 8,
            "alertas": ["a", "b"],
            "accion_recomendada": "Y"
        }"#;
        let parsed: SalesAnalysisResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.executive_summary, "X");
        assert_eq!(parsed.opportunity_score, 8);
        assert_eq!(parsed.alerts, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(parsed.recommended_action, "Y");

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["score_oportunidad"], 8);
    }

    #[test]
    fn test_null_alerts_read_as_empty() {
        let json = r#"{"resumen_ejecutivo":"X","score_oportunidad":7,"alertas":null,"accion_recomendada":"Y"}"#;
        let parsed: SalesAnalysisResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.alerts.is_empty());
        assert_eq!(parsed.opportunity_score, 7);

        let missing: SalesAnalysisResponse =
            serde_json::from_str(r#"{"resumen_ejecutivo":"X","score_oportunidad":7,"accion_recomendada":"Y"}"#).unwrap();
        assert!(missing.alerts.is_empty());

        let record: SalesAnalysis = serde_json::from_str(
            r#"{"id":5,"score":6,"executiveSummary":"X","recommendation":"Y","alerts":null}"#,
        )
        .unwrap();
        assert!(record.alerts.is_empty());
    }

    #[test]
    fn test_history_record_renders_like_fresh_analysis() {
        let record: SalesAnalysis = serde_json::from_str(
            r#"{"id":101,"score":85,"executiveSummary":"X","recommendation":"Y","alerts":[]}"#,
        )
        .unwrap();
        let fresh: SalesAnalysisResponse = serde_json::from_str(
            r#"{"resumen_ejecutivo":"X","score_oportunidad":85,"alertas":[],"accion_recomendada":"Y"}"#,
        )
        .unwrap();

        assert_eq!(SalesAnalysisResponse::from(&record), fresh);
    }

    #[test]
    fn test_analytics_total_and_category_order() {
        let analytics: AnalyticsDto = serde_json::from_str(
            r#"{"salesByCategory":{"Soporte":8000,"Hardware":45000,"Software":32000},"monthlySales":{}}"#,
        )
        .unwrap();

        assert_eq!(analytics.total_sales(), 85000.0);
        let labels: Vec<String> = analytics.categories().into_iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Hardware", "Software", "Soporte"]);
    }

    #[test]
    fn test_months_sorted_by_calendar() {
        let analytics: AnalyticsDto = serde_json::from_str(
            r#"{"salesByCategory":{},"monthlySales":{"Mar":11000,"Ene":12000," DIC ":1,"Feb":15000,"Sept":7}}"#,
        )
        .unwrap();

        let labels: Vec<String> = analytics.months().into_iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Ene", "Feb", "Mar", "Sept", " DIC "]);
    }

    #[test]
    fn test_unknown_month_labels_come_first() {
        assert_eq!(month_order("Q1"), 0);
        assert_eq!(month_order("sep"), 9);
        assert_eq!(month_order("SEPT"), 9);

        let analytics: AnalyticsDto = serde_json::from_str(
            r#"{"monthlySales":{"Feb":2,"Total":3}}"#,
        )
        .unwrap();
        let labels: Vec<String> = analytics.months().into_iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Total", "Feb"]);
    }
}
