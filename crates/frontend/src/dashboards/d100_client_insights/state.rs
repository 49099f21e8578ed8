//! State of the client insights dashboard.
//!
//! One transition per user action. Every asynchronous completion carries the
//! `LoadTicket` it was issued under and is committed only while that ticket is
//! still current, so the most recently selected client always wins.

use contracts::dashboards::d100_client_insights::{AnalyticsDto, SalesAnalysis, SalesAnalysisResponse};
use contracts::domain::a001_client::ClientId;
use leptos::prelude::*;

use crate::shared::api_utils::ApiError;

pub const LOAD_ERROR: &str = "Error al cargar datos del cliente.";
pub const NO_ORDERS_ERROR: &str = "No hay órdenes para analizar. Seleccione un cliente con historial.";
pub const ANALYZE_ERROR: &str =
    "Error al conectar con el servicio de IA. Asegúrate de que el backend esté corriendo.";

/// Identifies one client selection. `seq` changes on every selection, so a
/// C -> D -> C switch still rejects the first C response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub client_id: ClientId,
    seq: u64,
}

/// Data fetched together for a client and installed as a unit
#[derive(Clone, Debug, PartialEq)]
pub struct ClientSnapshot {
    pub order_ids: Vec<i64>,
    pub analytics: AnalyticsDto,
}

/// Analysis request handed out by `begin_analysis`
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisJob {
    pub ticket: LoadTicket,
    pub order_ids: Vec<i64>,
}

#[derive(Clone, Debug, Default)]
pub struct InsightsState {
    pub active_client: Option<ClientId>,
    /// Replaced only when the new client's data arrives
    pub order_ids: Vec<i64>,
    pub analytics: Option<AnalyticsDto>,
    pub analysis: Option<SalesAnalysisResponse>,
    pub history: Vec<SalesAnalysis>,
    pub loading: bool,
    pub analyzing: bool,
    pub history_loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl InsightsState {
    pub fn current_ticket(&self) -> Option<LoadTicket> {
        self.active_client.map(|client_id| LoadTicket {
            client_id,
            seq: self.seq,
        })
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.current_ticket() == Some(ticket)
    }

    /// Switch the active client.
    ///
    /// `None` clears everything synchronously and returns no ticket (nothing to fetch).
    /// `Some(id)` enters loading and returns the ticket both fetches must be tagged with.
    pub fn select_client(&mut self, client: Option<ClientId>) -> Option<LoadTicket> {
        self.seq += 1;
        self.analysis = None;
        self.analytics = None;
        self.history.clear();
        self.error = None;
        self.analyzing = false;
        self.history_loading = false;

        match client {
            None => {
                self.active_client = None;
                self.order_ids.clear();
                self.loading = false;
                None
            }
            Some(id) => {
                self.active_client = Some(id);
                self.loading = true;
                self.current_ticket()
            }
        }
    }

    /// Commit the joined order-ids + analytics result. Returns `false` for a stale ticket.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<ClientSnapshot, ApiError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(snapshot) => {
                self.order_ids = snapshot.order_ids;
                self.analytics = Some(snapshot.analytics);
            }
            Err(_) => {
                // The previous client's order ids must not survive a failed switch
                self.order_ids.clear();
                self.analytics = None;
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        true
    }

    /// Caption of the analyze button
    pub fn analyze_label(&self) -> String {
        if self.analyzing {
            "Analizando Datos...".to_string()
        } else if self.loading {
            "Cargando datos del cliente...".to_string()
        } else if self.order_ids.is_empty() {
            "Seleccione un Cliente".to_string()
        } else {
            format!("Analizar {} Ventas con IA", self.order_ids.len())
        }
    }

    pub fn can_analyze(&self) -> bool {
        self.active_client.is_some() && !self.loading && !self.analyzing && !self.order_ids.is_empty()
    }

    /// Start an analysis of the current order-id set.
    ///
    /// Refuses (and explains) when there are no orders; refuses silently while busy.
    pub fn begin_analysis(&mut self) -> Option<AnalysisJob> {
        if self.active_client.is_none() || self.order_ids.is_empty() {
            self.error = Some(NO_ORDERS_ERROR.to_string());
            return None;
        }
        if self.loading || self.analyzing {
            return None;
        }
        let ticket = self.current_ticket()?;
        self.analyzing = true;
        self.error = None;
        Some(AnalysisJob {
            ticket,
            order_ids: self.order_ids.clone(),
        })
    }

    /// Commit an analysis result. Returns `false` when the client changed meanwhile.
    pub fn finish_analysis(
        &mut self,
        ticket: LoadTicket,
        result: Result<SalesAnalysisResponse, ApiError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.analyzing = false;
        match result {
            Ok(analysis) => self.analysis = Some(analysis),
            Err(_) => self.error = Some(ANALYZE_ERROR.to_string()),
        }
        true
    }

    /// Ticket for the history fetch of the active client
    pub fn begin_history(&mut self) -> Option<LoadTicket> {
        let ticket = self.current_ticket()?;
        self.history_loading = true;
        Some(ticket)
    }

    /// History failures are not user-facing; the panel just stays empty
    pub fn finish_history(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<SalesAnalysis>, ApiError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.history_loading = false;
        self.history = result.unwrap_or_default();
        true
    }

    /// Display a stored analysis of the active client
    pub fn show_history(&mut self, analysis_id: i64) -> bool {
        match self.history.iter().find(|h| h.id == analysis_id) {
            Some(record) => {
                self.analysis = Some(SalesAnalysisResponse::from(record));
                true
            }
            None => false,
        }
    }

    /// A client was deleted elsewhere; deselect it if it is the active one
    pub fn client_deleted(&mut self, client_id: ClientId) -> bool {
        if self.active_client == Some(client_id) {
            self.select_client(None);
            true
        } else {
            false
        }
    }
}

pub fn create_state() -> RwSignal<InsightsState> {
    RwSignal::new(InsightsState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn analytics(category: &str, amount: f64) -> AnalyticsDto {
        AnalyticsDto {
            sales_by_category: BTreeMap::from([(category.to_string(), amount)]),
            monthly_sales: BTreeMap::from([("Ene".to_string(), 50.0)]),
        }
    }

    fn snapshot(ids: &[i64], category: &str) -> ClientSnapshot {
        ClientSnapshot {
            order_ids: ids.to_vec(),
            analytics: analytics(category, 100.0),
        }
    }

    fn analysis(summary: &str) -> SalesAnalysisResponse {
        SalesAnalysisResponse {
            executive_summary: summary.to_string(),
            opportunity_score: 7,
            alerts: vec![],
            recommended_action: "Llamar".to_string(),
        }
    }

    fn loaded(client: ClientId, ids: &[i64]) -> InsightsState {
        let mut state = InsightsState::default();
        let ticket = state.select_client(Some(client)).unwrap();
        assert!(state.finish_load(ticket, Ok(snapshot(ids, "Hardware"))));
        state
    }

    #[test]
    fn test_successful_load_installs_both_results() {
        let mut state = InsightsState::default();
        let ticket = state.select_client(Some(7)).unwrap();
        assert!(state.loading);
        assert_eq!(ticket.client_id, 7);

        assert!(state.finish_load(ticket, Ok(snapshot(&[1001, 1002], "Hardware"))));
        assert!(!state.loading);
        assert_eq!(state.active_client, Some(7));
        assert_eq!(state.order_ids, vec![1001, 1002]);
        assert_eq!(state.analytics, Some(analytics("Hardware", 100.0)));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failed_load_shows_nothing_but_error() {
        let mut state = loaded(1, &[1, 2, 3]);
        let ticket = state.select_client(Some(7)).unwrap();
        // the old order ids stay visible while loading
        assert_eq!(state.order_ids, vec![1, 2, 3]);
        assert_eq!(state.analytics, None);

        assert!(state.finish_load(ticket, Err(ApiError::Status { status: 500, message: None })));
        assert!(!state.loading);
        assert!(state.order_ids.is_empty());
        assert_eq!(state.analytics, None);
        assert_eq!(state.error.as_deref(), Some(LOAD_ERROR));
    }

    #[test]
    fn test_selecting_clears_previous_error_and_analysis() {
        let mut state = loaded(1, &[1]);
        let job = state.begin_analysis().unwrap();
        state.finish_analysis(job.ticket, Err(ApiError::Network("down".into())));
        assert!(state.error.is_some());

        state.select_client(Some(2));
        assert_eq!(state.error, None);
        assert_eq!(state.analysis, None);
    }

    #[test]
    fn test_no_client_sentinel_clears_synchronously() {
        let mut state = loaded(3, &[5, 6]);
        let job = state.begin_analysis().unwrap();
        state.finish_analysis(job.ticket, Ok(analysis("X")));
        state.error = Some("old".into());

        assert_eq!(state.select_client(None), None);
        assert_eq!(state.active_client, None);
        assert!(state.order_ids.is_empty());
        assert_eq!(state.analytics, None);
        assert_eq!(state.analysis, None);
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_late_response_for_previous_client_is_discarded() {
        let mut state = InsightsState::default();
        let for_c = state.select_client(Some(1)).unwrap();
        let for_d = state.select_client(Some(2)).unwrap();

        assert!(state.finish_load(for_d, Ok(snapshot(&[20], "Software"))));
        assert!(!state.finish_load(for_c, Ok(snapshot(&[10], "Hardware"))));

        assert_eq!(state.active_client, Some(2));
        assert_eq!(state.order_ids, vec![20]);
        assert_eq!(state.analytics, Some(analytics("Software", 100.0)));
    }

    #[test]
    fn test_late_failure_for_previous_client_does_not_set_error() {
        let mut state = InsightsState::default();
        let for_c = state.select_client(Some(1)).unwrap();
        let for_d = state.select_client(Some(2)).unwrap();

        assert!(!state.finish_load(for_c, Err(ApiError::Network("timeout".into()))));
        assert_eq!(state.error, None);
        assert!(state.loading);

        assert!(state.finish_load(for_d, Ok(snapshot(&[20], "Software"))));
        assert!(!state.loading);
    }

    #[test]
    fn test_reselecting_same_client_rejects_first_request() {
        let mut state = InsightsState::default();
        let first = state.select_client(Some(1)).unwrap();
        state.select_client(Some(2));
        let second = state.select_client(Some(1)).unwrap();
        assert_ne!(first, second);

        assert!(!state.finish_load(first, Ok(snapshot(&[1], "Viejo"))));
        assert!(state.loading);
        assert!(state.finish_load(second, Ok(snapshot(&[2], "Nuevo"))));
        assert_eq!(state.order_ids, vec![2]);
    }

    #[test]
    fn test_response_after_deselect_is_discarded() {
        let mut state = InsightsState::default();
        let ticket = state.select_client(Some(4)).unwrap();
        state.select_client(None);

        assert!(!state.finish_load(ticket, Ok(snapshot(&[1], "Hardware"))));
        assert!(state.order_ids.is_empty());
        assert_eq!(state.analytics, None);
    }

    #[test]
    fn test_analysis_requires_orders() {
        let mut state = loaded(9, &[]);
        assert!(!state.can_analyze());
        assert_eq!(state.begin_analysis(), None);
        assert_eq!(state.error.as_deref(), Some(NO_ORDERS_ERROR));
        assert!(!state.analyzing);

        let mut empty = InsightsState::default();
        assert_eq!(empty.begin_analysis(), None);
    }

    #[test]
    fn test_analyze_label() {
        let mut state = InsightsState::default();
        assert_eq!(state.analyze_label(), "Seleccione un Cliente");

        let ticket = state.select_client(Some(7)).unwrap();
        assert_eq!(state.analyze_label(), "Cargando datos del cliente...");
        state.finish_load(ticket, Ok(snapshot(&[1001, 1002], "Hardware")));
        assert_eq!(state.analyze_label(), "Analizar 2 Ventas con IA");

        state.begin_analysis();
        assert_eq!(state.analyze_label(), "Analizando Datos...");
    }

    #[test]
    fn test_analysis_blocked_while_loading() {
        let mut state = loaded(1, &[1]);
        state.select_client(Some(2));
        assert!(!state.can_analyze());
        assert_eq!(state.begin_analysis(), None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_analysis_success_and_failure() {
        let mut state = loaded(1, &[10, 11]);
        let job = state.begin_analysis().unwrap();
        assert_eq!(job.order_ids, vec![10, 11]);
        assert!(state.analyzing);
        assert_eq!(state.begin_analysis(), None);

        assert!(state.finish_analysis(job.ticket, Ok(analysis("Primero"))));
        assert!(!state.analyzing);
        assert_eq!(state.analysis, Some(analysis("Primero")));

        let job = state.begin_analysis().unwrap();
        assert!(state.finish_analysis(job.ticket, Err(ApiError::Network("down".into()))));
        assert!(!state.analyzing);
        assert_eq!(state.error.as_deref(), Some(ANALYZE_ERROR));
        // the earlier result stays on screen
        assert_eq!(state.analysis, Some(analysis("Primero")));
    }

    #[test]
    fn test_analysis_for_previous_client_is_discarded() {
        let mut state = loaded(1, &[10]);
        let job = state.begin_analysis().unwrap();
        let ticket = state.select_client(Some(2)).unwrap();
        state.finish_load(ticket, Ok(snapshot(&[20], "Software")));

        assert!(!state.finish_analysis(job.ticket, Ok(analysis("De otro cliente"))));
        assert_eq!(state.analysis, None);
        assert!(!state.analyzing);
    }

    #[test]
    fn test_history_selection_renders_like_fresh_analysis() {
        let mut state = loaded(1, &[1]);
        let ticket = state.begin_history().unwrap();
        let record = SalesAnalysis {
            id: 101,
            user_id: Some(1),
            score: 85,
            executive_summary: "X".into(),
            recommendation: "Y".into(),
            alerts: vec![],
            created_at: "2024-03-15T14:02:26".into(),
        };
        assert!(state.finish_history(ticket, Ok(vec![record])));
        assert!(!state.history_loading);

        assert!(state.show_history(101));
        assert_eq!(
            state.analysis,
            Some(SalesAnalysisResponse {
                executive_summary: "X".into(),
                opportunity_score: 85,
                alerts: vec![],
                recommended_action: "Y".into(),
            })
        );
        assert!(!state.show_history(999));
    }

    #[test]
    fn test_stale_history_is_discarded() {
        let mut state = loaded(1, &[1]);
        let old = state.begin_history().unwrap();
        state.select_client(Some(2));

        let record = SalesAnalysis {
            id: 1,
            user_id: None,
            score: 3,
            executive_summary: String::new(),
            recommendation: String::new(),
            alerts: vec![],
            created_at: String::new(),
        };
        assert!(!state.finish_history(old, Ok(vec![record])));
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_deleting_active_client_deselects() {
        let mut state = loaded(5, &[1]);
        assert!(!state.client_deleted(6));
        assert_eq!(state.active_client, Some(5));

        assert!(state.client_deleted(5));
        assert_eq!(state.active_client, None);
        assert!(state.order_ids.is_empty());
        assert!(!state.client_deleted(5));
    }
}
