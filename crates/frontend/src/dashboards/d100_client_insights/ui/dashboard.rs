use contracts::domain::a001_client::ClientId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::analysis_cards::AnalysisCards;
use super::charts::{SpendingChart, TrendChart};
use super::history_panel::HistoryPanel;
use crate::dashboards::d100_client_insights::api;
use crate::dashboards::d100_client_insights::state::{create_state, InsightsState};
use crate::domain::a001_client::ui::ClientSelector;
use crate::layout::header::Header;
use crate::shared::icons::icon;
use crate::usecases::u101_simulate_scenario::SimulationPanel;
use crate::usecases::u103_order_chat::ChatWidget;
use crate::usecases::u104_import_sales::SalesImporter;

/// Switch the active client and start both dependent loads.
///
/// Results are committed through the ticket, so a slower answer for a client
/// the user already left never reaches the screen.
fn select_client(state: RwSignal<InsightsState>, client: Option<ClientId>) {
    let Some(ticket) = state.try_update(|s| s.select_client(client)).flatten() else {
        log::debug!("Client selection cleared");
        return;
    };

    spawn_local(async move {
        let result = api::load_client_snapshot(ticket.client_id).await;
        if let Err(e) = &result {
            log::error!("Failed to load data for client {}: {}", ticket.client_id, e);
        }
        if !state.try_update(|s| s.finish_load(ticket, result)).unwrap_or(false) {
            log::debug!("Discarded stale data for client {}", ticket.client_id);
        }
    });

    let Some(history_ticket) = state.try_update(|s| s.begin_history()).flatten() else {
        return;
    };
    spawn_local(async move {
        let result = api::get_analysis_history(history_ticket.client_id).await;
        if let Err(e) = &result {
            log::error!("Failed to load analysis history: {}", e);
        }
        state.try_update(|s| s.finish_history(history_ticket, result));
    });
}

fn run_analysis(state: RwSignal<InsightsState>) {
    let Some(job) = state.try_update(|s| s.begin_analysis()).flatten() else {
        return;
    };
    spawn_local(async move {
        let result = api::analyze_orders(&job.order_ids).await;
        match &result {
            Ok(analysis) => log::info!(
                "Analysis for client {} ready, score {}",
                job.ticket.client_id,
                analysis.opportunity_score
            ),
            Err(e) => log::error!("AI analysis failed: {}", e),
        }
        if !state.try_update(|s| s.finish_analysis(job.ticket, result)).unwrap_or(false) {
            log::debug!("Discarded analysis for client {}", job.ticket.client_id);
        }
    });
}

/// Client insights dashboard (route `/dashboard`)
#[component]
pub fn ClientInsightsDashboard() -> impl IntoView {
    let state = create_state();

    // Memos so each section re-renders only when its own slice changes
    let active_client = Memo::new(move |_| state.with(|s| s.active_client));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let order_ids = Memo::new(move |_| state.with(|s| s.order_ids.clone()));
    let analytics = Memo::new(move |_| state.with(|s| s.analytics.clone()));
    let analysis = Memo::new(move |_| {
        state.with(|s| if s.analyzing { None } else { s.analysis.clone() })
    });
    let history = Memo::new(move |_| state.with(|s| s.history.clone()));
    let history_loading = Memo::new(move |_| state.with(|s| s.history_loading));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let analyze_label = Memo::new(move |_| state.with(|s| s.analyze_label()));
    let analyzing = Memo::new(move |_| state.with(|s| s.analyzing));
    let can_analyze = Memo::new(move |_| state.with(|s| s.can_analyze()));

    let on_select = Callback::new(move |client: Option<ClientId>| select_client(state, client));
    let on_deleted = Callback::new(move |client_id: ClientId| {
        if state.try_update(|s| s.client_deleted(client_id)).unwrap_or(false) {
            log::info!("Active client {} deleted, selection cleared", client_id);
        }
    });
    let on_history_select = Callback::new(move |analysis_id: i64| {
        state.update(|s| {
            s.show_history(analysis_id);
        });
    });

    view! {
        <div class="app-page">
            <Header active_client=active_client busy=loading />

            <main id="d100_client_insights--dashboard" class="dashboard">
                <div class="dashboard__top">
                    <div class="dashboard__main-column">
                        <ClientSelector on_select=on_select on_deleted=on_deleted />

                        <Button
                            appearance=ButtonAppearance::Primary
                            class="analyze-button"
                            on_click=move |_| run_analysis(state)
                            disabled=Signal::derive(move || !can_analyze.get())
                        >
                            {move || if analyzing.get() || loading.get() {
                                view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                            } else {
                                icon("brain")
                            }}
                            " "
                            {move || analyze_label.get()}
                        </Button>
                    </div>

                    <div class="dashboard__side-column">
                        {move || active_client.get().map(|client_id| view! {
                            <HistoryPanel history=history loading=history_loading on_select=on_history_select />
                            <SimulationPanel client_id=client_id />
                        })}
                    </div>
                </div>

                {move || error.get().map(|message| view! {
                    <div class="error-banner">
                        {icon("alert-triangle")}
                        <span>{message}</span>
                    </div>
                })}

                {move || analytics.get().map(|data| view! {
                    <section class="dashboard__metrics">
                        <h2 class="section-title">{icon("trending-up")}" Métricas Clave"</h2>
                        <div class="charts-grid">
                            <SpendingChart analytics=data.clone() />
                            <TrendChart analytics=data />
                        </div>
                    </section>
                })}

                {move || {
                    let client_id = active_client.get()?;
                    let analysis = analysis.get()?;
                    Some(view! { <AnalysisCards analysis=analysis client_id=client_id /> })
                }}

                <Show when=move || !order_ids.get().is_empty()>
                    <ChatWidget
                        scope=Signal::derive(move || active_client.get())
                        order_ids=Signal::derive(move || order_ids.get())
                        disabled=Signal::derive(move || loading.get())
                    />
                </Show>

                <section class="dashboard__admin">
                    <h3 class="section-title">"⚡ Herramientas Administrativas"</h3>
                    <SalesImporter />
                </section>
            </main>
        </div>
    }
}
