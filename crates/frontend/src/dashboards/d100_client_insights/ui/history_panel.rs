use contracts::dashboards::d100_client_insights::SalesAnalysis;
use leptos::prelude::*;

use super::analysis_cards::ScoreTone;
use crate::shared::date_utils::format_history_timestamp;
use crate::shared::icons::icon;

/// Stored analyses of the active client; clicking one shows it in the cards
#[component]
pub fn HistoryPanel(
    #[prop(into)] history: Signal<Vec<SalesAnalysis>>,
    #[prop(into)] loading: Signal<bool>,
    on_select: Callback<i64>,
) -> impl IntoView {
    view! {
        {move || {
            if loading.get() {
                return view! { <div class="history-panel__status history-panel__status--loading">"Cargando historial..."</div> }.into_any();
            }
            let items = history.get();
            if items.is_empty() {
                return view! { <div class="history-panel__status">"Sin análisis previos."</div> }.into_any();
            }
            view! {
                <div class="card history-panel">
                    <div class="history-panel__header">
                        {icon("clock")}
                        <h3>"Historial de Análisis"</h3>
                    </div>
                    <div class="history-panel__list">
                        {items.into_iter().map(|item| {
                            let id = item.id;
                            let tone = ScoreTone::from_score(item.score);
                            view! {
                                <button class="history-panel__item" on:click=move |_| on_select.run(id)>
                                    <div>
                                        <div class="history-panel__date">{format_history_timestamp(&item.created_at)}</div>
                                        <span class=format!("score-pill {}", tone.css_modifier())>
                                            {format!("Score: {}/10", item.score)}
                                        </span>
                                    </div>
                                    {icon("chevron-right")}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            }.into_any()
        }}
    }
}
