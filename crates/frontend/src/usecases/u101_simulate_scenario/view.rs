use contracts::domain::a001_client::ClientId;
use contracts::usecases::u101_simulate_scenario::{
    SimulationRequest, SimulationResponse, CONTRACT_DURATIONS, MAX_DISCOUNT_PERCENTAGE,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::icons::icon;

const DEFAULT_DISCOUNT: u32 = 10;

/// Slider and select values come in as strings; anything unparsable falls back to the default
fn parse_or(value: &str, default: u32) -> u32 {
    value.trim().parse().unwrap_or(default)
}

/// "What if" simulator for a discount and a contract length
#[component]
pub fn SimulationPanel(client_id: ClientId) -> impl IntoView {
    let (discount, set_discount) = signal(DEFAULT_DISCOUNT);
    let (duration, set_duration) = signal(CONTRACT_DURATIONS[0]);
    let (result, set_result) = signal::<Option<SimulationResponse>>(None);
    let (is_running, set_is_running) = signal(false);

    let run = move |_: leptos::ev::MouseEvent| {
        if is_running.get_untracked() {
            return;
        }
        let request = SimulationRequest::new(client_id, discount.get_untracked(), duration.get_untracked());
        set_is_running.set(true);
        spawn_local(async move {
            match api::simulate(&request).await {
                Ok(response) => set_result.set(Some(response)),
                // Previous result stays on screen
                Err(e) => log::error!("Simulation failed for client {}: {}", client_id, e),
            }
            set_is_running.set(false);
        });
    };

    view! {
        <div class="card simulation-panel">
            <h3 class="card__title">{icon("sparkles")}" Simulador de Escenarios"</h3>

            <div class="form__group">
                <label class="form__label" for="simulation-discount">
                    {move || format!("Descuento: {}%", discount.get())}
                </label>
                <input
                    id="simulation-discount"
                    class="simulation-panel__slider"
                    type="range"
                    min="0"
                    max=MAX_DISCOUNT_PERCENTAGE.to_string()
                    step="1"
                    prop:value=move || discount.get().to_string()
                    on:input=move |ev| set_discount.set(parse_or(&event_target_value(&ev), DEFAULT_DISCOUNT))
                />
            </div>

            <div class="form__group">
                <label class="form__label" for="simulation-duration">"Duración del Contrato"</label>
                <select
                    id="simulation-duration"
                    class="form__select"
                    prop:value=move || duration.get().to_string()
                    on:change=move |ev| set_duration.set(parse_or(&event_target_value(&ev), CONTRACT_DURATIONS[0]))
                >
                    {CONTRACT_DURATIONS.iter().map(|months| view! {
                        <option value=months.to_string()>{format!("{} Meses", months)}</option>
                    }).collect_view()}
                </select>
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                class="simulation-panel__run"
                on_click=run
                disabled=Signal::derive(move || is_running.get())
            >
                {move || if is_running.get() { "Simulando..." } else { "Simular Impacto" }}
            </Button>

            {move || result.get().map(|r| view! {
                <div class="simulation-panel__result">
                    <div class="simulation-panel__metrics">
                        <div>
                            <span class="simulation-panel__caption">"Probabilidad"</span>
                            <span class="simulation-panel__value">{format!("{}%", r.acceptance_probability)}</span>
                        </div>
                        <div>
                            <span class="simulation-panel__caption">"Impacto"</span>
                            <span class="simulation-panel__value">{r.financial_impact.clone()}</span>
                        </div>
                    </div>
                    <p class="simulation-panel__explanation">{r.explanation.clone()}</p>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or() {
        assert_eq!(parse_or("25", DEFAULT_DISCOUNT), 25);
        assert_eq!(parse_or("", DEFAULT_DISCOUNT), 10);
        assert_eq!(parse_or("x", 12), 12);
    }
}
