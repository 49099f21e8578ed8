use contracts::dashboards::d100_client_insights::SalesAnalysisResponse;
use contracts::domain::a001_client::ClientId;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::usecases::u102_draft_email::EmailDraftModal;

pub const NO_ALERTS_TEXT: &str = "No se detectaron riesgos críticos.";

/// Color band of an opportunity score
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTone {
    High,
    Medium,
    Low,
}

impl ScoreTone {
    pub fn from_score(score: i32) -> Self {
        if score >= 8 {
            ScoreTone::High
        } else if score > 5 {
            ScoreTone::Medium
        } else {
            ScoreTone::Low
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            ScoreTone::High => "score--high",
            ScoreTone::Medium => "score--medium",
            ScoreTone::Low => "score--low",
        }
    }
}

/// Score, alerts, summary and recommended action of one analysis
#[component]
pub fn AnalysisCards(
    analysis: SalesAnalysisResponse,
    /// Client the recommendation is drafted for
    client_id: ClientId,
) -> impl IntoView {
    let tone = ScoreTone::from_score(analysis.opportunity_score);
    let alerts = analysis.alerts.clone();

    view! {
        <div class="analysis-grid">
            <div class="card score-card">
                <h3 class="card__title">{icon("trending-up")}" Score de Oportunidad"</h3>
                <div class=format!("score-ring {}", tone.css_modifier())>
                    {analysis.opportunity_score}
                    <span class="score-ring__scale">"/10"</span>
                </div>
                <p class="card__caption">"Probabilidad de Cierre"</p>
            </div>

            <div class="card alerts-card">
                <h3 class="card__title">{icon("alert-triangle")}" Alertas y Puntos de Atención"</h3>
                {if alerts.is_empty() {
                    view! {
                        <p class="alerts-card__empty">{icon("check-circle")}" "{NO_ALERTS_TEXT}</p>
                    }.into_any()
                } else {
                    view! {
                        <div class="alerts-card__list">
                            {alerts.into_iter().map(|alert| view! {
                                <div class="alerts-card__item">
                                    <span class="alerts-card__dot"></span>
                                    <span>{alert}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>

            <div class="card summary-card">
                <h3 class="card__title">{icon("activity")}" Resumen Ejecutivo"</h3>
                <div class="summary-card__text">{analysis.executive_summary.clone()}</div>
            </div>

            <ActionCard recommendation=analysis.recommended_action.clone() client_id=client_id />
        </div>
    }
}

/// Recommended action with the "draft email" entry point
#[component]
fn ActionCard(recommendation: String, client_id: ClientId) -> impl IntoView {
    let (email_open, set_email_open) = signal(false);
    let recommendation = StoredValue::new(recommendation);

    view! {
        <div class="card action-card">
            <h3 class="card__title action-card__title">
                <span>{icon("check-circle")}" Acción Estratégica"</span>
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Small
                    on_click=move |_| set_email_open.set(true)
                    attr:title="Redactar correo con IA"
                >
                    {icon("mail")}
                    " Redactar"
                </Button>
            </h3>
            <p class="action-card__text">{recommendation.get_value()}</p>
            <div class="action-card__footer">"Generado por IA"</div>
        </div>

        <Show when=move || email_open.get()>
            <EmailDraftModal
                client_id=client_id
                recommendation=recommendation.get_value()
                on_close=Callback::new(move |_| set_email_open.set(false))
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_tone_bands() {
        assert_eq!(ScoreTone::from_score(10), ScoreTone::High);
        assert_eq!(ScoreTone::from_score(8), ScoreTone::High);
        assert_eq!(ScoreTone::from_score(85), ScoreTone::High);
        assert_eq!(ScoreTone::from_score(7), ScoreTone::Medium);
        assert_eq!(ScoreTone::from_score(6), ScoreTone::Medium);
        assert_eq!(ScoreTone::from_score(5), ScoreTone::Low);
        assert_eq!(ScoreTone::from_score(0), ScoreTone::Low);
        assert_eq!(ScoreTone::Low.css_modifier(), "score--low");
    }
}
