//! Fixtures served instead of backend answers when mock data is switched on
//! (see `config::use_mock_data`).

use chrono::{Duration, Utc};
use contracts::dashboards::d100_client_insights::{AnalyticsDto, SalesAnalysis, SalesAnalysisResponse};
use contracts::domain::a001_client::Client;
use contracts::usecases::u101_simulate_scenario::SimulationResponse;
use contracts::usecases::u102_draft_email::EmailDraftResponse;
use contracts::usecases::u103_order_chat::ChatResponse;
use std::cell::RefCell;
use std::collections::BTreeMap;

fn client(id: i64, name: &str, industry: &str, email: &str, tier: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        industry: Some(industry.to_string()),
        contact_email: Some(email.to_string()),
        tier: Some(tier.to_string()),
    }
}

pub fn clients() -> Vec<Client> {
    vec![
        client(1, "TechSolutions CR", "Tecnología", "contacto@techsolutions.cr", "Gold"),
        client(2, "Distribuidora El Sol", "Retail", "ventas@elsol.com", "Silver"),
        client(3, "Constructora Moderna", "Construcción", "info@cmoderna.com", "Platinum"),
        client(4, "Farmacias Saludables", "Salud", "adquisiciones@fsalud.com", "Silver"),
        client(5, "Importadora Global", "Logística", "global@import.com", "Gold"),
    ]
}

thread_local! {
    /// In-memory client table so create / update / delete work without a backend
    static CLIENT_STORE: RefCell<Vec<Client>> = RefCell::new(clients());
}

pub fn with_client_store<R>(f: impl FnOnce(&mut Vec<Client>) -> R) -> R {
    CLIENT_STORE.with(|store| f(&mut store.borrow_mut()))
}

pub fn order_ids() -> Vec<i64> {
    vec![1001, 1002, 1003, 1004, 1005]
}

pub fn analysis() -> SalesAnalysisResponse {
    SalesAnalysisResponse {
        executive_summary: "El cliente muestra una tendencia de compra creciente del 15% en el último trimestre. Se detecta interés en nuevas líneas de productos premium.".to_string(),
        opportunity_score: 85,
        alerts: vec![
            "Posible churn por retraso en entrega reciente".to_string(),
            "Oportunidad de upsell en licencias de software".to_string(),
        ],
        recommended_action: "Ofrecer descuento del 10% en renovación anual y presentar el nuevo módulo de analítica.".to_string(),
    }
}

pub fn chat_reply() -> ChatResponse {
    ChatResponse {
        reply: "Basado en el historial de pedidos, este cliente prefiere entregas a principios de mes. Recomiendo contactarlo el próximo lunes con una oferta personalizada.".to_string(),
    }
}

/// Two stored analyses, 2 and 10 days old
pub fn analysis_history() -> Vec<SalesAnalysis> {
    let days_ago = |days: i64| {
        (Utc::now() - Duration::days(days))
            .naive_utc()
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string()
    };
    vec![
        SalesAnalysis {
            id: 101,
            user_id: Some(1),
            score: 85,
            executive_summary: "Tendencia positiva. Alto potencial de renovación.".to_string(),
            recommendation: "Ofrecer plan anual.".to_string(),
            alerts: vec![],
            created_at: days_ago(2),
        },
        SalesAnalysis {
            id: 102,
            user_id: Some(1),
            score: 72,
            executive_summary: "Estabilidad en compras. Sin cambios significativos.".to_string(),
            recommendation: "Mantener contacto regular.".to_string(),
            alerts: vec!["Ligera disminución en volumen".to_string()],
            created_at: days_ago(10),
        },
    ]
}

pub fn simulation() -> SimulationResponse {
    SimulationResponse {
        acceptance_probability: 78,
        financial_impact: "+$12,500 USD anual".to_string(),
        explanation: "El descuento propuesto del 15% es atractivo para el cliente dado su historial de sensibilidad al precio, y la duración de 24 meses asegura un flujo de caja constante.".to_string(),
    }
}

pub fn analytics() -> AnalyticsDto {
    AnalyticsDto {
        sales_by_category: BTreeMap::from([
            ("Hardware".to_string(), 45000.0),
            ("Software".to_string(), 32000.0),
            ("Servicios".to_string(), 15000.0),
            ("Soporte".to_string(), 8000.0),
        ]),
        monthly_sales: BTreeMap::from([
            ("Ene".to_string(), 12000.0),
            ("Feb".to_string(), 15000.0),
            ("Mar".to_string(), 11000.0),
            ("Abr".to_string(), 18000.0),
            ("May".to_string(), 22000.0),
            ("Jun".to_string(), 20000.0),
        ]),
    }
}

pub fn email_draft() -> EmailDraftResponse {
    EmailDraftResponse {
        subject: "Propuesta exclusiva para renovación de servicios - TechSolutions CR".to_string(),
        body: "Estimado Juan,\n\nEspero que este correo te encuentre bien. Analizando su historial con nosotros, hemos preparado una oferta especial para la renovación de sus servicios...\n\nQuedo atento a tus comentarios.\n\nSaludos,\nTu Ejecutivo de Cuenta".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_newest_first() {
        let history = analysis_history();
        assert_eq!(history.len(), 2);
        assert!(history[0].created_at > history[1].created_at);
    }

    #[test]
    fn test_client_store_is_seeded() {
        let count = with_client_store(|clients| clients.len());
        assert_eq!(count, 5);
    }

    #[test]
    fn test_mock_analytics_total() {
        assert_eq!(analytics().total_sales(), 100000.0);
        assert_eq!(analytics().months()[0].label, "Ene");
    }
}
