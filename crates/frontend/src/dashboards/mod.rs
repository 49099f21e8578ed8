pub mod d100_client_insights;

pub use d100_client_insights::ui::ClientInsightsDashboard;
