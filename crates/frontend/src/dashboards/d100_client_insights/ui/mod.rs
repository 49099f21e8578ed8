pub mod analysis_cards;
pub mod charts;
pub mod dashboard;
pub mod history_panel;

pub use dashboard::ClientInsightsDashboard;
