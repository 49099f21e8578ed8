pub mod u101_simulate_scenario;
pub mod u102_draft_email;
pub mod u103_order_chat;
pub mod u104_import_sales;
pub mod u105_export_report;
