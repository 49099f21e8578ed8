pub mod api_utils;
pub mod clipboard;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod mock_data;
pub mod modal;
pub mod number_format;
pub mod theme;
