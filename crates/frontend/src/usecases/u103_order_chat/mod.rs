pub mod api;
pub mod state;
mod view;

pub use view::ChatWidget;
