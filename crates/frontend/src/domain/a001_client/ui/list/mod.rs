pub mod state;
mod view;

pub use view::ClientSelector;
