//! Client create / edit form
//!
//! - view_model.rs: form signals and the save command
//! - view.rs: the modal with the form

mod view;
mod view_model;

pub use view::ClientForm;
pub use view_model::ClientFormViewModel;
