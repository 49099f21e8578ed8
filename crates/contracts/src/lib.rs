//! Wire contracts shared between the dashboard frontend and the sales backend.

pub mod dashboards;
pub mod domain;
pub mod system;
pub mod usecases;
