//! Named-filter management

mod manage_controller;

pub use manage_controller::FilterManagementController;
