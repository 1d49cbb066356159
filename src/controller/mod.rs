// Profile Finder controller
// The lookup controller owns the fetch pipeline and the view state.

pub mod lookup_controller;

pub use lookup_controller::LookupController;
