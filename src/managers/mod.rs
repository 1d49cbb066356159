// Profile Finder managers
// Managers own small pieces of in-memory UI state.

pub mod tab_manager;
