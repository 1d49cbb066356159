// Profile Finder shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod github;
pub mod theme;
pub mod view;
