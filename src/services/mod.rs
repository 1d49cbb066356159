// Profile Finder services
// Services provide core functionality: GitHub access, preference storage, theming.

pub mod github_client;
pub mod preference_store;
pub mod theme_engine;
