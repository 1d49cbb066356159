//! App Core for Profile Finder.
//!
//! Central struct holding the controller, services and managers.

use std::fs;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::controller::LookupController;
use crate::database::connection::Database;
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::github_client::{Fetcher, GitHubClient};
use crate::services::preference_store::{PreferenceStore, SqlitePreferenceStore};
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::errors::AppError;
use crate::ui::render::{render_frame, RenderedFrame};

pub struct App {
    pub config: AppConfig,
    pub controller: Arc<LookupController>,
    pub theme_engine: ThemeEngine,
    pub tab_manager: TabManager,
}

impl App {
    /// Opens the preference database under `config.data_dir` and builds a
    /// reqwest-backed client.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        fs::create_dir_all(&config.data_dir)?;
        let db = Arc::new(Database::open(config.database_path())?);
        let fetcher: Arc<dyn Fetcher> = Arc::new(GitHubClient::new(&config.user_agent)?);
        let store: Arc<dyn PreferenceStore> = Arc::new(SqlitePreferenceStore::new(db));
        Ok(Self::with_parts(config, fetcher, store))
    }

    /// Builds an app from already-constructed collaborators.
    pub fn with_parts(
        config: AppConfig,
        fetcher: Arc<dyn Fetcher>,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        let controller = Arc::new(LookupController::new(fetcher, config.api_url.clone()));
        let theme_engine = ThemeEngine::load(store);
        tracing::info!(
            api_url = %config.api_url,
            theme = ?theme_engine.get_theme(),
            "profile finder initialized"
        );

        Self {
            config,
            controller,
            theme_engine,
            tab_manager: TabManager::new(),
        }
    }

    /// Projects the current state into a frame.
    pub fn render(&self) -> RenderedFrame {
        render_frame(
            &self.controller.snapshot(),
            self.tab_manager.get_active_tab(),
            &self.theme_engine.presentation_context(),
        )
    }
}
