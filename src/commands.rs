//! UI command dispatch.
//!
//! The WebView posts one JSON object per user action, tagged by `cmd`.
//! `parse_command` turns that into a [`UiCommand`]; `handle_command` applies
//! the synchronous part to the [`App`] and tells the caller what to do next.
//! Lookups are async, so they are handed back as [`CommandEffect::Lookup`]
//! for the caller to spawn.

use serde::Deserialize;

use crate::app::App;
use crate::managers::tab_manager::TabManagerTrait;
use crate::services::theme_engine::ThemeEngineTrait;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum UiCommand {
    /// The page finished loading and wants its first frame.
    UiReady,
    Submit { username: String },
    ToggleTheme,
    SelectTab { tab: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEffect {
    /// Redraw from current state.
    Render,
    /// Run a lookup for this raw input, then redraw as state changes.
    Lookup(String),
}

pub fn parse_command(message: &str) -> Result<UiCommand, String> {
    serde_json::from_str(message).map_err(|e| format!("invalid command: {}", e))
}

pub fn handle_command(app: &mut App, command: UiCommand) -> Result<CommandEffect, String> {
    match command {
        UiCommand::UiReady => Ok(CommandEffect::Render),
        UiCommand::Submit { username } => Ok(CommandEffect::Lookup(username)),
        UiCommand::ToggleTheme => {
            let mode = app.theme_engine.toggle_theme();
            tracing::debug!(theme = ?mode, "theme toggled");
            Ok(CommandEffect::Render)
        }
        UiCommand::SelectTab { tab } => {
            app.tab_manager.switch_tab(&tab).map_err(|e| e.to_string())?;
            Ok(CommandEffect::Render)
        }
    }
}
