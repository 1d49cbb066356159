//! Theme Engine: owns the light/dark preference and the CSS palette derived from it.

use std::sync::Arc;

use crate::services::preference_store::PreferenceStore;
use crate::types::theme::{PresentationContext, ThemeMode};

/// Key the preference is stored under.
pub const THEME_PREFERENCE_KEY: &str = "darkMode";

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn get_theme(&self) -> ThemeMode;
    /// Flips the theme and persists it before returning. Returns the new mode.
    fn toggle_theme(&mut self) -> ThemeMode;
    fn get_css_variables(&self) -> Vec<(String, String)>;
    fn presentation_context(&self) -> PresentationContext;
}

/// GitHub-style dark theme colors.
struct DarkPalette;
impl DarkPalette {
    const BG_PRIMARY: &'static str = "#0d1117";
    const BG_SECONDARY: &'static str = "#161b22";
    const BG_TERTIARY: &'static str = "#21262d";
    const TEXT_PRIMARY: &'static str = "#c9d1d9";
    const TEXT_SECONDARY: &'static str = "#8b949e";
    const BORDER: &'static str = "#30363d";
    const LINK: &'static str = "#58a6ff";
    const HOVER_BG: &'static str = "#1f242b";
    const INPUT_BG: &'static str = "#0d1117";
    const DANGER_BG: &'static str = "#490202";
    const DANGER_TEXT: &'static str = "#ffdcd7";
    const SKELETON: &'static str = "#30363d";
}

/// GitHub-style light theme colors.
struct LightPalette;
impl LightPalette {
    const BG_PRIMARY: &'static str = "#ffffff";
    const BG_SECONDARY: &'static str = "#f6f8fa";
    const BG_TERTIARY: &'static str = "#eaeef2";
    const TEXT_PRIMARY: &'static str = "#24292f";
    const TEXT_SECONDARY: &'static str = "#57606a";
    const BORDER: &'static str = "#d0d7de";
    const LINK: &'static str = "#0969da";
    const HOVER_BG: &'static str = "#f3f4f6";
    const INPUT_BG: &'static str = "#ffffff";
    const DANGER_BG: &'static str = "#ffebe9";
    const DANGER_TEXT: &'static str = "#82071e";
    const SKELETON: &'static str = "#d0d7de";
}

/// The theme engine implementation.
pub struct ThemeEngine {
    store: Arc<dyn PreferenceStore>,
    current_theme: ThemeMode,
}

impl ThemeEngine {
    /// Reads the stored preference once. Missing or unreadable means light.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let current_theme = match store.read(THEME_PREFERENCE_KEY) {
            Ok(Some(value)) => ThemeMode::from_stored(&value),
            Ok(None) => ThemeMode::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read theme preference, using light");
                ThemeMode::default()
            }
        };
        tracing::debug!(theme = ?current_theme, "theme preference loaded");

        Self {
            store,
            current_theme,
        }
    }

    fn build_variables(colors: [(&str, &str); 12]) -> Vec<(String, String)> {
        let mut vars: Vec<(String, String)> = colors
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        vars.push((
            "--font-family".into(),
            "-apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif".into(),
        ));
        vars.push(("--transition-normal".into(), "200ms".into()));
        vars.sort();
        vars
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn get_theme(&self) -> ThemeMode {
        self.current_theme
    }

    fn toggle_theme(&mut self) -> ThemeMode {
        self.current_theme = self.current_theme.toggled();
        if let Err(e) = self
            .store
            .write(THEME_PREFERENCE_KEY, self.current_theme.to_stored())
        {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }
        self.current_theme
    }

    fn get_css_variables(&self) -> Vec<(String, String)> {
        match self.current_theme {
            ThemeMode::Dark => Self::build_variables([
                ("--bg-primary", DarkPalette::BG_PRIMARY),
                ("--bg-secondary", DarkPalette::BG_SECONDARY),
                ("--bg-tertiary", DarkPalette::BG_TERTIARY),
                ("--text-primary", DarkPalette::TEXT_PRIMARY),
                ("--text-secondary", DarkPalette::TEXT_SECONDARY),
                ("--border-color", DarkPalette::BORDER),
                ("--link-color", DarkPalette::LINK),
                ("--hover-bg", DarkPalette::HOVER_BG),
                ("--input-bg", DarkPalette::INPUT_BG),
                ("--danger-bg", DarkPalette::DANGER_BG),
                ("--danger-text", DarkPalette::DANGER_TEXT),
                ("--skeleton-color", DarkPalette::SKELETON),
            ]),
            ThemeMode::Light => Self::build_variables([
                ("--bg-primary", LightPalette::BG_PRIMARY),
                ("--bg-secondary", LightPalette::BG_SECONDARY),
                ("--bg-tertiary", LightPalette::BG_TERTIARY),
                ("--text-primary", LightPalette::TEXT_PRIMARY),
                ("--text-secondary", LightPalette::TEXT_SECONDARY),
                ("--border-color", LightPalette::BORDER),
                ("--link-color", LightPalette::LINK),
                ("--hover-bg", LightPalette::HOVER_BG),
                ("--input-bg", LightPalette::INPUT_BG),
                ("--danger-bg", LightPalette::DANGER_BG),
                ("--danger-text", LightPalette::DANGER_TEXT),
                ("--skeleton-color", LightPalette::SKELETON),
            ]),
        }
    }

    fn presentation_context(&self) -> PresentationContext {
        let (body_class, toggle_label) = match self.current_theme {
            ThemeMode::Dark => ("theme-dark", "☀️ Light Mode"),
            ThemeMode::Light => ("theme-light", "🌙 Dark Mode"),
        };
        PresentationContext {
            mode: self.current_theme,
            body_class,
            toggle_label,
            css_variables: self.get_css_variables(),
        }
    }
}
