/// The user's light/dark preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Decodes the stored flag. Anything other than `"true"` is light.
    pub fn from_stored(value: &str) -> ThemeMode {
        if value == "true" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Encodes the preference as the stored `"true"` / `"false"` flag.
    pub fn to_stored(&self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }
}

/// Theme-derived values injected into every render.
///
/// This is the only place page-level theme state lives; renderers read it,
/// nothing writes to it except the theme engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationContext {
    pub mode: ThemeMode,
    pub body_class: &'static str,
    pub toggle_label: &'static str,
    /// CSS custom properties, sorted by name.
    pub css_variables: Vec<(String, String)>,
}
