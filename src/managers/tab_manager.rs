use crate::types::errors::TabError;
use crate::types::view::ActiveTab;

/// Trait defining the tab selection interface.
pub trait TabManagerTrait {
    fn get_active_tab(&self) -> ActiveTab;
    fn select_tab(&mut self, tab: ActiveTab);
    /// Selects a tab by its UI id (`repos`, `repositories` or `followers`).
    fn switch_tab(&mut self, tab_id: &str) -> Result<ActiveTab, TabError>;
}

/// Two-value tab selector. Switching never touches the network; it only
/// changes which already-loaded collection is rendered.
#[derive(Debug, Default)]
pub struct TabManager {
    active: ActiveTab,
}

impl TabManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TabManagerTrait for TabManager {
    fn get_active_tab(&self) -> ActiveTab {
        self.active
    }

    fn select_tab(&mut self, tab: ActiveTab) {
        self.active = tab;
    }

    fn switch_tab(&mut self, tab_id: &str) -> Result<ActiveTab, TabError> {
        let tab = tab_id.parse::<ActiveTab>()?;
        self.active = tab;
        Ok(tab)
    }
}
