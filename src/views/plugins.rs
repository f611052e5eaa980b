use serde::Serialize;
use serde_json::json;

use crate::fixtures::{generate_plugins, PluginCategory, PluginIntegration};
use crate::logging::{log_view, v_str};

/// Tab strip over the catalog. Categories without a tab of their own
/// (staffing, accounting) are grouped under `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PluginTab {
    All,
    Pos,
    SupplyChain,
    Delivery,
    Other,
}

impl PluginTab {
    pub const TABS: [PluginTab; 5] = [
        PluginTab::All,
        PluginTab::Pos,
        PluginTab::SupplyChain,
        PluginTab::Delivery,
        PluginTab::Other,
    ];

    pub fn for_category(category: PluginCategory) -> Self {
        match category {
            PluginCategory::Pos => PluginTab::Pos,
            PluginCategory::SupplyChain => PluginTab::SupplyChain,
            PluginCategory::Delivery => PluginTab::Delivery,
            PluginCategory::Staffing | PluginCategory::Accounting => PluginTab::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PluginTab::All => "All",
            PluginTab::Pos => PluginCategory::Pos.label(),
            PluginTab::SupplyChain => PluginCategory::SupplyChain.label(),
            PluginTab::Delivery => PluginCategory::Delivery.label(),
            PluginTab::Other => "Other",
        }
    }

    pub fn matches(&self, category: PluginCategory) -> bool {
        *self == PluginTab::All || *self == PluginTab::for_category(category)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PluginBoard {
    plugins: Vec<PluginIntegration>,
    tab: PluginTab,
    search: String,
}

impl Default for PluginBoard {
    fn default() -> Self {
        Self::mount()
    }
}

impl PluginBoard {
    pub fn mount() -> Self {
        Self {
            plugins: generate_plugins(),
            tab: PluginTab::All,
            search: String::new(),
        }
    }

    pub fn plugins(&self) -> &[PluginIntegration] {
        &self.plugins
    }

    pub fn tab(&self) -> PluginTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: PluginTab) {
        self.tab = tab;
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
    }

    /// Flips `enabled` for `id`; returns the new value, `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let plugin = self.plugins.iter_mut().find(|p| p.id == id)?;
        plugin.enabled = !plugin.enabled;
        log_view(
            "plugins",
            "toggle",
            &[("plugin", v_str(id)), ("enabled", json!(plugin.enabled))],
        );
        Some(plugin.enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.plugins.iter().filter(|p| p.enabled).count()
    }

    /// Plugins matching the active tab and the search text. The search is
    /// case-insensitive over name and description.
    pub fn filtered(&self) -> Vec<&PluginIntegration> {
        let needle = self.search.to_lowercase();
        self.plugins
            .iter()
            .filter(|p| self.tab.matches(p.category))
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(plugins: &[&'a PluginIntegration]) -> Vec<&'a str> {
        plugins.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_all_tab_without_search_shows_everything() {
        let board = PluginBoard::mount();
        assert_eq!(board.filtered().len(), board.plugins().len());
    }

    #[test]
    fn test_category_tab_filters() {
        let mut board = PluginBoard::mount();
        board.set_tab(PluginTab::Delivery);
        assert_eq!(ids(&board.filtered()), vec!["ubereats", "doordash"]);
    }

    #[test]
    fn test_other_tab_collects_staffing_and_accounting() {
        let mut board = PluginBoard::mount();
        board.set_tab(PluginTab::Other);
        assert_eq!(ids(&board.filtered()), vec!["7shifts", "quickbooks"]);
    }

    #[test]
    fn test_every_category_has_exactly_one_tab() {
        for category in PluginCategory::ALL {
            let tabs: Vec<_> = PluginTab::TABS
                .iter()
                .filter(|t| **t != PluginTab::All && t.matches(category))
                .collect();
            assert_eq!(tabs.len(), 1, "{}", category.label());
        }
        assert_eq!(PluginTab::SupplyChain.label(), "Supply Chain");
        assert_eq!(PluginTab::Other.label(), "Other");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut board = PluginBoard::mount();
        board.set_search("SQUARE");
        assert!(ids(&board.filtered()).contains(&"square"));
        board.set_search("delivery orders");
        assert_eq!(ids(&board.filtered()), vec!["doordash"]);
        board.set_tab(PluginTab::Pos);
        assert!(board.filtered().is_empty());
    }

    #[test]
    fn test_toggle_flips_enabled() {
        let mut board = PluginBoard::mount();
        let before = board.plugins().iter().find(|p| p.id == "toast").unwrap().enabled;
        assert_eq!(board.toggle("toast"), Some(!before));
        assert_eq!(board.toggle("toast"), Some(before));
        assert_eq!(board.toggle("nope"), None);
        assert_eq!(board.enabled_count(), 5);
    }
}
