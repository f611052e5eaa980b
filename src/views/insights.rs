use serde::Serialize;
use serde_json::json;

use crate::fixtures::{
    generate_daily_briefing, generate_menu_matrix, generate_smart_pars, DailyBriefing, MenuPairing,
    SmartParItem,
};
use crate::logging::log_view;

/// Menu pairings with at most one row expanded.
#[derive(Debug, Clone, Serialize)]
pub struct MenuMatrix {
    pairings: Vec<MenuPairing>,
    expanded: Option<usize>,
}

impl MenuMatrix {
    pub fn new(pairings: Vec<MenuPairing>) -> Self {
        Self { pairings, expanded: None }
    }

    pub fn pairings(&self) -> &[MenuPairing] {
        &self.pairings
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Expands row `idx`, collapsing whichever was open; toggling the open
    /// row collapses it. Out-of-range indices are ignored.
    pub fn toggle(&mut self, idx: usize) {
        if idx >= self.pairings.len() {
            return;
        }
        self.expanded = if self.expanded == Some(idx) { None } else { Some(idx) };
        log_view(
            "insights",
            "matrix_toggle",
            &[("row", json!(idx)), ("expanded", json!(self.expanded.is_some()))],
        );
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightsPage {
    pub briefing: DailyBriefing,
    pub smart_pars: Vec<SmartParItem>,
    pub matrix: MenuMatrix,
}

impl Default for InsightsPage {
    fn default() -> Self {
        Self::mount()
    }
}

impl InsightsPage {
    pub fn mount() -> Self {
        Self {
            briefing: generate_daily_briefing(),
            smart_pars: generate_smart_pars(),
            matrix: MenuMatrix::new(generate_menu_matrix()),
        }
    }

    /// Units saved per week if every recommendation is adopted.
    pub fn total_waste_savings(&self) -> u32 {
        self.smart_pars.iter().map(|p| p.waste_savings).sum()
    }
}
