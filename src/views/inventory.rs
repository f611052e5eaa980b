use serde::Serialize;

use crate::fixtures::{generate_inventory, FixtureSource, InventoryItem, StockStatus};
use crate::logging::{log_fixture, log_view, v_str};

pub const INVENTORY_COUNT: usize = 12;

#[derive(Debug, Clone, Serialize)]
pub struct InventoryBoard {
    items: Vec<InventoryItem>,
    selected: Option<usize>,
}

impl InventoryBoard {
    pub fn mount(src: &mut FixtureSource) -> Self {
        let items = generate_inventory(src, INVENTORY_COUNT);
        log_fixture("inventory", INVENTORY_COUNT, items.len(), src.seed());
        Self { items, selected: None }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn critical_count(&self) -> usize {
        self.items.iter().filter(|i| i.status == StockStatus::Critical).count()
    }

    pub fn low_count(&self) -> usize {
        self.items.iter().filter(|i| i.status == StockStatus::Low).count()
    }

    /// Opens the detail drawer for `id`. Returns false for an unknown id.
    pub fn select(&mut self, id: &str) -> bool {
        match self.items.iter().position(|i| i.id == id) {
            Some(idx) => {
                self.selected = Some(idx);
                log_view("inventory", "select", &[("item", v_str(&self.items[idx].name))]);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&InventoryItem> {
        self.selected.map(|idx| &self.items[idx])
    }
}
