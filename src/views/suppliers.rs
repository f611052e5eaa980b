use serde::Serialize;

use crate::fixtures::{
    generate_pricing_history, generate_supplier_orders, generate_suppliers, FixtureSource,
    Ingredient, OrderStatus, Supplier, SupplierOrder,
};
use crate::logging::{log_fixture, log_view, v_str};

pub const SUPPLIER_COUNT: usize = 4;
pub const ORDER_COUNT: usize = 10;
pub const PRICE_TRACK_COUNT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct SupplierPanel {
    suppliers: Vec<Supplier>,
    orders: Vec<SupplierOrder>,
    pricing: Vec<Ingredient>,
    selected: Option<String>,
}

impl SupplierPanel {
    pub fn mount(src: &mut FixtureSource) -> Self {
        let suppliers = generate_suppliers(src, SUPPLIER_COUNT);
        log_fixture("suppliers", SUPPLIER_COUNT, suppliers.len(), src.seed());
        let orders = generate_supplier_orders(src, ORDER_COUNT);
        log_fixture("supplier_orders", ORDER_COUNT, orders.len(), src.seed());
        let pricing = generate_pricing_history(src, PRICE_TRACK_COUNT);
        log_fixture("pricing_history", PRICE_TRACK_COUNT, pricing.len(), src.seed());
        Self { suppliers, orders, pricing, selected: None }
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn orders(&self) -> &[SupplierOrder] {
        &self.orders
    }

    pub fn pricing(&self) -> &[Ingredient] {
        &self.pricing
    }

    pub fn pending_orders(&self) -> usize {
        self.orders.iter().filter(|o| o.status == OrderStatus::Pending).count()
    }

    pub fn select(&mut self, id: &str) -> bool {
        let Some(supplier) = self.suppliers.iter().find(|s| s.id == id) else {
            return false;
        };
        log_view("suppliers", "select", &[("supplier", v_str(&supplier.name))]);
        self.selected = Some(supplier.id.clone());
        true
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Supplier> {
        let id = self.selected.as_deref()?;
        self.suppliers.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fixed_clock;

    #[test]
    fn test_mount_sizes() {
        let mut src = FixtureSource::with_clock(5, fixed_clock());
        let panel = SupplierPanel::mount(&mut src);
        assert_eq!(panel.suppliers().len(), SUPPLIER_COUNT);
        assert_eq!(panel.orders().len(), ORDER_COUNT);
        assert_eq!(panel.pricing().len(), PRICE_TRACK_COUNT);
        assert!(panel.pending_orders() <= ORDER_COUNT);
    }

    #[test]
    fn test_select_then_clear() {
        let mut src = FixtureSource::with_clock(5, fixed_clock());
        let mut panel = SupplierPanel::mount(&mut src);
        let id = panel.suppliers()[1].id.clone();
        assert!(panel.select(&id));
        assert_eq!(panel.selected().map(|s| s.id.clone()), Some(id));
        panel.clear();
        assert!(panel.selected().is_none());
        assert!(!panel.select("nope"));
    }
}
