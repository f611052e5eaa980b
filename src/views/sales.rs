use serde::Serialize;

use crate::fixtures::{generate_transactions, FixtureSource, Transaction, TransactionStatus};
use crate::logging::log_fixture;
use crate::popover::{Geometry, Popover};

pub const LEDGER_COUNT: usize = 20;

/// One ledger row and the customer popover hanging off its name.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerRow {
    pub transaction: Transaction,
    pub popover: Popover,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalesLedger {
    rows: Vec<LedgerRow>,
}

impl SalesLedger {
    pub fn mount(src: &mut FixtureSource) -> Self {
        let rows: Vec<LedgerRow> = generate_transactions(src, LEDGER_COUNT)
            .into_iter()
            .map(|transaction| LedgerRow { transaction, popover: Popover::new() })
            .collect();
        log_fixture("transactions", LEDGER_COUNT, rows.len(), src.seed());
        Self { rows }
    }

    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    pub fn settled_revenue(&self) -> f64 {
        let total: f64 = self
            .rows
            .iter()
            .filter(|r| r.transaction.status == TransactionStatus::Succeeded)
            .map(|r| r.transaction.amount)
            .sum();
        (total * 100.0).round() / 100.0
    }

    pub fn hover(&mut self, row: usize, geometry: &impl Geometry) {
        if let Some(r) = self.rows.get_mut(row) {
            r.popover.pointer_enter(geometry);
        }
    }

    pub fn unhover(&mut self, row: usize) {
        if let Some(r) = self.rows.get_mut(row) {
            r.popover.pointer_leave();
        }
    }

    pub fn open_popovers(&self) -> usize {
        self.rows.iter().filter(|r| r.popover.is_open()).count()
    }
}
