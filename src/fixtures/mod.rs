//! Synthetic demo data for the dashboard.
//!
//! Every generator takes an explicit [`FixtureSource`]; two sources built
//! from the same seed and clock yield identical records, which is what the
//! tests and the `fixture_dump` binary rely on.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

pub mod dump;
pub mod insights;
pub mod inventory;
pub mod sales;
pub mod suppliers;

pub use insights::{
    generate_daily_briefing, generate_menu_matrix, generate_plugins, generate_smart_pars,
    DailyBriefing, Demographics, MenuPairing, PluginCategory, PluginIntegration, PluginStatus,
    Share, SmartParItem,
};
pub use inventory::{
    generate_inventory, CatalogEntry, InventoryHistory, InventoryItem, StockStatus,
    BAGEL_SHOP_CATALOG,
};
pub use sales::{
    generate_revenue_data, generate_transactions, CustomerDetails, Gender, LoyaltyTier,
    RecentTransaction, RevenuePoint, Transaction, TransactionStatus,
};
pub use suppliers::{
    generate_pricing_history, generate_supplier_orders, generate_suppliers, Ingredient,
    IngredientPricePoint, OrderStatus, Supplier, SupplierOrder, INGREDIENT_CATALOG,
};

const FIRST_NAMES: &[&str] = &[
    "Ava", "Liam", "Maya", "Noah", "Priya", "Diego", "Hana", "Omar", "Chloe", "Mateo", "Zoe",
    "Ethan", "Amara", "Lucas", "Ines", "Kenji", "Sofia", "Caleb", "Leila", "Jonah",
];

const LAST_NAMES: &[&str] = &[
    "Abernathy", "Brooks", "Castillo", "Delgado", "Eriksen", "Fitzgerald", "Goldberg", "Hayes",
    "Ibarra", "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Patel",
    "Quinn", "Rosen", "Schmidt", "Tran",
];

const COMPANY_SUFFIXES: &[&str] = &["LLC", "Inc", "Group", "and Sons", "Provisions", "Supply Co"];

const EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

/// Seeded random source plus the clock that date fields are measured from.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    seed: u64,
    rng: StdRng,
    now: DateTime<Utc>,
}

impl FixtureSource {
    pub fn new(seed: u64) -> Self {
        Self::with_clock(seed, Utc::now())
    }

    pub fn with_clock(seed: u64, now: DateTime<Utc>) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            now,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub(crate) fn uuid(&mut self) -> String {
        let bytes: [u8; 16] = self.rng.gen();
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string()
    }

    /// Inclusive integer range.
    pub(crate) fn int(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..=max)
    }

    /// Half-open float range.
    pub(crate) fn float(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(min..max)
    }

    /// Money amount rounded to cents.
    pub(crate) fn amount(&mut self, min: f64, max: f64) -> f64 {
        round_cents(self.float(min, max))
    }

    /// `items` must be non-empty; all call sites pass static tables.
    pub(crate) fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())]
    }

    /// `amount` distinct indices below `len`, in draw order.
    pub(crate) fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }

    pub(crate) fn full_name(&mut self) -> String {
        format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES))
    }

    pub(crate) fn company_name(&mut self) -> String {
        match self.int(0, 2) {
            0 => format!("{} {}", self.pick(LAST_NAMES), self.pick(COMPANY_SUFFIXES)),
            1 => format!("{} - {}", self.pick(LAST_NAMES), self.pick(LAST_NAMES)),
            _ => format!(
                "{}, {} and {}",
                self.pick(LAST_NAMES),
                self.pick(LAST_NAMES),
                self.pick(LAST_NAMES)
            ),
        }
    }

    pub(crate) fn email(&mut self) -> String {
        let first = self.pick(FIRST_NAMES).to_lowercase();
        let last = self.pick(LAST_NAMES).to_lowercase();
        let n = self.int(1, 99);
        format!("{}.{}{}@{}", first, last, n, self.pick(EMAIL_DOMAINS))
    }

    pub(crate) fn phone(&mut self) -> String {
        format!(
            "({}) {}-{:04}",
            self.int(201, 989),
            self.int(200, 999),
            self.int(0, 9999)
        )
    }

    /// A moment within the last `days` days.
    pub(crate) fn recent(&mut self, days: i64) -> DateTime<Utc> {
        let secs = self.rng.gen_range(0..(days * 86_400).max(1));
        self.now - Duration::seconds(secs)
    }

    /// A moment within the last `years` years.
    pub(crate) fn past(&mut self, years: i64) -> DateTime<Utc> {
        self.recent(years * 365)
    }
}

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `10/18/2026`
pub(crate) fn short_date(at: DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

/// `Oct 18`
pub(crate) fn month_day(at: DateTime<Utc>) -> String {
    at.format("%b %-d").to_string()
}

/// `Oct`
pub(crate) fn month(at: DateTime<Utc>) -> String {
    at.format("%b").to_string()
}

#[cfg(test)]
pub(crate) fn fixed_clock() -> DateTime<Utc> {
    use chrono::TimeZone;
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
}
