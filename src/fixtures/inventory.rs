use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::{month_day, round_cents, short_date, FixtureSource};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub category: &'static str,
    pub unit: &'static str,
    pub par: u32,
}

const fn entry(
    name: &'static str,
    category: &'static str,
    unit: &'static str,
    par: u32,
) -> CatalogEntry {
    CatalogEntry { name, category, unit, par }
}

/// Fixed stock list of the demo bagel shop; inventory output is capped at its length.
pub const BAGEL_SHOP_CATALOG: [CatalogEntry; 12] = [
    entry("Everything Bagels", "Bakery", "doz", 20),
    entry("Plain Bagels", "Bakery", "doz", 25),
    entry("Sesame Bagels", "Bakery", "doz", 15),
    entry("Plain Cream Cheese", "Dairy", "tub", 10),
    entry("Scallion Cream Cheese", "Dairy", "tub", 8),
    entry("Lox (Smoked Salmon)", "Meat/Fish", "lbs", 15),
    entry("Capers", "Produce", "jar", 5),
    entry("Red Onions", "Produce", "lbs", 10),
    entry("Espresso Beans", "Dry Goods", "lbs", 30),
    entry("Oat Milk", "Dairy", "carton", 24),
    entry("Whole Milk", "Dairy", "gal", 12),
    entry("To-Go Cups (12oz)", "Packaging", "slv", 5),
];

const LOW_STOCK_FRACTION: f64 = 0.4;
const MAX_STOCK_RATIO: f64 = 1.5;
const HISTORY_WEEKS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Ok,
    Low,
    Critical,
}

impl StockStatus {
    pub fn classify(stock: u32, par: u32) -> Self {
        if stock == 0 {
            StockStatus::Critical
        } else if (stock as f64) < par as f64 * LOW_STOCK_FRACTION {
            StockStatus::Low
        } else {
            StockStatus::Ok
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Ok => "ok",
            StockStatus::Low => "low",
            StockStatus::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryHistory {
    pub date: String,
    pub price: f64,
    pub quantity: u32,
    pub supplier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub in_stock: u32,
    pub unit: String,
    pub par_level: u32,
    pub status: StockStatus,
    pub last_restock: String,
    pub history: Vec<InventoryHistory>,
}

impl InventoryItem {
    /// Width of the stock bar, saturating at a full bar.
    pub fn stock_fill_pct(&self) -> f64 {
        if self.par_level == 0 {
            return if self.in_stock > 0 { 100.0 } else { 0.0 };
        }
        (self.in_stock as f64 / self.par_level as f64 * 100.0).min(100.0)
    }
}

pub fn generate_inventory(src: &mut FixtureSource, count: usize) -> Vec<InventoryItem> {
    BAGEL_SHOP_CATALOG
        .iter()
        .take(count)
        .map(|item| {
            let ratio = src.float(0.0, MAX_STOCK_RATIO);
            let stock = (item.par as f64 * ratio).floor() as u32;
            let base_price = src.amount(10.0, 50.0);
            let now = src.now();

            let history = (0..HISTORY_WEEKS)
                .map(|i| {
                    let deviation = src.float(-2.5, 2.5);
                    InventoryHistory {
                        date: month_day(now - Duration::weeks(HISTORY_WEEKS - i)),
                        price: round_cents((base_price + deviation).max(0.0)),
                        quantity: src.int(10, 100),
                        supplier: src.company_name(),
                    }
                })
                .collect();

            InventoryItem {
                id: src.uuid(),
                name: item.name.to_string(),
                category: item.category.to_string(),
                in_stock: stock,
                unit: item.unit.to_string(),
                par_level: item.par,
                status: StockStatus::classify(stock, item.par),
                last_restock: short_date(src.recent(5)),
                history,
            }
        })
        .collect()
}
