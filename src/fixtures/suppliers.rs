use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::{month, short_date, FixtureSource};

/// Ingredients tracked on the pricing chart; output is capped at its length.
pub const INGREDIENT_CATALOG: [&str; 10] = [
    "High-Gluten Flour",
    "Cream Cheese",
    "Smoked Salmon",
    "Espresso Beans",
    "Oat Milk",
    "Whole Milk",
    "Sesame Seeds",
    "Red Onions",
    "Capers",
    "Malt Syrup",
];

const PRICE_POINTS: i64 = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub reliability_score: u32,
    pub on_time_delivery_rate: u32,
    pub avg_delivery_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Delivered,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierOrder {
    pub id: String,
    pub supplier_name: String,
    pub supplier_id: String,
    pub items: String,
    pub total: f64,
    pub status: OrderStatus,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientPricePoint {
    pub date: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub supplier: String,
    pub history: Vec<IngredientPricePoint>,
}

pub fn generate_suppliers(src: &mut FixtureSource, count: usize) -> Vec<Supplier> {
    (0..count)
        .map(|_| Supplier {
            id: src.uuid(),
            name: src.company_name(),
            contact: src.phone(),
            reliability_score: src.int(70, 100),
            on_time_delivery_rate: src.int(80, 100),
            avg_delivery_time: format!("{} days", src.int(1, 3)),
        })
        .collect()
}

/// Orders name an arbitrary supplier; nothing ties them to `generate_suppliers` output.
pub fn generate_supplier_orders(src: &mut FixtureSource, count: usize) -> Vec<SupplierOrder> {
    (0..count)
        .map(|_| SupplierOrder {
            id: format!("PO-{}", src.int(1000, 9999)),
            supplier_name: src.company_name(),
            supplier_id: src.uuid(),
            items: format!("{} items", src.int(3, 20)),
            total: src.amount(500.0, 5000.0),
            status: src.pick(&[
                OrderStatus::Delivered,
                OrderStatus::Delivered,
                OrderStatus::Pending,
            ]),
            date: short_date(src.past(1)),
        })
        .collect()
}

/// Monthly price series with a per-step drift; ingredients are drawn without repetition.
pub fn generate_pricing_history(src: &mut FixtureSource, count: usize) -> Vec<Ingredient> {
    let take = count.min(INGREDIENT_CATALOG.len());
    let picks = src.sample_indices(INGREDIENT_CATALOG.len(), take);
    let now = src.now();
    picks
        .into_iter()
        .map(|idx| {
            let supplier = src.company_name();
            let history = (0..PRICE_POINTS)
                .map(|i| IngredientPricePoint {
                    date: month(now - Duration::days((PRICE_POINTS - 1 - i) * 30)),
                    price: src.amount(5.0, 15.0) + i as f64 * src.float(-1.0, 2.0),
                })
                .collect();
            Ingredient {
                name: INGREDIENT_CATALOG[idx].to_string(),
                supplier,
                history,
            }
        })
        .collect()
}
