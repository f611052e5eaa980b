use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use super::*;

/// Every fixture family at its dashboard size, in mount order.
pub fn snapshot(src: &mut FixtureSource) -> Value {
    json!({
        "seed": src.seed(),
        "now": src.now().to_rfc3339(),
        "revenue": generate_revenue_data(src, 7),
        "transactions": generate_transactions(src, 20),
        "inventory": generate_inventory(src, BAGEL_SHOP_CATALOG.len()),
        "suppliers": generate_suppliers(src, 4),
        "supplier_orders": generate_supplier_orders(src, 10),
        "pricing_history": generate_pricing_history(src, 3),
        "daily_briefing": generate_daily_briefing(),
        "smart_pars": generate_smart_pars(),
        "menu_matrix": generate_menu_matrix(),
        "plugins": generate_plugins(),
    })
}

/// SHA-256 over the compact JSON encoding, hex encoded.
pub fn fingerprint(value: &Value) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.to_string().as_bytes());
    hex::encode(hasher.finalize())
}
