//! Hand-authored insight cards and the integration catalog.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBriefing {
    pub greeting: String,
    pub kpi_summary: String,
    pub alerts: Vec<String>,
    pub action_item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartParItem {
    pub id: String,
    pub name: String,
    pub current_par: u32,
    pub recommended_par: u32,
    pub waste_savings: u32,
    pub reason: String,
}

impl SmartParItem {
    pub fn is_reduction(&self) -> bool {
        self.recommended_par < self.current_par
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub age_groups: Vec<Share>,
    pub gender: Vec<Share>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuPairing {
    pub item_a: String,
    pub item_b: String,
    pub frequency: u32,
    pub insight: String,
    pub demographics: Demographics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluginCategory {
    #[serde(rename = "POS")]
    Pos,
    #[serde(rename = "Supply Chain")]
    SupplyChain,
    Delivery,
    Staffing,
    Accounting,
}

impl PluginCategory {
    pub const ALL: [PluginCategory; 5] = [
        PluginCategory::Pos,
        PluginCategory::SupplyChain,
        PluginCategory::Delivery,
        PluginCategory::Staffing,
        PluginCategory::Accounting,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PluginCategory::Pos => "POS",
            PluginCategory::SupplyChain => "Supply Chain",
            PluginCategory::Delivery => "Delivery",
            PluginCategory::Staffing => "Staffing",
            PluginCategory::Accounting => "Accounting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginStatus {
    Connected,
    Disconnected,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginIntegration {
    pub id: String,
    pub name: String,
    pub category: PluginCategory,
    pub description: String,
    pub logo: String,
    pub status: PluginStatus,
    pub enabled: bool,
}

impl PluginIntegration {
    pub fn sync_label(&self) -> &'static str {
        match self.status {
            PluginStatus::Connected => "Synced: 2m ago",
            _ => "Not configured",
        }
    }
}

pub fn generate_daily_briefing() -> DailyBriefing {
    DailyBriefing {
        greeting: "Good morning, Chef!".to_string(),
        kpi_summary: "Sales are trending up 12% compared to last week, \
                      driven by a surge in morning coffee orders."
            .to_string(),
        alerts: vec![
            "Run rate for **Espresso Beans** is high. Predicted stock-out in 2 days.".to_string(),
            "Supplier **FarmFresh** is showing a delay risk for Friday's delivery.".to_string(),
        ],
        action_item: "Consider increasing the par level for *Everything Bagels* \
                      for the upcoming weekend rush."
            .to_string(),
    }
}

fn smart_par(
    id: &str,
    name: &str,
    current: u32,
    recommended: u32,
    savings: u32,
    reason: &str,
) -> SmartParItem {
    SmartParItem {
        id: id.to_string(),
        name: name.to_string(),
        current_par: current,
        recommended_par: recommended,
        waste_savings: savings,
        reason: reason.to_string(),
    }
}

pub fn generate_smart_pars() -> Vec<SmartParItem> {
    vec![
        smart_par("1", "Plain Bagels", 25, 20, 45, "Consistent overflow on Mondays"),
        smart_par("2", "Oat Milk", 24, 32, 0, "High demand trend +15%"),
        smart_par("3", "Lox (Smoked Salmon)", 15, 12, 120, "Spoilage detected last 2 weeks"),
        smart_par("4", "To-Go Cups (12oz)", 5, 8, 0, "Running out by 2 PM daily"),
    ]
}

fn shares(pairs: &[(&str, u32)]) -> Vec<Share> {
    pairs
        .iter()
        .map(|(label, value)| Share { label: label.to_string(), value: *value })
        .collect()
}

fn pairing(
    item_a: &str,
    item_b: &str,
    frequency: u32,
    insight: &str,
    ages: [u32; 4],
    gender: [u32; 3],
) -> MenuPairing {
    MenuPairing {
        item_a: item_a.to_string(),
        item_b: item_b.to_string(),
        frequency,
        insight: insight.to_string(),
        demographics: Demographics {
            age_groups: shares(&[
                ("18-24", ages[0]),
                ("25-34", ages[1]),
                ("35-44", ages[2]),
                ("45+", ages[3]),
            ]),
            gender: shares(&[("Male", gender[0]), ("Female", gender[1]), ("Other", gender[2])]),
        },
    }
}

pub fn generate_menu_matrix() -> Vec<MenuPairing> {
    vec![
        pairing(
            "Lox Bagel",
            "Large Latte",
            68,
            "Strong breakfast combo",
            [15, 45, 30, 10],
            [45, 52, 3],
        ),
        pairing(
            "Plain Bagel",
            "Cream Cheese",
            92,
            "Essential pairing",
            [30, 30, 20, 20],
            [48, 48, 4],
        ),
        pairing(
            "Everything Bagel",
            "Iced Coffee",
            45,
            "Growing lunch trend",
            [60, 30, 8, 2],
            [40, 58, 2],
        ),
        pairing("Capers", "Lox Bagel", 30, "Upsell opportunity", [5, 25, 40, 30], [55, 42, 3]),
    ]
}

fn plugin(
    id: &str,
    name: &str,
    category: PluginCategory,
    description: &str,
    domain: &str,
    status: PluginStatus,
    enabled: bool,
) -> PluginIntegration {
    PluginIntegration {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: description.to_string(),
        logo: format!("https://logo.clearbit.com/{}", domain),
        status,
        enabled,
    }
}

pub fn generate_plugins() -> Vec<PluginIntegration> {
    use PluginCategory::*;
    use PluginStatus::*;
    vec![
        plugin(
            "square",
            "Square",
            Pos,
            "Sync orders, payments, and catalog data in real-time.",
            "squareup.com",
            Connected,
            true,
        ),
        plugin(
            "toast",
            "Toast",
            Pos,
            "Unified restaurant management platform integration.",
            "toasttab.com",
            Disconnected,
            false,
        ),
        plugin(
            "clover",
            "Clover",
            Pos,
            "Flexible POS system for payments and order tracking.",
            "clover.com",
            Disconnected,
            false,
        ),
        plugin(
            "sysco",
            "Sysco",
            SupplyChain,
            "Automated ordering and inventory sync with major distributor.",
            "sysco.com",
            Connected,
            true,
        ),
        plugin(
            "marketman",
            "MarketMan",
            SupplyChain,
            "Inventory management and food cost control integration.",
            "marketman.com",
            Pending,
            true,
        ),
        plugin(
            "7shifts",
            "7shifts",
            Staffing,
            "Sync schedule data for labor cost estimation.",
            "7shifts.com",
            Connected,
            true,
        ),
        plugin(
            "quickbooks",
            "QuickBooks",
            Accounting,
            "Automated daily sales entries and invoice syncing.",
            "quickbooks.intuit.com",
            Disconnected,
            false,
        ),
        plugin(
            "ubereats",
            "UberEats",
            Delivery,
            "Direct order injection and menu syncing.",
            "ubereats.com",
            Connected,
            true,
        ),
        plugin(
            "doordash",
            "DoorDash",
            Delivery,
            "Manage delivery orders and analyze performance.",
            "doordash.com",
            Disconnected,
            false,
        ),
        plugin(
            "lightspeed",
            "Lightspeed",
            Pos,
            "Cloud-based commerce platform for restaurants.",
            "lightspeedhq.com",
            Disconnected,
            false,
        ),
    ]
}
