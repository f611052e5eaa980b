use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{month_day, short_date, FixtureSource};

const MENU_ITEMS: &[&str] = &[
    "Smoked Salmon Bagel",
    "Cream Cheese Bagel",
    "Large Latte",
    "Cappuccino",
    "Dozen Bagels Mixed",
    "Iced Coffee",
    "Egg & Cheese Bagel",
];

const HISTORY_ITEMS: &[&str] = &["Coffee", "Bagel", "Sandwich", "Pastry"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Succeeded,
    Processing,
    Failed,
}

const STATUS_WEIGHTS: &[TransactionStatus] = &[
    TransactionStatus::Succeeded,
    TransactionStatus::Succeeded,
    TransactionStatus::Succeeded,
    TransactionStatus::Processing,
    TransactionStatus::Failed,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    /// Strict thresholds: exactly 200, 500 or 1000 stays in the lower tier.
    pub fn from_spend(total_spend: f64) -> Self {
        if total_spend > 1000.0 {
            LoyaltyTier::Platinum
        } else if total_spend > 500.0 {
            LoyaltyTier::Gold
        } else if total_spend > 200.0 {
            LoyaltyTier::Silver
        } else {
            LoyaltyTier::Bronze
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoyaltyTier::Bronze => "Bronze",
            LoyaltyTier::Silver => "Silver",
            LoyaltyTier::Gold => "Gold",
            LoyaltyTier::Platinum => "Platinum",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTransaction {
    pub id: String,
    pub date: String,
    pub amount: f64,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub age: u32,
    pub gender: Gender,
    pub email: String,
    pub total_spend: f64,
    pub visit_count: u32,
    pub loyalty_tier: LoyaltyTier,
    pub recent_transactions: Vec<RecentTransaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub customer_name: String,
    pub amount: f64,
    pub status: TransactionStatus,
    pub date: DateTime<Utc>,
    pub items: Vec<String>,
    pub customer_details: CustomerDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: String,
    pub revenue: u32,
}

pub fn generate_transactions(src: &mut FixtureSource, count: usize) -> Vec<Transaction> {
    (0..count)
        .map(|_| Transaction {
            id: src.uuid(),
            customer_name: src.full_name(),
            amount: src.amount(5.0, 45.0),
            status: src.pick(STATUS_WEIGHTS),
            date: src.recent(2),
            items: vec![src.pick(MENU_ITEMS).to_string()],
            customer_details: customer_details(src),
        })
        .collect()
}

fn customer_details(src: &mut FixtureSource) -> CustomerDetails {
    let age = src.int(18, 65);
    let gender = src.pick(&[Gender::Male, Gender::Female, Gender::Other]);
    let email = src.email();
    let total_spend = src.amount(20.0, 1500.0);
    let visit_count = src.int(1, 60);
    let recent_transactions = (0..3)
        .map(|_| RecentTransaction {
            id: src.uuid(),
            date: short_date(src.past(1)),
            amount: src.amount(5.0, 50.0),
            items: vec![src.pick(HISTORY_ITEMS).to_string()],
        })
        .collect();
    CustomerDetails {
        age,
        gender,
        email,
        total_spend,
        visit_count,
        loyalty_tier: LoyaltyTier::from_spend(total_spend),
        recent_transactions,
    }
}

/// One point per day, oldest first, ending on the source's clock day.
pub fn generate_revenue_data(src: &mut FixtureSource, days: usize) -> Vec<RevenuePoint> {
    let today = src.now();
    (0..days)
        .map(|i| {
            let back = (days - 1 - i) as i64;
            RevenuePoint {
                date: month_day(today - Duration::days(back)),
                revenue: src.int(1200, 3500),
            }
        })
        .collect()
}
