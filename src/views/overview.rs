use serde::Serialize;

use crate::fixtures::{generate_revenue_data, FixtureSource, RevenuePoint};
use crate::logging::log_fixture;

pub const REVENUE_DAYS: usize = 7;

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    revenue: Vec<RevenuePoint>,
}

impl Overview {
    pub fn mount(src: &mut FixtureSource) -> Self {
        let revenue = generate_revenue_data(src, REVENUE_DAYS);
        log_fixture("revenue", REVENUE_DAYS, revenue.len(), src.seed());
        Self { revenue }
    }

    pub fn revenue(&self) -> &[RevenuePoint] {
        &self.revenue
    }

    pub fn week_total(&self) -> u64 {
        self.revenue.iter().map(|p| p.revenue as u64).sum()
    }

    pub fn best_day(&self) -> Option<&RevenuePoint> {
        self.revenue.iter().max_by_key(|p| p.revenue)
    }
}
