use serde::Serialize;
use serde_json::json;

use crate::api::{Backend, DashboardSummary};
use crate::logging::{log_view, v_str};

/// Landing-page automation mockup driven by the live dashboard summary.
///
/// `stats` stays `None` until the first successful fetch. Failed calls are
/// logged and leave whatever was displayed before.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AutomationDemo {
    stats: Option<DashboardSummary>,
}

impl AutomationDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> Option<&DashboardSummary> {
        self.stats.as_ref()
    }

    /// Last writer wins when responses overlap.
    pub fn apply_summary(&mut self, summary: DashboardSummary) {
        self.stats = Some(summary);
    }

    /// Mount-time fetch.
    pub async fn load(&mut self, backend: &dyn Backend) {
        match backend.dashboard_summary().await {
            Ok(summary) => self.apply_summary(summary),
            Err(err) => {
                log_view("automation", "load_failed", &[("msg", v_str(&err.to_string()))])
            }
        }
    }

    /// Ingest a batch, then refresh. No guard against repeated clicks.
    pub async fn simulate_sale(&mut self, backend: &dyn Backend) {
        let ingested = match backend.ingest().await {
            Ok(resp) => resp,
            Err(err) => {
                log_view("automation", "ingest_failed", &[("msg", v_str(&err.to_string()))]);
                return;
            }
        };
        log_view(
            "automation",
            "ingested",
            &[("new_transactions", json!(ingested.new_transactions))],
        );
        match backend.dashboard_summary().await {
            Ok(summary) => self.apply_summary(summary),
            Err(err) => {
                log_view("automation", "refresh_failed", &[("msg", v_str(&err.to_string()))])
            }
        }
    }

    pub fn revenue_label(&self) -> String {
        match &self.stats {
            Some(s) => format!("${}", group_thousands(s.total_sales)),
            None => "$...".to_string(),
        }
    }

    pub fn top_item_label(&self) -> &str {
        self.top_item().unwrap_or("Calculating...")
    }

    pub fn demand_alert(&self) -> String {
        format!("High demand detected for \"{}\"", self.top_item().unwrap_or("Items"))
    }

    pub fn avg_order_value_label(&self) -> String {
        match &self.stats {
            Some(s) if s.total_transactions > 0 => {
                format!("{:.2}", s.total_sales / s.total_transactions as f64)
            }
            _ => "0.00".to_string(),
        }
    }

    pub fn transaction_count(&self) -> u64 {
        self.stats.as_ref().map(|s| s.total_transactions).unwrap_or(0)
    }

    pub fn stock_alert_badge(&self) -> String {
        match &self.stats {
            Some(s) => s.low_stock_item_count.to_string(),
            None => "-".to_string(),
        }
    }

    /// Badge turns to warning colours when anything is low.
    pub fn has_stock_alert(&self) -> bool {
        self.stats.as_ref().is_some_and(|s| s.low_stock_item_count > 0)
    }

    pub fn analysis_line(&self) -> String {
        match &self.stats {
            Some(s) => format!("{} new transactions synced.", s.new_transactions.unwrap_or(0)),
            None => "Waiting for shuffle...".to_string(),
        }
    }

    fn top_item(&self) -> Option<&str> {
        self.stats
            .as_ref()
            .and_then(|s| s.top_selling_item.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// `1234567.5` → `1,234,567.5`; at most two fractional digits, trailing
/// zeros dropped.
fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}
