use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod client;

pub use client::{ApiClient, DEFAULT_BASE_URL};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestResponse {
    pub status: String,
    pub new_transactions: u64,
}

/// Fields the backend omits come back as zero/`None` rather than failing the call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    pub total_sales: f64,
    pub total_transactions: u64,
    pub low_stock_item_count: u64,
    pub top_selling_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_transactions: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// The three backend operations the dashboard relies on. Any failure,
/// transport or HTTP status, surfaces as one generic error per operation.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn ingest(&self) -> Result<IngestResponse>;
    async fn dashboard_summary(&self) -> Result<DashboardSummary>;
    async fn chat(&self, message: &str) -> Result<ChatResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_tolerates_missing_fields() {
        let summary: DashboardSummary = serde_json::from_str(r#"{"total_sales": 12.5}"#).unwrap();
        assert_eq!(summary.total_sales, 12.5);
        assert_eq!(summary.total_transactions, 0);
        assert_eq!(summary.top_selling_item, None);
        assert_eq!(summary.new_transactions, None);
    }

    #[test]
    fn test_summary_reads_full_payload() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"total_sales": 240.0, "total_transactions": 20, "low_stock_item_count": 3,
                "top_selling_item": "Classic Burger", "new_transactions": 20}"#,
        )
        .unwrap();
        assert_eq!(summary.low_stock_item_count, 3);
        assert_eq!(summary.top_selling_item.as_deref(), Some("Classic Burger"));
        assert_eq!(summary.new_transactions, Some(20));
    }

    #[test]
    fn test_chat_request_wire_shape() {
        let body = serde_json::to_value(ChatRequest { message: "hi".into() }).unwrap();
        assert_eq!(body, serde_json::json!({"message": "hi"}));
    }
}
