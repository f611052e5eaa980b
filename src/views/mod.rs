//! Per-page state controllers. Each dashboard page generates its fixtures
//! once on mount and owns them until it is dropped.

pub mod automation;
pub mod chat;
pub mod insights;
pub mod inventory;
pub mod overview;
pub mod plugins;
pub mod sales;
pub mod suppliers;

pub use automation::AutomationDemo;
pub use chat::{ChatDemo, ChatMessage, Role, FALLBACK_REPLY};
pub use insights::{InsightsPage, MenuMatrix};
pub use inventory::InventoryBoard;
pub use overview::Overview;
pub use plugins::{PluginBoard, PluginTab};
pub use sales::{LedgerRow, SalesLedger};
pub use suppliers::SupplierPanel;
