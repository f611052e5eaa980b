pub mod api;
pub mod fixtures;
pub mod logging;
pub mod popover;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;
