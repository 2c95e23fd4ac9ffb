//! Shared types for the Comanda back-office
//!
//! Domain models, the order-line engine, and the request/response
//! structures used when talking to the remote restaurant API.

pub mod client;
pub mod models;
pub mod order;
pub mod request;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Order engine re-exports (for convenient access)
pub use order::{OrderError, OrderTotals, calculate_order_totals};

// Request/response re-exports
pub use request::OrderFilters;
pub use response::{ApiResponse, PagedResponse, Pagination};
