//! Comanda Client - HTTP client for the restaurant back-office API
//!
//! Typed service calls for orders, menu, staff and saloons, plus
//! fetch-through caches with timestamp-based invalidation.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod store;

pub use cache::{CacheEntry, CacheMap, DEFAULT_CACHE_TIMEOUT_MS};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use store::{CategoryStore, FoodStore, TableStore};

// Re-export shared types for convenience
pub use shared::client::{ApiResponse, LoginRequest, LoginResponse, UserInfo};
