//! Domain models
//!
//! Entity structs plus create/update payloads, one module per resource.

pub mod category;
pub mod food;
pub mod saloon;
pub mod staff;
pub mod statistics;

pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use food::{Food, FoodCreate, FoodUpdate};
pub use saloon::{Saloon, SaloonTable, TableCreate, TableUpdate};
pub use staff::{Waiter, WaiterCreate, WaiterUpdate};
pub use statistics::OrderStats;
