//! Fetch-through stores
//!
//! Each store fronts one API resource with a timestamp-invalidated cache:
//! reads consult the cache first (unless forced), writes go straight to
//! the API and invalidate what they touched.

mod category_store;
mod food_store;
mod table_store;

pub use category_store::CategoryStore;
pub use food_store::FoodStore;
pub use table_store::TableStore;
