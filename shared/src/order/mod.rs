//! Order domain
//!
//! Order models plus the pure line-item engine. The remote order service
//! owns persisted totals; everything here recomputes them from the line
//! items for optimistic display, without I/O or hidden state.

pub mod mutations;
pub mod totals;
pub mod types;

pub use mutations::{
    add_item_to_order, decrease_item_quantity, increase_item_quantity,
    remove_item_from_order,
};
pub use totals::{
    OrderTotals, additional_charges_total, calculate_order_totals, discount_amount,
    subtotal,
};
pub use types::{
    AdditionalCharge, AdditionalChargeRequest, Discount, DiscountRequest,
    DiscountType, FoodRef, FoodSummary, Order, OrderError, OrderItem,
    OrderItemsUpdate, OrderStatus,
};
