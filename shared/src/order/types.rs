//! Shared types for orders

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::EntityRef;

// ============================================================================
// Order Status
// ============================================================================

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Paid,
    Canceled,
}

impl OrderStatus {
    /// Wire name used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Paid => "paid",
            OrderStatus::Canceled => "canceled",
        }
    }
}

// ============================================================================
// Line Item Types
// ============================================================================

/// Reference to the menu item behind a line item
///
/// List endpoints return the bare food id; detail endpoints populate the
/// reference with display fields. Exactly one shape is present at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FoodRef {
    /// Bare string id
    Id(String),
    /// Populated reference
    Expanded(FoodSummary),
}

/// Populated food reference with display fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Current menu price, for display only
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl FoodRef {
    /// Resolve the canonical food id regardless of shape
    pub fn id(&self) -> &str {
        match self {
            FoodRef::Id(id) => id,
            FoodRef::Expanded(food) => &food.id,
        }
    }
}

impl From<&str> for FoodRef {
    fn from(id: &str) -> Self {
        FoodRef::Id(id.to_string())
    }
}

/// One line of an order: a menu item and its ordered quantity
///
/// The collection invariant is one line per resolved food id, with
/// `quantity >= 1` for every line that remains in the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub food_id: FoodRef,
    pub quantity: i32,
    /// Unit price captured when the line was created; later menu price
    /// changes do not touch it
    pub price_at_order: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_notes: Option<String>,
}

impl OrderItem {
    /// New line for a bare food id
    pub fn new(food_id: impl Into<String>, quantity: i32, price_at_order: f64) -> Self {
        Self {
            id: None,
            food_id: FoodRef::Id(food_id.into()),
            quantity,
            price_at_order,
            item_notes: None,
        }
    }

    /// Attach a note to the line
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.item_notes = Some(notes.into());
        self
    }
}

// ============================================================================
// Discount and Additional Charges
// ============================================================================

/// Discount type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// Order-level discount, at most one per order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    /// Percentage 0-100, or a fixed amount in currency unit
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Who granted the discount; not used in computation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_by: Option<EntityRef>,
}

impl Discount {
    /// Percentage discount (0-100)
    pub fn percentage(value: f64) -> Self {
        Self {
            discount_type: DiscountType::Percentage,
            value,
            reason: None,
            applied_by: None,
        }
    }

    /// Fixed-amount discount
    pub fn fixed(value: f64) -> Self {
        Self {
            discount_type: DiscountType::Fixed,
            value,
            reason: None,
            applied_by: None,
        }
    }
}

/// Surcharge outside the menu-item lines (service fee, corkage, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalCharge {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// May be negative; only the final total is floored at zero
    pub amount: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
}

impl AdditionalCharge {
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            id: None,
            amount,
            description: description.into(),
            added_by: None,
            added_at: None,
        }
    }
}

// ============================================================================
// Order Aggregate
// ============================================================================

/// Order entity as persisted by the remote order service
///
/// The totals quartet is server-owned ground truth; clients recompute it
/// locally via [`calculate_order_totals`](super::calculate_order_totals)
/// for optimistic display and must treat the service's response as
/// authoritative after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiter_id: Option<EntityRef>,
    pub items: Vec<OrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub additional_charges: Vec<AdditionalCharge>,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub additional_charges_total: f64,
    pub total_price: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Restaurant number
    pub restaurant: String,
    pub order_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

// ============================================================================
// Mutation Payloads
// ============================================================================

/// Replace-items payload for the orders endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemsUpdate {
    pub items: Vec<OrderItem>,
}

/// Apply-discount payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountRequest {
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Add-additional-charge payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalChargeRequest {
    pub amount: f64,
    pub description: String,
}

// ============================================================================
// Errors
// ============================================================================

/// Order engine error
///
/// The line operations reject non-positive magnitudes instead of letting
/// a negative amount silently invert the direction of a mutation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Quantity for an added line must be at least 1
    #[error("invalid quantity: {0} (must be positive)")]
    InvalidQuantity(i32),
    /// Increment/decrement amount must be at least 1
    #[error("invalid amount: {0} (must be positive)")]
    InvalidAmount(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_ref_resolves_both_shapes() {
        let bare = FoodRef::Id("f-1".to_string());
        assert_eq!(bare.id(), "f-1");

        let expanded = FoodRef::Expanded(FoodSummary {
            id: "f-1".to_string(),
            name: "Pizza".to_string(),
            price: 200.0,
            description: None,
            image_url: None,
        });
        assert_eq!(expanded.id(), "f-1");
    }

    #[test]
    fn test_order_item_round_trips_wire_format() {
        let json = r#"{
            "foodId": {"_id": "f-1", "name": "Pizza", "price": 200.0},
            "quantity": 2,
            "priceAtOrder": 180.0,
            "itemNotes": "no onions"
        }"#;
        let item: OrderItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.food_id.id(), "f-1");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price_at_order, 180.0);

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["priceAtOrder"], 180.0);
        assert_eq!(back["foodId"]["_id"], "f-1");
    }

    #[test]
    fn test_discount_wire_format_uses_type_field() {
        let discount = Discount::percentage(20.0);
        let json = serde_json::to_value(&discount).unwrap();
        assert_eq!(json["type"], "percentage");
        assert_eq!(json["value"], 20.0);

        let parsed: Discount =
            serde_json::from_str(r#"{"type":"fixed","value":50.0}"#).unwrap();
        assert_eq!(parsed.discount_type, DiscountType::Fixed);
    }

    #[test]
    fn test_order_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            r#""preparing""#
        );
        assert_eq!(OrderStatus::Canceled.as_str(), "canceled");
    }
}
