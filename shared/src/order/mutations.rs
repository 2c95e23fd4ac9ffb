//! Line-item mutation operations
//!
//! Pure helpers over an order's item list. Every function takes the
//! current items read-only and returns a fresh list; the caller persists
//! the result through the order service afterwards.

use super::types::{FoodRef, OrderError, OrderItem};

/// Add a line, or merge into the existing line for the same food
///
/// When a line with the same resolved food id already exists its quantity
/// grows by `quantity` and its note is replaced only when a non-empty note
/// is supplied; the line keeps its position. Otherwise a new line is
/// appended. The result never holds two lines for one food id.
pub fn add_item_to_order(
    items: &[OrderItem],
    food_id: &str,
    quantity: i32,
    price_at_order: f64,
    item_notes: Option<&str>,
) -> Result<Vec<OrderItem>, OrderError> {
    if quantity <= 0 {
        return Err(OrderError::InvalidQuantity(quantity));
    }

    let mut next = items.to_vec();
    match next.iter_mut().find(|item| item.food_id.id() == food_id) {
        Some(existing) => {
            existing.quantity += quantity;
            if let Some(notes) = item_notes.filter(|notes| !notes.is_empty()) {
                existing.item_notes = Some(notes.to_string());
            }
        }
        None => next.push(OrderItem {
            id: None,
            food_id: FoodRef::Id(food_id.to_string()),
            quantity,
            price_at_order,
            item_notes: item_notes.map(str::to_string),
        }),
    }
    Ok(next)
}

/// Increase the quantity of every line matching `food_id` by `amount`
///
/// Lines for other foods pass through unchanged; an unknown id is a no-op.
pub fn increase_item_quantity(
    items: &[OrderItem],
    food_id: &str,
    amount: i32,
) -> Result<Vec<OrderItem>, OrderError> {
    if amount <= 0 {
        return Err(OrderError::InvalidAmount(amount));
    }

    Ok(items
        .iter()
        .map(|item| {
            if item.food_id.id() == food_id {
                let mut updated = item.clone();
                updated.quantity += amount;
                updated
            } else {
                item.clone()
            }
        })
        .collect())
}

/// Decrease the quantity of every line matching `food_id` by `amount`
///
/// Quantity is floored at 1: decrementing never removes a line, removal
/// goes through [`remove_item_from_order`]. An unknown id is a no-op.
pub fn decrease_item_quantity(
    items: &[OrderItem],
    food_id: &str,
    amount: i32,
) -> Result<Vec<OrderItem>, OrderError> {
    if amount <= 0 {
        return Err(OrderError::InvalidAmount(amount));
    }

    Ok(items
        .iter()
        .map(|item| {
            if item.food_id.id() == food_id {
                let mut updated = item.clone();
                updated.quantity = (item.quantity - amount).max(1);
                updated
            } else {
                item.clone()
            }
        })
        // The clamp above keeps matched lines at quantity >= 1; this pass
        // additionally drops any non-positive rows supplied by the caller.
        .filter(|item| item.quantity > 0)
        .collect())
}

/// Drop every line matching `food_id`
pub fn remove_item_from_order(items: &[OrderItem], food_id: &str) -> Vec<OrderItem> {
    items
        .iter()
        .filter(|item| item.food_id.id() != food_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::types::{FoodSummary, OrderItem};

    fn line(food_id: &str, quantity: i32, price: f64) -> OrderItem {
        OrderItem::new(food_id, quantity, price)
    }

    fn sample_items() -> Vec<OrderItem> {
        vec![
            line("tea", 2, 20.0),
            line("burger", 1, 180.0).with_notes("rare"),
            line("pizza", 3, 200.0),
        ]
    }

    // ------------------------------------------------------------------
    // add_item_to_order
    // ------------------------------------------------------------------

    #[test]
    fn test_add_new_item_appends_and_keeps_others_untouched() {
        let items = sample_items();
        let next = add_item_to_order(&items, "cake", 1, 100.0, None).unwrap();

        assert_eq!(next.len(), items.len() + 1);
        assert_eq!(&next[..items.len()], &items[..]);
        assert_eq!(next.last().unwrap().food_id.id(), "cake");
        assert_eq!(next.last().unwrap().quantity, 1);
    }

    #[test]
    fn test_add_existing_item_merges_in_place() {
        let items = sample_items();
        let next = add_item_to_order(&items, "burger", 2, 180.0, None).unwrap();

        assert_eq!(next.len(), items.len());
        // position preserved, quantity merged
        assert_eq!(next[1].food_id.id(), "burger");
        assert_eq!(next[1].quantity, 3);
        // untouched neighbours
        assert_eq!(next[0], items[0]);
        assert_eq!(next[2], items[2]);
    }

    #[test]
    fn test_add_merges_by_resolved_id_across_shapes() {
        let items = vec![OrderItem {
            id: None,
            food_id: FoodRef::Expanded(FoodSummary {
                id: "burger".to_string(),
                name: "Burger".to_string(),
                price: 190.0,
                description: None,
                image_url: None,
            }),
            quantity: 1,
            price_at_order: 180.0,
            item_notes: None,
        }];

        let next = add_item_to_order(&items, "burger", 1, 180.0, None).unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].quantity, 2);
    }

    #[test]
    fn test_add_replaces_note_only_when_non_empty() {
        let items = sample_items();

        let next = add_item_to_order(&items, "burger", 1, 180.0, Some("well done")).unwrap();
        assert_eq!(next[1].item_notes.as_deref(), Some("well done"));

        let next = add_item_to_order(&items, "burger", 1, 180.0, Some("")).unwrap();
        assert_eq!(next[1].item_notes.as_deref(), Some("rare"));

        let next = add_item_to_order(&items, "burger", 1, 180.0, None).unwrap();
        assert_eq!(next[1].item_notes.as_deref(), Some("rare"));
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let items = sample_items();
        assert_eq!(
            add_item_to_order(&items, "tea", 0, 20.0, None),
            Err(OrderError::InvalidQuantity(0))
        );
        assert_eq!(
            add_item_to_order(&items, "tea", -3, 20.0, None),
            Err(OrderError::InvalidQuantity(-3))
        );
    }

    #[test]
    fn test_add_does_not_mutate_input() {
        let items = sample_items();
        let snapshot = items.clone();
        let _ = add_item_to_order(&items, "burger", 5, 180.0, None).unwrap();
        assert_eq!(items, snapshot);
    }

    // ------------------------------------------------------------------
    // increase_item_quantity
    // ------------------------------------------------------------------

    #[test]
    fn test_increase_adds_amount_to_matching_line() {
        let items = sample_items();
        let next = increase_item_quantity(&items, "tea", 3).unwrap();
        assert_eq!(next[0].quantity, 5);
        assert_eq!(next[1], items[1]);
        assert_eq!(next[2], items[2]);
    }

    #[test]
    fn test_increase_unknown_id_is_noop() {
        let items = sample_items();
        let next = increase_item_quantity(&items, "soup", 1).unwrap();
        assert_eq!(next, items);
    }

    #[test]
    fn test_increase_rejects_non_positive_amount() {
        let items = sample_items();
        assert_eq!(
            increase_item_quantity(&items, "tea", 0),
            Err(OrderError::InvalidAmount(0))
        );
        assert_eq!(
            increase_item_quantity(&items, "tea", -1),
            Err(OrderError::InvalidAmount(-1))
        );
    }

    // ------------------------------------------------------------------
    // decrease_item_quantity
    // ------------------------------------------------------------------

    #[test]
    fn test_decrease_subtracts_amount() {
        let items = sample_items();
        let next = decrease_item_quantity(&items, "pizza", 2).unwrap();
        assert_eq!(next[2].quantity, 1);
    }

    // Regression: decrementing at quantity 1 holds the line at 1 instead
    // of dropping it; only remove_item_from_order removes lines.
    #[test]
    fn test_decrease_floors_at_one_and_never_removes() {
        let items = sample_items();

        let next = decrease_item_quantity(&items, "burger", 1).unwrap();
        assert_eq!(next.len(), items.len());
        assert_eq!(next[1].quantity, 1);

        let next = decrease_item_quantity(&items, "pizza", 99).unwrap();
        assert_eq!(next.len(), items.len());
        assert_eq!(next[2].quantity, 1);
    }

    #[test]
    fn test_decrease_never_produces_non_positive_quantity() {
        let items = sample_items();
        for amount in 1..10 {
            let next = decrease_item_quantity(&items, "tea", amount).unwrap();
            assert!(next.iter().all(|item| item.quantity >= 1));
        }
    }

    #[test]
    fn test_decrease_rejects_non_positive_amount() {
        let items = sample_items();
        assert_eq!(
            decrease_item_quantity(&items, "tea", -2),
            Err(OrderError::InvalidAmount(-2))
        );
    }

    // ------------------------------------------------------------------
    // remove_item_from_order
    // ------------------------------------------------------------------

    #[test]
    fn test_remove_drops_matching_line_only() {
        let items = sample_items();
        let next = remove_item_from_order(&items, "burger");
        assert_eq!(next.len(), 2);
        assert!(next.iter().all(|item| item.food_id.id() != "burger"));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let items = sample_items();
        assert_eq!(remove_item_from_order(&items, "soup"), items);
    }

    // Remove-then-add behaves like replacing the line's quantity outright.
    #[test]
    fn test_remove_then_add_replaces_quantity() {
        let items = sample_items();

        let removed = remove_item_from_order(&items, "pizza");
        let next = add_item_to_order(&removed, "pizza", 1, 200.0, None).unwrap();

        let pizza = next
            .iter()
            .find(|item| item.food_id.id() == "pizza")
            .unwrap();
        assert_eq!(pizza.quantity, 1);
        assert_eq!(next.len(), items.len());
    }
}
