//! Food Model

use serde::{Deserialize, Serialize};

use crate::types::EntityRef;

/// Ingredient list, stored either as free text or as a list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Ingredients {
    Text(String),
    List(Vec<String>),
}

/// Food entity (menu item)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Ingredients>,
    /// Menu price in currency unit
    pub price: f64,
    /// Owning category (bare id or populated by the server)
    pub category_id: EntityRef,
    pub restaurant_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Create food payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Ingredients>,
    pub price: f64,
    pub category_id: String,
    pub restaurant_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
}

/// Update food payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Ingredients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_category_ref_both_shapes() {
        let bare = r#"{
            "_id": "f1", "name": "Burger", "price": 180.0,
            "categoryId": "c1", "restaurantNo": "R-1"
        }"#;
        let food: Food = serde_json::from_str(bare).unwrap();
        assert_eq!(food.category_id.id(), "c1");

        let populated = r#"{
            "_id": "f1", "name": "Burger", "price": 180.0,
            "categoryId": {"_id": "c1", "name": "Grill"},
            "restaurantNo": "R-1"
        }"#;
        let food: Food = serde_json::from_str(populated).unwrap();
        assert_eq!(food.category_id.id(), "c1");
    }
}
