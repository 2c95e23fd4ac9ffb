//! Foods API

use shared::models::{Food, FoodCreate, FoodUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    // ========== Foods API ==========

    /// Create a menu item
    pub async fn create_food(&self, food: &FoodCreate) -> ClientResult<Food> {
        self.post("/foods/with-link", food).await
    }

    /// Update a menu item
    pub async fn update_food(&self, food_id: &str, update: &FoodUpdate) -> ClientResult<Food> {
        self.patch(&format!("/foods/{food_id}"), update).await
    }

    /// Delete a menu item
    pub async fn delete_food(&self, food_id: &str) -> ClientResult<()> {
        self.delete::<serde_json::Value>(&format!("/foods/{food_id}"))
            .await
            .map(|_| ())
    }

    /// Fetch a single menu item
    pub async fn get_food_by_id(&self, food_id: &str) -> ClientResult<Food> {
        self.get(&format!("/foods/{food_id}")).await
    }

    /// List menu items in one category
    pub async fn get_foods_by_category(&self, category_id: &str) -> ClientResult<Vec<Food>> {
        self.get(&format!("/foods/category/{category_id}")).await
    }

    /// List a restaurant's full menu
    pub async fn get_foods_by_restaurant(&self, restaurant_no: &str) -> ClientResult<Vec<Food>> {
        self.get(&format!("/foods/restaurant/{restaurant_no}")).await
    }
}
