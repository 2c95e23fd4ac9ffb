//! Categories API

use shared::models::{Category, CategoryCreate, CategoryUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    // ========== Categories API ==========

    /// Create a category
    pub async fn create_category(&self, name: impl Into<String>) -> ClientResult<Category> {
        self.post("/categories", &CategoryCreate { name: name.into() })
            .await
    }

    /// List a restaurant's categories
    pub async fn get_categories_by_restaurant(
        &self,
        restaurant_no: &str,
    ) -> ClientResult<Vec<Category>> {
        self.get(&format!("/categories/restaurant/{restaurant_no}"))
            .await
    }

    /// Update a category
    pub async fn update_category(
        &self,
        category_id: &str,
        update: &CategoryUpdate,
    ) -> ClientResult<Category> {
        self.patch(&format!("/categories/{category_id}"), update)
            .await
    }

    /// Delete a category
    pub async fn delete_category(&self, category_id: &str) -> ClientResult<()> {
        self.delete::<serde_json::Value>(&format!("/categories/{category_id}"))
            .await
            .map(|_| ())
    }
}
