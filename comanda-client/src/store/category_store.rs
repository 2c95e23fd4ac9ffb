//! Category store - cached category reads

use tokio::sync::RwLock;
use tracing::debug;

use shared::models::{Category, CategoryUpdate};
use shared::util::now_millis;

use crate::cache::{CacheMap, DEFAULT_CACHE_TIMEOUT_MS};
use crate::{ClientResult, HttpClient};

/// Cached category access, keyed by restaurant
pub struct CategoryStore {
    client: HttpClient,
    cache_timeout_ms: i64,
    by_restaurant: RwLock<CacheMap<Vec<Category>>>,
}

impl CategoryStore {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            cache_timeout_ms: DEFAULT_CACHE_TIMEOUT_MS,
            by_restaurant: RwLock::new(CacheMap::new()),
        }
    }

    /// Override the cache timeout
    pub fn with_cache_timeout_ms(mut self, millis: i64) -> Self {
        self.cache_timeout_ms = millis;
        self
    }

    /// A restaurant's categories, served from cache when fresh
    pub async fn categories_by_restaurant(
        &self,
        restaurant_no: &str,
        force_refresh: bool,
    ) -> ClientResult<Vec<Category>> {
        let now = now_millis();
        if !force_refresh {
            if let Some(categories) =
                self.by_restaurant
                    .read()
                    .await
                    .get_fresh(restaurant_no, self.cache_timeout_ms, now)
            {
                debug!(restaurant_no, "serving categories from cache");
                return Ok(categories.clone());
            }
        }

        let categories = self
            .client
            .get_categories_by_restaurant(restaurant_no)
            .await?;
        self.by_restaurant
            .write()
            .await
            .insert(restaurant_no, categories.clone(), now);
        Ok(categories)
    }

    /// Create a category and invalidate its restaurant's list
    pub async fn create_category(&self, name: impl Into<String>) -> ClientResult<Category> {
        let created = self.client.create_category(name).await?;
        let mut cache = self.by_restaurant.write().await;
        match &created.restaurant_no {
            Some(restaurant_no) => {
                cache.invalidate(restaurant_no);
            }
            None => cache.clear(),
        }
        Ok(created)
    }

    /// Rename a category
    pub async fn edit_category(
        &self,
        category_id: &str,
        update: &CategoryUpdate,
    ) -> ClientResult<Category> {
        let updated = self.client.update_category(category_id, update).await?;
        let mut cache = self.by_restaurant.write().await;
        match &updated.restaurant_no {
            Some(restaurant_no) => {
                cache.invalidate(restaurant_no);
            }
            None => cache.clear(),
        }
        Ok(updated)
    }

    /// Delete a category
    ///
    /// The owning restaurant is unknown after deletion, so the whole
    /// cache is dropped.
    pub async fn remove_category(&self, category_id: &str) -> ClientResult<()> {
        self.client.delete_category(category_id).await?;
        self.by_restaurant.write().await.clear();
        Ok(())
    }

    /// Drop every cached list
    pub async fn clear_cache(&self) {
        self.by_restaurant.write().await.clear();
    }
}
