//! Food store - cached menu reads

use tokio::sync::RwLock;
use tracing::debug;

use shared::models::{Food, FoodCreate, FoodUpdate};
use shared::util::now_millis;

use crate::cache::{CacheMap, DEFAULT_CACHE_TIMEOUT_MS};
use crate::{ClientResult, HttpClient};

/// Cached menu access, keyed by category and by restaurant
pub struct FoodStore {
    client: HttpClient,
    cache_timeout_ms: i64,
    by_category: RwLock<CacheMap<Vec<Food>>>,
    by_restaurant: RwLock<CacheMap<Vec<Food>>>,
}

impl FoodStore {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            cache_timeout_ms: DEFAULT_CACHE_TIMEOUT_MS,
            by_category: RwLock::new(CacheMap::new()),
            by_restaurant: RwLock::new(CacheMap::new()),
        }
    }

    /// Override the cache timeout
    pub fn with_cache_timeout_ms(mut self, millis: i64) -> Self {
        self.cache_timeout_ms = millis;
        self
    }

    /// Menu items in one category, served from cache when fresh
    pub async fn foods_by_category(
        &self,
        category_id: &str,
        force_refresh: bool,
    ) -> ClientResult<Vec<Food>> {
        let now = now_millis();
        if !force_refresh {
            if let Some(foods) =
                self.by_category
                    .read()
                    .await
                    .get_fresh(category_id, self.cache_timeout_ms, now)
            {
                debug!(category_id, "serving foods from cache");
                return Ok(foods.clone());
            }
        }

        let foods = self.client.get_foods_by_category(category_id).await?;
        self.by_category
            .write()
            .await
            .insert(category_id, foods.clone(), now);
        Ok(foods)
    }

    /// A restaurant's full menu, served from cache when fresh
    pub async fn foods_by_restaurant(
        &self,
        restaurant_no: &str,
        force_refresh: bool,
    ) -> ClientResult<Vec<Food>> {
        let now = now_millis();
        if !force_refresh {
            if let Some(foods) =
                self.by_restaurant
                    .read()
                    .await
                    .get_fresh(restaurant_no, self.cache_timeout_ms, now)
            {
                debug!(restaurant_no, "serving foods from cache");
                return Ok(foods.clone());
            }
        }

        let foods = self.client.get_foods_by_restaurant(restaurant_no).await?;
        self.by_restaurant
            .write()
            .await
            .insert(restaurant_no, foods.clone(), now);
        Ok(foods)
    }

    /// Uncached single-item fetch
    pub async fn food_by_id(&self, food_id: &str) -> ClientResult<Food> {
        self.client.get_food_by_id(food_id).await
    }

    /// Create a menu item and invalidate the caches it lands in
    pub async fn create_food(&self, food: &FoodCreate) -> ClientResult<Food> {
        let created = self.client.create_food(food).await?;
        self.by_category
            .write()
            .await
            .invalidate(created.category_id.id());
        self.by_restaurant
            .write()
            .await
            .invalidate(&created.restaurant_no);
        Ok(created)
    }

    /// Update a menu item
    ///
    /// The previous category is unknown here, so both caches are dropped
    /// wholesale; the next read refetches.
    pub async fn edit_food(&self, food_id: &str, update: &FoodUpdate) -> ClientResult<Food> {
        let updated = self.client.update_food(food_id, update).await?;
        self.clear_cache().await;
        Ok(updated)
    }

    /// Delete a menu item
    pub async fn remove_food(&self, food_id: &str) -> ClientResult<()> {
        self.client.delete_food(food_id).await?;
        self.clear_cache().await;
        Ok(())
    }

    /// Drop every cached list
    pub async fn clear_cache(&self) {
        self.by_category.write().await.clear();
        self.by_restaurant.write().await.clear();
    }
}
