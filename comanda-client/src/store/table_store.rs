//! Table store - cached saloon and table reads

use tokio::sync::RwLock;
use tracing::debug;

use shared::models::{Saloon, SaloonTable, TableCreate, TableUpdate};
use shared::util::now_millis;

use crate::cache::{CacheEntry, DEFAULT_CACHE_TIMEOUT_MS};
use crate::{ClientResult, HttpClient};

/// Cached access to saloons and their tables
///
/// Both lists are restaurant-global on the API, so each is a single
/// cache slot rather than a keyed map.
pub struct TableStore {
    client: HttpClient,
    cache_timeout_ms: i64,
    saloons: RwLock<Option<CacheEntry<Vec<Saloon>>>>,
    tables: RwLock<Option<CacheEntry<Vec<SaloonTable>>>>,
}

impl TableStore {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            cache_timeout_ms: DEFAULT_CACHE_TIMEOUT_MS,
            saloons: RwLock::new(None),
            tables: RwLock::new(None),
        }
    }

    /// Override the cache timeout
    pub fn with_cache_timeout_ms(mut self, millis: i64) -> Self {
        self.cache_timeout_ms = millis;
        self
    }

    // ========== Saloons ==========

    /// All saloons, served from cache when fresh
    pub async fn saloons(&self, force_refresh: bool) -> ClientResult<Vec<Saloon>> {
        let now = now_millis();
        if !force_refresh {
            if let Some(entry) = self.saloons.read().await.as_ref() {
                if !entry.is_stale(self.cache_timeout_ms, now) {
                    debug!("serving saloons from cache");
                    return Ok(entry.value.clone());
                }
            }
        }

        let saloons = self.client.get_saloons().await?;
        *self.saloons.write().await = Some(CacheEntry::new(saloons.clone(), now));
        Ok(saloons)
    }

    /// Create a saloon
    pub async fn create_saloon(&self, name: impl Into<String>) -> ClientResult<Saloon> {
        let created = self.client.create_saloon(name).await?;
        *self.saloons.write().await = None;
        Ok(created)
    }

    /// Rename a saloon
    pub async fn edit_saloon(
        &self,
        saloon_id: &str,
        name: impl Into<String>,
    ) -> ClientResult<Saloon> {
        let updated = self.client.update_saloon(saloon_id, name).await?;
        *self.saloons.write().await = None;
        Ok(updated)
    }

    /// Delete a saloon; its tables change too, so both caches drop
    pub async fn remove_saloon(&self, saloon_id: &str) -> ClientResult<()> {
        self.client.delete_saloon(saloon_id).await?;
        self.clear_cache().await;
        Ok(())
    }

    // ========== Tables ==========

    /// All tables, served from cache when fresh
    pub async fn tables(&self, force_refresh: bool) -> ClientResult<Vec<SaloonTable>> {
        let now = now_millis();
        if !force_refresh {
            if let Some(entry) = self.tables.read().await.as_ref() {
                if !entry.is_stale(self.cache_timeout_ms, now) {
                    debug!("serving tables from cache");
                    return Ok(entry.value.clone());
                }
            }
        }

        let tables = self.client.get_tables().await?;
        *self.tables.write().await = Some(CacheEntry::new(tables.clone(), now));
        Ok(tables)
    }

    /// Create a table
    pub async fn create_table(&self, table: &TableCreate) -> ClientResult<SaloonTable> {
        let created = self.client.create_table(table).await?;
        *self.tables.write().await = None;
        Ok(created)
    }

    /// Update a table
    pub async fn edit_table(
        &self,
        table_id: &str,
        update: &TableUpdate,
    ) -> ClientResult<SaloonTable> {
        let updated = self.client.update_table(table_id, update).await?;
        *self.tables.write().await = None;
        Ok(updated)
    }

    /// Delete a table
    pub async fn remove_table(&self, table_id: &str) -> ClientResult<()> {
        self.client.delete_table(table_id).await?;
        *self.tables.write().await = None;
        Ok(())
    }

    /// Open a table for service; occupancy changed, drop the table cache
    pub async fn open_table(&self, table_id: &str) -> ClientResult<SaloonTable> {
        let opened = self.client.open_table(table_id).await?;
        *self.tables.write().await = None;
        Ok(opened)
    }

    /// Close a table after payment
    pub async fn close_table(&self, table_id: &str) -> ClientResult<SaloonTable> {
        let closed = self.client.close_table(table_id).await?;
        *self.tables.write().await = None;
        Ok(closed)
    }

    /// Drop both cached lists
    pub async fn clear_cache(&self) {
        *self.saloons.write().await = None;
        *self.tables.write().await = None;
    }
}
