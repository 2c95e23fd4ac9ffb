//! Saloons and Tables API

use serde::Serialize;

use shared::models::{Saloon, SaloonTable, TableCreate, TableUpdate};

use crate::{ClientResult, HttpClient};

#[derive(Serialize)]
struct SaloonName {
    name: String,
}

impl HttpClient {
    // ========== Saloons API ==========

    /// List all saloons (dining rooms)
    pub async fn get_saloons(&self) -> ClientResult<Vec<Saloon>> {
        self.get("/saloons").await
    }

    /// Fetch a single saloon
    pub async fn get_saloon(&self, saloon_id: &str) -> ClientResult<Saloon> {
        self.get(&format!("/saloons/{saloon_id}")).await
    }

    /// Create a saloon
    pub async fn create_saloon(&self, name: impl Into<String>) -> ClientResult<Saloon> {
        self.post("/saloons", &SaloonName { name: name.into() }).await
    }

    /// Rename a saloon
    pub async fn update_saloon(
        &self,
        saloon_id: &str,
        name: impl Into<String>,
    ) -> ClientResult<Saloon> {
        self.patch(
            &format!("/saloons/{saloon_id}"),
            &SaloonName { name: name.into() },
        )
        .await
    }

    /// Delete a saloon
    pub async fn delete_saloon(&self, saloon_id: &str) -> ClientResult<()> {
        self.delete::<serde_json::Value>(&format!("/saloons/{saloon_id}"))
            .await
            .map(|_| ())
    }

    // ========== Tables API ==========

    /// List every table
    pub async fn get_tables(&self) -> ClientResult<Vec<SaloonTable>> {
        self.get("/tables").await
    }

    /// Fetch a single table
    pub async fn get_table(&self, table_id: &str) -> ClientResult<SaloonTable> {
        self.get(&format!("/tables/single/{table_id}")).await
    }

    /// Create a table in a saloon
    pub async fn create_table(&self, table: &TableCreate) -> ClientResult<SaloonTable> {
        self.post("/tables", table).await
    }

    /// Update a table's name or saloon
    pub async fn update_table(
        &self,
        table_id: &str,
        update: &TableUpdate,
    ) -> ClientResult<SaloonTable> {
        self.patch(&format!("/tables/{table_id}"), update).await
    }

    /// Delete a table
    pub async fn delete_table(&self, table_id: &str) -> ClientResult<()> {
        self.delete::<serde_json::Value>(&format!("/tables/{table_id}"))
            .await
            .map(|_| ())
    }

    /// Open a table for service
    pub async fn open_table(&self, table_id: &str) -> ClientResult<SaloonTable> {
        self.post_empty(&format!("/tables/open-table/{table_id}"))
            .await
    }

    /// Close a table after payment
    pub async fn close_table(&self, table_id: &str) -> ClientResult<SaloonTable> {
        self.get(&format!("/tables/close-table/{table_id}")).await
    }

    /// Tables currently served by the authenticated waiter
    pub async fn my_tables(&self) -> ClientResult<Vec<SaloonTable>> {
        self.get("/tables/my-tables").await
    }
}
