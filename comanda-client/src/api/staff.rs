//! Staff API

use shared::models::staff::{
    Waiter, WaiterCreate, WaiterLoginRequest, WaiterLoginResponse, WaiterUpdate,
};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    // ========== Staff API ==========

    /// List all waiters
    pub async fn get_waiters(&self) -> ClientResult<Vec<Waiter>> {
        self.get("/staffs").await
    }

    /// Fetch a single waiter
    pub async fn get_waiter_by_id(&self, waiter_id: &str) -> ClientResult<Waiter> {
        self.get(&format!("/staffs/{waiter_id}")).await
    }

    /// Create a waiter account
    pub async fn create_waiter(&self, waiter: &WaiterCreate) -> ClientResult<Waiter> {
        self.post("/staffs", waiter).await
    }

    /// Update a waiter account
    pub async fn update_waiter(
        &self,
        waiter_id: &str,
        update: &WaiterUpdate,
    ) -> ClientResult<Waiter> {
        self.put(&format!("/staffs/{waiter_id}"), update).await
    }

    /// Delete a waiter account
    pub async fn delete_waiter(&self, waiter_id: &str) -> ClientResult<()> {
        self.delete::<serde_json::Value>(&format!("/staffs/{waiter_id}"))
            .await
            .map(|_| ())
    }

    /// Flip a waiter between active and inactive
    pub async fn toggle_waiter_status(&self, waiter_id: &str) -> ClientResult<Waiter> {
        self.patch_empty(&format!("/staffs/{waiter_id}/toggle-status"))
            .await
    }

    /// Waiter login with username and password
    pub async fn waiter_login(
        &self,
        user_name: &str,
        password: &str,
    ) -> ClientResult<WaiterLoginResponse> {
        self.post(
            "/staffs/login",
            &WaiterLoginRequest {
                user_name: user_name.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }
}
