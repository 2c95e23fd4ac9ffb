//! Saloon Model
//!
//! Saloons are dining rooms; tables belong to exactly one saloon.

use serde::{Deserialize, Serialize};

use crate::types::EntityRef;

/// Saloon (dining room) entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Saloon {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaloonTable {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Owning saloon (bare id or populated by the server)
    pub saloon_id: EntityRef,
    pub is_open: bool,
    /// Waiter currently serving the table, when open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiter: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_open_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_close_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreate {
    pub name: String,
    pub saloon_id: String,
}

/// Update table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableUpdate {
    pub name: String,
    pub saloon_id: String,
}
