//! API Response types
//!
//! Response envelopes used by the remote back-office API

use serde::{Deserialize, Serialize};

/// Unified API response structure
///
/// All API responses follow this format:
/// ```json
/// {
///     "success": true,
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message (set on errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Pagination metadata returned by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based)
    pub current_page: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// Total number of orders matching the filter
    pub total_orders: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Paginated list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub success: bool,
    /// Page of items
    pub data: Vec<T>,
    /// Pagination metadata
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_wire_names() {
        let json = r#"{
            "currentPage": 2,
            "totalPages": 5,
            "totalOrders": 93,
            "hasNext": true,
            "hasPrev": true
        }"#;
        let p: Pagination = serde_json::from_str(json).unwrap();
        assert_eq!(p.current_page, 2);
        assert_eq!(p.total_orders, 93);
        assert!(p.has_next);
    }

    #[test]
    fn test_error_response_skips_data() {
        let resp = ApiResponse::<()>::error("table not found");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("data"));
        assert!(json.contains("table not found"));
    }
}
