//! Typed API surfaces
//!
//! Each module extends [`HttpClient`](crate::http::HttpClient) with the
//! calls for one remote resource.

pub mod auth;
pub mod categories;
pub mod foods;
pub mod orders;
pub mod saloons;
pub mod staff;
