//! HTTP request handlers: access control, DTO conversion, service calls.

pub mod auth;
pub mod bid;
pub mod matches;
pub mod player;
pub mod season;
pub mod settlement;
pub mod standings;
pub mod team;
pub mod user;

use serde::Deserialize;
use utoipa::IntoParams;

/// Shared pagination query parameters.
#[derive(Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number, 0-indexed.
    #[serde(default)]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}
