//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! and dependencies needed by the application. The state is initialized once
//! during startup and then cloned for each request handler through Axum's
//! state extraction.

use sea_orm::DatabaseConnection;

use crate::{domain::standings::StandingsConfig, service::admin::code::AdminCodeService};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `AdminCodeService` uses `Arc` for shared state
/// - `StandingsConfig` is `Copy`
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Service for managing temporary admin bootstrap codes.
    ///
    /// Used to generate and validate one-time codes that allow the first
    /// user to gain admin access when no admin users exist in the database.
    pub admin_code_service: AdminCodeService,

    /// Deployment-level standings configuration (win value, tie policy).
    pub standings: StandingsConfig,

    /// Application base URL for generating links.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized; the resulting state is provided to the Axum router for
    /// use in request handlers.
    pub fn new(
        db: DatabaseConnection,
        admin_code_service: AdminCodeService,
        standings: StandingsConfig,
        app_url: String,
    ) -> Self {
        Self {
            db,
            admin_code_service,
            standings,
            app_url,
        }
    }
}
