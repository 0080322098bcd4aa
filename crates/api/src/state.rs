use std::sync::Arc;

use estatenexus_db::DbPool;
use estatenexus_insights::InsightsProvider;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; `None` when `DATABASE_URL` was missing or
    /// the store was unreachable at startup (degraded mode).
    pub pool: Option<DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Narrative text provider (real, stubbed, or disabled).
    pub insights: Arc<dyn InsightsProvider>,
}

impl AppState {
    /// The pool, or the configuration-missing error every data-access
    /// handler reports in degraded mode.
    pub fn db(&self) -> Result<&DbPool, AppError> {
        self.pool.as_ref().ok_or(AppError::ConfigMissing)
    }
}
