//! Routes for the `/projects` resource, including the per-project export
//! and narrative overview.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{export, insights, project, site};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list).post(project::create))
        .route("/projects/{id}", put(project::update).delete(project::delete))
        .route("/projects/{id}/sites", post(site::create))
        .route("/projects/{id}/financials", get(project::financials))
        .route("/projects/{id}/export", post(export::export))
        .route("/projects/{id}/overview", get(insights::project_overview))
}
