//! Routes for the company settings singleton.

use axum::routing::get;
use axum::Router;

use crate::handlers::company_settings;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/settings",
        get(company_settings::get).put(company_settings::upsert),
    )
}
