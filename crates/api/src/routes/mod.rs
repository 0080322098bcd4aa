//! Route table assembly.
//!
//! ```text
//! GET    /projects                  project::list
//! POST   /projects                  project::create
//! PUT    /projects/{id}             project::update
//! DELETE /projects/{id}             project::delete
//! POST   /projects/{id}/sites       site::create
//! GET    /projects/{id}/financials  project::financials
//! POST   /projects/{id}/export      export::export
//! GET    /projects/{id}/overview    insights::project_overview
//! PATCH  /sites/{id}                site::update
//! DELETE /sites/{id}                site::delete
//! POST   /sites/{id}/payments       payment::create
//! GET    /sites/{id}/valuation      site::valuation
//! GET    /sites/{id}/report         insights::site_report
//! DELETE /payments/{id}             payment::delete
//! GET    /settings                  company_settings::get
//! PUT    /settings                  company_settings::upsert
//! ```

pub mod health;
mod payment;
mod project;
mod settings;
mod site;

use axum::Router;

use crate::state::AppState;

/// All `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(project::router())
        .merge(site::router())
        .merge(payment::router())
        .merge(settings::router())
}
