//! Routes for the `/sites` resource, including the payment ledger append
//! and the narrative site report.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{insights, payment, site};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sites/{id}", patch(site::update).delete(site::delete))
        .route("/sites/{id}/payments", post(payment::create))
        .route("/sites/{id}/valuation", get(site::valuation))
        .route("/sites/{id}/report", get(insights::site_report))
}
