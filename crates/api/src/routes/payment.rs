//! Routes for the `/payments` resource.

use axum::routing::delete;
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/payments/{id}", delete(payment::delete))
}
