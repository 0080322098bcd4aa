//! Handlers for the payment ledger.
//!
//! Payments are append-only from the client's perspective; the delete
//! endpoint exists as an access-layer operation only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use estatenexus_core::error::CoreError;
use estatenexus_core::types::DbId;
use estatenexus_core::validation;
use estatenexus_db::models::payment::CreatePayment;
use estatenexus_db::repositories::{PaymentRepo, SiteRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::Created;
use crate::state::AppState;

/// POST /api/v1/sites/{id}/payments
pub async fn create(
    State(state): State<AppState>,
    Path(site_id): Path<DbId>,
    Json(input): Json<CreatePayment>,
) -> AppResult<(StatusCode, Json<Created>)> {
    validation::validate_payment_amount(input.amount)?;

    let pool = state.db()?;
    SiteRepo::find_by_id(pool, site_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Site",
            id: site_id,
        }))?;

    let row = PaymentRepo::create(pool, site_id, &input).await?;
    Ok((StatusCode::CREATED, Json(Created { id: row.id })))
}

/// DELETE /api/v1/payments/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PaymentRepo::delete(state.db()?, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }))
    }
}
