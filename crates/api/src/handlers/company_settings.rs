//! Handlers for the company settings singleton.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use estatenexus_core::model::CompanySettings;
use estatenexus_db::models::company_settings::UpsertCompanySettings;
use estatenexus_db::repositories::CompanySettingsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/settings -- JSON `null` until the first save.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<Option<CompanySettings>>> {
    let row = CompanySettingsRepo::get(state.db()?).await?;
    Ok(Json(row.map(|row| row.into_settings())))
}

/// PUT /api/v1/settings -- insert on first save, update thereafter.
pub async fn upsert(
    State(state): State<AppState>,
    Json(input): Json<UpsertCompanySettings>,
) -> AppResult<Json<CompanySettings>> {
    input.validate()?;
    let row = CompanySettingsRepo::upsert(state.db()?, &input).await?;
    Ok(Json(row.into_settings()))
}
