//! Handlers for site creation, partial update, valuation, and deletion.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use estatenexus_core::error::CoreError;
use estatenexus_core::types::DbId;
use estatenexus_core::validation;
use estatenexus_core::valuation::{site_valuation, SiteValuation};
use estatenexus_db::inventory;
use estatenexus_db::models::site::{CreateSite, UpdateSite};
use estatenexus_db::repositories::{ProjectRepo, SiteRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::Created;
use crate::state::AppState;

/// POST /api/v1/projects/{id}/sites
///
/// The stored land area always derives from the submitted dimensions; see
/// `SiteRepo::create`.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateSite>,
) -> AppResult<(StatusCode, Json<Created>)> {
    input.validate()?;
    validation::validate_dimensions(&input.dimensions)?;

    let pool = state.db()?;
    ProjectRepo::find_by_id(pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let row = SiteRepo::create(pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(Created { id: row.id })))
}

/// PATCH /api/v1/sites/{id} -- sparse update; absent fields stay untouched.
///
/// A patch that edits dimensions gets its land area recomputed from the
/// edges; a direct area override only applies when no dimensions are sent.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSite>,
) -> AppResult<StatusCode> {
    if let Some(dims) = &input.dimensions {
        validation::validate_dimensions(dims)?;
    }

    SiteRepo::update(state.db()?, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Site", id }))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Derived figures for one site's financial panel, straight from the
/// valuation calculator over the stored fields and the payment ledger.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteValuationResponse {
    pub site_id: DbId,
    pub valuation: SiteValuation,
}

/// GET /api/v1/sites/{id}/valuation
pub async fn valuation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SiteValuationResponse>> {
    let pool = state.db()?;
    let site = inventory::load_site(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Site", id }))?;

    Ok(Json(SiteValuationResponse {
        site_id: id,
        valuation: site_valuation(&site),
    }))
}

/// DELETE /api/v1/sites/{id} -- the payment ledger cascades in the store.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SiteRepo::delete(state.db()?, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Site", id }))
    }
}
