//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use estatenexus_core::error::CoreError;
use estatenexus_core::inventory::{status_counts, StatusCounts};
use estatenexus_core::model::Project;
use estatenexus_core::types::DbId;
use estatenexus_core::valuation::{project_financials, ProjectFinancials};
use estatenexus_db::inventory;
use estatenexus_db::models::project::{CreateProject, UpdateProject};
use estatenexus_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::Created;
use crate::state::AppState;

/// GET /api/v1/projects -- the full nested inventory.
///
/// Store failures surface as an empty list (logged), never as an error;
/// the client renders what it gets and refetches on the next mutation.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let pool = state.db()?;
    Ok(Json(inventory::load_all(pool).await))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Created>)> {
    input.validate()?;
    let row = ProjectRepo::create(state.db()?, &input).await?;
    Ok((StatusCode::CREATED, Json(Created { id: row.id })))
}

/// PUT /api/v1/projects/{id} -- full-field update from the edit form.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<StatusCode> {
    input.validate()?;
    ProjectRepo::update(state.db()?, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Summary-panel numbers for one project: status counts over ALL sites and
/// the cumulative portfolio value. An active search or status filter on the
/// client never changes these.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_id: DbId,
    pub counts: StatusCounts,
    pub financials: ProjectFinancials,
}

/// GET /api/v1/projects/{id}/financials
pub async fn financials(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectSummary>> {
    let pool = state.db()?;
    let project = inventory::load_project(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    Ok(Json(ProjectSummary {
        project_id: id,
        counts: status_counts(&project.sites),
        financials: project_financials(&project.sites),
    }))
}

/// DELETE /api/v1/projects/{id} -- cascades to sites and their payments.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(state.db()?, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
