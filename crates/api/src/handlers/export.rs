//! CSV export of a project's site inventory.

use axum::extract::{Path, State};
use axum::http::header;
use axum::http::HeaderName;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use estatenexus_core::error::CoreError;
use estatenexus_core::export::{self, FieldSelection};
use estatenexus_core::inventory::{filter_sites, StatusFilter};
use estatenexus_core::model::Site;
use estatenexus_core::types::DbId;
use estatenexus_db::inventory;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Export request body: the scope, the inventory filter state (used when
/// scope is `filtered`), and the enabled field groups.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(default)]
    pub scope: ExportScope,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub fields: FieldSelection,
}

/// Which sites go into the report: the whole project, or the client's
/// current filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportScope {
    #[default]
    All,
    Filtered,
}

/// POST /api/v1/projects/{id}/export
///
/// Responds with `text/csv` and an attachment filename of the form
/// `{ProjectName}_Report_{ISO-date}.csv`.
pub async fn export(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(request): Json<ExportRequest>,
) -> AppResult<([(HeaderName, String); 2], String)> {
    let pool = state.db()?;
    let project = inventory::load_project(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let sites: Vec<&Site> = match request.scope {
        ExportScope::All => project.sites.iter().collect(),
        ExportScope::Filtered => filter_sites(&project.sites, &request.query, request.status),
    };

    let csv = export::render_csv(&sites, &request.fields);
    let filename = export::report_filename(&project.name, Utc::now().date_naive());

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    ))
}
