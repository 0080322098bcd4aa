//! Narrative summary endpoints.
//!
//! Responses echo the subject id so the client can compare it against its
//! active selection when the response arrives and discard stale results
//! (last-context-wins). Generation failures never surface as errors; the
//! summary text is a fixed fallback string instead.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use estatenexus_core::error::CoreError;
use estatenexus_core::inventory::status_counts;
use estatenexus_core::types::DbId;
use estatenexus_core::valuation;
use estatenexus_db::inventory;
use estatenexus_insights::summary::{self, ProjectStats, SiteSnapshot};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverview {
    pub project_id: DbId,
    pub summary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteReport {
    pub site_id: DbId,
    pub summary: String,
}

/// GET /api/v1/projects/{id}/overview
pub async fn project_overview(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectOverview>> {
    let pool = state.db()?;
    let project = inventory::load_project(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let counts = status_counts(&project.sites);
    let stats = ProjectStats {
        name: project.name,
        location: project.location,
        total_sites: counts.total,
        sold: counts.sold,
        booked: counts.booked,
        unsold: counts.unsold,
    };

    let summary = summary::project_overview(state.insights.as_ref(), &stats).await;
    Ok(Json(ProjectOverview {
        project_id: id,
        summary,
    }))
}

/// GET /api/v1/sites/{id}/report
pub async fn site_report(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SiteReport>> {
    let pool = state.db()?;
    let site = inventory::load_site(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Site", id }))?;

    let value = valuation::site_valuation(&site);
    let snapshot = SiteSnapshot {
        number: site.number,
        status: site.status.as_str().to_string(),
        facing: site.facing,
        land_area_sq_ft: site.land_area_sq_ft,
        base_value: value.base_value,
        customer_name: site.customer_name.filter(|name| !name.is_empty()),
    };

    let summary = summary::site_report(state.insights.as_ref(), &snapshot).await;
    Ok(Json(SiteReport {
        site_id: id,
        summary,
    }))
}
