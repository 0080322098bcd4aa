//! Nested inventory loading: projects with their sites and payment ledgers.
//!
//! [`load_all`] is the application's main read path. It deliberately never
//! errors: a store failure is logged and surfaced as an empty (or partially
//! empty) result, and the client renders what it gets and refetches after
//! the next mutation.

use std::collections::HashMap;

use sqlx::PgPool;

use estatenexus_core::model::{PaymentRecord, Project, Site};
use estatenexus_core::types::DbId;

use crate::models::payment::PaymentRow;
use crate::repositories::{PaymentRepo, ProjectRepo, SiteRepo};

/// Load every project with nested sites and payments, oldest project first.
pub async fn load_all(pool: &PgPool) -> Vec<Project> {
    let project_rows = match ProjectRepo::list(pool).await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch projects");
            return Vec::new();
        }
    };

    let site_rows = match SiteRepo::list_all(pool).await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch sites");
            Vec::new()
        }
    };

    let payment_rows = match PaymentRepo::list_all(pool).await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch payment records");
            Vec::new()
        }
    };

    let mut payments_by_site = group_payments(payment_rows);

    let mut sites_by_project: HashMap<DbId, Vec<Site>> = HashMap::new();
    for row in site_rows {
        let payments = payments_by_site.remove(&row.id).unwrap_or_default();
        sites_by_project
            .entry(row.project_id)
            .or_default()
            .push(row.into_site(payments));
    }

    project_rows
        .into_iter()
        .map(|row| {
            let mut project = row.into_project();
            project.sites = sites_by_project.remove(&project.id).unwrap_or_default();
            project
        })
        .collect()
}

/// Load a single project with nested sites and payments.
///
/// Unlike [`load_all`], errors propagate here: the single-project readers
/// (export, narrative overview) answer them as HTTP errors.
pub async fn load_project(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
    let Some(project_row) = ProjectRepo::find_by_id(pool, id).await? else {
        return Ok(None);
    };

    let site_rows = SiteRepo::list_by_project(pool, id).await?;
    let payment_rows = PaymentRepo::list_by_project(pool, id).await?;
    let mut payments_by_site = group_payments(payment_rows);

    let mut project = project_row.into_project();
    project.sites = site_rows
        .into_iter()
        .map(|row| {
            let payments = payments_by_site.remove(&row.id).unwrap_or_default();
            row.into_site(payments)
        })
        .collect();

    Ok(Some(project))
}

/// Load a single site with its payment ledger.
pub async fn load_site(pool: &PgPool, id: DbId) -> Result<Option<Site>, sqlx::Error> {
    let Some(site_row) = SiteRepo::find_by_id(pool, id).await? else {
        return Ok(None);
    };

    let payments = PaymentRepo::list_by_site(pool, id)
        .await?
        .into_iter()
        .map(PaymentRow::into_payment)
        .collect();

    Ok(Some(site_row.into_site(payments)))
}

fn group_payments(rows: Vec<PaymentRow>) -> HashMap<DbId, Vec<PaymentRecord>> {
    let mut by_site: HashMap<DbId, Vec<PaymentRecord>> = HashMap::new();
    for row in rows {
        by_site.entry(row.site_id).or_default().push(row.into_payment());
    }
    by_site
}
