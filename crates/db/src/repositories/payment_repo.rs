//! Repository for the `payment_records` table.
//!
//! Payments are append-only: there is create, read, and delete, but no
//! update. Ledgers come back ordered by payment date, then insertion.

use sqlx::PgPool;

use estatenexus_core::types::DbId;

use crate::models::payment::{CreatePayment, PaymentRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, site_id, amount, date, method, notes, created_at";

/// Provides ledger operations for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Append a payment to a site's ledger, returning the created row.
    pub async fn create(
        pool: &PgPool,
        site_id: DbId,
        input: &CreatePayment,
    ) -> Result<PaymentRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO payment_records (site_id, amount, date, method, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PaymentRow>(&query)
            .bind(site_id)
            .bind(input.amount)
            .bind(input.date)
            .bind(&input.method)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// The ordered ledger for one site.
    pub async fn list_by_site(pool: &PgPool, site_id: DbId) -> Result<Vec<PaymentRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM payment_records WHERE site_id = $1 ORDER BY date ASC, id ASC");
        sqlx::query_as::<_, PaymentRow>(&query)
            .bind(site_id)
            .fetch_all(pool)
            .await
    }

    /// Ledgers for every site of one project; the inventory loader groups
    /// them by site.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<PaymentRow>, sqlx::Error> {
        let query = "SELECT p.id, p.site_id, p.amount, p.date, p.method, p.notes, p.created_at
             FROM payment_records p
             JOIN sites s ON s.id = p.site_id
             WHERE s.project_id = $1
             ORDER BY p.date ASC, p.id ASC";
        sqlx::query_as::<_, PaymentRow>(query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List all payments across sites; the inventory loader groups them.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<PaymentRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payment_records ORDER BY date ASC, id ASC");
        sqlx::query_as::<_, PaymentRow>(&query).fetch_all(pool).await
    }

    /// Delete a payment by ID. Returns `true` if a row was removed.
    /// Exposed by the access layer; the reference UI never calls it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payment_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
