//! Repository for the `company_settings` singleton table.

use sqlx::PgPool;

use estatenexus_core::types::DbId;

use crate::models::company_settings::{CompanySettingsRow, UpsertCompanySettings};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, logo_url, street, city, state, zip, updated_at";

/// Provides get/upsert for the settings singleton. There is no delete.
pub struct CompanySettingsRepo;

impl CompanySettingsRepo {
    /// Fetch the singleton row, if one has been saved yet.
    pub async fn get(pool: &PgPool) -> Result<Option<CompanySettingsRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM company_settings LIMIT 1");
        sqlx::query_as::<_, CompanySettingsRow>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Create-or-update the singleton row.
    ///
    /// Looks up the existing row first and updates it in place, inserting
    /// only when none exists: N saves leave exactly one row behind.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertCompanySettings,
    ) -> Result<CompanySettingsRow, sqlx::Error> {
        let existing = sqlx::query_scalar::<_, DbId>("SELECT id FROM company_settings LIMIT 1")
            .fetch_optional(pool)
            .await?;

        match existing {
            Some(id) => {
                let query = format!(
                    "UPDATE company_settings SET
                        name = $2,
                        logo_url = $3,
                        street = $4,
                        city = $5,
                        state = $6,
                        zip = $7,
                        updated_at = NOW()
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, CompanySettingsRow>(&query)
                    .bind(id)
                    .bind(&input.name)
                    .bind(&input.logo_url)
                    .bind(&input.street)
                    .bind(&input.city)
                    .bind(&input.state)
                    .bind(&input.zip)
                    .fetch_one(pool)
                    .await
            }
            None => {
                let query = format!(
                    "INSERT INTO company_settings (name, logo_url, street, city, state, zip)
                     VALUES ($1, $2, $3, $4, $5, $6)
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, CompanySettingsRow>(&query)
                    .bind(&input.name)
                    .bind(&input.logo_url)
                    .bind(&input.street)
                    .bind(&input.city)
                    .bind(&input.state)
                    .bind(&input.zip)
                    .fetch_one(pool)
                    .await
            }
        }
    }
}
