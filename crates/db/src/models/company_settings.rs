//! Company settings singleton row and DTO.

use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

use estatenexus_core::model::CompanySettings;
use estatenexus_core::types::{DbId, Timestamp};

/// The singleton row from the `company_settings` table.
#[derive(Debug, Clone, FromRow)]
pub struct CompanySettingsRow {
    pub id: DbId,
    pub name: String,
    pub logo_url: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub updated_at: Timestamp,
}

impl CompanySettingsRow {
    /// Map to the domain entity. The row id stays internal; there is only
    /// ever one row.
    pub fn into_settings(self) -> CompanySettings {
        CompanySettings {
            name: self.name,
            logo_url: self.logo_url,
            street: self.street,
            city: self.city,
            state: self.state,
            zip: self.zip,
        }
    }
}

/// DTO for the settings upsert. The same payload serves the first save
/// (insert) and every later one (update).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCompanySettings {
    #[validate(length(min = 1, message = "Company name must not be empty"))]
    pub name: String,
    pub logo_url: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}
