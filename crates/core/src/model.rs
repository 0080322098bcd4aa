//! Entity shapes shared across the workspace.
//!
//! Wire serialization is camelCase; the storage layer owns the snake_case
//! column mapping (see `estatenexus-db`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Sale status of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SiteStatus {
    #[default]
    Unsold,
    Booked,
    Sold,
}

impl SiteStatus {
    /// The stored (and serialized) representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unsold => "UNSOLD",
            Self::Booked => "BOOKED",
            Self::Sold => "SOLD",
        }
    }

    /// Parse a stored status value. Unknown values fall back to `Unsold`;
    /// the schema CHECK constraint makes that branch unreachable in practice.
    pub fn from_db(value: &str) -> Self {
        match value {
            "SOLD" => Self::Sold,
            "BOOKED" => Self::Booked,
            _ => Self::Unsold,
        }
    }
}

/// Plot edge lengths in feet. The land area derives from these; see
/// [`crate::valuation::land_area_sq_ft`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteDimensions {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// One entry in a site's payment ledger. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: DbId,
    pub amount: f64,
    pub date: NaiveDate,
    pub method: String,
    pub notes: Option<String>,
}

/// An individually sellable land/building unit within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: DbId,
    pub number: String,
    pub status: SiteStatus,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub facing: String,
    pub dimensions: SiteDimensions,
    pub land_area_sq_ft: f64,
    pub land_cost_per_sq_ft: f64,
    pub construction_area_sq_ft: f64,
    pub construction_rate_per_sq_ft: f64,
    pub profit_margin_percentage: Option<f64>,
    pub image_urls: Vec<String>,
    pub tags: Vec<String>,
    pub projected_completion_date: Option<NaiveDate>,
    pub booking_date: Option<NaiveDate>,
    pub sale_date: Option<NaiveDate>,
    pub payments: Vec<PaymentRecord>,
}

/// A development containing multiple sites. Sites belong to exactly one
/// project; deleting the project deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub launch_date: Option<NaiveDate>,
    pub image_urls: Vec<String>,
    pub sites: Vec<Site>,
}

/// The company-wide settings singleton: one row per deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    pub name: String,
    pub logo_url: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_storage_form() {
        for status in [SiteStatus::Unsold, SiteStatus::Booked, SiteStatus::Sold] {
            assert_eq!(SiteStatus::from_db(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_stored_status_falls_back_to_unsold() {
        assert_eq!(SiteStatus::from_db("RESERVED"), SiteStatus::Unsold);
        assert_eq!(SiteStatus::from_db(""), SiteStatus::Unsold);
    }
}
