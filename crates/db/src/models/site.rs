//! Site entity row and DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

use estatenexus_core::model::{PaymentRecord, Site, SiteDimensions, SiteStatus};
use estatenexus_core::types::{DbId, Timestamp};
use estatenexus_core::valuation;

use crate::models::decimal_to_f64;

/// A site row from the `sites` table.
#[derive(Debug, Clone, FromRow)]
pub struct SiteRow {
    pub id: DbId,
    pub project_id: DbId,
    pub number: String,
    pub status: String,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub facing: String,
    pub north_ft: Decimal,
    pub south_ft: Decimal,
    pub east_ft: Decimal,
    pub west_ft: Decimal,
    pub land_area_sqft: Decimal,
    pub land_cost_per_sqft: Decimal,
    pub construction_area_sqft: Decimal,
    pub construction_rate_per_sqft: Decimal,
    pub profit_margin_percentage: Option<Decimal>,
    pub image_urls: Vec<String>,
    pub tags: Vec<String>,
    pub projected_completion_date: Option<NaiveDate>,
    pub booking_date: Option<NaiveDate>,
    pub sale_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SiteRow {
    /// Map to the domain entity with the given payment ledger.
    pub fn into_site(self, payments: Vec<PaymentRecord>) -> Site {
        Site {
            id: self.id,
            number: self.number,
            status: SiteStatus::from_db(&self.status),
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            facing: self.facing,
            dimensions: SiteDimensions {
                north: decimal_to_f64(self.north_ft),
                south: decimal_to_f64(self.south_ft),
                east: decimal_to_f64(self.east_ft),
                west: decimal_to_f64(self.west_ft),
            },
            land_area_sq_ft: decimal_to_f64(self.land_area_sqft),
            land_cost_per_sq_ft: decimal_to_f64(self.land_cost_per_sqft),
            construction_area_sq_ft: decimal_to_f64(self.construction_area_sqft),
            construction_rate_per_sq_ft: decimal_to_f64(self.construction_rate_per_sqft),
            profit_margin_percentage: self.profit_margin_percentage.map(decimal_to_f64),
            image_urls: self.image_urls,
            tags: self.tags,
            projected_completion_date: self.projected_completion_date,
            booking_date: self.booking_date,
            sale_date: self.sale_date,
            payments,
        }
    }
}

/// DTO for creating a site under a project.
///
/// The stored land area is always derived from `dimensions`; the repository
/// recomputes it and there is no way to submit a different value here.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSite {
    #[validate(length(min = 1, message = "Unit number must not be empty"))]
    pub number: String,
    #[serde(default)]
    pub status: SiteStatus,
    #[serde(default)]
    pub facing: String,
    pub dimensions: SiteDimensions,
    #[serde(default)]
    pub land_cost_per_sq_ft: f64,
    #[serde(default)]
    pub construction_area_sq_ft: f64,
    #[serde(default)]
    pub construction_rate_per_sq_ft: f64,
    pub profit_margin_percentage: Option<f64>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub projected_completion_date: Option<NaiveDate>,
    pub booking_date: Option<NaiveDate>,
    pub sale_date: Option<NaiveDate>,
}

/// Sparse partial update for a site. `None` means "leave the column
/// untouched" -- absent fields are never overwritten with defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSite {
    pub number: Option<String>,
    pub status: Option<SiteStatus>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub facing: Option<String>,
    pub dimensions: Option<SiteDimensions>,
    pub land_area_sq_ft: Option<f64>,
    pub land_cost_per_sq_ft: Option<f64>,
    pub construction_area_sq_ft: Option<f64>,
    pub construction_rate_per_sq_ft: Option<f64>,
    pub profit_margin_percentage: Option<f64>,
    pub image_urls: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub projected_completion_date: Option<NaiveDate>,
    pub booking_date: Option<NaiveDate>,
    pub sale_date: Option<NaiveDate>,
}

impl UpdateSite {
    /// The land area to persist for this patch.
    ///
    /// A patch that edits `dimensions` recomputes the area from the edges
    /// and wins over any directly submitted value; a patch without
    /// dimensions may override the stored area as-is.
    pub fn effective_land_area(&self) -> Option<f64> {
        match &self.dimensions {
            Some(dims) => Some(valuation::land_area_sq_ft(dims)),
            None => self.land_area_sq_ft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_patch_recomputes_area_and_ignores_override() {
        let patch = UpdateSite {
            dimensions: Some(SiteDimensions {
                north: 30.0,
                south: 30.0,
                east: 40.0,
                west: 40.0,
            }),
            land_area_sq_ft: Some(999.0),
            ..UpdateSite::default()
        };
        assert_eq!(patch.effective_land_area(), Some(1200.0));
    }

    #[test]
    fn area_override_applies_without_dimensions() {
        let patch = UpdateSite {
            land_area_sq_ft: Some(999.0),
            ..UpdateSite::default()
        };
        assert_eq!(patch.effective_land_area(), Some(999.0));
    }

    #[test]
    fn empty_patch_leaves_area_untouched() {
        assert_eq!(UpdateSite::default().effective_land_area(), None);
    }
}
