//! Valuation calculator: pure arithmetic over a site's financial fields.
//!
//! Every function here is stateless. Missing numeric inputs count as zero
//! (the storage layer already maps NULL columns to 0.0), and a missing
//! profit margin counts as 0%.

use serde::Serialize;

use crate::model::{Site, SiteDimensions};

/// Square feet per cent (Indian land-area unit).
pub const SQFT_PER_CENT: f64 = 435.6;

// ---------------------------------------------------------------------------
// Area
// ---------------------------------------------------------------------------

/// Land area derived from plot edge lengths: the mean of the north/south
/// edges times the mean of the east/west edges.
///
/// This is the canonical source of `land_area_sq_ft`; it is recomputed on
/// every dimension edit, at site creation and during in-place edits alike.
pub fn land_area_sq_ft(dims: &SiteDimensions) -> f64 {
    ((dims.north + dims.south) / 2.0) * ((dims.east + dims.west) / 2.0)
}

/// Convert square feet to cents.
pub fn sq_ft_to_cents(area_sq_ft: f64) -> f64 {
    area_sq_ft / SQFT_PER_CENT
}

/// Display rendering for areas: whole square feet, rounded. The stored
/// value keeps full precision.
pub fn display_sq_ft(area_sq_ft: f64) -> String {
    format!("{area_sq_ft:.0}")
}

/// Display rendering for cents: two decimal places.
pub fn display_cents(cents: f64) -> String {
    format!("{cents:.2}")
}

// ---------------------------------------------------------------------------
// Per-site valuation
// ---------------------------------------------------------------------------

/// Derived monetary figures for a single site.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteValuation {
    pub land_value: f64,
    pub construction_value: f64,
    pub base_value: f64,
    pub profit_amount: f64,
    pub projected_total_value: f64,
    pub total_paid: f64,
    pub balance_due: f64,
}

/// Compute the full valuation for a site.
///
/// `balance_due` is not clamped; an overpaid site goes negative.
pub fn site_valuation(site: &Site) -> SiteValuation {
    let land_value = site.land_area_sq_ft * site.land_cost_per_sq_ft;
    let construction_value = site.construction_area_sq_ft * site.construction_rate_per_sq_ft;
    let base_value = land_value + construction_value;
    let profit_amount = base_value * (site.profit_margin_percentage.unwrap_or(0.0) / 100.0);
    let projected_total_value = base_value + profit_amount;
    let total_paid: f64 = site.payments.iter().map(|p| p.amount).sum();
    let balance_due = projected_total_value - total_paid;

    SiteValuation {
        land_value,
        construction_value,
        base_value,
        profit_amount,
        projected_total_value,
        total_paid,
        balance_due,
    }
}

// ---------------------------------------------------------------------------
// Project rollup
// ---------------------------------------------------------------------------

/// Cumulative portfolio value for a project, summed over ALL of its sites
/// (never the filtered view).
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFinancials {
    pub total_land: f64,
    pub total_construction: f64,
    pub total_projected: f64,
}

/// Roll per-site valuations up to project level.
pub fn project_financials(sites: &[Site]) -> ProjectFinancials {
    sites.iter().fold(ProjectFinancials::default(), |acc, site| {
        let value = site_valuation(site);
        ProjectFinancials {
            total_land: acc.total_land + value.land_value,
            total_construction: acc.total_construction + value.construction_value,
            total_projected: acc.total_projected + value.projected_total_value,
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{PaymentRecord, SiteStatus};
    use crate::types::DbId;

    fn site(land_area: f64, land_rate: f64, const_area: f64, const_rate: f64) -> Site {
        Site {
            id: 1,
            number: "E-101".to_string(),
            status: SiteStatus::Unsold,
            customer_name: None,
            customer_phone: None,
            facing: "East".to_string(),
            dimensions: SiteDimensions {
                north: 30.0,
                south: 30.0,
                east: 40.0,
                west: 40.0,
            },
            land_area_sq_ft: land_area,
            land_cost_per_sq_ft: land_rate,
            construction_area_sq_ft: const_area,
            construction_rate_per_sq_ft: const_rate,
            profit_margin_percentage: None,
            image_urls: Vec::new(),
            tags: Vec::new(),
            projected_completion_date: None,
            booking_date: None,
            sale_date: None,
            payments: Vec::new(),
        }
    }

    fn payment(id: DbId, amount: f64) -> PaymentRecord {
        PaymentRecord {
            id,
            amount,
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            method: "Bank Transfer".to_string(),
            notes: None,
        }
    }

    // -- area from dimensions --

    #[test]
    fn area_is_product_of_edge_averages() {
        let dims = SiteDimensions {
            north: 30.0,
            south: 30.0,
            east: 40.0,
            west: 40.0,
        };
        assert_eq!(land_area_sq_ft(&dims), 1200.0);
    }

    #[test]
    fn area_averages_uneven_edges() {
        let dims = SiteDimensions {
            north: 30.0,
            south: 34.0,
            east: 40.0,
            west: 44.0,
        };
        // ((30 + 34) / 2) * ((40 + 44) / 2) = 32 * 42
        assert_eq!(land_area_sq_ft(&dims), 1344.0);
    }

    #[test]
    fn area_is_zero_for_zero_edges() {
        let dims = SiteDimensions {
            north: 0.0,
            south: 0.0,
            east: 40.0,
            west: 40.0,
        };
        assert_eq!(land_area_sq_ft(&dims), 0.0);
    }

    #[test]
    fn cents_conversion_uses_fixed_constant() {
        let cents = sq_ft_to_cents(1200.0);
        assert!((cents - 1200.0 / 435.6).abs() < f64::EPSILON);
        assert_eq!(display_cents(cents), "2.75");
    }

    #[test]
    fn sq_ft_display_rounds_to_whole_numbers() {
        assert_eq!(display_sq_ft(1200.0), "1200");
        assert_eq!(display_sq_ft(1199.6), "1200");
        assert_eq!(display_sq_ft(1199.4), "1199");
    }

    // -- per-site valuation --

    #[test]
    fn valuation_matches_reference_scenario() {
        // landArea=1200 @ 4500 + constArea=1800 @ 2200, profit 10%.
        let mut site = site(1200.0, 4500.0, 1800.0, 2200.0);
        site.profit_margin_percentage = Some(10.0);

        let value = site_valuation(&site);
        assert_eq!(value.land_value, 5_400_000.0);
        assert_eq!(value.construction_value, 3_960_000.0);
        assert_eq!(value.base_value, 9_360_000.0);
        assert_eq!(value.profit_amount, 936_000.0);
        assert_eq!(value.projected_total_value, 10_296_000.0);
    }

    #[test]
    fn balance_subtracts_payments_from_projected_total() {
        let mut site = site(1200.0, 4500.0, 1800.0, 2200.0);
        site.profit_margin_percentage = Some(10.0);
        site.payments = vec![payment(1, 2_000_000.0)];

        let value = site_valuation(&site);
        assert_eq!(value.total_paid, 2_000_000.0);
        assert_eq!(value.balance_due, 8_296_000.0);
    }

    #[test]
    fn balance_equals_projected_total_with_no_payments() {
        let value = site_valuation(&site(1000.0, 100.0, 0.0, 0.0));
        assert_eq!(value.total_paid, 0.0);
        assert_eq!(value.balance_due, value.projected_total_value);
    }

    #[test]
    fn balance_goes_negative_when_overpaid() {
        let mut site = site(100.0, 10.0, 0.0, 0.0);
        site.payments = vec![payment(1, 600.0), payment(2, 600.0)];

        let value = site_valuation(&site);
        assert_eq!(value.projected_total_value, 1000.0);
        assert_eq!(value.balance_due, -200.0);
    }

    #[test]
    fn missing_profit_margin_counts_as_zero() {
        let value = site_valuation(&site(1200.0, 4500.0, 1800.0, 2200.0));
        assert_eq!(value.profit_amount, 0.0);
        assert_eq!(value.projected_total_value, value.base_value);
    }

    // -- project rollup --

    #[test]
    fn project_rollup_sums_every_site() {
        let mut premium = site(1200.0, 4500.0, 1800.0, 2200.0);
        premium.profit_margin_percentage = Some(10.0);
        let budget = site(1000.0, 2000.0, 0.0, 0.0);

        let totals = project_financials(&[premium, budget]);
        assert_eq!(totals.total_land, 5_400_000.0 + 2_000_000.0);
        assert_eq!(totals.total_construction, 3_960_000.0);
        assert_eq!(totals.total_projected, 10_296_000.0 + 2_000_000.0);
    }

    #[test]
    fn project_rollup_of_empty_list_is_zero() {
        let totals = project_financials(&[]);
        assert_eq!(totals.total_land, 0.0);
        assert_eq!(totals.total_construction, 0.0);
        assert_eq!(totals.total_projected, 0.0);
    }
}
