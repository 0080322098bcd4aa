//! Site filtering and status aggregation for the inventory view.

use serde::{Deserialize, Serialize};

use crate::model::{Site, SiteStatus};

/// Status filter for the inventory list. `All` disables status matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusFilter {
    #[default]
    All,
    Unsold,
    Booked,
    Sold,
}

impl StatusFilter {
    pub fn matches(self, status: SiteStatus) -> bool {
        match self {
            Self::All => true,
            Self::Unsold => status == SiteStatus::Unsold,
            Self::Booked => status == SiteStatus::Booked,
            Self::Sold => status == SiteStatus::Sold,
        }
    }
}

/// Sites whose unit number case-insensitively contains `query` AND whose
/// status passes `filter`. An empty query matches every site.
pub fn filter_sites<'a>(sites: &'a [Site], query: &str, filter: StatusFilter) -> Vec<&'a Site> {
    let needle = query.to_lowercase();
    sites
        .iter()
        .filter(|site| site.number.to_lowercase().contains(&needle) && filter.matches(site.status))
        .collect()
}

/// Per-status counts for the summary panel.
///
/// Always computed over the FULL site list; an active search or status
/// filter never changes these numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub sold: usize,
    pub booked: usize,
    pub unsold: usize,
}

pub fn status_counts(sites: &[Site]) -> StatusCounts {
    sites.iter().fold(StatusCounts::default(), |mut acc, site| {
        acc.total += 1;
        match site.status {
            SiteStatus::Sold => acc.sold += 1,
            SiteStatus::Booked => acc.booked += 1,
            SiteStatus::Unsold => acc.unsold += 1,
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SiteDimensions;

    fn site(number: &str, status: SiteStatus) -> Site {
        Site {
            id: 0,
            number: number.to_string(),
            status,
            customer_name: None,
            customer_phone: None,
            facing: String::new(),
            dimensions: SiteDimensions {
                north: 0.0,
                south: 0.0,
                east: 0.0,
                west: 0.0,
            },
            land_area_sq_ft: 0.0,
            land_cost_per_sq_ft: 0.0,
            construction_area_sq_ft: 0.0,
            construction_rate_per_sq_ft: 0.0,
            profit_margin_percentage: None,
            image_urls: Vec::new(),
            tags: Vec::new(),
            projected_completion_date: None,
            booking_date: None,
            sale_date: None,
            payments: Vec::new(),
        }
    }

    fn inventory() -> Vec<Site> {
        vec![
            site("E-101", SiteStatus::Sold),
            site("E-102", SiteStatus::Booked),
            site("E-103", SiteStatus::Unsold),
            site("S-201", SiteStatus::Unsold),
        ]
    }

    #[test]
    fn empty_query_and_all_filter_match_everything() {
        let sites = inventory();
        assert_eq!(filter_sites(&sites, "", StatusFilter::All).len(), 4);
    }

    #[test]
    fn query_match_is_case_insensitive_contains() {
        let sites = inventory();
        let matched = filter_sites(&sites, "e-10", StatusFilter::All);
        assert_eq!(matched.len(), 3);

        let matched = filter_sites(&sites, "S-2", StatusFilter::All);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].number, "S-201");
    }

    #[test]
    fn status_filter_and_query_combine() {
        let sites = inventory();
        let matched = filter_sites(&sites, "e-", StatusFilter::Unsold);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].number, "E-103");
    }

    #[test]
    fn non_matching_query_yields_empty() {
        let sites = inventory();
        assert!(filter_sites(&sites, "Z-9", StatusFilter::All).is_empty());
    }

    #[test]
    fn counts_cover_the_unfiltered_list() {
        let counts = status_counts(&inventory());
        assert_eq!(
            counts,
            StatusCounts {
                total: 4,
                sold: 1,
                booked: 1,
                unsold: 2,
            }
        );
    }

    #[test]
    fn status_filter_deserializes_from_uppercase_labels() {
        for (label, expected) in [
            ("\"ALL\"", StatusFilter::All),
            ("\"UNSOLD\"", StatusFilter::Unsold),
            ("\"BOOKED\"", StatusFilter::Booked),
            ("\"SOLD\"", StatusFilter::Sold),
        ] {
            let parsed: StatusFilter = serde_json::from_str(label).unwrap();
            assert_eq!(parsed, expected);
        }
    }
}
