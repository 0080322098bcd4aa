//! Prompt construction and fallback handling for the two narrative calls.
//!
//! [`project_overview`] and [`site_report`] are total functions over any
//! provider: a transport failure or an empty generation both collapse to a
//! fixed string, never an error.

use crate::provider::InsightsProvider;

/// Aggregate inputs for the project-level executive summary.
#[derive(Debug, Clone)]
pub struct ProjectStats {
    pub name: String,
    pub location: String,
    pub total_sites: usize,
    pub sold: usize,
    pub booked: usize,
    pub unsold: usize,
}

/// Inputs for the per-site status report.
#[derive(Debug, Clone)]
pub struct SiteSnapshot {
    pub number: String,
    pub status: String,
    pub facing: String,
    pub land_area_sq_ft: f64,
    /// Land plus construction value, without the profit margin.
    pub base_value: f64,
    pub customer_name: Option<String>,
}

pub const PROJECT_OVERVIEW_FALLBACK: &str =
    "Failed to fetch AI insights. Please check your network connection.";
pub const PROJECT_OVERVIEW_EMPTY: &str = "Unable to generate summary at this time.";
pub const SITE_REPORT_FALLBACK: &str = "Could not generate AI report.";
pub const SITE_REPORT_EMPTY: &str = "Report unavailable.";

const PROJECT_TEMPERATURE: f32 = 0.7;
const SITE_TEMPERATURE: f32 = 0.5;

/// Build the executive-summary prompt from aggregate counts.
pub fn project_overview_prompt(stats: &ProjectStats) -> String {
    format!(
        "Generate a short executive summary for a real estate project manager based on these \
         stats for the project \"{}\" in \"{}\":\n\
         - Total Sites: {}\n\
         - Sold: {}\n\
         - Booked: {}\n\
         - Unsold: {}\n\
         Provide professional advice on sales strategy or market outlook in 3-4 sentences.",
        stats.name, stats.location, stats.total_sites, stats.sold, stats.booked, stats.unsold
    )
}

/// Build the per-site status-report prompt.
pub fn site_report_prompt(site: &SiteSnapshot) -> String {
    let mut prompt = format!(
        "Generate a concise 2-sentence professional status report for real estate site #{}.\n\
         Details:\n\
         - Status: {}\n\
         - Facing: {}\n\
         - Total Land Area: {} sq ft\n\
         - Total Calculated Value: \u{20b9}{}\n",
        site.number,
        site.status,
        site.facing,
        site.land_area_sq_ft,
        format_inr(site.base_value)
    );
    if let Some(name) = &site.customer_name {
        prompt.push_str(&format!("- Current Customer: {name}\n"));
    }
    prompt.push_str("\nFocus on the property's value proposition and current inventory status.");
    prompt
}

/// Project-level summary with fallback semantics.
pub async fn project_overview(provider: &dyn InsightsProvider, stats: &ProjectStats) -> String {
    match provider
        .generate(&project_overview_prompt(stats), PROJECT_TEMPERATURE)
        .await
    {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => PROJECT_OVERVIEW_EMPTY.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, project = %stats.name, "Project overview generation failed");
            PROJECT_OVERVIEW_FALLBACK.to_string()
        }
    }
}

/// Per-site report with fallback semantics.
pub async fn site_report(provider: &dyn InsightsProvider, site: &SiteSnapshot) -> String {
    match provider
        .generate(&site_report_prompt(site), SITE_TEMPERATURE)
        .await
    {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => SITE_REPORT_EMPTY.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, site = %site.number, "Site report generation failed");
            SITE_REPORT_FALLBACK.to_string()
        }
    }
}

/// Whole-rupee rendering with Indian digit grouping: the last three digits,
/// then groups of two (`10296000` -> `1,02,96,000`).
pub fn format_inr(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups = Vec::new();
        let head_bytes = head.as_bytes();
        let mut index = head_bytes.len();
        while index > 0 {
            let start = index.saturating_sub(2);
            groups.push(&head[start..index]);
            index = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::provider::{InsightsError, InsightsProvider};

    struct CannedProvider(&'static str);

    #[async_trait]
    impl InsightsProvider for CannedProvider {
        async fn generate(&self, _prompt: &str, _temperature: f32) -> Result<String, InsightsError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl InsightsProvider for FailingProvider {
        async fn generate(&self, _prompt: &str, _temperature: f32) -> Result<String, InsightsError> {
            Err(InsightsError::Request("connection reset".to_string()))
        }
    }

    fn stats() -> ProjectStats {
        ProjectStats {
            name: "Emerald Garden Heights".to_string(),
            location: "Bangalore, Karnataka".to_string(),
            total_sites: 24,
            sold: 5,
            booked: 6,
            unsold: 13,
        }
    }

    fn snapshot() -> SiteSnapshot {
        SiteSnapshot {
            number: "E-101".to_string(),
            status: "SOLD".to_string(),
            facing: "East".to_string(),
            land_area_sq_ft: 1200.0,
            base_value: 9_360_000.0,
            customer_name: Some("Rahul Sharma".to_string()),
        }
    }

    // -- prompts --

    #[test]
    fn project_prompt_embeds_identity_and_counts() {
        let prompt = project_overview_prompt(&stats());
        assert!(prompt.contains("\"Emerald Garden Heights\" in \"Bangalore, Karnataka\""));
        assert!(prompt.contains("- Total Sites: 24"));
        assert!(prompt.contains("- Sold: 5"));
        assert!(prompt.contains("- Booked: 6"));
        assert!(prompt.contains("- Unsold: 13"));
    }

    #[test]
    fn site_prompt_embeds_details_and_customer() {
        let prompt = site_report_prompt(&snapshot());
        assert!(prompt.contains("site #E-101"));
        assert!(prompt.contains("- Status: SOLD"));
        assert!(prompt.contains("- Total Land Area: 1200 sq ft"));
        assert!(prompt.contains("\u{20b9}93,60,000"));
        assert!(prompt.contains("- Current Customer: Rahul Sharma"));
    }

    #[test]
    fn site_prompt_omits_customer_line_when_absent() {
        let mut site = snapshot();
        site.customer_name = None;
        assert!(!site_report_prompt(&site).contains("Current Customer"));
    }

    // -- fallback behavior --

    #[tokio::test]
    async fn project_overview_falls_back_on_provider_error() {
        let summary = project_overview(&FailingProvider, &stats()).await;
        assert_eq!(summary, PROJECT_OVERVIEW_FALLBACK);
    }

    #[tokio::test]
    async fn project_overview_falls_back_on_empty_generation() {
        let summary = project_overview(&CannedProvider("  "), &stats()).await;
        assert_eq!(summary, PROJECT_OVERVIEW_EMPTY);
    }

    #[tokio::test]
    async fn project_overview_passes_generated_text_through() {
        let summary = project_overview(&CannedProvider("Sales are on track."), &stats()).await;
        assert_eq!(summary, "Sales are on track.");
    }

    #[tokio::test]
    async fn site_report_falls_back_on_provider_error() {
        let report = site_report(&FailingProvider, &snapshot()).await;
        assert_eq!(report, SITE_REPORT_FALLBACK);
    }

    #[tokio::test]
    async fn site_report_falls_back_on_empty_generation() {
        let report = site_report(&CannedProvider(""), &snapshot()).await;
        assert_eq!(report, SITE_REPORT_EMPTY);
    }

    // -- currency formatting --

    #[test]
    fn inr_grouping_matches_en_in() {
        assert_eq!(format_inr(0.0), "0");
        assert_eq!(format_inr(950.0), "950");
        assert_eq!(format_inr(1_000.0), "1,000");
        assert_eq!(format_inr(99_999.0), "99,999");
        assert_eq!(format_inr(100_000.0), "1,00,000");
        assert_eq!(format_inr(9_360_000.0), "93,60,000");
        assert_eq!(format_inr(10_296_000.0), "1,02,96,000");
    }

    #[test]
    fn inr_rounds_to_whole_rupees_and_keeps_sign() {
        assert_eq!(format_inr(1234.6), "1,235");
        assert_eq!(format_inr(-200_000.0), "-2,00,000");
    }
}
