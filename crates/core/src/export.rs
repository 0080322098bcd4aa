//! CSV export of a project's site inventory.
//!
//! The column order is fixed: identity, status, facing, customer, area,
//! dimensions, financials. Disabling a field group drops exactly that
//! group's columns; the relative order of the rest never changes. Text
//! identity/customer cells are quote-wrapped, numeric cells are plain
//! decimal text without currency symbols, and a missing customer renders
//! as the literal `N/A`.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::Site;
use crate::valuation::{display_cents, site_valuation, sq_ft_to_cents};

/// Field groups included in a report. Every group defaults to enabled.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSelection {
    pub number: bool,
    pub status: bool,
    pub customer: bool,
    pub facing: bool,
    pub dimensions: bool,
    pub area: bool,
    pub financials: bool,
}

impl Default for FieldSelection {
    fn default() -> Self {
        Self {
            number: true,
            status: true,
            customer: true,
            facing: true,
            dimensions: true,
            area: true,
            financials: true,
        }
    }
}

/// Header row for the enabled field groups, in canonical column order.
pub fn headers(fields: &FieldSelection) -> Vec<&'static str> {
    let mut headers = Vec::new();
    if fields.number {
        headers.push("Site Number");
    }
    if fields.status {
        headers.push("Status");
    }
    if fields.facing {
        headers.push("Facing");
    }
    if fields.customer {
        headers.push("Customer Name");
        headers.push("Customer Phone");
    }
    if fields.area {
        headers.push("Area (SqFt)");
        headers.push("Area (Cents)");
    }
    if fields.dimensions {
        headers.push("North (ft)");
        headers.push("South (ft)");
        headers.push("East (ft)");
        headers.push("West (ft)");
    }
    if fields.financials {
        headers.push("Plot Rate/SqFt");
        headers.push("Plot Value");
        headers.push("Const Area");
        headers.push("Const Rate");
        headers.push("Const Value");
        headers.push("Base Value");
        headers.push("Profit Margin %");
        headers.push("Total Projected Value");
    }
    headers
}

/// Render the full report: one header row plus one row per site.
///
/// Every cell is derivable from the valuation calculator plus raw entity
/// fields; no extra computation happens here.
pub fn render_csv(sites: &[&Site], fields: &FieldSelection) -> String {
    let mut lines = Vec::with_capacity(sites.len() + 1);
    lines.push(headers(fields).join(","));
    for site in sites {
        lines.push(row(site, fields));
    }
    lines.join("\n")
}

/// Attachment filename for a report: whitespace runs in the project name
/// collapse to single underscores.
pub fn report_filename(project_name: &str, date: NaiveDate) -> String {
    let mut slug = String::with_capacity(project_name.len());
    let mut in_whitespace = false;
    for ch in project_name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('_');
            }
            in_whitespace = true;
        } else {
            slug.push(ch);
            in_whitespace = false;
        }
    }
    format!("{slug}_Report_{date}.csv")
}

fn row(site: &Site, fields: &FieldSelection) -> String {
    let value = site_valuation(site);
    let mut cells: Vec<String> = Vec::new();

    if fields.number {
        cells.push(quoted(&site.number));
    }
    if fields.status {
        cells.push(site.status.as_str().to_string());
    }
    if fields.facing {
        cells.push(site.facing.clone());
    }
    if fields.customer {
        cells.push(quoted(customer_cell(site.customer_name.as_deref())));
        cells.push(quoted(customer_cell(site.customer_phone.as_deref())));
    }
    if fields.area {
        cells.push(number(site.land_area_sq_ft));
        cells.push(display_cents(sq_ft_to_cents(site.land_area_sq_ft)));
    }
    if fields.dimensions {
        cells.push(number(site.dimensions.north));
        cells.push(number(site.dimensions.south));
        cells.push(number(site.dimensions.east));
        cells.push(number(site.dimensions.west));
    }
    if fields.financials {
        cells.push(number(site.land_cost_per_sq_ft));
        cells.push(number(value.land_value));
        cells.push(number(site.construction_area_sq_ft));
        cells.push(number(site.construction_rate_per_sq_ft));
        cells.push(number(value.construction_value));
        cells.push(number(value.base_value));
        cells.push(number(site.profit_margin_percentage.unwrap_or(0.0)));
        cells.push(number(value.projected_total_value));
    }

    cells.join(",")
}

fn customer_cell(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => "N/A",
    }
}

fn quoted(text: &str) -> String {
    format!("\"{text}\"")
}

fn number(value: f64) -> String {
    format!("{value}")
}
