//! Request handlers, one module per resource.

pub mod company_settings;
pub mod export;
pub mod insights;
pub mod payment;
pub mod project;
pub mod site;

use estatenexus_core::types::DbId;

/// Body for 201 responses: the id of the created row.
#[derive(Debug, serde::Serialize)]
pub struct Created {
    pub id: DbId,
}
