//! Project entity row and DTOs.

use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

use estatenexus_core::model::Project;
use estatenexus_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub launch_date: Option<NaiveDate>,
    pub image_urls: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectRow {
    /// Map to the domain entity. Sites are attached by the inventory loader.
    pub fn into_project(self) -> Project {
        Project {
            id: self.id,
            name: self.name,
            location: self.location,
            launch_date: self.launch_date,
            image_urls: self.image_urls,
            sites: Vec::new(),
        }
    }
}

/// DTO for creating a project. Name, location and launch date are required
/// at the input boundary.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1, message = "Project name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Project location must not be empty"))]
    pub location: String,
    pub launch_date: NaiveDate,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// DTO for the full-field project update (the edit form always submits
/// every field).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "Project name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Project location must not be empty"))]
    pub location: String,
    pub launch_date: Option<NaiveDate>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}
