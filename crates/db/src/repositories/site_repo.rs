//! Repository for the `sites` table.

use sqlx::PgPool;

use estatenexus_core::types::DbId;
use estatenexus_core::valuation;

use crate::models::site::{CreateSite, SiteRow, UpdateSite};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, number, status, customer_name, customer_phone, facing, \
                       north_ft, south_ft, east_ft, west_ft, \
                       land_area_sqft, land_cost_per_sqft, \
                       construction_area_sqft, construction_rate_per_sqft, \
                       profit_margin_percentage, image_urls, tags, \
                       projected_completion_date, booking_date, sale_date, \
                       created_at, updated_at";

/// Provides CRUD operations for sites.
pub struct SiteRepo;

impl SiteRepo {
    /// Insert a new site under a project, returning the created row.
    ///
    /// The stored `land_area_sqft` is derived from the submitted dimensions
    /// here; callers cannot store a contradicting value at creation time.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateSite,
    ) -> Result<SiteRow, sqlx::Error> {
        let land_area_sqft = valuation::land_area_sq_ft(&input.dimensions);
        let query = format!(
            "INSERT INTO sites (project_id, number, status, customer_name, customer_phone, facing,
                                north_ft, south_ft, east_ft, west_ft,
                                land_area_sqft, land_cost_per_sqft,
                                construction_area_sqft, construction_rate_per_sqft,
                                profit_margin_percentage, image_urls, tags,
                                projected_completion_date, booking_date, sale_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                     $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteRow>(&query)
            .bind(project_id)
            .bind(&input.number)
            .bind(input.status.as_str())
            .bind(&input.customer_name)
            .bind(&input.customer_phone)
            .bind(&input.facing)
            .bind(input.dimensions.north)
            .bind(input.dimensions.south)
            .bind(input.dimensions.east)
            .bind(input.dimensions.west)
            .bind(land_area_sqft)
            .bind(input.land_cost_per_sq_ft)
            .bind(input.construction_area_sq_ft)
            .bind(input.construction_rate_per_sq_ft)
            .bind(input.profit_margin_percentage)
            .bind(&input.image_urls)
            .bind(&input.tags)
            .bind(input.projected_completion_date)
            .bind(input.booking_date)
            .bind(input.sale_date)
            .fetch_one(pool)
            .await
    }

    /// Find a site by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SiteRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sites WHERE id = $1");
        sqlx::query_as::<_, SiteRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every site of one project, in creation order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<SiteRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sites WHERE project_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, SiteRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List all sites across projects; the inventory loader groups them.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SiteRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sites ORDER BY id ASC");
        sqlx::query_as::<_, SiteRow>(&query).fetch_all(pool).await
    }

    /// Sparse partial update. Only non-`None` fields in `input` are applied;
    /// everything else keeps its stored value.
    ///
    /// The persisted land area comes from [`UpdateSite::effective_land_area`]:
    /// recomputed from the patch's dimensions when present, a direct override
    /// otherwise, untouched when the patch carries neither.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSite,
    ) -> Result<Option<SiteRow>, sqlx::Error> {
        let dims = input.dimensions.as_ref();
        let query = format!(
            "UPDATE sites SET
                number = COALESCE($2, number),
                status = COALESCE($3, status),
                customer_name = COALESCE($4, customer_name),
                customer_phone = COALESCE($5, customer_phone),
                facing = COALESCE($6, facing),
                north_ft = COALESCE($7, north_ft),
                south_ft = COALESCE($8, south_ft),
                east_ft = COALESCE($9, east_ft),
                west_ft = COALESCE($10, west_ft),
                land_area_sqft = COALESCE($11, land_area_sqft),
                land_cost_per_sqft = COALESCE($12, land_cost_per_sqft),
                construction_area_sqft = COALESCE($13, construction_area_sqft),
                construction_rate_per_sqft = COALESCE($14, construction_rate_per_sqft),
                profit_margin_percentage = COALESCE($15, profit_margin_percentage),
                image_urls = COALESCE($16, image_urls),
                tags = COALESCE($17, tags),
                projected_completion_date = COALESCE($18, projected_completion_date),
                booking_date = COALESCE($19, booking_date),
                sale_date = COALESCE($20, sale_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteRow>(&query)
            .bind(id)
            .bind(&input.number)
            .bind(input.status.map(|s| s.as_str()))
            .bind(&input.customer_name)
            .bind(&input.customer_phone)
            .bind(&input.facing)
            .bind(dims.map(|d| d.north))
            .bind(dims.map(|d| d.south))
            .bind(dims.map(|d| d.east))
            .bind(dims.map(|d| d.west))
            .bind(input.effective_land_area())
            .bind(input.land_cost_per_sq_ft)
            .bind(input.construction_area_sq_ft)
            .bind(input.construction_rate_per_sq_ft)
            .bind(input.profit_margin_percentage)
            .bind(&input.image_urls)
            .bind(&input.tags)
            .bind(input.projected_completion_date)
            .bind(input.booking_date)
            .bind(input.sale_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a site by ID. Returns `true` if a row was removed. The
    /// payment ledger cascades in the store.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sites WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
