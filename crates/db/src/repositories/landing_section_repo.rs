//! Repository for the `landing_sections` table.
//!
//! Sections are a fixed, migration-seeded set addressed by `section_key`.
//! No create or delete operations exist; the API surface is list, update,
//! visibility toggle, and reorder.

use sqlx::PgPool;

use rynvlabs_core::ordering::ReorderItem;

use crate::models::landing_section::{LandingSection, UpdateLandingSection};
use crate::repositories::ordered::OrderedCollection;

/// Column list for the `landing_sections` table.
const COLUMNS: &str = "id, section_key, title, subtitle, content, is_visible, \
    sort_order, created_at, updated_at";

/// Ordering metadata for landing sections.
const ORDERING: OrderedCollection = OrderedCollection {
    table: "landing_sections",
    flag_column: Some("is_visible"),
    order_by: "sort_order, id",
};

/// Provides read, update, visibility, and ordering operations for landing
/// sections.
pub struct LandingSectionRepo;

impl LandingSectionRepo {
    /// Public list view: visible sections only, in display order.
    pub async fn list_visible(pool: &PgPool) -> Result<Vec<LandingSection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM landing_sections WHERE is_visible = true \
             ORDER BY {order_by}",
            order_by = ORDERING.order_by,
        );
        sqlx::query_as::<_, LandingSection>(&query)
            .fetch_all(pool)
            .await
    }

    /// Admin list view: every section regardless of visibility, in display
    /// order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<LandingSection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM landing_sections ORDER BY {order_by}",
            order_by = ORDERING.order_by,
        );
        sqlx::query_as::<_, LandingSection>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a section by its natural key.
    pub async fn find_by_key(
        pool: &PgPool,
        section_key: &str,
    ) -> Result<Option<LandingSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM landing_sections WHERE section_key = $1");
        sqlx::query_as::<_, LandingSection>(&query)
            .bind(section_key)
            .fetch_optional(pool)
            .await
    }

    /// Update a section's content by natural key. Only non-`None` fields
    /// are applied. Returns `None` if the key matches no section.
    pub async fn update_by_key(
        pool: &PgPool,
        section_key: &str,
        input: &UpdateLandingSection,
    ) -> Result<Option<LandingSection>, sqlx::Error> {
        let update_query = format!(
            "UPDATE landing_sections SET \
                title = COALESCE($2, title), \
                subtitle = COALESCE($3, subtitle), \
                content = COALESCE($4, content), \
                is_visible = COALESCE($5, is_visible) \
             WHERE section_key = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LandingSection>(&update_query)
            .bind(section_key)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.content)
            .bind(input.is_visible)
            .fetch_optional(pool)
            .await
    }

    /// Set or invert `is_visible` by natural key. `explicit` sets the flag
    /// directly; `None` inverts the stored value. Returns the updated
    /// section, or `None` if the key matches no section.
    pub async fn set_visibility_by_key(
        pool: &PgPool,
        section_key: &str,
        explicit: Option<bool>,
    ) -> Result<Option<LandingSection>, sqlx::Error> {
        let query = format!(
            "UPDATE landing_sections SET is_visible = COALESCE($2, NOT is_visible) \
             WHERE section_key = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LandingSection>(&query)
            .bind(section_key)
            .bind(explicit)
            .fetch_optional(pool)
            .await
    }

    /// Atomically apply a bulk reorder. See [`OrderedCollection::reorder`].
    pub async fn reorder(pool: &PgPool, items: &[ReorderItem]) -> Result<(), sqlx::Error> {
        ORDERING.reorder(pool, items).await
    }
}
