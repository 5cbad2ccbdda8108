//! Repository for the `tech_stacks` table.

use sqlx::PgPool;

use rynvlabs_core::ordering::ReorderItem;
use rynvlabs_core::types::DbId;

use crate::models::tech_stack::{CreateTechStack, TechStack, UpdateTechStack};
use crate::repositories::ordered::OrderedCollection;

/// Column list for the `tech_stacks` table.
const COLUMNS: &str = "id, name, icon, color, sort_order, created_at, updated_at";

/// Ordering metadata for tech stack badges.
const ORDERING: OrderedCollection = OrderedCollection {
    table: "tech_stacks",
    flag_column: None,
    order_by: "sort_order, id",
};

/// Provides CRUD and ordering operations for tech stack entries.
pub struct TechStackRepo;

impl TechStackRepo {
    /// Insert a new tech stack entry. `name` is unique per table; a
    /// duplicate surfaces as a constraint violation.
    pub async fn create(pool: &PgPool, input: &CreateTechStack) -> Result<TechStack, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let sort_order = match input.sort_order {
            Some(explicit) => explicit,
            None => ORDERING.next_sort_order(&mut tx).await?,
        };

        let insert_query = format!(
            "INSERT INTO tech_stacks (name, icon, color, sort_order) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let tech_stack = sqlx::query_as::<_, TechStack>(&insert_query)
            .bind(&input.name)
            .bind(&input.icon)
            .bind(&input.color)
            .bind(sort_order)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(tech_stack)
    }

    /// Find a tech stack entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TechStack>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tech_stacks WHERE id = $1");
        sqlx::query_as::<_, TechStack>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tech stack entries in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<TechStack>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tech_stacks ORDER BY {order_by}",
            order_by = ORDERING.order_by,
        );
        sqlx::query_as::<_, TechStack>(&query).fetch_all(pool).await
    }

    /// Update a tech stack entry. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTechStack,
    ) -> Result<Option<TechStack>, sqlx::Error> {
        let update_query = format!(
            "UPDATE tech_stacks SET \
                name = COALESCE($2, name), \
                icon = COALESCE($3, icon), \
                color = COALESCE($4, color), \
                sort_order = COALESCE($5, sort_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TechStack>(&update_query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.icon)
            .bind(&input.color)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tech stack entry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tech_stacks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically apply a bulk reorder. See [`OrderedCollection::reorder`].
    pub async fn reorder(pool: &PgPool, items: &[ReorderItem]) -> Result<(), sqlx::Error> {
        ORDERING.reorder(pool, items).await
    }
}
