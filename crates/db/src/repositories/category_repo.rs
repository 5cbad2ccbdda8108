//! Repository for the `categories` table.
//!
//! Categories have no publish gate: the public and admin surfaces read the
//! same ordered set, optionally filtered by `category_type`.

use sqlx::PgPool;

use rynvlabs_core::ordering::ReorderItem;
use rynvlabs_core::slug::generate_slug;
use rynvlabs_core::types::DbId;

use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::repositories::ordered::OrderedCollection;

/// Column list for the `categories` table.
const COLUMNS: &str =
    "id, name, slug, category_type, color, sort_order, created_at, updated_at";

/// Ordering metadata for categories.
const ORDERING: OrderedCollection = OrderedCollection {
    table: "categories",
    flag_column: None,
    order_by: "sort_order, id",
};

/// Provides CRUD and ordering operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category. Slug defaults to the slugified name; sort
    /// order defaults to append-to-end.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let sort_order = match input.sort_order {
            Some(explicit) => explicit,
            None => ORDERING.next_sort_order(&mut tx).await?,
        };
        let slug = input
            .slug
            .clone()
            .unwrap_or_else(|| generate_slug(&input.name));

        let insert_query = format!(
            "INSERT INTO categories (name, slug, category_type, color, sort_order) \
             VALUES ($1, $2, upper($3), $4, $5) \
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&insert_query)
            .bind(&input.name)
            .bind(&slug)
            .bind(&input.category_type)
            .bind(&input.color)
            .bind(sort_order)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(category)
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List categories, optionally filtered by type, in display order.
    pub async fn list(
        pool: &PgPool,
        category_type: Option<&str>,
    ) -> Result<Vec<Category>, sqlx::Error> {
        match category_type {
            Some(category_type) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM categories WHERE category_type = upper($1) \
                     ORDER BY {order_by}",
                    order_by = ORDERING.order_by,
                );
                sqlx::query_as::<_, Category>(&query)
                    .bind(category_type)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM categories ORDER BY {order_by}",
                    order_by = ORDERING.order_by,
                );
                sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update a category. Only non-`None` fields are applied; the slug is
    /// recomputed only when the name changes without an explicit slug.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let existing = match Self::find_by_id(pool, id).await? {
            Some(category) => category,
            None => return Ok(None),
        };

        let slug = match (&input.slug, &input.name) {
            (Some(slug), _) => Some(slug.clone()),
            (None, Some(name)) if *name != existing.name => Some(generate_slug(name)),
            _ => None,
        };

        let update_query = format!(
            "UPDATE categories SET \
                name = COALESCE($2, name), \
                slug = COALESCE($3, slug), \
                category_type = COALESCE(upper($4), category_type), \
                color = COALESCE($5, color), \
                sort_order = COALESCE($6, sort_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&update_query)
            .bind(id)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.category_type)
            .bind(&input.color)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
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
