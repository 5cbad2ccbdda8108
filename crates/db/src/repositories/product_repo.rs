//! Repository for the `products` table.

use sqlx::PgPool;

use rynvlabs_core::ordering::ReorderItem;
use rynvlabs_core::slug::generate_slug;
use rynvlabs_core::types::DbId;

use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::repositories::ordered::OrderedCollection;

/// Column list for the `products` table.
const COLUMNS: &str = "id, title, slug, description, category, image, features, \
    specs, stats, background, solution, sort_order, is_published, \
    created_at, updated_at";

/// Ordering metadata for products.
const ORDERING: OrderedCollection = OrderedCollection {
    table: "products",
    flag_column: Some("is_published"),
    order_by: "sort_order, id",
};

/// Provides CRUD, list views, and ordering operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let sort_order = match input.sort_order {
            Some(explicit) => explicit,
            None => ORDERING.next_sort_order(&mut tx).await?,
        };
        let slug = input
            .slug
            .clone()
            .unwrap_or_else(|| generate_slug(&input.title));

        let insert_query = format!(
            "INSERT INTO products \
                (title, slug, description, category, image, features, specs, \
                 stats, background, solution, sort_order, is_published) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, '[]'::jsonb), \
                 COALESCE($7, ''), COALESCE($8, '[]'::jsonb), COALESCE($9, ''), \
                 COALESCE($10, ''), $11, COALESCE($12, false)) \
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&insert_query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.image)
            .bind(&input.features)
            .bind(&input.specs)
            .bind(&input.stats)
            .bind(&input.background)
            .bind(&input.solution)
            .bind(sort_order)
            .bind(input.is_published)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(product)
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a product by its public slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE slug = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Public list view: published rows only, ordered. Products are few;
    /// the public view is deliberately unpaginated.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products WHERE is_published = true ORDER BY {order_by}",
            order_by = ORDERING.order_by,
        );
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Admin list view: every row regardless of publish state, ordered.
    pub async fn list_admin(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products ORDER BY {order_by}",
            order_by = ORDERING.order_by,
        );
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Update a product. Only non-`None` fields are applied; slug
    /// recomputation follows the shared changed-title rule.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let existing = match Self::find_by_id(pool, id).await? {
            Some(product) => product,
            None => return Ok(None),
        };

        let slug = match (&input.slug, &input.title) {
            (Some(slug), _) => Some(slug.clone()),
            (None, Some(title)) if *title != existing.title => Some(generate_slug(title)),
            _ => None,
        };

        let update_query = format!(
            "UPDATE products SET \
                title = COALESCE($2, title), \
                slug = COALESCE($3, slug), \
                description = COALESCE($4, description), \
                category = COALESCE($5, category), \
                image = COALESCE($6, image), \
                features = COALESCE($7, features), \
                specs = COALESCE($8, specs), \
                stats = COALESCE($9, stats), \
                background = COALESCE($10, background), \
                solution = COALESCE($11, solution), \
                sort_order = COALESCE($12, sort_order), \
                is_published = COALESCE($13, is_published) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&update_query)
            .bind(id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.image)
            .bind(&input.features)
            .bind(&input.specs)
            .bind(&input.stats)
            .bind(&input.background)
            .bind(&input.solution)
            .bind(input.sort_order)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically apply a bulk reorder. See [`OrderedCollection::reorder`].
    pub async fn reorder(pool: &PgPool, items: &[ReorderItem]) -> Result<(), sqlx::Error> {
        ORDERING.reorder(pool, items).await
    }

    /// Set or invert `is_published`. Returns `false` if no row exists.
    pub async fn set_published(
        pool: &PgPool,
        id: DbId,
        explicit: Option<bool>,
    ) -> Result<bool, sqlx::Error> {
        ORDERING.set_flag(pool, id, explicit).await
    }
}
