//! Repository for the `academy_projects` table.
//!
//! Academy case studies order by `year` descending before `sort_order`, and
//! the public list view additionally exposes the distinct published years
//! for building the filter UI.

use sqlx::PgPool;

use rynvlabs_core::ordering::ReorderItem;
use rynvlabs_core::slug::generate_slug;
use rynvlabs_core::types::DbId;

use crate::models::academy_project::{
    AcademyProject, CreateAcademyProject, UpdateAcademyProject,
};
use crate::repositories::ordered::{bind_filter, bind_filter_count, ListFilter, OrderedCollection};

/// Column list for the `academy_projects` table.
const COLUMNS: &str = "id, title, slug, description, tech_stack, abstract_text, \
    methodology, results, image, wiring_diagram, gallery, year, sort_order, \
    is_published, created_at, updated_at";

/// Ordering metadata for academy projects. Year partitions first; `id`
/// breaks sort-order ties within a year.
const ORDERING: OrderedCollection = OrderedCollection {
    table: "academy_projects",
    flag_column: Some("is_published"),
    order_by: "year DESC, sort_order, id",
};

/// Provides CRUD, list views, and ordering operations for academy projects.
pub struct AcademyProjectRepo;

impl AcademyProjectRepo {
    /// Insert a new academy project. Slug and sort order default the same
    /// way as projects (slugified title, append-to-end in-transaction).
    pub async fn create(
        pool: &PgPool,
        input: &CreateAcademyProject,
    ) -> Result<AcademyProject, sqlx::Error> {
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
            "INSERT INTO academy_projects \
                (title, slug, description, tech_stack, abstract_text, methodology, \
                 results, image, wiring_diagram, gallery, year, sort_order, is_published) \
             VALUES ($1, $2, $3, COALESCE($4, '[]'::jsonb), COALESCE($5, ''), \
                 COALESCE($6, ''), COALESCE($7, ''), $8, $9, \
                 COALESCE($10, '[]'::jsonb), $11, $12, COALESCE($13, false)) \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, AcademyProject>(&insert_query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(&input.tech_stack)
            .bind(&input.abstract_text)
            .bind(&input.methodology)
            .bind(&input.results)
            .bind(&input.image)
            .bind(&input.wiring_diagram)
            .bind(&input.gallery)
            .bind(input.year)
            .bind(sort_order)
            .bind(input.is_published)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(project)
    }

    /// Find an academy project by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AcademyProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM academy_projects WHERE id = $1");
        sqlx::query_as::<_, AcademyProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an academy project by its public slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<AcademyProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM academy_projects WHERE slug = $1");
        sqlx::query_as::<_, AcademyProject>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Public list view: published rows only, ordered, paginated.
    pub async fn list_public(
        pool: &PgPool,
        filter: &ListFilter,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<AcademyProject>, i64), sqlx::Error> {
        let (where_clause, bind_idx) = ORDERING.build_where(filter, true);

        let list_query = format!(
            "SELECT {COLUMNS} FROM academy_projects {where_clause} \
             ORDER BY {order_by} LIMIT ${limit_idx} OFFSET ${offset_idx}",
            order_by = ORDERING.order_by,
            limit_idx = bind_idx,
            offset_idx = bind_idx + 1,
        );
        let data = bind_filter(sqlx::query_as::<_, AcademyProject>(&list_query), filter)
            .bind(limit)
            .bind(rynvlabs_core::paging::page_offset(page, limit))
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM academy_projects {where_clause}");
        let total = bind_filter_count(sqlx::query_scalar(&count_query), filter)
            .fetch_one(pool)
            .await?;

        Ok((data, total))
    }

    /// Admin list view: every row, ordered, unpaginated.
    pub async fn list_admin(
        pool: &PgPool,
        filter: &ListFilter,
    ) -> Result<Vec<AcademyProject>, sqlx::Error> {
        let (where_clause, _) = ORDERING.build_where(filter, false);
        let query = format!(
            "SELECT {COLUMNS} FROM academy_projects {where_clause} ORDER BY {order_by}",
            order_by = ORDERING.order_by,
        );
        bind_filter(sqlx::query_as::<_, AcademyProject>(&query), filter)
            .fetch_all(pool)
            .await
    }

    /// Distinct years across all published rows, newest first. A separate
    /// query by design: it covers the whole collection, not the current page.
    pub async fn published_years(pool: &PgPool) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT DISTINCT year FROM academy_projects \
             WHERE is_published = true \
             ORDER BY year DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Update an academy project. Only non-`None` fields are applied; slug
    /// recomputation follows the shared changed-title rule.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAcademyProject,
    ) -> Result<Option<AcademyProject>, sqlx::Error> {
        let existing = match Self::find_by_id(pool, id).await? {
            Some(project) => project,
            None => return Ok(None),
        };

        let slug = match (&input.slug, &input.title) {
            (Some(slug), _) => Some(slug.clone()),
            (None, Some(title)) if *title != existing.title => Some(generate_slug(title)),
            _ => None,
        };

        let update_query = format!(
            "UPDATE academy_projects SET \
                title = COALESCE($2, title), \
                slug = COALESCE($3, slug), \
                description = COALESCE($4, description), \
                tech_stack = COALESCE($5, tech_stack), \
                abstract_text = COALESCE($6, abstract_text), \
                methodology = COALESCE($7, methodology), \
                results = COALESCE($8, results), \
                image = COALESCE($9, image), \
                wiring_diagram = COALESCE($10, wiring_diagram), \
                gallery = COALESCE($11, gallery), \
                year = COALESCE($12, year), \
                sort_order = COALESCE($13, sort_order), \
                is_published = COALESCE($14, is_published) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AcademyProject>(&update_query)
            .bind(id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.tech_stack)
            .bind(&input.abstract_text)
            .bind(&input.methodology)
            .bind(&input.results)
            .bind(&input.image)
            .bind(&input.wiring_diagram)
            .bind(&input.gallery)
            .bind(input.year)
            .bind(input.sort_order)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete an academy project by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM academy_projects WHERE id = $1")
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
