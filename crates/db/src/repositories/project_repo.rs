//! Repository for the `projects` table.

use sqlx::PgPool;

use rynvlabs_core::ordering::ReorderItem;
use rynvlabs_core::slug::generate_slug;
use rynvlabs_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::ordered::{bind_filter, bind_filter_count, ListFilter, OrderedCollection};

/// Column list for the `projects` table.
const COLUMNS: &str = "id, title, slug, description, category, image, tech_stack, \
    challenge, solution, deep_dive, gallery, stats, sort_order, is_published, \
    created_at, updated_at";

/// Ordering metadata for projects.
const ORDERING: OrderedCollection = OrderedCollection {
    table: "projects",
    flag_column: Some("is_published"),
    order_by: "sort_order, id",
};

/// Provides CRUD, list views, and ordering operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project.
    ///
    /// The slug defaults to the slugified title; the sort order defaults to
    /// append-to-end, computed in the same transaction as the insert.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
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
            "INSERT INTO projects \
                (title, slug, description, category, image, tech_stack, \
                 challenge, solution, deep_dive, gallery, stats, sort_order, is_published) \
             VALUES ($1, $2, $3, upper($4), $5, COALESCE($6, '[]'::jsonb), \
                 COALESCE($7, ''), COALESCE($8, ''), COALESCE($9, ''), \
                 COALESCE($10, '[]'::jsonb), COALESCE($11, '[]'::jsonb), $12, \
                 COALESCE($13, false)) \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&insert_query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.image)
            .bind(&input.tech_stack)
            .bind(&input.challenge)
            .bind(&input.solution)
            .bind(&input.deep_dive)
            .bind(&input.gallery)
            .bind(&input.stats)
            .bind(sort_order)
            .bind(input.is_published)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(project)
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its public slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Public list view: published rows only, ordered, paginated.
    ///
    /// Returns the page slice plus the pre-pagination match count.
    pub async fn list_public(
        pool: &PgPool,
        filter: &ListFilter,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Project>, i64), sqlx::Error> {
        let (where_clause, bind_idx) = ORDERING.build_where(filter, true);

        let list_query = format!(
            "SELECT {COLUMNS} FROM projects {where_clause} \
             ORDER BY {order_by} LIMIT ${limit_idx} OFFSET ${offset_idx}",
            order_by = ORDERING.order_by,
            limit_idx = bind_idx,
            offset_idx = bind_idx + 1,
        );
        let mut q = sqlx::query_as::<_, Project>(&list_query);
        q = bind_filter(q, filter);
        let data = q
            .bind(limit)
            .bind(rynvlabs_core::paging::page_offset(page, limit))
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM projects {where_clause}");
        let total = bind_filter_count(sqlx::query_scalar(&count_query), filter)
            .fetch_one(pool)
            .await?;

        Ok((data, total))
    }

    /// Admin list view: every row regardless of publish state, ordered,
    /// unpaginated.
    pub async fn list_admin(pool: &PgPool, filter: &ListFilter) -> Result<Vec<Project>, sqlx::Error> {
        let (where_clause, _) = ORDERING.build_where(filter, false);
        let query = format!(
            "SELECT {COLUMNS} FROM projects {where_clause} ORDER BY {order_by}",
            order_by = ORDERING.order_by,
        );
        let mut q = sqlx::query_as::<_, Project>(&query);
        q = bind_filter(q, filter);
        q.fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields are applied.
    ///
    /// The slug is recomputed from the new title only when the title changes
    /// and no explicit slug is supplied. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let existing = match Self::find_by_id(pool, id).await? {
            Some(project) => project,
            None => return Ok(None),
        };

        let slug = resolve_slug(&input.slug, &input.title, &existing.title);

        let update_query = format!(
            "UPDATE projects SET \
                title = COALESCE($2, title), \
                slug = COALESCE($3, slug), \
                description = COALESCE($4, description), \
                category = COALESCE(upper($5), category), \
                image = COALESCE($6, image), \
                tech_stack = COALESCE($7, tech_stack), \
                challenge = COALESCE($8, challenge), \
                solution = COALESCE($9, solution), \
                deep_dive = COALESCE($10, deep_dive), \
                gallery = COALESCE($11, gallery), \
                stats = COALESCE($12, stats), \
                sort_order = COALESCE($13, sort_order), \
                is_published = COALESCE($14, is_published) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&update_query)
            .bind(id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.image)
            .bind(&input.tech_stack)
            .bind(&input.challenge)
            .bind(&input.solution)
            .bind(&input.deep_dive)
            .bind(&input.gallery)
            .bind(&input.stats)
            .bind(input.sort_order)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was deleted.
    ///
    /// Gaps left in `sort_order` are permitted; nothing is renumbered.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
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

/// Resolve the slug to store on update: explicit wins, otherwise recompute
/// from a changed title, otherwise leave the stored slug untouched (`None`
/// feeds the COALESCE in the UPDATE).
fn resolve_slug(
    explicit: &Option<String>,
    new_title: &Option<String>,
    existing_title: &str,
) -> Option<String> {
    match (explicit, new_title) {
        (Some(slug), _) => Some(slug.clone()),
        (None, Some(title)) if title != existing_title => Some(generate_slug(title)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_slug;

    #[test]
    fn explicit_slug_wins() {
        let slug = resolve_slug(
            &Some("custom".into()),
            &Some("New Title".into()),
            "Old Title",
        );
        assert_eq!(slug.as_deref(), Some("custom"));
    }

    #[test]
    fn changed_title_recomputes() {
        let slug = resolve_slug(&None, &Some("New Title".into()), "Old Title");
        assert_eq!(slug.as_deref(), Some("new-title"));
    }

    #[test]
    fn unchanged_title_keeps_stored_slug() {
        let slug = resolve_slug(&None, &Some("Old Title".into()), "Old Title");
        assert_eq!(slug, None);
    }

    #[test]
    fn no_title_keeps_stored_slug() {
        let slug = resolve_slug(&None, &None, "Old Title");
        assert_eq!(slug, None);
    }
}
