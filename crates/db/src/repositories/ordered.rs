//! Generic ordered-collection operations shared by every content resource.
//!
//! Each content table carries an integer `sort_order` column and, for some
//! resources, a publish/visibility flag. The same operations recur for all
//! of them: append-to-end order assignment on create, atomic bulk reorder,
//! flag toggling, and the two ordered read views (public-filtered and
//! admin-raw). This module implements them once, parameterized by
//! per-resource metadata; each repository declares a `const`
//! [`OrderedCollection`] and delegates.
//!
//! Ordering invariant: ascending `sort_order` with ascending `id` as the
//! tie-break (id order equals insertion order). `sort_order` values need
//! not be unique or contiguous; deletes never renumber.

use sqlx::{PgPool, Postgres, Transaction};

use rynvlabs_core::ordering::ReorderItem;
use rynvlabs_core::types::DbId;

/// Per-resource metadata consumed by the generic ordering operations.
///
/// All fields are compile-time constants declared by the owning repository;
/// they are interpolated into SQL and must never carry user input.
pub struct OrderedCollection {
    /// Table name.
    pub table: &'static str,
    /// Publish/visibility column, if the resource has one.
    pub flag_column: Option<&'static str>,
    /// Full ORDER BY expression, ending in `id` for a stable tie-break.
    pub order_by: &'static str,
}

/// Facet value for exact-match filtering, tagged by column type.
#[derive(Debug, Clone)]
pub enum Facet {
    /// Text facet (project/product category, category type).
    Text(String),
    /// Integer facet (academy year).
    Year(i32),
}

/// Optional filters shared by the public and admin list views.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Case-insensitive substring match against title and description.
    pub search: Option<String>,
    /// Exact match on a facet column.
    pub facet: Option<(&'static str, Facet)>,
}

impl ListFilter {
    /// Filter on a facet column only.
    pub fn facet(column: &'static str, value: Facet) -> Self {
        Self {
            search: None,
            facet: Some((column, value)),
        }
    }
}

impl OrderedCollection {
    /// Next append-to-end sort order: `max(sort_order) + 1`, or `1` for an
    /// empty table. Unpublished rows count too. Runs on the caller's
    /// transaction so read-then-insert is one atomic unit.
    pub async fn next_sort_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i32, sqlx::Error> {
        let query = format!(
            "SELECT COALESCE(MAX(sort_order), 0) + 1 FROM {}",
            self.table
        );
        let (next,): (i32,) = sqlx::query_as(&query).fetch_one(&mut **tx).await?;
        Ok(next)
    }

    /// Atomically rewrite `sort_order` for every listed row.
    ///
    /// All updates run in one transaction. A pair whose `id` does not exist
    /// in this table aborts the whole batch: nothing commits and the caller
    /// sees [`sqlx::Error::RowNotFound`]. Pairs apply in list order, so a
    /// duplicated id ends up with the last value submitted for it; the
    /// final display order is a function of the stored values only.
    pub async fn reorder(&self, pool: &PgPool, items: &[ReorderItem]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!("UPDATE {} SET sort_order = $2 WHERE id = $1", self.table);

        for item in items {
            let result = sqlx::query(&query)
                .bind(item.id)
                .bind(item.sort_order)
                .execute(&mut *tx)
                .await?;
            if result.rows_affected() == 0 {
                // Dropping the transaction rolls everything back.
                return Err(sqlx::Error::RowNotFound);
            }
        }

        tx.commit().await?;
        Ok(())
    }

    /// Set or invert the resource's publish/visibility flag on one row.
    ///
    /// `explicit` sets the flag directly; `None` inverts the stored value.
    /// Returns `false` when no row with the given id exists.
    pub async fn set_flag(
        &self,
        pool: &PgPool,
        id: DbId,
        explicit: Option<bool>,
    ) -> Result<bool, sqlx::Error> {
        let column = self
            .flag_column
            .expect("set_flag on a resource without a publish flag");
        let query = format!(
            "UPDATE {table} SET {column} = COALESCE($2, NOT {column}) WHERE id = $1",
            table = self.table,
            column = column,
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(explicit)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Build the WHERE clause for a list read.
    ///
    /// Conditions render in a fixed bind order -- search term first, facet
    /// second -- so callers bind parameters the same way. Returns the
    /// clause (empty string when unconditional) and the next free bind
    /// index for LIMIT/OFFSET. `published_only` adds the resource's flag
    /// condition without consuming a bind slot; it is a no-op for
    /// resources without a flag.
    pub fn build_where(&self, filter: &ListFilter, published_only: bool) -> (String, u32) {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1u32;

        if published_only {
            if let Some(column) = self.flag_column {
                conditions.push(format!("{column} = true"));
            }
        }
        if filter.search.is_some() {
            conditions.push(format!(
                "(title ILIKE ${bind_idx} OR description ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if let Some((column, _)) = &filter.facet {
            conditions.push(format!("{column} = ${bind_idx}"));
            bind_idx += 1;
        }

        let clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        (clause, bind_idx)
    }
}

/// Bind the filter parameters in the fixed order produced by
/// [`OrderedCollection::build_where`]: search term, then facet value.
pub fn bind_filter<'q, O>(
    mut q: sqlx::query::QueryAs<'q, Postgres, O, sqlx::postgres::PgArguments>,
    filter: &'q ListFilter,
) -> sqlx::query::QueryAs<'q, Postgres, O, sqlx::postgres::PgArguments> {
    if let Some(term) = &filter.search {
        q = q.bind(format!("%{term}%"));
    }
    if let Some((_, facet)) = &filter.facet {
        q = match facet {
            Facet::Text(value) => q.bind(value),
            Facet::Year(year) => q.bind(*year),
        };
    }
    q
}

/// Same as [`bind_filter`], for scalar (COUNT) queries.
pub fn bind_filter_count<'q>(
    mut q: sqlx::query::QueryScalar<'q, Postgres, i64, sqlx::postgres::PgArguments>,
    filter: &'q ListFilter,
) -> sqlx::query::QueryScalar<'q, Postgres, i64, sqlx::postgres::PgArguments> {
    if let Some(term) = &filter.search {
        q = q.bind(format!("%{term}%"));
    }
    if let Some((_, facet)) = &filter.facet {
        q = match facet {
            Facet::Text(value) => q.bind(value),
            Facet::Year(year) => q.bind(*year),
        };
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECTS: OrderedCollection = OrderedCollection {
        table: "projects",
        flag_column: Some("is_published"),
        order_by: "sort_order, id",
    };

    const CATEGORIES: OrderedCollection = OrderedCollection {
        table: "categories",
        flag_column: None,
        order_by: "sort_order, id",
    };

    #[test]
    fn where_clause_empty_without_filters() {
        let (clause, next) = PROJECTS.build_where(&ListFilter::default(), false);
        assert_eq!(clause, "");
        assert_eq!(next, 1);
    }

    #[test]
    fn where_clause_published_only() {
        let (clause, next) = PROJECTS.build_where(&ListFilter::default(), true);
        assert_eq!(clause, "WHERE is_published = true");
        assert_eq!(next, 1);
    }

    #[test]
    fn where_clause_search_and_facet() {
        let filter = ListFilter {
            search: Some("robot".into()),
            facet: Some(("category", Facet::Text("IOT".into()))),
        };
        let (clause, next) = PROJECTS.build_where(&filter, true);
        assert_eq!(
            clause,
            "WHERE is_published = true AND (title ILIKE $1 OR description ILIKE $1) AND category = $2"
        );
        assert_eq!(next, 3);
    }

    #[test]
    fn published_only_ignored_without_flag() {
        let (clause, _) = CATEGORIES.build_where(&ListFilter::default(), true);
        assert_eq!(clause, "");
    }
}
