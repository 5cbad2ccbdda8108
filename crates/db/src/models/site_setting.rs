//! Site-wide key/value settings model.

use rynvlabs_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `site_settings` table.
///
/// Settings are free-form JSON values under a unique string key (brand
/// name, contact links, footer text, ...). Writes are atomic upserts;
/// concurrent writers are last-write-wins.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSetting {
    pub id: DbId,
    pub key: String,
    pub value: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
