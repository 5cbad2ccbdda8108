//! Reorder payload shape and validation.
//!
//! Admin clients submit a full or partial new display order for one resource
//! type as a list of `{id, sort_order}` pairs. The payload is validated here,
//! before any persistence call; referential checks (does each id exist in the
//! target table?) happen inside the reorder transaction itself.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// One entry of a bulk reorder request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderItem {
    pub id: DbId,
    pub sort_order: i32,
}

/// Validate a reorder payload before it reaches the repository layer.
///
/// The list must be non-empty and every id must be a plausible primary key.
/// Duplicate ids are allowed: pairs apply in list order, so the last value
/// submitted for an id wins. Duplicate `sort_order` values are allowed too;
/// the stored tie-break (ascending id) keeps the resulting order stable.
pub fn validate_reorder(items: &[ReorderItem]) -> Result<(), CoreError> {
    if items.is_empty() {
        return Err(CoreError::Validation(
            "Reorder payload must contain at least one item".into(),
        ));
    }
    if let Some(item) = items.iter().find(|item| item.id < 1) {
        return Err(CoreError::Validation(format!(
            "Reorder payload contains invalid id {}",
            item.id
        )));
    }
    Ok(())
}
