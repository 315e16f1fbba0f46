//! Catalog document loaders.
//!
//! Each catalog is a JSON array maintained outside this tool. A missing or
//! malformed document is a hard error carrying the offending path; there is
//! no partial-load or repair path.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::catalog::errors::CatalogError;
use crate::catalog::types::{
    BotRecord, Catalog, ItemRecord, ProjectRecord, QuestRecord, WorkbenchRecord,
};
use crate::config::DatabaseConfig;

fn load_document<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load the items catalog (pristine or enriched; derived fields default).
pub fn load_items_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<ItemRecord>, CatalogError> {
    load_document(path)
}

/// Load the bots catalog consumed by the enrichment pass.
pub fn load_bots_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<BotRecord>, CatalogError> {
    load_document(path)
}

/// Load the quests catalog.
pub fn load_quests_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuestRecord>, CatalogError> {
    load_document(path)
}

/// Load the workbench/hideout catalog.
pub fn load_workbenches_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<WorkbenchRecord>, CatalogError> {
    load_document(path)
}

/// Load the projects catalog.
pub fn load_projects_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<ProjectRecord>, CatalogError> {
    load_document(path)
}

/// Overwrite the items document in place, pretty-printed with two-space
/// indentation to keep diffs reviewable in the upstream data repo.
pub fn save_items_to_json<P: AsRef<Path>>(
    path: P,
    items: &[ItemRecord],
) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let contents = to_pretty_json(path, items)?;
    fs::write(path, contents)?;
    Ok(())
}

fn to_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<String, CatalogError> {
    serde_json::to_string_pretty(value).map_err(|e| CatalogError::Serialize {
        path: path.display().to_string(),
        source: e,
    })
}

impl Catalog {
    /// Load the four runtime catalogs from the configured data directory.
    pub fn load_dir(db: &DatabaseConfig) -> Result<Self, CatalogError> {
        Ok(Catalog {
            items: load_items_from_json(db.items_path())?,
            quests: load_quests_from_json(db.quests_path())?,
            workbenches: load_workbenches_from_json(db.workbenches_path())?,
            projects: load_projects_from_json(db.projects_path())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_nonexistent_file_is_io_error() {
        let result = load_items_from_json("nonexistent.json");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
