//! Catalog data model and document loaders.
//!
//! The catalogs are static JSON arrays authored and maintained outside this
//! tool: items, bots (hostile entities), quests, workbenches, and projects.
//! Field names on the wire follow the upstream documents, which mix naming
//! conventions (`recyclesInto`, `required_items`, `requirementItemIds`); the
//! serde renames in [`types`] pin those spellings down in one place.
//!
//! Loading is all-or-nothing per document. Cross-references between catalogs
//! are *not* validated here: an id that resolves nowhere degrades to a
//! placeholder downstream rather than failing the load.

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::CatalogError;
pub use loader::{
    load_bots_from_json, load_items_from_json, load_projects_from_json, load_quests_from_json,
    load_workbenches_from_json, save_items_to_json,
};
pub use types::{
    BotRecord, Catalog, DisplayName, DroppedBy, ItemRecord, LevelRequirement, Locale,
    ProjectPhase, ProjectRecord, QuestRecord, RequiredItem, WorkbenchLevel, WorkbenchRecord,
};
