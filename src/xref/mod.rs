//! Requirement cross-referencing.
//!
//! Builds the item -> consumer maps the browser joins against each row:
//! which quests, workbench upgrades, and project phases need a given item,
//! and in what quantity. The maps are display-only and rebuilt wholesale on
//! load or locale change, never persisted.
//!
//! Quests contribute twice: explicit `required_items` entries, and implicit
//! requirements recovered from free-text objective lines ("Obtain 5 Scrap
//! Metal"). Objective parsing is deliberately rigid - a fixed ordered phrase
//! list, first match wins, and the captured name must equal a catalog item
//! name exactly (case-insensitive) or the line is dropped.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::catalog::{Catalog, ItemRecord, Locale};

/// Objective phrase patterns, in priority order. The `Get ... for` form is
/// anchored only at the front so trailing flavor text ("for Celeste") still
/// matches.
static OBJECTIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^Obtain (\d+) (.+)$",
        r"(?i)^Get (\d+) (.+) for",
        r"(?i)^Collect (\d+) (.+)$",
        r"(?i)^Gather (\d+) (.+)$",
        r"(?i)^Find (\d+) (.+)$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("objective pattern compiles"))
    .collect()
});

/// Parse one objective line into `(quantity, item name)` using the first
/// matching phrase pattern, or `None` when no pattern applies.
pub fn parse_objective(text: &str) -> Option<(u32, &str)> {
    for pattern in OBJECTIVE_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            let quantity = captures.get(1)?.as_str().parse().ok()?;
            let name = captures.get(2)?.as_str().trim();
            return Some((quantity, name));
        }
    }
    None
}

/// One quest that consumes an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestRequirement {
    pub quest_name: String,
    pub quantity: u32,
}

/// One workbench level that consumes an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbenchRequirement {
    pub module_name: String,
    pub level: u32,
    pub quantity: u32,
}

/// One project phase that consumes an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequirement {
    pub project_name: String,
    pub phase: u32,
    pub quantity: u32,
}

/// Item id -> consumers, across all three requirement sources. Rows keep
/// catalog iteration order.
#[derive(Debug, Default)]
pub struct RequirementIndex {
    quests: HashMap<String, Vec<QuestRequirement>>,
    workbenches: HashMap<String, Vec<WorkbenchRequirement>>,
    projects: HashMap<String, Vec<ProjectRequirement>>,
}

/// Case-insensitive full display name -> item id. First catalog entry wins
/// on duplicate names.
fn name_index(items: &[ItemRecord], locale: Locale) -> HashMap<String, &str> {
    let mut index: HashMap<String, &str> = HashMap::new();
    for item in items {
        index
            .entry(item.display_name(locale).to_lowercase())
            .or_insert(&item.id);
    }
    index
}

impl RequirementIndex {
    pub fn build(catalog: &Catalog, locale: Locale) -> Self {
        let mut index = RequirementIndex::default();
        let names = name_index(&catalog.items, locale);

        for quest in &catalog.quests {
            let quest_name = quest.display_name(locale);

            for required in &quest.required_items {
                index
                    .quests
                    .entry(required.item_id.clone())
                    .or_default()
                    .push(QuestRequirement {
                        quest_name: quest_name.to_string(),
                        quantity: required.quantity,
                    });
            }

            for objective in &quest.objectives {
                let Some((quantity, item_name)) = parse_objective(objective) else {
                    continue;
                };
                // Unresolvable names are dropped; there is no partial match.
                let Some(item_id) = names.get(&item_name.to_lowercase()) else {
                    continue;
                };
                let rows = index.quests.entry(item_id.to_string()).or_default();
                if !rows.iter().any(|row| row.quest_name == quest_name) {
                    rows.push(QuestRequirement {
                        quest_name: quest_name.to_string(),
                        quantity,
                    });
                }
            }
        }

        for module in &catalog.workbenches {
            let module_name = module.display_name();
            for level in &module.levels {
                for required in &level.requirement_item_ids {
                    index
                        .workbenches
                        .entry(required.item_id.clone())
                        .or_default()
                        .push(WorkbenchRequirement {
                            module_name: module_name.to_string(),
                            level: level.level,
                            quantity: required.quantity,
                        });
                }
            }
        }

        for project in &catalog.projects {
            let project_name = project.display_name();
            for phase in &project.phases {
                for required in &phase.requirement_item_ids {
                    index
                        .projects
                        .entry(required.item_id.clone())
                        .or_default()
                        .push(ProjectRequirement {
                            project_name: project_name.to_string(),
                            phase: phase.phase,
                            quantity: required.quantity,
                        });
                }
            }
        }

        index
    }

    pub fn quests_for(&self, item_id: &str) -> &[QuestRequirement] {
        self.quests.get(item_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn workbenches_for(&self, item_id: &str) -> &[WorkbenchRequirement] {
        self.workbenches
            .get(item_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn projects_for(&self, item_id: &str) -> &[ProjectRequirement] {
        self.projects.get(item_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct items consumed by at least one quest.
    pub fn quest_item_count(&self) -> usize {
        self.quests.len()
    }

    /// Number of distinct items consumed by at least one workbench level.
    pub fn workbench_item_count(&self) -> usize {
        self.workbenches.len()
    }

    /// Number of distinct items consumed by at least one project phase.
    pub fn project_item_count(&self) -> usize {
        self.projects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_phrase() {
        assert_eq!(parse_objective("Obtain 5 Scrap Metal"), Some((5, "Scrap Metal")));
        assert_eq!(parse_objective("Collect 3 Fabric"), Some((3, "Fabric")));
        assert_eq!(parse_objective("Gather 12 Plastic Parts"), Some((12, "Plastic Parts")));
        assert_eq!(parse_objective("Find 1 Toolbox"), Some((1, "Toolbox")));
        assert_eq!(parse_objective("Get 2 Gun Oil for Tian Wen"), Some((2, "Gun Oil")));
    }

    #[test]
    fn get_phrase_requires_for_suffix() {
        assert_eq!(parse_objective("Get 2 Gun Oil"), None);
    }

    #[test]
    fn phrases_are_case_insensitive() {
        assert_eq!(parse_objective("obtain 4 wire spool"), Some((4, "wire spool")));
    }

    #[test]
    fn first_pattern_wins_over_later_ones() {
        // "Obtain" matches the whole line; the embedded "Gather" is captured
        // as part of the item name rather than re-matched.
        assert_eq!(
            parse_objective("Obtain 5 Gather 2 Wood"),
            Some((5, "Gather 2 Wood"))
        );
    }

    #[test]
    fn prose_without_phrase_is_ignored() {
        assert_eq!(parse_objective("Talk to the trader in Speranza"), None);
        assert_eq!(parse_objective("Obtain some Scrap Metal"), None);
    }
}
