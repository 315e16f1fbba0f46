//! Integration tests for the item -> consumer requirement maps.

use scrapdex::catalog::{
    Catalog, DisplayName, ItemRecord, Locale, ProjectRecord, QuestRecord, WorkbenchRecord,
};
use scrapdex::xref::RequirementIndex;
use std::collections::HashMap;

fn base_items() -> Vec<ItemRecord> {
    vec![
        ItemRecord::new("scrap_metal", "Scrap Metal").with_value(10),
        ItemRecord::new("fabric", "Fabric").with_value(6),
        ItemRecord::new("gun_oil", "Gun Oil").with_value(22),
    ]
}

#[test]
fn explicit_quest_requirements_indexed_by_item() {
    let catalog = Catalog {
        items: base_items(),
        quests: vec![
            QuestRecord::new("supply_run", "Supply Run").with_required_item("fabric", 4),
            QuestRecord::new("patch_up", "Patch Up").with_required_item("fabric", 2),
        ],
        ..Catalog::default()
    };
    let index = RequirementIndex::build(&catalog, Locale::En);

    let rows = index.quests_for("fabric");
    assert_eq!(rows.len(), 2);
    // Catalog iteration order is preserved.
    assert_eq!(rows[0].quest_name, "Supply Run");
    assert_eq!(rows[0].quantity, 4);
    assert_eq!(rows[1].quest_name, "Patch Up");
    assert!(index.quests_for("scrap_metal").is_empty());
}

#[test]
fn objective_text_yields_implicit_requirement() {
    let catalog = Catalog {
        items: base_items(),
        quests: vec![
            QuestRecord::new("supply_run", "Supply Run").with_objective("Obtain 5 Scrap Metal")
        ],
        ..Catalog::default()
    };
    let index = RequirementIndex::build(&catalog, Locale::En);

    let rows = index.quests_for("scrap_metal");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quest_name, "Supply Run");
    assert_eq!(rows[0].quantity, 5);
}

#[test]
fn objective_matching_is_case_insensitive_on_name() {
    let catalog = Catalog {
        items: base_items(),
        quests: vec![
            QuestRecord::new("supply_run", "Supply Run").with_objective("collect 2 sCrAp MeTaL")
        ],
        ..Catalog::default()
    };
    let index = RequirementIndex::build(&catalog, Locale::En);
    assert_eq!(index.quests_for("scrap_metal").len(), 1);
}

#[test]
fn implicit_requirement_deduped_by_quest_name() {
    // Explicit entry and a matching objective from the same quest: the
    // explicit row wins, the objective adds nothing.
    let catalog = Catalog {
        items: base_items(),
        quests: vec![QuestRecord::new("supply_run", "Supply Run")
            .with_required_item("scrap_metal", 8)
            .with_objective("Obtain 5 Scrap Metal")],
        ..Catalog::default()
    };
    let index = RequirementIndex::build(&catalog, Locale::En);

    let rows = index.quests_for("scrap_metal");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quantity, 8);
}

#[test]
fn two_quests_may_require_the_same_item() {
    let catalog = Catalog {
        items: base_items(),
        quests: vec![
            QuestRecord::new("supply_run", "Supply Run").with_objective("Obtain 5 Scrap Metal"),
            QuestRecord::new("second_haul", "Second Haul").with_objective("Obtain 3 Scrap Metal"),
        ],
        ..Catalog::default()
    };
    let index = RequirementIndex::build(&catalog, Locale::En);
    assert_eq!(index.quests_for("scrap_metal").len(), 2);
}

#[test]
fn unresolvable_objective_names_are_dropped() {
    let catalog = Catalog {
        items: base_items(),
        quests: vec![QuestRecord::new("wild_goose", "Wild Goose")
            .with_objective("Obtain 3 Unobtainium")
            .with_objective("Escort the convoy")],
        ..Catalog::default()
    };
    let index = RequirementIndex::build(&catalog, Locale::En);
    assert_eq!(index.quest_item_count(), 0);
}

#[test]
fn workbench_levels_indexed_with_level_numbers() {
    let catalog = Catalog {
        items: base_items(),
        workbenches: vec![WorkbenchRecord::new("workbench", "Workbench")
            .with_level(2, &[("scrap_metal", 10)])
            .with_level(3, &[("scrap_metal", 20), ("fabric", 5)])],
        ..Catalog::default()
    };
    let index = RequirementIndex::build(&catalog, Locale::En);

    let rows = index.workbenches_for("scrap_metal");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].module_name, "Workbench");
    assert_eq!(rows[0].level, 2);
    assert_eq!(rows[0].quantity, 10);
    assert_eq!(rows[1].level, 3);
    assert_eq!(index.workbenches_for("fabric").len(), 1);
}

#[test]
fn unnamed_workbench_falls_back_to_id() {
    let mut module = WorkbenchRecord::new("comms_array", "unused").with_level(2, &[("fabric", 1)]);
    module.name = None;
    let catalog = Catalog {
        items: base_items(),
        workbenches: vec![module],
        ..Catalog::default()
    };
    let index = RequirementIndex::build(&catalog, Locale::En);
    assert_eq!(index.workbenches_for("fabric")[0].module_name, "comms_array");
}

#[test]
fn project_phases_indexed_with_phase_numbers() {
    let catalog = Catalog {
        items: base_items(),
        projects: vec![ProjectRecord::new("water_purifier", "Water Purifier")
            .with_phase(1, &[("fabric", 10)])
            .with_phase(2, &[("fabric", 4)])],
        ..Catalog::default()
    };
    let index = RequirementIndex::build(&catalog, Locale::En);

    let rows = index.projects_for("fabric");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].project_name, "Water Purifier");
    assert_eq!(rows[0].phase, 1);
    assert_eq!(rows[1].phase, 2);
    assert_eq!(rows[1].quantity, 4);
}

#[test]
fn objective_resolution_follows_the_active_locale() {
    let mut names = HashMap::new();
    names.insert("en".to_string(), "Medkit".to_string());
    names.insert("ru".to_string(), "Аптечка".to_string());
    let mut medkit = ItemRecord::new("medkit", "unused");
    medkit.name = DisplayName::Localized(names);

    let catalog = Catalog {
        items: vec![medkit],
        quests: vec![QuestRecord::new("triage", "Triage").with_objective("Find 1 Аптечка")],
        ..Catalog::default()
    };

    let ru = RequirementIndex::build(&catalog, Locale::Ru);
    assert_eq!(ru.quests_for("medkit").len(), 1);

    // Under English names the Russian objective text resolves nowhere.
    let en = RequirementIndex::build(&catalog, Locale::En);
    assert!(en.quests_for("medkit").is_empty());
}
