//! Integration tests for the browser's filter and sort derivation.

use scrapdex::browse::{derive_rows, filter_items, SortColumn, SortDirection, ViewState};
use scrapdex::catalog::{Catalog, ItemRecord, Locale, QuestRecord};
use scrapdex::xref::RequirementIndex;

fn sample_items() -> Vec<ItemRecord> {
    vec![
        ItemRecord::new("wire_spool", "Wire Spool")
            .with_value(8)
            .with_rarity("Common"),
        ItemRecord::new("field_radio", "Field Radio")
            .with_value(60)
            .with_rarity("Rare"),
        ItemRecord::new("fabric", "Fabric").with_rarity("Common"), // no value
        ItemRecord::new("gun_oil", "Gun Oil")
            .with_value(22)
            .with_rarity("Uncommon"),
    ]
}

fn ids<'a>(rows: &[&'a ItemRecord]) -> Vec<&'a str> {
    rows.iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn empty_search_returns_full_catalog_in_order() {
    let items = sample_items();
    let rows = filter_items(&items, "", Locale::En);
    assert_eq!(ids(&rows), vec!["wire_spool", "field_radio", "fabric", "gun_oil"]);
}

#[test]
fn default_view_sorts_by_name_ascending() {
    let items = sample_items();
    let index = RequirementIndex::default();
    let state = ViewState::new(Locale::En);
    let rows = derive_rows(&items, &index, &state);
    assert_eq!(ids(&rows), vec!["fabric", "field_radio", "gun_oil", "wire_spool"]);
}

#[test]
fn filter_is_case_insensitive_substring() {
    let items = sample_items();
    let index = RequirementIndex::default();
    let mut state = ViewState::new(Locale::En);
    state.search = "FIELD".to_string();
    let rows = derive_rows(&items, &index, &state);
    assert_eq!(ids(&rows), vec!["field_radio"]);

    state.search = "i".to_string();
    let rows = derive_rows(&items, &index, &state);
    assert_eq!(rows.len(), 4); // every sample name contains an i
}

#[test]
fn filter_without_match_returns_empty() {
    let items = sample_items();
    let index = RequirementIndex::default();
    let mut state = ViewState::new(Locale::En);
    state.search = "does-not-exist".to_string();
    assert!(derive_rows(&items, &index, &state).is_empty());
}

#[test]
fn value_sort_treats_missing_as_zero_placed_first() {
    let items = sample_items();
    let index = RequirementIndex::default();
    let mut state = ViewState::new(Locale::En);
    state.select_column(SortColumn::Value);
    let rows = derive_rows(&items, &index, &state);
    assert_eq!(ids(&rows), vec!["fabric", "wire_spool", "gun_oil", "field_radio"]);
}

#[test]
fn sorting_twice_is_idempotent() {
    let items = sample_items();
    let index = RequirementIndex::default();
    let mut state = ViewState::new(Locale::En);
    state.sort_column = SortColumn::Value;
    let first = ids(&derive_rows(&items, &index, &state));
    let second = ids(&derive_rows(&items, &index, &state));
    assert_eq!(first, second);
}

#[test]
fn flipping_direction_reverses_unique_keys() {
    let items = sample_items();
    let index = RequirementIndex::default();
    let mut state = ViewState::new(Locale::En);
    state.select_column(SortColumn::Value);
    let ascending = ids(&derive_rows(&items, &index, &state));
    state.select_column(SortColumn::Value); // flip to descending
    assert_eq!(state.sort_direction, SortDirection::Descending);
    let descending = ids(&derive_rows(&items, &index, &state));
    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn rarity_sorts_as_plain_string_ordering() {
    let items = sample_items();
    let index = RequirementIndex::default();
    let mut state = ViewState::new(Locale::En);
    state.sort_column = SortColumn::Rarity;
    let rows = derive_rows(&items, &index, &state);
    let rarities: Vec<&str> = rows
        .iter()
        .map(|item| item.rarity.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(rarities, vec!["Common", "Common", "Rare", "Uncommon"]);
}

#[test]
fn quest_count_column_sorts_numerically() {
    let catalog = Catalog {
        items: sample_items(),
        quests: vec![
            QuestRecord::new("q1", "Q1").with_required_item("fabric", 1),
            QuestRecord::new("q2", "Q2").with_required_item("fabric", 2),
            QuestRecord::new("q3", "Q3").with_required_item("gun_oil", 1),
        ],
        ..Catalog::default()
    };
    let index = RequirementIndex::build(&catalog, Locale::En);
    let mut state = ViewState::new(Locale::En);
    state.sort_column = SortColumn::Quests;
    state.sort_direction = SortDirection::Descending;
    let rows = derive_rows(&catalog.items, &index, &state);
    assert_eq!(rows[0].id, "fabric");
    assert_eq!(rows[1].id, "gun_oil");
}

#[test]
fn filter_applies_before_sort() {
    let items = sample_items();
    let index = RequirementIndex::default();
    let mut state = ViewState::new(Locale::En);
    state.search = "o".to_string(); // Wire Spool, Field Radio, Gun Oil
    state.sort_column = SortColumn::Value;
    state.sort_direction = SortDirection::Descending;
    let rows = derive_rows(&items, &index, &state);
    assert_eq!(ids(&rows), vec!["field_radio", "gun_oil", "wire_spool"]);
}
