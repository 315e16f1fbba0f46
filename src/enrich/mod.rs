//! Dataset enrichment pass.
//!
//! Reads the items and bots catalogs, computes derived economic and
//! relational fields for every item, and overwrites the items document in
//! place:
//!
//! - `recycleValue` / `salvageValue` - value totals over the item's
//!   `recyclesInto` / `salvagesInto` mappings, priced at each target's base
//!   sell value. An item with no salvage rule inherits its recycle total.
//! - `recycledFrom` / `salvagedFrom` - exact inverses of the forward
//!   mappings, keyed by source item id.
//! - `droppedBy` - every bot whose `drops` list names the item, with a
//!   title-cased display name and CDN icon.
//!
//! Unresolved target ids contribute zero to the value sums and are otherwise
//! carried through untouched. The pass is a one-way transform: running it on
//! pristine catalogs is deterministic, but its output is not a valid input
//! for a second run since the derived fields are recomputed from the same
//! source fields it just rewrote.

pub mod icons;

use log::{debug, info};
use std::collections::{BTreeMap, HashMap};

use crate::catalog::{
    load_bots_from_json, load_items_from_json, save_items_to_json, BotRecord, CatalogError,
    DroppedBy, ItemRecord,
};
use crate::config::DatabaseConfig;

pub use icons::bot_icon_url;

/// Title-case a bot name: lowercase, then capitalize each whitespace token.
pub fn title_case(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Reverse index from item id to the bots that drop it, in bot catalog order.
pub fn dropped_by_index(bots: &[BotRecord]) -> HashMap<String, Vec<DroppedBy>> {
    let mut index: HashMap<String, Vec<DroppedBy>> = HashMap::new();
    for bot in bots {
        for item_id in &bot.drops {
            index.entry(item_id.clone()).or_default().push(DroppedBy {
                id: bot.id.clone(),
                name: title_case(&bot.name),
                icon: bot_icon_url(&bot.id),
            });
        }
    }
    index
}

fn invert<F>(items: &[ItemRecord], forward: F) -> HashMap<String, BTreeMap<String, u32>>
where
    F: Fn(&ItemRecord) -> Option<&BTreeMap<String, u32>>,
{
    let mut index: HashMap<String, BTreeMap<String, u32>> = HashMap::new();
    for item in items {
        if let Some(targets) = forward(item) {
            for (target_id, quantity) in targets {
                index
                    .entry(target_id.clone())
                    .or_default()
                    .insert(item.id.clone(), *quantity);
            }
        }
    }
    index
}

/// Reverse index of every item's `recyclesInto` mapping.
pub fn recycled_from_index(items: &[ItemRecord]) -> HashMap<String, BTreeMap<String, u32>> {
    invert(items, |item| item.recycles_into.as_ref())
}

/// Reverse index of every item's `salvagesInto` mapping.
pub fn salvaged_from_index(items: &[ItemRecord]) -> HashMap<String, BTreeMap<String, u32>> {
    invert(items, |item| item.salvages_into.as_ref())
}

fn component_value(
    targets: Option<&BTreeMap<String, u32>>,
    base_values: &HashMap<String, u32>,
) -> u32 {
    let Some(targets) = targets else {
        return 0;
    };
    targets
        .iter()
        .map(|(target_id, quantity)| {
            // Unresolved targets and targets without a sell value count as zero.
            base_values.get(target_id).copied().unwrap_or(0) * quantity
        })
        .sum()
}

/// Compute all derived fields in place. Base sell values are snapshotted
/// before any mutation so the sums always price against pristine inputs.
pub fn enrich_items(items: &mut [ItemRecord], bots: &[BotRecord]) {
    let mut dropped_by = dropped_by_index(bots);
    let mut recycled_from = recycled_from_index(items);
    let mut salvaged_from = salvaged_from_index(items);
    let base_values: HashMap<String, u32> = items
        .iter()
        .filter_map(|item| item.value.map(|v| (item.id.clone(), v)))
        .collect();

    for item in items.iter_mut() {
        item.recycle_value = component_value(item.recycles_into.as_ref(), &base_values);
        item.salvage_value = match item.salvages_into.as_ref() {
            Some(targets) => component_value(Some(targets), &base_values),
            None => item.recycle_value,
        };
        item.recycled_from = recycled_from.remove(&item.id).unwrap_or_default();
        item.salvaged_from = salvaged_from.remove(&item.id).unwrap_or_default();
        item.dropped_by = dropped_by.remove(&item.id).unwrap_or_default();
    }
}

/// Batch entrypoint for `scrapdex enrich`: load, enrich, overwrite in place.
pub fn run(db: &DatabaseConfig) -> Result<(), CatalogError> {
    let items_path = db.items_path();
    let mut items = load_items_from_json(&items_path)?;
    let bots = load_bots_from_json(db.bots_path())?;
    debug!(
        "loaded {} items and {} bots from {}",
        items.len(),
        bots.len(),
        db.data_dir
    );

    enrich_items(&mut items, &bots);
    save_items_to_json(&items_path, &items)?;

    info!(
        "enriched {} items against {} bots -> {}",
        items.len(),
        bots.len(),
        items_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("the queen"), "The Queen");
        assert_eq!(title_case("ARC SURVEYOR"), "Arc Surveyor");
        assert_eq!(title_case("wasp"), "Wasp");
    }

    #[test]
    fn title_case_collapses_whitespace() {
        assert_eq!(title_case("  big   bertha "), "Big Bertha");
    }

    #[test]
    fn component_value_skips_unresolved_targets() {
        let mut targets = BTreeMap::new();
        targets.insert("known".to_string(), 2);
        targets.insert("ghost".to_string(), 10);
        let mut base_values = HashMap::new();
        base_values.insert("known".to_string(), 7);
        assert_eq!(component_value(Some(&targets), &base_values), 14);
    }

    #[test]
    fn component_value_without_mapping_is_zero() {
        assert_eq!(component_value(None, &HashMap::new()), 0);
    }
}
