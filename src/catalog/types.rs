use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::catalog::errors::CatalogError;

/// Language codes supported by locale-aware catalogs.
///
/// Display-name resolution falls back locale -> `en` -> record id, so a
/// catalog translated for only some of these still renders everywhere.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Fr,
    De,
    Es,
    Pt,
    Ru,
    Ja,
    Ko,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 9] = [
        Locale::En,
        Locale::Fr,
        Locale::De,
        Locale::Es,
        Locale::Pt,
        Locale::Ru,
        Locale::Ja,
        Locale::Ko,
        Locale::Zh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::De => "de",
            Locale::Es => "es",
            Locale::Pt => "pt",
            Locale::Ru => "ru",
            Locale::Ja => "ja",
            Locale::Ko => "ko",
            Locale::Zh => "zh",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .iter()
            .copied()
            .find(|l| l.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownLocale(s.to_string()))
    }
}

/// A display name as it appears on the wire: either a plain string or a
/// locale-code keyed mapping. Older catalogs use the plain form throughout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DisplayName {
    Plain(String),
    Localized(HashMap<String, String>),
}

impl DisplayName {
    pub fn plain(name: &str) -> Self {
        DisplayName::Plain(name.to_string())
    }

    /// Resolve for a locale, falling back to English. Returns `None` when
    /// neither translation exists; callers fall back to the record id.
    pub fn resolve(&self, locale: Locale) -> Option<&str> {
        match self {
            DisplayName::Plain(name) => Some(name.as_str()),
            DisplayName::Localized(map) => map
                .get(locale.as_str())
                .or_else(|| map.get(Locale::En.as_str()))
                .map(String::as_str),
        }
    }
}

/// A bot ("entity") that can drop items, attached to each dropped item by the
/// enrichment pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DroppedBy {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One item record. The `recyclesInto`/`salvagesInto` mappings are authored
/// upstream; everything from `recycleValue` down is written by the enrichment
/// pass and deserializes to empty defaults on pristine catalogs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRecord {
    pub id: String,
    pub name: DisplayName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    #[serde(
        default,
        rename = "recyclesInto",
        skip_serializing_if = "Option::is_none"
    )]
    pub recycles_into: Option<BTreeMap<String, u32>>,
    #[serde(
        default,
        rename = "salvagesInto",
        skip_serializing_if = "Option::is_none"
    )]
    pub salvages_into: Option<BTreeMap<String, u32>>,

    // Derived fields, written back by `enrich`.
    #[serde(default, rename = "recycleValue")]
    pub recycle_value: u32,
    #[serde(default, rename = "salvageValue")]
    pub salvage_value: u32,
    #[serde(default, rename = "recycledFrom")]
    pub recycled_from: BTreeMap<String, u32>,
    #[serde(default, rename = "salvagedFrom")]
    pub salvaged_from: BTreeMap<String, u32>,
    #[serde(default, rename = "droppedBy")]
    pub dropped_by: Vec<DroppedBy>,
}

impl ItemRecord {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: DisplayName::plain(name),
            item_type: None,
            rarity: None,
            value: None,
            recycles_into: None,
            salvages_into: None,
            recycle_value: 0,
            salvage_value: 0,
            recycled_from: BTreeMap::new(),
            salvaged_from: BTreeMap::new(),
            dropped_by: Vec::new(),
        }
    }

    pub fn with_type(mut self, item_type: &str) -> Self {
        self.item_type = Some(item_type.to_string());
        self
    }

    pub fn with_rarity(mut self, rarity: &str) -> Self {
        self.rarity = Some(rarity.to_string());
        self
    }

    pub fn with_value(mut self, value: u32) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_recycle(mut self, target_id: &str, quantity: u32) -> Self {
        self.recycles_into
            .get_or_insert_with(BTreeMap::new)
            .insert(target_id.to_string(), quantity);
        self
    }

    pub fn with_salvage(mut self, target_id: &str, quantity: u32) -> Self {
        self.salvages_into
            .get_or_insert_with(BTreeMap::new)
            .insert(target_id.to_string(), quantity);
        self
    }

    /// Locale-resolved display name, falling back to the id.
    pub fn display_name(&self, locale: Locale) -> &str {
        self.name.resolve(locale).unwrap_or(&self.id)
    }
}

/// Hostile entity record as authored in the bots catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BotRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub drops: Vec<String>,
}

impl BotRecord {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            drops: Vec::new(),
        }
    }

    pub fn with_drop(mut self, item_id: &str) -> Self {
        self.drops.push(item_id.to_string());
        self
    }
}

/// An explicit `{item, quantity}` requirement on a quest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequiredItem {
    pub item_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestRecord {
    pub id: String,
    pub name: DisplayName,
    #[serde(default)]
    pub required_items: Vec<RequiredItem>,
    #[serde(default)]
    pub objectives: Vec<String>,
}

impl QuestRecord {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: DisplayName::plain(name),
            required_items: Vec::new(),
            objectives: Vec::new(),
        }
    }

    pub fn with_required_item(mut self, item_id: &str, quantity: u32) -> Self {
        self.required_items.push(RequiredItem {
            item_id: item_id.to_string(),
            quantity,
        });
        self
    }

    pub fn with_objective(mut self, text: &str) -> Self {
        self.objectives.push(text.to_string());
        self
    }

    pub fn display_name(&self, locale: Locale) -> &str {
        self.name.resolve(locale).unwrap_or(&self.id)
    }
}

/// An `{itemId, quantity}` requirement on a workbench level or project phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LevelRequirement {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkbenchLevel {
    pub level: u32,
    #[serde(default, rename = "requirementItemIds")]
    pub requirement_item_ids: Vec<LevelRequirement>,
}

/// A hideout module with an ordered upgrade ladder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkbenchRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub levels: Vec<WorkbenchLevel>,
}

impl WorkbenchRecord {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: Some(name.to_string()),
            levels: Vec::new(),
        }
    }

    pub fn with_level(mut self, level: u32, requirements: &[(&str, u32)]) -> Self {
        self.levels.push(WorkbenchLevel {
            level,
            requirement_item_ids: requirements
                .iter()
                .map(|(id, qty)| LevelRequirement {
                    item_id: id.to_string(),
                    quantity: *qty,
                })
                .collect(),
        });
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectPhase {
    pub phase: u32,
    #[serde(default, rename = "requirementItemIds")]
    pub requirement_item_ids: Vec<LevelRequirement>,
}

/// A community project with ordered contribution phases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub phases: Vec<ProjectPhase>,
}

impl ProjectRecord {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: Some(name.to_string()),
            phases: Vec::new(),
        }
    }

    pub fn with_phase(mut self, phase: u32, requirements: &[(&str, u32)]) -> Self {
        self.phases.push(ProjectPhase {
            phase,
            requirement_item_ids: requirements
                .iter()
                .map(|(id, qty)| LevelRequirement {
                    item_id: id.to_string(),
                    quantity: *qty,
                })
                .collect(),
        });
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Everything the browser loads at startup. Bots are not held here: their
/// contribution is baked into `droppedBy` during enrichment.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub items: Vec<ItemRecord>,
    pub quests: Vec<QuestRecord>,
    pub workbenches: Vec<WorkbenchRecord>,
    pub projects: Vec<ProjectRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_round_trips_codes() {
        for locale in Locale::ALL {
            assert_eq!(locale.as_str().parse::<Locale>().unwrap(), locale);
        }
        assert!("xx".parse::<Locale>().is_err());
    }

    #[test]
    fn plain_name_resolves_for_any_locale() {
        let name = DisplayName::plain("Scrap Metal");
        assert_eq!(name.resolve(Locale::En), Some("Scrap Metal"));
        assert_eq!(name.resolve(Locale::Ja), Some("Scrap Metal"));
    }

    #[test]
    fn localized_name_falls_back_to_english() {
        let mut map = HashMap::new();
        map.insert("en".to_string(), "Medkit".to_string());
        map.insert("ru".to_string(), "Аптечка".to_string());
        let name = DisplayName::Localized(map);
        assert_eq!(name.resolve(Locale::Ru), Some("Аптечка"));
        assert_eq!(name.resolve(Locale::De), Some("Medkit"));
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let item = ItemRecord {
            name: DisplayName::Localized(HashMap::new()),
            ..ItemRecord::new("mystery_part", "unused")
        };
        assert_eq!(item.display_name(Locale::En), "mystery_part");
    }

    #[test]
    fn item_builder_accumulates_recycle_targets() {
        let item = ItemRecord::new("rusted_blade", "Rusted Blade")
            .with_value(40)
            .with_recycle("scrap_metal", 2)
            .with_recycle("metal_parts", 1);
        let map = item.recycles_into.as_ref().unwrap();
        assert_eq!(map.get("scrap_metal"), Some(&2));
        assert_eq!(map.get("metal_parts"), Some(&1));
    }
}
