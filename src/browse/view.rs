//! Pure view-state derivation: filter, sort, and the column/direction state
//! machine. No I/O here; everything recomputes wholesale from the in-memory
//! catalogs on each input event.

use crate::catalog::{ItemRecord, Locale};
use crate::xref::RequirementIndex;

/// Sortable columns. Numeric columns compare as integers with missing values
/// as zero; the rest compare as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Value,
    Type,
    Rarity,
    RecyclesTo,
    RecycledFrom,
    RecycleValue,
    SalvageValue,
    Quests,
    Workbenches,
    Projects,
}

impl SortColumn {
    pub const ALL: [SortColumn; 11] = [
        SortColumn::Name,
        SortColumn::Value,
        SortColumn::Type,
        SortColumn::Rarity,
        SortColumn::RecyclesTo,
        SortColumn::RecycledFrom,
        SortColumn::RecycleValue,
        SortColumn::SalvageValue,
        SortColumn::Quests,
        SortColumn::Workbenches,
        SortColumn::Projects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Value => "value",
            SortColumn::Type => "type",
            SortColumn::Rarity => "rarity",
            SortColumn::RecyclesTo => "recycles-to",
            SortColumn::RecycledFrom => "recycled-from",
            SortColumn::RecycleValue => "recycle-value",
            SortColumn::SalvageValue => "salvage-value",
            SortColumn::Quests => "quests",
            SortColumn::Workbenches => "workbenches",
            SortColumn::Projects => "projects",
        }
    }

    pub fn parse(s: &str) -> Option<SortColumn> {
        SortColumn::ALL
            .iter()
            .copied()
            .find(|column| column.as_str().eq_ignore_ascii_case(s.trim()))
    }

    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            SortColumn::Name | SortColumn::Type | SortColumn::Rarity
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Table,
    Cards,
}

/// The browser's entire mutable state. Rebuilding the row set from this plus
/// the catalogs is cheap enough to do on every event.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub search: String,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
    pub locale: Locale,
    pub layout: Layout,
}

impl ViewState {
    pub fn new(locale: Locale) -> Self {
        Self {
            search: String::new(),
            sort_column: SortColumn::Name,
            sort_direction: SortDirection::Ascending,
            locale,
            layout: Layout::Table,
        }
    }

    /// Column-header click semantics: selecting the active column flips the
    /// direction, selecting a new column resets to ascending.
    pub fn select_column(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_direction = self.sort_direction.flip();
        } else {
            self.sort_column = column;
            self.sort_direction = SortDirection::Ascending;
        }
    }
}

fn numeric_key(item: &ItemRecord, index: &RequirementIndex, column: SortColumn) -> u64 {
    match column {
        SortColumn::Value => u64::from(item.value.unwrap_or(0)),
        SortColumn::RecycleValue => u64::from(item.recycle_value),
        SortColumn::SalvageValue => u64::from(item.salvage_value),
        SortColumn::RecyclesTo => {
            item.recycles_into.as_ref().map_or(0, |targets| targets.len()) as u64
        }
        SortColumn::RecycledFrom => item.recycled_from.len() as u64,
        SortColumn::Quests => index.quests_for(&item.id).len() as u64,
        SortColumn::Workbenches => index.workbenches_for(&item.id).len() as u64,
        SortColumn::Projects => index.projects_for(&item.id).len() as u64,
        SortColumn::Name | SortColumn::Type | SortColumn::Rarity => 0,
    }
}

fn string_key<'a>(item: &'a ItemRecord, locale: Locale, column: SortColumn) -> &'a str {
    match column {
        SortColumn::Name => item.display_name(locale),
        SortColumn::Type => item.item_type.as_deref().unwrap_or(""),
        SortColumn::Rarity => item.rarity.as_deref().unwrap_or(""),
        _ => "",
    }
}

/// Case-insensitive substring filter over locale-resolved display names.
/// An empty term returns the full catalog in catalog order.
pub fn filter_items<'a>(
    items: &'a [ItemRecord],
    search: &str,
    locale: Locale,
) -> Vec<&'a ItemRecord> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| item.display_name(locale).to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort by the active column; descending reverses the comparator, so
/// equal keys keep their filtered order either way.
pub fn sort_items(rows: &mut [&ItemRecord], index: &RequirementIndex, state: &ViewState) {
    let column = state.sort_column;
    let direction = state.sort_direction;
    rows.sort_by(|a, b| {
        let ordering = if column.is_numeric() {
            numeric_key(a, index, column).cmp(&numeric_key(b, index, column))
        } else {
            string_key(a, state.locale, column).cmp(string_key(b, state.locale, column))
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Filter then sort: the row set the renderers consume.
pub fn derive_rows<'a>(
    items: &'a [ItemRecord],
    index: &RequirementIndex,
    state: &ViewState,
) -> Vec<&'a ItemRecord> {
    let mut rows = filter_items(items, &state.search, state.locale);
    sort_items(&mut rows, index, state);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_active_column_flips_direction() {
        let mut state = ViewState::new(Locale::En);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
        state.select_column(SortColumn::Name);
        assert_eq!(state.sort_direction, SortDirection::Descending);
        state.select_column(SortColumn::Name);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn selecting_new_column_resets_to_ascending() {
        let mut state = ViewState::new(Locale::En);
        state.select_column(SortColumn::Name); // now descending
        state.select_column(SortColumn::Value);
        assert_eq!(state.sort_column, SortColumn::Value);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn column_names_parse_back() {
        for column in SortColumn::ALL {
            assert_eq!(SortColumn::parse(column.as_str()), Some(column));
        }
        assert_eq!(SortColumn::parse("RARITY"), Some(SortColumn::Rarity));
        assert_eq!(SortColumn::parse("bogus"), None);
    }
}
