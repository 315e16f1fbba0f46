//! Text renderers for the browser: a fixed-width table for wide terminals
//! and a stacked card layout for narrow ones.
//!
//! Rendering policy mirrors the data plane's permissiveness: a missing
//! scalar renders `-`, an empty list renders `No Data`, and an item id that
//! resolves nowhere renders `Unknown (<id>)`. Nothing here errors.

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::browse::view::{derive_rows, Layout, SortColumn, ViewState};
use crate::catalog::{Catalog, ItemRecord, Locale};
use crate::xref::RequirementIndex;

pub const NO_DATA: &str = "No Data";

const COLUMN_GAP: &str = "  ";

fn unknown_label(id: &str) -> String {
    format!("Unknown ({})", id)
}

/// Item id -> display name resolver for cross-reference cells.
struct NameLookup<'a> {
    by_id: HashMap<&'a str, &'a ItemRecord>,
    locale: Locale,
}

impl<'a> NameLookup<'a> {
    fn new(catalog: &'a Catalog, locale: Locale) -> Self {
        Self {
            by_id: catalog
                .items
                .iter()
                .map(|item| (item.id.as_str(), item))
                .collect(),
            locale,
        }
    }

    fn name(&self, id: &str) -> String {
        self.by_id
            .get(id)
            .map(|item| item.display_name(self.locale).to_string())
            .unwrap_or_else(|| unknown_label(id))
    }
}

fn component_lines(targets: Option<&BTreeMap<String, u32>>, names: &NameLookup) -> Vec<String> {
    let lines: Vec<String> = targets
        .map(|map| {
            map.iter()
                .map(|(id, quantity)| format!("{} x{}", names.name(id), quantity))
                .collect()
        })
        .unwrap_or_default();
    if lines.is_empty() {
        vec![NO_DATA.to_string()]
    } else {
        lines
    }
}

/// `recycledFrom`/`salvagedFrom` cells list sources sorted by display name.
fn source_lines(sources: &BTreeMap<String, u32>, names: &NameLookup) -> Vec<String> {
    let mut entries: Vec<(String, u32)> = sources
        .iter()
        .map(|(id, quantity)| (names.name(id), *quantity))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    let lines: Vec<String> = entries
        .into_iter()
        .map(|(name, quantity)| format!("{} x{}", name, quantity))
        .collect();
    if lines.is_empty() {
        vec![NO_DATA.to_string()]
    } else {
        lines
    }
}

fn or_no_data(lines: Vec<String>) -> Vec<String> {
    if lines.is_empty() {
        vec![NO_DATA.to_string()]
    } else {
        lines
    }
}

fn quest_lines(index: &RequirementIndex, item_id: &str) -> Vec<String> {
    or_no_data(
        index
            .quests_for(item_id)
            .iter()
            .map(|req| format!("{} x{}", req.quest_name, req.quantity))
            .collect(),
    )
}

fn workbench_lines(index: &RequirementIndex, item_id: &str) -> Vec<String> {
    or_no_data(
        index
            .workbenches_for(item_id)
            .iter()
            .map(|req| format!("{} Lv.{} x{}", req.module_name, req.level, req.quantity))
            .collect(),
    )
}

fn project_lines(index: &RequirementIndex, item_id: &str) -> Vec<String> {
    or_no_data(
        index
            .projects_for(item_id)
            .iter()
            .map(|req| format!("{} Ph.{} x{}", req.project_name, req.phase, req.quantity))
            .collect(),
    )
}

fn value_cell(item: &ItemRecord) -> String {
    let sell = item
        .value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("{}/{}", sell, item.recycle_value)
}

/// Header captions paired with the sort column each one reflects.
const TABLE_COLUMNS: [(&str, SortColumn); 9] = [
    ("Item", SortColumn::Name),
    ("Value", SortColumn::Value),
    ("Type", SortColumn::Type),
    ("Rarity", SortColumn::Rarity),
    ("Recycles To", SortColumn::RecyclesTo),
    ("Recycled From", SortColumn::RecycledFrom),
    ("Quests", SortColumn::Quests),
    ("Workbenches", SortColumn::Workbenches),
    ("Projects", SortColumn::Projects),
];

fn header_caption(caption: &str, column: SortColumn, state: &ViewState) -> String {
    if state.sort_column == column {
        format!("{} {}", caption, state.sort_direction.arrow())
    } else {
        caption.to_string()
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

/// Render the sorted, filtered rows as a fixed-width table. Cells may span
/// several lines; a row is as tall as its tallest cell.
pub fn render_table(
    rows: &[&ItemRecord],
    catalog: &Catalog,
    index: &RequirementIndex,
    state: &ViewState,
    page_size: usize,
) -> String {
    let names = NameLookup::new(catalog, state.locale);
    let headers: Vec<String> = TABLE_COLUMNS
        .iter()
        .map(|(caption, column)| header_caption(caption, *column, state))
        .collect();

    let shown = if page_size > 0 && rows.len() > page_size {
        &rows[..page_size]
    } else {
        rows
    };

    let cells: Vec<Vec<Vec<String>>> = shown
        .iter()
        .map(|item| {
            vec![
                vec![item.display_name(state.locale).to_string()],
                vec![value_cell(item)],
                vec![item.item_type.clone().unwrap_or_else(|| "-".to_string())],
                vec![item.rarity.clone().unwrap_or_else(|| "-".to_string())],
                component_lines(item.recycles_into.as_ref(), &names),
                source_lines(&item.recycled_from, &names),
                quest_lines(index, &item.id),
                workbench_lines(index, &item.id),
                project_lines(index, &item.id),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
    for row in &cells {
        for (col, cell) in row.iter().enumerate() {
            for line in cell {
                widths[col] = widths[col].max(width(line));
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    for row in &cells {
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for line_no in 0..height {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.get(line_no).cloned().unwrap_or_default())
                .collect();
            push_line(&mut out, &line, &widths);
        }
    }

    if shown.len() < rows.len() {
        out.push_str(&format!(
            "... {} more rows (narrow your search)\n",
            rows.len() - shown.len()
        ));
    }
    out.push_str(&format!("{} items\n", rows.len()));
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut parts: Vec<String> = Vec::with_capacity(cells.len());
    for (cell, col_width) in cells.iter().zip(widths) {
        let padding = col_width.saturating_sub(width(cell));
        parts.push(format!("{}{}", cell, " ".repeat(padding)));
    }
    let line = parts.join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render the rows as stacked cards, one block per item. The card layout
/// also surfaces `droppedBy`, which the table has no room for.
pub fn render_cards(
    rows: &[&ItemRecord],
    catalog: &Catalog,
    index: &RequirementIndex,
    state: &ViewState,
    page_size: usize,
) -> String {
    let names = NameLookup::new(catalog, state.locale);
    let shown = if page_size > 0 && rows.len() > page_size {
        &rows[..page_size]
    } else {
        rows
    };

    let mut out = String::new();
    for item in shown {
        out.push_str(&format!("=== {} ===\n", item.display_name(state.locale)));
        out.push_str(&format!(
            "Type: {} | Rarity: {}\n",
            item.item_type.as_deref().unwrap_or("-"),
            item.rarity.as_deref().unwrap_or("-"),
        ));
        let sell = item
            .value
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "Value: {} / Recycle: {} / Salvage: {}\n",
            sell, item.recycle_value, item.salvage_value
        ));
        out.push_str(&format!(
            "Recycles To: {}\n",
            component_lines(item.recycles_into.as_ref(), &names).join(", ")
        ));
        out.push_str(&format!(
            "Recycled From: {}\n",
            source_lines(&item.recycled_from, &names).join(", ")
        ));
        let dropped: Vec<&str> = item.dropped_by.iter().map(|d| d.name.as_str()).collect();
        out.push_str(&format!(
            "Dropped By: {}\n",
            if dropped.is_empty() {
                NO_DATA.to_string()
            } else {
                dropped.join(", ")
            }
        ));
        out.push_str(&format!(
            "Quests: {}\n",
            quest_lines(index, &item.id).join(", ")
        ));
        out.push_str(&format!(
            "Workbenches: {}\n",
            workbench_lines(index, &item.id).join(", ")
        ));
        out.push_str(&format!(
            "Projects: {}\n\n",
            project_lines(index, &item.id).join(", ")
        ));
    }

    if shown.len() < rows.len() {
        out.push_str(&format!(
            "... {} more items (narrow your search)\n",
            rows.len() - shown.len()
        ));
    }
    out.push_str(&format!("{} items\n", rows.len()));
    out
}

/// Derive rows from the current state and render in the active layout.
pub fn render(
    catalog: &Catalog,
    index: &RequirementIndex,
    state: &ViewState,
    page_size: usize,
) -> String {
    let rows = derive_rows(&catalog.items, index, state);
    match state.layout {
        Layout::Table => render_table(&rows, catalog, index, state, page_size),
        Layout::Cards => render_cards(&rows, catalog, index, state, page_size),
    }
}
