use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use motion_api::Submission;
use motion_ingest::{GroupSelector, Partition};

/// Number of ids listed per group in the preview table.
const PREVIEW_IDS: usize = 3;

/// Table of group sizes and the first ids of each group.
pub fn preview_table(partition: &Partition, groups: &GroupSelector) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Label"),
        header_cell("Rows"),
        header_cell("First ids"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("primary"),
        Cell::new(&groups.primary),
        count_cell(partition.primary.len()),
        Cell::new(first_ids(&partition.primary)),
    ]);
    table.add_row(vec![
        Cell::new("comparison"),
        Cell::new(&groups.comparison),
        count_cell(partition.comparison.len()),
        Cell::new(first_ids(&partition.comparison)),
    ]);
    table.add_row(vec![
        dim_cell("unmatched"),
        dim_cell("-"),
        dim_cell(partition.unmatched),
        dim_cell(""),
    ]);
    table
}

pub fn print_preview(partition: &Partition, groups: &GroupSelector) {
    println!("{}", preview_table(partition, groups));
}

/// Table linking each group to the segment created for it.
pub fn submission_table(
    partition: &Partition,
    groups: &GroupSelector,
    submission: &Submission,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Label"),
        header_cell("Ids"),
        header_cell("Segment"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("primary"),
        Cell::new(&groups.primary),
        count_cell(partition.primary.len()),
        Cell::new(submission.primary_segment_id),
    ]);
    table.add_row(vec![
        Cell::new("comparison"),
        Cell::new(&groups.comparison),
        count_cell(partition.comparison.len()),
        Cell::new(submission.comparison_segment_id),
    ]);
    table
}

/// Prints the submission table to stderr so stdout carries only the response.
pub fn print_submission(partition: &Partition, groups: &GroupSelector, submission: &Submission) {
    eprintln!("{}", submission_table(partition, groups, submission));
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn first_ids(ids: &[String]) -> String {
    let mut shown = ids
        .iter()
        .take(PREVIEW_IDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if ids.len() > PREVIEW_IDS {
        shown.push_str(&format!(", ... (+{})", ids.len() - PREVIEW_IDS));
    }
    shown
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
