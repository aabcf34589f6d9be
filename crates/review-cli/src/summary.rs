use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use review_model::{ReviewTable, SENTIMENT_COLUMN, TOPIC_COLUMN, TYPE_COLUMN};

use crate::types::AnalyzeResult;

/// Prints the annotated (and possibly filtered) review view plus the label
/// distribution summary.
pub fn print_result(result: &AnalyzeResult, limit: usize, with_summary: bool) {
    println!(
        "Detected review text column: '{}' (score: {:.2})",
        result.text_column, result.detection_score
    );
    if result.filtered {
        println!(
            "Showing {} of {} reviews after filtering",
            result.view.row_count(),
            result.total_rows
        );
    }

    print_view(&result.view, &result.text_column, limit);

    if with_summary {
        print_distributions(&result.view);
    }
    if let Some(status) = result.webhook_status {
        println!("Data sent! Webhook response: {status}");
    }
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_view(view: &ReviewTable, text_column: &str, limit: usize) {
    let mut columns = vec![text_column];
    for derived in [SENTIMENT_COLUMN, TOPIC_COLUMN, TYPE_COLUMN] {
        if view.has_column(derived) {
            columns.push(derived);
        }
    }

    let mut table = Table::new();
    table.set_header(columns.iter().map(|name| header_cell(name)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for index in 1..columns.len() {
        align_column(&mut table, index, CellAlignment::Center);
    }

    for row in view.rows.iter().take(limit) {
        table.add_row(
            columns
                .iter()
                .map(|column| {
                    let value = row
                        .get(column)
                        .map(review_model::CellValue::display_value)
                        .unwrap_or_default();
                    if value.is_empty() {
                        dim_cell("-")
                    } else {
                        Cell::new(value)
                    }
                })
                .collect::<Vec<_>>(),
        );
    }
    println!("{table}");
    if view.row_count() > limit {
        println!("(+{} more rows, raise --limit to show them)", view.row_count() - limit);
    }
}

fn print_distributions(view: &ReviewTable) {
    let dimensions = [
        ("Sentiment", SENTIMENT_COLUMN),
        ("Topic", TOPIC_COLUMN),
        ("Type", TYPE_COLUMN),
    ];
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dimension"),
        header_cell("Label"),
        header_cell("Reviews"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    let mut any = false;
    for (title, column) in dimensions {
        if !view.has_column(column) {
            continue;
        }
        for (label, count) in label_counts(view, column) {
            table.add_row(vec![Cell::new(title), Cell::new(label), Cell::new(count)]);
            any = true;
        }
    }
    if any {
        println!();
        println!("Label distribution:");
        println!("{table}");
    }
}

fn label_counts(view: &ReviewTable, column: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for row in &view.rows {
        if let Some(text) = row.get(column).and_then(review_model::CellValue::as_text) {
            *counts.entry(text.to_string()).or_insert(0) += 1;
        }
    }
    counts
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

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
