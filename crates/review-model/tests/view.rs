//! Tests for topic/type view filtering.

use review_model::{CellValue, ReviewTable, Row, Selection, ViewFilter};

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn annotated_table() -> ReviewTable {
    let columns = vec![
        "review".to_string(),
        "sentiment".to_string(),
        "topic".to_string(),
        "type".to_string(),
    ];
    let specs = [
        ("late again", "Negative", "Delivery", "Complaint"),
        ("love the build", "Positive", "Product Quality", "Praise"),
        ("could be cheaper", "Neutral", "Pricing", "Suggestion"),
        ("arrived on time", "Positive", "Delivery", "General Feedback"),
    ];
    let mut table = ReviewTable::new(columns);
    for (review, sentiment, topic, feedback_type) in specs {
        let mut row = Row::default();
        row.insert("review", text(review));
        row.insert("sentiment", text(sentiment));
        row.insert("topic", text(topic));
        row.insert("type", text(feedback_type));
        table.push_row(row);
    }
    table
}

#[test]
fn all_filter_returns_table_unchanged() {
    let table = annotated_table();
    let filtered = ViewFilter::default().apply(&table);
    assert_eq!(filtered, table);
}

#[test]
fn topic_filter_returns_exactly_matching_rows() {
    let table = annotated_table();
    let filter = ViewFilter {
        topic: Selection::Value("Delivery".to_string()),
        feedback_type: Selection::All,
    };
    let filtered = filter.apply(&table);
    assert_eq!(filtered.row_count(), 2);
    for row in &filtered.rows {
        assert_eq!(row.get("topic"), Some(&text("Delivery")));
    }
    // Set equality: every Delivery row from the source is present.
    let source_delivery = table
        .rows
        .iter()
        .filter(|row| row.get("topic") == Some(&text("Delivery")))
        .count();
    assert_eq!(filtered.row_count(), source_delivery);
}

#[test]
fn both_dimensions_are_independent_and_conjunctive() {
    let table = annotated_table();
    let filter = ViewFilter {
        topic: Selection::Value("Delivery".to_string()),
        feedback_type: Selection::Value("Complaint".to_string()),
    };
    let filtered = filter.apply(&table);
    assert_eq!(filtered.row_count(), 1);
    assert_eq!(filtered.rows[0].get("review"), Some(&text("late again")));
}

#[test]
fn filter_match_is_case_sensitive() {
    let table = annotated_table();
    let filter = ViewFilter {
        topic: Selection::Value("delivery".to_string()),
        feedback_type: Selection::All,
    };
    assert!(filter.apply(&table).is_empty());
}

#[test]
fn empty_result_is_valid_output() {
    let table = annotated_table();
    let filter = ViewFilter {
        topic: Selection::Value("Returns".to_string()),
        feedback_type: Selection::All,
    };
    let filtered = filter.apply(&table);
    assert!(filtered.is_empty());
    assert_eq!(filtered.columns, table.columns);
}

#[test]
fn all_sentinel_parses_case_insensitively() {
    assert_eq!(Selection::from_arg("All"), Selection::All);
    assert_eq!(Selection::from_arg("all"), Selection::All);
    assert_eq!(
        Selection::from_arg("Delivery"),
        Selection::Value("Delivery".to_string())
    );
}
