//! Integration tests for the analyze pipeline stages.

use std::io::Write;

use review_cli::pipeline::{PipelineInput, run_pipeline};
use review_classify::HeuristicClassifier;
use review_model::{CellValue, Selection, ViewFilter};

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{contents}").expect("write csv");
    file
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

#[test]
fn analyzes_reviews_end_to_end() {
    let file = write_csv(
        "id,review\n\
         1,\"Great delivery, thank you!\"\n\
         2,\"Terrible quality, should be fixed\"\n",
    );
    let classifier = HeuristicClassifier::new();
    let input = PipelineInput {
        reviews_csv: file.path(),
        classifier: &classifier,
        filter: ViewFilter::default(),
    };
    let output = run_pipeline(&input).expect("pipeline");

    assert_eq!(output.text_column, "review");
    assert!(output.detection_score > 0.0);
    assert_eq!(output.annotated.row_count(), 2);
    assert_eq!(output.view.row_count(), 2);

    let expectations = [
        ("Positive", "Delivery", "Praise"),
        ("Negative", "Product Quality", "Complaint"),
    ];
    for (row, (sentiment, topic, feedback_type)) in
        output.annotated.rows.iter().zip(expectations)
    {
        assert_eq!(row.get("sentiment"), Some(&text(sentiment)));
        assert_eq!(row.get("topic"), Some(&text(topic)));
        assert_eq!(row.get("type"), Some(&text(feedback_type)));
    }
}

#[test]
fn filter_narrows_the_view_but_not_the_annotated_table() {
    let file = write_csv(
        "review\n\
         \"Great delivery, thank you!\"\n\
         \"Terrible quality, should be fixed\"\n\
         \"delivery was slow\"\n",
    );
    let classifier = HeuristicClassifier::new();
    let input = PipelineInput {
        reviews_csv: file.path(),
        classifier: &classifier,
        filter: ViewFilter {
            topic: Selection::Value("Delivery".to_string()),
            feedback_type: Selection::All,
        },
    };
    let output = run_pipeline(&input).expect("pipeline");

    assert_eq!(output.annotated.row_count(), 3);
    assert_eq!(output.view.row_count(), 2);
    for row in &output.view.rows {
        assert_eq!(row.get("topic"), Some(&text("Delivery")));
    }
}

#[test]
fn sole_string_column_is_used_even_without_keyword_name() {
    let file = write_csv("id,notes\n1,short\n2,fine\n");
    let classifier = HeuristicClassifier::new();
    let input = PipelineInput {
        reviews_csv: file.path(),
        classifier: &classifier,
        filter: ViewFilter::default(),
    };
    let output = run_pipeline(&input).expect("pipeline");
    assert_eq!(output.text_column, "notes");
}

#[test]
fn numeric_only_file_halts_before_classification() {
    let file = write_csv("id,score\n1,5\n2,3\n");
    let classifier = HeuristicClassifier::new();
    let input = PipelineInput {
        reviews_csv: file.path(),
        classifier: &classifier,
        filter: ViewFilter::default(),
    };
    let err = run_pipeline(&input).unwrap_err();
    assert!(err.to_string().contains("detect review text column"));
}

#[test]
fn empty_file_halts_at_ingest() {
    let file = write_csv("review\n");
    let classifier = HeuristicClassifier::new();
    let input = PipelineInput {
        reviews_csv: file.path(),
        classifier: &classifier,
        filter: ViewFilter::default(),
    };
    let err = run_pipeline(&input).unwrap_err();
    assert!(err.to_string().contains("read reviews"));
}
