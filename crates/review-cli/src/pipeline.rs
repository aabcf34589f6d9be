//! Pipeline stage functions: ingest, detect, classify, filter, export.
//!
//! Data flows strictly one way: raw table -> detected column -> annotated
//! table -> filtered view -> optional export. Each stage runs to completion
//! before the next starts and failures are surfaced at the stage boundary.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use review_classify::{Classifier, annotate};
use review_export::{ExportError, WebhookClient, build_payload};
use review_ingest::{detect_text_column, read_review_table};
use review_model::{CellValue, ReviewTable, ViewFilter};

use crate::logging::redact_value;

pub struct PipelineInput<'a> {
    pub reviews_csv: &'a Path,
    pub classifier: &'a dyn Classifier,
    pub filter: ViewFilter,
}

#[derive(Debug)]
pub struct PipelineOutput {
    /// Name of the auto-detected review text column.
    pub text_column: String,
    /// Detection score of the selected column.
    pub detection_score: f64,
    /// Full table with derived columns appended.
    pub annotated: ReviewTable,
    /// Annotated table after topic/type filtering.
    pub view: ReviewTable,
}

/// Runs ingest, detection, classification, and filtering for one file.
pub fn run_pipeline(input: &PipelineInput<'_>) -> Result<PipelineOutput> {
    let span = info_span!("analyze", file = %input.reviews_csv.display());
    let _guard = span.enter();

    let ingest_start = Instant::now();
    let table = read_review_table(input.reviews_csv)
        .with_context(|| format!("read reviews: {}", input.reviews_csv.display()))?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let detected = detect_text_column(&table).context("detect review text column")?;
    if let Some(sample) = first_text(&table, &detected.name) {
        trace!(column = %detected.name, sample = %redact_value(sample), "text column sample");
    }

    let mut annotated = table;
    annotate(&mut annotated, &detected.name, input.classifier)
        .with_context(|| format!("classify reviews ({} strategy)", input.classifier.name()))?;

    let view = input.filter.apply(&annotated);
    if !input.filter.is_all() {
        info!(
            matching = view.row_count(),
            total = annotated.row_count(),
            "filter applied"
        );
    }

    Ok(PipelineOutput {
        text_column: detected.name,
        detection_score: detected.score,
        annotated,
        view,
    })
}

/// Forwards the view to the webhook. Failures are reported to the caller as
/// an error message; the annotated view stays usable either way.
pub fn export_view(
    view: &ReviewTable,
    text_column: &str,
    webhook_url: &str,
) -> Result<u16, ExportError> {
    let payload = build_payload(view, text_column);
    let client = WebhookClient::new()?;
    client.deliver(webhook_url, &payload)
}

fn first_text<'a>(table: &'a ReviewTable, column: &str) -> Option<&'a str> {
    table
        .rows
        .iter()
        .find_map(|row| row.get(column).and_then(CellValue::as_text))
}
