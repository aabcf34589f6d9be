use std::time::Duration;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use review_classify::{Classifier, FeedbackType, HeuristicClassifier, RemoteClassifier, Topic};
use review_model::{Selection, ViewFilter};

use review_cli::pipeline::{PipelineInput, export_view, run_pipeline};

use crate::cli::{AnalyzeArgs, StrategyArg};
use crate::summary::{apply_table_style, header_cell};
use crate::types::AnalyzeResult;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let filter = ViewFilter {
        topic: Selection::from_arg(&args.topic),
        feedback_type: Selection::from_arg(&args.feedback_type),
    };
    let filtered = !filter.is_all();
    let classifier: Box<dyn Classifier> = match args.strategy {
        StrategyArg::Heuristic => Box::new(HeuristicClassifier::new()),
        StrategyArg::Remote => Box::new(
            RemoteClassifier::from_env().context("configure remote classifier")?,
        ),
    };

    // The remote strategy issues one call per review per dimension; show a
    // spinner so a long sequential pass does not look hung.
    let spinner = (args.strategy == StrategyArg::Remote).then(classify_spinner);
    let input = PipelineInput {
        reviews_csv: &args.reviews_csv,
        classifier: classifier.as_ref(),
        filter,
    };
    let output = run_pipeline(&input);
    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }
    let output = output?;

    let mut errors = Vec::new();
    let mut webhook_status = None;
    if let Some(url) = &args.webhook_url {
        match export_view(&output.view, &output.text_column, url) {
            Ok(status) => webhook_status = Some(status),
            Err(error) => {
                warn!(%error, "webhook delivery failed");
                errors.push(format!("failed to send data: {error}"));
            }
        }
    }

    let has_errors = !errors.is_empty();
    Ok(AnalyzeResult {
        text_column: output.text_column,
        detection_score: output.detection_score,
        strategy: classifier.name(),
        total_rows: output.annotated.row_count(),
        filtered,
        view: output.view,
        webhook_status,
        errors,
        has_errors,
    })
}

pub fn run_labels() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Label"),
        header_cell("Keywords"),
    ]);
    apply_table_style(&mut table);
    for topic in Topic::all() {
        let keywords = if topic.keywords().is_empty() {
            "(fallback)".to_string()
        } else {
            topic.keywords().join(", ")
        };
        table.add_row(vec![
            Cell::new("Topic"),
            Cell::new(topic.as_str()),
            Cell::new(keywords),
        ]);
    }
    for feedback_type in FeedbackType::all() {
        table.add_row(vec![
            Cell::new("Type"),
            Cell::new(feedback_type.as_str()),
            Cell::new("-"),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn classify_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("classifying reviews via remote service...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
