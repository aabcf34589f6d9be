use review_model::ReviewTable;

#[derive(Debug)]
pub struct AnalyzeResult {
    pub text_column: String,
    pub detection_score: f64,
    pub strategy: &'static str,
    pub total_rows: usize,
    /// The annotated table after filtering; what gets rendered and exported.
    pub view: ReviewTable,
    pub filtered: bool,
    /// HTTP status code returned by the webhook, when delivery succeeded.
    pub webhook_status: Option<u16>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}
