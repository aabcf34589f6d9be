//! Topic and feedback-type filtering over an annotated table.

use crate::table::{ReviewTable, TOPIC_COLUMN, TYPE_COLUMN};
use crate::value::CellValue;

/// One filter dimension: either the `All` sentinel or an exact label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Value(String),
}

impl Selection {
    /// Parses a user-supplied selection; the `All` sentinel is recognized
    /// case-insensitively.
    pub fn from_arg(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Value(arg.to_string())
        }
    }

    /// Exact, case-sensitive match against a derived-column cell. Missing
    /// cells never match a concrete value.
    fn matches(&self, cell: Option<&CellValue>) -> bool {
        match self {
            Selection::All => true,
            Selection::Value(expected) => {
                cell.and_then(CellValue::as_text) == Some(expected.as_str())
            }
        }
    }
}

/// Independent topic and type selections applied to an annotated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFilter {
    pub topic: Selection,
    pub feedback_type: Selection,
}

impl Default for ViewFilter {
    fn default() -> Self {
        Self {
            topic: Selection::All,
            feedback_type: Selection::All,
        }
    }
}

impl ViewFilter {
    pub fn is_all(&self) -> bool {
        self.topic == Selection::All && self.feedback_type == Selection::All
    }

    /// Returns the subset of rows matching both selections. An empty result
    /// is valid output, not a failure.
    pub fn apply(&self, table: &ReviewTable) -> ReviewTable {
        if self.is_all() {
            return table.clone();
        }
        let rows = table
            .rows
            .iter()
            .filter(|row| {
                self.topic.matches(row.get(TOPIC_COLUMN))
                    && self.feedback_type.matches(row.get(TYPE_COLUMN))
            })
            .cloned()
            .collect();
        ReviewTable {
            columns: table.columns.clone(),
            rows,
        }
    }
}
