/// A single cell in a review table.
///
/// Cells carry one of a small closed set of value kinds; callers must check
/// the kind explicitly before treating a value as text.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    /// Returns the text content when this cell holds a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Renders the cell for terminal output. Missing cells render empty.
    pub fn display_value(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(number) => format_number(*number),
            CellValue::Missing => String::new(),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_accessor() {
        assert_eq!(CellValue::Text("hi".to_string()).as_text(), Some("hi"));
        assert_eq!(CellValue::Number(1.0).as_text(), None);
        assert_eq!(CellValue::Missing.as_text(), None);
    }

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(CellValue::Number(42.0).display_value(), "42");
        assert_eq!(CellValue::Number(1.5).display_value(), "1.5");
        assert_eq!(CellValue::Missing.display_value(), "");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let value = serde_json::to_value(CellValue::Text("ok".to_string())).expect("serialize");
        assert_eq!(value["kind"], "Text");
        assert_eq!(value["value"], "ok");
        let missing = serde_json::to_value(CellValue::Missing).expect("serialize");
        assert_eq!(missing["kind"], "Missing");
    }
}
