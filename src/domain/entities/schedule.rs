use anyhow::{bail, Result};
use serde_json::Value;

/// Column keys the scheduling server is known to emit, in display order.
pub const KNOWN_COLUMNS: &[(&str, &str)] = &[
    ("equipment_id", "Equipment ID"),
    ("equipment_type", "Equipment Type"),
    ("functional_location", "Functional Location"),
    ("manufacturer", "Manufacturer"),
    ("suggested_date", "Suggested Date"),
    ("maintenance_type", "Maintenance Type"),
    ("priority", "Priority"),
    ("confidence", "Confidence"),
    ("breakdown_risk", "Breakdown Risk"),
    ("estimated_duration", "Estimated Duration (h)"),
];

pub const VALUE_COLUMN: &str = "value";

const PERCENT_COLUMNS: &[&str] = &["confidence", "breakdown_risk"];

/// Rows returned verbatim by the upload endpoint. The row schema belongs to
/// the server, so rows stay as raw JSON values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleData(pub Vec<Value>);

impl ScheduleData {
    pub fn rows(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Known keys first in their fixed order, then any other keys in the
    /// order they first appear. Scalar rows contribute the `value` column.
    pub fn columns(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        let mut has_scalar_rows = false;
        for row in &self.0 {
            match row {
                Value::Object(map) => {
                    for key in map.keys() {
                        if !seen.iter().any(|existing| existing == key) {
                            seen.push(key.clone());
                        }
                    }
                }
                _ => has_scalar_rows = true,
            }
        }

        let mut columns: Vec<String> = KNOWN_COLUMNS
            .iter()
            .filter(|(key, _)| seen.iter().any(|existing| existing == key))
            .map(|(key, _)| key.to_string())
            .collect();
        columns.extend(
            seen.into_iter()
                .filter(|key| !KNOWN_COLUMNS.iter().any(|(known, _)| known == key)),
        );
        if has_scalar_rows && !columns.iter().any(|key| key == VALUE_COLUMN) {
            columns.push(VALUE_COLUMN.to_string());
        }
        columns
    }
}

impl TryFrom<Value> for ScheduleData {
    type Error = anyhow::Error;

    fn try_from(payload: Value) -> Result<Self> {
        match payload {
            Value::Array(rows) => Ok(ScheduleData(rows)),
            other => bail!("expected a list of schedule rows, got {}", json_kind(&other)),
        }
    }
}

pub fn column_label(key: &str) -> String {
    KNOWN_COLUMNS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| key.to_string())
}

pub fn cell_text(row: &Value, column: &str) -> String {
    match row {
        Value::Object(map) => map
            .get(column)
            .map(|value| format_cell_value(column, value))
            .unwrap_or_default(),
        scalar if column == VALUE_COLUMN => format_cell_value(column, scalar),
        _ => String::new(),
    }
}

pub fn format_cell_value(column: &str, value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::String(text) => text.clone(),
        Value::Number(number) => {
            if PERCENT_COLUMNS.contains(&column) {
                if let Some(ratio) = number.as_f64() {
                    return format!("{:.1}%", ratio * 100.0);
                }
            }
            if number.is_f64() {
                number.as_f64().map(format_f64).unwrap_or_default()
            } else {
                number.to_string()
            }
        }
        nested => nested.to_string(),
    }
}

/// Numeric columns align right; a column counts as numeric when every
/// non-empty cell in it is a JSON number.
pub fn column_alignment(data: &ScheduleData, column: &str) -> &'static str {
    let mut saw_number = false;
    for row in data.rows() {
        let cell = match row {
            Value::Object(map) => map.get(column),
            scalar if column == VALUE_COLUMN => Some(scalar),
            _ => None,
        };
        match cell {
            None | Some(Value::Null) => {}
            Some(Value::Number(_)) => saw_number = true,
            Some(_) => return "left",
        }
    }
    if saw_number {
        "right"
    } else {
        "left"
    }
}

/// Integral floats beyond this are not exact in `f64`, so they keep their
/// full decimal expansion instead of an integer cast.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

pub fn format_f64(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let text = if value.abs() >= MAX_EXACT_INTEGER {
        format!("{value}")
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let mut text = format!("{value:.6}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        text
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
