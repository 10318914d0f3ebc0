use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::upload::FilePreview;
use crate::infra::import::csv::{clean_header, write_csv};

pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Cell text as it goes into the uploaded CSV: floats keep their shortest
/// round-trip form and date cells are written as ISO date-times.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.trim().to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v
            .as_datetime()
            .map(|dt| dt.format(DATE_TIME_FORMAT).to_string())
            .unwrap_or_else(|| v.to_string()),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Rows of the first worksheet, blank rows dropped.
pub fn read_first_sheet(xlsx_path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open workbook: {}", xlsx_path.display()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("workbook has no sheets: {}", xlsx_path.display()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    Ok(range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect::<Vec<String>>())
        .filter(|r| r.iter().any(|cell| !cell.is_empty()))
        .collect())
}

pub fn read_xlsx_preview(xlsx_path: &Path) -> Result<FilePreview> {
    let rows = read_first_sheet(xlsx_path)?;
    let Some((header_row, data_rows)) = rows.split_first() else {
        anyhow::bail!("workbook header is required")
    };
    let headers = header_row.iter().map(|h| clean_header(h)).collect();
    Ok(FilePreview::new(headers, data_rows.len()))
}

/// The scheduling server parses uploads as CSV, so workbooks are flattened
/// to their first sheet before sending.
pub fn workbook_to_csv(xlsx_path: &Path) -> Result<Vec<u8>> {
    let rows = read_first_sheet(xlsx_path)?;
    if rows.is_empty() {
        anyhow::bail!("workbook is empty: {}", xlsx_path.display())
    }
    write_csv(&rows)
}
