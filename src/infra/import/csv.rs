use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::upload::FilePreview;

pub fn read_csv_preview(csv_path: &Path) -> Result<FilePreview> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .iter()
        .map(clean_header)
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        anyhow::bail!("csv header is required")
    }

    let mut row_count = 0_usize;
    for record in reader.records() {
        record.context("failed to parse csv record")?;
        row_count += 1;
    }

    Ok(FilePreview::new(headers, row_count))
}

pub fn write_csv(rows: &[Vec<String>]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    for row in rows {
        writer
            .write_record(row)
            .context("failed to write csv record")?;
    }
    writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to flush csv: {}", err.error()))
}

pub fn clean_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}
