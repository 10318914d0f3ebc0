use std::path::{Path, PathBuf};

/// Columns the scheduling server reads from an uploaded issue list.
pub const REQUIRED_ISSUE_COLUMNS: &[&str] = &["equipment_id", "priority", "notification_type"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Workbook,
    Other,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => FileKind::Csv,
            "xlsx" | "xls" => FileKind::Workbook,
            _ => FileKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub kind: FileKind,
}

impl SelectedFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("upload")
            .to_string();
        let kind = FileKind::from_path(&path);
        Self { path, name, kind }
    }
}

/// Files picked in one selection; empty when the picker was dismissed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelectEvent {
    pub files: Vec<SelectedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCompleteEvent {
    /// `None` when the request never produced an HTTP response.
    pub status: Option<u16>,
    pub response_raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    pub headers: Vec<String>,
    pub row_count: usize,
    pub missing_columns: Vec<String>,
}

impl FilePreview {
    pub fn new(headers: Vec<String>, row_count: usize) -> Self {
        let missing_columns = REQUIRED_ISSUE_COLUMNS
            .iter()
            .filter(|required| !headers.iter().any(|h| h.trim() == **required))
            .map(|required| required.to_string())
            .collect();
        Self {
            headers,
            row_count,
            missing_columns,
        }
    }

    pub fn summary(&self) -> String {
        let mut text = format!(
            "{} rows, {} columns",
            self.row_count,
            self.headers.len()
        );
        if !self.missing_columns.is_empty() {
            text.push_str(&format!(
                " (missing: {})",
                self.missing_columns.join(", ")
            ));
        }
        text
    }
}
