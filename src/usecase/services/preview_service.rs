use anyhow::Result;

use crate::domain::entities::upload::{FileKind, FilePreview, SelectedFile};
use crate::infra::import::csv::read_csv_preview;
use crate::infra::import::xlsx::read_xlsx_preview;

pub struct PreviewService;

impl PreviewService {
    pub fn preview(file: &SelectedFile) -> Result<FilePreview> {
        match file.kind {
            FileKind::Workbook => read_xlsx_preview(&file.path),
            FileKind::Csv | FileKind::Other => read_csv_preview(&file.path),
        }
    }
}
