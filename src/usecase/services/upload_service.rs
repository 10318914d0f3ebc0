use anyhow::{Context, Result};
use serde_json::json;
use tracing::{error, info};

use crate::domain::entities::upload::{FileKind, SelectedFile, UploadCompleteEvent};
use crate::infra::http::client::ScheduleClient;
use crate::infra::import::xlsx::workbook_to_csv;
use crate::platform::desktop::blocking::run_blocking;
use crate::usecase::ports::client::UploadPayload;

#[derive(Debug, Clone)]
pub struct UploadService {
    client: ScheduleClient,
}

impl UploadService {
    pub fn new(client: ScheduleClient) -> Self {
        Self { client }
    }

    /// Always yields a completion event. Local and transport failures are
    /// reported in the server's `{"error": ...}` shape.
    pub async fn upload(&self, file: SelectedFile) -> UploadCompleteEvent {
        let payload = match run_blocking("prepare upload", || prepare_payload(&file)) {
            Ok(payload) => payload,
            Err(err) => {
                error!(file = %file.path.display(), "failed to prepare upload: {err:#}");
                return failure_event(format!("{err:#}"));
            }
        };

        info!(file = %payload.file_name, size = payload.bytes.len(), "uploading issue list");
        match self.client.upload_issues(payload).await {
            Ok(reply) => UploadCompleteEvent {
                status: Some(reply.status),
                response_raw: reply.body,
            },
            Err(err) => {
                error!("upload failed: {err}");
                failure_event(err.to_string())
            }
        }
    }
}

pub fn prepare_payload(file: &SelectedFile) -> Result<UploadPayload> {
    match file.kind {
        FileKind::Workbook => Ok(UploadPayload {
            file_name: csv_file_name(&file.name),
            mime: "text/csv",
            bytes: workbook_to_csv(&file.path)?,
        }),
        FileKind::Csv | FileKind::Other => {
            let bytes = std::fs::read(&file.path)
                .with_context(|| format!("failed to read file: {}", file.path.display()))?;
            let mime = if file.kind == FileKind::Csv {
                "text/csv"
            } else {
                "application/octet-stream"
            };
            Ok(UploadPayload {
                file_name: file.name.clone(),
                mime,
                bytes,
            })
        }
    }
}

pub fn csv_file_name(name: &str) -> String {
    let stem = match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    };
    format!("{stem}.csv")
}

pub fn failure_event(message: String) -> UploadCompleteEvent {
    UploadCompleteEvent {
        status: None,
        response_raw: json!({ "error": message }).to_string(),
    }
}
