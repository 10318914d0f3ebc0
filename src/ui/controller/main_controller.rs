use anyhow::Result;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::entities::schedule::ScheduleData;
use crate::domain::entities::upload::{FileSelectEvent, SelectedFile, UploadCompleteEvent};
use crate::usecase::ports::shell::UiEffect;

pub const SELECT_FILE_FIRST: &str = "Please select a file first";
pub const UNEXPECTED_FORMAT: &str = "Server response is not in the expected format";
pub const PROCESSING_FAILED: &str = "An error occurred while processing the response: ";
pub const SCHEDULE_GENERATED: &str = "Schedule generated successfully";
pub const TEMPLATE_DOWNLOAD_PATH: &str = "/api/download_template";
pub const SCHEDULE_DOWNLOAD_PATH: &str = "/api/download_schedule";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    pub schedule_data: ScheduleData,
    pub table_visible: bool,
}

/// Event handlers of the main view. Handlers never touch the UI directly;
/// they return the effects for the view to dispatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainController {
    model: ViewModel,
}

impl MainController {
    pub fn on_init() -> Self {
        Self {
            model: ViewModel::default(),
        }
    }

    pub fn model(&self) -> &ViewModel {
        &self.model
    }

    pub fn handle_file_select(&self, event: &FileSelectEvent) -> Vec<UiEffect> {
        match event.files.first() {
            Some(file) => {
                debug!(file = %file.path.display(), "file selected");
                Vec::new()
            }
            None => vec![UiEffect::Toast(SELECT_FILE_FIRST.to_string())],
        }
    }

    pub fn handle_upload_press(&self, widget_value: Option<&SelectedFile>) -> Vec<UiEffect> {
        if widget_value.is_none() {
            return vec![UiEffect::Toast(SELECT_FILE_FIRST.to_string())];
        }
        vec![UiEffect::StartUpload]
    }

    pub fn handle_upload_complete(&mut self, event: &UploadCompleteEvent) -> Vec<UiEffect> {
        let payload: Value = match serde_json::from_str(&event.response_raw) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(status = ?event.status, "upload response is not json: {err}");
                return vec![UiEffect::ErrorDialog(UNEXPECTED_FORMAT.to_string())];
            }
        };

        if let Some(message) = error_message(&payload) {
            warn!(status = ?event.status, "server rejected upload: {message}");
            return vec![UiEffect::ErrorDialog(message)];
        }

        match self.bind_schedule(payload) {
            Ok(row_count) => {
                info!(row_count, "schedule bound to view");
                vec![UiEffect::Toast(SCHEDULE_GENERATED.to_string())]
            }
            Err(err) => vec![UiEffect::ErrorDialog(format!("{PROCESSING_FAILED}{err}"))],
        }
    }

    pub fn handle_template_download(&self) -> Vec<UiEffect> {
        vec![UiEffect::Navigate(TEMPLATE_DOWNLOAD_PATH.to_string())]
    }

    pub fn handle_schedule_download(&self) -> Vec<UiEffect> {
        vec![UiEffect::Navigate(SCHEDULE_DOWNLOAD_PATH.to_string())]
    }

    fn bind_schedule(&mut self, payload: Value) -> Result<usize> {
        let data = ScheduleData::try_from(payload)?;
        let row_count = data.len();
        self.model.schedule_data = data;
        self.model.table_visible = true;
        Ok(row_count)
    }
}

/// The `error` field of an object payload, when it carries a message.
/// Empty strings, `null`, `false` and zero count as no error.
pub fn error_message(payload: &Value) -> Option<String> {
    let field = payload.as_object()?.get("error")?;
    match field {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
