use chrono::Local;
use dioxus::prelude::*;
use tracing::{info, warn};

use crate::domain::entities::upload::{FilePreview, SelectedFile};
use crate::platform::desktop::blocking::run_blocking;
use crate::platform::desktop::shell::DesktopShell;
use crate::ui::controller::dispatch::dispatch;
use crate::ui::controller::main_controller::MainController;
use crate::usecase::ports::shell::UploadWidget;
use crate::usecase::services::preview_service::PreviewService;
use crate::usecase::services::upload_service::UploadService;

#[derive(Clone)]
pub struct DesktopUploader {
    pub selected: Signal<Option<SelectedFile>>,
    pub preview: Signal<Option<FilePreview>>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
    pub controller: Signal<MainController>,
    pub shell: DesktopShell,
    pub uploads: UploadService,
}

impl DesktopUploader {
    pub fn select(&self, file: SelectedFile) {
        let mut selected = self.selected;
        let mut preview = self.preview;
        let mut status = self.status;

        match run_blocking("preview file", || PreviewService::preview(&file)) {
            Ok(loaded) => {
                if !loaded.missing_columns.is_empty() {
                    warn!(file = %file.name, missing = ?loaded.missing_columns, "issue list lacks columns");
                }
                status.set(format!("Selected {}: {}", file.name, loaded.summary()));
                preview.set(Some(loaded));
            }
            Err(err) => {
                warn!(file = %file.name, "preview failed: {err:#}");
                status.set(format!("Selected {} (preview unavailable: {err})", file.name));
                preview.set(None);
            }
        }
        selected.set(Some(file));
    }
}

impl UploadWidget for DesktopUploader {
    fn value(&self) -> Option<SelectedFile> {
        (*self.selected.peek()).clone()
    }

    fn upload(&self) {
        let Some(file) = self.value() else {
            return;
        };

        let mut busy = self.busy;
        let mut status = self.status;
        busy.set(true);
        status.set(format!("Uploading {}…", file.name));
        info!(file = %file.path.display(), "upload started");

        let widget = self.clone();
        spawn(async move {
            let event = widget.uploads.upload(file).await;

            let mut busy = widget.busy;
            let mut status = widget.status;
            let mut controller = widget.controller;
            busy.set(false);
            let effects = controller.write().handle_upload_complete(&event);
            let finished_at = Local::now().format("%H:%M:%S");
            status.set(match event.status {
                Some(code) => format!("Upload finished at {finished_at} (HTTP {code})"),
                None => format!("Upload failed at {finished_at}"),
            });

            dispatch(effects, &widget.shell, &widget);
        });
    }
}
