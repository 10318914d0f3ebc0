use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::upload::{FilePreview, SelectedFile};
use crate::ui::controller::main_controller::MainController;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

pub struct AppState {
    pub controller: Signal<MainController>,
    pub selected_file: Signal<Option<SelectedFile>>,
    pub preview: Signal<Option<FilePreview>>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
    pub toast: Signal<Option<Toast>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            controller: use_signal(MainController::on_init),
            selected_file: use_signal(|| None::<SelectedFile>),
            preview: use_signal(|| None::<FilePreview>),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
            toast: use_signal(|| None::<Toast>),
        }
    }
}
