use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use tracing::{error, info};

use crate::ui::state::app_state::Toast;
use crate::usecase::ports::shell::Shell;
use crate::usecase::services::download_service::DownloadService;

#[derive(Clone)]
pub struct DesktopShell {
    toast: Signal<Option<Toast>>,
    downloads: DownloadService,
}

impl DesktopShell {
    pub fn new(toast: Signal<Option<Toast>>, downloads: DownloadService) -> Self {
        Self { toast, downloads }
    }
}

impl Shell for DesktopShell {
    fn toast(&self, message: &str) {
        let mut toast = self.toast;
        let id = match &*toast.peek() {
            Some(current) => current.id + 1,
            None => 0,
        };
        toast.set(Some(Toast {
            id,
            message: message.to_string(),
        }));
    }

    fn error_dialog(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title("Error")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    /// A desktop window has no address bar; following a download link means
    /// fetching it and saving the file where a browser would.
    fn navigate(&self, path: &str) {
        let shell = self.clone();
        let path = path.to_string();
        info!(path = %path, "navigating");
        spawn(async move {
            match shell.downloads.download(&path).await {
                Ok(saved) => shell.toast(&format!("Saved to {}", saved.display())),
                Err(err) => {
                    error!("{err:#}");
                    shell.error_dialog(&format!("{err:#}"));
                }
            }
        });
    }
}
