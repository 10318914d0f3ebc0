use crate::domain::entities::upload::SelectedFile;

/// Side effects a view handler asks the shell to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    Toast(String),
    ErrorDialog(String),
    Navigate(String),
    StartUpload,
}

pub trait Shell {
    /// Transient, non-blocking notification.
    fn toast(&self, message: &str);
    /// Modal message; returns once the user dismisses it.
    fn error_dialog(&self, message: &str);
    fn navigate(&self, path: &str);
}

pub trait UploadWidget {
    fn value(&self) -> Option<SelectedFile>;
    fn upload(&self);
}
