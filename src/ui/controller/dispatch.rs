use crate::usecase::ports::shell::{Shell, UiEffect, UploadWidget};

pub fn dispatch(effects: Vec<UiEffect>, shell: &dyn Shell, widget: &dyn UploadWidget) {
    for effect in effects {
        match effect {
            UiEffect::Toast(message) => shell.toast(&message),
            UiEffect::ErrorDialog(message) => shell.error_dialog(&message),
            UiEffect::Navigate(path) => shell.navigate(&path),
            UiEffect::StartUpload => widget.upload(),
        }
    }
}
