use dioxus::prelude::*;
use rfd::FileDialog;

use crate::config::AppConfig;
use crate::domain::entities::schedule::{cell_text, column_alignment, column_label};
use crate::domain::entities::upload::{FileSelectEvent, SelectedFile};
use crate::infra::http::client::ScheduleClient;
use crate::platform::desktop::shell::DesktopShell;
use crate::platform::desktop::uploader::DesktopUploader;
use crate::platform::device::DeviceInfo;
use crate::ui::controller::dispatch::dispatch;
use crate::ui::state::app_state::AppState;
use crate::ui::style::{
    footer_style, root_container_style, table_cell_style, table_container_style,
    table_header_cell_style, toast_style, toolbar_style, TOAST_CSS,
};
use crate::usecase::ports::shell::UploadWidget;
use crate::usecase::services::download_service::DownloadService;
use crate::usecase::services::upload_service::UploadService;

pub const FILE_FILTER_NAME: &str = "Issue list";
pub const FILE_FILTER_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls"];

#[derive(Routable, Clone, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    MainView {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn MainView() -> Element {
    let config = use_context::<AppConfig>();
    let device = use_context::<DeviceInfo>();

    let AppState {
        controller,
        selected_file,
        preview,
        busy,
        status,
        toast,
    } = AppState::new();

    let client = use_hook(|| {
        ScheduleClient::new(config.server_url.clone()).map_err(|err| format!("{err:#}"))
    });
    let client = match client {
        Ok(client) => client,
        Err(err) => {
            return rsx! {
                div {
                    p { "Unable to start the HTTP client: {err}" }
                }
            };
        }
    };

    let shell = DesktopShell::new(
        toast,
        DownloadService::new(client.clone(), config.download_dir.clone()),
    );
    let uploader = DesktopUploader {
        selected: selected_file,
        preview,
        busy,
        status,
        controller,
        shell: shell.clone(),
        uploads: UploadService::new(client),
    };

    let shell_for_select = shell.clone();
    let uploader_for_select = uploader.clone();
    let shell_for_upload = shell.clone();
    let uploader_for_upload = uploader.clone();
    let shell_for_template = shell.clone();
    let uploader_for_template = uploader.clone();
    let shell_for_schedule = shell.clone();
    let uploader_for_schedule = uploader.clone();

    let model = controller.read().model().clone();
    let columns: Vec<(String, String, &'static str)> = model
        .schedule_data
        .columns()
        .into_iter()
        .map(|key| {
            let label = column_label(&key);
            let align = column_alignment(&model.schedule_data, &key);
            (key, label, align)
        })
        .collect();
    let selected_name = selected_file()
        .map(|file| file.name)
        .unwrap_or_else(|| "No file selected".to_string());
    let missing_columns = preview()
        .map(|loaded| loaded.missing_columns.join(", "))
        .unwrap_or_default();

    rsx! {
        style { {TOAST_CSS} }
        div {
            style: "{root_container_style()}",
            h2 { style: "margin: 4px 0;", "Maintenance Schedule" }
            nav {
                style: "{toolbar_style()}",
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        let picked = FileDialog::new()
                            .add_filter(FILE_FILTER_NAME, FILE_FILTER_EXTENSIONS)
                            .pick_file();
                        let event = FileSelectEvent {
                            files: picked.into_iter().map(SelectedFile::from_path).collect(),
                        };
                        let effects = controller.read().handle_file_select(&event);
                        if let Some(file) = event.files.first() {
                            uploader_for_select.select(file.clone());
                        }
                        dispatch(effects, &shell_for_select, &uploader_for_select);
                    },
                    "Choose File…"
                }
                span { "{selected_name}" }
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        let value = uploader_for_upload.value();
                        let effects = controller.read().handle_upload_press(value.as_ref());
                        dispatch(effects, &shell_for_upload, &uploader_for_upload);
                    },
                    if busy() { "Uploading…" } else { "Upload" }
                }
                button {
                    onclick: move |_| {
                        let effects = controller.read().handle_template_download();
                        dispatch(effects, &shell_for_template, &uploader_for_template);
                    },
                    "Download Template"
                }
                button {
                    onclick: move |_| {
                        let effects = controller.read().handle_schedule_download();
                        dispatch(effects, &shell_for_schedule, &uploader_for_schedule);
                    },
                    "Download Schedule"
                }
                span { " {status}" }
            }

            if !missing_columns.is_empty() {
                p {
                    style: "color: #b35900; margin: 0 0 6px 0;",
                    "Missing expected columns: {missing_columns}"
                }
            }

            if model.table_visible {
                div {
                    style: "{table_container_style()}",
                    table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                        thead {
                            tr {
                                for (key, label, _) in columns.iter() {
                                    th { key: "{key}", style: "{table_header_cell_style()}", "{label}" }
                                }
                            }
                        }
                        tbody {
                            for (row_idx, row) in model.schedule_data.rows().iter().enumerate() {
                                tr { key: "{row_idx}",
                                    for (key, _, align) in columns.iter() {
                                        td { style: "{table_cell_style(align)}", "{cell_text(row, key)}" }
                                    }
                                }
                            }
                        }
                    }
                }
                if model.schedule_data.is_empty() {
                    p { style: "margin: 4px 0;", "No maintenance is due for the uploaded issues." }
                } else {
                    p { style: "margin: 4px 0;", "{model.schedule_data.len()} scheduled items" }
                }
            }

            footer {
                style: "{footer_style()}",
                "Server: {config.server_url} · {device.label()}"
            }

            if let Some(current) = toast() {
                div { key: "{current.id}", style: "{toast_style()}", "{current.message}" }
            }
        }
    }
}
