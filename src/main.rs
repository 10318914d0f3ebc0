use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

mod app;
mod config;

mod domain {
    pub mod entities {
        pub mod schedule;
        pub mod upload;
    }
}

mod infra {
    pub mod http {
        pub mod client;
    }
    pub mod import {
        pub mod csv;
        pub mod xlsx;
    }
}

mod platform {
    pub mod device;
    pub mod desktop {
        pub mod blocking;
        pub mod shell;
        pub mod uploader;
    }
}

mod ui {
    pub mod style;
    pub mod controller {
        pub mod dispatch;
        pub mod main_controller;
    }
    pub mod state {
        pub mod app_state;
    }
}

mod usecase {
    pub mod ports {
        pub mod client;
        pub mod shell;
    }
    pub mod services {
        pub mod download_service;
        pub mod preview_service;
        pub mod upload_service;
    }
}


use crate::app::App;
use crate::config::{default_webview_data_dir, AppConfig};
use crate::platform::device::DeviceInfo;

fn main() -> ExitCode {
    init_tracing();

    match launch() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("startup failed: {err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}

fn launch() -> Result<()> {
    let config = AppConfig::from_env()?;
    let device = DeviceInfo::detect();
    let webview_data_dir = default_webview_data_dir()?;
    info!(
        server = %config.server_url,
        downloads = %config.download_dir.display(),
        device = %device.label(),
        "starting maintenance desk"
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title("Maintenance Schedule"),
                )
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .with_context(device)
        .launch(App);

    Ok(())
}
