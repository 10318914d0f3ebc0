use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use directories::{ProjectDirs, UserDirs};

pub const SERVER_URL_ENV: &str = "SCHEDULE_SERVER_URL";
pub const DOWNLOAD_DIR_ENV: &str = "SCHEDULE_DOWNLOAD_DIR";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Read-only settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_url: String,
    pub download_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let server_url = std::env::var(SERVER_URL_ENV).ok();
        let download_dir = std::env::var_os(DOWNLOAD_DIR_ENV).map(PathBuf::from);
        Self::resolve(server_url.as_deref(), download_dir)
    }

    pub fn resolve(server_url: Option<&str>, download_dir: Option<PathBuf>) -> Result<Self> {
        let server_url = normalize_server_url(server_url.unwrap_or(DEFAULT_SERVER_URL))?;
        let download_dir = match download_dir.filter(|dir| !dir.as_os_str().is_empty()) {
            Some(dir) => dir,
            None => default_download_dir()?,
        };
        Ok(Self {
            server_url,
            download_dir,
        })
    }
}

pub fn normalize_server_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        bail!("server url is empty")
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        bail!("server url must start with http:// or https://: {trimmed}")
    }
    Ok(trimmed.to_string())
}

pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "maintenance-desk")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn default_download_dir() -> Result<PathBuf> {
    if let Some(dir) = UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf)) {
        return Ok(dir);
    }
    Ok(project_dirs()?.data_local_dir().join("downloads"))
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
