use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::infra::http::client::ScheduleClient;
use crate::platform::desktop::blocking::run_blocking;
use crate::usecase::ports::client::DownloadedFile;

#[derive(Debug, Clone)]
pub struct DownloadService {
    client: ScheduleClient,
    download_dir: PathBuf,
}

impl DownloadService {
    pub fn new(client: ScheduleClient, download_dir: PathBuf) -> Self {
        Self {
            client,
            download_dir,
        }
    }

    pub async fn download(&self, path: &str) -> Result<PathBuf> {
        let file = self
            .client
            .download(path)
            .await
            .map_err(|err| anyhow!("download of {path} failed: {err}"))?;
        let saved = run_blocking("save download", || {
            save_download(&self.download_dir, &file)
        })?;
        info!(path, saved = %saved.display(), "download saved");
        Ok(saved)
    }
}

pub fn save_download(dir: &Path, file: &DownloadedFile) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create download dir: {}", dir.display()))?;
    let target = unique_target(dir, &file.file_name);
    std::fs::write(&target, &file.bytes)
        .with_context(|| format!("failed to write download: {}", target.display()))?;
    Ok(target)
}

/// `name.ext`, then `name (1).ext`, `name (2).ext`, ... until unused.
pub fn unique_target(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (file_name, None),
    };
    let mut counter = 1_u32;
    loop {
        let name = match ext {
            Some(ext) => format!("{stem} ({counter}).{ext}"),
            None => format!("{stem} ({counter})"),
        };
        let candidate = dir.join(name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
