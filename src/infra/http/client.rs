use anyhow::{Context, Result};
use percent_encoding::percent_decode_str;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::join_url;
use crate::usecase::ports::client::{ClientError, DownloadedFile, UploadPayload, UploadReply};

pub const UPLOAD_PATH: &str = "/api/upload_issues";
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct ScheduleClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ScheduleClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Posts the issue list and hands back the body whatever the status;
    /// error statuses still carry a JSON body the view knows how to show.
    pub async fn upload_issues(&self, payload: UploadPayload) -> Result<UploadReply, ClientError> {
        let url = self.endpoint(UPLOAD_PATH);
        let size = payload.bytes.len();
        let part = Part::bytes(payload.bytes)
            .file_name(payload.file_name.clone())
            .mime_str(payload.mime)
            .map_err(|err| ClientError::Transport(format!("invalid upload mime type: {err}")))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        debug!(%url, file = %payload.file_name, size, "posting issue list");
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| ClientError::Transport(format!("failed to reach {url}: {err}")))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| ClientError::Transport(format!("failed to read response: {err}")))?;
        info!(status, bytes = body.len(), "upload finished");

        Ok(UploadReply { status, body })
    }

    pub async fn download(&self, path: &str) -> Result<DownloadedFile, ClientError> {
        let url = self.endpoint(path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| ClientError::Transport(format!("failed to reach {url}: {err}")))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: server_error_text(&body),
            });
        }

        let file_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_content_disposition)
            .unwrap_or_else(|| fallback_file_name(path));
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ClientError::Transport(format!("failed to read {url}: {err}")))?
            .to_vec();
        info!(%url, file = %file_name, bytes = bytes.len(), "download finished");

        Ok(DownloadedFile { file_name, bytes })
    }
}

/// The server reports failures as `{"error": "..."}`; anything else is
/// passed through as-is.
pub fn server_error_text(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_string(),
    }
}

/// `filename*=` (RFC 5987) wins over a plain `filename=`.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    for param in split_params(header) {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        let value = unquote(value.trim());
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                let encoded = value.splitn(3, '\'').nth(2).unwrap_or(value.as_str());
                let decoded = percent_decode_str(encoded).decode_utf8_lossy();
                if let Some(name) = sanitize_file_name(&decoded) {
                    return Some(name);
                }
            }
            "filename" => plain = sanitize_file_name(&value),
            _ => {}
        }
    }
    plain
}

/// Splits on `;` outside quoted strings.
fn split_params(header: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;
    for (idx, ch) in header.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                params.push(header[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    params.push(header[start..].trim());
    params
}

fn unquote(value: &str) -> String {
    let Some(inner) = value
        .strip_prefix('"')
        .map(|rest| rest.strip_suffix('"').unwrap_or(rest))
    else {
        return value.to_string();
    };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.extend(chars.next()),
            other => out.push(other),
        }
    }
    out
}

pub fn fallback_file_name(path: &str) -> String {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(sanitize_file_name)
        .unwrap_or_else(|| "download".to_string())
}

/// Keeps the last path segment and swaps out characters Windows refuses in
/// file names.
fn sanitize_file_name(raw: &str) -> Option<String> {
    let last = raw.rsplit(['/', '\\']).next()?;
    let name: String = last
        .chars()
        .map(|ch| match ch {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect();
    let name = name.trim().trim_end_matches(['.', ' ']);
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}
