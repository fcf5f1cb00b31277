//! Saving a generated portrait to disk

use std::path::{Path, PathBuf};

use base64::Engine;
use log::info;
use thiserror::Error;

const FILENAME_PREFIX: &str = "personnage";
const FALLBACK_NAME: &str = "genere";
const IMAGE_EXTENSION: &str = "png";

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// `personnage-{name}.png`, with whitespace runs turned into hyphens
pub fn download_filename(name: &str) -> String {
    let slug = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .replace(['/', '\\'], "-");
    let slug = if slug.is_empty() {
        FALLBACK_NAME
    } else {
        slug.as_str()
    };
    format!("{}-{}.{}", FILENAME_PREFIX, slug, IMAGE_EXTENSION)
}

/// Decodes either raw base64 or a `data:<mime>;base64,<payload>` URL
pub fn decode_image(payload: &str) -> Result<Vec<u8>, DownloadError> {
    let payload = payload.trim();
    let encoded = match payload.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(',')
            .map(|(_, data)| data)
            .unwrap_or(rest),
        None => payload,
    };
    Ok(base64::engine::general_purpose::STANDARD.decode(encoded)?)
}

/// Writes the image into `dir` and returns the written path
pub async fn save_image(dir: &Path, name: &str, payload: &str) -> Result<PathBuf, DownloadError> {
    let bytes = decode_image(payload)?;
    let path = dir.join(download_filename(name));

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| DownloadError::Write {
            path: dir.display().to_string(),
            source,
        })?;
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|source| DownloadError::Write {
            path: path.display().to_string(),
            source,
        })?;

    info!("[download] Saved {} bytes to {:?}", bytes.len(), path);
    Ok(path)
}
