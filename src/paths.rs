//! Path utilities and file system helpers

use std::path::PathBuf;

/// Gets the application data directory
pub fn get_app_data_dir() -> Result<PathBuf, String> {
    dirs::data_dir()
        .map(|p| p.join("com.portrait.studio"))
        .ok_or_else(|| "Could not find app data directory".to_string())
}

/// Gets the quota database file path
pub fn get_quota_db_path() -> Result<PathBuf, String> {
    get_app_data_dir().map(|p| p.join("quota.db"))
}

/// Gets the studio configuration file path
pub fn get_config_path() -> Result<PathBuf, String> {
    get_app_data_dir().map(|p| p.join(".studio_config.json"))
}

/// Gets the directory downloaded portraits are written to
pub fn get_download_dir() -> Result<PathBuf, String> {
    match dirs::download_dir() {
        Some(dir) => Ok(dir),
        None => get_app_data_dir().map(|p| p.join("Downloads")),
    }
}
