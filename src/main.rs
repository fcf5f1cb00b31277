// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use log::{error, info, warn};
use portrait_studio::download::save_image;
use portrait_studio::models::GALLERY_IMAGES;
use portrait_studio::paths::{get_config_path, get_download_dir, get_quota_db_path};
use portrait_studio::prompts::build_prompt;
use portrait_studio::{
    CharacterForm, FormOptions, HttpImageBackend, QuotaStatus, QuotaTracker, SqliteStore, Studio,
    StudioConfig, SubmissionGate, SubmissionState,
};
use tauri::{command, Manager};
use tokio::sync::Mutex;

type DesktopStudio = Studio<SqliteStore, HttpImageBackend>;

pub struct AppState {
    pub studio: Mutex<DesktopStudio>,
    pub gate: SubmissionGate,
}

fn init_state() -> Result<AppState, String> {
    let config_path = get_config_path()?;
    let config = StudioConfig::load(&config_path).map_err(|e| e.to_string())?;

    let db_path = get_quota_db_path()?;
    let store = SqliteStore::open(&db_path).map_err(|e| e.to_string())?;
    let quota = QuotaTracker::load_today(store, config.daily_limit).map_err(|e| e.to_string())?;
    info!(
        "[startup] Quota: {} of {} generations used today",
        quota.count(),
        quota.limit()
    );

    let backend = HttpImageBackend::new(config.backend_url.clone());
    info!("[startup] Backend: {}", backend.url());

    Ok(AppState {
        studio: Mutex::new(Studio::new(quota, backend)),
        gate: SubmissionGate::new(),
    })
}

// ============ Form Commands ============

#[command]
fn get_form_options() -> FormOptions {
    FormOptions::all()
}

#[command]
fn get_gallery_images() -> Vec<&'static str> {
    GALLERY_IMAGES.to_vec()
}

#[command]
fn preview_prompt(form: CharacterForm) -> String {
    build_prompt(&form)
}

// ============ Generation Commands ============

#[command]
async fn get_quota_status(state: tauri::State<'_, AppState>) -> Result<QuotaStatus, String> {
    Ok(state.studio.lock().await.quota_status())
}

#[command]
async fn generate_image(
    form: CharacterForm,
    state: tauri::State<'_, AppState>,
) -> Result<SubmissionState, String> {
    let _pass = state.gate.try_enter().ok_or_else(|| {
        warn!("[generate_image] Rejected: a generation is already in progress");
        "A generation is already in progress".to_string()
    })?;
    info!("[generate_image] Starting generation for {:?}", form.name);
    let mut studio = state.studio.lock().await;
    Ok(studio.submit(&form).await.clone())
}

#[command]
async fn download_image(image: String, name: String) -> Result<String, String> {
    let dir = get_download_dir()?;
    let path = save_image(&dir, &name, &image)
        .await
        .map_err(|e| e.to_string())?;
    Ok(path.display().to_string())
}

// ============ Frontend Logging ============

#[command]
fn log_from_frontend(level: String, message: String) {
    match level.as_str() {
        "error" => error!("[Frontend] {}", message),
        "warn" => warn!("[Frontend] {}", message),
        _ => info!("[Frontend] {}", message),
    }
}

fn main() {
    tauri::Builder::default()
        .setup(|app| {
            info!("=== Portrait Studio Starting ===");
            let state = init_state().map_err(|e| {
                error!("[startup] {}", e);
                e
            })?;
            app.manage(state);
            Ok(())
        })
        .plugin(
            tauri_plugin_log::Builder::new()
                .target(tauri_plugin_log::Target::new(
                    tauri_plugin_log::TargetKind::LogDir {
                        file_name: Some("portrait-studio".into()),
                    },
                ))
                .level(log::LevelFilter::Info)
                .build(),
        )
        .invoke_handler(tauri::generate_handler![
            get_form_options,
            get_gallery_images,
            preview_prompt,
            get_quota_status,
            generate_image,
            download_image,
            log_from_frontend,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
