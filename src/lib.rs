pub mod config;
pub mod errors;
pub mod icon;
pub mod store;

use crate::config::{StoreConfig, WindowConfig};
use crate::store::NoteStore;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tauri::Manager;
use tracing_appender::non_blocking::WorkerGuard;

static LOG_GUARD: std::sync::OnceLock<WorkerGuard> = std::sync::OnceLock::new();

#[derive(Clone)]
struct AppState {
    store: Arc<NoteStore>,
}

#[tauri::command]
fn load_data(state: tauri::State<'_, AppState>) -> Value {
    state.store.load_data()
}

#[tauri::command]
fn save_data(state: tauri::State<'_, AppState>, data: Value) -> bool {
    state.store.save_data(&data)
}

pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            let home_dir = app.path().home_dir().map_err(|error| error.to_string())?;
            let config = StoreConfig::from_home(&home_dir);
            init_tracing(&config.log_dir())?;
            let store = NoteStore::open(config).map_err(|error| {
                tracing::error!(error = %error, "failed to open note store");
                error.to_string()
            })?;
            tracing::info!(path = %store.data_file().display(), "note store ready");

            build_main_window(app, &WindowConfig::default())?;
            app.manage(AppState {
                store: Arc::new(store),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![load_data, save_data])
        .run(tauri::generate_context!())
        .expect("failed to run tauri app");
}

fn build_main_window(app: &tauri::App, window: &WindowConfig) -> tauri::Result<()> {
    tauri::WebviewWindowBuilder::new(app, window.label, tauri::WebviewUrl::App(window.entry.into()))
        .title(window.title)
        .inner_size(window.width, window.height)
        .devtools(window.devtools)
        .build()?;
    Ok(())
}

fn init_tracing(log_dir: &Path) -> Result<(), String> {
    std::fs::create_dir_all(log_dir).map_err(|error| error.to_string())?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "notes.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = LOG_GUARD.set(guard);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .with_writer(non_blocking)
        .try_init()
        .map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_starts_before_data_dir_exists() {
        let home = tempfile::tempdir().expect("temp home");
        let config = StoreConfig::from_home(home.path());
        assert!(!config.data_dir().exists());

        let _ = init_tracing(&config.log_dir());
        assert!(config.log_dir().is_dir());

        let store = NoteStore::open(config).expect("store opened");
        assert_eq!(store.load_data(), serde_json::json!([]));
    }
}
