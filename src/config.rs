use std::path::{Path, PathBuf};

pub const DATA_DIR_NAME: &str = ".calendar_app_data";
pub const DATA_FILE_NAME: &str = "data.json";
const LOG_DIR_NAME: &str = "logs";

/// Where the note collection lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// `<home>/.calendar_app_data`
    pub fn from_home(home: &Path) -> Self {
        Self::new(home.join(DATA_DIR_NAME))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

/// Launch parameters for the main window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub label: &'static str,
    pub title: &'static str,
    pub entry: &'static str,
    pub width: f64,
    pub height: f64,
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            label: "main",
            title: "Gestor de Notas",
            entry: "index.html",
            width: 1200.0,
            height: 800.0,
            devtools: false,
        }
    }
}
