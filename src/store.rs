use crate::config::StoreConfig;
use crate::errors::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// The note collection persisted as one JSON document, normally an array.
///
/// `read`/`write` report typed errors. `load_data`/`save_data` are the host
/// boundary exposed to the page: failures are logged and collapse to an empty
/// collection or `false`.
#[derive(Debug, Clone)]
pub struct NoteStore {
    config: StoreConfig,
}

impl NoteStore {
    /// Creates the data directory (and missing parents) if needed.
    pub fn open(config: StoreConfig) -> AppResult<Self> {
        fs::create_dir_all(config.data_dir()).map_err(|error| {
            AppError::Io(format!(
                "failed to create data dir {}: {}",
                config.data_dir().display(),
                error
            ))
        })?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn data_file(&self) -> PathBuf {
        self.config.data_file()
    }

    /// Missing file reads as an empty collection. Parsed contents come back as-is.
    pub fn read(&self) -> AppResult<Value> {
        let path = self.data_file();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(empty_collection()),
            Err(error) => return Err(AppError::Io(error.to_string())),
        };

        serde_json::from_slice(&bytes).map_err(AppError::from)
    }

    /// Replaces the whole file. Not atomic.
    pub fn write(&self, data: &Value) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(data)?;
        fs::write(self.data_file(), bytes).map_err(|error| AppError::Io(error.to_string()))
    }

    pub fn load_data(&self) -> Value {
        match self.read() {
            Ok(data) => {
                tracing::debug!(kind = json_kind(&data), "note data loaded");
                data
            }
            Err(error) => {
                tracing::error!(
                    error = %error,
                    path = %self.data_file().display(),
                    "failed to load note data, starting empty"
                );
                empty_collection()
            }
        }
    }

    pub fn save_data(&self, data: &Value) -> bool {
        match self.write(data) {
            Ok(()) => {
                tracing::debug!(kind = json_kind(data), "note data saved");
                true
            }
            Err(error) => {
                tracing::error!(
                    error = %error,
                    path = %self.data_file().display(),
                    "failed to save note data"
                );
                false
            }
        }
    }
}

fn empty_collection() -> Value {
    Value::Array(Vec::new())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
