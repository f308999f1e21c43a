use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO_FAILURE: {0}")]
    Io(String),
    #[error("PARSE_FAILURE: {0}")]
    Parse(String),
    #[error("NOT_FOUND: {0}")]
    NotFound(String),
    #[error("IMAGE_FAILURE: {0}")]
    Image(String),
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        if value.is_io() {
            Self::Io(value.to_string())
        } else {
            Self::Parse(value.to_string())
        }
    }
}

impl From<image::ImageError> for AppError {
    fn from(value: image::ImageError) -> Self {
        match value {
            image::ImageError::IoError(error) => Self::Io(error.to_string()),
            other => Self::Image(other.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
