/// Application errors. The diagram itself cannot fail; only its hosting can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Browser globals (window/document) are unavailable.
    BrowserUnavailable(String),
    /// The requested mount target does not exist or is not an HTML element.
    MountTargetNotFound(String),
    SerializationError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BrowserUnavailable(msg) => write!(f, "Browser Unavailable: {}", msg),
            AppError::MountTargetNotFound(id) => write!(f, "Mount Target Not Found: #{}", id),
            AppError::SerializationError(msg) => write!(f, "Serialization Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::SerializationError(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
