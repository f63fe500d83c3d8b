use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ArgumentError: {0}")]
    Argument(#[from] ArgumentError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("InternalError: {0}")]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
pub enum ArgumentError {
    /// Message is the bare index of the first absent value.
    #[error("{index}")]
    NullArgument { index: usize },
    #[error("all objects are null")]
    AllNull,
    #[error("length = {length}")]
    InvalidBatchLength { length: usize },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Working directory unavailable: {source}")]
    WorkingDir { source: std::io::Error },
    #[error("Unknown encoding: {label}")]
    UnknownEncoding { label: String },
    #[error("Malformed {encoding} input")]
    Decode { encoding: String },
    #[error("Content not representable in {encoding}")]
    Encode { encoding: String },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum InternalError {
    #[error("Could not build file URL from {path}")]
    UrlConstruction { path: String },
}

/// Coarse classification of every failure the crate can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    IoFailure,
    InternalInvariantViolation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "critical",
            ErrorSeverity::High => "high",
            ErrorSeverity::Medium => "medium",
            ErrorSeverity::Low => "low",
        }
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Argument(_) => ErrorKind::InvalidArgument,
            AppError::Storage(_) => ErrorKind::IoFailure,
            AppError::Internal(_) => ErrorKind::InternalInvariantViolation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Argument(_) => ErrorSeverity::Low,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::FileIo { .. }
                | StorageError::WorkingDir { .. }
                | StorageError::ConfigParseError { .. }
                | StorageError::ConfigDirNotFound => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Internal(_) => ErrorSeverity::Critical,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Storage(StorageError::UnknownEncoding { .. }) => {
                Some("Use a standard encoding label such as 'UTF-8' or 'ISO-8859-1'".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("Check ~/.config/utilbelt/config.toml for TOML syntax errors".to_string())
            }
            AppError::Internal(_) => Some("This is a bug, please report it".to_string()),
            _ => None,
        }
    }
}
