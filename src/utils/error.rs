use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Snapshot encoding failed: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    #[error("Snapshot decoding failed: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    #[error("Snapshot format error: {message}")]
    SnapshotFormatError { message: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("A user with identifier '{identifier}' already exists")]
    DuplicateIdentifier { identifier: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Input stream closed")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Io,
    Deserialization,
    Config,
    Input,
}

impl RegistryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::ValidationError { .. } | RegistryError::DuplicateIdentifier { .. } => {
                ErrorCategory::Validation
            }
            RegistryError::FileNotFound { .. } => ErrorCategory::NotFound,
            RegistryError::IoError(_) | RegistryError::EncodeError(_) => ErrorCategory::Io,
            RegistryError::DecodeError(_) | RegistryError::SnapshotFormatError { .. } => {
                ErrorCategory::Deserialization
            }
            RegistryError::TomlError(_) | RegistryError::ConfigError { .. } => {
                ErrorCategory::Config
            }
            RegistryError::InputClosed => ErrorCategory::Input,
        }
    }

    /// 給操作者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => self.to_string(),
            ErrorCategory::NotFound => self.to_string(),
            ErrorCategory::Io => format!("Could not access the file ({})", self),
            ErrorCategory::Deserialization => {
                "The data file is damaged or was written by an incompatible version".to_string()
            }
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => "No more input available".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
