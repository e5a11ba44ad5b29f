use crate::domain::model::EntityKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: u32 },

    #[error("{kind} {id} already exists")]
    AlreadyExists { kind: EntityKind, id: u32 },

    #[error("{kind} id {id} is reserved")]
    ReservedId { kind: EntityKind, id: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RegistryError {
    pub fn not_found(kind: EntityKind, id: u32) -> Self {
        Self::NotFound { kind, id }
    }

    pub fn already_exists(kind: EntityKind, id: u32) -> Self {
        Self::AlreadyExists { kind, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } | Self::AlreadyExists { .. } | Self::ReservedId { .. } => {
                ErrorSeverity::Medium
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFound { kind, id } => format!("No {} with id {} is registered", kind, id),
            Self::AlreadyExists { kind, id } => {
                format!("A {} with id {} is already registered", kind, id)
            }
            Self::ReservedId { kind, id } => {
                format!("Id {} is reserved and cannot be used for a {}", id, kind)
            }
            Self::IoError(e) => format!("Could not read input file: {}", e),
            Self::TomlError(e) => format!("Input file is not valid TOML: {}", e),
            Self::SerializationError(e) => format!("Could not render output: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' has invalid value '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "Add the record first, or check the id for typos",
            Self::AlreadyExists { .. } => {
                "Use a fresh id, or set registry.duplicate_ids = \"overwrite\""
            }
            Self::ReservedId { .. } => "Pick a non-zero id",
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::TomlError(_) => "Fix the TOML syntax near the reported line",
            Self::SerializationError(_) => "Report this as a bug",
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Correct the configuration value and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
