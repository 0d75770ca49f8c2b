use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{service} responded with {status}: {body}")]
    UpstreamError {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Import cannot proceed: {message}")]
    PreconditionError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SyncError {
    pub fn upstream(service: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self::UpstreamError {
            service,
            status,
            body: body.into(),
        }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SyncError::HttpError(_) => ErrorCategory::Network,
            SyncError::UpstreamError { .. } | SyncError::PreconditionError { .. } => {
                ErrorCategory::Upstream
            }
            SyncError::ConfigError { .. }
            | SyncError::MissingConfigError { .. }
            | SyncError::InvalidConfigValueError { .. }
            | SyncError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            SyncError::SerializationError(_) | SyncError::ProcessingError { .. } => {
                ErrorCategory::Data
            }
            SyncError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SyncError::HttpError(_) | SyncError::UpstreamError { .. } => ErrorSeverity::Medium,
            SyncError::SerializationError(_) | SyncError::ProcessingError { .. } => {
                ErrorSeverity::High
            }
            SyncError::PreconditionError { .. } => ErrorSeverity::High,
            SyncError::ConfigError { .. }
            | SyncError::MissingConfigError { .. }
            | SyncError::InvalidConfigValueError { .. }
            | SyncError::ConfigValidationError { .. }
            | SyncError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity to TheMovieDB and Strapi",
            ErrorCategory::Upstream => {
                "Verify the TMDB API key, the Strapi token and that Strapi is running"
            }
            ErrorCategory::Configuration => {
                "Review the configuration file or the TMDB_API_KEY / STRAPI_API_URL / STRAPI_TOKEN variables"
            }
            ErrorCategory::Data => "Check that the Strapi content types match the expected schema",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SyncError::HttpError(_) => "Could not reach a remote service".to_string(),
            SyncError::UpstreamError {
                service, status, ..
            } => format!("{} rejected the request (HTTP {})", service, status),
            SyncError::PreconditionError { message } => message.clone(),
            SyncError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            SyncError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
