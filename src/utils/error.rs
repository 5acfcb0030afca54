use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Search query is empty")]
    EmptyQuery,

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Source '{endpoint}' responded with status {status}")]
    SourceStatusError { endpoint: String, status: u16 },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Network,
    Data,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FinderError::EmptyQuery => ErrorCategory::Input,
            FinderError::HttpError(_) | FinderError::SourceStatusError { .. } => {
                ErrorCategory::Network
            }
            FinderError::IoError(_) => ErrorCategory::System,
            FinderError::SerializationError(_) => ErrorCategory::Data,
            FinderError::ConfigValidationError { .. }
            | FinderError::InvalidConfigValueError { .. }
            | FinderError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FinderError::RenderError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FinderError::EmptyQuery => ErrorSeverity::Low,
            FinderError::HttpError(_) | FinderError::SourceStatusError { .. } => {
                ErrorSeverity::Medium
            }
            FinderError::SerializationError(_)
            | FinderError::ConfigValidationError { .. }
            | FinderError::InvalidConfigValueError { .. }
            | FinderError::MissingConfigError { .. }
            | FinderError::RenderError { .. } => ErrorSeverity::High,
            FinderError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Message suitable for showing to the person at the keyboard.
    pub fn user_friendly_message(&self) -> String {
        match self {
            FinderError::EmptyQuery => "Please enter a search term".to_string(),
            FinderError::HttpError(_) => "Could not reach the data service".to_string(),
            FinderError::SourceStatusError { status, .. } => {
                format!("The data service answered with HTTP {}", status)
            }
            FinderError::IoError(e) => format!("Could not read or write a file: {}", e),
            FinderError::SerializationError(_) => "The data file is not valid JSON".to_string(),
            FinderError::ConfigValidationError { field, .. }
            | FinderError::InvalidConfigValueError { field, .. } => {
                format!("The configuration value '{}' is not valid", field)
            }
            FinderError::MissingConfigError { field } => {
                format!("The configuration value '{}' is required", field)
            }
            FinderError::RenderError { .. } => "Could not display the results".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Type a category such as 'food' or 'refill' and try again",
            ErrorCategory::Configuration => "Check the configuration file and command-line flags",
            ErrorCategory::Network => "Check the endpoint URL and your network connection",
            ErrorCategory::Data => "Make sure the JSON file matches the expected format",
            ErrorCategory::Output => "Try another output format",
            ErrorCategory::System => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_low_severity_input_error() {
        let err = FinderError::EmptyQuery;
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "Please enter a search term");
    }

    #[test]
    fn test_source_status_is_network_error() {
        let err = FinderError::SourceStatusError {
            endpoint: "http://localhost/leaderboard".to_string(),
            status: 503,
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("503"));
        assert!(err.to_string().contains("http://localhost/leaderboard"));
    }

    #[test]
    fn test_io_error_converts_and_is_critical() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: FinderError = io.into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
