use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Dataset contains no population records")]
    EmptyDataset,

    #[error("Year {year} is not present in the dataset (available: {first}-{last})")]
    YearNotFound { year: i32, first: i32, last: i32 },

    #[error("Remote source {url} responded with status {status}")]
    RemoteSourceError { url: String, status: u16 },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Network,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl InsightError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            InsightError::ConfigError { .. }
            | InsightError::ConfigValidationError { .. }
            | InsightError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            InsightError::CsvError(_)
            | InsightError::EmptyDataset
            | InsightError::YearNotFound { .. } => ErrorCategory::Data,
            InsightError::ApiError(_) | InsightError::RemoteSourceError { .. } => {
                ErrorCategory::Network
            }
            InsightError::IoError(_) => ErrorCategory::Io,
            InsightError::ZipError(_)
            | InsightError::SerializationError(_)
            | InsightError::RenderError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常可以重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InsightError::CsvError(_) => {
                "Check that the CSV has 'Year' and 'Value' columns with integer values"
            }
            InsightError::EmptyDataset => "Provide a CSV with at least one population row",
            InsightError::YearNotFound { .. } => {
                "Run with --list-years to see the years available in the dataset"
            }
            InsightError::ApiError(_) | InsightError::RemoteSourceError { .. } => {
                "Check the source URL and your network connection, then retry"
            }
            InsightError::IoError(_) => {
                "Check that the input file exists and the output directory is writable"
            }
            InsightError::ConfigError { .. }
            | InsightError::ConfigValidationError { .. }
            | InsightError::InvalidConfigValueError { .. } => {
                "Review the command line arguments or the configuration file"
            }
            InsightError::ZipError(_)
            | InsightError::SerializationError(_)
            | InsightError::RenderError { .. } => {
                "Retry without --zip or report the issue with the verbose log"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            InsightError::CsvError(e) => format!("The population CSV could not be read: {}", e),
            InsightError::YearNotFound { year, first, last } => format!(
                "No population figure for {}. The dataset covers {} to {}.",
                year, first, last
            ),
            InsightError::RemoteSourceError { url, status } => {
                format!("Downloading {} failed with HTTP {}", url, status)
            }
            InsightError::IoError(e) => format!("File system error: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InsightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_not_found_is_data_error() {
        let err = InsightError::YearNotFound {
            year: 1900,
            first: 1960,
            last: 2023,
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("1960 to 2023"));
    }

    #[test]
    fn test_remote_errors_are_retryable() {
        let err = InsightError::RemoteSourceError {
            url: "https://example.com/data.csv".to_string(),
            status: 503,
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = InsightError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
