use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlightError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed flight record: {line}")]
    FormatError { line: String },

    #[error("Price must be a whole number: {input}")]
    ValidationError { input: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    ConfigError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    DataFormat,
    Validation,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FlightError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FlightError::IoError(_) => ErrorCategory::Io,
            FlightError::FormatError { .. } => ErrorCategory::DataFormat,
            FlightError::ValidationError { .. } => ErrorCategory::Validation,
            FlightError::ConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單行格式錯誤在載入時已被跳過，不會中斷流程
            FlightError::FormatError { .. } => ErrorSeverity::Low,
            FlightError::ValidationError { .. } => ErrorSeverity::Medium,
            FlightError::ConfigError { .. } => ErrorSeverity::High,
            FlightError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FlightError::IoError(_) => {
                "Check that the data file exists and the output location is writable".to_string()
            }
            FlightError::FormatError { .. } => {
                "Fix the line to match ORIGIN,DEST,PRICE".to_string()
            }
            FlightError::ValidationError { .. } => {
                "Enter a whole number, e.g. 500".to_string()
            }
            FlightError::ConfigError { .. } => {
                "Adjust the command-line arguments and retry".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FlightError::IoError(e) => format!("File operation failed: {}", e),
            FlightError::FormatError { line } => {
                format!("Could not understand flight record: {}", line)
            }
            FlightError::ValidationError { input } => {
                format!("\"{}\" is not a valid price", input)
            }
            FlightError::ConfigError { field, reason, .. } => {
                format!("Configuration problem with {}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FlightError>;
