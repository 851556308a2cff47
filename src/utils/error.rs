use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactBookError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parsing,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ContactBookError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContactBookError::IoError(_) => ErrorCategory::Io,
            ContactBookError::CsvError(_) | ContactBookError::SerializationError(_) => {
                ErrorCategory::Parsing
            }
            ContactBookError::ConfigValidationError { .. }
            | ContactBookError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ContactBookError::ValidationError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Parsing | ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ContactBookError::IoError(_) => "Check that the contact file exists and is readable",
            ContactBookError::CsvError(_) => {
                "Make sure the CSV file has a 'name,number,group' header row"
            }
            ContactBookError::SerializationError(_) => {
                "Make sure the JSON file is an array of {name, number, group} objects"
            }
            ContactBookError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the contact book file"
            }
            ContactBookError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value and run again"
            }
            ContactBookError::ValidationError { .. } => {
                "Every contact needs a non-empty name; fix the offending entry"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ContactBookError::IoError(e) => format!("Could not read contacts: {}", e),
            ContactBookError::CsvError(e) => format!("Contact CSV is malformed: {}", e),
            ContactBookError::SerializationError(e) => {
                format!("Contact JSON is malformed: {}", e)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactBookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let io = ContactBookError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.severity(), ErrorSeverity::Critical);

        let invalid = ContactBookError::ValidationError {
            message: "contact #1 has an empty name".to_string(),
        };
        assert_eq!(invalid.category(), ErrorCategory::Data);
        assert_eq!(invalid.severity(), ErrorSeverity::Medium);

        let config = ContactBookError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "expected a table".to_string(),
        };
        assert_eq!(config.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_user_friendly_message() {
        let err = ContactBookError::InvalidConfigValueError {
            field: "format".to_string(),
            value: "xml".to_string(),
            reason: "Unsupported format".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Invalid value 'xml' for 'format': Unsupported format"
        );
    }
}
