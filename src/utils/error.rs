use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown department '{label}'")]
    UnknownDepartment { label: String },

    #[error("Unknown employment status '{code}'")]
    UnknownStatus { code: String },

    #[error("Invalid start date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Row {row}: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: Box<SeedError>,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("No employee records to insert")]
    EmptyRecordSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SeedError {
    /// Wraps a normalization error with the 1-based data row it came from.
    pub fn at_row(self, row: usize) -> Self {
        SeedError::InvalidRecord {
            row,
            source: Box::new(self),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SeedError::IoError(_) => ErrorCategory::Io,
            SeedError::TomlError(_)
            | SeedError::ConfigError { .. }
            | SeedError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SeedError::CsvError(_)
            | SeedError::SerializationError(_)
            | SeedError::UnknownDepartment { .. }
            | SeedError::UnknownStatus { .. }
            | SeedError::InvalidDate { .. }
            | SeedError::InvalidRecord { .. }
            | SeedError::ValidationError { .. }
            | SeedError::EmptyRecordSet => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Input => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SeedError::IoError(_) => {
                "Check that the input file exists and the output location is writable".to_string()
            }
            SeedError::CsvError(_) => {
                "Check the CSV headers: name,payroll_number,department,status,locker,start_date"
                    .to_string()
            }
            SeedError::TomlError(_) => "Fix the TOML syntax in the configuration file".to_string(),
            SeedError::SerializationError(_) => "Report this as a bug".to_string(),
            SeedError::ConfigError { .. }
            | SeedError::InvalidConfigValueError { .. }
            | SeedError::ValidationError { .. } => {
                "Review the configuration file and command line options".to_string()
            }
            SeedError::UnknownDepartment { .. } => {
                "Add the department label to [mapping.departments] or use a canonical code"
                    .to_string()
            }
            SeedError::UnknownStatus { .. } => {
                "Add the status code to [mapping.statuses] or use a canonical status".to_string()
            }
            SeedError::InvalidDate { .. } => "Write start dates as YYYY-MM-DD".to_string(),
            SeedError::InvalidRecord { source, .. } => source.recovery_suggestion(),
            SeedError::EmptyRecordSet => "Provide at least one employee row".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SeedError::IoError(e) => format!("File access failed: {}", e),
            SeedError::InvalidRecord { row, source } => {
                format!("Employee row {} rejected: {}", row, source.user_friendly_message())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeedError>;
