//! Error types for the Pico y Placa engine

use std::fmt;

use thiserror::Error;

/// Input field of a vehicle query that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryField {
    Plate,
    Date,
    Time,
}

impl QueryField {
    /// Field name as shown to users.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plate => "plate",
            Self::Date => "date",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for QueryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Plate does not match `XX-YYYY` / `XXX-YYYY`
    #[error("Invalid plate format: '{0}'. Expected XX-YYYY or XXX-YYYY, where X is an uppercase letter and Y a digit (e.g., PBX-1234)")]
    InvalidPlate(String),

    /// Date is not a real `YYYY-MM-DD` calendar date
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 2021-04-02)")]
    InvalidDate(String),

    /// Time is not a real `HH:MM` clock time
    #[error("Invalid time format: '{0}'. Expected HH:MM (e.g., 08:35, 19:30)")]
    InvalidTime(String),

    /// Unknown province selector
    #[error("Unknown province: '{0}'. Expected an ISO 3166-2 code such as EC-P")]
    InvalidProvince(String),

    /// Year cannot be represented as a calendar date
    #[error("Year {0} is outside the supported calendar range")]
    UnsupportedYear(i32),

    /// Holiday provider rejected or is missing credentials
    #[error("Holiday provider authorization failed: {0}")]
    RemoteAuth(String),

    /// Holiday provider could not answer
    #[error("Holiday lookup failed: {0}")]
    RemoteLookup(String),
}

impl EngineError {
    /// The query field this error refers to, for validation errors.
    #[must_use]
    pub fn field(&self) -> Option<QueryField> {
        match self {
            Self::InvalidPlate(_) => Some(QueryField::Plate),
            Self::InvalidDate(_) => Some(QueryField::Date),
            Self::InvalidTime(_) => Some(QueryField::Time),
            _ => None,
        }
    }

    /// Whether this error came from validating query input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.field().is_some()
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
