use thiserror::Error;

/// Roster-specific error types
#[derive(Debug, Error)]
pub enum RosterError {
    /// Starting lineup requested while the roster is below its minimum size
    #[error("A team must have at least {required} players to form a starting lineup ({enrolled} enrolled)")]
    InsufficientRoster { enrolled: usize, required: usize },
    /// Date of birth could not be turned into an age
    #[error("Invalid date of birth: {0}")]
    InvalidDate(String),
    /// Every number in the jersey pool is taken
    #[error("No jersey number available")]
    NoJerseyAvailable,
    /// Roster limits that cannot produce a lineup
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Failed to parse user input
    #[error("Parse error: {0}")]
    ParseError(String),
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using RosterError
pub type RosterResult<T> = Result<T, RosterError>;

impl From<std::num::ParseIntError> for RosterError {
    fn from(err: std::num::ParseIntError) -> Self {
        RosterError::ParseError(err.to_string())
    }
}

impl From<chrono::ParseError> for RosterError {
    fn from(err: chrono::ParseError) -> Self {
        RosterError::InvalidDate(err.to_string())
    }
}
