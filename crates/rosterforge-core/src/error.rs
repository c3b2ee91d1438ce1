//! Error types for RosterForge

use thiserror::Error;

/// Main error type for RosterForge operations
#[derive(Debug, Error)]
pub enum RosterError {
    /// A target month outside the 1..=12 range
    #[error("Invalid calendar month: {year}-{month:02}")]
    InvalidMonth {
        /// Requested year
        year: i32,
        /// Requested month (1-based)
        month: u32,
    },
}

/// Result type alias for RosterForge operations
pub type Result<T> = std::result::Result<T, RosterError>;
